//! Credential verification against a remote JWKS endpoint.

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use tokio::sync::RwLock;

use super::verifier::{AuthClaims, CredentialVerifier, rejected, strip_bearer};
use crate::error::AppError;

/// Verifies RS256 bearer tokens against the issuer's published key set.
///
/// The key set is fetched from the discovery URL on first use and cached
/// process-wide. A token referencing an unknown `kid` triggers one re-fetch
/// before being rejected, which covers issuer key rotation without an
/// explicit invalidation schedule.
pub struct JwksVerifier {
    http: reqwest::Client,
    jwks_url: String,
    keys: RwLock<Option<JwkSet>>,
}

impl JwksVerifier {
    /// Creates a verifier for the given JWKS discovery URL.
    pub fn new(jwks_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            jwks_url,
            keys: RwLock::new(None),
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        // exp is required by default; nbf is checked when the issuer sets it.
        validation.validate_nbf = true;
        validation
    }

    /// Fetches the key set from the discovery endpoint.
    ///
    /// A fetch failure rejects the credential like any other verification
    /// failure; the transport error is only logged.
    async fn fetch_keys(&self) -> Result<JwkSet, AppError> {
        let response = self
            .http
            .get(&self.jwks_url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| {
                tracing::warn!(url = %self.jwks_url, error = %e, "key set fetch failed");
                rejected()
            })?;

        response.json::<JwkSet>().await.map_err(|e| {
            tracing::warn!(url = %self.jwks_url, error = %e, "key set response was not valid JWKS");
            rejected()
        })
    }

    /// Resolves the decoding key for a key id, re-fetching the set on a miss.
    async fn decoding_key_for(&self, kid: &str) -> Result<DecodingKey, AppError> {
        {
            let cached = self.keys.read().await;
            if let Some(jwk) = cached.as_ref().and_then(|set| set.find(kid)) {
                return DecodingKey::from_jwk(jwk).map_err(|e| {
                    tracing::warn!(kid, error = %e, "cached signing key is unusable");
                    rejected()
                });
            }
        }

        let fresh = self.fetch_keys().await?;
        let key = match fresh.find(kid) {
            Some(jwk) => DecodingKey::from_jwk(jwk).map_err(|e| {
                tracing::warn!(kid, error = %e, "fetched signing key is unusable");
                rejected()
            }),
            None => {
                tracing::warn!(kid, "token references a key id absent from the issuer key set");
                Err(rejected())
            }
        };

        // Keep the freshest set either way.
        *self.keys.write().await = Some(fresh);

        key
    }
}

#[async_trait]
impl CredentialVerifier for JwksVerifier {
    async fn verify(&self, raw_token: &str) -> Result<AuthClaims, AppError> {
        let token = strip_bearer(raw_token);

        let header = decode_header(token).map_err(|e| {
            tracing::debug!(error = %e, "malformed token header");
            rejected()
        })?;

        let kid = header.kid.ok_or_else(|| {
            tracing::debug!("token header carries no key id");
            rejected()
        })?;

        let key = self.decoding_key_for(&kid).await?;

        let data = decode::<AuthClaims>(token, &key, &Self::validation()).map_err(|e| {
            tracing::debug!(error = %e, "credential rejected");
            rejected()
        })?;

        Ok(data.claims)
    }
}
