//! Fixed-key credential verifier for tests and offline environments.

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use super::verifier::{AuthClaims, CredentialVerifier, rejected, strip_bearer};
use crate::error::AppError;

/// Verifies RS256 bearer tokens against a single public key supplied at
/// construction time. No network access.
///
/// Temporal claims are checked exactly as in the production verifier; only
/// the key-resolution step differs, so handler and middleware behavior under
/// test matches production.
pub struct StaticKeyVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl StaticKeyVerifier {
    /// Creates a verifier from an RSA public key in PEM format.
    ///
    /// # Errors
    ///
    /// Returns an error if the PEM is not a parseable RSA public key.
    pub fn from_rsa_pem(public_key_pem: &[u8]) -> Result<Self, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_nbf = true;

        Ok(Self {
            decoding_key: DecodingKey::from_rsa_pem(public_key_pem)?,
            validation,
        })
    }
}

#[async_trait]
impl CredentialVerifier for StaticKeyVerifier {
    async fn verify(&self, raw_token: &str) -> Result<AuthClaims, AppError> {
        let token = strip_bearer(raw_token);

        decode::<AuthClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "credential rejected");
                rejected()
            })
    }
}
