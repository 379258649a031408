//! Credential verifier trait and claims type.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Claims extracted from a verified bearer credential.
///
/// Derived per request, never persisted. Used only to authorize the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Subject identity asserted by the issuer.
    pub sub: String,
    /// Token scope, when the issuer grants one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// Trait for verifying bearer credentials against an issuer's public keys.
///
/// Implementations accept the raw header value (a `"Bearer "` prefix is
/// stripped if present) and must collapse every failure mode (bad signature,
/// expired, malformed, key-set unavailable) into a single generic
/// [`AppError::Unauthorized`], logging the specific cause internally.
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::JwksVerifier`] - Remote key set with in-process cache
/// - [`crate::infrastructure::auth::StaticKeyVerifier`] - Fixed-key fixture for tests
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verifies a credential and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on any verification failure.
    async fn verify(&self, raw_token: &str) -> Result<AuthClaims, AppError>;
}

/// Removes a `"Bearer "` scheme prefix and surrounding whitespace, if any.
pub fn strip_bearer(raw: &str) -> &str {
    raw.trim().strip_prefix("Bearer ").unwrap_or(raw).trim()
}

/// The one credential rejection returned to callers.
///
/// The cause is deliberately not distinguished; callers learn only that the
/// credential was rejected.
pub(crate) fn rejected() -> AppError {
    AppError::unauthorized(
        "Unauthorized",
        json!({ "reason": "Invalid or expired credential" }),
    )
}
