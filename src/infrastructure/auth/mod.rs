//! Bearer-credential verification against an issuer's public-key set.
//!
//! Provides a [`CredentialVerifier`] trait with two implementations:
//! - [`JwksVerifier`] - Production verifier; fetches and caches the issuer's
//!   published key set
//! - [`StaticKeyVerifier`] - Fixed-key verifier for tests and offline use

mod jwks_verifier;
mod static_verifier;
mod verifier;

pub use jwks_verifier::JwksVerifier;
pub use static_verifier::StaticKeyVerifier;
pub use verifier::{AuthClaims, CredentialVerifier, strip_bearer};
