//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::ProductService;
use crate::infrastructure::auth::CredentialVerifier;
use crate::infrastructure::persistence::PgProductRepository;

/// Application state shared across all request handlers.
///
/// The verifier is a trait object so tests can substitute the fixed-key
/// implementation for the remote-key-set one.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService<PgProductRepository>>,
    pub credential_verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Creates application state from its service components.
    pub fn new(
        product_service: Arc<ProductService<PgProductRepository>>,
        credential_verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            product_service,
            credential_verifier,
        }
    }
}
