//! Repository trait for product data access.

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for catalog products.
///
/// Every operation issues exactly one parameterized statement; caller-supplied
/// values are always bound, never interpolated into statement text. The trait
/// is the uniform seam between handler logic and backend policy: a
/// stored-procedure-backed implementation plugs in alongside
/// [`crate::infrastructure::persistence::PgProductRepository`] without
/// touching callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Lists all products, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Product>, AppError>;

    /// Inserts a new product and returns the stored row, including the
    /// server-assigned `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `product_id` already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_product: NewProduct) -> Result<Product, AppError>;

    /// Finds a product by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Product))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, product_id: &str) -> Result<Option<Product>, AppError>;

    /// Partially updates a product in a single statement.
    ///
    /// Only fields present in [`ProductPatch`] are modified; absent fields
    /// retain their stored values. `created_at` is never touched.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Product))` with the updated row
    /// - `Ok(None)` if no row matches `product_id`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        product_id: &str,
        patch: ProductPatch,
    ) -> Result<Option<Product>, AppError>;

    /// Hard-deletes a product.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, product_id: &str) -> Result<bool, AppError>;

    /// Probes backend connectivity. Used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
