//! Catalog product service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// Service for catalog CRUD operations.
///
/// Maps absent rows to [`AppError::NotFound`] for reads and updates, and keeps
/// delete idempotent from the caller's view.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a new product service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all products, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.repository.list().await
    }

    /// Creates a product and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the identifier is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let product = self.repository.insert(new_product).await?;
        tracing::info!(product_id = %product.product_id, "product created");
        Ok(product)
    }

    /// Retrieves a product by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product matches.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_product(&self, product_id: &str) -> Result<Product, AppError> {
        self.repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Product not found", json!({ "productId": product_id }))
            })
    }

    /// Applies a partial update and returns the updated row.
    ///
    /// Fields absent from the patch keep their stored values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product matches.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_product(
        &self,
        product_id: &str,
        patch: ProductPatch,
    ) -> Result<Product, AppError> {
        self.repository
            .update(product_id, patch)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Product not found", json!({ "productId": product_id }))
            })
    }

    /// Deletes a product.
    ///
    /// Idempotent: deleting an absent product succeeds without distinguishing
    /// the path taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_product(&self, product_id: &str) -> Result<(), AppError> {
        let deleted = self.repository.delete(product_id).await?;

        if !deleted {
            tracing::debug!(product_id, "delete matched no row");
        }

        Ok(())
    }

    /// Probes the backing database. Used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the database is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockProductRepository;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn sample_product(product_id: &str) -> Product {
        Product {
            product_id: product_id.to_string(),
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: Decimal::new(999, 2),
            stock_quantity: 5,
            category: Some("tools".to_string()),
            image_url: Some("http://x/img.png".to_string()),
            created_at: Utc::now(),
        }
    }

    fn sample_new_product(product_id: &str) -> NewProduct {
        NewProduct {
            product_id: product_id.to_string(),
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: Decimal::new(999, 2),
            stock_quantity: 5,
            category: "tools".to_string(),
            image_url: "http://x/img.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_product_success() {
        let mut mock_repo = MockProductRepository::new();

        let stored = sample_product("P1");
        mock_repo
            .expect_insert()
            .withf(|new_product| new_product.product_id == "P1")
            .times(1)
            .returning(move |_| Ok(stored.clone()));

        let service = ProductService::new(Arc::new(mock_repo));

        let result = service.create_product(sample_new_product("P1")).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().product_id, "P1");
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(Arc::new(mock_repo));

        let result = service.get_product("ghost").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut mock_repo = MockProductRepository::new();

        let stored = sample_product("P1");
        mock_repo
            .expect_find_by_id()
            .withf(|id| id == "P1")
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let service = ProductService::new(Arc::new(mock_repo));

        let result = service.get_product("P1").await;

        assert_eq!(result.unwrap().name, "Widget");
    }

    #[tokio::test]
    async fn test_update_product_not_found() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo.expect_update().times(1).returning(|_, _| Ok(None));

        let service = ProductService::new(Arc::new(mock_repo));

        let patch = ProductPatch {
            price: Some(Decimal::new(1999, 2)),
            ..Default::default()
        };
        let result = service.update_product("ghost", patch).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_product_is_idempotent() {
        let mut mock_repo = MockProductRepository::new();

        // No matching row: the repository reports false, the service still
        // succeeds.
        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = ProductService::new(Arc::new(mock_repo));

        assert!(service.delete_product("ghost").await.is_ok());
    }

    #[tokio::test]
    async fn test_list_products_passthrough() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![sample_product("P1"), sample_product("P2")]));

        let service = ProductService::new(Arc::new(mock_repo));

        let products = service.list_products().await.unwrap();
        assert_eq!(products.len(), 2);
    }
}
