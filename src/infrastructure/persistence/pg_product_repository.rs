//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// Row mapping for the `products` table.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    product_id: String,
    name: String,
    description: String,
    price: Decimal,
    stock_quantity: i32,
    category: Option<String>,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            product_id: row.product_id,
            name: row.name,
            description: row.description,
            price: row.price,
            stock_quantity: row.stock_quantity,
            category: row.category,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for product storage and retrieval.
///
/// Every statement binds caller-supplied values as typed parameters; no value
/// is ever interpolated into SQL text. Connections are checked out of the
/// shared bounded pool per statement and returned on every exit path.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT product_id, name, description, price, stock_quantity,
                   category, image_url, created_at
            FROM products
            ORDER BY created_at DESC, product_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn insert(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products
                (product_id, name, description, price, stock_quantity, category, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING product_id, name, description, price, stock_quantity,
                      category, image_url, created_at
            "#,
        )
        .bind(&new_product.product_id)
        .bind(&new_product.name)
        .bind(&new_product.description)
        .bind(new_product.price)
        .bind(new_product.stock_quantity)
        .bind(&new_product.category)
        .bind(&new_product.image_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, product_id: &str) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT product_id, name, description, price, stock_quantity,
                   category, image_url, created_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn update(
        &self,
        product_id: &str,
        patch: ProductPatch,
    ) -> Result<Option<Product>, AppError> {
        // Absent patch fields coalesce to the stored values, so a partial
        // update is one statement with no read-modify-write window.
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products SET
                name           = COALESCE($2, name),
                description    = COALESCE($3, description),
                price          = COALESCE($4, price),
                stock_quantity = COALESCE($5, stock_quantity),
                category       = COALESCE($6, category),
                image_url      = COALESCE($7, image_url)
            WHERE product_id = $1
            RETURNING product_id, name, description, price, stock_quantity,
                      category, image_url, created_at
            "#,
        )
        .bind(product_id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.price)
        .bind(patch.stock_quantity)
        .bind(patch.category)
        .bind(patch.image_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn delete(&self, product_id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
