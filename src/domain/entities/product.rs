//! Product entity, the sole persisted type of the catalog.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A catalog product.
///
/// `product_id` is caller-assigned and identifies at most one row.
/// `created_at` is set by the database at insertion and never changes.
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new product.
///
/// All fields are required at creation time; `category` and `image_url`
/// become nullable columns only for rows predating the current schema.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub category: String,
    pub image_url: String,
}

/// Partial update for an existing product.
///
/// `None` fields are left unchanged; there is no way to clear a stored value
/// through an update.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i32>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl ProductPatch {
    /// Returns true if no field is set, i.e. the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock_quantity.is_none()
            && self.category.is_none()
            && self.image_url.is_none()
    }
}
