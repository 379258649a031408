//! DTOs for the product CRUD endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{NewProduct, ProductPatch};
use crate::error::AppError;

/// Request body for `POST /products`.
///
/// Every field is required. Fields are optional at the serde layer so that
/// presence can be checked explicitly and all missing fields reported in a
/// single response; `0` is a legitimate `price` and `quantity`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "productId must not be empty"))]
    pub product_id: Option<String>,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,

    pub price: Option<Decimal>,

    pub quantity: Option<i32>,

    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: Option<String>,

    #[validate(url(message = "imageUrl must be a valid URL"))]
    pub image_url: Option<String>,
}

impl CreateProductRequest {
    /// Checks that every required field is present and converts into the
    /// domain creation type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming every missing field.
    pub fn try_into_new_product(self) -> Result<NewProduct, AppError> {
        let mut missing = Vec::new();

        if self.product_id.is_none() {
            missing.push("productId");
        }
        if self.name.is_none() {
            missing.push("name");
        }
        if self.description.is_none() {
            missing.push("description");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        if self.quantity.is_none() {
            missing.push("quantity");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        if self.image_url.is_none() {
            missing.push("imageUrl");
        }

        if !missing.is_empty() {
            return Err(AppError::bad_request(
                "Missing required fields",
                json!({ "missing": missing }),
            ));
        }

        // Invariant: every field is Some past the missing check above.
        let (
            Some(product_id),
            Some(name),
            Some(description),
            Some(price),
            Some(quantity),
            Some(category),
            Some(image_url),
        ) = (
            self.product_id,
            self.name,
            self.description,
            self.price,
            self.quantity,
            self.category,
            self.image_url,
        )
        else {
            unreachable!("all fields verified present");
        };

        Ok(NewProduct {
            product_id,
            name,
            description,
            price,
            stock_quantity: quantity,
            category,
            image_url,
        })
    }
}

/// Request body for `PUT /products/{productId}`.
///
/// Any subset of updatable fields; absent fields keep their stored values.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,

    pub price: Option<Decimal>,

    pub quantity: Option<i32>,

    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: Option<String>,

    #[validate(url(message = "imageUrl must be a valid URL"))]
    pub image_url: Option<String>,
}

impl UpdateProductRequest {
    /// Converts into a domain patch, rejecting bodies that update nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when no updatable field is present.
    pub fn try_into_patch(self) -> Result<ProductPatch, AppError> {
        let patch = ProductPatch {
            name: self.name,
            description: self.description,
            price: self.price,
            stock_quantity: self.quantity,
            category: self.category,
            image_url: self.image_url,
        };

        if patch.is_empty() {
            return Err(AppError::bad_request(
                "No updatable fields provided",
                json!({
                    "updatable": ["name", "description", "price", "quantity", "category", "imageUrl"]
                }),
            ));
        }

        Ok(patch)
    }
}

/// JSON representation of a product.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Confirmation message returned by operations without a resource body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
