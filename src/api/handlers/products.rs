//! Handlers for the product CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::product::{
    CreateProductRequest, MessageResponse, ProductResponse, UpdateProductRequest,
};
use crate::domain::entities::Product;
use crate::error::AppError;
use crate::state::AppState;

fn product_to_response(p: Product) -> ProductResponse {
    ProductResponse {
        product_id: p.product_id,
        name: p.name,
        description: p.description,
        price: p.price,
        quantity: p.stock_quantity,
        category: p.category,
        image_url: p.image_url,
        created_at: p.created_at,
    }
}

/// Lists all products.
///
/// # Endpoint
///
/// `GET /products`
///
/// Whether this route requires authentication is decided by routing
/// configuration (`CATALOG_PUBLIC`), not here.
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.product_service.list_products().await?;

    Ok(Json(products.into_iter().map(product_to_response).collect()))
}

/// Creates a new product.
///
/// # Endpoint
///
/// `POST /products`
///
/// # Errors
///
/// Returns 400 if required fields are missing or malformed.
/// Returns 409 if the product identifier is already taken.
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    payload.validate()?;
    let new_product = payload.try_into_new_product()?;

    let product = state.product_service.create_product(new_product).await?;

    Ok((StatusCode::CREATED, Json(product_to_response(product))))
}

/// Retrieves a single product by its identifier.
///
/// # Endpoint
///
/// `GET /products/{productId}`
///
/// # Errors
///
/// Returns 404 if no product matches.
pub async fn get_product_handler(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.get_product(&product_id).await?;

    Ok(Json(product_to_response(product)))
}

/// Partially updates a product.
///
/// # Endpoint
///
/// `PUT /products/{productId}`
///
/// Any subset of updatable fields may be supplied; absent fields keep their
/// stored values. `createdAt` never changes.
///
/// # Errors
///
/// Returns 400 if the body contains no updatable fields.
/// Returns 404 if no product matches.
pub async fn update_product_handler(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;
    let patch = payload.try_into_patch()?;

    let product = state
        .product_service
        .update_product(&product_id, patch)
        .await?;

    Ok(Json(product_to_response(product)))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /products/{productId}`
///
/// Idempotent from the caller's view: deleting an absent product still
/// returns the confirmation.
pub async fn delete_product_handler(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.product_service.delete_product(&product_id).await?;

    Ok(Json(MessageResponse {
        message: format!("Product {product_id} deleted"),
    }))
}
