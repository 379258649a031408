//! API route configuration.
//!
//! Routes are split into an open set and a protected set so the auth
//! requirement of every endpoint is explicit and reviewable here rather than
//! implied by handler internals. The catalog list route is placed into one
//! set or the other by [`crate::routes::app_router`] based on configuration.

use crate::api::handlers::{
    create_product_handler, delete_product_handler, get_product_handler, list_products_handler,
    update_product_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Catalog list route.
///
/// # Endpoints
///
/// - `GET /products` - List all products
///
/// Open by default (`CATALOG_PUBLIC=true`); the top-level router moves it
/// behind authentication when the catalog is configured private.
pub fn list_route() -> Router<AppState> {
    Router::new().route("/products", get(list_products_handler))
}

/// Routes that always require a verified bearer credential.
///
/// # Endpoints
///
/// - `POST   /products`              - Create a product
/// - `GET    /products/{productId}`  - Fetch a product by id
/// - `PUT    /products/{productId}`  - Partially update a product
/// - `DELETE /products/{productId}`  - Delete a product
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product_handler))
        .route(
            "/products/{product_id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
}
