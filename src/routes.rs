//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`        - Health check: DB connectivity (public)
//! - `GET /products`      - Catalog list (public by default, see below)
//! - everything else      - Bearer credential required
//!
//! # List-route authentication
//!
//! Whether the catalog list requires authentication is an explicit,
//! reviewable decision made here from `Config::catalog_public`: when `false`
//! the list route joins the protected set. All other product routes are
//! always protected.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer credential verification on protected routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `catalog_public` - when `true`, `GET /products` is served without
///   authentication; when `false`, it requires a bearer credential like every
///   other product route
pub fn app_router(state: AppState, catalog_public: bool) -> NormalizePath<Router> {
    let mut protected = api::routes::protected_routes();
    let mut open = Router::new();

    if catalog_public {
        open = open.merge(api::routes::list_route());
    } else {
        protected = protected.merge(api::routes::list_route());
    }

    let protected =
        protected.route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(protected)
        .merge(open)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
