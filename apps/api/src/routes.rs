//! Router configuration.
//!
//! This module sets up the axum router with all routes and middleware.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsOrigins;
use crate::handlers::{checkout, health, product, report};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
/// - `GET /api/info` - Endpoint listing and build metadata
///
/// ## Catalog
/// - `GET /api/product` - List products
/// - `POST /api/product` - Create product
/// - `GET /api/product/{id}` - Get product
/// - `PUT /api/product/{id}` - Replace product
/// - `DELETE /api/product/{id}` - Delete product
///
/// ## Sales
/// - `POST /api/checkout` - Atomic checkout
/// - `GET /api/transaction/{id}` - Read a transaction back
/// - `GET /api/sales/summary/today` - Today's summary
/// - `GET /api/sales/summary?start=&end=` - Summary over a date range
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors_origins);

    let api_routes = Router::new()
        .route("/info", get(health::api_info))
        // Catalog
        .route(
            "/product",
            get(product::list_products).post(product::create_product),
        )
        .route(
            "/product/{id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        // Sales
        .route("/checkout", post(checkout::checkout))
        .route("/transaction/{id}", get(checkout::get_transaction))
        .route("/sales/summary/today", get(report::summary_today))
        .route("/sales/summary", get(report::summary_range));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS for the configured origins; any method and header.
fn build_cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => AllowOrigin::list(list.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
