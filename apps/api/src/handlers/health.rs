//! Health and service metadata handlers.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `OK` or `UNAVAILABLE`.
    pub status: &'static str,
    pub message: &'static str,
}

/// Health check endpoint. 503 when the database does not answer.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    if state.db.health_check().await {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "OK",
                message: "API is running",
            }),
        )
    } else {
        tracing::warn!("Health check failed: database not responding");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "UNAVAILABLE",
                message: "database unavailable",
            }),
        )
    }
}

/// One documented route.
#[derive(Debug, Serialize)]
pub struct EndpointDetail {
    pub path: &'static str,
    pub description: &'static str,
}

/// `/api/info` response: routes grouped by method, then by name.
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub endpoint: BTreeMap<&'static str, BTreeMap<&'static str, EndpointDetail>>,
    pub environment: String,
    pub message: String,
    pub version: String,
}

/// `(method, name, path, description)` for every public route.
const ENDPOINTS: &[(&str, &str, &str, &str)] = &[
    ("GET", "health", "/health", "health check endpoint"),
    ("GET", "list_products", "/api/product", "get all products"),
    ("GET", "get_product", "/api/product/{id}", "get a single product"),
    ("GET", "get_transaction", "/api/transaction/{id}", "get a transaction with its lines"),
    ("GET", "sales_summary_today", "/api/sales/summary/today", "sales summary for today"),
    ("GET", "sales_summary", "/api/sales/summary", "sales summary between start and end (YYYY-MM-DD)"),
    ("POST", "create_product", "/api/product", "create a new product"),
    ("POST", "checkout", "/api/checkout", "check out items and record a transaction"),
    ("PUT", "update_product", "/api/product/{id}", "update all fields"),
    ("DELETE", "delete_product", "/api/product/{id}", "delete a product"),
];

/// Lists the API's routes with environment, message and version.
pub async fn api_info(State(state): State<AppState>) -> Json<ApiInfoResponse> {
    let mut endpoint: BTreeMap<_, BTreeMap<_, _>> = BTreeMap::new();
    for &(method, name, path, description) in ENDPOINTS {
        endpoint
            .entry(method)
            .or_default()
            .insert(name, EndpointDetail { path, description });
    }

    Json(ApiInfoResponse {
        endpoint,
        environment: state.config.environment.clone(),
        message: state.config.message.clone(),
        version: state.config.version.clone(),
    })
}
