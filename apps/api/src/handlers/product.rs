//! Product catalog handlers.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kasir_core::{Product, ProductInput};
use kasir_db::DbError;

use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /api/product`
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.db.products().list().await?;
    Ok(Json(products))
}

/// `POST /api/product`, 201 with the stored product.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let Json(input) = payload?;
    let product = state.db.products().create(&input).await?;

    tracing::info!(id = product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// `GET /api/product/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    let product = state
        .db
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| DbError::product_not_found(id))?;
    Ok(Json(product))
}

/// `PUT /api/product/{id}`, full replace.
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let product = state.db.products().update(id, &input).await?;
    Ok(Json(product))
}

/// `DELETE /api/product/{id}`
pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<serde_json::Value>> {
    let Path(id) = id?;
    state.db.products().delete(id).await?;

    tracing::info!(id, "Product deleted");
    Ok(Json(serde_json::json!({ "message": "product deleted" })))
}
