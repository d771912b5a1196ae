//! Checkout and ledger handlers.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kasir_core::{CheckoutRequest, Transaction};
use kasir_db::DbError;

use crate::error::ApiResult;
use crate::state::AppState;

/// `POST /api/checkout`
///
/// 201 with the recorded transaction. Any failure leaves stock and ledger
/// exactly as they were.
pub async fn checkout(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let Json(request) = payload?;
    let transaction = state.db.transactions().checkout(&request).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// `GET /api/transaction/{id}`
pub async fn get_transaction(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Transaction>> {
    let Path(id) = id?;
    let transaction = state
        .db
        .transactions()
        .get_by_id(id)
        .await?
        .ok_or_else(|| DbError::transaction_not_found(id))?;
    Ok(Json(transaction))
}
