//! Sales report handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use kasir_core::{DailySalesSummary, DateRange};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::state::AppState;

/// `?start=YYYY-MM-DD&end=YYYY-MM-DD`
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// `GET /api/sales/summary/today`
pub async fn summary_today(State(state): State<AppState>) -> ApiResult<Json<DailySalesSummary>> {
    let summary = state.db.reports().summarize_today().await?;
    Ok(Json(summary))
}

/// `GET /api/sales/summary?start=&end=`, both dates inclusive.
pub async fn summary_range(
    State(state): State<AppState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> ApiResult<Json<DailySalesSummary>> {
    let Query(query) = query?;
    let range = DateRange::parse(&query.start, &query.end)?;
    let summary = state.db.reports().summarize(range).await?;
    Ok(Json(summary))
}
