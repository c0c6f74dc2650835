//! `/api/reports` handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use ironmonger_core::{SalesSummary, TopProduct};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::AppState;

pub async fn sales_today(State(state): State<AppState>) -> ApiResult<Json<SalesSummary>> {
    Ok(Json(state.sales.sales_today().await?))
}

#[derive(Debug, Deserialize)]
pub struct TopProductsQuery {
    pub limit: Option<i64>,
}

/// `GET /api/reports/top-products?limit=N`.
///
/// Out-of-range limits are clamped rather than rejected.
pub async fn top_products(
    State(state): State<AppState>,
    query: Result<Query<TopProductsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<TopProduct>>> {
    let Query(query) = query?;
    let limit = query
        .limit
        .map(|limit| u32::try_from(limit.max(0)).unwrap_or(u32::MAX));
    Ok(Json(state.sales.top_products(limit).await?))
}
