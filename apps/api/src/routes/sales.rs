//! `/api/sales` handlers.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use ironmonger_core::{NewSale, Sale};

use crate::error::ApiResult;
use crate::AppState;

/// `POST /api/sales`: records a sale atomically.
///
/// Subtotals and totals in the response are computed by the server; any
/// client-sent subtotal is ignored.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewSale>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Sale>)> {
    let Json(payload) = payload?;
    let sale = state.sales.create_sale(&payload).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}

/// `GET /api/sales`: headers only, newest first.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Sale>>> {
    Ok(Json(state.sales.list_sales().await?))
}

/// `GET /api/sales/{id}`: header plus items in insertion order.
pub async fn detail(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Sale>> {
    let Path(id) = id?;
    Ok(Json(state.sales.sale_detail(id).await?))
}
