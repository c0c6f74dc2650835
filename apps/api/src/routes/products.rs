//! `/api/products` handlers.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use ironmonger_core::{NewProduct, Product};

use super::Deleted;
use crate::error::ApiResult;
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(state.products.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let Json(payload) = payload?;
    let product = state.products.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    Ok(Json(state.products.get(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    Ok(Json(state.products.update(id, &payload).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Deleted>> {
    let Path(id) = id?;
    state.products.delete(id).await?;
    Ok(Json(Deleted { deleted: id }))
}
