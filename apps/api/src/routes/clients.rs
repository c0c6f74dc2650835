//! `/api/clients` handlers.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use ironmonger_core::{Client, NewClient};

use super::Deleted;
use crate::error::ApiResult;
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Client>>> {
    Ok(Json(state.clients.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewClient>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Client>)> {
    let Json(payload) = payload?;
    let client = state.clients.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Client>> {
    let Path(id) = id?;
    Ok(Json(state.clients.get(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<NewClient>, JsonRejection>,
) -> ApiResult<Json<Client>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    Ok(Json(state.clients.update(id, &payload).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Deleted>> {
    let Path(id) = id?;
    state.clients.delete(id).await?;
    Ok(Json(Deleted { deleted: id }))
}
