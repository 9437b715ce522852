use crate::domain::Shoe;
use crate::transport::http::handlers::common::{decode_body, require_id, ApiError, QueryPairs};
use crate::transport::http::types::{AppState, IdQuery};
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = "/create",
    request_body = Shoe,
    responses(
        (status = 200, description = "Shoe created under a new id", body = Shoe),
        (status = 405, description = "Wrong method", body = String),
        (status = 500, description = "Malformed body or insert failure", body = String)
    )
)]
pub async fn create_shoe_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Shoe>, ApiError> {
    // A caller-supplied id is decoded (so it must be a string) and then discarded.
    let fields = decode_body::<Shoe>(&body)?.into_fields();
    let shoe = state
        .shoes
        .create(fields)
        .await
        .map_err(|e| ApiError::internal("", e))?;
    Ok(Json(shoe))
}

#[utoipa::path(
    get,
    path = "/getall",
    responses(
        (status = 200, description = "Every stored shoe", body = [Shoe]),
        (status = 405, description = "Wrong method", body = String),
        (status = 500, description = "Query or decode failure", body = String)
    )
)]
pub async fn list_shoes_handler(State(state): State<AppState>) -> Result<Json<Vec<Shoe>>, ApiError> {
    let shoes = state
        .shoes
        .list()
        .await
        .map_err(|e| ApiError::internal("", e))?;
    Ok(Json(shoes))
}

#[utoipa::path(
    get,
    path = "/getbyid",
    params(IdQuery),
    responses(
        (status = 200, description = "The matching shoe", body = Shoe),
        (status = 400, description = "Missing id", body = String),
        (status = 404, description = "No shoe with this id", body = String),
        (status = 405, description = "Wrong method", body = String)
    )
)]
pub async fn get_shoe_handler(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Shoe>, ApiError> {
    let id = require_id(query)?;
    // Lookup failures are reported the same way as a miss.
    match state.shoes.get(&id).await {
        Ok(Some(shoe)) => Ok(Json(shoe)),
        Ok(None) | Err(_) => Err(ApiError::NotFound),
    }
}

#[utoipa::path(
    put,
    path = "/update",
    params(IdQuery),
    request_body = Shoe,
    responses(
        (status = 200, description = "The shoe after the update", body = Shoe),
        (status = 400, description = "Missing id", body = String),
        (status = 404, description = "No shoe with this id", body = String),
        (status = 405, description = "Wrong method", body = String),
        (status = 500, description = "Malformed body or update failure", body = String)
    )
)]
pub async fn update_shoe_handler(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    body: Bytes,
) -> Result<Json<Shoe>, ApiError> {
    let id = require_id(query)?;
    let fields = decode_body::<Shoe>(&body)?.into_fields();
    let updated = state
        .shoes
        .update(&id, fields)
        .await
        .map_err(|e| ApiError::internal("Error updating shoe: ", e))?;
    updated.map(Json).ok_or(ApiError::NotFound)
}

#[utoipa::path(
    delete,
    path = "/delete",
    params(IdQuery),
    responses(
        (status = 200, description = "Shoe deleted (empty body)"),
        (status = 400, description = "Missing id", body = String),
        (status = 404, description = "No shoe with this id", body = String),
        (status = 405, description = "Wrong method", body = String),
        (status = 500, description = "Delete failure", body = String)
    )
)]
pub async fn delete_shoe_handler(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let id = require_id(query)?;
    match state.shoes.delete(&id).await {
        Ok(true) => Ok(StatusCode::OK),
        Ok(false) => Err(ApiError::NotFound),
        Err(e) => Err(ApiError::internal("Error deleting shoe: ", e)),
    }
}
