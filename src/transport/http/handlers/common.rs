use crate::storage::StoreError;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::transport::http::types::IdQuery;

/// Failure of a shoe endpoint. Every variant renders as a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Only {0} method is supported.")]
    MethodNotAllowed(&'static str),

    #[error("ID is required.")]
    MissingId,

    /// The request body is not a decodable shoe. Answered with 500, not 400.
    #[error("{0}")]
    MalformedBody(String),

    #[error("Shoe not found.")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MissingId => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn internal(context: &str, e: StoreError) -> Self {
        ApiError::Internal(format!("{}{}", context, e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Fallback for a bound path hit with the wrong verb.
pub fn only(
    verb: &'static str,
) -> impl FnOnce() -> std::future::Ready<Response> + Clone + Send + Sync + 'static {
    move || std::future::ready(ApiError::MethodNotAllowed(verb).into_response())
}

/// Raw query string pairs, in request order.
pub type QueryPairs = Vec<(String, String)>;

/// Extracts the required `id` query parameter. A missing, empty or unparsable
/// query string all count as "no id".
pub fn require_id(query: Result<Query<QueryPairs>, QueryRejection>) -> Result<String, ApiError> {
    let Ok(Query(pairs)) = query else {
        return Err(ApiError::MissingId);
    };
    IdQuery::from_pairs(pairs)
        .id()
        .map(str::to_string)
        .ok_or(ApiError::MissingId)
}

/// Decodes a JSON request body without looking at `Content-Type`.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}
