use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use onboarding_core::state::StoreError;
use serde::Serialize;
use utoipa::ToSchema;

/// Error body, `{"detail": "..."}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Failure of a handler, rendered as a status code plus [`ErrorResponse`]
#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
    Internal(String),
}

impl ApiError {
    /// Map a store error, using `detail` for the 404 body
    pub fn from_store(err: StoreError, detail: &'static str) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound(detail),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::from_store(err, "Not found")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail.to_string()),
            ApiError::Internal(detail) => {
                tracing::error!("Request failed: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
