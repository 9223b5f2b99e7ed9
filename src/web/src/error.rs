use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use engine::AnalyticsError;
use serde_json::json;

/// Custom error type for API handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalError(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<AnalyticsError> for ApiError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::ClubNotFound(_)
            | AnalyticsError::CompetitionNotFound(_)
            | AnalyticsError::NoAffiliatedClub => ApiError::NotFound(err.to_string()),
        }
    }
}

/// Helper type for handler results
pub type ApiResult<T> = Result<T, ApiError>;
