use crate::ApiError;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use log::debug;

pub async fn default_handler(uri: Uri) -> Response {
    debug!("no route for {}", uri.path());

    ApiError::NotFound(format!("route '{}' not found", uri.path())).into_response()
}
