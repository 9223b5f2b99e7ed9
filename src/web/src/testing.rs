use crate::{AppData, Clock, ProtacticServer};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDateTime;
use database::{DatabaseGenerator, DatabaseLoader, DatasetSource};
use serde_json::Value;
use tower::ServiceExt;

/// Sample dataset with the clock pinned before the next Aurora fixture.
pub fn sample_app() -> Router {
    let database = DatabaseLoader::load(&DatasetSource::Embedded).expect("sample dataset loads");
    let data = DatabaseGenerator::generate(&database).expect("sample dataset is consistent");

    let now = NaiveDateTime::parse_from_str("2025-05-20 12:00", "%Y-%m-%d %H:%M")
        .expect("valid test timestamp");

    ProtacticServer::router(AppData::new(data, Clock::Fixed(now)))
}

pub async fn get(uri: &str) -> Response {
    get_with_headers(uri, &[]).await
}

pub async fn get_with_headers(uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut request = Request::builder().uri(uri);

    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    sample_app()
        .oneshot(request.body(Body::empty()).expect("valid request"))
        .await
        .expect("router is infallible")
}

pub async fn get_json(uri: &str) -> (StatusCode, Value) {
    into_json(get(uri).await).await
}

pub async fn into_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");

    (status, serde_json::from_slice(&bytes).expect("body is JSON"))
}
