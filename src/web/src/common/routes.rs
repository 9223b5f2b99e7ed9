use crate::AppData;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

async fn health_action() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn common_routes() -> Router<AppData> {
    Router::new().route("/api/health", get(health_action))
}
