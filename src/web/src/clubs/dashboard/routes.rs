use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/api/clubs/{club_id}/dashboard",
        get(super::club_dashboard_action),
    )
}
