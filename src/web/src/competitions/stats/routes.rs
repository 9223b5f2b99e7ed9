use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/api/competitions/{competition_id}/clubs/{club_id}/stats",
        get(super::competition_club_stats_action),
    )
}
