pub mod dashboard;

use crate::AppData;
use axum::Router;

pub fn club_routes() -> Router<AppData> {
    Router::new().merge(dashboard::routes::routes())
}
