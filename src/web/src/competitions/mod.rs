pub mod stats;

use crate::AppData;
use axum::Router;

pub fn competition_routes() -> Router<AppData> {
    Router::new().merge(stats::routes::routes())
}
