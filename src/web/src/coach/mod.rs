pub mod home;

use crate::AppData;
use axum::Router;

pub fn coach_routes() -> Router<AppData> {
    Router::new().merge(home::routes::routes())
}
