use crate::clubs::club_routes;
use crate::coach::coach_routes;
use crate::common::default_handler::default_handler;
use crate::common::routes::common_routes;
use crate::competitions::competition_routes;
use crate::AppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(common_routes())
            .merge(club_routes())
            .merge(competition_routes())
            .merge(coach_routes())
            .fallback(default_handler)
    }
}
