pub mod routes;

use crate::common::WindowQuery;
use crate::{ApiError, ApiResult, AppData};
use axum::extract::{Path, Query, State};
use axum::Json;
use engine::{ClubDashboard, DashboardAssembler};
use log::debug;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ClubDashboardRequest {
    club_id: String,
}

pub async fn club_dashboard_action(
    State(state): State<AppData>,
    Path(route_params): Path<ClubDashboardRequest>,
    Query(query): Query<WindowQuery>,
) -> ApiResult<Json<ClubDashboard>> {
    let window = query.match_window();

    debug!("dashboard for club {} (window {})", route_params.club_id, window);

    let data = Arc::clone(&state.data);

    let dashboard = tokio::task::spawn_blocking(move || {
        DashboardAssembler::club_dashboard(&data, &route_params.club_id, window)
    })
    .await
    .map_err(|e| ApiError::InternalError(format!("dashboard task failed: {}", e)))??;

    Ok(Json(dashboard))
}
