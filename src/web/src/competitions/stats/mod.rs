pub mod routes;

use crate::common::WindowQuery;
use crate::{ApiError, ApiResult, AppData};
use axum::extract::{Path, Query, State};
use axum::Json;
use engine::{CompetitionClubStats, DashboardAssembler};
use log::debug;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct CompetitionClubStatsRequest {
    competition_id: String,
    club_id: String,
}

pub async fn competition_club_stats_action(
    State(state): State<AppData>,
    Path(route_params): Path<CompetitionClubStatsRequest>,
    Query(query): Query<WindowQuery>,
) -> ApiResult<Json<CompetitionClubStats>> {
    let window = query.match_window();

    debug!(
        "stats for club {} in competition {} (window {})",
        route_params.club_id, route_params.competition_id, window
    );

    let data = Arc::clone(&state.data);

    let stats = tokio::task::spawn_blocking(move || {
        DashboardAssembler::competition_club_stats(
            &data,
            &route_params.competition_id,
            &route_params.club_id,
            window,
        )
    })
    .await
    .map_err(|e| ApiError::InternalError(format!("stats task failed: {}", e)))??;

    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use crate::testing::get_json;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_stats_are_scoped_to_competition() {
        let (status, body) =
            get_json("/api/competitions/cmp_estadual/clubs/clb_aurora/stats?window=all").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["competition"]["name"], "Campeonato Estadual 2025");
        assert_eq!(body["club"]["id"], "clb_aurora");

        let summary = &body["summary"];
        assert_eq!(summary["total"], 6);
        assert_eq!(summary["wins"], 3);
        assert_eq!(summary["draws"], 3);
        assert_eq!(summary["losses"], 0);
        assert_eq!(summary["points_percentage"], 66.7);

        let match_ids = body["window"]["match_ids"].as_array().unwrap();
        assert!(!match_ids.iter().any(|id| id == "prt_04" || id == "prt_07"));
    }

    #[tokio::test]
    async fn test_cup_stats() {
        let (_, body) = get_json("/api/competitions/cmp_copa/clubs/clb_aurora/stats").await;

        assert_eq!(body["summary"]["total"], 2);
        assert_eq!(body["summary"]["points_percentage"], 50.0);
        assert_eq!(body["formations"]["most_used"], "4-4-2");
    }

    #[tokio::test]
    async fn test_unknown_competition_is_not_found() {
        let (status, body) =
            get_json("/api/competitions/cmp_missing/clubs/clb_aurora/stats").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "competition 'cmp_missing' not found");
    }

    #[tokio::test]
    async fn test_unknown_club_in_known_competition_is_not_found() {
        let (status, _) = get_json("/api/competitions/cmp_copa/clubs/clb_missing/stats").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
