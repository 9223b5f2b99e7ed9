pub mod routes;

use crate::{ApiError, ApiResult, AppData};
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::Json;
use engine::{CoachHome, DashboardAssembler, RequestingActor, UserRole};
use log::debug;

pub const CLUB_ID_HEADER: &str = "x-club-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Builds the requesting actor from the identity headers set by the upstream gateway.
pub struct CoachActor(pub RequestingActor);

impl<S> FromRequestParts<S> for CoachActor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let club_id = header_value(&parts.headers, CLUB_ID_HEADER)?.map(str::to_string);

        let role = match header_value(&parts.headers, USER_ROLE_HEADER)? {
            Some(raw) => raw
                .parse::<UserRole>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
            None => UserRole::Coach,
        };

        Ok(CoachActor(RequestingActor { club_id, role }))
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> ApiResult<Option<&'a str>> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => {
            let value = value
                .to_str()
                .map_err(|_| ApiError::BadRequest(format!("header '{}' is not valid text", name)))?
                .trim();

            Ok((!value.is_empty()).then_some(value))
        }
    }
}

pub async fn coach_home_action(
    State(state): State<AppData>,
    CoachActor(actor): CoachActor,
) -> ApiResult<Json<CoachHome>> {
    debug!("coach home requested by {:?}", actor);

    let home = DashboardAssembler::coach_home(&state.data, &actor, state.clock.now())?;

    Ok(Json(home))
}

#[cfg(test)]
mod tests {
    use crate::testing::{get_with_headers, into_json};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_coach_home_for_affiliated_coach() {
        let response = get_with_headers(
            "/api/coach/home",
            &[("X-Club-Id", "clb_aurora"), ("X-User-Role", "TREINADOR")],
        )
        .await;
        let (status, body) = into_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["club"]["name"], "Aurora FC");
        assert_eq!(body["summary"]["total"], 8);

        let fixture = &body["next_fixture"];
        assert_eq!(fixture["match_id"], "prt_08");
        assert_eq!(fixture["side"], "away");
        assert_eq!(fixture["opponent_name"], "Ferroviario EC");
        assert_eq!(fixture["competition_name"], "Campeonato Estadual 2025");
    }

    #[tokio::test]
    async fn test_probable_lineup_falls_back_to_history() {
        let response = get_with_headers("/api/coach/home", &[("X-Club-Id", "clb_aurora")]).await;
        let (_, body) = into_json(response).await;

        let lineup = &body["probable_lineup"];
        assert_eq!(lineup["origin"], "historical");

        let entries = lineup["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 11);
        assert_eq!(entries[0]["player_name"], "Bruno Alves");
        assert_eq!(entries[0]["starts"], 7);
        assert_eq!(entries[9]["player_name"], "Mateus Nunes");
        assert_eq!(entries[10]["player_name"], "Pedro Henrique");
        assert_eq!(entries[10]["starts"], 4);
    }

    #[tokio::test]
    async fn test_admin_with_club_header_is_served() {
        let response = get_with_headers(
            "/api/coach/home",
            &[("X-Club-Id", "clb_litoral"), ("X-User-Role", "admin")],
        )
        .await;
        let (status, body) = into_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["club"]["id"], "clb_litoral");
        assert!(body["next_fixture"].is_null());
        assert!(body["probable_lineup"]["origin"].is_null());
    }

    #[tokio::test]
    async fn test_coach_without_club_is_not_found() {
        for headers in [vec![], vec![("X-Club-Id", "  ")]] {
            let (status, body) = into_json(get_with_headers("/api/coach/home", &headers).await).await;

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["error"], "requesting user is not affiliated with any club");
        }
    }

    #[tokio::test]
    async fn test_unknown_role_is_bad_request() {
        let response = get_with_headers(
            "/api/coach/home",
            &[("X-Club-Id", "clb_aurora"), ("X-User-Role", "GOLEIRO")],
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
