use crate::analytics::{
    AnalyticsError, AnalyticsResult, FormationSummary, LineupFallbackResolver, MatchOutcomeEvaluator,
    MatchOutcomeItem, MatchWindow, OutcomeSummary, PerformanceTable, PlayerPerformanceLine,
    ProbableLineup, RankingAggregator, Rankings, WindowSelector,
};
use crate::club::Club;
use crate::competition::Competition;
use crate::data::ClubData;
use crate::r#match::{Match, MatchSide};
use crate::user::UserRole;
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, warn};
use serde::Serialize;

const RECENT_MATCHES_SIZE: usize = 5;

/// Who is asking, passed in by the caller instead of read from session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestingActor {
    pub club_id: Option<String>,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClubProfile {
    pub id: String,
    pub name: String,
    pub country: String,
    pub founded: Option<NaiveDate>,
}

impl From<&Club> for ClubProfile {
    fn from(club: &Club) -> Self {
        ClubProfile {
            id: club.id.clone(),
            name: club.name.clone(),
            country: club.country.clone(),
            founded: club.founded,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompetitionProfile {
    pub id: String,
    pub name: String,
    pub scope: String,
    pub division: Option<String>,
}

impl From<&Competition> for CompetitionProfile {
    fn from(competition: &Competition) -> Self {
        CompetitionProfile {
            id: competition.id.clone(),
            name: competition.name.clone(),
            scope: competition.scope.clone(),
            division: competition.division.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WindowInfo {
    pub window: MatchWindow,
    pub considered: usize,
    pub match_ids: Vec<String>,
}

/// Everything derived from one resolved window; shared by the dashboard variants.
#[derive(Debug, Clone, Serialize)]
pub struct ClubAnalytics {
    pub window: WindowInfo,
    pub summary: OutcomeSummary,
    pub recent_matches: Vec<MatchOutcomeItem>,
    pub rankings: Rankings,
    pub formations: FormationSummary,
    pub performances: Vec<PlayerPerformanceLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClubDashboard {
    pub club: ClubProfile,
    #[serde(flatten)]
    pub analytics: ClubAnalytics,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompetitionClubStats {
    pub competition: CompetitionProfile,
    pub club: ClubProfile,
    #[serde(flatten)]
    pub analytics: ClubAnalytics,
}

#[derive(Debug, Clone, Serialize)]
pub struct NextFixture {
    pub match_id: String,
    pub opponent_id: String,
    pub opponent_name: String,
    pub side: MatchSide,
    pub competition_name: Option<String>,
    pub kickoff: NaiveDateTime,
    pub venue: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoachHome {
    pub club: ClubProfile,
    pub summary: OutcomeSummary,
    pub next_fixture: Option<NextFixture>,
    pub probable_lineup: ProbableLineup,
}

pub struct DashboardAssembler;

impl DashboardAssembler {
    pub fn club_dashboard(
        data: &ClubData,
        club_id: &str,
        window: MatchWindow,
    ) -> AnalyticsResult<ClubDashboard> {
        let club = resolve_club(data, club_id)?;

        let analytics = Self::analyze(data, club_id, data.club_matches(club_id), window);

        Ok(ClubDashboard {
            club: ClubProfile::from(club),
            analytics,
        })
    }

    pub fn competition_club_stats(
        data: &ClubData,
        competition_id: &str,
        club_id: &str,
        window: MatchWindow,
    ) -> AnalyticsResult<CompetitionClubStats> {
        let competition = data.competition(competition_id).ok_or_else(|| {
            warn!("competition {} not found", competition_id);
            AnalyticsError::CompetitionNotFound(competition_id.to_string())
        })?;

        let club = resolve_club(data, club_id)?;

        let matches: Vec<&Match> = data
            .club_matches(club_id)
            .into_iter()
            .filter(|m| m.in_competition(competition_id))
            .collect();

        let analytics = Self::analyze(data, club_id, matches, window);

        Ok(CompetitionClubStats {
            competition: CompetitionProfile::from(competition),
            club: ClubProfile::from(club),
            analytics,
        })
    }

    pub fn coach_home(
        data: &ClubData,
        actor: &RequestingActor,
        now: NaiveDateTime,
    ) -> AnalyticsResult<CoachHome> {
        let club_id = actor
            .club_id
            .as_deref()
            .ok_or(AnalyticsError::NoAffiliatedClub)?;

        debug!("coach home for club {} ({:?})", club_id, actor.role);

        let club = resolve_club(data, club_id)?;

        let all = WindowSelector::select(data.club_matches(club_id), MatchWindow::All);
        let summary = MatchOutcomeEvaluator::summarize(club_id, &all.matches);

        let fixture = LineupFallbackResolver::next_fixture(data, club_id, now);
        let probable_lineup = LineupFallbackResolver::resolve(data, club_id, fixture);

        Ok(CoachHome {
            club: ClubProfile::from(club),
            summary,
            next_fixture: fixture.and_then(|m| next_fixture_summary(data, club_id, m)),
            probable_lineup,
        })
    }

    /// Resolves the window once and derives every aggregate from that same match set.
    fn analyze(
        data: &ClubData,
        club_id: &str,
        matches: Vec<&Match>,
        window: MatchWindow,
    ) -> ClubAnalytics {
        let resolved = WindowSelector::select(matches, window);
        let selected = resolved.matches.as_slice();

        debug!(
            "club {}: window {} resolved to {} matches",
            club_id,
            window,
            resolved.considered()
        );

        let ((summary, rankings), (formations, performances)) = rayon::join(
            || {
                rayon::join(
                    || MatchOutcomeEvaluator::summarize(club_id, selected),
                    || RankingAggregator::aggregate(data, club_id, selected),
                )
            },
            || {
                rayon::join(
                    || FormationSummary::build(data, club_id, selected),
                    || PerformanceTable::build(data, club_id, selected),
                )
            },
        );

        let recent_matches = selected
            .iter()
            .filter_map(|m| MatchOutcomeEvaluator::evaluate(data, m, club_id))
            .take(RECENT_MATCHES_SIZE)
            .collect();

        ClubAnalytics {
            window: WindowInfo {
                window: resolved.window,
                considered: resolved.considered(),
                match_ids: resolved.match_ids(),
            },
            summary,
            recent_matches,
            rankings,
            formations,
            performances,
        }
    }
}

fn resolve_club<'a>(data: &'a ClubData, club_id: &str) -> AnalyticsResult<&'a Club> {
    data.club(club_id).ok_or_else(|| {
        warn!("club {} not found", club_id);
        AnalyticsError::ClubNotFound(club_id.to_string())
    })
}

fn next_fixture_summary(data: &ClubData, club_id: &str, m: &Match) -> Option<NextFixture> {
    let opponent_id = m.opponent_of(club_id)?;

    Some(NextFixture {
        match_id: m.id.clone(),
        opponent_id: opponent_id.to_string(),
        opponent_name: data.club_name(opponent_id).to_string(),
        side: m.side_of(club_id)?,
        competition_name: m
            .competition_id
            .as_deref()
            .and_then(|id| data.competition(id))
            .map(|c| c.name.clone()),
        kickoff: m.kickoff,
        venue: m.venue.clone(),
    })
}
