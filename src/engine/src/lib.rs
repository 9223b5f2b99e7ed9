pub mod analytics;
pub mod club;
pub mod competition;
pub mod data;
pub mod r#match;
pub mod user;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use data::ClubData;

pub use club::{Club, Player, PlayerFieldPositionGroup, PlayerPosition, PreferredFoot};
pub use competition::Competition;
pub use r#match::{
    GoalEvent, LineupEntry, LineupStatus, Match, MatchSide, PerformanceRecord,
};
pub use user::UserRole;

pub use analytics::{
    AnalyticsError, AnalyticsResult, ClubAnalytics, ClubDashboard, ClubProfile, CoachHome,
    CompetitionClubStats, CompetitionProfile, DashboardAssembler, FormationClassifier,
    FormationSummary, LineupFallbackResolver, LineupOrigin, MatchOutcome, MatchOutcomeEvaluator,
    MatchWindow, NextFixture, OutcomeSummary, ProbableLineup, RankingAggregator, Rankings,
    RequestingActor, WindowSelector,
};
