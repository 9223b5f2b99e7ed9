use crate::data::ClubData;
use crate::r#match::{Match, MatchSide};
use crate::utils::FloatUtils;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::cmp::Ordering;

const POINTS_FOR_WIN: u32 = 3;
const POINTS_FOR_DRAW: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcomeItem {
    pub match_id: String,
    pub kickoff: NaiveDateTime,
    pub competition_id: Option<String>,
    pub opponent_id: String,
    pub opponent_name: String,
    pub side: MatchSide,
    pub goals_for: u16,
    pub goals_against: u16,
    pub outcome: MatchOutcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OutcomeSummary {
    pub total: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points_percentage: f64,
}

pub struct MatchOutcomeEvaluator;

impl MatchOutcomeEvaluator {
    /// Result from the club's perspective, `None` when the club did not play the match.
    pub fn classify(m: &Match, club_id: &str) -> Option<MatchOutcome> {
        let (goals_for, goals_against) = m.score_for(club_id)?;

        Some(match goals_for.cmp(&goals_against) {
            Ordering::Greater => MatchOutcome::Win,
            Ordering::Less => MatchOutcome::Loss,
            Ordering::Equal => MatchOutcome::Draw,
        })
    }

    pub fn evaluate(data: &ClubData, m: &Match, club_id: &str) -> Option<MatchOutcomeItem> {
        let side = m.side_of(club_id)?;
        let opponent_id = m.opponent_of(club_id)?;
        let (goals_for, goals_against) = m.score_for(club_id)?;
        let outcome = Self::classify(m, club_id)?;

        Some(MatchOutcomeItem {
            match_id: m.id.clone(),
            kickoff: m.kickoff,
            competition_id: m.competition_id.clone(),
            opponent_id: opponent_id.to_string(),
            opponent_name: data.club_name(opponent_id).to_string(),
            side,
            goals_for,
            goals_against,
            outcome,
        })
    }

    /// Tallies one match set. Draws are whatever is left after wins and losses.
    pub fn summarize(club_id: &str, matches: &[&Match]) -> OutcomeSummary {
        let mut total = 0u32;
        let mut wins = 0u32;
        let mut losses = 0u32;

        for outcome in matches.iter().filter_map(|m| Self::classify(m, club_id)) {
            total += 1;
            match outcome {
                MatchOutcome::Win => wins += 1,
                MatchOutcome::Loss => losses += 1,
                MatchOutcome::Draw => {}
            }
        }

        let draws = total - (wins + losses);

        OutcomeSummary {
            total,
            wins,
            losses,
            draws,
            points_percentage: points_percentage(wins, draws, total),
        }
    }
}

/// Share of available points won, as a percentage rounded to one decimal.
pub fn points_percentage(wins: u32, draws: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let earned = (wins * POINTS_FOR_WIN + draws * POINTS_FOR_DRAW) as f64;
    let available = (total * POINTS_FOR_WIN) as f64;

    FloatUtils::round(earned / available * 100.0, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ClubDataBuilder;
    use proptest::prelude::*;

    #[test]
    fn test_home_win_away_loss_home_draw() {
        let data = ClubDataBuilder::new()
            .club("clb_c", "Clube C")
            .club("clb_x", "Rival X")
            .fixture("prt_1", "clb_c", "clb_x", "2025-03-01 16:00", 2, 1)
            .fixture("prt_2", "clb_x", "clb_c", "2025-03-08 16:00", 3, 0)
            .fixture("prt_3", "clb_c", "clb_x", "2025-03-15 16:00", 1, 1)
            .build();

        let summary = MatchOutcomeEvaluator::summarize("clb_c", &data.club_matches("clb_c"));

        assert_eq!(
            summary,
            OutcomeSummary {
                total: 3,
                wins: 1,
                losses: 1,
                draws: 1,
                points_percentage: 44.4,
            }
        );
    }

    #[test]
    fn test_away_score_is_read_from_the_club_side() {
        let data = ClubDataBuilder::new()
            .club("clb_c", "Clube C")
            .club("clb_x", "Rival X")
            .fixture("prt_1", "clb_x", "clb_c", "2025-03-01 16:00", 0, 2)
            .build();

        let m = data.match_by_id("prt_1").unwrap();
        let item = MatchOutcomeEvaluator::evaluate(&data, m, "clb_c").unwrap();

        assert_eq!(item.outcome, MatchOutcome::Win);
        assert_eq!(item.side, MatchSide::Away);
        assert_eq!(item.opponent_name, "Rival X");
        assert_eq!((item.goals_for, item.goals_against), (2, 0));
    }

    #[test]
    fn test_empty_set_has_zero_percentage() {
        let summary = MatchOutcomeEvaluator::summarize("clb_c", &[]);

        assert_eq!(summary, OutcomeSummary::default());
        assert_eq!(points_percentage(0, 0, 0), 0.0);
    }

    #[test]
    fn test_foreign_matches_are_not_counted() {
        let data = ClubDataBuilder::new()
            .club("clb_c", "Clube C")
            .club("clb_x", "Rival X")
            .club("clb_y", "Rival Y")
            .fixture("prt_1", "clb_x", "clb_y", "2025-03-01 16:00", 2, 2)
            .build();

        let all: Vec<&Match> = data.matches().iter().collect();
        let summary = MatchOutcomeEvaluator::summarize("clb_c", &all);

        assert_eq!(summary.total, 0);
    }

    proptest! {
        #[test]
        fn prop_tallies_always_add_up(scores in prop::collection::vec((0u16..6, 0u16..6, any::<bool>()), 0..40)) {
            let mut builder = ClubDataBuilder::new().club("clb_c", "Clube C").club("clb_x", "Rival X");

            for (idx, (home, away, at_home)) in scores.iter().enumerate() {
                let (h, a) = if *at_home { ("clb_c", "clb_x") } else { ("clb_x", "clb_c") };
                builder = builder.fixture(&format!("prt_{}", idx), h, a, "2025-03-01 16:00", *home, *away);
            }

            let data = builder.build();
            let summary = MatchOutcomeEvaluator::summarize("clb_c", &data.club_matches("clb_c"));

            prop_assert_eq!(summary.total as usize, scores.len());
            prop_assert_eq!(summary.wins + summary.losses + summary.draws, summary.total);
            prop_assert_eq!(
                summary.points_percentage,
                points_percentage(summary.wins, summary.draws, summary.total)
            );
            prop_assert!(summary.points_percentage >= 0.0 && summary.points_percentage <= 100.0);
        }
    }
}
