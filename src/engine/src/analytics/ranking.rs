use crate::data::ClubData;
use crate::r#match::{GoalEvent, Match};
use crate::utils::StringUtils;
use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;

pub const RANKING_SIZE: usize = 10;
pub const FEED_SIZE: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub player_id: String,
    pub player_name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalParticipation {
    pub scorer_id: String,
    pub scorer_name: String,
    pub assist_id: Option<String>,
    pub assist_name: Option<String>,
    pub match_id: String,
    pub kickoff: NaiveDateTime,
    pub opponent_name: String,
    pub minute: u16,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Rankings {
    pub scorers: Vec<RankingEntry>,
    pub assisters: Vec<RankingEntry>,
    pub feed: Vec<GoalParticipation>,
}

pub struct RankingAggregator;

impl RankingAggregator {
    /// Rankings over the goals the club's players scored in `matches`.
    pub fn aggregate(data: &ClubData, club_id: &str, matches: &[&Match]) -> Rankings {
        let goals: Vec<(&Match, &GoalEvent)> = matches
            .iter()
            .flat_map(|m| data.goals_for(&m.id).iter().map(move |goal| (*m, goal)))
            .filter(|(_, goal)| data.club_player(club_id, &goal.scorer_id).is_some())
            .collect();

        let scorers = Self::rank(data, goals.iter().map(|(_, goal)| goal.scorer_id.as_str()));

        let assisters = Self::rank(
            data,
            goals
                .iter()
                .filter_map(|(_, goal)| goal.assist_id.as_deref())
                .filter(|assist_id| data.club_player(club_id, assist_id).is_some()),
        );

        let feed = Self::feed(data, club_id, &goals);

        Rankings {
            scorers,
            assisters,
            feed,
        }
    }

    /// Count per player, most first, ties by name then id, cut at the ranking size.
    fn rank<'a>(data: &ClubData, player_ids: impl Iterator<Item = &'a str>) -> Vec<RankingEntry> {
        let counts: HashMap<&str, usize> = player_ids.counts();

        counts
            .into_iter()
            .map(|(player_id, count)| RankingEntry {
                player_id: player_id.to_string(),
                player_name: player_name(data, player_id),
                count: count as u32,
            })
            .sorted_by(|a, b| {
                Reverse(a.count)
                    .cmp(&Reverse(b.count))
                    .then_with(|| StringUtils::cmp_names(&a.player_name, &b.player_name))
                    .then_with(|| a.player_id.cmp(&b.player_id))
            })
            .take(RANKING_SIZE)
            .collect()
    }

    fn feed(data: &ClubData, club_id: &str, goals: &[(&Match, &GoalEvent)]) -> Vec<GoalParticipation> {
        goals
            .iter()
            .sorted_by(|(ma, ga), (mb, gb)| {
                mb.kickoff
                    .cmp(&ma.kickoff)
                    .then_with(|| gb.minute.cmp(&ga.minute))
                    .then_with(|| ma.id.cmp(&mb.id))
                    .then_with(|| ga.scorer_id.cmp(&gb.scorer_id))
            })
            .take(FEED_SIZE)
            .map(|(m, goal)| GoalParticipation {
                scorer_id: goal.scorer_id.clone(),
                scorer_name: player_name(data, &goal.scorer_id),
                assist_id: goal.assist_id.clone(),
                assist_name: goal.assist_id.as_deref().map(|id| player_name(data, id)),
                match_id: m.id.clone(),
                kickoff: m.kickoff,
                opponent_name: m
                    .opponent_of(club_id)
                    .map(|id| data.club_name(id).to_string())
                    .unwrap_or_default(),
                minute: goal.minute,
            })
            .collect()
    }
}

fn player_name(data: &ClubData, player_id: &str) -> String {
    data.player(player_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| player_id.to_string())
}
