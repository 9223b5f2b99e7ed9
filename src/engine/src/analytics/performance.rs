use crate::data::ClubData;
use crate::r#match::Match;
use crate::utils::{FloatUtils, StringUtils};
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;

pub const PERFORMANCE_TABLE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPerformanceLine {
    pub player_id: String,
    pub player_name: String,
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
    pub average_rating: f64,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub minutes_played: u32,
}

#[derive(Default)]
struct PerformanceTotals {
    appearances: u32,
    goals: u32,
    assists: u32,
    rating_sum: f64,
    yellow_cards: u32,
    red_cards: u32,
    minutes_played: u32,
}

pub struct PerformanceTable;

impl PerformanceTable {
    /// Per-player performance records of the club's players over `matches`,
    /// best average rating first.
    pub fn build(data: &ClubData, club_id: &str, matches: &[&Match]) -> Vec<PlayerPerformanceLine> {
        let mut totals: HashMap<&str, PerformanceTotals> = HashMap::new();

        for record in matches
            .iter()
            .flat_map(|m| data.performances_for(&m.id))
            .filter(|record| data.club_player(club_id, &record.player_id).is_some())
        {
            let line = totals.entry(record.player_id.as_str()).or_default();

            line.appearances += 1;
            line.goals += record.goals as u32;
            line.assists += record.assists as u32;
            line.rating_sum += record.rating as f64;
            line.yellow_cards += record.yellow_cards as u32;
            line.red_cards += record.red_cards as u32;
            line.minutes_played += record.minutes_played.unwrap_or_default() as u32;
        }

        totals
            .into_iter()
            .map(|(player_id, t)| PlayerPerformanceLine {
                player_id: player_id.to_string(),
                player_name: data
                    .player(player_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| player_id.to_string()),
                appearances: t.appearances,
                goals: t.goals,
                assists: t.assists,
                average_rating: FloatUtils::round(t.rating_sum / t.appearances as f64, 1),
                yellow_cards: t.yellow_cards,
                red_cards: t.red_cards,
                minutes_played: t.minutes_played,
            })
            .sorted_by(|a, b| {
                b.average_rating
                    .total_cmp(&a.average_rating)
                    .then_with(|| StringUtils::cmp_names(&a.player_name, &b.player_name))
                    .then_with(|| a.player_id.cmp(&b.player_id))
            })
            .take(PERFORMANCE_TABLE_SIZE)
            .collect()
    }
}
