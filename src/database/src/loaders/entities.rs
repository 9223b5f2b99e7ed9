use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct DatabaseEntity {
    pub clubs: Vec<ClubEntity>,
    #[serde(default)]
    pub competitions: Vec<CompetitionEntity>,
    #[serde(default)]
    pub players: Vec<PlayerEntity>,
    #[serde(default)]
    pub matches: Vec<MatchEntity>,
    #[serde(default)]
    pub goals: Vec<GoalEntity>,
    #[serde(default)]
    pub lineups: Vec<LineupEntity>,
    #[serde(default)]
    pub performances: Vec<PerformanceEntity>,
}

#[derive(Debug, Deserialize)]
pub struct ClubEntity {
    pub id: String,
    pub name: String,
    pub country: String,
    pub founded: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct CompetitionEntity {
    pub id: String,
    pub name: String,
    pub scope: String,
    pub locality: Option<String>,
    pub participant_type: String,
    pub division: Option<String>,
    pub format: Option<String>,
    #[serde(default)]
    pub participant_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct PlayerEntity {
    pub id: String,
    pub name: String,
    pub position: String,
    pub club_id: Option<String>,
    #[serde(default)]
    pub nationality: String,
    pub preferred_foot: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MatchEntity {
    pub id: String,
    pub competition_id: Option<String>,
    pub home_club_id: String,
    pub away_club_id: String,
    pub kickoff: NaiveDateTime,
    #[serde(default)]
    pub home_score: u16,
    #[serde(default)]
    pub away_score: u16,
    pub venue: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GoalEntity {
    pub scorer_id: String,
    pub match_id: String,
    #[serde(default)]
    pub minute: u16,
    pub assist_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LineupEntity {
    pub match_id: String,
    pub player_id: String,
    pub status: String,
    pub x: Option<f32>,
    pub y: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct PerformanceEntity {
    pub match_id: String,
    pub player_id: String,
    #[serde(default)]
    pub goals: u16,
    #[serde(default)]
    pub assists: u16,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub yellow_cards: u8,
    #[serde(default)]
    pub red_cards: u8,
    pub minutes_played: Option<u16>,
}
