use crate::utils::UnknownLabel;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct LineupEntry {
    pub match_id: String,
    pub player_id: String,
    pub status: LineupStatus,
    /// Pitch coordinates as 0-100 percentages.
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl LineupEntry {
    pub fn is_starter(&self) -> bool {
        self.status == LineupStatus::Starter
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineupStatus {
    Starter,
    Reserve,
}

impl FromStr for LineupStatus {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TITULAR" | "STARTER" => Ok(LineupStatus::Starter),
            "RESERVA" | "RESERVE" => Ok(LineupStatus::Reserve),
            _ => Err(UnknownLabel::new("lineup status", s)),
        }
    }
}
