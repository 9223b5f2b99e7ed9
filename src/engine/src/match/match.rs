use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Match {
    pub id: String,
    pub competition_id: Option<String>,
    pub home_club_id: String,
    pub away_club_id: String,
    pub kickoff: NaiveDateTime,
    pub home_score: u16,
    pub away_score: u16,
    pub venue: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSide {
    Home,
    Away,
}

impl Match {
    pub fn involves(&self, club_id: &str) -> bool {
        self.home_club_id == club_id || self.away_club_id == club_id
    }

    pub fn side_of(&self, club_id: &str) -> Option<MatchSide> {
        if self.home_club_id == club_id {
            Some(MatchSide::Home)
        } else if self.away_club_id == club_id {
            Some(MatchSide::Away)
        } else {
            None
        }
    }

    pub fn opponent_of(&self, club_id: &str) -> Option<&str> {
        match self.side_of(club_id)? {
            MatchSide::Home => Some(&self.away_club_id),
            MatchSide::Away => Some(&self.home_club_id),
        }
    }

    /// Score as (club goals, opponent goals) from the given club's perspective.
    pub fn score_for(&self, club_id: &str) -> Option<(u16, u16)> {
        match self.side_of(club_id)? {
            MatchSide::Home => Some((self.home_score, self.away_score)),
            MatchSide::Away => Some((self.away_score, self.home_score)),
        }
    }

    /// Scheduled at or after `now`, so its score is still pending.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.kickoff >= now
    }

    pub fn in_competition(&self, competition_id: &str) -> bool {
        self.competition_id.as_deref() == Some(competition_id)
    }
}
