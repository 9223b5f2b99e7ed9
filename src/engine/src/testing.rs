use crate::club::{Club, Player, PlayerPosition};
use crate::competition::Competition;
use crate::data::ClubData;
use crate::r#match::{GoalEvent, LineupEntry, LineupStatus, Match, PerformanceRecord};
use chrono::NaiveDateTime;

pub fn at(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").expect("test timestamp should parse")
}

#[derive(Default)]
pub struct ClubDataBuilder {
    clubs: Vec<Club>,
    competitions: Vec<Competition>,
    players: Vec<Player>,
    matches: Vec<Match>,
    goals: Vec<GoalEvent>,
    lineups: Vec<LineupEntry>,
    performances: Vec<PerformanceRecord>,
}

impl ClubDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn club(mut self, id: &str, name: &str) -> Self {
        self.clubs.push(Club::new(
            id.to_string(),
            name.to_string(),
            "Brasil".to_string(),
            None,
        ));
        self
    }

    pub fn competition(mut self, id: &str, name: &str) -> Self {
        self.competitions.push(Competition {
            id: id.to_string(),
            name: name.to_string(),
            scope: "Nacional".to_string(),
            locality: None,
            participant_type: "Clubes".to_string(),
            division: None,
            format: None,
            participant_count: 20,
        });
        self
    }

    pub fn player(mut self, id: &str, name: &str, position: &str, club_id: Option<&str>) -> Self {
        self.players.push(Player {
            id: id.to_string(),
            name: name.to_string(),
            position: position
                .parse::<PlayerPosition>()
                .expect("test position should parse"),
            club_id: club_id.map(str::to_string),
            nationality: "Brasil".to_string(),
            preferred_foot: None,
        });
        self
    }

    pub fn fixture(
        self,
        id: &str,
        home: &str,
        away: &str,
        kickoff: &str,
        home_score: u16,
        away_score: u16,
    ) -> Self {
        self.competition_fixture(id, None, home, away, kickoff, home_score, away_score)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn competition_fixture(
        mut self,
        id: &str,
        competition_id: Option<&str>,
        home: &str,
        away: &str,
        kickoff: &str,
        home_score: u16,
        away_score: u16,
    ) -> Self {
        self.matches.push(Match {
            id: id.to_string(),
            competition_id: competition_id.map(str::to_string),
            home_club_id: home.to_string(),
            away_club_id: away.to_string(),
            kickoff: at(kickoff),
            home_score,
            away_score,
            venue: Some(format!("Stadium {}", home)),
        });
        self
    }

    pub fn goal(mut self, scorer: &str, match_id: &str, minute: u16, assist: Option<&str>) -> Self {
        self.goals.push(GoalEvent::new(
            scorer.to_string(),
            match_id.to_string(),
            minute,
            assist.map(str::to_string),
        ));
        self
    }

    pub fn starter(self, match_id: &str, player_id: &str) -> Self {
        self.lineup(match_id, player_id, LineupStatus::Starter, None)
    }

    pub fn reserve(self, match_id: &str, player_id: &str) -> Self {
        self.lineup(match_id, player_id, LineupStatus::Reserve, None)
    }

    pub fn lineup(
        mut self,
        match_id: &str,
        player_id: &str,
        status: LineupStatus,
        coordinates: Option<(f32, f32)>,
    ) -> Self {
        self.lineups.push(LineupEntry {
            match_id: match_id.to_string(),
            player_id: player_id.to_string(),
            status,
            x: coordinates.map(|(x, _)| x),
            y: coordinates.map(|(_, y)| y),
        });
        self
    }

    pub fn performance(mut self, match_id: &str, player_id: &str, rating: f32, cards: (u8, u8)) -> Self {
        self.performances.push(PerformanceRecord {
            match_id: match_id.to_string(),
            player_id: player_id.to_string(),
            goals: 0,
            assists: 0,
            rating,
            yellow_cards: cards.0,
            red_cards: cards.1,
            minutes_played: Some(90),
        });
        self
    }

    pub fn build(self) -> ClubData {
        ClubData::new(
            self.clubs,
            self.competitions,
            self.players,
            self.matches,
            self.goals,
            self.lineups,
            self.performances,
        )
    }
}
