use crate::club::{Club, Player};
use crate::competition::Competition;
use crate::r#match::{GoalEvent, LineupEntry, Match, PerformanceRecord};
use std::collections::HashMap;

const UNKNOWN_CLUB_NAME: &str = "Unknown";

/// Immutable snapshot of every record the analytics read from.
#[derive(Debug, Default)]
pub struct ClubData {
    clubs: Vec<Club>,
    competitions: Vec<Competition>,
    players: Vec<Player>,
    matches: Vec<Match>,

    club_indexes: HashMap<String, usize>,
    competition_indexes: HashMap<String, usize>,
    player_indexes: HashMap<String, usize>,
    match_indexes: HashMap<String, usize>,

    goals: HashMap<String, Vec<GoalEvent>>,
    lineups: HashMap<String, Vec<LineupEntry>>,
    performances: HashMap<String, Vec<PerformanceRecord>>,
}

impl ClubData {
    pub fn new(
        clubs: Vec<Club>,
        competitions: Vec<Competition>,
        players: Vec<Player>,
        matches: Vec<Match>,
        goals: Vec<GoalEvent>,
        lineups: Vec<LineupEntry>,
        performances: Vec<PerformanceRecord>,
    ) -> Self {
        let club_indexes = index_by(&clubs, |c| &c.id);
        let competition_indexes = index_by(&competitions, |c| &c.id);
        let player_indexes = index_by(&players, |p| &p.id);
        let match_indexes = index_by(&matches, |m| &m.id);

        ClubData {
            clubs,
            competitions,
            players,
            matches,
            club_indexes,
            competition_indexes,
            player_indexes,
            match_indexes,
            goals: group_by_match(goals, |g| &g.match_id),
            lineups: group_by_match(lineups, |l| &l.match_id),
            performances: group_by_match(performances, |p| &p.match_id),
        }
    }

    pub fn club(&self, id: &str) -> Option<&Club> {
        self.club_indexes.get(id).map(|idx| &self.clubs[*idx])
    }

    pub fn club_name(&self, id: &str) -> &str {
        self.club(id)
            .map(|c| c.name.as_str())
            .unwrap_or(UNKNOWN_CLUB_NAME)
    }

    pub fn competition(&self, id: &str) -> Option<&Competition> {
        self.competition_indexes
            .get(id)
            .map(|idx| &self.competitions[*idx])
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.player_indexes.get(id).map(|idx| &self.players[*idx])
    }

    pub fn match_by_id(&self, id: &str) -> Option<&Match> {
        self.match_indexes.get(id).map(|idx| &self.matches[*idx])
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Every match the club took part in, home or away, in storage order.
    pub fn club_matches(&self, club_id: &str) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.involves(club_id)).collect()
    }

    /// Player record when the player is currently affiliated with the club.
    pub fn club_player(&self, club_id: &str, player_id: &str) -> Option<&Player> {
        self.player(player_id)
            .filter(|p| p.is_affiliated_with(club_id))
    }

    pub fn goals_for(&self, match_id: &str) -> &[GoalEvent] {
        self.goals.get(match_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn lineups_for(&self, match_id: &str) -> &[LineupEntry] {
        self.lineups.get(match_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn performances_for(&self, match_id: &str) -> &[PerformanceRecord] {
        self.performances
            .get(match_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn summary(&self) -> ClubDataSummary {
        ClubDataSummary {
            clubs: self.clubs.len(),
            competitions: self.competitions.len(),
            players: self.players.len(),
            matches: self.matches.len(),
            goals: self.goals.values().map(Vec::len).sum(),
            lineups: self.lineups.values().map(Vec::len).sum(),
            performances: self.performances.values().map(Vec::len).sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClubDataSummary {
    pub clubs: usize,
    pub competitions: usize,
    pub players: usize,
    pub matches: usize,
    pub goals: usize,
    pub lineups: usize,
    pub performances: usize,
}

fn index_by<T>(items: &[T], key: impl Fn(&T) -> &String) -> HashMap<String, usize> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| (key(item).clone(), idx))
        .collect()
}

fn group_by_match<T>(items: Vec<T>, key: impl Fn(&T) -> &String) -> HashMap<String, Vec<T>> {
    let mut result: HashMap<String, Vec<T>> = HashMap::new();

    for item in items {
        result.entry(key(&item).clone()).or_default().push(item);
    }

    result
}
