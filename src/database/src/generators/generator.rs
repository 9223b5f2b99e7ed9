use crate::{
    ClubEntity, CompetitionEntity, DatabaseEntity, DatabaseError, GoalEntity, LineupEntity,
    MatchEntity, PerformanceEntity, PlayerEntity,
};
use engine::{
    Club, ClubData, Competition, GoalEvent, LineupEntry, LineupStatus, Match, PerformanceRecord,
    Player, PlayerPosition, PreferredFoot,
};
use log::info;
use std::collections::HashSet;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds the analytics snapshot, rejecting unknown labels and references to missing records.
    pub fn generate(data: &DatabaseEntity) -> Result<ClubData, DatabaseError> {
        let known = KnownIds::new(data);

        let clubs = data.clubs.iter().map(Self::generate_club).collect();

        let competitions = data
            .competitions
            .iter()
            .map(Self::generate_competition)
            .collect();

        let players = data
            .players
            .iter()
            .map(|p| Self::generate_player(p, &known))
            .collect::<Result<Vec<_>, _>>()?;

        let matches = data
            .matches
            .iter()
            .map(|m| Self::generate_match(m, &known))
            .collect::<Result<Vec<_>, _>>()?;

        let goals = data
            .goals
            .iter()
            .map(|g| Self::generate_goal(g, &known))
            .collect::<Result<Vec<_>, _>>()?;

        let lineups = data
            .lineups
            .iter()
            .map(|l| Self::generate_lineup(l, &known))
            .collect::<Result<Vec<_>, _>>()?;

        let performances = data
            .performances
            .iter()
            .map(|p| Self::generate_performance(p, &known))
            .collect::<Result<Vec<_>, _>>()?;

        let club_data = ClubData::new(
            clubs,
            competitions,
            players,
            matches,
            goals,
            lineups,
            performances,
        );

        info!("snapshot generated: {:?}", club_data.summary());

        Ok(club_data)
    }

    fn generate_club(club: &ClubEntity) -> Club {
        Club::new(
            club.id.clone(),
            club.name.clone(),
            club.country.clone(),
            club.founded,
        )
    }

    fn generate_competition(competition: &CompetitionEntity) -> Competition {
        Competition {
            id: competition.id.clone(),
            name: competition.name.clone(),
            scope: competition.scope.clone(),
            locality: competition.locality.clone(),
            participant_type: competition.participant_type.clone(),
            division: competition.division.clone(),
            format: competition.format.clone(),
            participant_count: competition.participant_count,
        }
    }

    fn generate_player(player: &PlayerEntity, known: &KnownIds) -> Result<Player, DatabaseError> {
        if let Some(club_id) = &player.club_id {
            known.require_club("player", &player.id, club_id)?;
        }

        let position = player
            .position
            .parse::<PlayerPosition>()
            .map_err(|source| label_error("player", &player.id, source))?;

        let preferred_foot = player
            .preferred_foot
            .as_deref()
            .map(str::parse::<PreferredFoot>)
            .transpose()
            .map_err(|source| label_error("player", &player.id, source))?;

        Ok(Player {
            id: player.id.clone(),
            name: player.name.clone(),
            position,
            club_id: player.club_id.clone(),
            nationality: player.nationality.clone(),
            preferred_foot,
        })
    }

    fn generate_match(m: &MatchEntity, known: &KnownIds) -> Result<Match, DatabaseError> {
        known.require_club("match", &m.id, &m.home_club_id)?;
        known.require_club("match", &m.id, &m.away_club_id)?;

        if let Some(competition_id) = &m.competition_id {
            known.require(
                &known.competitions,
                "match",
                &m.id,
                "competition",
                competition_id,
            )?;
        }

        Ok(Match {
            id: m.id.clone(),
            competition_id: m.competition_id.clone(),
            home_club_id: m.home_club_id.clone(),
            away_club_id: m.away_club_id.clone(),
            kickoff: m.kickoff,
            home_score: m.home_score,
            away_score: m.away_score,
            venue: m.venue.clone(),
        })
    }

    fn generate_goal(goal: &GoalEntity, known: &KnownIds) -> Result<GoalEvent, DatabaseError> {
        let id = format!("{}/{}/{}", goal.match_id, goal.scorer_id, goal.minute);

        known.require(&known.matches, "goal", &id, "match", &goal.match_id)?;
        known.require(&known.players, "goal", &id, "player", &goal.scorer_id)?;

        if let Some(assist_id) = &goal.assist_id {
            known.require(&known.players, "goal", &id, "player", assist_id)?;
        }

        Ok(GoalEvent::new(
            goal.scorer_id.clone(),
            goal.match_id.clone(),
            goal.minute,
            goal.assist_id.clone(),
        ))
    }

    fn generate_lineup(entry: &LineupEntity, known: &KnownIds) -> Result<LineupEntry, DatabaseError> {
        let id = format!("{}/{}", entry.match_id, entry.player_id);

        known.require(&known.matches, "lineup entry", &id, "match", &entry.match_id)?;
        known.require(&known.players, "lineup entry", &id, "player", &entry.player_id)?;

        let status = entry
            .status
            .parse::<LineupStatus>()
            .map_err(|source| label_error("lineup entry", &id, source))?;

        Ok(LineupEntry {
            match_id: entry.match_id.clone(),
            player_id: entry.player_id.clone(),
            status,
            x: entry.x,
            y: entry.y,
        })
    }

    fn generate_performance(
        record: &PerformanceEntity,
        known: &KnownIds,
    ) -> Result<PerformanceRecord, DatabaseError> {
        let id = format!("{}/{}", record.match_id, record.player_id);

        known.require(&known.matches, "performance", &id, "match", &record.match_id)?;
        known.require(&known.players, "performance", &id, "player", &record.player_id)?;

        Ok(PerformanceRecord {
            match_id: record.match_id.clone(),
            player_id: record.player_id.clone(),
            goals: record.goals,
            assists: record.assists,
            rating: record.rating,
            yellow_cards: record.yellow_cards,
            red_cards: record.red_cards,
            minutes_played: record.minutes_played,
        })
    }
}

struct KnownIds<'a> {
    clubs: HashSet<&'a str>,
    competitions: HashSet<&'a str>,
    players: HashSet<&'a str>,
    matches: HashSet<&'a str>,
}

impl<'a> KnownIds<'a> {
    fn new(data: &'a DatabaseEntity) -> Self {
        KnownIds {
            clubs: data.clubs.iter().map(|c| c.id.as_str()).collect(),
            competitions: data.competitions.iter().map(|c| c.id.as_str()).collect(),
            players: data.players.iter().map(|p| p.id.as_str()).collect(),
            matches: data.matches.iter().map(|m| m.id.as_str()).collect(),
        }
    }

    fn require_club(&self, entity: &'static str, id: &str, club_id: &str) -> Result<(), DatabaseError> {
        self.require(&self.clubs, entity, id, "club", club_id)
    }

    fn require(
        &self,
        set: &HashSet<&str>,
        entity: &'static str,
        id: &str,
        target: &'static str,
        target_id: &str,
    ) -> Result<(), DatabaseError> {
        if set.contains(target_id) {
            return Ok(());
        }

        Err(DatabaseError::DanglingReference {
            entity,
            id: id.to_string(),
            target,
            target_id: target_id.to_string(),
        })
    }
}

fn label_error(entity: &'static str, id: &str, source: engine::utils::UnknownLabel) -> DatabaseError {
    DatabaseError::Label {
        entity,
        id: id.to_string(),
        source,
    }
}
