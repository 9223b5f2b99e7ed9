use crate::club::{PlayerFieldPositionGroup, PlayerPosition};
use crate::data::ClubData;
use crate::r#match::Match;
use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::Serialize;

pub struct FormationClassifier;

impl FormationClassifier {
    /// "D-M-A" counts over the given starters' positions. Goalkeepers are not counted
    /// and the total is not checked against a full eleven.
    pub fn classify<I>(positions: I) -> String
    where
        I: IntoIterator<Item = PlayerPosition>,
    {
        let (mut defenders, mut midfielders, mut forwards) = (0u32, 0u32, 0u32);

        for position in positions {
            match position.position_group() {
                PlayerFieldPositionGroup::Defender => defenders += 1,
                PlayerFieldPositionGroup::Midfielder => midfielders += 1,
                PlayerFieldPositionGroup::Forward => forwards += 1,
                PlayerFieldPositionGroup::Goalkeeper => {}
            }
        }

        format!("{}-{}-{}", defenders, midfielders, forwards)
    }

    /// Formation the club started the match with, `None` when no starters were recorded.
    pub fn for_match(data: &ClubData, club_id: &str, match_id: &str) -> Option<String> {
        let positions: Vec<PlayerPosition> = data
            .lineups_for(match_id)
            .iter()
            .filter(|entry| entry.is_starter())
            .filter_map(|entry| data.club_player(club_id, &entry.player_id))
            .map(|player| player.position)
            .collect();

        if positions.is_empty() {
            return None;
        }

        Some(Self::classify(positions))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormationUsage {
    pub formation: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchFormation {
    pub match_id: String,
    pub kickoff: NaiveDateTime,
    pub opponent_name: String,
    pub formation: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FormationSummary {
    pub frequencies: Vec<FormationUsage>,
    pub most_used: Option<String>,
    pub per_match: Vec<MatchFormation>,
}

impl FormationSummary {
    pub fn build(data: &ClubData, club_id: &str, matches: &[&Match]) -> Self {
        let per_match: Vec<MatchFormation> = matches
            .iter()
            .filter_map(|m| {
                let formation = FormationClassifier::for_match(data, club_id, &m.id)?;
                let opponent_id = m.opponent_of(club_id)?;

                Some(MatchFormation {
                    match_id: m.id.clone(),
                    kickoff: m.kickoff,
                    opponent_name: data.club_name(opponent_id).to_string(),
                    formation,
                })
            })
            .collect();

        let frequencies: Vec<FormationUsage> = per_match
            .iter()
            .map(|m| m.formation.as_str())
            .counts()
            .into_iter()
            .map(|(formation, count)| FormationUsage {
                formation: formation.to_string(),
                count: count as u32,
            })
            .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.formation.cmp(&b.formation)))
            .collect();

        let most_used = frequencies.first().map(|usage| usage.formation.clone());

        FormationSummary {
            frequencies,
            most_used,
            per_match,
        }
    }
}
