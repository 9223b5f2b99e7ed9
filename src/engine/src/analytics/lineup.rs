use crate::club::{Player, PlayerPosition};
use crate::data::ClubData;
use crate::r#match::{LineupEntry, Match};
use crate::utils::StringUtils;
use chrono::NaiveDateTime;
use itertools::Itertools;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Size of a starting eleven.
pub const PROBABLE_LINEUP_SIZE: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineupOrigin {
    #[serde(rename = "from-fixture")]
    FromFixture,
    #[serde(rename = "historical")]
    Historical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbableLineupEntry {
    pub player_id: String,
    pub player_name: String,
    pub position: PlayerPosition,
    pub x: Option<f32>,
    pub y: Option<f32>,
    /// How often the player started, only set for historically inferred lineups.
    pub starts: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProbableLineup {
    pub entries: Vec<ProbableLineupEntry>,
    pub origin: Option<LineupOrigin>,
}

pub struct LineupFallbackResolver;

impl LineupFallbackResolver {
    /// Earliest fixture kicking off at or after `now`; same-instant fixtures resolve by id.
    pub fn next_fixture<'a>(
        data: &'a ClubData,
        club_id: &str,
        now: NaiveDateTime,
    ) -> Option<&'a Match> {
        data.club_matches(club_id)
            .into_iter()
            .filter(|m| m.is_upcoming(now))
            .min_by(|a, b| a.kickoff.cmp(&b.kickoff).then_with(|| a.id.cmp(&b.id)))
    }

    /// The fixture's recorded starters when there are any, otherwise the club's most
    /// frequent starters across every recorded lineup.
    pub fn resolve(data: &ClubData, club_id: &str, next_fixture: Option<&Match>) -> ProbableLineup {
        if let Some(fixture) = next_fixture {
            let scheduled = Self::scheduled(data, club_id, fixture);

            if !scheduled.is_empty() {
                debug!(
                    "club {}: {} starters recorded for fixture {}",
                    club_id,
                    scheduled.len(),
                    fixture.id
                );

                return ProbableLineup {
                    entries: scheduled,
                    origin: Some(LineupOrigin::FromFixture),
                };
            }
        }

        let historical = Self::historical(data, club_id);

        if historical.is_empty() {
            debug!("club {}: no starters recorded at all", club_id);
            return ProbableLineup::default();
        }

        ProbableLineup {
            entries: historical,
            origin: Some(LineupOrigin::Historical),
        }
    }

    fn scheduled(data: &ClubData, club_id: &str, fixture: &Match) -> Vec<ProbableLineupEntry> {
        starters_of(data, club_id, fixture)
            .sorted_by(|(_, a), (_, b)| {
                StringUtils::cmp_names(&a.name, &b.name).then_with(|| a.id.cmp(&b.id))
            })
            .take(PROBABLE_LINEUP_SIZE)
            .map(|(entry, player)| ProbableLineupEntry {
                player_id: player.id.clone(),
                player_name: player.name.clone(),
                position: player.position,
                x: entry.x,
                y: entry.y,
                starts: None,
            })
            .collect()
    }

    fn historical(data: &ClubData, club_id: &str) -> Vec<ProbableLineupEntry> {
        let mut starts: HashMap<&str, (&Player, u32)> = HashMap::new();

        for m in data.club_matches(club_id) {
            for (_, player) in starters_of(data, club_id, m) {
                starts.entry(player.id.as_str()).or_insert((player, 0)).1 += 1;
            }
        }

        starts
            .into_values()
            .sorted_by(|(pa, ca), (pb, cb)| {
                cb.cmp(ca)
                    .then_with(|| StringUtils::cmp_names(&pa.name, &pb.name))
                    .then_with(|| pa.id.cmp(&pb.id))
            })
            .take(PROBABLE_LINEUP_SIZE)
            .map(|(player, count)| ProbableLineupEntry {
                player_id: player.id.clone(),
                player_name: player.name.clone(),
                position: player.position,
                x: None,
                y: None,
                starts: Some(count),
            })
            .collect()
    }
}

fn starters_of<'a>(
    data: &'a ClubData,
    club_id: &'a str,
    m: &'a Match,
) -> impl Iterator<Item = (&'a LineupEntry, &'a Player)> + 'a {
    data.lineups_for(&m.id)
        .iter()
        .filter(|entry| entry.is_starter())
        .filter_map(move |entry| data.club_player(club_id, &entry.player_id).map(|p| (entry, p)))
}
