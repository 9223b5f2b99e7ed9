use crate::r#match::Match;
use log::debug;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

pub const DEFAULT_WINDOW: usize = 5;

const ALL_MATCHES: &str = "all";

/// How many of the most recent matches feed the window-scoped aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchWindow {
    Last(usize),
    All,
}

impl Default for MatchWindow {
    fn default() -> Self {
        MatchWindow::Last(DEFAULT_WINDOW)
    }
}

impl MatchWindow {
    /// Never fails: absent, malformed or non-positive values fall back to the default.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return MatchWindow::default();
        };

        if raw.eq_ignore_ascii_case(ALL_MATCHES) {
            return MatchWindow::All;
        }

        match raw.parse::<i64>() {
            Ok(count) if count > 0 => MatchWindow::Last(count as usize),
            _ => {
                debug!("window value '{}' normalized to {}", raw, DEFAULT_WINDOW);
                MatchWindow::default()
            }
        }
    }

    pub fn limit(&self) -> Option<usize> {
        match self {
            MatchWindow::Last(count) => Some(*count),
            MatchWindow::All => None,
        }
    }
}

impl Display for MatchWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchWindow::Last(count) => write!(f, "{}", count),
            MatchWindow::All => f.write_str(ALL_MATCHES),
        }
    }
}

impl Serialize for MatchWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MatchWindow::Last(count) => serializer.serialize_u64(*count as u64),
            MatchWindow::All => serializer.serialize_str(ALL_MATCHES),
        }
    }
}

/// The concrete match subset a window resolved to, most recent first.
#[derive(Debug, Clone)]
pub struct ResolvedWindow<'a> {
    pub window: MatchWindow,
    pub matches: Vec<&'a Match>,
}

impl<'a> ResolvedWindow<'a> {
    pub fn considered(&self) -> usize {
        self.matches.len()
    }

    pub fn match_ids(&self) -> Vec<String> {
        self.matches.iter().map(|m| m.id.clone()).collect()
    }
}

pub struct WindowSelector;

impl WindowSelector {
    /// Orders the club's matches by kickoff (newest first, then id) and keeps the window's share.
    /// Pending fixtures are part of the ordered set like any other match.
    pub fn select(mut matches: Vec<&Match>, window: MatchWindow) -> ResolvedWindow<'_> {
        matches.sort_by(|a, b| b.kickoff.cmp(&a.kickoff).then_with(|| a.id.cmp(&b.id)));

        if let Some(limit) = window.limit() {
            matches.truncate(limit);
        }

        ResolvedWindow { window, matches }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{at, ClubDataBuilder};

    fn ten_matches() -> crate::ClubData {
        let mut builder = ClubDataBuilder::new().club("clb_a", "Alpha").club("clb_b", "Beta");

        for day in 1..=10 {
            builder = builder.fixture(
                &format!("prt_{:02}", day),
                "clb_a",
                "clb_b",
                &format!("2025-03-{:02} 16:00", day),
                1,
                0,
            );
        }

        builder.build()
    }

    #[test]
    fn test_parse_window_values() {
        assert_eq!(MatchWindow::parse(Some("3")), MatchWindow::Last(3));
        assert_eq!(MatchWindow::parse(Some("all")), MatchWindow::All);
        assert_eq!(MatchWindow::parse(Some(" ALL ")), MatchWindow::All);
        assert_eq!(MatchWindow::parse(Some("0")), MatchWindow::Last(5));
        assert_eq!(MatchWindow::parse(Some("-2")), MatchWindow::Last(5));
        assert_eq!(MatchWindow::parse(Some("bogus")), MatchWindow::Last(5));
        assert_eq!(MatchWindow::parse(None), MatchWindow::Last(5));
    }

    #[test]
    fn test_last_three_of_ten_are_most_recent() {
        let data = ten_matches();

        let resolved = WindowSelector::select(data.club_matches("clb_a"), MatchWindow::Last(3));

        assert_eq!(resolved.considered(), 3);
        assert_eq!(resolved.match_ids(), vec!["prt_10", "prt_09", "prt_08"]);
    }

    #[test]
    fn test_all_returns_every_match() {
        let data = ten_matches();

        let resolved = WindowSelector::select(data.club_matches("clb_a"), MatchWindow::All);

        assert_eq!(resolved.considered(), 10);
    }

    #[test]
    fn test_invalid_window_falls_back_to_five() {
        let data = ten_matches();

        for raw in ["0", "bogus"] {
            let resolved = WindowSelector::select(data.club_matches("clb_a"), MatchWindow::parse(Some(raw)));

            assert_eq!(resolved.window, MatchWindow::Last(5));
            assert_eq!(resolved.considered(), 5);
        }
    }

    #[test]
    fn test_pending_fixtures_stay_in_the_window() {
        let data = ClubDataBuilder::new()
            .club("clb_a", "Alpha")
            .club("clb_b", "Beta")
            .fixture("prt_1", "clb_a", "clb_b", "2025-03-01 16:00", 2, 1)
            .fixture("prt_2", "clb_b", "clb_a", "2025-03-08 16:00", 0, 3)
            .fixture("prt_3", "clb_a", "clb_b", "2025-03-15 16:00", 1, 1)
            .fixture("prt_4", "clb_b", "clb_a", "2025-04-05 18:30", 0, 0)
            .build();

        let all = WindowSelector::select(data.club_matches("clb_a"), MatchWindow::All);

        assert_eq!(all.considered(), data.club_matches("clb_a").len());
        assert_eq!(all.match_ids(), vec!["prt_4", "prt_3", "prt_2", "prt_1"]);
        assert!(all.matches[0].is_upcoming(at("2025-03-20 00:00")));

        let last_two = WindowSelector::select(data.club_matches("clb_a"), MatchWindow::Last(2));
        assert_eq!(last_two.match_ids(), vec!["prt_4", "prt_3"]);
    }

    #[test]
    fn test_window_display_matches_query_vocabulary() {
        assert_eq!(MatchWindow::Last(7).to_string(), "7");
        assert_eq!(MatchWindow::All.to_string(), "all");
    }
}
