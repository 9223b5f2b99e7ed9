/// One player's line for one match: output, rating and discipline.
#[derive(Debug, Clone)]
pub struct PerformanceRecord {
    pub match_id: String,
    pub player_id: String,
    pub goals: u16,
    pub assists: u16,
    pub rating: f32,
    pub yellow_cards: u8,
    pub red_cards: u8,
    pub minutes_played: Option<u16>,
}
