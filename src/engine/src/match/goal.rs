#[derive(Debug, Clone)]
pub struct GoalEvent {
    pub scorer_id: String,
    pub match_id: String,
    pub minute: u16,
    pub assist_id: Option<String>,
}

impl GoalEvent {
    pub fn new(scorer_id: String, match_id: String, minute: u16, assist_id: Option<String>) -> Self {
        GoalEvent {
            scorer_id,
            match_id,
            minute,
            assist_id,
        }
    }
}
