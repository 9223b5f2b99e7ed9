#[derive(Debug, Clone)]
pub struct Competition {
    pub id: String,
    pub name: String,
    pub scope: String,
    pub locality: Option<String>,
    pub participant_type: String,
    pub division: Option<String>,
    pub format: Option<String>,
    pub participant_count: u32,
}
