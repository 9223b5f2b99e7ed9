use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Club {
    pub id: String,
    pub name: String,
    pub country: String,
    pub founded: Option<NaiveDate>,
}

impl Club {
    pub fn new(id: String, name: String, country: String, founded: Option<NaiveDate>) -> Self {
        Club {
            id,
            name,
            country,
            founded,
        }
    }
}
