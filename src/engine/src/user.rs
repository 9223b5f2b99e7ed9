use crate::utils::UnknownLabel;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    #[serde(rename = "TREINADOR")]
    Coach,
}

impl FromStr for UserRole {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(UserRole::Admin),
            "TREINADOR" | "COACH" => Ok(UserRole::Coach),
            _ => Err(UnknownLabel::new("user role", s)),
        }
    }
}
