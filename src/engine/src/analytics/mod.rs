mod dashboard;
mod formation;
mod lineup;
mod outcome;
mod performance;
mod ranking;
mod window;

pub use dashboard::*;
pub use formation::*;
pub use lineup::*;
pub use outcome::*;
pub use performance::*;
pub use ranking::*;
pub use window::*;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("club '{0}' not found")]
    ClubNotFound(String),
    #[error("competition '{0}' not found")]
    CompetitionNotFound(String),
    #[error("requesting user is not affiliated with any club")]
    NoAffiliatedClub,
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
