mod goal;
mod lineup;
mod r#match;
mod performance;

pub use goal::*;
pub use lineup::*;
pub use r#match::*;
pub use performance::*;
