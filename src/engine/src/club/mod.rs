mod club;
mod player;

pub use club::*;
pub use player::*;
