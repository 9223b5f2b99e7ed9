mod dataset;
mod entities;

pub use dataset::*;
pub use entities::*;
