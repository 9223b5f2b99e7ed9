mod error;
mod generators;
mod loaders;

pub use error::DatabaseError;
pub use generators::DatabaseGenerator;
pub use loaders::*;
