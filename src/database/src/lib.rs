mod error;
mod generators;
mod loaders;

pub use error::{DatabaseError, DatabaseResult};
pub use generators::*;
pub use loaders::*;
