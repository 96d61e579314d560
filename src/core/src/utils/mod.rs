mod date;
mod logging;

pub use date::*;
pub use logging::*;
