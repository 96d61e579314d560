mod generator;
mod round_robin;
mod schedule;
mod settings;

pub use generator::*;
pub use round_robin::*;
pub use schedule::*;
pub use settings::*;
