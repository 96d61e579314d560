mod competition;
mod result;
mod schedule;
mod scorers;
mod statistics;
mod table;

pub use competition::*;
pub use result::*;
pub use schedule::*;
pub use scorers::*;
pub use statistics::*;
pub use table::*;
