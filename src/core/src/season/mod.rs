mod holiday;
mod season;

pub use holiday::*;
pub use season::*;
