mod league;
mod loader;
mod season;

pub use league::*;
pub use loader::*;
pub use season::*;
