mod policy;
mod table;

pub use policy::*;
pub use table::*;
