pub mod bet;
pub use bet::*;

#[allow(clippy::module_inception)]
pub mod table;
pub use table::*;
