#[allow(clippy::module_inception)]
pub mod game;
pub use game::*;

pub mod round;
pub use round::*;
