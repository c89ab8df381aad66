pub mod bankroll;
pub use bankroll::*;

pub mod fibonacci;
pub use fibonacci::*;

pub mod flat;
pub use flat::*;

pub mod gambler;
pub use gambler::*;

pub mod martingale;
pub use martingale::*;

pub mod player;
pub use player::*;

pub mod random;
pub use random::*;

pub mod sevenreds;
pub use sevenreds::*;
