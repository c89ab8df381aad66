pub mod bin;
pub use bin::*;

pub mod catalog;
pub use catalog::*;

pub mod outcome;
pub use outcome::*;

pub mod pocket;
pub use pocket::*;

#[allow(clippy::module_inception)]
pub mod wheel;
pub use wheel::*;
