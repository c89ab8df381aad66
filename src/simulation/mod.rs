pub mod batch;
pub use batch::*;

pub mod moments;
pub use moments::*;

pub mod session;
pub use session::*;

pub mod simulator;
pub use simulator::*;
