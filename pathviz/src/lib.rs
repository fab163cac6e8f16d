//! Interactive pathfinding visualiser.
//!
//! [`Controller`] arbitrates user edits against animation playback;
//! [`Visualiser`] adapts it to the terminal application loop.

pub mod controller;
pub mod session;
pub mod visualiser;

pub use controller::{Controller, Notice, Outcome, PointerState, Rejection};
pub use session::Session;
pub use visualiser::Visualiser;
