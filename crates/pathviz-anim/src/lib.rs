//! Animation scheduling for search replays.
//!
//! A [`Schedule`] is built from a search's visitation order and path; an
//! [`AnimationScheduler`] replays it against the clock, handing back the
//! cell updates that are due on each [`poll`](AnimationScheduler::poll) and
//! holding the `busy` signal while playback runs.

pub mod events;
pub mod schedule;
pub mod scheduler;

pub use events::EventQueue;
pub use schedule::{AnimationEvent, Schedule};
pub use scheduler::AnimationScheduler;
