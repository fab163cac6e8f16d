//! Playback of a [`Schedule`] against wall-clock time.

use std::time::{Duration, Instant};

use crate::events::EventQueue;
use crate::schedule::{AnimationEvent, Schedule};

/// Replays one [`Schedule`] at a time and exposes the `busy` signal.
///
/// `busy` rises when a non-empty schedule is started and falls exactly once,
/// in the [`poll`](Self::poll) call that fires the final event. A running
/// schedule cannot be cancelled or replaced.
#[derive(Debug, Default)]
pub struct AnimationScheduler {
    pending: EventQueue<AnimationEvent>,
    started: Option<Instant>,
    busy: bool,
    fired: usize,
    total: usize,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an animation is in progress.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Events fired and total events of the current (or last) schedule.
    pub fn progress(&self) -> (usize, usize) {
        (self.fired, self.total)
    }

    /// Commit `schedule` for playback starting at `now`.
    ///
    /// Returns the schedule back unchanged if another one is still running.
    /// An empty schedule completes immediately without raising `busy`.
    pub fn start(&mut self, schedule: Schedule, now: Instant) -> Result<(), Schedule> {
        if self.busy {
            log::debug!("schedule rejected: animation in progress");
            return Err(schedule);
        }
        self.fired = 0;
        self.total = schedule.len();
        if schedule.is_empty() {
            self.started = None;
            return Ok(());
        }

        for event in schedule.into_events() {
            self.pending.push(event, rank(event.at));
        }
        self.started = Some(now);
        self.busy = true;
        log::debug!("animation started: {} events", self.total);
        Ok(())
    }

    /// Fire every event due at `now`, in schedule order.
    pub fn poll(&mut self, now: Instant) -> Vec<AnimationEvent> {
        let Some(started) = self.started else {
            return Vec::new();
        };
        let elapsed = rank(now.saturating_duration_since(started));

        let mut due = Vec::new();
        while let Some(event) = self.pending.pop_due(elapsed) {
            due.push(event);
        }
        self.fired += due.len();

        if self.busy && self.pending.is_empty() {
            self.busy = false;
            self.started = None;
            log::debug!("animation finished after {} events", self.fired);
        }
        due
    }
}

#[inline]
fn rank(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}
