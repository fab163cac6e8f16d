//! Turning a search result into a fixed timeline of cell updates.

use std::time::Duration;

use pathviz_core::{Point, TraversalState};

/// One timed traversal-state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationEvent {
    /// Offset from the start of playback.
    pub at: Duration,
    pub pos: Point,
    pub state: TraversalState,
}

/// A finite, time-ordered list of [`AnimationEvent`]s.
///
/// Visited-phase events come first, one per `interval`, followed by the
/// path-phase events continuing on the same cadence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    events: Vec<AnimationEvent>,
}

impl Schedule {
    /// Build the replay timeline for a search.
    ///
    /// `visited[i]` is marked at `i * interval`, then `path[j]` at
    /// `(visited.len() + j) * interval`. Offsets saturate at
    /// [`Duration::MAX`].
    pub fn build(visited: &[Point], path: &[Point], interval: Duration) -> Self {
        let visited_phase = visited.iter().map(|&p| (p, TraversalState::Visited));
        let path_phase = path.iter().map(|&p| (p, TraversalState::Path));
        let events = visited_phase
            .chain(path_phase)
            .enumerate()
            .map(|(i, (pos, state))| AnimationEvent {
                at: offset(interval, i),
                pos,
                state,
            })
            .collect();
        Self { events }
    }

    pub fn events(&self) -> &[AnimationEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Offset of the last event, or `None` for an empty schedule.
    pub fn last_at(&self) -> Option<Duration> {
        self.events.last().map(|e| e.at)
    }

    pub(crate) fn into_events(self) -> Vec<AnimationEvent> {
        self.events
    }
}

fn offset(interval: Duration, i: usize) -> Duration {
    u32::try_from(i)
        .ok()
        .and_then(|n| interval.checked_mul(n))
        .unwrap_or(Duration::MAX)
}
