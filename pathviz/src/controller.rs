//! The interaction state machine.
//!
//! [`Controller`] is the single owner of the grid, the session settings and
//! the animation scheduler. Pointer input moves it between
//! [`PointerState::Idle`] and [`PointerState::Painting`]; while an animation
//! is playing every grid-mutating request is refused.

use std::fmt;
use std::time::{Duration, Instant};

use pathviz_anim::{AnimationScheduler, Schedule};
use pathviz_core::{Endpoints, Grid, GridError, PaintType, Point, TraversalState, VisualiserConfig};
use pathviz_paths::{lookup, run_algorithm};

use crate::session::Session;

/// Pointer state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerState {
    Idle,
    /// A button is held; `last` is the most recently painted cell.
    Painting { last: Point },
}

/// Why a request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// An animation is playing.
    Busy,
    /// The target cell holds the start or goal marker.
    ProtectedCell,
    OutOfBounds,
    /// Pointer-enter without a pointer-down first.
    NotPainting,
    /// Pointer-enter over the cell that was just painted.
    SameCell,
    UnknownAlgorithm,
    /// The search engine refused the grid.
    InvalidGrid,
}

/// A user-facing message that does not change any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoAlgorithm,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAlgorithm => f.write_str("Choose an algorithm!"),
        }
    }
}

/// Result of a controller request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
    Notice(Notice),
}

impl Outcome {
    #[inline]
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Owns the grid and arbitrates between user edits and playback.
#[derive(Debug)]
pub struct Controller {
    grid: Grid,
    session: Session,
    scheduler: AnimationScheduler,
    pointer: PointerState,
    interval: Duration,
}

impl Controller {
    /// Create a controller with a fresh default grid.
    pub fn new(config: &VisualiserConfig) -> Result<Self, GridError> {
        let endpoints = Endpoints::default_for(config.height, config.width);
        let grid = Grid::new(config.width, config.height, endpoints)?;
        Ok(Self {
            grid,
            session: Session::new(endpoints),
            scheduler: AnimationScheduler::new(),
            pointer: PointerState::Idle,
            interval: config.interval,
        })
    }

    // -----------------------------------------------------------------------
    // Read side
    // -----------------------------------------------------------------------

    /// The current grid snapshot.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Whether an animation is playing.
    pub fn is_busy(&self) -> bool {
        self.scheduler.is_busy()
    }

    /// Events fired and total events of the current (or last) animation.
    pub fn progress(&self) -> (usize, usize) {
        self.scheduler.progress()
    }


    // -----------------------------------------------------------------------
    // Session settings
    // -----------------------------------------------------------------------

    /// Choose the brush used by subsequent paints.
    pub fn select_paint_type(&mut self, paint: PaintType) -> Outcome {
        self.session.paint = paint;
        Outcome::Applied
    }

    /// Choose the strategy used by the next play.
    pub fn select_algorithm(&mut self, name: &str) -> Outcome {
        match lookup(name) {
            Some(strategy) => {
                self.session.algorithm = Some(strategy);
                Outcome::Applied
            }
            None => Outcome::Rejected(Rejection::UnknownAlgorithm),
        }
    }

    // -----------------------------------------------------------------------
    // Pointer state machine
    // -----------------------------------------------------------------------

    /// Button pressed over `pos`: start painting and paint that cell.
    pub fn pointer_down(&mut self, pos: Point) -> Outcome {
        if self.is_busy() {
            return Outcome::Rejected(Rejection::Busy);
        }
        self.pointer = PointerState::Painting { last: pos };
        self.paint(pos)
    }

    /// Pointer moved onto `pos`: paint it if a button is held.
    pub fn pointer_enter(&mut self, pos: Point) -> Outcome {
        let PointerState::Painting { last } = self.pointer else {
            return Outcome::Rejected(Rejection::NotPainting);
        };
        if last == pos {
            return Outcome::Rejected(Rejection::SameCell);
        }
        if self.is_busy() {
            return Outcome::Rejected(Rejection::Busy);
        }
        self.pointer = PointerState::Painting { last: pos };
        self.paint(pos)
    }

    /// Button released anywhere.
    pub fn pointer_up(&mut self) -> Outcome {
        self.pointer = PointerState::Idle;
        Outcome::Applied
    }

    fn paint(&mut self, pos: Point) -> Outcome {
        let Some(cell) = self.grid.at(pos) else {
            return Outcome::Rejected(Rejection::OutOfBounds);
        };
        if cell.cell_type.is_endpoint() {
            return Outcome::Rejected(Rejection::ProtectedCell);
        }
        self.grid = self
            .grid
            .toggle_cell_type(pos, self.session.paint, &mut self.session.endpoints);
        Outcome::Applied
    }

    // -----------------------------------------------------------------------
    // Play / clear
    // -----------------------------------------------------------------------

    /// Clear the previous run, search with the selected strategy, and start
    /// animating the result at `now`.
    pub fn play(&mut self, now: Instant) -> Outcome {
        if self.is_busy() {
            return Outcome::Rejected(Rejection::Busy);
        }
        let Some(strategy) = self.session.algorithm else {
            log::info!("play requested with no algorithm selected");
            return Outcome::Notice(Notice::NoAlgorithm);
        };

        let cleared = self.grid.clear_path();
        let Endpoints { start, goal } = self.session.endpoints;
        let result = match run_algorithm(strategy.name, &cleared, start, goal) {
            Ok(result) => result,
            Err(e) => {
                log::error!("{}: {e}", strategy.name);
                return Outcome::Rejected(Rejection::InvalidGrid);
            }
        };
        self.grid = cleared;

        let schedule = Schedule::build(&result.visited, &result.path, self.interval);
        match self.scheduler.start(schedule, now) {
            Ok(()) => Outcome::Applied,
            Err(_) => Outcome::Rejected(Rejection::Busy),
        }
    }

    /// Reset traversal states, keeping walls and markers.
    pub fn clear_path(&mut self) -> Outcome {
        if self.is_busy() {
            return Outcome::Rejected(Rejection::Busy);
        }
        self.grid = self.grid.clear_path();
        Outcome::Applied
    }

    /// Remove all walls and traversal states; start and goal stay at their
    /// remembered coordinates.
    pub fn clear_grid(&mut self) -> Outcome {
        if self.is_busy() {
            return Outcome::Rejected(Rejection::Busy);
        }
        self.grid = self.grid.clear_grid(&self.session.endpoints);
        Outcome::Applied
    }

    /// Apply every animation event due at `now`. Returns how many fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let updates: Vec<(Point, TraversalState)> = self
            .scheduler
            .poll(now)
            .into_iter()
            .map(|e| (e.pos, e.state))
            .collect();
        if !updates.is_empty() {
            log::trace!("applying {} traversal updates", updates.len());
            self.grid = self.grid.with_traversal(&updates);
        }
        updates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::CellType;
    use pathviz_paths::{BFS, DFS};

    const MS10: Duration = Duration::from_millis(10);

    fn controller(width: i32, height: i32) -> Controller {
        Controller::new(&VisualiserConfig {
            width,
            height,
            interval: MS10,
        })
        .unwrap()
    }

    fn count(grid: &Grid, state: TraversalState) -> usize {
        grid.iter().filter(|c| c.traversal == state).count()
    }

    #[test]
    fn drag_paints_walls_until_release() {
        let mut c = controller(6, 4);
        assert!(c.pointer_down(Point::at(1, 1)).is_applied());
        assert_eq!(c.pointer(), PointerState::Painting { last: Point::at(1, 1) });
        assert!(c.pointer_enter(Point::at(1, 2)).is_applied());
        assert_eq!(
            c.pointer_enter(Point::at(1, 2)),
            Outcome::Rejected(Rejection::SameCell)
        );
        assert!(c.pointer_up().is_applied());
        assert_eq!(c.pointer(), PointerState::Idle);
        assert_eq!(
            c.pointer_enter(Point::at(1, 3)),
            Outcome::Rejected(Rejection::NotPainting)
        );
        assert_eq!(c.grid().count_type(CellType::Wall), 2);
    }

    #[test]
    fn moving_start_updates_remembered_coordinate() {
        let mut c = controller(6, 4);
        c.select_paint_type(PaintType::Start);
        assert!(c.pointer_down(Point::at(2, 3)).is_applied());
        c.pointer_up();
        assert_eq!(c.session().endpoints.start, Point::at(2, 3));
        assert_eq!(c.grid().start(), Some(Point::at(2, 3)));
        c.grid().validate().unwrap();
    }

    #[test]
    fn markers_are_protected() {
        let mut c = controller(6, 4);
        let goal = c.session().endpoints.goal;
        assert_eq!(
            c.pointer_down(goal),
            Outcome::Rejected(Rejection::ProtectedCell)
        );
        // The press still starts a drag.
        assert!(matches!(c.pointer(), PointerState::Painting { .. }));
        assert_eq!(
            c.pointer_enter(Point::at(-1, 0)),
            Outcome::Rejected(Rejection::OutOfBounds)
        );
    }

    #[test]
    fn play_without_algorithm_is_a_notice() {
        let mut c = controller(6, 4);
        let before = c.grid().clone();
        assert_eq!(c.play(Instant::now()), Outcome::Notice(Notice::NoAlgorithm));
        assert!(!c.is_busy());
        assert_eq!(c.grid(), &before);
        assert_eq!(Notice::NoAlgorithm.to_string(), "Choose an algorithm!");
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let mut c = controller(6, 4);
        assert_eq!(
            c.select_algorithm("Select Algorithm"),
            Outcome::Rejected(Rejection::UnknownAlgorithm)
        );
        assert_eq!(c.session().algorithm_name(), None);
    }

    #[test]
    fn play_animates_to_completion() {
        let mut c = controller(6, 4);
        c.select_algorithm(BFS);
        let t0 = Instant::now();
        assert!(c.play(t0).is_applied());
        assert!(c.is_busy());

        let (_, total) = c.progress();
        let mut fired = 0;
        let mut step = 0;
        while c.is_busy() {
            fired += c.tick(t0 + MS10 * step);
            step += 1;
        }
        assert_eq!(fired, total);
        // The last event fires at interval * (total - 1).
        assert_eq!(step as usize, total);

        // Start (0,0) to goal (3,5) on an open 6x4 grid: 9 cells.
        assert_eq!(count(c.grid(), TraversalState::Path), 9);
        assert!(count(c.grid(), TraversalState::Visited) > 0);
        c.grid().validate().unwrap();
    }

    #[test]
    fn edits_are_refused_while_busy() {
        let mut c = controller(6, 4);
        c.select_algorithm(DFS);
        let t0 = Instant::now();
        c.play(t0);
        c.tick(t0 + MS10 * 2);
        let snapshot = c.grid().clone();

        assert_eq!(c.pointer_down(Point::at(2, 2)), Outcome::Rejected(Rejection::Busy));
        assert_eq!(c.pointer(), PointerState::Idle);
        assert_eq!(c.play(t0), Outcome::Rejected(Rejection::Busy));
        assert_eq!(c.clear_path(), Outcome::Rejected(Rejection::Busy));
        assert_eq!(c.clear_grid(), Outcome::Rejected(Rejection::Busy));
        assert_eq!(c.grid(), &snapshot);
        assert!(c.is_busy());

        // Settings are not edits.
        assert!(c.select_paint_type(PaintType::Goal).is_applied());
        assert!(c.select_algorithm(BFS).is_applied());
    }

    #[test]
    fn drag_started_before_play_stops_painting_during_it() {
        let mut c = controller(6, 4);
        c.select_algorithm(BFS);
        c.pointer_down(Point::at(2, 1));
        c.play(Instant::now());
        assert_eq!(
            c.pointer_enter(Point::at(2, 2)),
            Outcome::Rejected(Rejection::Busy)
        );
        assert!(c.pointer_up().is_applied());
    }

    #[test]
    fn enclosed_goal_clears_busy_after_visited_phase() {
        let mut c = controller(6, 4);
        c.select_algorithm(BFS);
        // Goal defaults to (3,5); wall it in.
        c.pointer_down(Point::at(2, 5));
        c.pointer_enter(Point::at(2, 4));
        c.pointer_enter(Point::at(3, 4));
        c.pointer_up();

        let t0 = Instant::now();
        c.play(t0);
        c.tick(t0 + Duration::from_secs(60));
        assert!(!c.is_busy());
        assert_eq!(count(c.grid(), TraversalState::Path), 0);
        // Everything but the three walls and the goal.
        assert_eq!(count(c.grid(), TraversalState::Visited), 24 - 4);
    }

    #[test]
    fn replay_clears_previous_run_first() {
        let mut c = controller(6, 4);
        c.select_algorithm(BFS);
        let t0 = Instant::now();
        c.play(t0);
        c.tick(t0 + Duration::from_secs(60));
        let finished = c.grid().clone();

        let t1 = t0 + Duration::from_secs(61);
        c.play(t1);
        assert_eq!(count(c.grid(), TraversalState::Visited), 0);
        assert_eq!(count(c.grid(), TraversalState::Path), 0);
        c.tick(t1 + Duration::from_secs(60));
        assert_eq!(c.grid(), &finished);
    }

    #[test]
    fn clear_grid_keeps_relocated_markers() {
        let mut c = controller(6, 4);
        c.select_paint_type(PaintType::Goal);
        c.pointer_down(Point::at(0, 5));
        c.select_paint_type(PaintType::Wall);
        c.pointer_enter(Point::at(1, 5));
        c.pointer_up();

        assert!(c.clear_grid().is_applied());
        assert_eq!(c.grid().goal(), Some(Point::at(0, 5)));
        assert_eq!(c.grid().count_type(CellType::Wall), 0);
        let once = c.grid().clone();
        c.clear_grid();
        assert_eq!(c.grid(), &once);
    }

    #[test]
    fn refused_grid_keeps_previous_run() {
        let mut c = controller(6, 4);
        c.select_algorithm(BFS);
        let t0 = Instant::now();
        c.play(t0);
        c.tick(t0 + Duration::from_secs(10));
        assert!(!c.is_busy());
        let finished = c.grid().clone();

        // Remembered start no longer holds the marker.
        c.session.endpoints.start = Point::at(1, 1);
        assert_eq!(
            c.play(t0 + Duration::from_secs(11)),
            Outcome::Rejected(Rejection::InvalidGrid)
        );
        assert!(!c.is_busy());
        assert_eq!(c.grid(), &finished);
        assert!(count(c.grid(), TraversalState::Path) > 0);
    }
}
