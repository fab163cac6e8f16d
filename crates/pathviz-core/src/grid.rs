//! The [`Grid`] type: the search grid and its copy-on-write edits.
//!
//! Unlike a shared frame buffer, every editing operation here returns a new
//! `Grid` with its own cell storage. An older value held elsewhere (say, by a
//! renderer mid-draw) is never touched by later edits.

use crate::cell::{Cell, CellType, PaintType, TraversalState};
use crate::error::GridError;
use crate::geom::{Point, Range};

/// Default grid height in rows.
pub const DEFAULT_HEIGHT: i32 = 20;
/// Default grid width in columns.
pub const DEFAULT_WIDTH: i32 = 50;

/// Offset of the default start/goal markers from the grid corners.
const MARKER_INSET: i32 = 5;

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// The remembered start and goal coordinates of a session.
///
/// These live outside the grid so they survive edits that temporarily
/// remove a marker (e.g. [`Grid::clear_grid`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoints {
    pub start: Point,
    pub goal: Point,
}

impl Endpoints {
    /// Default marker placement for a `height`×`width` grid.
    ///
    /// Start sits at (5, 5) and goal at (h-5, w-5) when both fit and differ;
    /// smaller grids fall back to opposite corners.
    pub fn default_for(height: i32, width: i32) -> Self {
        let start = Point::at(MARKER_INSET, MARKER_INSET);
        let goal = Point::at(height - MARKER_INSET, width - MARKER_INSET);
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        if bounds.contains(start) && bounds.contains(goal) && start != goal {
            return Self { start, goal };
        }
        Self {
            start: Point::ZERO,
            goal: Point::at(height - 1, width - 1),
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed-size, row-major matrix of [`Cell`]s with exactly one start and
/// one goal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

/// Create a `height`×`width` grid with the default start and goal markers.
pub fn create_grid(height: i32, width: i32) -> Result<Grid, GridError> {
    Grid::new(width, height, Endpoints::default_for(height, width))
}

impl Grid {
    /// Create a grid of empty cells with start and goal at `endpoints`.
    pub fn new(width: i32, height: i32, endpoints: Endpoints) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 || (width == 1 && height == 1) {
            return Err(GridError::TooSmall { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        for p in [endpoints.start, endpoints.goal] {
            if !bounds.contains(p) {
                return Err(GridError::OutOfBounds(p));
            }
        }
        if endpoints.start == endpoints.goal {
            return Err(GridError::SameEndpoints(endpoints.start));
        }

        let mut grid = Self {
            cells: bounds.iter().map(Cell::new).collect(),
            width,
            height,
        };
        grid.place_markers(&endpoints);
        Ok(grid)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    fn place_markers(&mut self, endpoints: &Endpoints) {
        if let Some(i) = self.index(endpoints.start) {
            self.cells[i] = Cell::new(endpoints.start).with_type(CellType::Start);
        }
        if let Some(i) = self.index(endpoints.goal) {
            self.cells[i] = Cell::new(endpoints.goal).with_type(CellType::Goal);
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn range(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| !c.is_wall())
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Iterator over the rows of the grid.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.width as usize)
    }

    /// Number of cells of the given type.
    pub fn count_type(&self, cell_type: CellType) -> usize {
        self.cells.iter().filter(|c| c.cell_type == cell_type).count()
    }

    /// Position of the first cell holding `cell_type`.
    fn find(&self, cell_type: CellType) -> Option<Point> {
        self.cells
            .iter()
            .find(|c| c.cell_type == cell_type)
            .map(|c| c.pos)
    }

    /// Position of the start cell.
    pub fn start(&self) -> Option<Point> {
        self.find(CellType::Start)
    }

    /// Position of the goal cell.
    pub fn goal(&self) -> Option<Point> {
        self.find(CellType::Goal)
    }

    /// Check the grid's structural invariants: exactly one start and one
    /// goal, and every cell's coordinate matching its position.
    pub fn validate(&self) -> Result<(), GridError> {
        for (role, cell_type) in [("start", CellType::Start), ("goal", CellType::Goal)] {
            let count = self.count_type(cell_type);
            if count != 1 {
                return Err(GridError::RoleCount { role, count });
            }
        }
        for (actual, cell) in self.range().iter().zip(self.cells.iter()) {
            if cell.pos != actual {
                return Err(GridError::Misplaced {
                    stored: cell.pos,
                    actual,
                });
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Copy-on-write edits
    // -----------------------------------------------------------------------

    /// Paint the cell at `p` with `paint`, returning the edited grid.
    ///
    /// Painting start or goal moves that marker: the old marker cell is
    /// reset and `endpoints` is updated to `p`. The start and goal cells are
    /// never painted over; such requests (and out-of-bounds ones) return an
    /// unchanged copy.
    pub fn toggle_cell_type(&self, p: Point, paint: PaintType, endpoints: &mut Endpoints) -> Grid {
        let mut next = self.clone();
        let Some(target) = next.index(p) else {
            return next;
        };
        if next.cells[target].cell_type.is_endpoint() {
            return next;
        }

        let moved = match paint {
            PaintType::Start => Some(&mut endpoints.start),
            PaintType::Goal => Some(&mut endpoints.goal),
            PaintType::Wall | PaintType::Eraser => None,
        };
        if let Some(marker) = moved {
            if let Some(old) = next.index(*marker) {
                if next.cells[old].cell_type == paint.cell_type() {
                    next.cells[old] = Cell::new(*marker);
                }
            }
            *marker = p;
        }

        next.cells[target].cell_type = paint.cell_type();
        next
    }

    /// Reset every cell's traversal state, keeping cell types.
    pub fn clear_path(&self) -> Grid {
        let mut next = self.clone();
        for cell in next.cells.iter_mut() {
            cell.traversal = TraversalState::Unvisited;
        }
        next
    }

    /// Reset every cell, then re-place start and goal at `endpoints`.
    pub fn clear_grid(&self, endpoints: &Endpoints) -> Grid {
        let mut next = Grid {
            cells: self.range().iter().map(Cell::new).collect(),
            width: self.width,
            height: self.height,
        };
        next.place_markers(endpoints);
        next
    }

    /// Apply a batch of traversal-state updates in order.
    ///
    /// Points outside the grid are skipped.
    pub fn with_traversal(&self, updates: &[(Point, TraversalState)]) -> Grid {
        let mut next = self.clone();
        for &(p, state) in updates {
            if let Some(i) = next.index(p) {
                next.cells[i].traversal = state;
            }
        }
        next
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = create_grid(4, 5).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
