//! The [`Cell`] type: one addressable square of the search grid.

use crate::geom::Point;

/// What occupies a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    #[default]
    None,
    Wall,
    Start,
    Goal,
}

impl CellType {
    /// Whether the cell carries the start or goal role.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::Goal)
    }
}

/// How far a replayed search has progressed over a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalState {
    #[default]
    Unvisited,
    Visited,
    Path,
}

/// The brush selected by the user for painting cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaintType {
    #[default]
    Wall,
    Start,
    Goal,
    Eraser,
}

impl PaintType {
    /// The cell type this brush writes.
    #[inline]
    pub const fn cell_type(self) -> CellType {
        match self {
            Self::Wall => CellType::Wall,
            Self::Start => CellType::Start,
            Self::Goal => CellType::Goal,
            Self::Eraser => CellType::None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Start => "start",
            Self::Goal => "goal",
            Self::Eraser => "eraser",
        }
    }
}

/// A grid cell. `pos` always equals the cell's position in its [`Grid`].
///
/// [`Grid`]: crate::grid::Grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub cell_type: CellType,
    pub traversal: TraversalState,
}

impl Cell {
    /// An empty, unvisited cell at `pos`.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            cell_type: CellType::None,
            traversal: TraversalState::Unvisited,
        }
    }

    /// Set the cell type (builder).
    #[inline]
    pub const fn with_type(mut self, cell_type: CellType) -> Self {
        self.cell_type = cell_type;
        self
    }

    /// Set the traversal state (builder).
    #[inline]
    pub const fn with_traversal(mut self, traversal: TraversalState) -> Self {
        self.traversal = traversal;
        self
    }

    #[inline]
    pub const fn is_wall(&self) -> bool {
        matches!(self.cell_type, CellType::Wall)
    }
}
