//! Errors raised while building or validating a [`Grid`](crate::grid::Grid).

use thiserror::Error;

use crate::geom::Point;

/// Grid construction and invariant errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid {width}x{height} cannot hold distinct start and goal cells")]
    TooSmall { width: i32, height: i32 },

    #[error("{0} lies outside the grid")]
    OutOfBounds(Point),

    #[error("start and goal both placed at {0}")]
    SameEndpoints(Point),

    #[error("expected exactly one {role} cell, found {count}")]
    RoleCount { role: &'static str, count: usize },

    #[error("cell stored at {stored} sits at matrix position {actual}")]
    Misplaced { stored: Point, actual: Point },
}
