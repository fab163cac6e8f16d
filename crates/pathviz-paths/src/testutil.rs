//! Grid fixtures for strategy tests.

use pathviz_core::{Endpoints, Grid, PaintType, Point};

use crate::distance::manhattan;
use crate::space::SearchResult;

/// Build a grid from rows of `S` (start), `G` (goal), `#` (wall) and `.`.
pub(crate) fn grid_from(rows: &[&str]) -> Grid {
    let height = rows.len() as i32;
    let width = rows[0].len() as i32;
    let find = |target: char| {
        rows.iter()
            .enumerate()
            .find_map(|(r, line)| {
                line.chars()
                    .position(|ch| ch == target)
                    .map(|c| Point::at(r as i32, c as i32))
            })
            .unwrap()
    };
    let mut endpoints = Endpoints {
        start: find('S'),
        goal: find('G'),
    };
    let mut grid = Grid::new(width, height, endpoints).unwrap();
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            if ch == '#' {
                let p = Point::at(r as i32, c as i32);
                grid = grid.toggle_cell_type(p, PaintType::Wall, &mut endpoints);
            }
        }
    }
    grid
}

/// Cell count of a straight-line Manhattan path between the endpoints.
pub(crate) fn manhattan_len(grid: &Grid) -> usize {
    (manhattan(grid.start().unwrap(), grid.goal().unwrap()) + 1) as usize
}

/// Assert that `result.path` is a contiguous, wall-free walk from start to
/// goal.
pub(crate) fn assert_valid_path(grid: &Grid, result: &SearchResult) {
    assert!(result.found(), "expected a path");
    assert_eq!(result.path.first().copied(), grid.start());
    assert_eq!(result.path.last().copied(), grid.goal());
    for w in result.path.windows(2) {
        assert_eq!(manhattan(w[0], w[1]), 1, "non-adjacent step {} -> {}", w[0], w[1]);
    }
    assert!(result.path.iter().all(|&p| grid.is_passable(p)));
}
