//! Named search strategies and the [`run_algorithm`] entry point.

use pathviz_core::{CellType, Grid, GridError, Point};
use thiserror::Error;

use crate::astar::astar;
use crate::bfs::bfs;
use crate::dfs::dfs;
use crate::dijkstra::dijkstra;
use crate::greedy::greedy;
use crate::space::SearchResult;

/// Errors from [`run_algorithm`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("malformed grid: {0}")]
    InvariantViolation(#[from] GridError),

    #[error("{role} argument {pos} does not hold the {role} marker")]
    EndpointMismatch { role: &'static str, pos: Point },
}

/// A search strategy: a pure function from (grid, start, goal) to a
/// [`SearchResult`], with a display name and description.
#[derive(Clone, Copy)]
pub struct Strategy {
    pub name: &'static str,
    pub description: &'static str,
    pub run: fn(&Grid, Point, Point) -> SearchResult,
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name).finish()
    }
}

pub const BFS: &str = "Breadth-First Search";
pub const DFS: &str = "Depth-First Search";
pub const DIJKSTRA: &str = "Dijkstra's Algorithm";
pub const ASTAR: &str = "A* Search";
pub const GREEDY: &str = "Greedy Best-First Search";

static STRATEGIES: [Strategy; 5] = [
    Strategy {
        name: BFS,
        description: "Explores the grid in rings of equal distance from the start. \
                      Unweighted; guarantees the shortest path.",
        run: run_bfs,
    },
    Strategy {
        name: DFS,
        description: "Follows one direction as deep as it can before backtracking. \
                      Unweighted; does not guarantee the shortest path.",
        run: run_dfs,
    },
    Strategy {
        name: DIJKSTRA,
        description: "Settles cells in order of accumulated cost from the start. \
                      Weighted; guarantees the shortest path.",
        run: run_dijkstra,
    },
    Strategy {
        name: ASTAR,
        description: "Orders cells by cost so far plus Manhattan distance to the goal. \
                      Weighted; guarantees the shortest path.",
        run: run_astar,
    },
    Strategy {
        name: GREEDY,
        description: "Always expands the cell that looks closest to the goal. \
                      Fast, but does not guarantee the shortest path.",
        run: run_greedy,
    },
];

fn run_bfs(grid: &Grid, start: Point, goal: Point) -> SearchResult {
    bfs(grid, grid.range(), start, goal)
}

fn run_dfs(grid: &Grid, start: Point, goal: Point) -> SearchResult {
    dfs(grid, grid.range(), start, goal)
}

fn run_dijkstra(grid: &Grid, start: Point, goal: Point) -> SearchResult {
    dijkstra(grid, grid.range(), start, goal)
}

fn run_astar(grid: &Grid, start: Point, goal: Point) -> SearchResult {
    astar(grid, grid.range(), start, goal)
}

fn run_greedy(grid: &Grid, start: Point, goal: Point) -> SearchResult {
    greedy(grid, grid.range(), start, goal)
}

/// All registered strategies, in menu order.
pub fn strategies() -> &'static [Strategy] {
    &STRATEGIES
}

/// Look up a strategy by name.
pub fn lookup(name: &str) -> Option<&'static Strategy> {
    STRATEGIES.iter().find(|s| s.name == name)
}

/// The description of the named strategy.
pub fn describe(name: &str) -> Option<&'static str> {
    lookup(name).map(|s| s.description)
}

/// Run the named strategy over `grid` from `start` to `goal`.
///
/// The grid is only read. An unreachable goal is not an error: the result
/// then has an empty path.
pub fn run_algorithm(
    name: &str,
    grid: &Grid,
    start: Point,
    goal: Point,
) -> Result<SearchResult, EngineError> {
    let strategy = lookup(name).ok_or_else(|| EngineError::UnknownAlgorithm(name.to_owned()))?;
    grid.validate()?;
    for (role, pos, cell_type) in [
        ("start", start, CellType::Start),
        ("goal", goal, CellType::Goal),
    ] {
        if grid.at(pos).map(|c| c.cell_type) != Some(cell_type) {
            return Err(EngineError::EndpointMismatch { role, pos });
        }
    }

    let result = (strategy.run)(grid, start, goal);
    log::debug!(
        "{}: expanded {} cells, path of {} cells",
        strategy.name,
        result.visited.len(),
        result.path.len()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_valid_path, grid_from};

    #[test]
    fn every_strategy_is_described_and_runs() {
        let g = grid_from(&["S.#..", "..#..", ".....", "..#.G"]);
        let (s, t) = (g.start().unwrap(), g.goal().unwrap());
        for strategy in strategies() {
            assert!(!strategy.description.is_empty());
            assert_eq!(describe(strategy.name), Some(strategy.description));
            let r = run_algorithm(strategy.name, &g, s, t).unwrap();
            assert_valid_path(&g, &r);
            assert!(r.visited.iter().all(|&p| g.is_passable(p)), "{}", strategy.name);
            assert_eq!(r.visited.first(), Some(&s));
            assert_eq!(r.visited.last(), Some(&t));
        }
    }

    #[test]
    fn shortest_strategies_agree() {
        let g = grid_from(&["S#...", ".#.#.", "...#G"]);
        let (s, t) = (g.start().unwrap(), g.goal().unwrap());
        let lens: Vec<usize> = [BFS, DIJKSTRA, ASTAR]
            .iter()
            .map(|n| run_algorithm(n, &g, s, t).unwrap().path.len())
            .collect();
        assert_eq!(lens, vec![11, 11, 11]);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let g = grid_from(&["S.G"]);
        assert_eq!(
            run_algorithm("Select Algorithm", &g, Point::at(0, 0), Point::at(0, 2)),
            Err(EngineError::UnknownAlgorithm("Select Algorithm".into()))
        );
        assert_eq!(describe("nope"), None);
    }

    #[test]
    fn mismatched_endpoints_are_invariant_failures() {
        let g = grid_from(&["S.G"]);
        assert_eq!(
            run_algorithm(BFS, &g, Point::at(0, 1), Point::at(0, 2)),
            Err(EngineError::EndpointMismatch {
                role: "start",
                pos: Point::at(0, 1)
            })
        );
    }

    #[test]
    fn grid_is_not_modified() {
        let g = grid_from(&["S..", ".#.", "..G"]);
        let before = g.clone();
        for strategy in strategies() {
            run_algorithm(strategy.name, &g, Point::at(0, 0), Point::at(2, 2)).unwrap();
        }
        assert_eq!(g, before);
    }
}
