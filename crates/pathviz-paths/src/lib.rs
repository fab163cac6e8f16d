//! Search strategies for the pathfinding visualiser.
//!
//! Every strategy is a pure function over a [`Pather`] that returns a
//! [`SearchResult`]: the order in which cells were expanded and the path
//! from start to goal (empty when the goal is unreachable). All strategies
//! share the same predecessor-based path reconstruction and expand
//! neighbors in the fixed order up, down, left, right.
//!
//! - **BFS** ([`bfs`]): shortest by cell count
//! - **DFS** ([`dfs`]): depth-first, not shortest
//! - **Dijkstra** ([`dijkstra`]): uniform cost, shortest
//! - **A\*** ([`astar`]): Manhattan heuristic, shortest
//! - **Greedy best-first** ([`greedy`]): heuristic only, not shortest
//!
//! Strategies are registered by display name; see [`run_algorithm`],
//! [`lookup`] and [`describe`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A*, greedy |

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod greedy;
mod grid;
mod registry;
mod space;
mod traits;

#[cfg(test)]
mod testutil;

pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use greedy::greedy;
pub use registry::{
    ASTAR, BFS, DFS, DIJKSTRA, EngineError, GREEDY, Strategy, describe, lookup, run_algorithm,
    strategies,
};
pub use space::SearchResult;
pub use traits::{AstarPather, Pather, WeightedPather};
