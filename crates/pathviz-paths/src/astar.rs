use std::collections::BinaryHeap;

use pathviz_core::{Point, Range};

use crate::space::{SearchResult, SearchSpace};
use crate::traits::AstarPather;

/// A* search from `from` to `to`, ordered by `g + estimate`.
///
/// With an admissible, consistent heuristic the returned path is shortest.
/// Cells are recorded in `visited` when they are closed.
pub fn astar<P: AstarPather>(pather: &P, rng: Range, from: Point, to: Point) -> SearchResult {
    let mut space = SearchSpace::new(rng);
    let mut result = SearchResult::default();
    let (Some(si), Some(gi)) = (space.idx(from), space.idx(to)) else {
        return result;
    };

    let mut open = BinaryHeap::new();
    space.cost[si] = 0;
    let root = space.node(si, pather.estimate(from, to));
    open.push(root);

    let mut nbuf = Vec::with_capacity(4);

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };
        let ci = current.idx;
        if space.closed[ci] {
            continue;
        }
        space.closed[ci] = true;

        let cp = space.point(ci);
        result.visited.push(cp);
        if ci == gi {
            break 'search true;
        }

        let current_g = space.cost[ci];
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = space.idx(np) else {
                continue;
            };
            if space.closed[ni] {
                continue;
            }
            let tentative_g = current_g + pather.cost(cp, np);
            if tentative_g >= space.cost[ni] {
                continue;
            }
            space.cost[ni] = tentative_g;
            space.parent[ni] = ci;
            let node = space.node(ni, tentative_g + pather.estimate(np, to));
            open.push(node);
        }
    };

    if found {
        result.path = space.reconstruct(gi);
    }
    result
}
