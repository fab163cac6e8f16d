use std::collections::BinaryHeap;

use pathviz_core::{Point, Range};

use crate::space::{SearchResult, SearchSpace};
use crate::traits::WeightedPather;

/// Uniform-cost (Dijkstra) search from `from` to `to`.
///
/// Cells are recorded in `visited` when they are settled, i.e. popped with
/// their final cost. Equal-cost cells settle in the order they were queued.
pub fn dijkstra<P: WeightedPather>(pather: &P, rng: Range, from: Point, to: Point) -> SearchResult {
    let mut space = SearchSpace::new(rng);
    let mut result = SearchResult::default();
    let (Some(si), Some(gi)) = (space.idx(from), space.idx(to)) else {
        return result;
    };

    let mut open = BinaryHeap::new();
    space.cost[si] = 0;
    let root = space.node(si, 0);
    open.push(root);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Skip stale entries.
        if space.closed[ci] || current.f != space.cost[ci] {
            continue;
        }
        space.closed[ci] = true;

        let cp = space.point(ci);
        result.visited.push(cp);
        if ci == gi {
            result.path = space.reconstruct(gi);
            break;
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
            let tentative = current_g + pather.cost(cp, np);
            if tentative >= space.cost[ni] {
                continue;
            }
            space.cost[ni] = tentative;
            space.parent[ni] = ci;
            let node = space.node(ni, tentative);
            open.push(node);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs;
    use crate::testutil::{assert_valid_path, grid_from};

    #[test]
    fn unit_costs_match_bfs_length() {
        let g = grid_from(&["S#...", ".#.#.", "...#G"]);
        let (s, t) = (g.start().unwrap(), g.goal().unwrap());
        let d = dijkstra(&g, g.range(), s, t);
        assert_valid_path(&g, &d);
        assert_eq!(d.path.len(), bfs(&g, g.range(), s, t).path.len());
    }

    #[test]
    fn settles_in_cost_order() {
        let g = grid_from(&["....", ".S..", "...G"]);
        let d = dijkstra(&g, g.range(), g.start().unwrap(), g.goal().unwrap());
        let s = g.start().unwrap();
        let costs: Vec<i32> = d.visited.iter().map(|&p| crate::manhattan(s, p)).collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn unreachable_goal() {
        let g = grid_from(&["S.#.", "..#G"]);
        let d = dijkstra(&g, g.range(), g.start().unwrap(), g.goal().unwrap());
        assert!(d.path.is_empty());
        assert_eq!(d.visited.len(), 4);
    }
}
