use std::collections::BinaryHeap;

use pathviz_core::{Point, Range};

use crate::space::{SearchResult, SearchSpace};
use crate::traits::AstarPather;

/// Greedy best-first search from `from` to `to`, ordered by `estimate`
/// alone.
///
/// Each cell keeps the predecessor it was first discovered from. Fast on
/// open grids but the path is not guaranteed shortest.
pub fn greedy<P: AstarPather>(pather: &P, rng: Range, from: Point, to: Point) -> SearchResult {
    let mut space = SearchSpace::new(rng);
    let mut result = SearchResult::default();
    let (Some(si), Some(gi)) = (space.idx(from), space.idx(to)) else {
        return result;
    };

    let mut open = BinaryHeap::new();
    // `cost` doubles as the discovered marker here.
    space.cost[si] = 0;
    let root = space.node(si, pather.estimate(from, to));
    open.push(root);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if space.closed[ci] {
            continue;
        }
        space.closed[ci] = true;

        let cp = space.point(ci);
        result.visited.push(cp);
        if ci == gi {
            result.path = space.reconstruct(gi);
            break;
        }

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = space.idx(np) else {
                continue;
            };
            if space.closed[ni] || space.cost[ni] == 0 {
                continue;
            }
            space.cost[ni] = 0;
            space.parent[ni] = ci;
            let node = space.node(ni, pather.estimate(np, to));
            open.push(node);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_valid_path, grid_from};

    #[test]
    fn heads_straight_for_the_goal() {
        let g = grid_from(&[".....", "S...G", "....."]);
        let r = greedy(&g, g.range(), g.start().unwrap(), g.goal().unwrap());
        assert_valid_path(&g, &r);
        assert_eq!(r.visited.len(), 5);
    }

    #[test]
    fn detours_around_walls() {
        let g = grid_from(&["S.#..", "..#..", ".....", "..#.G"]);
        let r = greedy(&g, g.range(), g.start().unwrap(), g.goal().unwrap());
        assert_valid_path(&g, &r);
    }

    #[test]
    fn unreachable_goal() {
        let g = grid_from(&["S.#.", "..#G"]);
        let r = greedy(&g, g.range(), g.start().unwrap(), g.goal().unwrap());
        assert!(r.path.is_empty());
        assert_eq!(r.visited.len(), 4);
    }
}
