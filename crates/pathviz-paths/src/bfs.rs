use std::collections::VecDeque;

use pathviz_core::{Point, Range};

use crate::space::{SearchResult, SearchSpace};
use crate::traits::Pather;

/// Breadth-first search from `from` to `to`.
///
/// Every step has cost 1, so the returned path has the minimum number of
/// cells. Cells are recorded in `visited` as they are dequeued; the search
/// stops once the goal is dequeued.
pub fn bfs<P: Pather>(pather: &P, rng: Range, from: Point, to: Point) -> SearchResult {
    let mut space = SearchSpace::new(rng);
    let mut result = SearchResult::default();
    let (Some(si), Some(gi)) = (space.idx(from), space.idx(to)) else {
        return result;
    };

    let mut queue: VecDeque<usize> = VecDeque::new();
    space.closed[si] = true;
    queue.push_back(si);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
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
            // Discovered cells are marked on enqueue so each is queued once.
            if space.closed[ni] {
                continue;
            }
            space.closed[ni] = true;
            space.parent[ni] = ci;
            queue.push_back(ni);
        }
    }

    result
}
