use pathviz_core::{Point, Range};

use crate::space::{NO_PARENT, SearchResult, SearchSpace};
use crate::traits::Pather;

/// Depth-first search from `from` to `to`.
///
/// Iterative; each stack entry carries the cell it was pushed from, which
/// becomes the cell's predecessor when it is first popped. Neighbors are
/// pushed in reverse so the first neighbor (up) is explored first. The path
/// is whatever branch reached the goal and is generally not the shortest.
pub fn dfs<P: Pather>(pather: &P, rng: Range, from: Point, to: Point) -> SearchResult {
    let mut space = SearchSpace::new(rng);
    let mut result = SearchResult::default();
    let (Some(si), Some(gi)) = (space.idx(from), space.idx(to)) else {
        return result;
    };

    let mut stack: Vec<(usize, usize)> = vec![(si, NO_PARENT)];
    let mut nbuf = Vec::with_capacity(4);

    while let Some((ci, parent)) = stack.pop() {
        if space.closed[ci] {
            continue;
        }
        space.closed[ci] = true;
        space.parent[ci] = parent;

        let cp = space.point(ci);
        result.visited.push(cp);
        if ci == gi {
            result.path = space.reconstruct(gi);
            break;
        }

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter().rev() {
            if let Some(ni) = space.idx(np) {
                if !space.closed[ni] {
                    stack.push((ni, ci));
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_valid_path, grid_from};

    #[test]
    fn dives_up_before_other_directions() {
        let g = grid_from(&["...", ".S.", "..G"]);
        let r = dfs(&g, g.range(), g.start().unwrap(), g.goal().unwrap());
        assert_eq!(r.visited[0], Point::at(1, 1));
        assert_eq!(r.visited[1], Point::at(0, 1));
        assert_valid_path(&g, &r);
    }

    #[test]
    fn finds_a_path_when_one_exists() {
        let g = grid_from(&["S.#..", "..#..", ".....", "..#.G"]);
        let r = dfs(&g, g.range(), g.start().unwrap(), g.goal().unwrap());
        assert_valid_path(&g, &r);
        assert_eq!(r.visited.last(), Some(&Point::at(3, 4)));
    }

    #[test]
    fn unreachable_goal_visits_whole_component() {
        let g = grid_from(&["S.#G", "..##"]);
        let r = dfs(&g, g.range(), g.start().unwrap(), g.goal().unwrap());
        assert!(r.path.is_empty());
        assert_eq!(r.visited.len(), 4);
    }
}
