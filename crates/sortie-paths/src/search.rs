//! Strategy selection and the shared search contract.

use sortie_core::{Grid, Point};

use crate::PathRange;
use crate::traits::AstarPather;

/// Which traversal strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchKind {
    /// FIFO frontier; shortest route by hop count.
    BreadthFirst,
    /// LIFO frontier; any route.
    DepthFirst,
    /// Open list ordered by cost plus heuristic estimate.
    AStar,
}

impl SearchKind {
    pub const ALL: [SearchKind; 3] = [
        SearchKind::BreadthFirst,
        SearchKind::DepthFirst,
        SearchKind::AStar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SearchKind::BreadthFirst => "Breadth First Search",
            SearchKind::DepthFirst => "Depth First Search",
            SearchKind::AStar => "A* Search",
        }
    }
}

/// What a successful search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMode {
    /// The route from start to goal, excluding the start.
    #[default]
    Path,
    /// Every expanded node in expansion order, ending with the goal.
    Visited,
}

/// A search that could not produce a result.
///
/// `start == goal` is not an error: it yields an empty route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("{0} is outside the searched range")]
    OutOfBounds(Point),

    #[error("no route from {start} to {goal}")]
    Unreachable { start: Point, goal: Point },
}

impl PathRange {
    /// Run the strategy selected by `kind`.
    pub fn find_path<P: AstarPather>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
        kind: SearchKind,
        mode: SearchMode,
    ) -> Result<Vec<Point>, SearchError> {
        let result = match kind {
            SearchKind::BreadthFirst => self.bfs_path(pather, start, goal, mode),
            SearchKind::DepthFirst => self.dfs_path(pather, start, goal, mode),
            SearchKind::AStar => self.astar_path(pather, start, goal, mode),
        };
        if let Ok(points) = &result {
            log::trace!(
                "{kind:?}/{mode:?} {start} -> {goal}: {} nodes, {} expanded",
                points.len(),
                self.trace.len()
            );
        }
        result
    }
}

/// One-shot search over `grid` with a fresh [`PathRange`].
pub fn find_path(
    grid: &Grid,
    start: Point,
    goal: Point,
    kind: SearchKind,
    mode: SearchMode,
) -> Result<Vec<Point>, SearchError> {
    PathRange::new(grid.range()).find_path(grid, start, goal, kind, mode)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::RngExt;
    use sortie_core::{Blockade, BlockadeId};

    use super::*;
    use crate::manhattan;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SearchError::OutOfBounds(p(-1, 0)).to_string(),
            "(-1, 0) is outside the searched range"
        );
        assert_eq!(
            SearchError::Unreachable { start: p(0, 0), goal: p(2, 2) }.to_string(),
            "no route from (0, 0) to (2, 2)"
        );
    }

    fn wall(grid: &mut Grid, at: Point) {
        let id = BlockadeId(grid.blockades().count() as u32 + 1);
        grid.place_blockade(at, Blockade::solid(id, "wall")).unwrap();
    }

    fn assert_walkable(grid: &Grid, start: Point, path: &[Point]) {
        let mut prev = start;
        for &step in path {
            assert_eq!(manhattan(prev, step), 1, "{prev} -> {step} is not a step");
            assert!(grid.is_passable(step), "{step} is blocked");
            prev = step;
        }
    }

    #[test]
    fn bfs_three_by_three_corner_to_corner() {
        let grid = Grid::new(3, 3);
        let path = find_path(&grid, p(0, 0), p(2, 2), SearchKind::BreadthFirst, SearchMode::Path)
            .unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.last(), Some(&p(2, 2)));
        assert!(!path.contains(&p(0, 0)));
        assert_walkable(&grid, p(0, 0), &path);
        assert_eq!(path, vec![p(1, 0), p(2, 0), p(2, 1), p(2, 2)]);
    }

    #[test]
    fn bfs_visited_trace_is_expansion_order() {
        let grid = Grid::new(3, 3);
        let trace =
            find_path(&grid, p(0, 0), p(2, 2), SearchKind::BreadthFirst, SearchMode::Visited)
                .unwrap();
        assert_eq!(
            trace,
            vec![
                p(0, 0),
                p(1, 0),
                p(0, 1),
                p(2, 0),
                p(1, 1),
                p(0, 2),
                p(2, 1),
                p(1, 2),
                p(2, 2),
            ]
        );
    }

    #[test]
    fn dfs_follows_lifo_order() {
        let grid = Grid::new(3, 3);
        let path = find_path(&grid, p(0, 0), p(2, 2), SearchKind::DepthFirst, SearchMode::Path)
            .unwrap();
        assert_eq!(path, vec![p(0, 1), p(0, 2), p(1, 2), p(2, 2)]);

        let trace =
            find_path(&grid, p(0, 0), p(2, 2), SearchKind::DepthFirst, SearchMode::Visited)
                .unwrap();
        assert_eq!(trace, vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]);
    }

    #[test]
    fn start_equals_goal_is_empty_not_failure() {
        let grid = Grid::new(4, 4);
        for kind in SearchKind::ALL {
            assert_eq!(
                find_path(&grid, p(1, 1), p(1, 1), kind, SearchMode::Path),
                Ok(vec![])
            );
            assert_eq!(
                find_path(&grid, p(1, 1), p(1, 1), kind, SearchMode::Visited),
                Ok(vec![p(1, 1)])
            );
        }
    }

    #[test]
    fn out_of_bounds_endpoints_are_errors() {
        let grid = Grid::new(2, 2);
        for kind in SearchKind::ALL {
            assert_eq!(
                find_path(&grid, p(-1, 0), p(1, 1), kind, SearchMode::Path),
                Err(SearchError::OutOfBounds(p(-1, 0)))
            );
            assert_eq!(
                find_path(&grid, p(0, 0), p(2, 1), kind, SearchMode::Path),
                Err(SearchError::OutOfBounds(p(2, 1)))
            );
        }
    }

    #[test]
    fn solid_choke_point_makes_goal_unreachable() {
        let mut grid = Grid::new(3, 1);
        wall(&mut grid, p(1, 0));
        for kind in SearchKind::ALL {
            assert_eq!(
                find_path(&grid, p(0, 0), p(2, 0), kind, SearchMode::Path),
                Err(SearchError::Unreachable { start: p(0, 0), goal: p(2, 0) }),
                "{kind:?}"
            );
        }
    }

    #[test]
    fn breakable_choke_point_is_passable() {
        let mut grid = Grid::new(3, 1);
        grid.place_blockade(p(1, 0), Blockade::breakable(BlockadeId(1), "crate", vec![2, 1]))
            .unwrap();
        for kind in SearchKind::ALL {
            assert_eq!(
                find_path(&grid, p(0, 0), p(2, 0), kind, SearchMode::Path),
                Ok(vec![p(1, 0), p(2, 0)])
            );
        }
    }

    #[test]
    fn solid_goal_is_unreachable() {
        let mut grid = Grid::new(3, 3);
        wall(&mut grid, p(2, 2));
        for kind in SearchKind::ALL {
            assert!(matches!(
                find_path(&grid, p(0, 0), p(2, 2), kind, SearchMode::Path),
                Err(SearchError::Unreachable { .. })
            ));
        }
    }

    #[test]
    fn start_node_is_always_expanded() {
        let mut grid = Grid::new(2, 1);
        wall(&mut grid, p(0, 0));
        let path = find_path(&grid, p(0, 0), p(1, 0), SearchKind::BreadthFirst, SearchMode::Path);
        assert_eq!(path, Ok(vec![p(1, 0)]));
    }

    #[test]
    fn routes_detour_around_walls() {
        // . . . . .
        // # # # # .
        // . . . . .
        let mut grid = Grid::new(5, 3);
        for x in 0..4 {
            wall(&mut grid, p(x, 1));
        }
        for kind in SearchKind::ALL {
            let path = find_path(&grid, p(0, 0), p(0, 2), kind, SearchMode::Path).unwrap();
            assert_walkable(&grid, p(0, 0), &path);
            assert_eq!(path.last(), Some(&p(0, 2)));
            assert_eq!(path.len(), 10, "{kind:?}");
        }
    }

    #[test]
    fn bfs_and_astar_are_shortest_on_open_grids() {
        let grid = Grid::new(12, 9);
        let mut rng = rand::rng();
        let mut pr = PathRange::new(grid.range());
        for _ in 0..50 {
            let a = p(rng.random_range(0..12), rng.random_range(0..9));
            let b = p(rng.random_range(0..12), rng.random_range(0..9));
            for kind in [SearchKind::BreadthFirst, SearchKind::AStar] {
                let path = pr.find_path(&grid, a, b, kind, SearchMode::Path).unwrap();
                assert_eq!(path.len() as i32, manhattan(a, b), "{kind:?} {a} -> {b}");
                assert_walkable(&grid, a, &path);
            }
        }
    }

    #[test]
    fn astar_matches_bfs_length_with_obstacles() {
        let mut grid = Grid::new(10, 10);
        let mut rng = rand::rng();
        for _ in 0..25 {
            let at = p(rng.random_range(0..10), rng.random_range(0..10));
            if at != p(0, 0) && at != p(9, 9) && !grid.has_blockade(at) {
                wall(&mut grid, at);
            }
        }
        let mut pr = PathRange::new(grid.range());
        let bfs = pr.find_path(&grid, p(0, 0), p(9, 9), SearchKind::BreadthFirst, SearchMode::Path);
        let astar = pr.find_path(&grid, p(0, 0), p(9, 9), SearchKind::AStar, SearchMode::Path);
        match (bfs, astar) {
            (Ok(b), Ok(a)) => {
                assert_eq!(a.len(), b.len());
                assert_walkable(&grid, p(0, 0), &a);
            }
            (Err(b), Err(a)) => assert_eq!(a, b),
            (b, a) => panic!("bfs {b:?} disagrees with astar {a:?}"),
        }
    }

    #[test]
    fn visited_traces_never_repeat_nodes() {
        let mut grid = Grid::new(8, 8);
        let mut rng = rand::rng();
        for _ in 0..12 {
            let at = p(rng.random_range(0..8), rng.random_range(0..8));
            if at != p(0, 0) && !grid.has_blockade(at) {
                wall(&mut grid, at);
            }
        }
        let mut pr = PathRange::new(grid.range());
        for kind in SearchKind::ALL {
            for goal in grid.range().iter() {
                let Ok(trace) = pr.find_path(&grid, p(0, 0), goal, kind, SearchMode::Visited)
                else {
                    continue;
                };
                let unique: HashSet<_> = trace.iter().collect();
                assert_eq!(unique.len(), trace.len(), "{kind:?} to {goal}");
                assert_eq!(trace.first(), Some(&p(0, 0)));
                assert_eq!(trace.last(), Some(&goal));
            }
        }
    }

    #[test]
    fn reused_path_range_matches_fresh_one() {
        let mut grid = Grid::new(6, 6);
        wall(&mut grid, p(2, 2));
        wall(&mut grid, p(3, 2));
        let mut pr = PathRange::new(grid.range());
        for kind in SearchKind::ALL {
            let _ = pr.find_path(&grid, p(5, 5), p(0, 1), kind, SearchMode::Visited);
            let reused = pr.find_path(&grid, p(0, 0), p(4, 4), kind, SearchMode::Path);
            let fresh = find_path(&grid, p(0, 0), p(4, 4), kind, SearchMode::Path);
            assert_eq!(reused, fresh, "{kind:?}");
        }
    }

    #[test]
    fn unreachable_after_full_exploration() {
        // Goal sealed in a corner.
        let mut grid = Grid::new(4, 4);
        wall(&mut grid, p(2, 3));
        wall(&mut grid, p(3, 2));
        for kind in SearchKind::ALL {
            assert_eq!(
                find_path(&grid, p(0, 0), p(3, 3), kind, SearchMode::Visited),
                Err(SearchError::Unreachable { start: p(0, 0), goal: p(3, 3) })
            );
        }
    }
}
