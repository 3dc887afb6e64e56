use std::collections::BinaryHeap;

use sortie_core::Point;

use crate::PathRange;
use crate::pathrange::NodeRef;
use crate::search::{SearchError, SearchMode};
use crate::traits::AstarPather;

impl PathRange {
    /// Heuristic-guided (A*) search from `from` to `to`.
    ///
    /// The open list is ordered by `f = g + estimate`, ties broken by
    /// insertion order. A node's parent is replaced only when a strictly
    /// cheaper route to it is found. Results follow the same
    /// [`SearchMode`] contract as [`bfs_path`](Self::bfs_path).
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        mode: SearchMode,
    ) -> Result<Vec<Point>, SearchError> {
        let (si, gi) = self.begin(from, to)?;

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: si,
            f: pather.estimate(from, to),
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(current) = open.pop() {
            let ci = current.idx;
            // Duplicate entries for an already-closed node.
            if self.is_expanded(ci) {
                continue;
            }
            self.expand(ci);
            if ci == gi {
                found = true;
                break;
            }

            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.is_expanded(ni) {
                    continue;
                }
                let tentative_g = current_g + pather.cost(current_point, np);

                let n = self.touch(ni);
                if n.discovered && tentative_g >= n.g {
                    continue;
                }
                n.discovered = true;
                n.g = tentative_g;
                n.parent = ci;

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + pather.estimate(np, to),
                    seq,
                });
            }
        }

        self.nbuf = nbuf;

        if !found {
            log::debug!("astar: {to} unreachable from {from}");
            return Err(SearchError::Unreachable { start: from, goal: to });
        }
        Ok(self.finish(si, gi, mode))
    }
}
