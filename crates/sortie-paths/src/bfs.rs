use std::collections::VecDeque;

use sortie_core::Point;

use crate::PathRange;
use crate::search::{SearchError, SearchMode};
use crate::traits::Pather;

impl PathRange {
    /// Breadth-first search from `from` to `to`.
    ///
    /// The frontier is FIFO, so the [`SearchMode::Path`] result is a shortest
    /// route by hop count. The route excludes `from` and ends with `to`.
    pub fn bfs_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        mode: SearchMode,
    ) -> Result<Vec<Point>, SearchError> {
        let (si, gi) = self.begin(from, to)?;

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = queue.pop_front() {
            if self.is_expanded(ci) {
                continue;
            }
            self.expand(ci);
            if ci == gi {
                found = true;
                break;
            }

            nbuf.clear();
            pather.neighbors(self.point(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.discover(ni, ci) {
                    queue.push_back(ni);
                }
            }
        }

        self.nbuf = nbuf;

        if !found {
            log::debug!("bfs: {to} unreachable from {from}");
            return Err(SearchError::Unreachable { start: from, goal: to });
        }
        Ok(self.finish(si, gi, mode))
    }
}
