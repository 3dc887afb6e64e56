use sortie_core::Point;

use crate::PathRange;
use crate::search::{SearchError, SearchMode};
use crate::traits::Pather;

impl PathRange {
    /// Depth-first search from `from` to `to`.
    ///
    /// The frontier is LIFO: neighbours are pushed in pather order, so the
    /// last one pushed is expanded first. Every not-yet-expanded neighbour is
    /// pushed, even if it already sits deeper in the stack, while its parent
    /// stays whichever node discovered it first. No shortest-path guarantee.
    pub fn dfs_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        mode: SearchMode,
    ) -> Result<Vec<Point>, SearchError> {
        let (si, gi) = self.begin(from, to)?;

        let mut stack: Vec<usize> = vec![si];
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = stack.pop() {
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
                if self.is_expanded(ni) {
                    continue;
                }
                self.discover(ni, ci);
                stack.push(ni);
            }
        }

        self.nbuf = nbuf;

        if !found {
            log::debug!("dfs: {to} unreachable from {from}");
            return Err(SearchError::Unreachable { start: from, goal: to });
        }
        Ok(self.finish(si, gi, mode))
    }
}
