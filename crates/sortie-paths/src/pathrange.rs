use sortie_core::{Point, Range};

use crate::search::{SearchError, SearchMode};

/// Parent index of the start node and of undiscovered nodes.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-node search state
// ---------------------------------------------------------------------------

/// Search bookkeeping for one grid cell.
///
/// Entries whose `generation` is not the current one are stale and treated
/// as untouched, which resets the whole array in O(1) per search.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) discovered: bool,
    pub(crate) expanded: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: NO_PARENT,
            generation: 0,
            discovered: false,
            expanded: false,
        }
    }
}

/// Open-list entry for A*, ordered by `f` then by insertion order.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (max-heap) pops smallest f, then oldest.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for searches over a grid rectangle.
///
/// `PathRange` owns the per-search state (parents, visited flags, the
/// expansion trace and a neighbour buffer). Everything is reset at the start
/// of each search, so one `PathRange` can serve any number of sequential
/// requests, and independent `PathRange`s never share state.
///
/// The pather is borrowed for the whole search, so the grid cannot change
/// underneath it while a call is running.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    /// Expansion order of the current search.
    pub(crate) trace: Vec<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            trace: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Search lifecycle helpers
    // -----------------------------------------------------------------------

    /// Invalidate all node state and clear the trace.
    pub(crate) fn begin(&mut self, start: Point, goal: Point) -> Result<(usize, usize), SearchError> {
        let si = self.idx(start).ok_or(SearchError::OutOfBounds(start))?;
        let gi = self.idx(goal).ok_or(SearchError::OutOfBounds(goal))?;
        self.next_generation();
        self.trace.clear();
        self.discover(si, NO_PARENT);
        Ok((si, gi))
    }

    fn next_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale entries could alias the new generation.
            self.nodes.fill(Node::default());
            self.generation = 1;
        }
    }

    /// Bring node `i` into the current generation.
    #[inline]
    pub(crate) fn touch(&mut self, i: usize) -> &mut Node {
        let generation = self.generation;
        let n = &mut self.nodes[i];
        if n.generation != generation {
            *n = Node {
                generation,
                ..Node::default()
            };
        }
        n
    }

    #[inline]
    pub(crate) fn is_expanded(&self, i: usize) -> bool {
        let n = &self.nodes[i];
        n.generation == self.generation && n.expanded
    }

    /// Record `parent` as the predecessor of `i` unless `i` already has one.
    ///
    /// Returns `true` when this call discovered the node.
    #[inline]
    pub(crate) fn discover(&mut self, i: usize, parent: usize) -> bool {
        let n = self.touch(i);
        if n.discovered {
            return false;
        }
        n.discovered = true;
        n.parent = parent;
        true
    }

    /// Mark `i` expanded and append it to the trace.
    #[inline]
    pub(crate) fn expand(&mut self, i: usize) {
        self.touch(i).expanded = true;
        self.trace.push(i);
    }

    /// Build the result for a search that reached `gi`.
    pub(crate) fn finish(&self, si: usize, gi: usize, mode: SearchMode) -> Vec<Point> {
        match mode {
            SearchMode::Visited => self.trace.iter().map(|&i| self.point(i)).collect(),
            SearchMode::Path => {
                let mut path = Vec::new();
                let mut ci = gi;
                while ci != si && ci != NO_PARENT {
                    path.push(self.point(ci));
                    ci = self.nodes[ci].parent;
                }
                path.reverse();
                path
            }
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index_of(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point_at(idx)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}
