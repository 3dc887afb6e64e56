//! The fixed-size grid of nodes that units move across.
//!
//! The grid owns its [`Node`]s; each node owns at most one [`Occupant`].
//! Nothing points back from an occupant to its node, so reverse lookups go
//! through coordinate scans such as [`Grid::find_blockade`].

use std::collections::BTreeSet;

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::occupant::{Base, Blockade, BlockadeId, Occupant, UnitId};

/// A single addressable cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pos: Point,
    occupant: Option<Occupant>,
    units: BTreeSet<UnitId>,
}

impl Node {
    fn new(pos: Point) -> Self {
        Self {
            pos,
            occupant: None,
            units: BTreeSet::new(),
        }
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn occupant(&self) -> Option<&Occupant> {
        self.occupant.as_ref()
    }

    pub fn blockade(&self) -> Option<&Blockade> {
        match &self.occupant {
            Some(Occupant::Blockade(b)) => Some(b),
            _ => None,
        }
    }

    pub fn base(&self) -> Option<&Base> {
        match &self.occupant {
            Some(Occupant::Base(b)) => Some(b),
            _ => None,
        }
    }

    /// Units currently standing on this node, in id order.
    pub fn units(&self) -> &BTreeSet<UnitId> {
        &self.units
    }

    /// A node is passable unless it holds a non-breakable blockade.
    #[inline]
    pub fn is_passable(&self) -> bool {
        self.blockade().is_none_or(Blockade::is_breakable)
    }

    /// Whether nothing at all is on this node.
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none() && self.units.is_empty()
    }
}

/// A `width × height` grid of [`Node`]s stored in row-major order.
///
/// The shape is fixed at construction; only occupancy changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rng: Range,
    nodes: Vec<Node>,
}

impl Grid {
    /// Create an empty grid. Non-positive sizes give a grid with no nodes.
    pub fn new(width: i32, height: i32) -> Self {
        let rng = Range::new(0, 0, width.max(0), height.max(0));
        let nodes = rng.iter().map(Node::new).collect();
        Self { rng, nodes }
    }

    /// The bounding range of the grid.
    pub fn range(&self) -> Range {
        self.rng
    }

    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `p` addresses a node of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Bounds-checked lookup. `None` means there is no such node.
    #[inline]
    pub fn node_at(&self, p: Point) -> Option<&Node> {
        self.rng.index_of(p).map(|i| &self.nodes[i])
    }

    fn node_mut(&mut self, p: Point) -> Result<&mut Node, GridError> {
        match self.rng.index_of(p) {
            Some(i) => Ok(&mut self.nodes[i]),
            None => Err(GridError::OutOfBounds(p)),
        }
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// In-bounds cardinal neighbours of `p` in up, right, down, left order.
    ///
    /// Returns an empty list when `p` itself is outside the grid.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Like [`neighbors`](Self::neighbors) but appends into `buf`.
    pub fn neighbors_into(&self, p: Point, buf: &mut Vec<Point>) {
        if !self.contains(p) {
            return;
        }
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.contains(n)));
    }

    // -----------------------------------------------------------------------
    // Occupancy queries
    // -----------------------------------------------------------------------

    pub fn blockade_at(&self, p: Point) -> Option<&Blockade> {
        self.node_at(p).and_then(Node::blockade)
    }

    pub fn base_at(&self, p: Point) -> Option<&Base> {
        self.node_at(p).and_then(Node::base)
    }

    pub fn has_blockade(&self, p: Point) -> bool {
        self.blockade_at(p).is_some()
    }

    pub fn has_base(&self, p: Point) -> bool {
        self.base_at(p).is_some()
    }

    pub fn has_units(&self, p: Point) -> bool {
        self.node_at(p).is_some_and(|n| !n.units.is_empty())
    }

    /// Units on `p`; empty when out of bounds.
    pub fn units_at(&self, p: Point) -> impl Iterator<Item = UnitId> + '_ {
        self.node_at(p).into_iter().flat_map(|n| n.units.iter().copied())
    }

    /// In bounds and not blocked by a non-breakable blockade.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.node_at(p).is_some_and(Node::is_passable)
    }

    /// Every blockade with its position, in row-major order.
    pub fn blockades(&self) -> impl Iterator<Item = (Point, &Blockade)> + '_ {
        self.nodes
            .iter()
            .filter_map(|n| n.blockade().map(|b| (n.pos, b)))
    }

    /// Position of the blockade with the given id.
    pub fn find_blockade(&self, id: BlockadeId) -> Option<Point> {
        self.blockades()
            .find(|(_, b)| b.id() == id)
            .map(|(p, _)| p)
    }

    // -----------------------------------------------------------------------
    // Occupancy mutation
    // -----------------------------------------------------------------------

    /// Attach `blockade` to the node at `p`.
    ///
    /// Rejected if the node already holds a blockade, a base, or any unit.
    pub fn place_blockade(&mut self, p: Point, blockade: Blockade) -> Result<(), GridError> {
        let node = self.node_mut(p)?;
        if let Some(occ) = &node.occupant {
            log::debug!("rejecting {} at {p}: {} present", blockade.id(), occ.label());
            return Err(GridError::Occupied { pos: p, by: occ.label() });
        }
        if !node.units.is_empty() {
            log::debug!("rejecting {} at {p}: units present", blockade.id());
            return Err(GridError::Occupied { pos: p, by: "unit" });
        }
        log::debug!("placed {} at {p}", blockade.id());
        node.occupant = Some(Occupant::Blockade(blockade));
        Ok(())
    }

    /// Place the base at `p`. Units may already stand there.
    pub fn place_base(&mut self, p: Point, base: Base) -> Result<(), GridError> {
        let node = self.node_mut(p)?;
        if let Some(occ) = &node.occupant {
            log::debug!("rejecting base at {p}: {} present", occ.label());
            return Err(GridError::Occupied { pos: p, by: occ.label() });
        }
        node.occupant = Some(Occupant::Base(base));
        Ok(())
    }

    /// Remove whatever blockade or base sits on `p`.
    pub fn clear_occupant(&mut self, p: Point) -> Option<Occupant> {
        self.node_mut(p).ok()?.occupant.take()
    }

    /// Remove the blockade on `p`, leaving a base in place.
    pub fn remove_blockade(&mut self, p: Point) -> Option<Blockade> {
        let node = self.node_mut(p).ok()?;
        match node.occupant.take() {
            Some(Occupant::Blockade(b)) => Some(b),
            other => {
                node.occupant = other;
                None
            }
        }
    }

    /// Put `unit` on the node at `p`. Units coexist with any occupant.
    pub fn add_unit(&mut self, p: Point, unit: UnitId) -> Result<(), GridError> {
        let node = self.node_mut(p)?;
        if !node.units.insert(unit) {
            return Err(GridError::DuplicateUnit { pos: p, unit });
        }
        Ok(())
    }

    /// Take `unit` off the node at `p`.
    pub fn remove_unit(&mut self, p: Point, unit: UnitId) -> Result<(), GridError> {
        let node = self.node_mut(p)?;
        if !node.units.remove(&unit) {
            return Err(GridError::UnitNotFound { pos: p, unit });
        }
        Ok(())
    }

    /// Move `unit` from `from` to `to`.
    ///
    /// The destination is checked first so a failed move leaves the unit
    /// where it was.
    pub fn move_unit(&mut self, from: Point, to: Point, unit: UnitId) -> Result<(), GridError> {
        if !self.contains(to) {
            return Err(GridError::OutOfBounds(to));
        }
        self.remove_unit(from, unit)?;
        self.add_unit(to, unit)
    }
}
