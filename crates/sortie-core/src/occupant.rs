//! Things that can sit on a grid node.
//!
//! A node's occupant slot holds at most one [`Blockade`] or [`Base`].
//! Units are tracked separately by [`UnitId`] because they never block
//! traversal and may share a node with either occupant.

use std::fmt;

/// Identifier of a unit standing on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

/// Identifier of a blockade. Blockades don't store their position; use
/// [`Grid::find_blockade`](crate::Grid::find_blockade) to locate one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockadeId(pub u32);

impl fmt::Display for BlockadeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blockade#{}", self.0)
    }
}

/// An obstacle placed on a node.
///
/// A non-breakable blockade makes its node impassable. A breakable one is
/// passable; it carries the sequence a unit has to sort in order to break
/// through it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blockade {
    id: BlockadeId,
    name: String,
    breakable: bool,
    values: Vec<i32>,
}

impl Blockade {
    /// A solid, impassable blockade.
    pub fn solid(id: BlockadeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            breakable: false,
            values: Vec::new(),
        }
    }

    /// A breakable blockade guarding `values`.
    pub fn breakable(id: BlockadeId, name: impl Into<String>, values: Vec<i32>) -> Self {
        Self {
            id,
            name: name.into(),
            breakable: true,
            values,
        }
    }

    /// Same kind, name and sequence, under a different id.
    pub fn with_id(&self, id: BlockadeId) -> Self {
        Self { id, ..self.clone() }
    }

    pub fn id(&self) -> BlockadeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether units may pass through this blockade.
    pub fn is_breakable(&self) -> bool {
        self.breakable
    }

    /// Sequence to sort when breaking the blockade. Empty for solid ones.
    pub fn values(&self) -> &[i32] {
        &self.values
    }
}

/// The player's base, the destination of every spawned unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Base {
    pub name: String,
}

impl Base {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The exclusive occupant slot of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Blockade(Blockade),
    Base(Base),
}

impl Occupant {
    /// Short label used in logs and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Occupant::Blockade(b) if b.is_breakable() => "breakable blockade",
            Occupant::Blockade(_) => "blockade",
            Occupant::Base(_) => "base",
        }
    }
}
