//! **sortie-core**: the grid model shared by the sortie crates.
//!
//! A [`Grid`] is a fixed `width × height` set of [`Node`]s addressed by
//! [`Point`]. Nodes hold at most one exclusive [`Occupant`] (a [`Blockade`]
//! or a [`Base`]) plus any number of units. Adjacency is the four cardinal
//! directions in a fixed up/right/down/left order so that every traversal
//! built on top of it is reproducible.
//!
//! Occupancy changes never panic on contention: they return a [`GridError`]
//! and leave the grid unchanged.

pub mod error;
pub mod geom;
pub mod grid;
pub mod occupant;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Grid, Node};
pub use occupant::{Base, Blockade, BlockadeId, Occupant, UnitId};
