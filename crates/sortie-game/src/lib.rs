//! Units, spawning and the game session built on sortie's searches and sorts.
//!
//! Every [`UnitKind`] pairs one search strategy with one sort strategy. The
//! search plans the unit's route to the base; the sort is what the unit
//! performs when it walks into a breakable blockade:
//!
//! | Kind | Search | Sort |
//! |---|---|---|
//! | Banshee | depth-first | bubble |
//! | Demon | breadth-first | selection |
//! | Death Knight | A* | insertion |
//!
//! A [`Session`] owns the grid, the [`Spawner`] pool and all units on the
//! grid, and reports each tick as a list of [`Event`]s.

mod config;
mod session;
mod spawner;
mod unit;

pub use config::SessionConfig;
pub use session::{Event, Session};
pub use spawner::Spawner;
pub use unit::{Unit, UnitKind};
