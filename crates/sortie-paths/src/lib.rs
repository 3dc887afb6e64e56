//! Blockade-aware search over a [`sortie_core::Grid`].
//!
//! Three strategies share one contract through [`PathRange::find_path`]:
//!
//! - **Breadth-first** ([`PathRange::bfs_path`]): FIFO frontier, shortest
//!   route by hop count.
//! - **Depth-first** ([`PathRange::dfs_path`]): LIFO frontier.
//! - **A\*** ([`PathRange::astar_path`]): heuristic-guided, pluggable via
//!   [`AstarPather::estimate`].
//!
//! Each returns either the route from start to goal (excluding the start)
//! or, in [`SearchMode::Visited`], the expansion order ending at the goal.
//! An unreachable goal is a [`SearchError`], distinct from the empty route
//! returned when start and goal coincide.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`Grid`](sortie_core::Grid) implements all three: solid blockades are
//! skipped, breakable ones are walkable, every step costs 1 and the
//! heuristic is [`manhattan`].

mod astar;
mod bfs;
mod dfs;
mod distance;
mod grid;
mod pathrange;
mod search;
mod traits;

pub use distance::manhattan;
pub use pathrange::PathRange;
pub use search::{SearchError, SearchKind, SearchMode, find_path};
pub use traits::{AstarPather, Pather, WeightedPather};
