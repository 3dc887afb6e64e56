//! Instrumented sorting for step-by-step replay.
//!
//! [`SortKind::record`] runs a bubble, insertion or selection sort on a copy
//! of the input and returns every intermediate state as a [`Snapshot`]. The
//! snapshots are fine-grained: one per comparison and one per exchange, so
//! two consecutive snapshots never differ by more than a single exchange.
//!
//! [`extract_swaps`] then reduces the snapshots to the ordered list of
//! [`SwapPair`]s a replay layer needs. Positions are shifted by [`OFFSET`]
//! to leave room for a leading sentinel slot. [`replay`] applies the pairs
//! back to the input, and [`SortPlan`] bundles the whole pipeline:
//!
//! ```
//! use sortie_sorts::{OFFSET, SortKind, SortPlan, SwapPair, replay};
//!
//! let plan = SortPlan::new(SortKind::Bubble, &[2, 1]);
//! assert_eq!(plan.swaps, vec![SwapPair::new(1, 2)]);
//! assert_eq!(replay(&plan.initial, &plan.swaps, OFFSET), plan.sorted);
//! ```

pub mod bubble;
mod diff;
pub mod insertion;
mod kind;
mod plan;
pub mod selection;
mod snapshot;

pub use diff::{OFFSET, SwapPair, extract_swaps, extract_swaps_with_offset, replay};
pub use kind::SortKind;
pub use plan::SortPlan;
pub use snapshot::{Snapshot, Step};
