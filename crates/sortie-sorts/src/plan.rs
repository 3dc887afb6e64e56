use crate::diff::{OFFSET, SwapPair, extract_swaps};
use crate::kind::SortKind;
use crate::snapshot::Snapshot;

/// Everything a replay consumer needs for one recorded sort.
///
/// Replaying `swaps` over `initial` (see [`replay`](crate::replay)) yields
/// `sorted`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortPlan<T> {
    pub kind: SortKind,
    pub initial: Vec<T>,
    pub snapshots: Vec<Snapshot<T>>,
    pub swaps: Vec<SwapPair>,
    pub sorted: Vec<T>,
}

impl<T: Ord + Clone> SortPlan<T> {
    /// Record `values` with `kind` and extract its swaps using [`OFFSET`].
    pub fn new(kind: SortKind, values: &[T]) -> Self {
        let snapshots = kind.record(values);
        let swaps: Vec<SwapPair> = extract_swaps(&snapshots)
            .into_iter()
            .filter(|pair| !pair.is_sentinel())
            .collect();
        let sorted = snapshots
            .last()
            .map(|s| s.values.clone())
            .unwrap_or_else(|| values.to_vec());
        Self {
            kind,
            initial: values.to_vec(),
            snapshots,
            swaps,
            sorted,
        }
    }

    /// Offset the swap positions were produced with.
    pub fn offset(&self) -> i32 {
        OFFSET
    }
}
