use crate::snapshot::Snapshot;
use crate::{bubble, insertion, selection};

/// Which sorting strategy to record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortKind {
    Bubble,
    Insertion,
    Selection,
}

impl SortKind {
    pub const ALL: [SortKind; 3] = [SortKind::Bubble, SortKind::Insertion, SortKind::Selection];

    /// Record a sort of `values` with this strategy. `values` is not modified.
    pub fn record<T: Ord + Clone>(self, values: &[T]) -> Vec<Snapshot<T>> {
        match self {
            SortKind::Bubble => bubble::record(values),
            SortKind::Insertion => insertion::record(values),
            SortKind::Selection => selection::record(values),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKind::Bubble => "Bubble Sort",
            SortKind::Insertion => "Insertion Sort",
            SortKind::Selection => "Selection Sort",
        }
    }
}
