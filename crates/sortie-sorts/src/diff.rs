//! Swap extraction: turning recorded snapshots into replayable exchanges.
//!
//! The extractor never looks at how a snapshot was produced. It compares
//! each flagged snapshot with its predecessor and reports the outermost
//! differing positions, which for a single exchange are exactly the two
//! positions that traded places.

use crate::snapshot::Snapshot;

/// Offset added to every index so consumers can keep a leading sentinel
/// slot at position 0.
pub const OFFSET: i32 = 1;

/// One exchange to replay, as offset positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapPair {
    pub first: i32,
    pub second: i32,
}

impl SwapPair {
    /// Emitted for a snapshot flagged `swapped` whose change can't be found.
    pub const SENTINEL: SwapPair = SwapPair {
        first: -1,
        second: -1,
    };

    pub const fn new(first: i32, second: i32) -> Self {
        Self { first, second }
    }

    #[inline]
    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }

    /// Zero-based indices after removing `offset`, or `None` for a sentinel
    /// or a pair that would land below zero.
    pub fn indices(self, offset: i32) -> Option<(usize, usize)> {
        if self.is_sentinel() {
            return None;
        }
        let a = usize::try_from(self.first - offset).ok()?;
        let b = usize::try_from(self.second - offset).ok()?;
        Some((a, b))
    }
}

/// Extract the swaps recorded in `snapshots` using [`OFFSET`].
pub fn extract_swaps<T: PartialEq>(snapshots: &[Snapshot<T>]) -> Vec<SwapPair> {
    extract_swaps_with_offset(snapshots, OFFSET)
}

/// Extract swaps with a caller-chosen offset.
///
/// Snapshots not flagged `swapped` contribute nothing. A flagged snapshot
/// yields `(first + offset, second + offset)` where `first`/`second` are the
/// lowest and highest positions that differ from the previous snapshot. If
/// there is no previous snapshot or nothing differs, [`SwapPair::SENTINEL`]
/// is emitted in its place so the caller can discard it.
pub fn extract_swaps_with_offset<T: PartialEq>(
    snapshots: &[Snapshot<T>],
    offset: i32,
) -> Vec<SwapPair> {
    let mut pairs = Vec::new();
    for (i, snap) in snapshots.iter().enumerate() {
        if !snap.swapped {
            continue;
        }
        let span = i
            .checked_sub(1)
            .and_then(|prev| differing_span(&snapshots[prev].values, &snap.values));
        let Some((first, second)) = span else {
            log::warn!("snapshot {i} is flagged swapped but nothing changed");
            pairs.push(SwapPair::SENTINEL);
            continue;
        };
        match (shifted(first, offset), shifted(second, offset)) {
            (Some(first), Some(second)) => pairs.push(SwapPair::new(first, second)),
            _ => {
                log::warn!("snapshot {i}: positions {first}..={second} overflow offset {offset}");
                pairs.push(SwapPair::SENTINEL);
            }
        }
    }
    pairs
}

fn shifted(idx: usize, offset: i32) -> Option<i32> {
    i32::try_from(idx).ok().and_then(|i| i.checked_add(offset))
}

/// Lowest and highest positions where `a` and `b` differ.
///
/// Positions present in only one of the two count as differing.
fn differing_span<T: PartialEq>(a: &[T], b: &[T]) -> Option<(usize, usize)> {
    let len = a.len().max(b.len());
    let differs = |k: usize| a.get(k) != b.get(k);
    let first = (0..len).find(|&k| differs(k))?;
    let last = (first..len).rev().find(|&k| differs(k))?;
    Some((first, last))
}

/// Apply `swaps` in order to a copy of `initial`.
///
/// Sentinels and pairs that fall outside the sequence are skipped.
pub fn replay<T: Clone>(initial: &[T], swaps: &[SwapPair], offset: i32) -> Vec<T> {
    let mut state = initial.to_vec();
    for pair in swaps {
        match pair.indices(offset) {
            Some((a, b)) if a < state.len() && b < state.len() => state.swap(a, b),
            _ => log::debug!("skipping unreplayable pair {pair:?}"),
        }
    }
    state
}
