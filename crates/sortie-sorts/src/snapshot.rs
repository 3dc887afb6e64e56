//! Recorded sort states.

/// What the recorder was doing when a snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// The only snapshot of an input too short to sort.
    Initial,
    /// Two positions were compared.
    Compare,
    /// Selection sort found a new minimum candidate.
    Candidate,
    /// Two positions were exchanged.
    Exchange,
}

/// One recorded state of the sequence.
///
/// `swapped` is set exactly when `values` differs from the preceding
/// snapshot. `compared` holds the two indices the step looked at and is
/// `None` only for [`Step::Initial`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<T> {
    pub values: Vec<T>,
    pub swapped: bool,
    pub compared: Option<(usize, usize)>,
    pub step: Step,
}

/// Snapshot accumulator shared by the sort strategies.
///
/// The `swapped` flag is derived from the data rather than from the step, so
/// no strategy can flag a snapshot that doesn't actually differ.
pub(crate) struct Tape<T> {
    snapshots: Vec<Snapshot<T>>,
}

impl<T: Clone + PartialEq> Tape<T> {
    pub(crate) fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    fn push(&mut self, state: &[T], step: Step, compared: Option<(usize, usize)>) {
        let swapped = self
            .snapshots
            .last()
            .is_some_and(|prev| prev.values != state);
        log::trace!("{step:?} {compared:?} swapped={swapped}");
        self.snapshots.push(Snapshot {
            values: state.to_vec(),
            swapped,
            compared,
            step,
        });
    }

    pub(crate) fn compare(&mut self, state: &[T], i: usize, j: usize) {
        self.push(state, Step::Compare, Some((i, j)));
    }

    pub(crate) fn candidate(&mut self, state: &[T], i: usize, j: usize) {
        self.push(state, Step::Candidate, Some((i, j)));
    }

    /// Exchange `state[i]` and `state[j]`, then record the result.
    pub(crate) fn exchange(&mut self, state: &mut [T], i: usize, j: usize) {
        state.swap(i, j);
        self.push(state, Step::Exchange, Some((i, j)));
    }

    /// The single snapshot returned for inputs shorter than two elements.
    pub(crate) fn initial(mut self, state: &[T]) -> Vec<Snapshot<T>> {
        self.push(state, Step::Initial, None);
        self.snapshots
    }

    pub(crate) fn finish(self) -> Vec<Snapshot<T>> {
        self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_snapshot_is_never_swapped() {
        let mut tape = Tape::new();
        tape.compare(&[3, 1], 0, 1);
        let snaps = tape.finish();
        assert!(!snaps[0].swapped);
    }

    #[test]
    fn swapped_flag_tracks_data_changes() {
        let mut tape = Tape::new();
        let mut state = vec![2, 2, 1];
        tape.compare(&state, 0, 1);
        // Exchanging equal values leaves the data unchanged.
        tape.exchange(&mut state, 0, 1);
        tape.exchange(&mut state, 1, 2);
        let snaps = tape.finish();
        assert_eq!(
            snaps.iter().map(|s| s.swapped).collect::<Vec<_>>(),
            vec![false, false, true]
        );
        assert_eq!(snaps[2].values, vec![2, 1, 2]);
        assert_eq!(snaps[2].compared, Some((1, 2)));
    }

    #[test]
    fn initial_has_no_compared_pair() {
        let snaps = Tape::new().initial(&[7]);
        assert_eq!(
            snaps,
            vec![Snapshot {
                values: vec![7],
                swapped: false,
                compared: None,
                step: Step::Initial,
            }]
        );
    }
}
