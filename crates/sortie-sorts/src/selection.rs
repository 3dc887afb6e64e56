use crate::snapshot::{Snapshot, Tape};

/// Record a selection sort of `values`.
///
/// For each outer position `j`, every candidate `i` is compared against the
/// current minimum and recorded as `(min, i)`. Each new minimum adds a
/// [`Candidate`](crate::Step::Candidate) snapshot recorded as `(j, i)`.
/// Once the scan is done, a moved minimum is exchanged into place and
/// recorded as `(min, j)`.
///
/// Candidate snapshots don't change the data, so they are not flagged
/// `swapped`.
pub fn record<T: Ord + Clone>(values: &[T]) -> Vec<Snapshot<T>> {
    let mut state = values.to_vec();
    let mut tape = Tape::new();
    let n = state.len();
    if n < 2 {
        return tape.initial(&state);
    }

    for j in 0..n - 1 {
        let mut min = j;
        for i in j + 1..n {
            tape.compare(&state, min, i);
            if state[i] < state[min] {
                min = i;
                tape.candidate(&state, j, i);
            }
        }
        if min != j {
            tape.exchange(&mut state, min, j);
        }
    }
    tape.finish()
}
