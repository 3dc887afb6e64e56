use crate::snapshot::{Snapshot, Tape};

/// Record a bubble sort of `values`.
///
/// Every adjacent comparison is recorded, followed by an exchange snapshot
/// when the pair is out of order. A pass without exchanges ends the sort.
pub fn record<T: Ord + Clone>(values: &[T]) -> Vec<Snapshot<T>> {
    let mut state = values.to_vec();
    let mut tape = Tape::new();
    let n = state.len();
    if n < 2 {
        return tape.initial(&state);
    }

    for pass in 0..n - 1 {
        let mut exchanged = false;
        for i in 0..n - 1 - pass {
            tape.compare(&state, i, i + 1);
            if state[i] > state[i + 1] {
                tape.exchange(&mut state, i, i + 1);
                exchanged = true;
            }
        }
        if !exchanged {
            break;
        }
    }
    tape.finish()
}
