use crate::snapshot::{Snapshot, Tape};

/// Record an insertion sort of `values`.
///
/// Each element is sifted left one exchange at a time. Every comparison and
/// every exchange is recorded.
pub fn record<T: Ord + Clone>(values: &[T]) -> Vec<Snapshot<T>> {
    let mut state = values.to_vec();
    let mut tape = Tape::new();
    let n = state.len();
    if n < 2 {
        return tape.initial(&state);
    }

    for i in 1..n {
        let mut j = i;
        while j > 0 {
            tape.compare(&state, j - 1, j);
            if state[j - 1] <= state[j] {
                break;
            }
            tape.exchange(&mut state, j - 1, j);
            j -= 1;
        }
    }
    tape.finish()
}
