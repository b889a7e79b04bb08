//! Insertion sort
//!
//! Pass `i` picks up the element at `i` and swaps it left while its left
//! neighbor is larger. Steps per pass:
//!
//! ```text
//! comparing=[i]                       pass start
//! comparing=[j-1, j]  swapped=[j-1, j] per shift
//! swapped=[j]                         final resting place
//! ```

use super::SortState;

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// About to start the pass for index `i`
    Pass { i: usize },
    /// The element picked up in pass `i` currently sits at `j`
    Shift { i: usize, j: usize },
}

#[derive(Debug)]
pub struct InsertionSort {
    len: usize,
    phase: Phase,
}

impl InsertionSort {
    pub fn new(len: usize) -> Self {
        InsertionSort {
            len,
            phase: Phase::Pass { i: 1 },
        }
    }

    pub fn advance(&mut self, state: &mut SortState<'_>) -> bool {
        match self.phase {
            Phase::Pass { i } => {
                if i >= self.len {
                    return false;
                }
                state.record(vec![i], vec![]);
                self.phase = Phase::Shift { i, j: i };
            }
            Phase::Shift { i, j } => {
                if j > 0 && state.get(j - 1) > state.get(j) {
                    state.record(vec![j - 1, j], vec![]);
                    state.swap(j - 1, j);
                    state.record(vec![], vec![j - 1, j]);
                    self.phase = Phase::Shift { i, j: j - 1 };
                } else {
                    state.record(vec![], vec![j]);
                    self.phase = Phase::Pass { i: i + 1 };
                }
            }
        }
        true
    }
}
