//! Selection sort
//!
//! Pass `i` scans the unsorted suffix for its minimum, recording every
//! candidate comparison as `comparing=[j, min]`, then swaps the minimum into
//! place. Passes where the minimum is already at `i` record no swap.

use super::SortState;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Pass { i: usize },
    Scan { i: usize, j: usize, min: usize },
}

#[derive(Debug)]
pub struct SelectionSort {
    len: usize,
    phase: Phase,
}

impl SelectionSort {
    pub fn new(len: usize) -> Self {
        SelectionSort {
            len,
            phase: Phase::Pass { i: 0 },
        }
    }

    pub fn advance(&mut self, state: &mut SortState<'_>) -> bool {
        match self.phase {
            Phase::Pass { i } => {
                // The last element is in place once the rest are
                if i + 1 >= self.len {
                    return false;
                }
                state.record(vec![i], vec![]);
                self.phase = Phase::Scan { i, j: i + 1, min: i };
            }
            Phase::Scan { i, j, min } if j < self.len => {
                state.record(vec![j, min], vec![]);
                let min = if state.get(j) < state.get(min) { j } else { min };
                self.phase = Phase::Scan { i, j: j + 1, min };
            }
            Phase::Scan { i, min, .. } => {
                if min != i {
                    state.swap(i, min);
                    state.record(vec![], vec![i, min]);
                }
                self.phase = Phase::Pass { i: i + 1 };
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::sort::{sort, SortKind};
    use crate::subject::sequence::Sequence;
    use crate::trace::Step;

    #[test]
    fn test_first_pass_swaps_minimum_to_front() {
        let mut seq = Sequence::new(vec![5, 3, 8, 6, 2]);
        let trace = sort(&mut seq, SortKind::Selection);

        assert_eq!(seq.values(), &[2, 3, 5, 6, 8]);

        let first_swap = trace
            .iter()
            .find(|step| !step.swapped().is_empty())
            .expect("a swap step");
        assert_eq!(first_swap.swapped(), &[0, 4]);
        assert_eq!(first_swap.values(), Some(&[2, 3, 8, 6, 5][..]));
    }

    #[test]
    fn test_first_pass_comparisons() {
        let mut seq = Sequence::new(vec![5, 3, 8, 6, 2]);
        let trace = sort(&mut seq, SortKind::Selection);
        let comparing: Vec<&[usize]> = trace
            .iter()
            .skip(1)
            .take(5)
            .map(Step::comparing)
            .collect();
        let expected: Vec<&[usize]> = vec![&[0][..], &[1, 0][..], &[2, 1][..], &[3, 1][..], &[4, 1][..]];
        assert_eq!(comparing, expected);
    }

    #[test]
    fn test_no_swap_step_when_minimum_in_place() {
        let mut seq = Sequence::new(vec![1, 2, 3]);
        let trace = sort(&mut seq, SortKind::Selection);
        assert!(trace.iter().all(|step| step.swapped().is_empty()));
        // initial + pass 0 (start + 2 scans) + pass 1 (start + 1 scan)
        assert_eq!(trace.len(), 1 + 3 + 2);
    }
}
