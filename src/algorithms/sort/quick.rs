//! Quick sort
//!
//! Lomuto partition with the last element of each subrange as pivot. Elements
//! strictly smaller than the pivot are swapped to the front of the subrange,
//! then the pivot is swapped into place. Each swap of two distinct indices
//! records `comparing=[a, b]` then `swapped=[a, b]`. Scan self-swaps move
//! nothing and record nothing. A pivot already in its final place records
//! `comparing=[high]`, so every partition shows up in the trace. The left
//! partition is sorted before the right one.

use super::SortState;

/// An in-progress Lomuto partition of `[low, high]`
#[derive(Debug, Clone, Copy)]
struct Partition {
    low: usize,
    high: usize,
    pivot: i64,
    /// Boundary of the "less than pivot" prefix
    i: usize,
    /// Next index to examine
    j: usize,
}

#[derive(Debug)]
pub struct QuickSort {
    /// Inclusive subranges still to sort, top of stack first
    ranges: Vec<(usize, usize)>,
    partition: Option<Partition>,
}

fn recorded_swap(state: &mut SortState<'_>, a: usize, b: usize) {
    state.record(vec![a, b], vec![]);
    state.swap(a, b);
    state.record(vec![], vec![a, b]);
}

impl QuickSort {
    pub fn new(len: usize) -> Self {
        let ranges = if len > 1 { vec![(0, len - 1)] } else { Vec::new() };
        QuickSort {
            ranges,
            partition: None,
        }
    }

    pub fn advance(&mut self, state: &mut SortState<'_>) -> bool {
        if let Some(part) = self.partition.as_mut() {
            if part.j < part.high {
                let j = part.j;
                part.j += 1;
                if state.get(j) < part.pivot {
                    let i = part.i;
                    part.i += 1;
                    if i != j {
                        recorded_swap(state, i, j);
                    }
                }
                return true;
            }

            let Partition { low, high, i, .. } = *part;
            self.partition = None;
            if i != high {
                recorded_swap(state, i, high);
            } else {
                state.record(vec![high], vec![]);
            }
            // Pushed right first so the left partition is sorted first
            if i + 1 < high {
                self.ranges.push((i + 1, high));
            }
            if i > low + 1 {
                self.ranges.push((low, i - 1));
            }
            return true;
        }

        match self.ranges.pop() {
            None => false,
            Some((low, high)) => {
                self.partition = Some(Partition {
                    low,
                    high,
                    pivot: state.get(high),
                    i: low,
                    j: low,
                });
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::sort::{sort, SortKind};
    use crate::subject::sequence::Sequence;
    use crate::trace::Step;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_three_elements() {
        let mut seq = Sequence::new(vec![3, 1, 2]);
        let trace = sort(&mut seq, SortKind::Quick);

        let expected = vec![
            Step::sort(&[3, 1, 2], vec![], vec![]),
            Step::sort(&[3, 1, 2], vec![0, 1], vec![]),
            Step::sort(&[1, 3, 2], vec![], vec![0, 1]),
            Step::sort(&[1, 3, 2], vec![1, 2], vec![]),
            Step::sort(&[1, 2, 3], vec![], vec![1, 2]),
        ];
        assert_eq!(trace.steps(), &expected[..]);
    }

    #[test]
    fn test_sorted_input_marks_each_pivot_in_place() {
        let mut seq = Sequence::new(vec![1, 2, 3, 4]);
        let trace = sort(&mut seq, SortKind::Quick);

        let expected = vec![
            Step::sort(&[1, 2, 3, 4], vec![], vec![]),
            Step::sort(&[1, 2, 3, 4], vec![3], vec![]),
            Step::sort(&[1, 2, 3, 4], vec![2], vec![]),
            Step::sort(&[1, 2, 3, 4], vec![1], vec![]),
        ];
        assert_eq!(trace.steps(), &expected[..]);
        assert!(trace.iter().all(|step| step.swapped().is_empty()));
    }

    #[test]
    fn test_pivot_in_place_between_swaps() {
        // First partition swaps nothing, the left one then swaps 0 and 1
        let mut seq = Sequence::new(vec![2, 1, 3]);
        let trace = sort(&mut seq, SortKind::Quick);

        let expected = vec![
            Step::sort(&[2, 1, 3], vec![], vec![]),
            Step::sort(&[2, 1, 3], vec![2], vec![]),
            Step::sort(&[2, 1, 3], vec![0, 1], vec![]),
            Step::sort(&[1, 2, 3], vec![], vec![0, 1]),
        ];
        assert_eq!(trace.steps(), &expected[..]);
    }

    #[test]
    fn test_duplicates_and_negatives() {
        let mut seq = Sequence::new(vec![0, -5, 3, -5, 3, 0]);
        let trace = sort(&mut seq, SortKind::Quick);
        assert_eq!(seq.values(), &[-5, -5, 0, 0, 3, 3]);
        for step in trace.iter().skip(1) {
            let indices = if step.swapped().is_empty() {
                step.comparing()
            } else {
                step.swapped()
            };
            match indices {
                [_] => assert!(step.swapped().is_empty()),
                [a, b] => assert_ne!(a, b),
                other => panic!("unexpected indices {:?}", other),
            }
        }
    }
}
