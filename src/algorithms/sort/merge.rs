//! Merge sort
//!
//! Top-down over inclusive ranges `[p, r]` split at `q = (p + r) / 2`: sort the
//! left half, then the right half, then merge. The recursion is replaced by a
//! task stack so the sort can pause between placements.
//!
//! # Merging
//!
//! A merge copies both halves out and writes the smaller head back into the
//! array, taking from the left on ties. Each placement at index `k` records
//! `comparing=[k]` before the write and `swapped=[k]` after.
//!
//! The raw array holds stale copies of the left half while a merge is running,
//! so snapshots show the merged prefix followed by the unplaced left run and
//! the (untouched) right run. Every snapshot is therefore a permutation of the
//! input.

use super::SortState;

#[derive(Debug, Clone, Copy)]
enum Task {
    Sort { p: usize, r: usize },
    Merge { p: usize, q: usize, r: usize },
}

/// An in-progress merge of `[p, q]` and `[q+1, r]`
#[derive(Debug)]
struct MergeRun {
    r: usize,
    left: Vec<i64>,
    right: Vec<i64>,
    i: usize,
    j: usize,
    /// Next destination index
    k: usize,
}

impl MergeRun {
    fn new(values: &[i64], p: usize, q: usize, r: usize) -> Self {
        MergeRun {
            r,
            left: values[p..=q].to_vec(),
            right: values[q + 1..=r].to_vec(),
            i: 0,
            j: 0,
            k: p,
        }
    }

    fn is_done(&self) -> bool {
        self.k > self.r
    }

    fn pending_left(&self) -> &[i64] {
        &self.left[self.i..]
    }

    /// The array as a viewer should see it
    fn view(&self, values: &[i64]) -> Vec<i64> {
        let mut view = values.to_vec();
        let pending = self.pending_left();
        view[self.k..self.k + pending.len()].copy_from_slice(pending);
        view
    }

    fn place(&mut self, state: &mut SortState<'_>) {
        let k = self.k;
        state.record_view(self.view(state.values()), vec![k], vec![]);

        let take_left = match (self.left.get(self.i), self.right.get(self.j)) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            _ => false,
        };
        let value = if take_left {
            self.i += 1;
            self.left[self.i - 1]
        } else {
            self.j += 1;
            self.right[self.j - 1]
        };
        state.set(k, value);
        self.k += 1;

        state.record_view(self.view(state.values()), vec![], vec![k]);
    }

    /// Put the unplaced left run back so the array is a permutation again
    fn restore(&self, state: &mut SortState<'_>) {
        let pending = self.pending_left();
        state.values_mut()[self.k..self.k + pending.len()].copy_from_slice(pending);
    }
}

#[derive(Debug)]
pub struct MergeSort {
    tasks: Vec<Task>,
    run: Option<MergeRun>,
}

impl MergeSort {
    pub fn new(len: usize) -> Self {
        let tasks = if len > 1 {
            vec![Task::Sort { p: 0, r: len - 1 }]
        } else {
            Vec::new()
        };
        MergeSort { tasks, run: None }
    }

    pub fn advance(&mut self, state: &mut SortState<'_>) -> bool {
        if let Some(run) = self.run.as_mut() {
            run.place(state);
            if run.is_done() {
                self.run = None;
            }
            return true;
        }

        match self.tasks.pop() {
            None => false,
            Some(Task::Sort { p, r }) => {
                if p < r {
                    let q = (p + r) / 2;
                    // Popped in reverse: left half, right half, merge
                    self.tasks.push(Task::Merge { p, q, r });
                    self.tasks.push(Task::Sort { p: q + 1, r });
                    self.tasks.push(Task::Sort { p, r: q });
                }
                true
            }
            Some(Task::Merge { p, q, r }) => {
                self.run = Some(MergeRun::new(state.values(), p, q, r));
                true
            }
        }
    }

    /// Called when the consumer stops pulling in the middle of a merge
    pub fn abandon(&mut self, state: &mut SortState<'_>) {
        if let Some(run) = self.run.take() {
            run.restore(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::sort::{sort, sort_steps, SortKind};
    use crate::subject::sequence::Sequence;
    use crate::trace::Step;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_elements() {
        let mut seq = Sequence::new(vec![2, 1]);
        let trace = sort(&mut seq, SortKind::Merge);

        let expected = vec![
            Step::sort(&[2, 1], vec![], vec![]),
            Step::sort(&[2, 1], vec![0], vec![]),
            Step::sort(&[1, 2], vec![], vec![0]),
            Step::sort(&[1, 2], vec![1], vec![]),
            Step::sort(&[1, 2], vec![], vec![1]),
        ];
        assert_eq!(trace.steps(), &expected[..]);
    }

    #[test]
    fn test_left_half_merges_first() {
        let mut seq = Sequence::new(vec![4, 3, 2, 1]);
        let trace = sort(&mut seq, SortKind::Merge);

        // The first placement belongs to the left half [0, 1]
        let placements: Vec<usize> = trace
            .iter()
            .filter_map(|step| step.swapped().first().copied())
            .collect();
        assert_eq!(placements, vec![0, 1, 2, 3, 0, 1, 2, 3]);
        assert_eq!(trace.get(2).and_then(Step::values), Some(&[3, 4, 2, 1][..]));
        assert_eq!(seq.values(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_one_comparing_and_one_swapped_per_placement() {
        let mut seq = Sequence::new(vec![7, 2, 9, 4, 4, 1]);
        let trace = sort(&mut seq, SortKind::Merge);
        let comparing = trace.iter().filter(|s| !s.comparing().is_empty()).count();
        let swapped = trace.iter().filter(|s| !s.swapped().is_empty()).count();
        assert_eq!(comparing, swapped);
        assert_eq!(trace.len(), 1 + comparing + swapped);
    }

    #[test]
    fn test_abandoned_merge_restores_left_run() {
        let mut seq = Sequence::new(vec![3, 4, 1, 2]);
        {
            let mut steps = sort_steps(&mut seq, SortKind::Merge);
            // initial, two 2-element merges (4 steps each), first placement of the last merge
            for _ in 0..(1 + 4 + 4 + 2) {
                steps.next();
            }
        }
        let mut values = seq.values().to_vec();
        values.sort();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }
}
