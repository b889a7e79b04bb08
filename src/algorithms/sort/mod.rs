//! Instrumented sorting algorithms
//!
//! Each sort reorders a [`Sequence`] in place (ascending) and records a
//! [`Step`] for every comparison or write it wants a viewer to see:
//!
//! - [`insertion`]: shift-left insertion sort
//! - [`selection`]: minimum-selection sort
//! - [`merge`]: top-down merge sort, left half first
//! - [`quick`]: Lomuto quick sort, last element as pivot
//!
//! Every trace starts with the untouched input (both index sets empty).
//!
//! # Execution Model
//!
//! The recursive sorts are written as explicit-stack state machines. A machine
//! advances by one unit of work at a time (one comparison, one placement, one
//! partition swap), queueing the steps that unit produced. [`SortSteps`] pulls
//! from that queue and only advances the machine when the queue runs dry, so a
//! consumer that stops pulling stops the sort. [`sort`] is exactly a full drain
//! of [`sort_steps`].

pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::subject::sequence::Sequence;
use crate::trace::{Algorithm, Step, StepTrace};
use std::collections::VecDeque;

use insertion::InsertionSort;
use merge::MergeSort;
use quick::QuickSort;
use selection::SelectionSort;

/// Which sort to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl SortKind {
    pub const ALL: [SortKind; 4] = [
        SortKind::Insertion,
        SortKind::Selection,
        SortKind::Merge,
        SortKind::Quick,
    ];
}

impl From<SortKind> for Algorithm {
    fn from(kind: SortKind) -> Self {
        match kind {
            SortKind::Insertion => Algorithm::Insertion,
            SortKind::Selection => Algorithm::Selection,
            SortKind::Merge => Algorithm::Merge,
            SortKind::Quick => Algorithm::Quick,
        }
    }
}

/// Sort `sequence` in place and return the full trace
pub fn sort(sequence: &mut Sequence, kind: SortKind) -> StepTrace {
    let len = sequence.len();
    let trace = StepTrace::from_steps(kind.into(), sort_steps(sequence, kind));
    tracing::debug!(
        algorithm = %trace.algorithm(),
        len,
        steps = trace.len(),
        "sort finished"
    );
    trace
}

/// Start a sort whose steps are produced on demand.
///
/// The sequence stays borrowed until the iterator is dropped. Once drained it
/// is sorted; if dropped early it holds a permutation of the input reflecting
/// the work done so far.
pub fn sort_steps(sequence: &mut Sequence, kind: SortKind) -> SortSteps<'_> {
    tracing::debug!(algorithm = %Algorithm::from(kind), len = sequence.len(), "sort started");
    let mut state = SortState {
        values: sequence.values_mut(),
        pending: VecDeque::new(),
    };
    state.record(Vec::new(), Vec::new());

    let len = state.len();
    let machine = match kind {
        SortKind::Insertion => Machine::Insertion(InsertionSort::new(len)),
        SortKind::Selection => Machine::Selection(SelectionSort::new(len)),
        SortKind::Merge => Machine::Merge(MergeSort::new(len)),
        SortKind::Quick => Machine::Quick(QuickSort::new(len)),
    };

    SortSteps {
        kind,
        state,
        machine,
        finished: false,
    }
}

/// The array being sorted plus the steps not yet handed to the consumer
#[derive(Debug)]
pub struct SortState<'a> {
    values: &'a mut [i64],
    pending: VecDeque<Step>,
}

impl SortState<'_> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> i64 {
        self.values[index]
    }

    pub fn set(&mut self, index: usize, value: i64) {
        self.values[index] = value;
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    pub fn values(&self) -> &[i64] {
        &*self.values
    }

    pub fn values_mut(&mut self) -> &mut [i64] {
        &mut *self.values
    }

    /// Snapshot the array as it is now
    pub fn record(&mut self, comparing: Vec<usize>, swapped: Vec<usize>) {
        let step = Step::sort(&*self.values, comparing, swapped);
        self.pending.push_back(step);
    }

    /// Queue a step whose snapshot differs from the raw array
    pub fn record_view(&mut self, values: Vec<i64>, comparing: Vec<usize>, swapped: Vec<usize>) {
        self.pending.push_back(Step::sort(&values, comparing, swapped));
    }
}

#[derive(Debug)]
enum Machine {
    Insertion(InsertionSort),
    Selection(SelectionSort),
    Merge(MergeSort),
    Quick(QuickSort),
}

impl Machine {
    /// Perform one unit of work. Returns `false` once the sort is complete.
    fn advance(&mut self, state: &mut SortState<'_>) -> bool {
        match self {
            Machine::Insertion(m) => m.advance(state),
            Machine::Selection(m) => m.advance(state),
            Machine::Merge(m) => m.advance(state),
            Machine::Quick(m) => m.advance(state),
        }
    }

    fn abandon(&mut self, state: &mut SortState<'_>) {
        if let Machine::Merge(m) = self {
            m.abandon(state);
        }
    }
}

/// Lazily produced sort trace
#[derive(Debug)]
pub struct SortSteps<'a> {
    kind: SortKind,
    state: SortState<'a>,
    machine: Machine,
    finished: bool,
}

impl SortSteps<'_> {
    pub fn kind(&self) -> SortKind {
        self.kind
    }

    /// Current contents of the array being sorted
    pub fn values(&self) -> &[i64] {
        self.state.values()
    }
}

impl Iterator for SortSteps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(step) = self.state.pending.pop_front() {
                return Some(step);
            }
            if self.finished {
                return None;
            }
            if !self.machine.advance(&mut self.state) {
                self.finished = true;
            }
        }
    }
}

impl std::iter::FusedIterator for SortSteps<'_> {}

impl Drop for SortSteps<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.machine.abandon(&mut self.state);
        }
    }
}
