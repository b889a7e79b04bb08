// Step recording for replayable algorithm runs

//! Every algorithm run produces a [`StepTrace`]: an ordered list of [`Step`]s,
//! each holding a full copy of the subject's observable state plus an
//! [`Annotation`] describing what the step did.
//!
//! - [`replay`]: forward/backward navigation over a finished trace
//! - [`sink`]: durable storage for traces

pub mod replay;
pub mod sink;

use crate::subject::graph::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Algorithms that produce traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl Algorithm {
    /// Default name under which a trace of this algorithm is persisted
    pub fn log_name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs_steps",
            Algorithm::Dfs => "dfs_steps",
            Algorithm::Ucs => "ucs_steps",
            Algorithm::Insertion => "insertion_sort_steps",
            Algorithm::Selection => "selection_sort_steps",
            Algorithm::Merge => "merge_sort_steps",
            Algorithm::Quick => "quick_sort_steps",
        }
    }

    pub fn is_search(self) -> bool {
        matches!(self, Algorithm::Bfs | Algorithm::Dfs | Algorithm::Ucs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        };
        f.write_str(name)
    }
}

/// Full copy of the subject's observable state at one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Snapshot {
    /// Nodes visited so far, in visit order
    Visited(Vec<NodeId>),
    /// Array contents
    Values(Vec<i64>),
}

/// What a step did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Annotation {
    Search {
        visited: Vec<NodeId>,
    },
    Sort {
        /// Indices examined this step, not yet reordered
        comparing: Vec<usize>,
        /// Indices whose value changed this step
        swapped: Vec<usize>,
    },
}

/// One immutable snapshot + annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub snapshot: Snapshot,
    pub annotation: Annotation,
}

impl Step {
    /// Search step: the visited prefix at this instant
    pub fn search(visited: &[NodeId]) -> Self {
        Step {
            snapshot: Snapshot::Visited(visited.to_vec()),
            annotation: Annotation::Search {
                visited: visited.to_vec(),
            },
        }
    }

    /// Sort step: a copy of `values` with comparing/swapped indices
    pub fn sort(values: &[i64], comparing: Vec<usize>, swapped: Vec<usize>) -> Self {
        Step {
            snapshot: Snapshot::Values(values.to_vec()),
            annotation: Annotation::Sort { comparing, swapped },
        }
    }

    pub fn values(&self) -> Option<&[i64]> {
        match &self.snapshot {
            Snapshot::Values(values) => Some(values),
            Snapshot::Visited(_) => None,
        }
    }

    pub fn visited(&self) -> Option<&[NodeId]> {
        match &self.snapshot {
            Snapshot::Visited(visited) => Some(visited),
            Snapshot::Values(_) => None,
        }
    }

    pub fn comparing(&self) -> &[usize] {
        match &self.annotation {
            Annotation::Sort { comparing, .. } => comparing,
            Annotation::Search { .. } => &[],
        }
    }

    pub fn swapped(&self) -> &[usize] {
        match &self.annotation {
            Annotation::Sort { swapped, .. } => swapped,
            Annotation::Search { .. } => &[],
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.snapshot, &self.annotation) {
            (Snapshot::Values(values), Annotation::Sort { comparing, swapped }) => write!(
                f,
                "[{}] comparing=[{}] swapped=[{}]",
                join(values),
                join(comparing),
                join(swapped)
            ),
            (_, Annotation::Search { visited }) => write!(f, "visited=[{}]", join(visited)),
            (Snapshot::Visited(visited), _) => write!(f, "visited=[{}]", join(visited)),
        }
    }
}

/// Append-only accumulator used while an algorithm runs
#[derive(Debug)]
pub struct TraceRecorder {
    algorithm: Algorithm,
    steps: Vec<Step>,
}

impl TraceRecorder {
    pub fn new(algorithm: Algorithm) -> Self {
        TraceRecorder {
            algorithm,
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, step: Step) {
        tracing::trace!(algorithm = %self.algorithm, index = self.steps.len(), step = %step);
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Freeze into an immutable trace
    pub fn finish(self) -> StepTrace {
        StepTrace {
            algorithm: self.algorithm,
            steps: self.steps,
        }
    }
}

/// Ordered, frozen history of one algorithm run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTrace {
    algorithm: Algorithm,
    steps: Vec<Step>,
}

impl StepTrace {
    /// Collect a lazily produced run
    pub fn from_steps<I: IntoIterator<Item = Step>>(algorithm: Algorithm, steps: I) -> Self {
        let mut recorder = TraceRecorder::new(algorithm);
        for step in steps {
            recorder.push(step);
        }
        recorder.finish()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Rough size of all snapshots in bytes
    pub fn estimated_size(&self) -> usize {
        self.steps
            .iter()
            .map(|step| match &step.snapshot {
                Snapshot::Values(values) => values.len() * std::mem::size_of::<i64>(),
                Snapshot::Visited(visited) => visited.iter().map(String::len).sum(),
            })
            .sum()
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
