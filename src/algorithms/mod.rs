//! Instrumented algorithms
//!
//! This module provides the algorithms that produce step traces:
//! - [`search`]: BFS, DFS and Uniform-Cost Search over a [`Graph`](crate::subject::Graph)
//! - [`sort`]: insertion, selection, merge and quick sort over a
//!   [`Sequence`](crate::subject::Sequence)
//!
//! # Execution Model
//!
//! Every algorithm is an iterator over [`Step`](crate::trace::Step)s that does
//! just enough work to produce its next step. The eager entry points
//! ([`search::search`], [`sort::sort`]) drain that iterator into a
//! [`StepTrace`](crate::trace::StepTrace), so both modes yield identical steps.
//!
//! Runs are single-threaded and hold no shared state: each run owns its
//! accumulator and borrows its subject.

pub mod search;
pub mod sort;

pub use search::{search, search_steps, SearchKind, SearchSteps};
pub use sort::{sort, sort_steps, SortKind, SortSteps};
