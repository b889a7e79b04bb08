//! # Introduction
//!
//! algotrace runs classic graph searches and sorts step by step, recording a
//! full snapshot of the subject after every meaningful step. The resulting
//! trace can be written to disk and replayed forward and backward in a
//! terminal viewer built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Subject → Algorithm → Steps → StepTrace → Sink / Viewer
//! ```
//!
//! 1. [`subject`]: the data an algorithm runs over, a
//!    [`subject::Graph`] or a [`subject::Sequence`].
//! 2. [`algorithms`]: BFS, DFS and Uniform-Cost Search; insertion,
//!    selection, merge and quick sort. Each is available eagerly or as a lazy
//!    iterator of steps.
//! 3. [`trace`]: the [`trace::Step`] and [`trace::StepTrace`] types, replay
//!    navigation and the [`trace::sink::TraceSink`] contract.
//! 4. [`errors`]: the single [`errors::TraceError`] enum.
//! 5. [`cli`] and [`ui`]: the binary's command line and replay viewer; not
//!    part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use algotrace::algorithms::{sort, SortKind};
//! use algotrace::subject::Sequence;
//!
//! let mut seq: Sequence = "5, 3, 8".parse().unwrap();
//! let trace = sort(&mut seq, SortKind::Insertion);
//! assert_eq!(seq.values(), &[3, 5, 8]);
//! assert_eq!(trace.first().and_then(|s| s.values()), Some(&[5, 3, 8][..]));
//! ```

pub mod algorithms;
pub mod cli;
pub mod errors;
pub mod subject;
pub mod trace;
pub mod ui;
