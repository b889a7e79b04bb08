//! Subjects that algorithms operate on
//!
//! - [`graph`]: labeled graph with edge weights, searched by BFS/DFS/UCS
//! - [`sequence`]: integer sequence, reordered in place by the sorts
//!
//! # Ownership
//!
//! Searches borrow a [`Graph`] immutably and never change it. Sorts take the
//! [`Sequence`] by exclusive reference and leave it sorted. Running a second
//! algorithm on the unsorted input requires cloning the sequence first.

pub mod graph;
pub mod sequence;

pub use graph::{Edge, Graph, GraphMode, GraphSpec, Neighbor, NodeId, Weight};
pub use sequence::Sequence;
