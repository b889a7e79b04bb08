//! Graph searches: BFS, DFS and Uniform-Cost Search
//!
//! Each search emits one [`Step`] per newly visited node, annotated with the
//! visited list at that instant. [`search_steps`] yields the steps lazily;
//! [`search`] collects them.
//!
//! # Order
//!
//! - **BFS**: FIFO frontier. A neighbor is enqueued only if it is neither
//!   visited nor currently queued.
//! - **DFS**: pre-order, neighbors in insertion order, driven by an explicit
//!   stack of `(node, next neighbor)` frames instead of recursion.
//! - **UCS**: min-heap on `(cost, node name)`. A neighbor is pushed whenever
//!   its new cost beats the best known cost; stale entries stay in the heap
//!   and are skipped when popped for an already-visited node. Equal costs pop
//!   in lexicographic name order.

use crate::errors::Result;
use crate::subject::graph::{Graph, NodeId, Weight};
use crate::trace::{Algorithm, Step, StepTrace};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// Which search to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Bfs,
    Dfs,
    Ucs,
}

impl From<SearchKind> for Algorithm {
    fn from(kind: SearchKind) -> Self {
        match kind {
            SearchKind::Bfs => Algorithm::Bfs,
            SearchKind::Dfs => Algorithm::Dfs,
            SearchKind::Ucs => Algorithm::Ucs,
        }
    }
}

/// Run a search to completion.
///
/// Fails with [`TraceError::UnknownNode`](crate::errors::TraceError::UnknownNode)
/// if `start` is not in the graph; no partial trace is produced.
pub fn search(graph: &Graph, start: &str, kind: SearchKind) -> Result<StepTrace> {
    let steps = search_steps(graph, start, kind)?;
    let trace = StepTrace::from_steps(kind.into(), steps);
    tracing::debug!(
        algorithm = %trace.algorithm(),
        start,
        steps = trace.len(),
        "search finished"
    );
    Ok(trace)
}

/// Start a search whose steps are produced on demand
pub fn search_steps<'g>(
    graph: &'g Graph,
    start: &str,
    kind: SearchKind,
) -> Result<SearchSteps<'g>> {
    // Fails early for unknown start nodes
    graph.neighbors(start)?;
    tracing::debug!(algorithm = %Algorithm::from(kind), start, "search started");

    let start = start.to_string();
    let frontier = match kind {
        SearchKind::Bfs => {
            let mut queued = FxHashSet::default();
            queued.insert(start.clone());
            Frontier::Queue {
                queue: VecDeque::from([start]),
                queued,
            }
        }
        SearchKind::Dfs => Frontier::Stack {
            root: Some(start),
            frames: Vec::new(),
        },
        SearchKind::Ucs => {
            let mut best = FxHashMap::default();
            best.insert(start.clone(), 0);
            Frontier::Heap {
                heap: BinaryHeap::from([Reverse((0, start))]),
                best,
            }
        }
    };

    Ok(SearchSteps {
        graph,
        kind,
        visited: Vec::new(),
        visited_set: FxHashSet::default(),
        frontier,
    })
}

/// DFS activation record: the node and the index of its next neighbor
#[derive(Debug)]
struct Frame {
    node: NodeId,
    next: usize,
}

#[derive(Debug)]
enum Frontier {
    Queue {
        queue: VecDeque<NodeId>,
        queued: FxHashSet<NodeId>,
    },
    Stack {
        root: Option<NodeId>,
        frames: Vec<Frame>,
    },
    Heap {
        heap: BinaryHeap<Reverse<(Weight, NodeId)>>,
        best: FxHashMap<NodeId, Weight>,
    },
}

/// Lazily produced search trace.
///
/// Borrows the graph for its whole lifetime; dropping it early simply stops
/// the search.
#[derive(Debug)]
pub struct SearchSteps<'g> {
    graph: &'g Graph,
    kind: SearchKind,
    visited: Vec<NodeId>,
    visited_set: FxHashSet<NodeId>,
    frontier: Frontier,
}

impl<'g> SearchSteps<'g> {
    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    /// Nodes visited so far
    pub fn visited(&self) -> &[NodeId] {
        &self.visited
    }

    fn visit(&mut self, node: NodeId) -> Step {
        self.visited_set.insert(node.clone());
        self.visited.push(node);
        Step::search(&self.visited)
    }

    fn next_bfs(&mut self) -> Option<Step> {
        let graph = self.graph;
        loop {
            let node = match &mut self.frontier {
                Frontier::Queue { queue, queued } => {
                    let node = queue.pop_front()?;
                    queued.remove(&node);
                    node
                }
                _ => return None,
            };
            if self.visited_set.contains(&node) {
                continue;
            }

            let neighbors = graph.neighbors(&node).unwrap_or_default();
            let step = self.visit(node);
            if let Frontier::Queue { queue, queued } = &mut self.frontier {
                for neighbor in neighbors {
                    if !self.visited_set.contains(&neighbor.node)
                        && !queued.contains(&neighbor.node)
                    {
                        queued.insert(neighbor.node.clone());
                        queue.push_back(neighbor.node.clone());
                    }
                }
            }
            return Some(step);
        }
    }

    fn next_dfs(&mut self) -> Option<Step> {
        let graph = self.graph;
        let Frontier::Stack { root, frames } = &mut self.frontier else {
            return None;
        };

        if let Some(start) = root.take() {
            frames.push(Frame {
                node: start.clone(),
                next: 0,
            });
            return Some(self.visit(start));
        }

        loop {
            let Frontier::Stack { frames, .. } = &mut self.frontier else {
                return None;
            };
            let frame = frames.last_mut()?;
            let neighbors = graph.neighbors(&frame.node).unwrap_or_default();

            match neighbors.get(frame.next) {
                Some(neighbor) => {
                    frame.next += 1;
                    if self.visited_set.contains(&neighbor.node) {
                        continue;
                    }
                    frames.push(Frame {
                        node: neighbor.node.clone(),
                        next: 0,
                    });
                    return Some(self.visit(neighbor.node.clone()));
                }
                None => {
                    // Backtrack
                    frames.pop();
                }
            }
        }
    }

    fn next_ucs(&mut self) -> Option<Step> {
        let graph = self.graph;
        loop {
            let Frontier::Heap { heap, .. } = &mut self.frontier else {
                return None;
            };
            let Reverse((cost, node)) = heap.pop()?;
            if self.visited_set.contains(&node) {
                // Stale entry from a cheaper path found later
                continue;
            }

            let neighbors = graph.neighbors(&node).unwrap_or_default();
            let step = self.visit(node);
            if let Frontier::Heap { heap, best } = &mut self.frontier {
                for neighbor in neighbors {
                    let new_cost = cost.saturating_add(neighbor.weight);
                    let improves = best
                        .get(&neighbor.node)
                        .map_or(true, |&known| new_cost < known);
                    if improves {
                        best.insert(neighbor.node.clone(), new_cost);
                        heap.push(Reverse((new_cost, neighbor.node.clone())));
                    }
                }
            }
            return Some(step);
        }
    }
}

impl Iterator for SearchSteps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        match self.kind {
            SearchKind::Bfs => self.next_bfs(),
            SearchKind::Dfs => self.next_dfs(),
            SearchKind::Ucs => self.next_ucs(),
        }
    }
}

impl std::iter::FusedIterator for SearchSteps<'_> {}
