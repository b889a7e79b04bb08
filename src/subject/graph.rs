//! Graph subject
//!
//! A labeled graph with integer edge weights, fixed as directed or undirected at
//! creation. The graph is built through explicit add/remove operations and then
//! handed to a search by shared reference.
//!
//! # Neighbor Order
//!
//! Nodes are reported in insertion order. Each node keeps its neighbors in the
//! order the connecting edges were added; searches iterate neighbors in exactly
//! this order, which is what makes their traces reproducible.
//!
//! # Serialized Form
//!
//! ```text
//! {"directed": false,
//!  "nodes": ["A", "B", "C"],
//!  "edges": [{"from": "A", "to": "B", "weight": 1}]}
//! ```
//!
//! Deserializing replays every node and edge through [`Graph::add_node`] and
//! [`Graph::add_edge`], so a loaded graph satisfies the same invariants as one
//! built by hand.

use crate::errors::{EdgeRejection, Result, TraceError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Node identifier (the node's unique name)
pub type NodeId = String;

/// Edge weight; unspecified weights are 1
pub type Weight = u64;

pub const DEFAULT_WEIGHT: Weight = 1;

/// Whether edges have a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphMode {
    Directed,
    #[default]
    Undirected,
}

/// An outgoing adjacency entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: Weight,
}

/// An edge as reported by [`Graph::edges`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

/// Labeled graph with optional edge weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GraphSpec", into = "GraphSpec")]
pub struct Graph {
    mode: GraphMode,
    nodes: Vec<NodeId>,
    adjacency: FxHashMap<NodeId, Vec<Neighbor>>,
    /// Live edges in insertion order, each undirected edge once as added
    edge_order: Vec<(NodeId, NodeId)>,
}

impl Graph {
    /// Create an empty graph. The mode cannot change afterwards; build a new
    /// graph instead.
    pub fn new(mode: GraphMode) -> Self {
        Graph {
            mode,
            nodes: Vec::new(),
            adjacency: FxHashMap::default(),
            edge_order: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphMode::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphMode::Undirected)
    }

    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    pub fn is_directed(&self) -> bool {
        self.mode == GraphMode::Directed
    }

    /// Add a node. Fails if the name is taken.
    pub fn add_node(&mut self, name: impl Into<NodeId>) -> Result<()> {
        let name = name.into();
        if self.adjacency.contains_key(&name) {
            return Err(TraceError::DuplicateNode { node: name });
        }
        self.adjacency.insert(name.clone(), Vec::new());
        self.nodes.push(name);
        Ok(())
    }

    /// Remove a node together with every incident edge
    pub fn remove_node(&mut self, name: &str) -> Result<()> {
        if self.adjacency.remove(name).is_none() {
            return Err(TraceError::UnknownNode {
                node: name.to_string(),
            });
        }
        self.nodes.retain(|n| n != name);
        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|n| n.node != name);
        }
        self.edge_order.retain(|(from, to)| from != name && to != name);
        Ok(())
    }

    /// Add an edge between two existing nodes.
    ///
    /// Self-loops and duplicates are rejected with [`TraceError::InvalidEdge`];
    /// in an undirected graph `a-b` and `b-a` are the same edge.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Option<Weight>) -> Result<()> {
        self.require_node(from)?;
        self.require_node(to)?;

        let reject = |reason| TraceError::InvalidEdge {
            from: from.to_string(),
            to: to.to_string(),
            reason,
        };
        if from == to {
            return Err(reject(EdgeRejection::SelfLoop));
        }
        if self.has_edge(from, to) {
            return Err(reject(EdgeRejection::Duplicate));
        }

        let weight = weight.unwrap_or(DEFAULT_WEIGHT);
        self.push_neighbor(from, to, weight);
        if !self.is_directed() {
            self.push_neighbor(to, from, weight);
        }
        self.edge_order.push((from.to_string(), to.to_string()));
        Ok(())
    }

    /// Remove the edge `from -> to` (or `from - to` when undirected)
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        if !self.has_edge(from, to) {
            return Err(TraceError::UnknownEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.retain(|n| n.node != to);
        }
        let directed = self.is_directed();
        if !directed {
            if let Some(neighbors) = self.adjacency.get_mut(to) {
                neighbors.retain(|n| n.node != from);
            }
        }
        self.edge_order.retain(|(a, b)| {
            let same = a == from && b == to;
            let reversed = !directed && a == to && b == from;
            !(same || reversed)
        });
        Ok(())
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edge_weight(from, to).is_some()
    }

    pub fn edge_weight(&self, from: &str, to: &str) -> Option<Weight> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|n| n.node == to)
            .map(|n| n.weight)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Outgoing neighbors of `name` in edge insertion order
    pub fn neighbors(&self, name: &str) -> Result<&[Neighbor]> {
        self.adjacency
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| TraceError::UnknownNode {
                node: name.to_string(),
            })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        let half_edges: usize = self.adjacency.values().map(Vec::len).sum();
        if self.is_directed() {
            half_edges
        } else {
            half_edges / 2
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All edges in the order they were added. Undirected edges are listed
    /// once, in the direction they were added.
    ///
    /// Re-adding these edges in this order into a graph with the same nodes
    /// reproduces every neighbor list exactly.
    pub fn edges(&self) -> Vec<Edge> {
        self.edge_order
            .iter()
            .filter_map(|(from, to)| {
                self.edge_weight(from, to).map(|weight| Edge {
                    from: from.clone(),
                    to: to.clone(),
                    weight,
                })
            })
            .collect()
    }

    fn require_node(&self, name: &str) -> Result<()> {
        if self.has_node(name) {
            Ok(())
        } else {
            Err(TraceError::UnknownNode {
                node: name.to_string(),
            })
        }
    }

    fn push_neighbor(&mut self, from: &str, to: &str, weight: Weight) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.push(Neighbor {
                node: to.to_string(),
                weight,
            });
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphMode::default())
    }
}

/// On-disk description of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl TryFrom<GraphSpec> for Graph {
    type Error = TraceError;

    fn try_from(spec: GraphSpec) -> Result<Self> {
        let mode = if spec.directed {
            GraphMode::Directed
        } else {
            GraphMode::Undirected
        };
        let mut graph = Graph::new(mode);
        for node in spec.nodes {
            graph.add_node(node)?;
        }
        for edge in &spec.edges {
            graph.add_edge(&edge.from, &edge.to, Some(edge.weight))?;
        }
        Ok(graph)
    }
}

impl From<Graph> for GraphSpec {
    fn from(graph: Graph) -> Self {
        let edges = graph.edges();
        GraphSpec {
            directed: graph.is_directed(),
            nodes: graph.nodes,
            edges,
        }
    }
}
