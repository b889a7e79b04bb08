//! Error types for subjects, traces and trace persistence
//!
//! This module defines [`TraceError`], covering everything that can go wrong
//! while building a subject, running a search, navigating a recorded trace, or
//! writing a trace to durable storage.
//!
//! Sorting has no error conditions: any [`Sequence`](crate::subject::sequence::Sequence)
//! can be sorted. A failed persist never touches the in-memory trace.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::subject::graph::NodeId;

/// Why an edge was rejected by [`Graph::add_edge`](crate::subject::graph::Graph::add_edge)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRejection {
    SelfLoop,
    Duplicate,
}

impl std::fmt::Display for EdgeRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeRejection::SelfLoop => write!(f, "cannot connect a node to itself"),
            EdgeRejection::Duplicate => write!(f, "edge already exists"),
        }
    }
}

/// Errors raised by the engine
#[derive(Debug, Error)]
pub enum TraceError {
    /// Node is not part of the graph (search start, edge endpoint, removal)
    #[error("Unknown node '{node}'")]
    UnknownNode { node: NodeId },

    /// Node name is already taken
    #[error("Node '{node}' already exists")]
    DuplicateNode { node: NodeId },

    /// Edge add rejected; the graph is unchanged
    #[error("Invalid edge '{from}' -> '{to}': {reason}")]
    InvalidEdge {
        from: NodeId,
        to: NodeId,
        reason: EdgeRejection,
    },

    /// Edge removal for an edge that does not exist
    #[error("No edge '{from}' -> '{to}'")]
    UnknownEdge { from: NodeId, to: NodeId },

    /// Text that is not a comma-separated list of integers
    #[error("Invalid sequence: '{token}' is not an integer")]
    InvalidSequence { token: String },

    /// Replay navigation past either end of a trace
    #[error("History operation failed: {message}")]
    HistoryOperationFailed { message: String },

    /// Trace storage could not be written or read
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A persisted trace line could not be decoded
    #[error("Malformed trace '{}' at line {line}: {source}", path.display())]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl TraceError {
    /// Name of the node involved, if any
    pub fn node(&self) -> Option<&str> {
        match self {
            TraceError::UnknownNode { node } | TraceError::DuplicateNode { node } => Some(node),
            TraceError::InvalidEdge { from, .. } | TraceError::UnknownEdge { from, .. } => {
                Some(from)
            }
            _ => None,
        }
    }

    /// Whether the error came from durable storage
    pub fn is_io(&self) -> bool {
        matches!(self, TraceError::Io { .. } | TraceError::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, TraceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_edge_message() {
        let err = TraceError::InvalidEdge {
            from: "A".to_string(),
            to: "A".to_string(),
            reason: EdgeRejection::SelfLoop,
        };
        assert_eq!(
            err.to_string(),
            "Invalid edge 'A' -> 'A': cannot connect a node to itself"
        );
        assert_eq!(err.node(), Some("A"));
        assert!(!err.is_io());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = TraceError::Io {
            path: PathBuf::from("logs/bfs_steps.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert!(err.is_io());
        assert!(err.to_string().contains("logs/bfs_steps.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
