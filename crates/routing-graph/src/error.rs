//! Graph-subsystem error type.

use thiserror::Error;

use routing_core::{EdgeId, NodeId};

/// Errors produced by `routing-graph`: domain validation, search failure,
/// and CSV loading.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("node {0} out of range")]
    BadNode(NodeId),

    #[error("edge {0} out of range")]
    BadEdge(EdgeId),

    #[error("speed must be positive, got {0}")]
    BadSpeed(f64),

    #[error("route reconstruction failed: no edge from {from} to {to} despite a discovered path")]
    Inconsistent { from: NodeId, to: NodeId },

    #[error("load error: missing or invalid node/edge count")]
    BadCounts,

    #[error("load error: record count mismatch, expected {expected} got {got}")]
    RecordCountMismatch { expected: usize, got: usize },

    #[error("load error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
