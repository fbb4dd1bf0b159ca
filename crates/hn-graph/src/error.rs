//! Graph-specific error types.

use hn_core::{HnError, NodeId};

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge refers to a node that doesn't exist.
    InvalidNodeRef { node: NodeId, node_count: usize },

    /// An edge joins a node to itself.
    SelfLoop { node: NodeId },

    /// The same unordered pair was added twice.
    DuplicateEdge { a: NodeId, b: NodeId },

    /// Adjacency lists disagree with the edge list.
    InconsistentAdjacency { node: NodeId, neighbor: NodeId },

    /// More nodes than a `NodeId` can address.
    TooManyNodes { count: usize },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidNodeRef { node, node_count } => {
                write!(
                    f,
                    "Edge refers to non-existent node {} (graph has {} nodes)",
                    node, node_count
                )
            }
            GraphError::SelfLoop { node } => {
                write!(f, "Self-loop on node {}", node)
            }
            GraphError::DuplicateEdge { a, b } => {
                write!(f, "Duplicate edge {}-{}", a, b)
            }
            GraphError::InconsistentAdjacency { node, neighbor } => {
                write!(
                    f,
                    "Node {} lists {} as a neighbor but no matching edge exists",
                    node, neighbor
                )
            }
            GraphError::TooManyNodes { count } => {
                write!(f, "Graph has {} nodes, more than a node id can address", count)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for HnError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::TooManyNodes { .. } => HnError::invalid_arg(err.to_string()),
            _ => HnError::Invariant {
                what: err.to_string(),
            },
        }
    }
}
