//! Graph validation logic.

use hn_core::{HnResult, NodeId};

use crate::error::GraphError;
use crate::graph::Edge;

/// Validate the edge list: endpoints exist, no self-loops, no duplicates.
///
/// `edges` must already be canonical and sorted.
pub(crate) fn validate_edges(node_count: usize, edges: &[Edge]) -> HnResult<()> {
    for edge in edges {
        // Endpoints must be nodes of the graph
        for node in [edge.a, edge.b] {
            if node.slot() >= node_count {
                return Err(GraphError::InvalidNodeRef { node, node_count }.into());
            }
        }

        if edge.a == edge.b {
            return Err(GraphError::SelfLoop { node: edge.a }.into());
        }
    }

    // Sorted, so duplicates are adjacent
    for pair in edges.windows(2) {
        if pair[0] == pair[1] {
            return Err(GraphError::DuplicateEdge {
                a: pair[0].a,
                b: pair[0].b,
            }
            .into());
        }
    }

    Ok(())
}

/// Validate adjacency lists against the edge list.
pub(crate) fn validate_adjacency(
    node_count: usize,
    edges: &[Edge],
    neighbor_offsets: &[usize],
    neighbors: &[NodeId],
) -> HnResult<()> {
    let first = NodeId::from_index(0);

    // Offsets array has one entry per node plus a terminator
    if neighbor_offsets.len() != node_count + 1 {
        return Err(GraphError::InconsistentAdjacency {
            node: first,
            neighbor: first,
        }
        .into());
    }

    // Every edge appears once from each side
    if neighbors.len() != edges.len() * 2 {
        return Err(GraphError::InconsistentAdjacency {
            node: first,
            neighbor: first,
        }
        .into());
    }

    for idx in 0..node_count {
        let node = NodeId::from_index(idx as u32);
        let start = neighbor_offsets[idx];
        let end = neighbor_offsets[idx + 1];
        if start > end || end > neighbors.len() {
            return Err(GraphError::InconsistentAdjacency {
                node,
                neighbor: node,
            }
            .into());
        }

        for &neighbor in &neighbors[start..end] {
            if edges.binary_search(&Edge::new(node, neighbor)).is_err() {
                return Err(GraphError::InconsistentAdjacency { node, neighbor }.into());
            }
        }
    }

    Ok(())
}
