//! Incremental graph builder.

use hn_core::{HnResult, NodeId};

use crate::error::GraphError;
use crate::graph::{Edge, Graph};
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Use `add_node` and `add_edge` to build up the graph,
/// then call `build()` to validate and freeze it into an immutable `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    node_count: usize,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder that already holds nodes `0..count`.
    pub fn with_nodes(count: usize) -> Self {
        Self {
            node_count: count,
            edges: Vec::new(),
        }
    }

    /// Add a node to the graph and return its ID.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId::from_index(self.node_count as u32);
        self.node_count += 1;
        id
    }

    /// Add an undirected edge between two nodes.
    ///
    /// Self-loops, duplicates and dangling endpoints are accepted here and
    /// rejected by `build()`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        self.edges.push(Edge::new(u, v));
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    ///
    /// This performs validation and constructs compact adjacency lists.
    pub fn build(mut self) -> HnResult<Graph> {
        if self.node_count >= u32::MAX as usize {
            return Err(GraphError::TooManyNodes {
                count: self.node_count,
            }
            .into());
        }

        self.edges.sort_unstable();
        validate::validate_edges(self.node_count, &self.edges)?;

        let (neighbor_offsets, neighbors) = Self::build_adjacency(self.node_count, &self.edges);

        validate::validate_adjacency(self.node_count, &self.edges, &neighbor_offsets, &neighbors)?;

        Ok(Graph {
            node_count: self.node_count,
            edges: self.edges,
            neighbor_offsets,
            neighbors,
        })
    }

    /// Build compact adjacency lists: for each node, collect its neighbors.
    fn build_adjacency(node_count: usize, edges: &[Edge]) -> (Vec<usize>, Vec<NodeId>) {
        let mut per_node: Vec<Vec<NodeId>> = vec![Vec::new(); node_count];
        for edge in edges {
            per_node[edge.a.slot()].push(edge.b);
            per_node[edge.b.slot()].push(edge.a);
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut flat = Vec::with_capacity(edges.len() * 2);
        offsets.push(0);

        for mut list in per_node {
            // Sort each node's neighbor list for determinism
            list.sort_unstable();
            flat.extend_from_slice(&list);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}
