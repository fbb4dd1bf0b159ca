//! Core graph data structures.

use hn_core::NodeId;

/// An undirected edge between two distinct nodes.
///
/// Stored canonically with `a < b` so an unordered pair has exactly one
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    /// Build the canonical edge for the pair `{u, v}`.
    pub fn new(u: NodeId, v: NodeId) -> Self {
        if u <= v { Self { a: u, b: v } } else { Self { a: v, b: u } }
    }

}

/// The graph: a validated, immutable set of nodes and undirected edges.
///
/// Nodes are the contiguous ids `0..node_count`. The graph stores:
/// - The canonical edge list, sorted.
/// - Compact adjacency: for each node, its neighbors in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub(crate) node_count: usize,
    pub(crate) edges: Vec<Edge>,

    /// Offsets for node->neighbor adjacency: node i's neighbors are in
    /// neighbors[neighbor_offsets[i]..neighbor_offsets[i+1]].
    pub(crate) neighbor_offsets: Vec<usize>,

    /// Flat neighbor list, grouped by node and sorted within each group.
    pub(crate) neighbors: Vec<NodeId>,
}

impl Graph {
    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate over all node ids in ascending order.
    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.node_count as u32).map(NodeId::from_index)
    }

    /// Return all edges (canonical, sorted).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// True if `id` names a node of this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        id.slot() < self.node_count
    }

    /// Neighbors of a node (empty if the id is out of bounds).
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        let idx = id.slot();
        if idx >= self.node_count {
            return &[];
        }
        let start = self.neighbor_offsets[idx];
        let end = self.neighbor_offsets[idx + 1];
        &self.neighbors[start..end]
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    pub fn is_isolated(&self, id: NodeId) -> bool {
        self.degree(id) == 0
    }

}
