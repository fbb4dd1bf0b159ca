//! hn-graph: undirected graph layer for huenet.
//!
//! Provides:
//! - Core graph data structures (Edge, Graph) with compact adjacency
//! - Incremental graph builder with validation
//! - Random G(n, p) generation driven by an explicit RNG
//! - Force-directed 2D layout for display
//!
//! # Example
//!
//! ```
//! use hn_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_node();
//! let b = builder.add_node();
//! builder.add_edge(a, b);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.neighbors(a), &[b]);
//! ```

pub mod builder;
pub mod error;
pub mod generate;
pub mod graph;
pub mod layout;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use generate::{GnpParams, gnp};
pub use graph::{Edge, Graph};
pub use layout::{LayoutParams, Point, spring_layout};
