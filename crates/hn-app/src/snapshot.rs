//! Serializable network snapshots.

use hn_color::Network;
use hn_graph::{LayoutParams, spring_layout};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};
use crate::store::NetworkId;

/// One node as seen by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: String,
    pub color: String,
    /// `[hue, saturation, lightness]`
    pub hsl: [f64; 3],
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeView {
    pub source: String,
    pub target: String,
}

/// Full network state: colors plus a freshly computed layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl NetworkSnapshot {
    /// Build a snapshot. The layout is computed here, on every call.
    pub fn from_network(network: &Network, layout: LayoutParams) -> Self {
        let graph = network.graph();
        let positions = spring_layout(graph, layout);

        let nodes = graph
            .node_ids()
            .zip(positions)
            .filter_map(|(id, pos)| {
                let hsl = network.hsl(id)?;
                let color = network.color(id)?;
                Some(NodeView {
                    id: id.to_string(),
                    color: color.to_hex(),
                    hsl: hsl.as_array(),
                    x: pos.x,
                    y: pos.y,
                })
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|edge| EdgeView {
                source: edge.a.to_string(),
                target: edge.b.to_string(),
            })
            .collect();

        Self { nodes, edges }
    }
}

/// Successful create/read/update reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkResponse {
    pub network_id: String,
    pub network: NetworkSnapshot,
}

impl NetworkResponse {
    pub fn new(id: NetworkId, network: NetworkSnapshot) -> Self {
        Self {
            network_id: id.to_string(),
            network,
        }
    }
}

/// Failure reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: ErrorKind,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hn_color::Hsl;
    use hn_core::NodeId;
    use hn_graph::GraphBuilder;

    fn pair_network() -> Network {
        let mut builder = GraphBuilder::with_nodes(3);
        builder.add_edge(NodeId::from_index(1), NodeId::from_index(0));
        let graph = builder.build().unwrap();
        Network::from_parts(
            graph,
            vec![
                Hsl::new(0.0, 100.0, 50.0),
                Hsl::new(120.0, 100.0, 50.0),
                Hsl::new(240.0, 100.0, 50.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn snapshot_shape() {
        let snapshot = NetworkSnapshot::from_network(&pair_network(), LayoutParams::default());
        assert_eq!(snapshot.nodes.len(), 3);
        assert_eq!(snapshot.nodes[0].id, "0");
        assert_eq!(snapshot.nodes[0].color, "#ff0000");
        assert_eq!(snapshot.nodes[1].hsl, [120.0, 100.0, 50.0]);
        assert_eq!(
            snapshot.edges,
            vec![EdgeView {
                source: "0".into(),
                target: "1".into()
            }]
        );
    }

    #[test]
    fn snapshot_json_field_names() {
        let snapshot = NetworkSnapshot::from_network(&pair_network(), LayoutParams::default());
        let value = serde_json::to_value(&snapshot).unwrap();
        let node = &value["nodes"][2];
        assert_eq!(node["id"], "2");
        assert_eq!(node["color"], "#0000ff");
        assert_eq!(node["hsl"][0], 240.0);
        assert!(node["x"].is_f64());
        assert!(node["y"].is_f64());
        assert_eq!(value["edges"][0]["source"], "0");
        assert_eq!(value["edges"][0]["target"], "1");
    }

    #[test]
    fn layout_is_recomputed_identically() {
        let network = pair_network();
        let a = NetworkSnapshot::from_network(&network, LayoutParams::default());
        let b = NetworkSnapshot::from_network(&network, LayoutParams::default());
        assert_eq!(a, b);
    }

    #[test]
    fn error_response_carries_kind() {
        let err = AppError::NetworkNotFound("x".into());
        let response = ErrorResponse::from(&err);
        assert_eq!(response.kind, ErrorKind::NotFound);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"kind\":\"not_found\""));
    }
}
