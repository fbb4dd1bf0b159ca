//! Neighbor-driven hue diffusion.
//!
//! One step replaces every non-isolated node's hue with
//! `((hue + sum of neighbor hues) * influence) mod 360`. The step is
//! simultaneous: all new hues are computed from the hues as they were before
//! the step, into a second buffer, and the buffers are swapped only once the
//! whole graph is done. Iteration order therefore never affects the result.
//!
//! `influence` is not bounded. Large values on high-degree nodes make hues
//! jump around the wheel instead of settling; that is expected.

use hn_core::{HnError, HnResult, NodeId, Real, ensure_finite, wrap_degrees};
use hn_graph::Graph;
use rayon::prelude::*;

/// Outcome of one diffusion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Nodes whose hue was recomputed.
    pub updated: usize,
    /// Nodes left untouched because they have no neighbors.
    pub isolated: usize,
}

/// The additive update for a single node.
pub fn next_hue(current: Real, neighbor_sum: Real, influence: Real) -> Real {
    wrap_degrees((current + neighbor_sum) * influence)
}

/// Front/back hue buffers, one slot per node.
///
/// `front` is the live state; `back` is scratch space written during a step.
#[derive(Debug, Clone, PartialEq)]
pub struct HueBuffers {
    front: Vec<Real>,
    back: Vec<Real>,
}

impl HueBuffers {
    pub fn new(hues: Vec<Real>) -> Self {
        let back = vec![0.0; hues.len()];
        Self { front: hues, back }
    }

    /// Current hues, indexed by node slot.
    pub fn current(&self) -> &[Real] {
        &self.front
    }

    pub fn len(&self) -> usize {
        self.front.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    /// Advance one simultaneous step over `graph`.
    ///
    /// On error the live hues are left exactly as they were.
    pub fn step(&mut self, graph: &Graph, influence: Real) -> HnResult<StepReport> {
        if graph.node_count() != self.front.len() {
            return Err(HnError::IndexOob {
                what: "hue buffer",
                index: graph.node_count(),
                len: self.front.len(),
            });
        }
        let influence = ensure_finite(influence, "hue_influence")?;

        let front = &self.front;
        self.back
            .par_iter_mut()
            .enumerate()
            .try_for_each(|(i, slot)| -> HnResult<()> {
                let neighbors = graph.neighbors(NodeId::from_index(i as u32));
                if neighbors.is_empty() {
                    *slot = front[i];
                    return Ok(());
                }
                let neighbor_sum: Real = neighbors.iter().map(|n| front[n.slot()]).sum();
                let raw = (front[i] + neighbor_sum) * influence;
                ensure_finite(raw, "hue")?;
                *slot = next_hue(front[i], neighbor_sum, influence);
                Ok(())
            })?;

        std::mem::swap(&mut self.front, &mut self.back);

        let isolated = graph.node_ids().filter(|&id| graph.is_isolated(id)).count();
        Ok(StepReport {
            updated: self.front.len() - isolated,
            isolated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hn_graph::GraphBuilder;

    fn pair() -> Graph {
        let mut builder = GraphBuilder::with_nodes(2);
        builder.add_edge(NodeId::from_index(0), NodeId::from_index(1));
        builder.build().unwrap()
    }

    #[test]
    fn pair_updates_from_snapshot() {
        let graph = pair();
        let mut buffers = HueBuffers::new(vec![10.0, 20.0]);
        let report = buffers.step(&graph, 0.5).unwrap();
        assert_eq!(buffers.current(), &[15.0, 15.0]);
        assert_eq!(report, StepReport { updated: 2, isolated: 0 });
    }

    #[test]
    fn path_uses_pre_step_values() {
        // 0 - 1 - 2 with influence 1: a sequential sweep would feed node 0's
        // new hue into node 1.
        let mut builder = GraphBuilder::with_nodes(3);
        let [a, b, c] = [0, 1, 2].map(NodeId::from_index);
        builder.add_edge(a, b);
        builder.add_edge(b, c);
        let graph = builder.build().unwrap();

        let mut buffers = HueBuffers::new(vec![10.0, 20.0, 30.0]);
        buffers.step(&graph, 1.0).unwrap();
        assert_eq!(buffers.current(), &[30.0, 60.0, 50.0]);
    }

    #[test]
    fn isolated_node_keeps_hue() {
        let graph = GraphBuilder::with_nodes(1).build().unwrap();
        let mut buffers = HueBuffers::new(vec![123.0]);
        let report = buffers.step(&graph, 7.5).unwrap();
        assert_eq!(buffers.current(), &[123.0]);
        assert_eq!(report.isolated, 1);
        assert_eq!(report.updated, 0);
    }

    #[test]
    fn result_wraps_into_full_turn() {
        let graph = pair();
        let mut buffers = HueBuffers::new(vec![300.0, 200.0]);
        buffers.step(&graph, 1.0).unwrap();
        // 500 mod 360
        assert_eq!(buffers.current(), &[140.0, 140.0]);

        let mut negative = HueBuffers::new(vec![10.0, 20.0]);
        negative.step(&graph, -1.0).unwrap();
        assert_eq!(negative.current(), &[330.0, 330.0]);
    }

    #[test]
    fn non_finite_influence_rejected_without_mutation() {
        let graph = pair();
        let mut buffers = HueBuffers::new(vec![10.0, 20.0]);
        assert!(buffers.step(&graph, Real::NAN).is_err());
        assert!(buffers.step(&graph, Real::MAX).is_err());
        assert_eq!(buffers.current(), &[10.0, 20.0]);
    }

    #[test]
    fn buffer_size_must_match_graph() {
        let graph = pair();
        let mut buffers = HueBuffers::new(vec![10.0]);
        let err = buffers.step(&graph, 0.1).unwrap_err();
        assert!(matches!(err, HnError::IndexOob { .. }));
    }
}
