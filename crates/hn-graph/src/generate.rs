//! Random graph generation (Gilbert / Erdős–Rényi G(n, p)).
//!
//! Randomness always comes from an explicit generator passed in by the
//! caller. There is no ambient global RNG, so seeding one generation never
//! influences another.

use hn_core::{HnError, HnResult, NodeId, Real, ensure_finite};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::builder::GraphBuilder;
use crate::graph::Graph;

/// Parameters of a G(n, p) graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GnpParams {
    pub num_nodes: usize,
    pub edge_probability: Real,
}

impl GnpParams {
    pub fn new(num_nodes: usize, edge_probability: Real) -> HnResult<Self> {
        let params = Self {
            num_nodes,
            edge_probability,
        };
        params.validate()?;
        Ok(params)
    }

    /// Reject empty graphs and probabilities outside [0, 1].
    pub fn validate(&self) -> HnResult<()> {
        if self.num_nodes == 0 {
            return Err(HnError::invalid_arg("num_nodes must be positive (got 0)"));
        }
        let p = ensure_finite(self.edge_probability, "edge_probability")?;
        if !(0.0..=1.0).contains(&p) {
            return Err(HnError::invalid_arg(format!(
                "edge_probability must be within [0, 1] (got {p})"
            )));
        }
        Ok(())
    }
}

/// Build the RNG used for generation: seeded when a seed is given,
/// otherwise from system entropy.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Generate a G(n, p) graph.
///
/// Pairs are visited as `(i, j)` with `i < j` in lexicographic order and one
/// Bernoulli(p) draw is consumed per pair, so the draw sequence (and the
/// resulting graph) is fully determined by the RNG state.
pub fn gnp<R: Rng + ?Sized>(params: GnpParams, rng: &mut R) -> HnResult<Graph> {
    params.validate()?;

    let n = params.num_nodes;
    let mut builder = GraphBuilder::with_nodes(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(params.edge_probability) {
                builder.add_edge(NodeId::from_index(i as u32), NodeId::from_index(j as u32));
            }
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_graph() {
        let err = GnpParams::new(0, 0.5).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn rejects_out_of_range_probability() {
        assert!(GnpParams::new(5, 1.5).is_err());
        assert!(GnpParams::new(5, -0.1).is_err());
        assert!(GnpParams::new(5, Real::NAN).is_err());
        assert!(GnpParams::new(5, 0.0).is_ok());
        assert!(GnpParams::new(5, 1.0).is_ok());
    }

    #[test]
    fn probability_zero_gives_no_edges() {
        let mut rng = seeded_rng(Some(1));
        let graph = gnp(GnpParams::new(12, 0.0).unwrap(), &mut rng).unwrap();
        assert_eq!(graph.node_count(), 12);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn probability_one_gives_complete_graph() {
        let mut rng = seeded_rng(Some(1));
        let graph = gnp(GnpParams::new(7, 1.0).unwrap(), &mut rng).unwrap();
        assert_eq!(graph.edge_count(), 7 * 6 / 2);
        for id in graph.node_ids() {
            assert_eq!(graph.degree(id), 6);
        }
    }

    #[test]
    fn same_seed_same_graph() {
        let params = GnpParams::new(30, 0.2).unwrap();
        let g1 = gnp(params, &mut seeded_rng(Some(42))).unwrap();
        let g2 = gnp(params, &mut seeded_rng(Some(42))).unwrap();
        assert_eq!(g1, g2);
    }

    #[test]
    fn single_node_graph() {
        let graph = gnp(GnpParams::new(1, 1.0).unwrap(), &mut seeded_rng(None)).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }
}
