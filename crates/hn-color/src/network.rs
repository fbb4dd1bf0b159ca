//! A graph together with its live per-node color state.

use hn_core::{HnError, HnResult, NodeId, Real, ensure_finite};
use hn_graph::generate::seeded_rng;
use hn_graph::{GnpParams, Graph, gnp};
use rand::Rng;

use crate::diffusion::{HueBuffers, StepReport};
use crate::hsl::{Hsl, Rgb, hsl_to_rgb};
use crate::palette::InitialPalette;

/// Graph topology plus hue/saturation/lightness and display color per node.
///
/// Topology is fixed at construction. Only hue changes afterwards, through
/// [`Network::update`].
#[derive(Debug, Clone)]
pub struct Network {
    graph: Graph,
    hues: HueBuffers,
    saturation: Vec<Real>,
    lightness: Vec<Real>,
    colors: Vec<Rgb>,
}

impl Network {
    /// Generate a random network with the default palette.
    ///
    /// With a seed, the result is fully reproducible.
    pub fn generate(params: GnpParams, seed: Option<u64>) -> HnResult<Self> {
        let mut rng = seeded_rng(seed);
        Self::generate_with(params, &InitialPalette::default(), &mut rng)
    }

    /// Generate from an explicit RNG.
    ///
    /// Draw order: every topology pair first, then hue, saturation and
    /// lightness for each node in id order.
    pub fn generate_with<R: Rng + ?Sized>(
        params: GnpParams,
        palette: &InitialPalette,
        rng: &mut R,
    ) -> HnResult<Self> {
        palette.validate()?;
        let graph = gnp(params, rng)?;
        let states = (0..graph.node_count()).map(|_| palette.draw(rng)).collect();
        Self::from_parts(graph, states)
    }

    /// Assemble a network from a graph and one color state per node.
    pub fn from_parts(graph: Graph, states: Vec<Hsl>) -> HnResult<Self> {
        if states.len() != graph.node_count() {
            return Err(HnError::invalid_arg(format!(
                "expected {} color states, got {}",
                graph.node_count(),
                states.len()
            )));
        }
        for state in &states {
            for (value, what) in [
                (state.hue, "hue"),
                (state.saturation, "saturation"),
                (state.lightness, "lightness"),
            ] {
                ensure_finite(value, what)?;
            }
        }

        let colors = states.iter().map(|s| s.to_rgb()).collect();
        Ok(Self {
            graph,
            hues: HueBuffers::new(states.iter().map(|s| s.hue).collect()),
            saturation: states.iter().map(|s| s.saturation).collect(),
            lightness: states.iter().map(|s| s.lightness).collect(),
            colors,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Current color state of a node.
    pub fn hsl(&self, id: NodeId) -> Option<Hsl> {
        let i = id.slot();
        Some(Hsl::new(
            *self.hues.current().get(i)?,
            self.saturation[i],
            self.lightness[i],
        ))
    }

    /// Current display color of a node.
    pub fn color(&self, id: NodeId) -> Option<Rgb> {
        self.colors.get(id.slot()).copied()
    }

    /// All color states in node id order.
    pub fn states(&self) -> Vec<Hsl> {
        self.graph
            .node_ids()
            .filter_map(|id| self.hsl(id))
            .collect()
    }

    /// Current hues in node id order.
    pub fn hues(&self) -> &[Real] {
        self.hues.current()
    }

    /// Apply one simultaneous diffusion step and refresh display colors.
    ///
    /// Isolated nodes keep hue and color. Saturation and lightness never
    /// change. On error nothing is modified.
    pub fn update(&mut self, hue_influence: Real) -> HnResult<StepReport> {
        let report = self.hues.step(&self.graph, hue_influence)?;

        let hues = self.hues.current();
        for id in self.graph.node_ids() {
            if self.graph.is_isolated(id) {
                continue;
            }
            let i = id.slot();
            self.colors[i] = hsl_to_rgb(hues[i], self.saturation[i], self.lightness[i]);
        }

        tracing::trace!(
            updated = report.updated,
            isolated = report.isolated,
            "diffusion step applied"
        );
        Ok(report)
    }
}
