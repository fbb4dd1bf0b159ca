//! Force-directed 2D layout for display.
//!
//! Simplified Fruchterman-Reingold: repulsion between all node pairs,
//! attraction along edges, displacement capped by a cooling temperature.
//! The final positions are centred on the origin and scaled into [-1, 1].
//!
//! Layout is a view-time attribute. It is recomputed on every read and is
//! reproducible: the same graph and seed always give the same coordinates.

use hn_core::Real;
use rand::Rng;
use rayon::prelude::*;

use crate::generate::seeded_rng;
use crate::graph::Graph;

/// Distances below this are clamped to keep forces finite.
const MIN_DISTANCE: Real = 0.01;
/// Starting displacement cap.
const INITIAL_TEMPERATURE: Real = 0.1;
/// Per-iteration temperature multiplier.
const COOLING: Real = 0.95;

/// A position in the layout plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

/// Layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    /// Seed for the initial random placement.
    pub seed: u64,
    /// Number of force iterations.
    pub iterations: usize,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            seed: 42,
            iterations: 50,
        }
    }
}

/// Compute a spring layout, one point per node in id order.
pub fn spring_layout(graph: &Graph, params: LayoutParams) -> Vec<Point> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let mut rng = seeded_rng(Some(params.seed));
    let mut positions: Vec<Point> = (0..n)
        .map(|_| Point {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(0.0..1.0),
        })
        .collect();

    // Optimal edge length for the unit square
    let k = (1.0 / n as Real).sqrt();
    let mut temperature = INITIAL_TEMPERATURE;

    for _ in 0..params.iterations {
        let mut forces = repulsive_forces(&positions, k);
        add_attractive_forces(graph, &positions, k, &mut forces);

        for (pos, force) in positions.iter_mut().zip(&forces) {
            let magnitude = force.x.hypot(force.y).max(MIN_DISTANCE);
            let displacement = magnitude.min(temperature);
            pos.x = (pos.x + force.x / magnitude * displacement).clamp(0.0, 1.0);
            pos.y = (pos.y + force.y / magnitude * displacement).clamp(0.0, 1.0);
        }

        temperature *= COOLING;
    }

    rescale(&mut positions);
    positions
}

/// Repulsion k²/d from every other node.
///
/// Each node sums over all others in index order, so the parallel map is
/// deterministic.
fn repulsive_forces(positions: &[Point], k: Real) -> Vec<Point> {
    positions
        .par_iter()
        .enumerate()
        .map(|(i, p)| {
            let mut force = Point::default();
            for (j, q) in positions.iter().enumerate() {
                if i == j {
                    continue;
                }
                let dx = p.x - q.x;
                let dy = p.y - q.y;
                let dist = dx.hypot(dy).max(MIN_DISTANCE);
                let repulsion = k * k / dist;
                force.x += dx / dist * repulsion;
                force.y += dy / dist * repulsion;
            }
            force
        })
        .collect()
}

/// Attraction d²/k along every edge.
fn add_attractive_forces(graph: &Graph, positions: &[Point], k: Real, forces: &mut [Point]) {
    for edge in graph.edges() {
        let (i, j) = (edge.a.slot(), edge.b.slot());
        let dx = positions[j].x - positions[i].x;
        let dy = positions[j].y - positions[i].y;
        let dist = dx.hypot(dy).max(MIN_DISTANCE);
        let attraction = dist * dist / k;
        let fx = dx / dist * attraction;
        let fy = dy / dist * attraction;

        forces[i].x += fx;
        forces[i].y += fy;
        forces[j].x -= fx;
        forces[j].y -= fy;
    }
}

/// Centre on the origin and scale so the largest |coordinate| is 1.
fn rescale(positions: &mut [Point]) {
    let n = positions.len() as Real;
    let cx = positions.iter().map(|p| p.x).sum::<Real>() / n;
    let cy = positions.iter().map(|p| p.y).sum::<Real>() / n;

    let mut extent: Real = 0.0;
    for p in positions.iter_mut() {
        p.x -= cx;
        p.y -= cy;
        extent = extent.max(p.x.abs()).max(p.y.abs());
    }

    if extent > 0.0 {
        for p in positions.iter_mut() {
            p.x /= extent;
            p.y /= extent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;
    use hn_core::NodeId;

    fn triangle() -> Graph {
        let mut builder = GraphBuilder::with_nodes(3);
        let [a, b, c] = [0, 1, 2].map(NodeId::from_index);
        builder.add_edge(a, b);
        builder.add_edge(b, c);
        builder.add_edge(a, c);
        builder.build().unwrap()
    }

    #[test]
    fn layout_is_reproducible() {
        let graph = triangle();
        let p1 = spring_layout(&graph, LayoutParams::default());
        let p2 = spring_layout(&graph, LayoutParams::default());
        assert_eq!(p1, p2);
    }

    #[test]
    fn layout_is_bounded_and_finite() {
        let graph = triangle();
        let positions = spring_layout(&graph, LayoutParams::default());
        assert_eq!(positions.len(), 3);
        for p in &positions {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert!(p.x.abs() <= 1.0 + 1e-12 && p.y.abs() <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn single_node_sits_at_origin() {
        let graph = GraphBuilder::with_nodes(1).build().unwrap();
        let positions = spring_layout(&graph, LayoutParams::default());
        assert_eq!(positions, vec![Point { x: 0.0, y: 0.0 }]);
    }

    #[test]
    fn zero_iterations_still_rescales() {
        let graph = triangle();
        let params = LayoutParams {
            seed: 7,
            iterations: 0,
        };
        let positions = spring_layout(&graph, params);
        let extent = positions
            .iter()
            .map(|p| p.x.abs().max(p.y.abs()))
            .fold(0.0, Real::max);
        assert!((extent - 1.0).abs() < 1e-12);
    }
}
