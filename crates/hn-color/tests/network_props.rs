//! Property tests for generated networks and the diffusion step.

use hn_color::{Hsl, Network};
use hn_core::NodeId;
use hn_graph::{GnpParams, GraphBuilder};
use proptest::prelude::*;

#[test]
fn spec_pair_example() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_node();
    let b = builder.add_node();
    builder.add_edge(a, b);
    let graph = builder.build().unwrap();

    let mut net = Network::from_parts(
        graph,
        vec![Hsl::new(10.0, 70.0, 50.0), Hsl::new(20.0, 70.0, 50.0)],
    )
    .unwrap();
    net.update(0.5).unwrap();

    assert_eq!(net.hues(), &[15.0, 15.0]);
}

#[test]
fn repeated_updates_stay_in_range() {
    let mut net = Network::generate(GnpParams::new(50, 0.4).unwrap(), Some(8)).unwrap();
    for _ in 0..100 {
        net.update(0.9).unwrap();
    }
    for &hue in net.hues() {
        assert!((0.0..360.0).contains(&hue));
    }
}

proptest! {
    #[test]
    fn same_seed_same_network(n in 1usize..30, p in 0.0f64..=1.0, seed in any::<u64>()) {
        let params = GnpParams::new(n, p).unwrap();
        let first = Network::generate(params, Some(seed)).unwrap();
        let second = Network::generate(params, Some(seed)).unwrap();
        prop_assert_eq!(first.graph(), second.graph());
        prop_assert_eq!(first.states(), second.states());
    }

    #[test]
    fn initial_states_in_range(n in 1usize..30, seed in any::<u64>()) {
        let net = Network::generate(GnpParams::new(n, 0.2).unwrap(), Some(seed)).unwrap();
        for hsl in net.states() {
            prop_assert!((0.0..=360.0).contains(&hsl.hue));
            prop_assert!((50.0..=100.0).contains(&hsl.saturation));
            prop_assert!((40.0..=70.0).contains(&hsl.lightness));
        }
    }

    #[test]
    fn update_keeps_saturation_lightness_and_loners(
        n in 1usize..25,
        p in 0.0f64..0.3,
        seed in any::<u64>(),
        influence in -5.0f64..5.0,
    ) {
        let mut net = Network::generate(GnpParams::new(n, p).unwrap(), Some(seed)).unwrap();
        let before = net.states();
        let colors_before: Vec<_> = net.graph().node_ids().map(|id| net.color(id)).collect();
        net.update(influence).unwrap();
        let after = net.states();

        for (i, (old, new)) in before.iter().zip(&after).enumerate() {
            let id = NodeId::from_index(i as u32);
            prop_assert_eq!(old.saturation, new.saturation);
            prop_assert_eq!(old.lightness, new.lightness);
            if net.graph().is_isolated(id) {
                prop_assert_eq!(old, new);
                prop_assert_eq!(net.color(id), colors_before[i]);
            } else {
                prop_assert!((0.0..360.0).contains(&new.hue));
            }
        }
    }

    #[test]
    fn update_matches_snapshot_rule(n in 2usize..20, seed in any::<u64>(), influence in 0.0f64..1.0) {
        let mut net = Network::generate(GnpParams::new(n, 0.5).unwrap(), Some(seed)).unwrap();
        let before: Vec<f64> = net.hues().to_vec();
        net.update(influence).unwrap();

        for id in net.graph().node_ids() {
            let neighbors = net.graph().neighbors(id);
            let expected = if neighbors.is_empty() {
                before[id.slot()]
            } else {
                let sum: f64 = neighbors.iter().map(|m| before[m.slot()]).sum();
                ((before[id.slot()] + sum) * influence).rem_euclid(360.0)
            };
            prop_assert_eq!(net.hues()[id.slot()], expected);
        }
    }
}
