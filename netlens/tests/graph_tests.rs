//! Tests for graph conversion and pin layout over fixture netlists

use netlens::prelude::*;
use netlens::{load_netlist, pin_position, GraphData, Point};
use std::path::PathBuf;

fn fixture_netlist(name: &str) -> NetlistData {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    load_netlist(&path).expect("Should load fixture netlist")
}

#[test]
fn test_node_count_matches_component_count() {
    for name in [
        "valid_design.json",
        "missing_ground.json",
        "unknown_component.json",
        "dense_bus.json",
    ] {
        let netlist = fixture_netlist(name);
        let graph = convert_to_graph(&netlist);
        assert_eq!(
            graph.nodes.len(),
            netlist.components.len(),
            "fixture {}",
            name
        );
    }
}

#[test]
fn test_pairwise_link_counts() {
    let netlist = fixture_netlist("dense_bus.json");
    let graph = convert_to_graph(&netlist);

    // k connections on a net yield k*(k-1)/2 links carrying its name.
    for net in &netlist.nets {
        let k = net.connections.len();
        let expected = k * (k - 1) / 2;
        let actual = graph.links.iter().filter(|l| l.net == net.net).count();
        assert_eq!(actual, expected, "net {}", net.net);
    }
    assert_eq!(graph.links.len(), 3 + 6 + 6);
}

#[test]
fn test_links_preserve_pins_and_categories() {
    let netlist = fixture_netlist("valid_design.json");
    let graph = convert_to_graph(&netlist);

    let gnd_links: Vec<_> = graph.links.iter().filter(|l| l.net == "GND").collect();
    assert_eq!(gnd_links.len(), 3);
    assert!(gnd_links
        .iter()
        .all(|l| l.net_category == Some(NetCategory::Ground)));

    let first = gnd_links[0];
    assert_eq!(first.source, "IC1");
    assert_eq!(first.target, "R1");
    assert_eq!(first.source_pin, "GND");
    assert_eq!(first.target_pin, "2");
}

#[test]
fn test_conversion_does_not_mutate_input() {
    let netlist = fixture_netlist("valid_design.json");
    let before = netlist.clone();
    let _ = convert_to_graph(&netlist);
    assert_eq!(netlist, before);
}

#[test]
fn test_pin_positions_follow_simulated_nodes() {
    let netlist = fixture_netlist("valid_design.json");
    let mut graph = convert_to_graph(&netlist);

    // Pretend the simulation settled IC1 at (100, 40).
    graph.nodes[0].x = Some(100.0);
    graph.nodes[0].y = Some(40.0);
    let node_pos = graph.nodes[0].position();

    let ic1 = &netlist.components[0];
    let vcc = pin_position(ic1, "VCC", node_pos);
    let out = pin_position(ic1, "OUT", node_pos);
    // IC pins split across two rows around the body.
    assert_eq!(vcc.x, 40.0);
    assert_eq!(out.x, 160.0);

    // Strip components hang their pins below the node.
    let r1 = &netlist.components[1];
    let r1_pin = pin_position(r1, "1", Point::new(0.0, 0.0));
    assert_eq!(r1_pin.y, 30.0);
}

#[test]
fn test_graph_round_trips_through_json() {
    let netlist = fixture_netlist("dense_bus.json");
    let graph = convert_to_graph(&netlist);
    let json = serde_json::to_string(&graph).unwrap();
    let back: GraphData = serde_json::from_str(&json).unwrap();
    assert_eq!(back, graph);
}
