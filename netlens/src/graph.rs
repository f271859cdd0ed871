//! Netlist to force-graph conversion.
//!
//! Produces the node/link arrays consumed by a force-directed layout engine:
//! one node per component (order-preserving) and, within each net, one link
//! per unordered pair of connections. A net with k connections therefore
//! yields k(k-1)/2 links, so densely connected nets form a fully connected
//! subgraph instead of a star; the layout physics has no notion of a shared
//! net midpoint, and a clique is what keeps those components clustered.
//!
//! Serialization is camelCase to match the rendering side.

use serde::{Deserialize, Serialize};

use crate::classifier::{classify_net, NetCategory};
use crate::layout::Point;
use crate::schema::NetlistData;

/// A component node in the force simulation.
///
/// `x`/`y`/`fx`/`fy` are owned by the external simulation: the converter
/// leaves them unset and never reads them back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Node identifier; equals the component name.
    pub id: String,
    /// Display label; equals the component name.
    pub label: String,
    /// Component type, carried for symbol selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fx: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fy: Option<f64>,
}

impl GraphNode {
    /// Current simulated position, defaulting to the origin before the
    /// simulation has assigned coordinates.
    pub fn position(&self) -> Point {
        Point::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
    }
}

/// A link between two component nodes, carrying the pins and net it
/// represents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub source_pin: String,
    pub target_pin: String,
    pub net: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_category: Option<NetCategory>,
}

/// Node and link arrays for one netlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// Convert a netlist into graph form. Pure: the input is only read.
///
/// Identical component pairs appearing in multiple nets are not deduplicated;
/// each net contributes its own pairing.
pub fn convert_to_graph(netlist: &NetlistData) -> GraphData {
    let nodes: Vec<GraphNode> = netlist
        .components
        .iter()
        .map(|c| GraphNode {
            id: c.name.clone(),
            label: c.name.clone(),
            component_type: Some(c.component_type.clone()),
            x: None,
            y: None,
            fx: None,
            fy: None,
        })
        .collect();

    let mut links = Vec::new();
    for net in &netlist.nets {
        let category = classify_net(&net.net);
        let conns = &net.connections;
        for i in 0..conns.len() {
            for j in (i + 1)..conns.len() {
                links.push(GraphLink {
                    source: conns[i].component.clone(),
                    target: conns[j].component.clone(),
                    source_pin: conns[i].pin.clone(),
                    target_pin: conns[j].pin.clone(),
                    net: net.net.clone(),
                    net_category: Some(category),
                });
            }
        }
    }

    GraphData { nodes, links }
}
