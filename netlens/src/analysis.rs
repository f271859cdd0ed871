//! Circuit statistics.
//!
//! Aggregate counts and histograms over one netlist, for informational
//! display next to the rendered schematic. The complexity score is a fixed
//! linear weighting and only meaningful relative to other designs, not as
//! an absolute measure.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::classifier::{classify_net, NetCategory};
use crate::schema::NetlistData;

/// Aggregate statistics for one netlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CircuitAnalysis {
    pub component_count: usize,
    pub net_count: usize,
    /// Total pin endpoints across all nets.
    pub connection_count: usize,
    /// Histogram of lowercased component types.
    pub component_types: BTreeMap<String, usize>,
    /// Histogram of net categories.
    pub net_categories: BTreeMap<NetCategory, usize>,
    pub complexity_score: f64,
}

/// Analyze a netlist. Pure: the input is only read.
pub fn analyze_circuit(netlist: &NetlistData) -> CircuitAnalysis {
    let component_count = netlist.components.len();
    let net_count = netlist.nets.len();
    let connection_count = netlist.connection_count();

    let mut component_types: BTreeMap<String, usize> = BTreeMap::new();
    for component in &netlist.components {
        *component_types
            .entry(component.component_type.to_lowercase())
            .or_insert(0) += 1;
    }

    let mut net_categories: BTreeMap<NetCategory, usize> = BTreeMap::new();
    for net in &netlist.nets {
        *net_categories.entry(classify_net(&net.net)).or_insert(0) += 1;
    }

    // Components weigh more than nets, nets more than raw connections.
    let complexity_score =
        component_count as f64 * 2.0 + net_count as f64 * 1.5 + connection_count as f64 * 0.5;

    CircuitAnalysis {
        component_count,
        net_count,
        connection_count,
        component_types,
        net_categories,
        complexity_score,
    }
}
