//! Netlist data model.
//!
//! These structs mirror the JSON payload uploaded by users: a flat list of
//! components (each with an ordered pin list) and a flat list of nets, where
//! every net names the component pins it joins. Unknown JSON fields are
//! ignored; a missing `components` or `nets` array deserializes as empty.

use serde::{Deserialize, Serialize};

/// A single electronic component in the netlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetlistComponent {
    /// Unique identifier for the component (e.g. "R1", "IC1", "C3").
    pub name: String,
    /// Free-form type classification (e.g. "resistor", "ic"). Matched
    /// case-insensitively everywhere it is consumed.
    #[serde(rename = "type")]
    pub component_type: String,
    /// Ordered pin names; order is significant for schematic pin layout.
    #[serde(default)]
    pub pins: Vec<String>,
}

impl NetlistComponent {
    pub fn new(
        name: impl Into<String>,
        component_type: impl Into<String>,
        pins: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            component_type: component_type.into(),
            pins,
        }
    }

    /// Position of a pin in this component's pin list, if present.
    pub fn pin_index(&self, pin: &str) -> Option<usize> {
        self.pins.iter().position(|p| p == pin)
    }

    pub fn has_pin(&self, pin: &str) -> bool {
        self.pin_index(pin).is_some()
    }
}

/// One endpoint of a net: a component name and a pin on that component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PinRef {
    pub component: String,
    pub pin: String,
}

/// A named electrical net joining two or more component pins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetConnection {
    /// Net name (e.g. "VCC", "GND", "DATA_BUS").
    pub net: String,
    /// All pin endpoints on this net, in file order.
    #[serde(default)]
    pub connections: Vec<PinRef>,
}

impl NetConnection {
    /// All component names connected to this net, in connection order.
    pub fn connected_components(&self) -> Vec<&str> {
        self.connections
            .iter()
            .map(|c| c.component.as_str())
            .collect()
    }

    /// Check if a specific component appears on this net.
    pub fn has_component(&self, component: &str) -> bool {
        self.connections.iter().any(|c| c.component == component)
    }
}

/// Complete netlist: all components and all nets of one uploaded design.
///
/// The reviewing code never mutates a `NetlistData`; every pass reads it and
/// produces fresh derived structures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetlistData {
    #[serde(default)]
    pub components: Vec<NetlistComponent>,
    #[serde(default)]
    pub nets: Vec<NetConnection>,
}

impl NetlistData {
    /// Total number of pin endpoints across all nets.
    pub fn connection_count(&self) -> usize {
        self.nets.iter().map(|n| n.connections.len()).sum()
    }
}
