//! Netlens - PCB netlist validation and schematic graph conversion library
//!
//! This library takes an uploaded netlist (components + nets as JSON),
//! validates it against common PCB design rules, converts it into the
//! node/link form a force-directed renderer consumes, computes per-pin
//! schematic coordinates, and reports aggregate circuit statistics.
//!
//! # Quick Start
//!
//! ```
//! use netlens::{NetlensCore, ReviewOptions};
//!
//! let json = r#"{
//!     "components": [
//!         {"name": "IC1", "type": "IC", "pins": ["VCC", "GND", "OUT"]},
//!         {"name": "R1", "type": "Resistor", "pins": ["1", "2"]}
//!     ],
//!     "nets": [
//!         {"net": "GND", "connections": [
//!             {"component": "IC1", "pin": "GND"},
//!             {"component": "R1", "pin": "2"}
//!         ]},
//!         {"net": "VCC", "connections": [
//!             {"component": "IC1", "pin": "VCC"},
//!             {"component": "R1", "pin": "1"}
//!         ]}
//!     ]
//! }"#;
//!
//! let result = NetlensCore::review_str(json, ReviewOptions::default()).unwrap();
//! for issue in &result.issues {
//!     println!("{:?}: {}", issue.severity, issue.message);
//! }
//! ```
//!
//! # Features
//!
//! - **Validation**: component integrity, duplicate names, net connectivity,
//!   ground and power distribution — advisory findings with stable messages
//! - **Graph conversion**: component nodes plus per-net pairwise links for
//!   force-directed layout
//! - **Pin layout**: dual-inline placement for ICs, pin strips otherwise
//! - **Analysis**: counts, type/category histograms, complexity score

pub mod analysis;
pub mod classifier;
pub mod core;
pub mod graph;
pub mod layout;
pub mod schema;
pub mod symbols;
pub mod validator;

// Re-export main types
pub use crate::core::{
    discover_netlist_files, load_netlist, parse_netlist, Issue, NetlensCore, NetlensError,
    ReviewOptions, ReviewResult, ReviewStats,
};
pub use analysis::{analyze_circuit, CircuitAnalysis};
pub use classifier::{classify_net, net_color, NetCategory};
pub use graph::{convert_to_graph, GraphData, GraphLink, GraphNode};
pub use layout::{pin_offset, pin_position, Point, PIN_SPACING};
pub use schema::{NetConnection, NetlistComponent, NetlistData, PinRef};
pub use symbols::{component_symbol, symbol_extent};
pub use validator::{validate, validation_messages, Finding, Rule, RulesEngine, Severity};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        analyze_circuit, classify_net, convert_to_graph, validate, Finding, NetCategory,
        NetlensCore, NetlensError, NetlistData, ReviewOptions, ReviewResult, ReviewStats,
        Severity,
    };
}
