//! Validation findings.
//!
//! Each finding is a tagged variant carrying the component/net it refers to
//! as typed data. The rendered message text is a compatibility contract:
//! downstream highlighters match on these exact shapes, so `Display` output
//! must not change wording.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding.
///
/// Findings are values, not errors: validation never fails, it enumerates
/// every finding in one pass and the caller decides what to do with them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Finding {
    /// A component has an empty (or whitespace-only) name.
    BlankComponentName,
    /// A component has no type string.
    MissingType { component: String },
    /// A component declares no pins.
    NoPins { component: String },
    /// Two or more components share a name. Lists every occurrence after
    /// the first, in component order.
    DuplicateNames { names: Vec<String> },
    /// A net has an empty (or whitespace-only) name.
    BlankNetName,
    /// A net joins fewer than two pins.
    InsufficientConnections { net: String },
    /// A net connection names a component that does not exist.
    UnknownComponent { net: String, component: String },
    /// A net connection names a pin the component does not have.
    UnknownPin { component: String, pin: String },
    /// No net in the design classifies as ground.
    NoGroundNet,
    /// A non-exempt component is absent from the ground net.
    NotGrounded { component: String },
    /// No net in the design classifies as power.
    NoPowerNet,
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Finding::NoGroundNet | Finding::NotGrounded { .. } | Finding::NoPowerNet => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }

    /// Id of the rule that produced this finding.
    pub fn rule_id(&self) -> &'static str {
        match self {
            Finding::BlankComponentName
            | Finding::MissingType { .. }
            | Finding::NoPins { .. } => "component_integrity",
            Finding::DuplicateNames { .. } => "duplicate_names",
            Finding::BlankNetName
            | Finding::InsufficientConnections { .. }
            | Finding::UnknownComponent { .. }
            | Finding::UnknownPin { .. } => "net_connectivity",
            Finding::NoGroundNet | Finding::NotGrounded { .. } => "ground_distribution",
            Finding::NoPowerNet => "power_distribution",
        }
    }

    /// The component this finding refers to, if any.
    pub fn component(&self) -> Option<&str> {
        match self {
            Finding::MissingType { component }
            | Finding::NoPins { component }
            | Finding::UnknownComponent { component, .. }
            | Finding::UnknownPin { component, .. }
            | Finding::NotGrounded { component } => Some(component),
            _ => None,
        }
    }

    /// The net this finding refers to, if any.
    pub fn net(&self) -> Option<&str> {
        match self {
            Finding::InsufficientConnections { net } | Finding::UnknownComponent { net, .. } => {
                Some(net)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::BlankComponentName => write!(f, "Component name cannot be blank."),
            Finding::MissingType { component } => {
                write!(f, "Component {} has no type specified.", component)
            }
            Finding::NoPins { component } => {
                write!(f, "Component {} has no pins defined.", component)
            }
            Finding::DuplicateNames { names } => {
                write!(f, "Duplicate component names: {}", names.join(", "))
            }
            Finding::BlankNetName => write!(f, "Net name cannot be blank."),
            Finding::InsufficientConnections { net } => {
                write!(
                    f,
                    "Net {} has insufficient connections (needs at least 2).",
                    net
                )
            }
            Finding::UnknownComponent { net, component } => {
                write!(f, "Net {} references unknown component: {}", net, component)
            }
            Finding::UnknownPin { component, pin } => {
                write!(f, "Component {} does not have pin {}", component, pin)
            }
            Finding::NoGroundNet => {
                write!(
                    f,
                    "No ground net found. Every PCB should have a ground connection."
                )
            }
            Finding::NotGrounded { component } => {
                write!(
                    f,
                    "{} is not connected to ground - this may cause issues.",
                    component
                )
            }
            Finding::NoPowerNet => {
                write!(f, "No power net found. Most PCBs require power distribution.")
            }
        }
    }
}
