//! Netlist validation rules.
//!
//! Validation is advisory, not a gate: a netlist that fails checks is still
//! converted and rendered so the user can locate the problem visually. The
//! engine runs its rules in a fixed order and each rule emits findings in
//! input order, so the overall finding sequence is deterministic: component
//! checks first (in component order), then the duplicate-name check, then
//! net checks (per net, connections in order), then the ground check, then
//! the power check.

pub mod findings;

pub use findings::{Finding, Severity};

use crate::classifier::{classify_net, NetCategory};
use crate::schema::{NetlistComponent, NetlistData};
use std::collections::HashMap;
use std::sync::Arc;

/// Component types that are not required to have a ground connection.
const GROUND_EXEMPT_TYPES: &[&str] = &["resistor", "connector", "led", "capacitor"];

pub trait Rule: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn check(&self, netlist: &NetlistData) -> Vec<Finding>;
}

pub struct RulesEngine {
    rules: Vec<Arc<dyn Rule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Engine with the standard rule set, in contract order.
    pub fn with_default_rules() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Arc::new(ComponentIntegrityRule));
        engine.add_rule(Arc::new(DuplicateNameRule));
        engine.add_rule(Arc::new(NetConnectivityRule));
        engine.add_rule(Arc::new(GroundDistributionRule));
        engine.add_rule(Arc::new(PowerDistributionRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Arc<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> impl Iterator<Item = &Arc<dyn Rule>> {
        self.rules.iter()
    }

    pub fn analyze(&self, netlist: &NetlistData) -> Vec<Finding> {
        let mut findings = Vec::new();
        for rule in &self.rules {
            findings.extend(rule.check(netlist));
        }
        findings
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

/// Validate a netlist with the standard rule set.
pub fn validate(netlist: &NetlistData) -> Vec<Finding> {
    RulesEngine::with_default_rules().analyze(netlist)
}

/// Validate and render each finding to its contract message string.
pub fn validation_messages(netlist: &NetlistData) -> Vec<String> {
    validate(netlist).iter().map(|f| f.to_string()).collect()
}

/// Index components by name, in input order. When names collide the later
/// component wins, matching how connection pin checks resolve duplicates.
fn component_index(netlist: &NetlistData) -> HashMap<&str, &NetlistComponent> {
    let mut map = HashMap::new();
    for component in &netlist.components {
        map.insert(component.name.as_str(), component);
    }
    map
}

// Rule implementations

/// Per-component checks: blank name, missing type, empty pin list.
pub struct ComponentIntegrityRule;

impl Rule for ComponentIntegrityRule {
    fn id(&self) -> &'static str {
        "component_integrity"
    }

    fn name(&self) -> &'static str {
        "Component Integrity Check"
    }

    fn check(&self, netlist: &NetlistData) -> Vec<Finding> {
        let mut findings = Vec::new();
        for component in &netlist.components {
            if component.name.trim().is_empty() {
                findings.push(Finding::BlankComponentName);
            }
            if component.component_type.trim().is_empty() {
                findings.push(Finding::MissingType {
                    component: component.name.clone(),
                });
            }
            if component.pins.is_empty() {
                findings.push(Finding::NoPins {
                    component: component.name.clone(),
                });
            }
        }
        findings
    }
}

/// Duplicate component names across the netlist (string equality).
pub struct DuplicateNameRule;

impl Rule for DuplicateNameRule {
    fn id(&self) -> &'static str {
        "duplicate_names"
    }

    fn name(&self) -> &'static str {
        "Duplicate Name Check"
    }

    fn check(&self, netlist: &NetlistData) -> Vec<Finding> {
        // Every occurrence after the first is reported, so a triplicate name
        // shows up twice in the message.
        let names: Vec<&str> = netlist.components.iter().map(|c| c.name.as_str()).collect();
        let mut duplicates: Vec<String> = Vec::new();
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                duplicates.push((*name).to_string());
            }
        }

        if duplicates.is_empty() {
            Vec::new()
        } else {
            vec![Finding::DuplicateNames { names: duplicates }]
        }
    }
}

/// Per-net checks: blank name, minimum connection count, and per-connection
/// component/pin resolution.
pub struct NetConnectivityRule;

impl Rule for NetConnectivityRule {
    fn id(&self) -> &'static str {
        "net_connectivity"
    }

    fn name(&self) -> &'static str {
        "Net Connectivity Check"
    }

    fn check(&self, netlist: &NetlistData) -> Vec<Finding> {
        let mut findings = Vec::new();
        let components = component_index(netlist);

        for net in &netlist.nets {
            if net.net.trim().is_empty() {
                findings.push(Finding::BlankNetName);
            }

            if net.connections.len() < 2 {
                findings.push(Finding::InsufficientConnections {
                    net: net.net.clone(),
                });
            }

            for conn in &net.connections {
                match components.get(conn.component.as_str()) {
                    None => findings.push(Finding::UnknownComponent {
                        net: net.net.clone(),
                        component: conn.component.clone(),
                    }),
                    // Pin membership only checked when the component exists.
                    Some(component) if !component.has_pin(&conn.pin) => {
                        findings.push(Finding::UnknownPin {
                            component: conn.component.clone(),
                            pin: conn.pin.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }
        findings
    }
}

/// Ground presence and per-component ground connectivity.
pub struct GroundDistributionRule;

impl Rule for GroundDistributionRule {
    fn id(&self) -> &'static str {
        "ground_distribution"
    }

    fn name(&self) -> &'static str {
        "Ground Distribution Check"
    }

    fn check(&self, netlist: &NetlistData) -> Vec<Finding> {
        // Only the first ground-classified net counts as "the" ground net.
        let ground_net = netlist
            .nets
            .iter()
            .find(|n| classify_net(&n.net) == NetCategory::Ground);

        let Some(ground_net) = ground_net else {
            return vec![Finding::NoGroundNet];
        };

        let mut findings = Vec::new();
        for component in &netlist.components {
            let kind = component.component_type.to_lowercase();
            if GROUND_EXEMPT_TYPES.contains(&kind.as_str()) {
                continue;
            }
            if !ground_net.has_component(&component.name) {
                findings.push(Finding::NotGrounded {
                    component: component.name.clone(),
                });
            }
        }
        findings
    }
}

/// Power net presence.
pub struct PowerDistributionRule;

impl Rule for PowerDistributionRule {
    fn id(&self) -> &'static str {
        "power_distribution"
    }

    fn name(&self) -> &'static str {
        "Power Distribution Check"
    }

    fn check(&self, netlist: &NetlistData) -> Vec<Finding> {
        let has_power = netlist
            .nets
            .iter()
            .any(|n| classify_net(&n.net) == NetCategory::Power);

        if has_power {
            Vec::new()
        } else {
            vec![Finding::NoPowerNet]
        }
    }
}
