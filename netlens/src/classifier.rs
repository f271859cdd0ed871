//! Net classification.
//!
//! Classifies nets by their name using substring pattern matching. The rule
//! table is priority-ordered and the first match wins: ground before power
//! before clock before special, with plain signal as the default. A net
//! named "GND_CLK" is therefore ground, not clock.

use serde::{Deserialize, Serialize};

/// Ground net patterns (matched first).
const GROUND_PATTERNS: &[&str] = &["gnd", "ground"];

/// Power net patterns.
const POWER_PATTERNS: &[&str] = &["vcc", "vdd", "pwr", "3v3", "5v", "power"];

/// Clock signal patterns.
const CLOCK_PATTERNS: &[&str] = &["clk", "clock", "osc"];

/// Control / special function signal patterns.
const SPECIAL_PATTERNS: &[&str] = &["rst", "reset", "enable", "cs", "ce"];

/// Semantic category of a net, derived from its name on demand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum NetCategory {
    Power,
    Ground,
    Signal,
    Clock,
    Special,
}

impl NetCategory {
    /// Display color for this category, following the usual schematic
    /// conventions (red power rails, gray ground, green clocks).
    pub fn color(&self) -> &'static str {
        match self {
            NetCategory::Power => "#ff4444",
            NetCategory::Ground => "#888888",
            NetCategory::Clock => "#44ff44",
            NetCategory::Special => "#ffaa44",
            NetCategory::Signal => "#4488ff",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NetCategory::Power => "power",
            NetCategory::Ground => "ground",
            NetCategory::Signal => "signal",
            NetCategory::Clock => "clock",
            NetCategory::Special => "special",
        }
    }
}

impl std::fmt::Display for NetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classify a net by name. Total: every string maps to exactly one category,
/// the empty string included (it falls through to `Signal`).
pub fn classify_net(net_name: &str) -> NetCategory {
    let name = net_name.to_lowercase();

    if matches_patterns(&name, GROUND_PATTERNS) || name == "0v" {
        return NetCategory::Ground;
    }

    if matches_patterns(&name, POWER_PATTERNS) || is_voltage_rail(&name) {
        return NetCategory::Power;
    }

    if matches_patterns(&name, CLOCK_PATTERNS) {
        return NetCategory::Clock;
    }

    if matches_patterns(&name, SPECIAL_PATTERNS) {
        return NetCategory::Special;
    }

    NetCategory::Signal
}

/// Display color for a net, by name.
pub fn net_color(net_name: &str) -> &'static str {
    classify_net(net_name).color()
}

fn matches_patterns(name: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| name.contains(p))
}

/// Numeric voltage-rail names like "12v", "9v0" or "1v8": one or more
/// digits, a literal 'v', then zero or more digits, nothing else.
fn is_voltage_rail(name: &str) -> bool {
    let Some(v_pos) = name.find('v') else {
        return false;
    };
    let (digits, rest) = name.split_at(v_pos);
    let tail = &rest[1..];
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && tail.bytes().all(|b| b.is_ascii_digit())
}
