//! Schematic pin placement.
//!
//! Pin coordinates are derived from the owning node's simulated position on
//! every tick and never cached; the node moves, the pins follow. Components
//! typed "ic" get a dual-inline layout (two vertical pin rows flanking the
//! body, mirroring a physical DIP package); everything else gets a single
//! horizontal pin strip below the body.

use serde::{Deserialize, Serialize};

use crate::schema::NetlistComponent;

/// Distance between adjacent pins, in pixels.
pub const PIN_SPACING: f64 = 36.0;

/// Horizontal distance of each DIP pin row from the body center.
const IC_ROW_OFFSET: f64 = 60.0;
/// Vertical compression of DIP rows relative to the base spacing.
const IC_ROW_SCALE: f64 = 0.5;
/// Horizontal compression of the single-row strip.
const STRIP_SCALE: f64 = 0.8;
/// Vertical drop of the strip below the body center.
const STRIP_DROP: f64 = 30.0;

/// A 2D coordinate in the schematic plane.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Offset of pin `index` within a row of `total` pins, centered on zero.
///
/// The row's center of mass sits at the origin for any `total`; a single
/// pin lands exactly on it.
pub fn pin_offset(index: usize, total: usize) -> f64 {
    (index as f64 - (total as f64 - 1.0) / 2.0) * PIN_SPACING
}

/// Absolute position of a named pin, given the component and its node's
/// simulated position.
///
/// A pin name not present in the component's pin list yields the origin
/// fallback `Point::ZERO`; callers treat that as "not drawable" rather than
/// receiving an error mid-tick.
pub fn pin_position(component: &NetlistComponent, pin: &str, node: Point) -> Point {
    let Some(pin_index) = component.pin_index(pin) else {
        return Point::ZERO;
    };
    let total = component.pins.len();

    if component.component_type.to_lowercase() == "ic" {
        // Dual-inline: first ceil(total/2) pins down the left side, the
        // remainder down the right, both rows vertically compressed.
        let left_count = (total + 1) / 2;
        if pin_index < left_count {
            Point::new(
                node.x - IC_ROW_OFFSET,
                node.y + pin_offset(pin_index, left_count) * IC_ROW_SCALE,
            )
        } else {
            let right_index = pin_index - left_count;
            let right_count = total - left_count;
            Point::new(
                node.x + IC_ROW_OFFSET,
                node.y + pin_offset(right_index, right_count) * IC_ROW_SCALE,
            )
        }
    } else {
        Point::new(
            node.x + pin_offset(pin_index, total) * STRIP_SCALE,
            node.y + STRIP_DROP,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ic(pins: &[&str]) -> NetlistComponent {
        NetlistComponent::new("IC1", "IC", pins.iter().map(|p| p.to_string()).collect())
    }

    fn resistor() -> NetlistComponent {
        NetlistComponent::new("R1", "Resistor", vec!["1".into(), "2".into()])
    }

    #[test]
    fn test_single_pin_sits_at_center() {
        assert_eq!(pin_offset(0, 1), 0.0);
    }

    #[test]
    fn test_odd_pin_row() {
        assert_eq!(pin_offset(0, 3), -36.0);
        assert_eq!(pin_offset(1, 3), 0.0);
        assert_eq!(pin_offset(2, 3), 36.0);
    }

    #[test]
    fn test_even_pin_row() {
        assert_eq!(pin_offset(0, 4), -54.0);
        assert_eq!(pin_offset(1, 4), -18.0);
        assert_eq!(pin_offset(2, 4), 18.0);
        assert_eq!(pin_offset(3, 4), 54.0);
    }

    #[test]
    fn test_row_center_of_mass_is_zero() {
        for total in 1..=12 {
            let sum: f64 = (0..total).map(|i| pin_offset(i, total)).sum();
            assert!(sum.abs() < 1e-9, "total={} sum={}", total, sum);
        }
    }

    #[test]
    fn test_strip_layout() {
        let node = Point::new(100.0, 50.0);
        let r = resistor();
        let p0 = pin_position(&r, "1", node);
        let p1 = pin_position(&r, "2", node);
        assert_eq!(p0, Point::new(100.0 + (-18.0) * 0.8, 80.0));
        assert_eq!(p1, Point::new(100.0 + 18.0 * 0.8, 80.0));
    }

    #[test]
    fn test_ic_dual_rows() {
        // 3 pins: VCC and GND down the left (2 pins), OUT alone on the right.
        let node = Point::new(0.0, 0.0);
        let c = ic(&["VCC", "GND", "OUT"]);

        let vcc = pin_position(&c, "VCC", node);
        assert_eq!(vcc, Point::new(-60.0, pin_offset(0, 2) * 0.5));

        let gnd = pin_position(&c, "GND", node);
        assert_eq!(gnd, Point::new(-60.0, pin_offset(1, 2) * 0.5));

        let out = pin_position(&c, "OUT", node);
        assert_eq!(out, Point::new(60.0, 0.0));
    }

    #[test]
    fn test_ic_rows_follow_node_position() {
        let node = Point::new(200.0, -40.0);
        let c = ic(&["1", "2", "3", "4"]);
        let left = pin_position(&c, "1", node);
        let right = pin_position(&c, "3", node);
        assert_eq!(left.x, 140.0);
        assert_eq!(right.x, 260.0);
        assert_eq!(left.y, -40.0 + pin_offset(0, 2) * 0.5);
        assert_eq!(right.y, -40.0 + pin_offset(0, 2) * 0.5);
    }

    #[test]
    fn test_ic_type_match_is_case_insensitive() {
        let mut c = ic(&["1", "2"]);
        c.component_type = "ic".to_string();
        let lowered = pin_position(&c, "1", Point::ZERO);
        c.component_type = "IC".to_string();
        let upper = pin_position(&c, "1", Point::ZERO);
        assert_eq!(lowered, upper);
        assert_eq!(lowered.x, -60.0);
    }

    #[test]
    fn test_unknown_pin_falls_back_to_origin() {
        let r = resistor();
        assert_eq!(pin_position(&r, "NOPE", Point::new(40.0, 40.0)), Point::ZERO);
    }
}
