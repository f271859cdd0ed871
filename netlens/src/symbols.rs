//! Component symbol lookup.
//!
//! Text glyphs for component types, used where a renderer wants a compact
//! textual representation instead of a drawn symbol, plus the body extents
//! a renderer needs for hit-boxes and label placement.

/// Unicode schematic glyph for a component type. Case-insensitive; unknown
/// types get the generic `◯`.
pub fn component_symbol(component_type: &str) -> &'static str {
    match component_type.to_lowercase().as_str() {
        "ic" | "microcontroller" | "processor" => "□",
        "resistor" | "resistance" => "⧟",
        "capacitor" | "cap" => "⊥⊥",
        "connector" | "conn" => "⊞",
        "module" | "board" => "▬",
        "inductor" => "◐",
        "led" => "◊",
        "diode" => "▷",
        "transistor" => "▲",
        "switch" => "⫸",
        "relay" => "⧈",
        "crystal" => "◇",
        "fuse" => "═══",
        _ => "◯",
    }
}

/// Body width and height for a component symbol. ICs grow with their pin
/// count so both pin rows stay inside the body; everything else is a fixed
/// small box.
pub fn symbol_extent(component_type: &str, pin_count: usize) -> (f64, f64) {
    if component_type.to_lowercase() == "ic" {
        (120.0, f64::max(60.0, pin_count as f64 * 12.0 + 20.0))
    } else {
        (80.0, 40.0)
    }
}
