//! Graph export example: convert a netlist to force-graph JSON and show
//! where each pin of the first component would land.

use netlens::prelude::*;
use netlens::{load_netlist, pin_position, Point};
use std::path::Path;

fn main() -> Result<(), NetlensError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/dense_bus.json".to_string());
    let netlist = load_netlist(Path::new(&path))?;

    let graph = convert_to_graph(&netlist);
    let json = serde_json::to_string_pretty(&graph).map_err(NetlensError::from)?;
    println!("{}", json);

    if let Some(component) = netlist.components.first() {
        // Place the node at the origin; the real position comes from the
        // force simulation at render time.
        println!("\nPin positions for {} at the origin:", component.name);
        for pin in &component.pins {
            let pos = pin_position(component, pin, Point::ZERO);
            println!("  {:<8} ({:>6.1}, {:>6.1})", pin, pos.x, pos.y);
        }
    }

    Ok(())
}
