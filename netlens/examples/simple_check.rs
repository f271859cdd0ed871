//! Simple check example: validate a netlist file and print results.

use netlens::prelude::*;
use std::path::Path;

fn main() -> Result<(), NetlensError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/valid_design.json".to_string());
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        eprintln!("Usage: cargo run --example simple_check [path/to/netlist.json]");
        std::process::exit(1);
    }

    let result = NetlensCore::review_file(path, ReviewOptions::default())?;

    println!("Review results for: {}", path.display());
    println!("Total issues: {}", result.total_issues());
    println!();

    for issue in &result.issues {
        println!("  [{:?}] {}", issue.severity, issue.message);
    }

    if let Some(analysis) = &result.analysis {
        println!(
            "\nCircuit: {} components, {} nets, complexity {:.1}",
            analysis.component_count, analysis.net_count, analysis.complexity_score
        );
    }

    if result.has_errors() {
        println!("\nReview failed (errors present).");
        std::process::exit(1);
    }

    println!("\nReview passed (no errors).");
    Ok(())
}
