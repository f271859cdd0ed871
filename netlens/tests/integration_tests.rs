//! Integration tests for the Netlens library

use netlens::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_review_valid_design() {
    let result = NetlensCore::review_file(&fixture_path("valid_design.json"), ReviewOptions::default())
        .expect("Valid design should load successfully");

    assert_eq!(result.stats.errors, 0, "Valid design should have no errors");
    assert_eq!(
        result.stats.warnings, 0,
        "Valid design should have no warnings. Issues: {:?}",
        result.issues.iter().map(|i| &i.message).collect::<Vec<_>>()
    );
    assert!(result.file.as_ref().unwrap().ends_with("valid_design.json"));

    let analysis = result.analysis.expect("Analysis should be attached");
    assert_eq!(analysis.component_count, 3);
    assert_eq!(analysis.net_count, 2);
    assert_eq!(analysis.connection_count, 5);

    let graph = result.graph.expect("Graph should be attached");
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.links.len(), 3 + 1);
}

#[test]
fn test_review_flags_missing_ground() {
    let result = NetlensCore::review_file(&fixture_path("missing_ground.json"), ReviewOptions::default())
        .expect("Should load");

    assert_eq!(result.stats.errors, 0);
    assert_eq!(result.stats.warnings, 1);
    assert!(result
        .messages()
        .contains(&"No ground net found. Every PCB should have a ground connection."));
}

#[test]
fn test_review_nonexistent_file() {
    let result = NetlensCore::review_file(
        &PathBuf::from("does_not_exist.json"),
        ReviewOptions::default(),
    );
    assert!(result.is_err(), "Should return error for nonexistent file");
}

#[test]
fn test_review_result_stats_consistency() {
    let result = NetlensCore::review_file(
        &fixture_path("unknown_component.json"),
        ReviewOptions::default(),
    )
    .expect("Should load");

    assert_eq!(
        result.total_issues(),
        result.stats.errors + result.stats.warnings
    );
    assert!(result.has_errors());
}

#[test]
fn test_review_project_directory() {
    let fixtures_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");
    let results = NetlensCore::review_project(&fixtures_dir, ReviewOptions::default())
        .expect("Should review project directory");

    assert!(results.len() >= 4, "Should find the fixture netlists");
    for result in &results {
        assert!(result.file.as_ref().unwrap().exists());
    }
}

#[test]
fn test_review_project_skips_hidden_and_foreign_files() {
    let dir = tempfile::tempdir().expect("Should create temp dir");

    let mut netlist = std::fs::File::create(dir.path().join("board.json")).unwrap();
    netlist
        .write_all(
            br#"{"components": [{"name": "R1", "type": "Resistor", "pins": ["1", "2"]}], "nets": []}"#,
        )
        .unwrap();
    std::fs::File::create(dir.path().join("notes.txt")).unwrap();
    std::fs::create_dir(dir.path().join(".cache")).unwrap();
    std::fs::File::create(dir.path().join(".cache").join("stale.json")).unwrap();

    let results = NetlensCore::review_project(dir.path(), ReviewOptions::default())
        .expect("Should review temp project");

    assert_eq!(results.len(), 1);
    assert!(results[0].file.as_ref().unwrap().ends_with("board.json"));
}

#[test]
fn test_discover_netlist_files() {
    let fixtures_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");

    let files = netlens::discover_netlist_files(&fixtures_dir).expect("Should discover files");

    assert!(!files.is_empty(), "Should find netlist files");
    for file in &files {
        let ext = file.extension().and_then(|s| s.to_str()).unwrap();
        assert!(
            ext == "json" || ext == "netlist",
            "File should be a netlist format: {:?}",
            file
        );
    }
}

#[test]
fn test_review_serializes_for_api_consumers() {
    let result = NetlensCore::review_file(&fixture_path("valid_design.json"), ReviewOptions::default())
        .expect("Should load");

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("stats").is_some());
    assert!(json.get("generated_at").is_some());
    assert_eq!(json["graph"]["nodes"][0]["id"], "IC1");
    assert_eq!(json["analysis"]["componentCount"], 3);
}
