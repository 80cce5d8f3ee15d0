//! Report artifact shape and persistence locks.
//!
//! - JSON keys appear in a fixed alphabetical order at both levels.
//! - An exhausted run serializes null plan fields and an empty action
//!   list.
//! - Bytes written to disk re-parse and re-digest to the same values.
//! - Layouts survive a file round trip through `Layout::from_file`.

use std::fs;

use conformance_tests::fixtures::{disconnected_maze, tiny_maze, TINY_MAZE};
use warren_grid::layout::Layout;
use warren_search::digest::canonical_hash;
use warren_search::report::{SearchReport, DOMAIN_REPORT};
use warren_search::search::{breadth_first_search, depth_first_search};

// --- key order ---

#[test]
fn report_keys_are_alphabetical_at_both_levels() {
    let maze = tiny_maze();
    let outcome = breadth_first_search(&maze);
    let json = SearchReport::new("breadth_first", &maze, &outcome).to_json_string();

    assert!(json.starts_with("{\"actions\":["), "actions leads the object");
    let top_level = [
        "\"actions\"",
        "\"algorithm\"",
        "\"plan_cost\"",
        "\"plan_length\"",
        "\"problem_digest\"",
        "\"problem_id\"",
        "\"stats\"",
        "\"termination\"",
    ];
    let mut last = 0;
    for key in top_level {
        let at = json.find(key).unwrap_or_else(|| panic!("missing key {key}"));
        assert!(at >= last, "key {key} is out of order");
        last = at;
    }

    let stats_keys = [
        "\"depth_limited\"",
        "\"duplicates_suppressed\"",
        "\"expanded\"",
        "\"frontier_high_water\"",
        "\"generated\"",
        "\"max_depth_reached\"",
    ];
    let stats_at = json.find("\"stats\"").expect("stats key present");
    let mut last = stats_at;
    for key in stats_keys {
        let at = json.find(key).unwrap_or_else(|| panic!("missing stats key {key}"));
        assert!(at >= last, "stats key {key} is out of order");
        last = at;
    }
}

#[test]
fn exhausted_run_serializes_null_plan_fields() {
    let maze = disconnected_maze();
    let outcome = depth_first_search(&maze);
    let report = SearchReport::new("depth_first", &maze, &outcome);
    let json = report.to_json_string();

    assert!(json.starts_with("{\"actions\":[]"), "no actions to report");
    assert!(json.contains("\"plan_cost\":null"));
    assert!(json.contains("\"plan_length\":null"));
    assert!(json.contains("\"termination\":\"frontier_exhausted\""));
}

// --- persistence ---

#[test]
fn report_bytes_round_trip_through_disk() {
    let maze = tiny_maze();
    let outcome = breadth_first_search(&maze);
    let report = SearchReport::new("breadth_first", &maze, &outcome);
    let json = report.to_json_string();

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("report.json");
    fs::write(&path, &json).expect("write report");
    let read_back = fs::read(&path).expect("read report");

    assert_eq!(read_back, json.as_bytes(), "bytes must survive the disk");
    assert_eq!(
        canonical_hash(DOMAIN_REPORT, &read_back),
        report.digest(),
        "the digest of the stored bytes must match the live report"
    );

    let value: serde_json::Value = serde_json::from_slice(&read_back).expect("re-parse report");
    assert_eq!(value["algorithm"], "breadth_first");
    assert_eq!(value["plan_length"], 5);
}

#[test]
fn layout_round_trips_through_a_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("tiny_maze.lay");
    fs::write(&path, TINY_MAZE).expect("write layout");

    let loaded = Layout::from_file(&path).expect("layout loads");
    assert_eq!(loaded.name(), "tiny_maze", "name comes from the file stem");
    assert_eq!(
        loaded.render(),
        format!("{TINY_MAZE}\n"),
        "render reproduces the source text, newline-terminated"
    );

    let parsed = Layout::parse("tiny_maze", TINY_MAZE).expect("layout parses");
    assert_eq!(loaded, parsed, "file and string forms are the same layout");
    assert_eq!(loaded.identity_bytes(), parsed.identity_bytes());
}
