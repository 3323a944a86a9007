// tests/integration_dataset.rs
use std::fs;

use collabnet_core::cli::handlers;
use collabnet_core::config::Config;
use collabnet_core::graph::dataset;
use collabnet_core::ports::{CommandLog, ViewLog};
use collabnet_core::present::View;
use collabnet_core::session::Operation;
use collabnet_core::GraphError;

const DATASET: &str = r#"{
    "nodes": [
        {"orcid": "0000-0001", "name": "Ada Lovelace", "papers": ["P1", "P2", "P3", "P4", "P5", "P6"]},
        {"orcid": "0000-0002", "name": "Bob Boole", "papers": ["P1", "P2"]},
        {"orcid": "0000-0003", "name": "Cy Cantor", "papers": ["P3", "P4", "P5", "P6"]},
        {"orcid": "generated-1", "name": "Unknown", "papers": []}
    ],
    "edges": [
        {"edge": ["0000-0001", "0000-0002"], "weight": 2},
        {"edge": ["0000-0001", "0000-0003"], "weight": 4},
        {"edge": ["0000-0003", "generated-1"], "weight": 1}
    ]
}"#;

#[test]
fn test_load_from_file_and_style() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("graph.json");
    fs::write(&path, DATASET).unwrap();

    let config = Config::default();
    let g = dataset::load(&path, &config).unwrap();
    assert_eq!(g.len(), 4);
    assert_eq!(g.edges().len(), 3);

    // Average over real authors is 4 papers: 6 is large, 2 is small.
    assert_eq!(g.find_node("0000-0001").unwrap().size, config.style.large_size);
    assert_eq!(g.find_node("0000-0002").unwrap().size, config.style.small_size);
    assert_eq!(g.find_node("0000-0003").unwrap().size, config.style.medium_size);
    assert_eq!(g.find_node("generated-1").unwrap().color, config.palette.generated_node);
    assert_eq!(g.find_node("0000-0002").unwrap().color, config.palette.node);
}

#[test]
fn test_missing_file_is_io_error() {
    let d = tempfile::tempdir().unwrap();
    let err = dataset::load(&d.path().join("nope.json"), &Config::default()).unwrap_err();
    assert!(matches!(err, GraphError::Io { .. }));
}

#[test]
fn test_session_over_loaded_dataset() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("graph.json");
    fs::write(&path, DATASET).unwrap();

    let mut session = handlers::load_session(&path, Config::default()).unwrap();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();

    let view = session
        .run(Operation::ShortestPath, &["0000-0002", "generated-1"], &mut canvas, &mut panel)
        .unwrap();
    let View::ShortestPath(summary) = view else {
        panic!("wrong view");
    };
    let route = summary.route.unwrap();
    assert_eq!(route.total_weight, 7);
    assert_eq!(route.hops(), 3);

    // Every edge is reset, then the three on the route recolored, then a fit.
    assert_eq!(canvas.commands.len(), 3 + 3 + 1);
}
