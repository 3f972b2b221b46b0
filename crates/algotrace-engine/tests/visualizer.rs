//! End-to-end runs through the `Visualizer`: graph files in, traces out,
//! and playback over the result.

use std::io::Write;
use std::time::Duration;

use algotrace_common::Error;
use algotrace_core::StepKind;
use algotrace_engine::{AlgorithmInput, AlgorithmRequest, Config, PlaybackState, Visualizer};
use tempfile::NamedTempFile;

const GRAPH: &str = r#"{
    "vertices": ["A", "B", "C", "D"],
    "edges": [
        {"from": "A", "to": "B", "weight": 4},
        {"from": "A", "to": "C", "weight": 2},
        {"from": "B", "to": "C", "weight": 1},
        {"from": "B", "to": "D", "weight": 5},
        {"from": "C", "to": "D", "weight": 8}
    ]
}"#;

fn graph_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_graph_and_run() {
    let visualizer = Visualizer::new();
    let file = graph_file(GRAPH);
    let graph = visualizer.load_graph(file.path()).unwrap();
    assert_eq!(graph.vertex_count(), 4);

    let traced = visualizer
        .run(
            &AlgorithmRequest::Dijkstra {
                start: "A".into(),
                end: "D".into(),
            },
            AlgorithmInput::Graph(&graph),
        )
        .unwrap();
    assert_eq!(traced.output.summary(), "path A -> C -> B -> D (distance 8)");
    assert_eq!(traced.trace.last().unwrap().kind, StepKind::PathFound);

    let traced = visualizer
        .run(&AlgorithmRequest::Kruskal, AlgorithmInput::Graph(&graph))
        .unwrap();
    assert_eq!(traced.output.summary(), "3 edges, total weight 8");
}

#[test]
fn test_load_graph_errors() {
    let visualizer = Visualizer::new();

    let missing = visualizer.load_graph("/nonexistent/graph.json").unwrap_err();
    assert!(matches!(missing, Error::Io(_)));

    let file = graph_file("{ not json");
    let malformed = visualizer.load_graph(file.path()).unwrap_err();
    assert!(matches!(malformed, Error::Serialization(_)));

    let file = graph_file(r#"{"vertices": ["A"], "edges": [{"from": "A", "to": "A"}]}"#);
    let invalid = visualizer.load_graph(file.path()).unwrap_err();
    assert!(matches!(invalid, Error::Graph(_)));
}

#[test]
fn test_controller_walks_whole_trace() {
    let visualizer = Visualizer::new();
    let traced = visualizer
        .run(&AlgorithmRequest::NQueens { n: 4 }, AlgorithmInput::None)
        .unwrap();
    let len = traced.trace.len();

    let mut controller = visualizer.controller(traced.trace);
    let mut moves = 0;
    while controller.step_forward().unwrap() {
        moves += 1;
    }
    assert_eq!(moves, len - 1);
    assert_eq!(controller.state(), PlaybackState::Complete);
    assert_eq!(controller.current_step().unwrap().kind, StepKind::Solved);

    while controller.step_backward().unwrap() {}
    assert_eq!(controller.current_index(), Some(0));
    assert_eq!(controller.state(), PlaybackState::Ready);
}

#[tokio::test]
async fn test_player_plays_sort_trace() {
    let visualizer =
        Visualizer::with_config(Config::default().with_playback_interval(Duration::from_millis(1)));
    let values = [3, 1, 2];
    let traced = visualizer
        .run(
            &AlgorithmRequest::Sort {
                kind: "bubble".parse().unwrap(),
            },
            AlgorithmInput::Array(&values),
        )
        .unwrap();
    let len = traced.trace.len();

    let player = visualizer.player(traced.trace);
    let mut shown = 0;
    let state = player.play(|_, _| shown += 1).await.unwrap();
    assert_eq!(state, PlaybackState::Complete);
    assert_eq!(shown, len);
}
