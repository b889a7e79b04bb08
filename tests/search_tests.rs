use algotrace::algorithms::{search, search_steps, SearchKind};
use algotrace::errors::TraceError;
use algotrace::subject::Graph;
use algotrace::trace::{Algorithm, Annotation, Snapshot};

fn graph_from_json(json: &str) -> Graph {
    serde_json::from_str(json).expect("valid graph json")
}

fn visited(graph: &Graph, start: &str, kind: SearchKind) -> Vec<String> {
    search(graph, start, kind)
        .expect("search succeeds")
        .last()
        .and_then(|step| step.visited())
        .map(<[String]>::to_vec)
        .unwrap_or_default()
}

#[test]
fn test_bfs_line_example() {
    let graph = graph_from_json(
        r#"{"directed": false,
            "nodes": ["A", "B", "C"],
            "edges": [{"from": "A", "to": "B", "weight": 1},
                      {"from": "B", "to": "C", "weight": 1}]}"#,
    );

    let trace = search(&graph, "A", SearchKind::Bfs).expect("bfs");
    assert_eq!(trace.algorithm(), Algorithm::Bfs);
    assert_eq!(trace.len(), 3);

    let prefixes: Vec<Vec<&str>> = trace
        .iter()
        .map(|step| {
            step.visited()
                .expect("search snapshot")
                .iter()
                .map(String::as_str)
                .collect()
        })
        .collect();
    assert_eq!(prefixes, vec![vec!["A"], vec!["A", "B"], vec!["A", "B", "C"]]);
}

#[test]
fn test_snapshot_and_annotation_agree() {
    let graph = graph_from_json(
        r#"{"directed": true, "nodes": ["A", "B"], "edges": [{"from": "A", "to": "B"}]}"#,
    );
    let trace = search(&graph, "A", SearchKind::Dfs).expect("dfs");
    for step in &trace {
        match (&step.snapshot, &step.annotation) {
            (Snapshot::Visited(snap), Annotation::Search { visited }) => assert_eq!(snap, visited),
            other => panic!("unexpected step shape: {:?}", other),
        }
    }
}

#[test]
fn test_unknown_start_returns_error_without_trace() {
    let graph = graph_from_json(r#"{"directed": false, "nodes": ["A"], "edges": []}"#);

    for kind in [SearchKind::Bfs, SearchKind::Dfs, SearchKind::Ucs] {
        match search(&graph, "Z", kind) {
            Err(TraceError::UnknownNode { node }) => assert_eq!(node, "Z"),
            other => panic!("expected UnknownNode, got {:?}", other),
        }
        assert!(search_steps(&graph, "Z", kind).is_err());
    }
}

#[test]
fn test_directed_edges_are_one_way() {
    let graph = graph_from_json(
        r#"{"directed": true,
            "nodes": ["A", "B", "C"],
            "edges": [{"from": "B", "to": "A"}, {"from": "B", "to": "C"}]}"#,
    );
    assert_eq!(visited(&graph, "A", SearchKind::Bfs), vec!["A"]);
    assert_eq!(visited(&graph, "B", SearchKind::Bfs), vec!["B", "A", "C"]);
}

#[test]
fn test_dfs_goes_deep_before_wide() {
    //   A
    //  / \
    // B   C
    // |
    // D
    let graph = graph_from_json(
        r#"{"directed": false,
            "nodes": ["A", "B", "C", "D"],
            "edges": [{"from": "A", "to": "B"}, {"from": "A", "to": "C"},
                      {"from": "B", "to": "D"}]}"#,
    );
    assert_eq!(visited(&graph, "A", SearchKind::Dfs), vec!["A", "B", "D", "C"]);
    assert_eq!(visited(&graph, "A", SearchKind::Bfs), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_ucs_prefers_cheap_detour() {
    let graph = graph_from_json(
        r#"{"directed": false,
            "nodes": ["S", "A", "B", "G"],
            "edges": [{"from": "S", "to": "G", "weight": 10},
                      {"from": "S", "to": "A", "weight": 1},
                      {"from": "A", "to": "B", "weight": 1},
                      {"from": "B", "to": "G", "weight": 1}]}"#,
    );
    assert_eq!(visited(&graph, "S", SearchKind::Ucs), vec!["S", "A", "B", "G"]);
    // BFS ignores weights
    assert_eq!(visited(&graph, "S", SearchKind::Bfs), vec!["S", "G", "A", "B"]);
}

#[test]
fn test_searches_are_deterministic() {
    let json = r#"{"directed": false,
        "nodes": ["A", "B", "C", "D", "E"],
        "edges": [{"from": "A", "to": "C", "weight": 3}, {"from": "A", "to": "B", "weight": 3},
                  {"from": "C", "to": "D", "weight": 1}, {"from": "B", "to": "D", "weight": 1},
                  {"from": "D", "to": "E", "weight": 2}]}"#;

    for kind in [SearchKind::Bfs, SearchKind::Dfs, SearchKind::Ucs] {
        let first = search(&graph_from_json(json), "A", kind).expect("search");
        let second = search(&graph_from_json(json), "A", kind).expect("search");
        assert_eq!(first, second);
    }
}

#[test]
fn test_lazy_consumer_can_stop_early() {
    let graph = graph_from_json(
        r#"{"directed": false,
            "nodes": ["A", "B", "C", "D"],
            "edges": [{"from": "A", "to": "B"}, {"from": "B", "to": "C"}, {"from": "C", "to": "D"}]}"#,
    );
    let mut steps = search_steps(&graph, "A", SearchKind::Bfs).expect("start exists");
    let first_two: Vec<_> = steps.by_ref().take(2).collect();
    assert_eq!(first_two.len(), 2);
    assert_eq!(steps.visited(), &["A".to_string(), "B".to_string()][..]);

    // The rest continues where it left off
    let rest: Vec<_> = steps.collect();
    assert_eq!(rest.len(), 2);
    let eager = search(&graph, "A", SearchKind::Bfs).expect("bfs");
    assert_eq!(&eager.steps()[2..], &rest[..]);
}

#[test]
fn test_search_leaves_graph_unchanged() {
    let graph = graph_from_json(
        r#"{"directed": false, "nodes": ["A", "B"], "edges": [{"from": "A", "to": "B", "weight": 5}]}"#,
    );
    let before = graph.clone();
    search(&graph, "A", SearchKind::Ucs).expect("ucs");
    assert_eq!(graph, before);
}

#[test]
fn test_reloaded_graph_searches_identically() {
    let mut graph = Graph::undirected();
    for name in ["A", "B", "C", "D"] {
        graph.add_node(name).expect("node");
    }
    graph.add_edge("B", "C", Some(2)).expect("edge");
    graph.add_edge("C", "D", Some(1)).expect("edge");
    graph.add_edge("A", "B", Some(5)).expect("edge");
    graph.add_edge("A", "D", Some(1)).expect("edge");

    let json = serde_json::to_string(&graph).expect("serialize");
    let reloaded = graph_from_json(&json);
    assert_eq!(reloaded, graph);

    for kind in [SearchKind::Bfs, SearchKind::Dfs, SearchKind::Ucs] {
        let before = search(&graph, "B", kind).expect("search");
        let after = search(&reloaded, "B", kind).expect("search");
        assert_eq!(after, before, "{:?} trace changed after reload", kind);
    }
    assert_eq!(visited(&reloaded, "B", SearchKind::Bfs), ["B", "C", "A", "D"]);
}
