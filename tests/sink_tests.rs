use algotrace::algorithms::{search, sort, SearchKind, SortKind};
use algotrace::errors::TraceError;
use algotrace::subject::{Graph, Sequence};
use algotrace::trace::sink::{FileSink, TraceSink};
use algotrace::trace::{Algorithm, StepTrace};
use pretty_assertions::assert_eq;
use std::fs;
use std::io;
use tempfile::TempDir;

fn selection_trace() -> StepTrace {
    let mut seq = Sequence::new(vec![5, 3, 8, 6, 2]);
    sort(&mut seq, SortKind::Selection)
}

#[test]
fn test_sort_trace_round_trips() {
    let dir = TempDir::new().expect("tempdir");
    let sink = FileSink::new(dir.path());
    let trace = selection_trace();

    sink.persist("selection_sort_steps", &trace).expect("persist");

    let path = dir.path().join("selection_sort_steps.txt");
    let text = fs::read_to_string(&path).expect("trace file exists");
    assert_eq!(text.lines().count(), trace.len());

    let loaded = sink
        .load("selection_sort_steps", Algorithm::Selection)
        .expect("load");
    assert_eq!(loaded, trace);
}

#[test]
fn test_search_trace_round_trips_under_log_name() {
    let dir = TempDir::new().expect("tempdir");
    let sink = FileSink::new(dir.path());

    let mut graph = Graph::undirected();
    for node in ["A", "B", "C"] {
        graph.add_node(node).expect("add node");
    }
    graph.add_edge("A", "B", None).expect("edge");
    graph.add_edge("A", "C", Some(2)).expect("edge");
    let trace = search(&graph, "A", SearchKind::Ucs).expect("ucs");

    let name = trace.algorithm().log_name();
    assert_eq!(name, "ucs_steps");
    sink.persist(name, &trace).expect("persist");
    assert!(dir.path().join("ucs_steps.txt").is_file());

    assert_eq!(sink.load(name, Algorithm::Ucs).expect("load"), trace);
}

#[test]
fn test_persist_creates_directory_and_overwrites() {
    let dir = TempDir::new().expect("tempdir");
    let nested = dir.path().join("nested").join("logs");
    let sink = FileSink::new(&nested);

    let long = selection_trace();
    sink.persist("run", &long).expect("first persist");

    let mut seq = Sequence::new(vec![2, 1]);
    let short = sort(&mut seq, SortKind::Quick);
    sink.persist("run", &short).expect("second persist");

    let loaded = sink.load("run", Algorithm::Quick).expect("load");
    assert_eq!(loaded, short);

    // Persisting the same trace again is idempotent
    sink.persist("run", &short).expect("third persist");
    assert_eq!(sink.load("run", Algorithm::Quick).expect("load"), short);
}

#[test]
fn test_unwritable_directory_reports_io_and_keeps_trace() {
    let dir = TempDir::new().expect("tempdir");
    // A regular file where the sink directory should be
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, b"occupied").expect("write blocker");

    let sink = FileSink::new(&blocker);
    let trace = selection_trace();
    let before = trace.clone();

    match sink.persist("selection_sort_steps", &trace) {
        Err(err @ TraceError::Io { .. }) => assert!(err.is_io()),
        other => panic!("expected Io error, got {:?}", other),
    }
    assert_eq!(trace, before);
}

#[test]
fn test_invalid_name_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let sink = FileSink::new(dir.path());
    match sink.persist("../escape", &selection_trace()) {
        Err(TraceError::Io { source, .. }) => assert_eq!(source.kind(), io::ErrorKind::InvalidInput),
        other => panic!("expected Io error, got {:?}", other),
    }
    assert!(!dir.path().join("../escape.txt").exists());
}

#[test]
fn test_load_reports_malformed_line() {
    let dir = TempDir::new().expect("tempdir");
    let sink = FileSink::new(dir.path());
    sink.persist("broken", &selection_trace()).expect("persist");

    let path = dir.path().join("broken.txt");
    let mut text = fs::read_to_string(&path).expect("read");
    text.push_str("{not json}\n");
    fs::write(&path, text).expect("write");

    match sink.load("broken", Algorithm::Selection) {
        Err(TraceError::Decode { line, .. }) => assert_eq!(line, selection_trace().len() + 1),
        other => panic!("expected Decode error, got {:?}", other),
    }
}

#[test]
fn test_load_missing_trace_is_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let sink = FileSink::new(dir.path());
    let err = sink.load("absent", Algorithm::Bfs).unwrap_err();
    assert!(err.is_io());
}
