use algotrace::algorithms::{sort, SortKind};
use algotrace::errors::TraceError;
use algotrace::subject::Sequence;
use algotrace::trace::replay::Replay;
use algotrace::trace::{Algorithm, Step, StepTrace};

fn insertion_replay() -> Replay {
    let mut seq = Sequence::new(vec![3, 1, 2]);
    Replay::new(sort(&mut seq, SortKind::Insertion))
}

#[test]
fn test_walks_forward_and_back_through_snapshots() {
    let mut replay = insertion_replay();
    let snapshots: Vec<Vec<i64>> = replay
        .trace()
        .iter()
        .map(|s| s.values().expect("sort step").to_vec())
        .collect();

    for expected in &snapshots[1..] {
        replay.step_forward().expect("not at end yet");
        assert_eq!(replay.current().and_then(Step::values), Some(&expected[..]));
    }
    assert!(replay.is_at_end());

    for expected in snapshots[..snapshots.len() - 1].iter().rev() {
        replay.step_backward().expect("not at start yet");
        assert_eq!(replay.current().and_then(Step::values), Some(&expected[..]));
    }
    assert!(replay.is_at_start());
}

#[test]
fn test_stepping_past_either_end_fails_without_moving() {
    let mut replay = insertion_replay();
    assert!(matches!(
        replay.step_backward(),
        Err(TraceError::HistoryOperationFailed { .. })
    ));
    assert_eq!(replay.position(), 0);

    replay.jump_to_end();
    let last = replay.position();
    assert_eq!(last, replay.len() - 1);
    assert!(matches!(
        replay.step_forward(),
        Err(TraceError::HistoryOperationFailed { .. })
    ));
    assert_eq!(replay.position(), last);
}

#[test]
fn test_step_forward_by_stops_at_end() {
    let mut replay = insertion_replay();
    let total = replay.len();
    assert_eq!(replay.step_forward_by(2), 2);
    assert_eq!(replay.step_forward_by(100), total - 3);
    assert!(replay.is_at_end());

    replay.rewind_to_start();
    assert_eq!(replay.position(), 0);
}

#[test]
fn test_empty_trace() {
    let mut replay = Replay::new(StepTrace::from_steps(Algorithm::Bfs, Vec::new()));
    assert!(replay.is_empty());
    assert!(replay.current().is_none());
    assert!(replay.step_forward().is_err());
    assert!(replay.step_backward().is_err());
}

#[test]
fn test_replay_hands_back_the_trace() {
    let mut seq = Sequence::new(vec![2, 1]);
    let trace = sort(&mut seq, SortKind::Merge);
    let mut replay = Replay::new(trace.clone());
    replay.jump_to_end();
    assert_eq!(replay.into_trace(), trace);
}
