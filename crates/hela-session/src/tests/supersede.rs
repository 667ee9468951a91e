use std::time::Duration;

use crate::{ConvertSession, ConvertWorker, WorkerResult};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Pull results until the channel stays quiet for a moment, keeping the last.
fn drain_results(worker: &ConvertWorker) -> Vec<WorkerResult> {
    let mut results = Vec::new();
    while let Some(result) = worker.recv_timeout(Duration::from_millis(300)) {
        results.push(result);
    }
    results
}

#[test]
fn test_worker_converts_submitted_input() {
    let worker = ConvertWorker::spawn();
    let mut session = ConvertSession::new();

    let generation = session.update("mama gedhara yanavaa");
    worker.submit(session.input().to_string(), generation);

    let result = worker.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(result.generation, generation);
    assert!(session.complete(result.generation, result.output));
    assert_eq!(session.output(), "මම ගෙදර යනවා");
    assert!(!session.is_converting());
}

#[test]
fn test_latest_submission_wins() {
    let worker = ConvertWorker::spawn();
    let mut session = ConvertSession::new();

    // A typing burst: every keystroke submits, most become stale mid-queue.
    let snapshots = [
        "m",
        "ma",
        "mam",
        "mama",
        "mama ",
        "mama k",
        "mama kadeeta",
        "mama kadeeta yanavaa",
    ];
    for snapshot in snapshots {
        let generation = session.update(snapshot);
        worker.submit(snapshot.to_string(), generation);
    }

    let mut results = vec![worker.recv_timeout(RECV_TIMEOUT).unwrap()];
    results.extend(drain_results(&worker));
    // Generations arrive in submission order even when some are skipped.
    for pair in results.windows(2) {
        assert!(pair[0].generation < pair[1].generation);
    }

    for result in results {
        session.complete(result.generation, result.output);
    }
    assert_eq!(session.output(), "මම කඩේට යනවා");
    assert!(!session.is_converting());
}

#[test]
fn test_invalidate_discards_pending_work() {
    let worker = ConvertWorker::spawn();
    let mut session = ConvertSession::new();

    // The user typed, then cleared the field before the conversion landed.
    let abandoned = session.update("mama gedhara gihin bath kanna hithenavaa");
    worker.submit(session.input().to_string(), abandoned);
    worker.invalidate();
    session.update("");

    // Whatever the worker still emits carries the abandoned generation and
    // the session must drop it.
    for result in drain_results(&worker) {
        assert!(!session.complete(result.generation, result.output));
    }
    assert_eq!(session.output(), "");

    // Fresh work after an invalidate flows through as usual.
    let generation = session.update("api yamu");
    worker.submit(session.input().to_string(), generation);
    let result = worker.recv_timeout(RECV_TIMEOUT).unwrap();
    assert!(session.complete(result.generation, result.output));
    assert_eq!(session.output(), "අපි යමු");
}

#[test]
fn test_stale_results_never_overwrite_newer_output() {
    let worker = ConvertWorker::spawn();
    let mut session = ConvertSession::new();

    let old = session.update("mama");
    worker.submit(session.input().to_string(), old);
    let old_result = worker.recv_timeout(RECV_TIMEOUT).unwrap();

    // Input moved on before the old result was applied.
    let newer = session.update("api yamu");
    worker.submit(session.input().to_string(), newer);

    assert!(!session.complete(old_result.generation, old_result.output));

    let newer_result = worker.recv_timeout(RECV_TIMEOUT).unwrap();
    assert!(session.complete(newer_result.generation, newer_result.output));
    assert_eq!(session.output(), "අපි යමු");
}
