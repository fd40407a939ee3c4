// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CancellationSignal, Delay, Element, RecordingObserver, RunOutcome,
            RunRequest, RunResult, SearchAlgorithm, SortAlgorithm, run};

/// Run `request` with a zero delay and a fresh signal, recording everything.
pub async fn run_recorded<T: Element>(
    request: RunRequest,
    input: &[T],
) -> (RunResult<RunOutcome<T>>, RecordingObserver<T>) {
    let mut observer = RecordingObserver::default();
    let result = run(
        request,
        input,
        &mut observer,
        &Delay::default(),
        &CancellationSignal::default(),
    )
    .await;
    (result, observer)
}

/// Sort `input` and return the outcome along with the recorded events.
///
/// # Panics
///
/// If the run fails. Only meant for tests.
pub async fn sort_recorded<T: Element>(
    algorithm: SortAlgorithm,
    input: &[T],
) -> (RunOutcome<T>, RecordingObserver<T>) {
    let (result, observer) = run_recorded(RunRequest::Sort(algorithm), input).await;
    match result {
        Ok(outcome) => (outcome, observer),
        Err(error) => panic!("{algorithm} sort failed: {error}"),
    }
}

/// Search `input` for `target` and return the outcome along with the recorded events.
///
/// # Panics
///
/// If the run fails. Only meant for tests.
pub async fn search_recorded<T: Element>(
    algorithm: SearchAlgorithm,
    input: &[T],
    target: f64,
) -> (RunOutcome<T>, RecordingObserver<T>) {
    let (result, observer) =
        run_recorded(RunRequest::Search { algorithm, target }, input).await;
    match result {
        Ok(outcome) => (outcome, observer),
        Err(error) => panic!("{algorithm} search failed: {error}"),
    }
}
