// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A set cancellation signal must stop every algorithm promptly, and nothing may be
//! published after the step that observed it.

use std::time::Duration;

use pretty_assertions::assert_eq;
use r3bl_algo_runner::{Algorithm, CancellationSignal, Delay, RecordingObserver, RunError,
                       RunEvent, RunRequest, SearchAlgorithm, SortAlgorithm, run, run_sort};
use strum::IntoEnumIterator;

fn request_for(algorithm: Algorithm) -> RunRequest {
    match algorithm {
        Algorithm::Sort(it) => RunRequest::Sort(it),
        Algorithm::Search(it) => RunRequest::Search {
            algorithm: it,
            target: 40.0,
        },
    }
}

#[tokio::test]
async fn test_cancelled_before_invocation() {
    let input: Vec<i32> = (0..10).map(|it| it * 5).collect();

    for algorithm in Algorithm::all() {
        let signal = CancellationSignal::default();
        signal.cancel();
        let mut observer = RecordingObserver::default();

        let result = run(
            request_for(algorithm),
            &input,
            &mut observer,
            &Delay::default(),
            &signal,
        )
        .await;

        assert_eq!(result, Err(RunError::Cancelled), "{algorithm}");
        assert!(observer.events.is_empty(), "{algorithm}");
    }
}

#[tokio::test]
async fn test_cancelled_right_after_first_snapshot() {
    let input = [9, 7, 5, 3, 1, 8, 6, 4, 2, 0];

    for algorithm in SortAlgorithm::iter() {
        let signal = CancellationSignal::default();
        let mut observer = RecordingObserver::cancel_after_snapshots(1, signal.clone());

        let result = run_sort(algorithm, &input, &mut observer, &Delay::default(), &signal)
            .await;

        assert_eq!(result, Err(RunError::Cancelled), "{algorithm}");
        assert_eq!(observer.sequence_snapshots().len(), 1, "{algorithm}");
        // The step that published the snapshot is the last thing recorded, since its
        // suspension is where the signal was seen.
        let last_snapshot_position = observer
            .events
            .iter()
            .rposition(|it| matches!(it, RunEvent::SequenceChanged(_)))
            .unwrap();
        let stats_after: Vec<_> = observer.events[last_snapshot_position..]
            .iter()
            .filter(|it| matches!(it, RunEvent::StatsChanged(stats) if stats.comparisons.is_some()))
            .collect();
        assert!(stats_after.is_empty(), "{algorithm}");
    }
}

#[tokio::test]
async fn test_cancelled_during_first_suspension() {
    for algorithm in Algorithm::all() {
        // Searches other than linear need sorted input.
        let input = match algorithm {
            Algorithm::Sort(_) => [4, 3, 2, 1],
            Algorithm::Search(_) => [1, 2, 3, 4],
        };
        let signal = CancellationSignal::default();
        let delay = Delay::from_millis(100);
        let mut observer = RecordingObserver::default();

        let canceller = {
            let signal = signal.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                signal.cancel();
            }
        };
        let (result, ()) = tokio::join!(
            run(request_for(algorithm), &input, &mut observer, &delay, &signal),
            canceller
        );

        assert_eq!(result, Err(RunError::Cancelled), "{algorithm}");
        // At most one step happened before the first suspension. Bucket sort's first
        // step (scattering into a bucket) doesn't touch the counters at all.
        let stats = observer.final_stats();
        assert!(stats.comparisons + stats.swaps <= 1, "{algorithm}");
        assert!(observer.sequence_snapshots().len() <= 1, "{algorithm}");
        assert!(observer.annotation_snapshots().len() <= 1, "{algorithm}");
    }
}

#[tokio::test]
async fn test_cancel_a_spawned_run_from_another_task() {
    let signal = CancellationSignal::default();
    let delay = Delay::from_millis(1);
    let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();

    let handle = tokio::spawn({
        let signal = signal.clone();
        let delay = delay.clone();
        async move {
            let input: Vec<i64> = (0..200).rev().collect();
            let mut observer = sender;
            run_sort(SortAlgorithm::Bubble, &input, &mut observer, &delay, &signal).await
        }
    });

    let mut snapshots = 0;
    while let Some(event) = receiver.recv().await {
        if let RunEvent::SequenceChanged(_) = event {
            snapshots += 1;
            if snapshots == 3 {
                signal.cancel();
            }
        }
    }

    let result = handle.await.unwrap();
    assert_eq!(result.unwrap_err(), RunError::Cancelled);
    // Cancelled at a suspension point, so at most the in flight step published more.
    assert!(snapshots <= 4);
}

#[tokio::test]
async fn test_delay_is_read_at_every_suspension() {
    let signal = CancellationSignal::default();
    let delay = Delay::from_millis(0);
    let mut observer = RecordingObserver::default();

    let outcome = run(
        RunRequest::Search {
            algorithm: SearchAlgorithm::Linear,
            target: 99.0,
        },
        &[1, 2, 3],
        &mut observer,
        &delay,
        &signal,
    )
    .await
    .unwrap();
    assert_eq!(outcome.suspensions, 3);

    // Same handle, new pacing, no new run needed to pick it up.
    delay.set_millis(15);
    let outcome = run(
        RunRequest::Search {
            algorithm: SearchAlgorithm::Linear,
            target: 99.0,
        },
        &[1, 2, 3],
        &mut observer,
        &delay,
        &signal,
    )
    .await
    .unwrap();
    assert!(outcome.stats.elapsed_ms >= 45);
}
