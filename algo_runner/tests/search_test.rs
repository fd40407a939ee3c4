// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use r3bl_algo_runner::{Completion, RunError, RunRequest, SearchAlgorithm, run_recorded,
                       search_recorded};
use strum::IntoEnumIterator;
use test_case::test_case;

#[tokio::test]
async fn test_every_present_value_is_found_at_its_index() {
    let input: Vec<i64> = (0..37).map(|it| it * 3 - 20).collect();

    for algorithm in SearchAlgorithm::iter() {
        for (index, value) in input.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let target = *value as f64;
            let (outcome, _) = search_recorded(algorithm, &input, target).await;
            assert_eq!(outcome.completion, Completion::Found(index), "{algorithm}");
            assert_eq!(outcome.completion.result_code(), i64::try_from(index).unwrap());
            // Searching never reorders anything.
            assert_eq!(outcome.sequence, input);
        }
    }
}

#[tokio::test]
async fn test_absent_values_return_minus_one() {
    let input = [2.0, 4.0, 6.0, 8.0, 10.0];

    for algorithm in SearchAlgorithm::iter() {
        for target in [1.0, 5.0, 11.0, 6.5] {
            let (outcome, _) = search_recorded(algorithm, &input, target).await;
            assert_eq!(outcome.completion, Completion::NotFound, "{algorithm} {target}");
            assert_eq!(outcome.completion.result_code(), -1);
        }
    }
}

#[tokio::test]
async fn test_empty_input_returns_immediately() {
    let input: [i32; 0] = [];

    for algorithm in SearchAlgorithm::iter() {
        let (outcome, observer) = search_recorded(algorithm, &input, 3.0).await;
        assert_eq!(outcome.completion, Completion::NotFound);
        assert_eq!(outcome.suspensions, 0);
        assert_eq!(outcome.stats.comparisons, 0);
        assert!(observer.sequence_snapshots().is_empty());
    }
}

#[test_case(SearchAlgorithm::Linear, 4)]
#[test_case(SearchAlgorithm::Binary, 3)]
#[test_case(SearchAlgorithm::Jump, 4)]
#[test_case(SearchAlgorithm::Exponential, 5)]
#[tokio::test]
async fn test_probe_counts_for_seven(algorithm: SearchAlgorithm, comparisons: u64) {
    let (outcome, _) = search_recorded(algorithm, &[1, 3, 5, 7, 9, 11], 7.0).await;
    assert_eq!(outcome.completion, Completion::Found(3));
    assert_eq!(outcome.stats.comparisons, comparisons);
    assert_eq!(outcome.suspensions, comparisons);
}

#[tokio::test]
async fn test_sorted_only_searches_reject_unsorted_input() {
    let input = [5, 1, 4];

    for algorithm in SearchAlgorithm::iter() {
        let (result, observer) =
            run_recorded(RunRequest::Search { algorithm, target: 4.0 }, &input).await;
        if algorithm.requires_sorted_input() {
            assert!(
                matches!(result, Err(RunError::InvalidInput { .. })),
                "{algorithm}"
            );
            assert!(observer.events.is_empty());
        } else {
            assert_eq!(result.unwrap().completion, Completion::Found(2));
        }
    }
}
