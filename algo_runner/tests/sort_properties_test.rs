// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Properties that must hold for every sort, checked on seeded random inputs.

use pretty_assertions::assert_eq;
use r3bl_algo_runner::{CancellationSignal, Completion, Delay, Element, RecordingObserver,
                       RunOutcome, SortAlgorithm, run_sort, sort_recorded};
use rand::{Rng, SeedableRng, rngs::StdRng};
use strum::IntoEnumIterator;
use test_case::test_case;

const LENGTHS: [usize; 7] = [0, 1, 2, 3, 17, 64, 130];

fn random_ints(seed: u64, len: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-50..50)).collect()
}

async fn sort_quietly<T: Element>(algorithm: SortAlgorithm, input: &[T]) -> RunOutcome<T> {
    run_sort(
        algorithm,
        input,
        &mut (),
        &Delay::default(),
        &CancellationSignal::default(),
    )
    .await
    .unwrap()
}

fn is_non_decreasing<T: Element>(items: &[T]) -> bool {
    items
        .windows(2)
        .all(|pair| pair[0].sort_key() <= pair[1].sort_key())
}

#[tokio::test]
async fn test_every_sort_returns_a_sorted_permutation() {
    for algorithm in SortAlgorithm::iter() {
        for (seed, len) in LENGTHS.into_iter().enumerate() {
            let input = random_ints(seed as u64, len);
            let outcome = sort_quietly(algorithm, &input).await;

            let mut expected = input.clone();
            expected.sort_unstable();
            assert_eq!(outcome.sequence, expected, "{algorithm} on {input:?}");
            assert_eq!(outcome.completion, Completion::Sorted);
            assert_eq!(outcome.completion.result_code(), 0);
        }
    }
}

#[tokio::test]
async fn test_float_keys() {
    let input = [2.5, -0.25, 9.75, 2.5, 0.0, -7.5, 3.125];
    let mut expected = input.to_vec();
    expected.sort_by(f64::total_cmp);

    for algorithm in SortAlgorithm::iter().filter(|it| !it.requires_integer_keys()) {
        let outcome = sort_quietly(algorithm, &input).await;
        assert_eq!(outcome.sequence, expected, "{algorithm}");
    }
}

#[tokio::test]
async fn test_stable_sorts_keep_equal_keys_in_input_order() {
    let keys = random_ints(7, 90);
    // Few distinct keys, so there are lots of ties.
    let input: Vec<(i64, usize)> = keys
        .iter()
        .enumerate()
        .map(|(id, key)| (key.rem_euclid(5), id))
        .collect();
    let mut expected = input.clone();
    expected.sort_by_key(|(key, _)| *key);

    for algorithm in SortAlgorithm::iter().filter(|it| it.is_stable()) {
        let outcome = sort_quietly(algorithm, &input).await;
        assert_eq!(outcome.sequence, expected, "{algorithm} is not stable");
    }
}

#[tokio::test]
async fn test_sorting_sorted_input_changes_nothing() {
    let mut input = random_ints(11, 40);
    input.sort_unstable();

    for algorithm in SortAlgorithm::iter() {
        let outcome = sort_quietly(algorithm, &input).await;
        assert_eq!(outcome.sequence, input, "{algorithm}");
    }
}

#[tokio::test]
async fn test_stats_are_monotonic_and_deterministic() {
    let input = random_ints(3, 24);

    for algorithm in SortAlgorithm::iter() {
        let (first, observer) = sort_recorded(algorithm, &input).await;
        let (second, _) = sort_recorded(algorithm, &input).await;

        let history = observer.stats_history();
        for pair in history.windows(2) {
            assert!(pair[0].comparisons <= pair[1].comparisons, "{algorithm}");
            assert!(pair[0].swaps <= pair[1].swaps, "{algorithm}");
            assert!(pair[0].elapsed_ms <= pair[1].elapsed_ms, "{algorithm}");
        }

        let merged = observer.final_stats();
        assert_eq!(merged.comparisons, first.stats.comparisons, "{algorithm}");
        assert_eq!(merged.swaps, first.stats.swaps, "{algorithm}");

        assert_eq!(first.stats.comparisons, second.stats.comparisons, "{algorithm}");
        assert_eq!(first.stats.swaps, second.stats.swaps, "{algorithm}");
    }
}

#[tokio::test]
async fn test_published_snapshots_are_full_copies() {
    let input = random_ints(5, 12);

    for algorithm in SortAlgorithm::iter() {
        let mut observer = RecordingObserver::default();
        let outcome = run_sort(
            algorithm,
            &input,
            &mut observer,
            &Delay::default(),
            &CancellationSignal::default(),
        )
        .await
        .unwrap();

        for snapshot in observer.sequence_snapshots() {
            assert_eq!(snapshot.len(), input.len(), "{algorithm}");
        }
        for annotations in observer.annotation_snapshots() {
            assert_eq!(annotations.len(), input.len(), "{algorithm}");
        }
        assert!(is_non_decreasing(&outcome.sequence));
    }
}

#[test_case(SortAlgorithm::Bubble, 10, 10)]
#[test_case(SortAlgorithm::Insertion, 10, 10)]
#[test_case(SortAlgorithm::Selection, 10, 2)]
#[test_case(SortAlgorithm::Cocktail, 10, 10)]
#[test_case(SortAlgorithm::Merge, 7, 12)]
#[tokio::test]
async fn test_exact_counts_on_reversed_five(
    algorithm: SortAlgorithm,
    comparisons: u64,
    swaps: u64,
) {
    let (outcome, _) = sort_recorded(algorithm, &[5, 4, 3, 2, 1]).await;
    assert_eq!(outcome.sequence, vec![1, 2, 3, 4, 5]);
    assert_eq!(outcome.stats.comparisons, comparisons);
    assert_eq!(outcome.stats.swaps, swaps);
}

#[tokio::test]
async fn test_empty_and_single_complete_without_work() {
    for algorithm in SortAlgorithm::iter() {
        for input in [vec![], vec![42_i64]] {
            let (outcome, _) = sort_recorded(algorithm, &input).await;
            assert_eq!(outcome.sequence, input);
            assert_eq!(outcome.stats.comparisons, 0, "{algorithm}");
            assert_eq!(outcome.suspensions, 0, "{algorithm}");
        }
    }
}
