// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Entry points. Each call validates its input eagerly, makes a private working copy,
//! runs one algorithm to completion or cancellation, and hands back a [`RunOutcome`].
//! Nothing is kept between calls, so a cancelled run is never resumed. Start a fresh
//! one instead.

use serde::{Deserialize, Serialize};

use crate::{Algorithm, CancellationSignal, Delay, Element, MAX_EXACT_INTEGER, RunError,
            RunObserver, RunResult, RunStats, SearchAlgorithm, SortAlgorithm,
            StepContext, algorithms, integer_key};

/// What to run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunRequest {
    Sort(SortAlgorithm),
    Search {
        algorithm: SearchAlgorithm,
        target: f64,
    },
}

impl RunRequest {
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            RunRequest::Sort(it) => Algorithm::Sort(*it),
            RunRequest::Search { algorithm, .. } => Algorithm::Search(*algorithm),
        }
    }
}

/// How a run that was not cancelled ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Completion {
    Sorted,
    Found(usize),
    NotFound,
}

impl Completion {
    /// The plain integer result that UIs tend to expect: `0` for a finished sort, the
    /// index for a hit, and `-1` for a miss.
    #[must_use]
    pub fn result_code(self) -> i64 {
        match self {
            Completion::Sorted => 0,
            Completion::Found(index) => i64::try_from(index).unwrap_or(i64::MAX),
            Completion::NotFound => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome<T> {
    pub completion: Completion,
    /// The working copy, as the algorithm left it.
    pub sequence: Vec<T>,
    pub stats: RunStats,
    /// How many times the run yielded. Zero for inputs that finish immediately.
    pub suspensions: u64,
}

/// Run `request` against a copy of `sequence`.
///
/// # Errors
///
/// - [`RunError::InvalidInput`] if validation fails. Nothing is published in this
///   case.
/// - [`RunError::Cancelled`] if `signal` is set before the run starts, or at any point
///   while it runs. Whatever was published up to that point stays published.
#[tracing::instrument(
    level = "debug",
    name = "run",
    skip_all,
    fields(algorithm = %request.algorithm(), len = sequence.len())
)]
pub async fn run<T, O>(
    request: RunRequest,
    sequence: &[T],
    observer: &mut O,
    delay: &Delay,
    signal: &CancellationSignal,
) -> RunResult<RunOutcome<T>>
where
    T: Element,
    O: RunObserver<T>,
{
    if let Err(error) = validate(request, sequence) {
        tracing::warn!(%error, "rejected input");
        return Err(error);
    }

    if signal.is_cancelled() {
        tracing::info!("cancelled before start");
        return Err(RunError::Cancelled);
    }

    tracing::debug!(delay_ms = delay.millis(), "started");
    let mut ctx = StepContext::new(sequence, observer, delay, signal);

    let result = match request {
        RunRequest::Sort(algorithm) => sort_steps(algorithm, &mut ctx)
            .await
            .map(|()| Completion::Sorted),
        RunRequest::Search { algorithm, target } => {
            search_steps(algorithm, target, &mut ctx)
                .await
                .map(|maybe_index| maybe_index.map_or(Completion::NotFound, Completion::Found))
        }
    };

    match result {
        Ok(completion) => {
            ctx.refresh_elapsed();
            let (sequence, stats, suspensions) = ctx.into_parts();
            tracing::debug!(
                ?completion,
                comparisons = stats.comparisons,
                swaps = stats.swaps,
                elapsed_ms = stats.elapsed_ms,
                suspensions,
                "finished"
            );
            Ok(RunOutcome {
                completion,
                sequence,
                stats,
                suspensions,
            })
        }
        Err(error) => {
            let stats = ctx.stats();
            tracing::info!(
                comparisons = stats.comparisons,
                swaps = stats.swaps,
                suspensions = ctx.suspensions(),
                "stopped: {error}"
            );
            Err(error)
        }
    }
}

/// Shorthand for [`run()`] with [`RunRequest::Sort`].
///
/// # Errors
///
/// See [`run()`].
pub async fn run_sort<T, O>(
    algorithm: SortAlgorithm,
    sequence: &[T],
    observer: &mut O,
    delay: &Delay,
    signal: &CancellationSignal,
) -> RunResult<RunOutcome<T>>
where
    T: Element,
    O: RunObserver<T>,
{
    run(RunRequest::Sort(algorithm), sequence, observer, delay, signal).await
}

/// Shorthand for [`run()`] with [`RunRequest::Search`].
///
/// # Errors
///
/// See [`run()`].
pub async fn run_search<T, O>(
    algorithm: SearchAlgorithm,
    sequence: &[T],
    target: f64,
    observer: &mut O,
    delay: &Delay,
    signal: &CancellationSignal,
) -> RunResult<RunOutcome<T>>
where
    T: Element,
    O: RunObserver<T>,
{
    run(
        RunRequest::Search { algorithm, target },
        sequence,
        observer,
        delay,
        signal,
    )
    .await
}

async fn sort_steps<T, O>(
    algorithm: SortAlgorithm,
    ctx: &mut StepContext<'_, T, O>,
) -> RunResult<()>
where
    T: Element,
    O: RunObserver<T>,
{
    // Nothing to order, so no comparisons and no suspensions.
    if ctx.len() < 2 {
        ctx.publish_final();
        return Ok(());
    }

    match algorithm {
        SortAlgorithm::Bubble => algorithms::bubble_sort(ctx).await?,
        SortAlgorithm::Selection => algorithms::selection_sort(ctx).await?,
        SortAlgorithm::Insertion => algorithms::insertion_sort(ctx).await?,
        SortAlgorithm::Shell => algorithms::shell_sort(ctx).await?,
        SortAlgorithm::Cocktail => algorithms::cocktail_sort(ctx).await?,
        SortAlgorithm::Cycle => algorithms::cycle_sort(ctx).await?,
        SortAlgorithm::Strand => algorithms::strand_sort(ctx).await?,
        SortAlgorithm::Merge => algorithms::merge_sort(ctx).await?,
        SortAlgorithm::Quick => algorithms::quick_sort(ctx).await?,
        SortAlgorithm::Heap => algorithms::heap_sort(ctx).await?,
        SortAlgorithm::Intro => algorithms::intro_sort(ctx).await?,
        SortAlgorithm::Tim => algorithms::tim_sort(ctx).await?,
        SortAlgorithm::Radix => algorithms::radix_sort(ctx).await?,
        SortAlgorithm::Bucket => algorithms::bucket_sort(ctx).await?,
    }

    ctx.publish_final();
    Ok(())
}

async fn search_steps<T, O>(
    algorithm: SearchAlgorithm,
    target: f64,
    ctx: &mut StepContext<'_, T, O>,
) -> RunResult<Option<usize>>
where
    T: Element,
    O: RunObserver<T>,
{
    if ctx.is_empty() {
        return Ok(None);
    }

    let maybe_index = match algorithm {
        SearchAlgorithm::Linear => algorithms::linear_search(ctx, target).await?,
        SearchAlgorithm::Binary => algorithms::binary_search(ctx, target).await?,
        SearchAlgorithm::Jump => algorithms::jump_search(ctx, target).await?,
        SearchAlgorithm::Exponential => {
            algorithms::exponential_search(ctx, target).await?
        }
    };

    if let Some(index) = maybe_index {
        ctx.mark_sorted(index);
        ctx.publish_annotations(&[]);
    }
    Ok(maybe_index)
}

/// Eager input checks, so that a bad input fails before anything is published instead
/// of quietly producing garbage.
///
/// # Errors
///
/// Returns [`RunError::InvalidInput`] describing the first problem found.
pub fn validate<T: Element>(request: RunRequest, sequence: &[T]) -> RunResult<()> {
    for (index, item) in sequence.iter().enumerate() {
        let key = item.sort_key();
        if !key.is_finite() {
            return Err(RunError::invalid_input(format!(
                "key at index {index} is not a finite number ({key})"
            )));
        }
        if !item.is_key_exact() {
            return Err(RunError::invalid_input(format!(
                "key at index {index} ({item:?}) is too large to compare exactly, \
                 keep integers within {MAX_EXACT_INTEGER} in magnitude"
            )));
        }
    }

    match request {
        RunRequest::Sort(algorithm) if algorithm.requires_integer_keys() => {
            for (index, item) in sequence.iter().enumerate() {
                let key = item.sort_key();
                if integer_key(key).is_none() {
                    return Err(RunError::invalid_input(format!(
                        "{algorithm} sort needs whole number keys, index {index} is {key}"
                    )));
                }
            }
        }
        RunRequest::Sort(_) => {}
        RunRequest::Search { algorithm, target } => {
            if !target.is_finite() {
                return Err(RunError::invalid_input(format!(
                    "search target is not a finite number ({target})"
                )));
            }
            if algorithm.requires_sorted_input() {
                for (index, pair) in sequence.windows(2).enumerate() {
                    let (left, right) = (pair[0].sort_key(), pair[1].sort_key());
                    if left > right {
                        return Err(RunError::invalid_input(format!(
                            "{algorithm} search needs non-decreasing input, index \
                             {index} ({left}) is greater than index {} ({right})",
                            index + 1
                        )));
                    }
                }
            }
        }
    }

    Ok(())
}
