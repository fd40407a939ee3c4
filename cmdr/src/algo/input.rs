// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::miette;
use rand::{Rng, SeedableRng, rngs::StdRng};
use r3bl_algo_runner::{Algorithm, RunRequest};

use crate::algo::{InputOption, UIStrings};

/// How many random values to use when neither `--values` nor `--random` is given.
pub const DEFAULT_RANDOM_LEN: usize = 20;

/// Random values are whole numbers in this range, so radix sort can run on them.
pub const RANDOM_VALUE_RANGE: std::ops::Range<i32> = 1..100;

/// Work out the values to run on, from the command line options.
///
/// Random values are sorted before a search that needs sorted input. Values typed in
/// with `--values` are left alone, so the runner can reject them if they aren't sorted.
///
/// # Errors
///
/// Returns an error if `--values` has an item that isn't a number.
pub fn resolve_values(
    input_options: &InputOption,
    algorithm: Algorithm,
) -> miette::Result<Vec<f64>> {
    if let Some(text) = input_options.maybe_values.as_deref() {
        return parse_values(text);
    }

    let len = input_options.maybe_random_len.unwrap_or(DEFAULT_RANDOM_LEN);
    let mut values = random_values(len, input_options.maybe_seed);
    if matches!(algorithm, Algorithm::Search(it) if it.requires_sorted_input()) {
        values.sort_by(f64::total_cmp);
    }
    Ok(values)
}

/// Parse a comma separated list of numbers. Blank items (eg: a trailing comma) are
/// skipped.
///
/// # Errors
///
/// Returns an error naming the first item that isn't a number.
pub fn parse_values(text: &str) -> miette::Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .enumerate()
        .map(|(index, item)| {
            item.parse::<f64>().map_err(|_| {
                miette!(
                    code = "r3bl_algo_cmdr::bad_value",
                    help = "Separate numbers with commas, eg: `5,-3,8.5,1`.",
                    "{}",
                    UIStrings::NotANumber {
                        index,
                        item: item.to_string()
                    }
                )
            })
        })
        .collect()
}

/// `len` random whole numbers from [`RANDOM_VALUE_RANGE`]. The same `maybe_seed`
/// always gives the same values.
#[must_use]
pub fn random_values(len: usize, maybe_seed: Option<u64>) -> Vec<f64> {
    let mut rng = match maybe_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    (0..len)
        .map(|_| f64::from(rng.random_range(RANDOM_VALUE_RANGE)))
        .collect()
}

/// Pair the algorithm with its target, if it needs one.
///
/// # Errors
///
/// Returns an error if a search is asked for without a `--target`.
pub fn build_request(
    algorithm: Algorithm,
    maybe_target: Option<f64>,
) -> miette::Result<RunRequest> {
    match algorithm {
        Algorithm::Sort(it) => {
            if maybe_target.is_some() {
                tracing::warn!(algorithm = %it, "ignoring --target for a sort");
            }
            Ok(RunRequest::Sort(it))
        }
        Algorithm::Search(it) => match maybe_target {
            Some(target) => Ok(RunRequest::Search {
                algorithm: it,
                target,
            }),
            None => Err(miette!(
                code = "r3bl_algo_cmdr::missing_target",
                help = "Pass the value to look for, eg: `--target 7`.",
                "{}",
                UIStrings::SearchNeedsTarget { algorithm: it.to_string() }
            )),
        },
    }
}
