// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::RunError;

/// Which family an algorithm belongs to. The `algo` help lists algorithms grouped by
/// this.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmFamily {
    ComparisonSort,
    DivideAndConquer,
    DistributionSort,
    Search,
}

impl AlgorithmFamily {
    pub fn all() -> impl Iterator<Item = AlgorithmFamily> { AlgorithmFamily::iter() }

    /// Every algorithm in this family, in [`Algorithm::all()`] order.
    pub fn members(self) -> impl Iterator<Item = Algorithm> {
        Algorithm::all().filter(move |it| it.family() == self)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::AsRefStr,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Shell,
    Cocktail,
    Cycle,
    Strand,
    Merge,
    Quick,
    Heap,
    Intro,
    Tim,
    Radix,
    Bucket,
}

impl SortAlgorithm {
    /// Stable sorts keep equal keys in their input order.
    #[must_use]
    pub fn is_stable(self) -> bool {
        match self {
            SortAlgorithm::Bubble
            | SortAlgorithm::Insertion
            | SortAlgorithm::Cocktail
            | SortAlgorithm::Strand
            | SortAlgorithm::Merge
            | SortAlgorithm::Tim
            | SortAlgorithm::Radix
            | SortAlgorithm::Bucket => true,
            SortAlgorithm::Selection
            | SortAlgorithm::Shell
            | SortAlgorithm::Cycle
            | SortAlgorithm::Quick
            | SortAlgorithm::Heap
            | SortAlgorithm::Intro => false,
        }
    }

    /// Radix sort works on digits, so it only accepts whole number keys.
    #[must_use]
    pub fn requires_integer_keys(self) -> bool { matches!(self, SortAlgorithm::Radix) }

    #[must_use]
    pub fn family(self) -> AlgorithmFamily {
        match self {
            SortAlgorithm::Bubble
            | SortAlgorithm::Selection
            | SortAlgorithm::Insertion
            | SortAlgorithm::Shell
            | SortAlgorithm::Cocktail
            | SortAlgorithm::Cycle
            | SortAlgorithm::Strand => AlgorithmFamily::ComparisonSort,
            SortAlgorithm::Merge
            | SortAlgorithm::Quick
            | SortAlgorithm::Heap
            | SortAlgorithm::Intro
            | SortAlgorithm::Tim => AlgorithmFamily::DivideAndConquer,
            SortAlgorithm::Radix | SortAlgorithm::Bucket => {
                AlgorithmFamily::DistributionSort
            }
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::AsRefStr,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    Linear,
    Binary,
    Jump,
    Exponential,
}

impl SearchAlgorithm {
    /// Everything except linear search assumes a non-decreasing sequence.
    #[must_use]
    pub fn requires_sorted_input(self) -> bool { !matches!(self, SearchAlgorithm::Linear) }
}

/// Any algorithm, by name. Sort and search names don't overlap, so a bare name like
/// `"quick"` or `"jump"` is enough to pick one.
///
/// ```
/// # use r3bl_algo_runner::{Algorithm, SearchAlgorithm, SortAlgorithm};
/// assert_eq!("tim".parse::<Algorithm>().unwrap(), Algorithm::Sort(SortAlgorithm::Tim));
/// assert_eq!(
///     "exponential".parse::<Algorithm>().unwrap(),
///     Algorithm::Search(SearchAlgorithm::Exponential)
/// );
/// assert_eq!(Algorithm::Sort(SortAlgorithm::Bucket).to_string(), "bucket");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Algorithm {
    Sort(SortAlgorithm),
    Search(SearchAlgorithm),
}

impl Algorithm {
    /// Every algorithm, sorts first, in declaration order.
    pub fn all() -> impl Iterator<Item = Algorithm> {
        SortAlgorithm::iter()
            .map(Algorithm::Sort)
            .chain(SearchAlgorithm::iter().map(Algorithm::Search))
    }

    #[must_use]
    pub fn family(self) -> AlgorithmFamily {
        match self {
            Algorithm::Sort(it) => it.family(),
            Algorithm::Search(_) => AlgorithmFamily::Search,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sort(it) => it.into(),
            Algorithm::Search(it) => it.into(),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = RunError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if let Ok(it) = SortAlgorithm::from_str(name) {
            return Ok(Algorithm::Sort(it));
        }
        if let Ok(it) = SearchAlgorithm::from_str(name) {
            return Ok(Algorithm::Search(it));
        }
        Err(RunError::invalid_input(format!("unknown algorithm `{name}`")))
    }
}
