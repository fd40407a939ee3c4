// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// Visual tag for a single index of the sequence. A full array of these, one per index,
/// is rebuilt from scratch every time the runner publishes annotations. They carry no
/// meaning back into the algorithm, they only describe the current step.
///
/// - [`Annotation::Sorted`] is sticky: once the final position of an index is known the
///   runner marks it, and every later annotation array keeps it marked.
/// - The other tags are highlights for the current step only.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Annotation {
    #[default]
    Default,
    Comparing,
    Swapping,
    Pivot,
    Sorted,
}

/// A highlight for the current step: which index, and how to tag it.
pub type Highlight = (usize, Annotation);
