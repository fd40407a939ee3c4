// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One async function per algorithm. Each one takes a [`crate::StepContext`], drives it
//! one visible step at a time, and returns as soon as a step reports
//! [`crate::RunError::Cancelled`].
//!
//! Shared building blocks are public so the hybrids can reuse them:
//! - [`insertion_sort_range()`] for intro sort's small ranges and tim sort's runs.
//! - [`lomuto_partition()`] for quick and intro sort.
//! - [`heap_sort_range()`] for intro sort's fallback.
//! - [`merge_adjacent()`] for merge and tim sort.
//! - [`binary_search_range()`] for exponential search.

// Attach sources.
pub mod comparison_sorts;
pub mod distribution_sorts;
pub mod divide_and_conquer;
pub mod search;

// Re-export.
pub use comparison_sorts::*;
pub use distribution_sorts::*;
pub use divide_and_conquer::*;
pub use search::*;
