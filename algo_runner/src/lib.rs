// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Why R3BL?
//!
//! Please read the main
//! [README.md](https://github.com/r3bl-org/r3bl-open-core/blob/main/README.md) of the
//! `r3bl-open-core` monorepo and workspace to get a better understanding of the context
//! in which this crate is meant to exist.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//! - [Introduction](#introduction)
//! - [How a run works](#how-a-run-works)
//! - [Algorithms](#algorithms)
//! - [Cancellation and pacing](#cancellation-and-pacing)
//! - [Observing a run](#observing-a-run)
//! <!-- /TOC -->
//!
//! # Introduction
//!
//! This crate runs classic sorting and searching algorithms one visible step at a time,
//! so that a UI (a TUI, a web page, a test) can animate them. Each algorithm is written
//! against a single stepping engine, the [`StepContext`], which provides:
//!
//! 1. A suspension point ([`StepContext::suspend()`]) that yields to the tokio runtime
//!    for the current [`Delay`].
//! 2. A cancellation check ([`StepContext::check_cancelled()`]) that polls a shared
//!    [`CancellationSignal`].
//! 3. A publisher that hands full copy snapshots of the sequence, the per-index
//!    [`Annotation`]s, and the running [`RunStats`] to a [`RunObserver`].
//!
//! # How a run works
//!
//! ```
//! # use r3bl_algo_runner::{run_sort, CancellationSignal, Delay, SortAlgorithm, Completion};
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> miette::Result<()> {
//! let delay = Delay::from_millis(0);
//! let signal = CancellationSignal::default();
//! let outcome = run_sort(SortAlgorithm::Bubble, &[5, 4, 3, 2, 1], &mut (), &delay, &signal)
//!     .await?;
//!
//! assert_eq!(outcome.completion, Completion::Sorted);
//! assert_eq!(outcome.sequence, vec![1, 2, 3, 4, 5]);
//! assert_eq!(outcome.stats.comparisons, 10);
//! assert_eq!(outcome.stats.swaps, 10);
//! # Ok(())
//! # }
//! ```
//!
//! The caller's slice is never mutated. The runner works on a private working copy and
//! returns it in the [`RunOutcome`].
//!
//! # Algorithms
//!
//! | Family             | Members                                                        |
//! |--------------------|----------------------------------------------------------------|
//! | Comparison sorts   | bubble, selection, insertion, shell, cocktail, cycle, strand   |
//! | Divide and conquer | merge, quick, heap, intro, tim                                 |
//! | Distribution sorts | radix, bucket                                                  |
//! | Searches           | linear, binary, jump, exponential                              |
//!
//! None of the algorithms recurse. Merge, quick, and intro sort keep their pending
//! ranges on an explicit [`WorkStack`], and heapify is a loop, so deep or adversarial
//! inputs can't overflow the native stack.
//!
//! # Cancellation and pacing
//!
//! [`CancellationSignal`] and [`Delay`] are cheap to clone handles to shared atomics.
//! Keep a clone in your UI, and hand a reference to the runner. Setting the signal makes
//! the run return [`RunError::Cancelled`] at the next loop boundary or suspension point.
//! Changing the delay takes effect at the next suspension point.
//!
//! # Observing a run
//!
//! Implement [`RunObserver`], or use one of the provided ones:
//! - `()` ignores everything.
//! - [`ObserverFns`] takes closures for each kind of change.
//! - A [`tokio::sync::mpsc::UnboundedSender`] of [`RunEvent`] forwards every change to
//!   another task that owns the UI state.

// Enforce strict error handling in production library code only. Tests are allowed to use
// .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod algorithms;
pub mod core;
pub mod engine;

// Re-export.
pub use algorithms::*;
pub use crate::core::*;
pub use engine::*;
