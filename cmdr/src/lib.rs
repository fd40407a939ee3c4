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
//!
//! - [Introduction](#introduction)
//! - [Installation](#installation)
//! - [Run algo binary target](#run-algo-binary-target)
//!
//! <!-- /TOC -->
//!
//! # Introduction
//!
//! `algo` is a small command line app built on
//! [`r3bl_algo_runner`](https://docs.rs/r3bl_algo_runner). It runs one sorting or
//! searching algorithm against a list of numbers, and prints each step as it happens:
//! the sequence, what the algorithm is looking at, and the running comparison and swap
//! counts. The pace is set with `--delay-ms`, and `Ctrl+C` stops the run at the next
//! step.
//!
//! # Installation
//!
//! ```bash
//! cargo install r3bl-algo-cmdr
//! ```
//!
//! # Run `algo` binary target
//!
//! - Try `algo --help` to see the available options.
//! - Sort some numbers: `algo bubble --values 5,4,3,2,1`.
//! - Sort random numbers, reproducibly: `algo quick --random 30 --seed 7 --delay-ms 20`.
//! - Search: `algo binary --values 1,3,5,7,9,11 --target 7`. Random values are sorted
//!   first for searches that need sorted input.
//! - Print only the final outcome as JSON: `algo tim --random 100 --delay-ms 0 --json`.
//! - If you want to generate log output for `algo`, run `algo -l ...`. The log is
//!   written to `log.txt` in the current folder.

// Enforce strict error handling in production library code only. Tests are allowed to use
// .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod algo;

// Re-export.
pub use algo::*;
