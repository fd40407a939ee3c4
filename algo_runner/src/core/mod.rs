// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Low level building blocks shared by the engine and every algorithm: the element and
//! annotation types, stats, the cancellation and delay handles, errors, logging setup,
//! and test fixtures.

// Attach sources.
pub mod common;
pub mod decl_macros;
pub mod log;
pub mod test_fixtures;

// Re-export.
pub use common::*;
pub use decl_macros::*;
pub use log::*;
pub use test_fixtures::*;
