// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The stepping engine ([`StepContext`]), the observer seam ([`RunObserver`]), and the
//! entry points ([`run()`], [`run_sort()`], [`run_search()`]).

// Attach sources.
pub mod algorithm;
pub mod observer;
pub mod run_api;
pub mod step_context;

// Re-export.
pub use algorithm::*;
pub use observer::*;
pub use run_api::*;
pub use step_context::*;
