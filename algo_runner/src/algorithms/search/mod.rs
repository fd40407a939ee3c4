// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Searches report the index of a key equal to the target, or [None]. Every probe is
//! one comparison against the target, and one suspension. Binary, jump, and exponential
//! search assume a non-decreasing sequence, which [`crate::run()`] checks up front.

// Attach sources.
pub mod binary_search;
pub mod exponential_search;
pub mod jump_search;
pub mod linear_search;

// Re-export.
pub use binary_search::*;
pub use exponential_search::*;
pub use jump_search::*;
pub use linear_search::*;
