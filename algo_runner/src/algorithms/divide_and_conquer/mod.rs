// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Merge, quick, heap, intro, and tim sort. None of them recurse: pending ranges live
//! on a [`crate::WorkStack`] and heapify is a loop.

// Attach sources.
pub mod heap_sort;
pub mod intro_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod tim_sort;

// Re-export.
pub use heap_sort::*;
pub use intro_sort::*;
pub use merge_sort::*;
pub use quick_sort::*;
pub use tim_sort::*;
