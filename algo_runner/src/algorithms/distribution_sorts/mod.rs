// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sorts that move elements by key value instead of comparing them pairwise. Every
//! element placement counts as a swap, even though nothing is literally swapped.

// Attach sources.
pub mod bucket_sort;
pub mod radix_sort;

// Re-export.
pub use bucket_sort::*;
pub use radix_sort::*;
