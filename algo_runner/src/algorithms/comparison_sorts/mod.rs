// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! "Scan, compare, conditionally swap, annotate". All of these sort in place on the
//! working copy. Bubble, insertion, cocktail, and strand sort are stable. Selection,
//! shell, and cycle sort are not.

// Attach sources.
pub mod bubble_sort;
pub mod cocktail_sort;
pub mod cycle_sort;
pub mod insertion_sort;
pub mod selection_sort;
pub mod shell_sort;
pub mod strand_sort;

// Re-export.
pub use bubble_sort::*;
pub use cocktail_sort::*;
pub use cycle_sort::*;
pub use insertion_sort::*;
pub use selection_sort::*;
pub use shell_sort::*;
pub use strand_sort::*;
