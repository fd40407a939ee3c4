// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod annotation;
pub mod cancellation_signal;
pub mod delay;
pub mod element;
pub mod run_error;
pub mod run_stats;
pub mod work_stack;

// Re-export.
pub use annotation::*;
pub use cancellation_signal::*;
pub use delay::*;
pub use element::*;
pub use run_error::*;
pub use run_stats::*;
pub use work_stack::*;
