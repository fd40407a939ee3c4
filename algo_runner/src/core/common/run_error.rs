// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias for results produced by the runner and every algorithm step.
pub type RunResult<T> = Result<T, RunError>;

/// Everything that can end a run early.
///
/// - [`RunError::Cancelled`] is the only error raised while stepping. Helpers such as
///   partition, heapify, and merge never catch it, they just `?` it up to the top of the
///   run. The caller is expected to show a neutral "stopped" status for it.
/// - [`RunError::InvalidInput`] is raised by eager validation, before the first step.
///   Treat it as a fault.
#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum RunError {
    #[error("⏹️ Run was cancelled")]
    #[diagnostic(
        code(r3bl_algo_runner::cancelled),
        help("The cancellation signal was set while the algorithm was running.")
    )]
    Cancelled,

    #[error("❌ Invalid input: {reason}")]
    #[diagnostic(code(r3bl_algo_runner::invalid_input))]
    InvalidInput { reason: String },
}

impl RunError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool { matches!(self, RunError::Cancelled) }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        RunError::InvalidInput {
            reason: reason.into(),
        }
    }
}
