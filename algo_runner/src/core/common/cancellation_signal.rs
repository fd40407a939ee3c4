// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc,
                atomic::{AtomicBool, Ordering}};

/// Shared stop flag between the caller (eg: a start / stop button) and a running
/// algorithm. Cloning it produces another handle to the **same** flag.
///
/// - The caller calls [`Self::cancel()`] to request a stop.
/// - The runner polls [`Self::is_cancelled()`] at every loop boundary and before and
///   after every suspension point. When it sees the flag set it unwinds with
///   [`crate::RunError::Cancelled`].
///
/// All operations use [`SeqCst`] ordering so callers never have to choose.
///
/// [`SeqCst`]: Ordering::SeqCst
#[derive(Debug, Clone, Default)]
pub struct CancellationSignal {
    inner: Arc<AtomicBool>,
}

impl CancellationSignal {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Request that the run stops at its next check.
    pub fn cancel(&self) { self.inner.store(true, Ordering::SeqCst) }

    #[must_use]
    pub fn is_cancelled(&self) -> bool { self.inner.load(Ordering::SeqCst) }

    /// Clear the flag, so the handle can be reused for a fresh run.
    pub fn reset(&self) { self.inner.store(false, Ordering::SeqCst) }
}
