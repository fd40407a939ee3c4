// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{sync::{Arc,
                 atomic::{AtomicU64, Ordering}},
          time::Duration};

/// How long the runner pauses at each suspension point, in milliseconds. Cloning it
/// produces another handle to the **same** value, so a UI slider can keep one clone and
/// change the pace of a run that is already in progress. The runner reads the value
/// fresh at every suspension point.
///
/// A delay of zero still yields to the tokio scheduler (see
/// [`crate::StepContext::suspend()`]), it just doesn't sleep.
#[derive(Debug, Clone, Default)]
pub struct Delay {
    millis: Arc<AtomicU64>,
}

impl Delay {
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis)),
        }
    }

    pub fn set_millis(&self, millis: u64) { self.millis.store(millis, Ordering::SeqCst) }

    #[must_use]
    pub fn millis(&self) -> u64 { self.millis.load(Ordering::SeqCst) }

    #[must_use]
    pub fn get(&self) -> Duration { Duration::from_millis(self.millis()) }
}
