// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod observer_fixtures;
pub mod run_fixtures;

// Re-export.
pub use observer_fixtures::*;
pub use run_fixtures::*;
