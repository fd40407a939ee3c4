// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Include.
pub mod clap_config;
pub mod input;
pub mod launcher;
pub mod ui_str;
pub mod ui_templates;

// Reexport.
pub use clap_config::*;
pub use input::*;
pub use launcher::*;
pub use ui_str::*;
pub use ui_templates::*;
