//! Configuration document model for breeze.
//!
//! This module defines `ConfigDocument`, the in-memory form of a framework
//! configuration file. It supports YAML and JSON input, forward-compatible
//! parsing (unknown keys are ignored), validation of field values, and
//! merging of documents.

mod merging;
mod model;
mod operations;
pub mod types;


// Re-export public API
pub use merging::merge;
pub use model::{ConfigDocument, Theme, ThemeExtend};
pub use types::{DarkMode, DarkModeSetting, FontSize, FontSizeOptions, Format, PluginRef};
