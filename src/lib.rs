//! Breeze: settings loader for utility-class CSS framework configuration.
//!
//! Reads a YAML or JSON configuration file, validates it, merges presets,
//! and hands a typed [`ConfigDocument`] to the generation engine.
//!
//! ```no_run
//! let config = breeze::ConfigDocument::load("tailwind.config.yaml")?;
//! println!("dark mode: {}", config.dark_mode());
//! # Ok::<(), breeze::BreezeError>(())
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod exit_codes;
pub mod loader;
pub mod logging;
pub mod plugins;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{ConfigDocument, DarkMode, Format, merge};
pub use error::{BreezeError, Result};
pub use loader::Loader;
pub use plugins::PluginRegistry;
