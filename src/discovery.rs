//! Config file discovery.
//!
//! The engine finds its configuration by name in the project root. The
//! first existing candidate wins.

use crate::error::{BreezeError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// File names checked in order.
pub const CONFIG_FILE_CANDIDATES: &[&str] = &[
    "breeze.config.yaml",
    "breeze.config.yml",
    "breeze.config.json",
    "tailwind.config.yaml",
    "tailwind.config.yml",
    "tailwind.config.json",
];

/// Find the config file in `root`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the first candidate that exists
/// * `Err(BreezeError::UserError)` - No candidate exists (exit code 1)
pub fn discover<P: AsRef<Path>>(root: P) -> Result<PathBuf> {
    let root = root.as_ref();

    CONFIG_FILE_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            BreezeError::UserError(format!(
                "no config file found in '{}' (looked for {})",
                root.display(),
                CONFIG_FILE_CANDIDATES.join(", ")
            ))
        })
}

/// Find the config file in the current working directory.
pub fn discover_from_cwd() -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| {
        BreezeError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    discover(cwd)
}
