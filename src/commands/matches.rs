//! Implementation of the `breeze matches` command.
//!
//! Tells whether template paths fall under the content globs. No files are
//! read or walked; only the given paths are tested.

use crate::cli::MatchesArgs;
use breeze::ConfigDocument;
use breeze::error::Result;
use breeze::validate::ContentGlobs;
use std::path::Path;

/// Execute the `breeze matches` command.
pub fn cmd_matches(args: MatchesArgs) -> Result<()> {
    let path = super::resolve_config_path(args.config)?;
    let config = ConfigDocument::load(&path)?;
    let globs = config.content_globs()?;

    for file in &args.files {
        println!("{}", describe_match(&globs, file));
    }
    Ok(())
}

fn describe_match(globs: &ContentGlobs, file: &Path) -> String {
    match globs.matching_pattern(file) {
        Some(pattern) => format!("{}: matched by '{}'", file.display(), pattern),
        None => format!("{}: not matched", file.display()),
    }
}
