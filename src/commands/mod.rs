//! Command implementations for breeze.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the config-path resolution they share.

mod check;
mod matches;
mod merge;
mod plugins;
mod show;

use crate::cli::Command;
use breeze::discovery;
use breeze::error::Result;
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Merge(args) => merge::cmd_merge(args),
        Command::Plugins(args) => plugins::cmd_plugins(args),
        Command::Matches(args) => matches::cmd_matches(args),
    }
}

/// Use the explicit path if given, otherwise discover one in the current directory.
fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => discovery::discover_from_cwd(),
    }
}
