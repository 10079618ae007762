//! CLI argument parsing for breeze.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use breeze::Format;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Breeze: load and validate utility-class CSS framework configuration.
///
/// The config file is YAML or JSON. When no path is given, breeze looks for
/// `breeze.config.{yaml,yml,json}` or `tailwind.config.{yaml,yml,json}` in
/// the current directory.
#[derive(Parser, Debug)]
#[command(name = "breeze")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). BREEZE_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for breeze.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load and validate a config file.
    ///
    /// Prints a one-line summary on success.
    Check(ConfigArgs),

    /// Print the resolved config document (presets merged).
    Show(ShowArgs),

    /// Merge an override document on top of a base document and print the result.
    Merge(MergeArgs),

    /// List the plugins a config loads, in order, with where each resolved.
    Plugins(ConfigArgs),

    /// Report whether a template file is covered by the content globs.
    Matches(MatchesArgs),
}

/// Arguments for commands that operate on one config file.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Path to the config file. Discovered in the current directory if omitted.
    pub config: Option<PathBuf>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Path to the config file. Discovered in the current directory if omitted.
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    pub format: Format,
}

/// Arguments for the `merge` command.
#[derive(Parser, Debug)]
pub struct MergeArgs {
    /// Base document.
    pub base: PathBuf,

    /// Document whose values take precedence.
    pub overrides: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    pub format: Format,
}

/// Arguments for the `matches` command.
#[derive(Parser, Debug)]
pub struct MatchesArgs {
    /// Template paths to test, relative to the project root.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Path to the config file. Discovered in the current directory if omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_without_path() {
        let cli = Cli::try_parse_from(["breeze", "check"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert!(args.config.is_none());
        } else {
            panic!("Expected Check command");
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_check_with_path_and_verbosity() {
        let cli =
            Cli::try_parse_from(["breeze", "-vv", "check", "site/tailwind.config.yaml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        if let Command::Check(args) = cli.command {
            assert_eq!(args.config, Some(PathBuf::from("site/tailwind.config.yaml")));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_show_defaults_to_yaml() {
        let cli = Cli::try_parse_from(["breeze", "show"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.format, Format::Yaml);
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn parse_show_json() {
        let cli = Cli::try_parse_from(["breeze", "show", "--format", "json"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.format, Format::Json);
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn parse_merge() {
        let cli = Cli::try_parse_from(["breeze", "merge", "base.yaml", "site.yaml", "-f", "json"])
            .unwrap();
        if let Command::Merge(args) = cli.command {
            assert_eq!(args.base, PathBuf::from("base.yaml"));
            assert_eq!(args.overrides, PathBuf::from("site.yaml"));
            assert_eq!(args.format, Format::Json);
        } else {
            panic!("Expected Merge command");
        }
    }

    #[test]
    fn parse_merge_requires_two_paths() {
        assert!(Cli::try_parse_from(["breeze", "merge", "base.yaml"]).is_err());
    }

    #[test]
    fn parse_matches() {
        let cli = Cli::try_parse_from([
            "breeze",
            "matches",
            "templates/index.html",
            "static/app.js",
            "--config",
            "tailwind.config.yaml",
        ])
        .unwrap();
        if let Command::Matches(args) = cli.command {
            assert_eq!(args.files.len(), 2);
            assert_eq!(args.config, Some(PathBuf::from("tailwind.config.yaml")));
        } else {
            panic!("Expected Matches command");
        }
    }

    #[test]
    fn parse_matches_requires_a_file() {
        assert!(Cli::try_parse_from(["breeze", "matches"]).is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["breeze", "show", "--format", "toml"]).is_err());
    }
}
