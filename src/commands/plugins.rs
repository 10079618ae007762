//! Implementation of the `breeze plugins` command.

use super::resolve_config_path;
use crate::cli::ConfigArgs;
use breeze::error::Result;
use breeze::plugins::{PluginSource, ResolvedPlugin};
use breeze::{ConfigDocument, Loader};

/// Execute the `breeze plugins` command.
///
/// Lists the resolved plugins in load order.
pub fn cmd_plugins(args: ConfigArgs) -> Result<()> {
    let path = resolve_config_path(args.config)?;
    let loader = Loader::for_config_file(&path);
    let config: ConfigDocument = loader.load(&path)?;
    let resolved = config.resolve_plugins(loader.registry())?;

    if resolved.is_empty() {
        println!("No plugins configured.");
        return Ok(());
    }

    for (i, plugin) in resolved.iter().enumerate() {
        println!("{}", format_plugin(i + 1, plugin));
    }
    Ok(())
}

fn format_plugin(position: usize, plugin: &ResolvedPlugin) -> String {
    let source = match &plugin.source {
        PluginSource::FirstParty => "first-party".to_string(),
        PluginSource::Registered => "registered".to_string(),
        PluginSource::Installed(dir) => format!("installed at {}", dir.display()),
    };
    format!("{:>2}. {} ({})", position, plugin.package, source)
}
