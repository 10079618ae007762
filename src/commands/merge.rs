//! Implementation of the `breeze merge` command.
//!
//! Both inputs are loaded as fragments (presets resolved, `content` may be
//! absent); the merged result must be a complete, valid document.

use super::show::with_trailing_newline;
use crate::cli::MergeArgs;
use breeze::error::Result;
use breeze::{ConfigDocument, Loader, merge};
use tracing::info;

/// Execute the `breeze merge` command.
pub fn cmd_merge(args: MergeArgs) -> Result<()> {
    let merged = merge_files(&args)?;
    print!("{}", with_trailing_newline(merged.to_format(args.format)?));
    Ok(())
}

fn merge_files(args: &MergeArgs) -> Result<ConfigDocument> {
    let base = Loader::for_config_file(&args.base).load_fragment(&args.base)?;
    let overrides_loader = Loader::for_config_file(&args.overrides);
    let overrides = overrides_loader.load_fragment(&args.overrides)?;

    let merged = merge(&base, &overrides);
    merged.validate(overrides_loader.registry())?;
    info!(
        base = %args.base.display(),
        overrides = %args.overrides.display(),
        "merged config documents"
    );
    Ok(merged)
}
