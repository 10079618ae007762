//! Implementation of the `breeze show` command.
//!
//! Prints the resolved document, presets merged, in YAML or JSON.

use super::resolve_config_path;
use crate::cli::ShowArgs;
use breeze::ConfigDocument;
use breeze::error::Result;

/// Execute the `breeze show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let path = resolve_config_path(args.config)?;
    let config = ConfigDocument::load(&path)?;
    let rendered = config.to_format(args.format)?;
    print!("{}", with_trailing_newline(rendered));
    Ok(())
}

pub(super) fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use breeze::Format;

    #[test]
    fn trailing_newline_added_once() {
        assert_eq!(with_trailing_newline("{}".to_string()), "{}\n");
        assert_eq!(with_trailing_newline("a: 1\n".to_string()), "a: 1\n");
    }

    #[test]
    fn show_succeeds_for_valid_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("tailwind.config.json");
        std::fs::write(&path, r#"{"content": ["a.html"]}"#).unwrap();

        cmd_show(ShowArgs {
            config: Some(path),
            format: Format::Json,
        })
        .unwrap();
    }
}
