//! Implementation of the `breeze check` command.

use super::resolve_config_path;
use crate::cli::ConfigArgs;
use breeze::ConfigDocument;
use breeze::error::Result;
use std::path::Path;

/// Execute the `breeze check` command.
///
/// Loads and validates the config; any failure propagates with its exit code.
pub fn cmd_check(args: ConfigArgs) -> Result<()> {
    let path = resolve_config_path(args.config)?;
    let config = ConfigDocument::load(&path)?;
    println!("{}", summarize(&path, &config));
    Ok(())
}

/// One-line summary of a valid config.
pub(super) fn summarize(path: &Path, config: &ConfigDocument) -> String {
    let mut summary = format!(
        "{}: ok ({} content pattern{}, darkMode {}",
        path.display(),
        config.content().len(),
        plural(config.content().len()),
        config.dark_mode()
    );
    if let Some(selector) = config.dark_mode_selector() {
        summary.push_str(&format!(" '{}'", selector));
    }
    let font_sizes = config.theme.extend.font_size.len();
    let plugins = config.plugins().len();
    summary.push_str(&format!(
        ", {} font size{}, {} plugin{})",
        font_sizes,
        plural(font_sizes),
        plugins,
        plural(plugins)
    ));
    summary
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_fields() {
        let config = ConfigDocument::from_yaml(
            r#"
content: ["./templates/**/*.html"]
darkMode: class
theme: {extend: {fontSize: {sm: 1rem, base: 1.25rem}}}
plugins: [typography]
"#,
        )
        .unwrap();

        let summary = summarize(Path::new("tailwind.config.yaml"), &config);

        assert_eq!(
            summary,
            "tailwind.config.yaml: ok (1 content pattern, darkMode class, 2 font sizes, 1 plugin)"
        );
    }

    #[test]
    fn summary_includes_custom_selector() {
        let config = ConfigDocument::from_yaml(
            r#"
content: [a.html, b.html]
darkMode: [selector, ".night"]
"#,
        )
        .unwrap();

        let summary = summarize(Path::new("c.yaml"), &config);

        assert_eq!(
            summary,
            "c.yaml: ok (2 content patterns, darkMode selector '.night', 0 font sizes, 0 plugins)"
        );
    }

    #[test]
    fn check_fails_on_invalid_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("tailwind.config.yaml");
        std::fs::write(&path, "content: [a.html]\ndarkMode: invalid-value\n").unwrap();

        let err = cmd_check(ConfigArgs { config: Some(path) }).unwrap_err();
        assert_eq!(err.exit_code(), breeze::exit_codes::SCHEMA_FAILURE);
    }
}
