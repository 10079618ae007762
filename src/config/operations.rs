//! Config parsing, serialization, and validation.

use super::model::ConfigDocument;
use super::types::{FontSize, Format};
use crate::error::{BreezeError, Result};
use crate::loader::Loader;
use crate::plugins::{PluginRegistry, ResolvedPlugin};
use crate::validate::ContentGlobs;
use crate::validate::length;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

impl ConfigDocument {
    /// Load and validate a config file.
    ///
    /// Plugins resolve against the first-party set and the `node_modules`
    /// directory next to the file. Presets are merged underneath.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigDocument)` - Successfully loaded and validated document
    /// * `Err(BreezeError::ReadError)` - The file (or a preset) could not be read
    /// * `Err(BreezeError::ParseError)` - Malformed YAML/JSON
    /// * `Err(BreezeError::SchemaError)` - Well-formed but invalid content
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        Loader::for_config_file(path).load(path)
    }

    /// Parse a document without semantic validation.
    ///
    /// Syntax errors are `ParseError`. Data of the wrong shape (a list where
    /// a map is expected, an unknown `darkMode`) is `SchemaError`.
    pub fn parse(input: &str, format: Format) -> Result<Self> {
        match format {
            Format::Yaml => {
                if input.trim().is_empty() {
                    return Ok(Self::default());
                }
                let value: serde_yaml::Value = serde_yaml::from_str(input)
                    .map_err(|e| BreezeError::ParseError(format!("invalid YAML: {}", e)))?;
                if value.is_null() {
                    return Ok(Self::default());
                }
                Self::deserialize(&value).map_err(|e| structure_error(&value, e))
            }
            Format::Json => {
                let value: serde_json::Value = serde_json::from_str(input)
                    .map_err(|e| BreezeError::ParseError(format!("invalid JSON: {}", e)))?;
                if value.is_null() {
                    return Ok(Self::default());
                }
                Self::deserialize(&value).map_err(|e| {
                    let value = serde_yaml::to_value(&value).unwrap_or(serde_yaml::Value::Null);
                    structure_error(&value, e)
                })
            }
        }
    }

    /// Parse a document from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(yaml, Format::Yaml)
    }

    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::parse(json, Format::Json)
    }

    /// Serialize in the given format.
    pub fn to_format(&self, format: Format) -> Result<String> {
        match format {
            Format::Yaml => self.to_yaml(),
            Format::Json => self.to_json(),
        }
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            BreezeError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            BreezeError::UserError(format!("failed to serialize config to JSON: {}", e))
        })
    }

    /// Validate a complete document.
    ///
    /// Validation rules:
    /// - `content` must be present and non-empty
    /// - everything checked by [`ConfigDocument::validate_fragment`]
    pub fn validate(&self, registry: &PluginRegistry) -> Result<()> {
        if self.content().is_empty() {
            return Err(BreezeError::SchemaError(
                "config validation failed: content must list at least one glob pattern"
                    .to_string(),
            ));
        }
        self.validate_fragment(registry)
    }

    /// Validate the fields that are present.
    ///
    /// Validation rules:
    /// - every `content` pattern compiles as a glob
    /// - `fontFamily` stacks are non-empty with non-empty names
    /// - `fontSize` values are valid CSS lengths (line height and letter
    ///   spacing too, when given)
    /// - every plugin reference resolves in `registry`
    /// - `presets` entries are non-empty
    pub fn validate_fragment(&self, registry: &PluginRegistry) -> Result<()> {
        if let Some(content) = &self.content {
            ContentGlobs::compile(content)?;
        }

        for (token, stack) in &self.theme.extend.font_family {
            if stack.is_empty() {
                return Err(BreezeError::SchemaError(format!(
                    "config validation failed: fontFamily '{}' must list at least one font",
                    token
                )));
            }
            if stack.iter().any(|name| name.trim().is_empty()) {
                return Err(BreezeError::SchemaError(format!(
                    "config validation failed: fontFamily '{}' contains an empty font name",
                    token
                )));
            }
        }

        for (token, font_size) in &self.theme.extend.font_size {
            validate_font_size_token(token, font_size)?;
        }

        registry.resolve_all(self.plugins())?;

        if self.presets().iter().any(|preset| preset.trim().is_empty()) {
            return Err(BreezeError::SchemaError(
                "config validation failed: presets entries must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Compile the content patterns.
    pub fn content_globs(&self) -> Result<ContentGlobs> {
        ContentGlobs::compile(self.content())
    }

    /// Resolve every plugin reference, in order.
    pub fn resolve_plugins(&self, registry: &PluginRegistry) -> Result<Vec<ResolvedPlugin>> {
        registry.resolve_all(self.plugins())
    }
}

/// Shape errors inside untagged values only say "did not match any variant";
/// name the offending token instead when one can be found.
fn structure_error(value: &serde_yaml::Value, cause: impl fmt::Display) -> BreezeError {
    let detail = match invalid_font_size_token(value) {
        Some(token) => format!(
            "fontSize '{}' must be a length, [length, lineHeight] or \
             [length, {{lineHeight, letterSpacing}}]",
            token
        ),
        None => cause.to_string(),
    };
    BreezeError::SchemaError(format!("unexpected config structure: {}", detail))
}

fn invalid_font_size_token(value: &serde_yaml::Value) -> Option<String> {
    let sizes = value.get("theme")?.get("extend")?.get("fontSize")?.as_mapping()?;
    sizes.iter().find_map(|(token, size)| {
        if serde_yaml::from_value::<FontSize>(size.clone()).is_ok() {
            return None;
        }
        match token {
            serde_yaml::Value::String(token) => Some(token.clone()),
            serde_yaml::Value::Number(token) => Some(token.to_string()),
            _ => None,
        }
    })
}

fn validate_font_size_token(token: &str, font_size: &FontSize) -> Result<()> {
    let invalid = |reason: String| {
        BreezeError::SchemaError(format!(
            "config validation failed: fontSize '{}': {}",
            token, reason
        ))
    };

    length::validate_font_size(font_size.size()).map_err(invalid)?;
    if let Some(line_height) = font_size.line_height() {
        length::validate_line_height(line_height).map_err(invalid)?;
    }
    if let Some(letter_spacing) = font_size.letter_spacing() {
        length::validate_letter_spacing(letter_spacing).map_err(invalid)?;
    }
    Ok(())
}
