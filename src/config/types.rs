//! Configuration value types for breeze.
//!
//! This module defines the enums and small value types used by
//! `ConfigDocument`: dark-mode strategy, font-size tokens, plugin references
//! and the on-disk format.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Strategy used to activate the dark color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Follow `prefers-color-scheme` (framework default).
    #[default]
    Media,
    /// Toggle via a `dark` class on an ancestor.
    Class,
    /// Toggle via an arbitrary selector (`.dark` unless customized).
    Selector,
}

impl DarkMode {
    pub const ALL: [DarkMode; 3] = [DarkMode::Media, DarkMode::Class, DarkMode::Selector];

    /// Parse a dark-mode strategy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "media" => Some(Self::Media),
            "class" => Some(Self::Class),
            "selector" => Some(Self::Selector),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::Class => "class",
            Self::Selector => "selector",
        }
    }

    /// Whether the strategy accepts a custom selector in the pair form.
    pub fn accepts_selector(&self) -> bool {
        !matches!(self, Self::Media)
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `darkMode` field: either a bare strategy (`"class"`) or a
/// `[strategy, selector]` pair (`["selector", "[data-theme=dark]"]`).
///
/// All invariants are checked while deserializing, so an unknown strategy
/// surfaces as a schema error with a readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDarkMode", into = "RawDarkMode")]
pub struct DarkModeSetting {
    pub strategy: DarkMode,
    pub selector: Option<String>,
}

impl DarkModeSetting {
    pub fn new(strategy: DarkMode) -> Self {
        Self {
            strategy,
            selector: None,
        }
    }

    pub fn with_selector(strategy: DarkMode, selector: impl Into<String>) -> Self {
        Self {
            strategy,
            selector: Some(selector.into()),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawDarkMode {
    Strategy(String),
    Custom(Vec<String>),
}

impl TryFrom<RawDarkMode> for DarkModeSetting {
    type Error = String;

    fn try_from(raw: RawDarkMode) -> Result<Self, Self::Error> {
        let (name, selector) = match raw {
            RawDarkMode::Strategy(name) => (name, None),
            RawDarkMode::Custom(parts) => {
                let mut parts = parts.into_iter();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(name), Some(selector), None) => (name, Some(selector)),
                    _ => {
                        return Err(
                            "darkMode pair must be exactly [strategy, selector]".to_string()
                        );
                    }
                }
            }
        };

        let strategy = DarkMode::from_str(&name).ok_or_else(|| {
            format!(
                "unknown darkMode '{}' (expected one of: {})",
                name,
                DarkMode::ALL.map(|m| m.as_str()).join(", ")
            )
        })?;

        if let Some(selector) = &selector {
            if !strategy.accepts_selector() {
                return Err(format!(
                    "darkMode '{}' does not accept a custom selector",
                    strategy
                ));
            }
            if selector.trim().is_empty() {
                return Err("darkMode selector must be non-empty".to_string());
            }
        }

        Ok(Self { strategy, selector })
    }
}

impl From<DarkModeSetting> for RawDarkMode {
    fn from(setting: DarkModeSetting) -> Self {
        match setting.selector {
            Some(selector) => {
                RawDarkMode::Custom(vec![setting.strategy.as_str().to_string(), selector])
            }
            None => RawDarkMode::Strategy(setting.strategy.as_str().to_string()),
        }
    }
}

/// A `theme.extend.fontSize` token value.
///
/// Accepted shapes: `"1rem"`, `["1rem", "1.5rem"]` (size and line height) or
/// `["1rem", { lineHeight: "1.5rem", letterSpacing: "-0.01em" }]`. Numbers
/// (`0`, a unitless line height like `1.5`) are kept as their text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSize {
    Size(#[serde(deserialize_with = "deserialize_scalar")] String),
    WithLineHeight(
        #[serde(deserialize_with = "deserialize_scalar")] String,
        #[serde(deserialize_with = "deserialize_scalar")] String,
    ),
    WithOptions(
        #[serde(deserialize_with = "deserialize_scalar")] String,
        FontSizeOptions,
    ),
}

impl FontSize {
    /// The font size itself, exactly as written.
    pub fn size(&self) -> &str {
        match self {
            Self::Size(size) | Self::WithLineHeight(size, _) | Self::WithOptions(size, _) => size,
        }
    }

    pub fn line_height(&self) -> Option<&str> {
        match self {
            Self::Size(_) => None,
            Self::WithLineHeight(_, line_height) => Some(line_height),
            Self::WithOptions(_, options) => options.line_height.as_deref(),
        }
    }

    pub fn letter_spacing(&self) -> Option<&str> {
        match self {
            Self::WithOptions(_, options) => options.letter_spacing.as_deref(),
            _ => None,
        }
    }
}

impl From<&str> for FontSize {
    fn from(size: &str) -> Self {
        Self::Size(size.to_string())
    }
}

/// Extra typography settings attached to a font-size token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSizeOptions {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_scalar"
    )]
    pub line_height: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_scalar"
    )]
    pub letter_spacing: Option<String>,
}

/// A string or a bare number in a length position.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_yaml::Number),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => text,
            Scalar::Number(number) => number.to_string(),
        }
    }
}

fn deserialize_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Scalar::deserialize(deserializer)?.into())
}

fn deserialize_optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let scalar: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(scalar.map(String::from))
}

/// A plugin reference: a bare name or a name with options.
///
/// Names may be short (`typography`) or full package names
/// (`@tailwindcss/typography`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginRef {
    Name(String),
    Configured {
        name: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        options: BTreeMap<String, serde_yaml::Value>,
    },
}

impl PluginRef {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Configured { name, .. } => name,
        }
    }

    pub fn options(&self) -> Option<&BTreeMap<String, serde_yaml::Value>> {
        match self {
            Self::Name(_) => None,
            Self::Configured { options, .. } => Some(options),
        }
    }
}

impl From<&str> for PluginRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// Structured-data format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl Format {
    /// Detect the format from a file extension (`yaml`, `yml`, `json`).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}
