//! ConfigDocument struct definition and accessors.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// In-memory representation of a framework configuration file.
///
/// Top-level fields are optional so the same type can hold a complete
/// document or a fragment (a preset or an override document). Absent and
/// empty are distinct: `plugins: []` clears plugins when merged, a missing
/// `plugins` key inherits them.
///
/// Unknown top-level keys are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Glob patterns naming the template files to scan for class names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,

    /// Dark-mode activation strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<DarkModeSetting>,

    /// Design tokens.
    #[serde(default, skip_serializing_if = "Theme::is_empty")]
    pub theme: Theme,

    /// Plugins to load, applied in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<PluginRef>>,

    /// Base documents merged underneath this one, relative to this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presets: Option<Vec<String>>,
}

/// The `theme` section.
///
/// `extend` holds additive tokens merged over the framework defaults. Any
/// other key (e.g. `colors` directly under `theme`) replaces that default
/// table outright and is kept as raw data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default, skip_serializing_if = "ThemeExtend::is_empty")]
    pub extend: ThemeExtend,

    #[serde(flatten)]
    pub overrides: BTreeMap<String, serde_yaml::Value>,
}

impl Theme {
    pub fn is_empty(&self) -> bool {
        self.extend.is_empty() && self.overrides.is_empty()
    }
}

/// The `theme.extend` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtend {
    /// Font-family tokens: token name to ordered font stack.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub font_family: BTreeMap<String, Vec<String>>,

    /// Font-size tokens: token name (`sm`, `base`, `xl`) to size.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub font_size: BTreeMap<String, FontSize>,

    /// Other token tables (colors, spacing, ...), preserved as raw data.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ThemeExtend {
    pub fn is_empty(&self) -> bool {
        self.font_family.is_empty() && self.font_size.is_empty() && self.extra.is_empty()
    }
}

impl ConfigDocument {
    /// Content patterns, empty when absent.
    pub fn content(&self) -> &[String] {
        self.content.as_deref().unwrap_or_default()
    }

    /// Effective dark-mode strategy; the framework default is `media`.
    pub fn dark_mode(&self) -> DarkMode {
        self.dark_mode
            .as_ref()
            .map(|setting| setting.strategy)
            .unwrap_or_default()
    }

    /// Custom dark-mode selector, if the pair form was used.
    pub fn dark_mode_selector(&self) -> Option<&str> {
        self.dark_mode.as_ref()?.selector.as_deref()
    }

    /// Plugin references in load order, empty when absent.
    pub fn plugins(&self) -> &[PluginRef] {
        self.plugins.as_deref().unwrap_or_default()
    }

    /// Preset paths, empty when absent.
    pub fn presets(&self) -> &[String] {
        self.presets.as_deref().unwrap_or_default()
    }

    pub fn font_size(&self, token: &str) -> Option<&FontSize> {
        self.theme.extend.font_size.get(token)
    }

    pub fn font_family(&self, token: &str) -> Option<&[String]> {
        self.theme.extend.font_family.get(token).map(Vec::as_slice)
    }
}
