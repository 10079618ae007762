//! Document merging.
//!
//! `theme.extend.*` tables are merged key by key with the override winning.
//! Every other top-level field is replaced wholesale when the override sets
//! it. Merging is pure and idempotent:
//! `merge(&merge(&a, &b), &b) == merge(&a, &b)`.

use super::model::{ConfigDocument, Theme, ThemeExtend};
use std::collections::BTreeMap;

/// Merge `overrides` on top of `base`.
pub fn merge(base: &ConfigDocument, overrides: &ConfigDocument) -> ConfigDocument {
    ConfigDocument {
        content: overrides.content.clone().or_else(|| base.content.clone()),
        dark_mode: overrides
            .dark_mode
            .clone()
            .or_else(|| base.dark_mode.clone()),
        theme: merge_theme(&base.theme, &overrides.theme),
        plugins: overrides.plugins.clone().or_else(|| base.plugins.clone()),
        presets: overrides.presets.clone().or_else(|| base.presets.clone()),
    }
}

impl ConfigDocument {
    /// Merge `overrides` on top of this document. See [`merge`].
    pub fn merged_with(&self, overrides: &ConfigDocument) -> ConfigDocument {
        merge(self, overrides)
    }
}

fn merge_theme(base: &Theme, overrides: &Theme) -> Theme {
    // Replacement tables: the override's table wins outright.
    let mut replaced = base.overrides.clone();
    replaced.extend(
        overrides
            .overrides
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );

    Theme {
        extend: merge_extend(&base.extend, &overrides.extend),
        overrides: replaced,
    }
}

fn merge_extend(base: &ThemeExtend, overrides: &ThemeExtend) -> ThemeExtend {
    let mut extra = base.extra.clone();
    for (key, value) in &overrides.extra {
        let merged = match (extra.get(key), value) {
            (Some(serde_yaml::Value::Mapping(existing)), serde_yaml::Value::Mapping(incoming)) => {
                let mut mapping = existing.clone();
                for (k, v) in incoming {
                    mapping.insert(k.clone(), v.clone());
                }
                serde_yaml::Value::Mapping(mapping)
            }
            _ => value.clone(),
        };
        extra.insert(key.clone(), merged);
    }

    ThemeExtend {
        font_family: overlay(&base.font_family, &overrides.font_family),
        font_size: overlay(&base.font_size, &overrides.font_size),
        extra,
    }
}

fn overlay<V: Clone>(
    base: &BTreeMap<String, V>,
    overrides: &BTreeMap<String, V>,
) -> BTreeMap<String, V> {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DarkMode, DarkModeSetting, FontSize, PluginRef};

    fn doc(yaml: &str) -> ConfigDocument {
        ConfigDocument::from_yaml(yaml).unwrap()
    }

    #[test]
    fn override_font_sizes_win_on_collision() {
        let base = doc("theme: {extend: {fontSize: {sm: 0.875rem, lg: 1.125rem}}}");
        let overrides = doc("theme: {extend: {fontSize: {sm: 1rem, xl: 1.563rem}}}");

        let merged = merge(&base, &overrides);

        assert_eq!(merged.font_size("sm"), Some(&FontSize::from("1rem")));
        assert_eq!(merged.font_size("lg"), Some(&FontSize::from("1.125rem")));
        assert_eq!(merged.font_size("xl"), Some(&FontSize::from("1.563rem")));
    }

    #[test]
    fn font_families_are_merged_by_token() {
        let base = doc("theme: {extend: {fontFamily: {sans: [Inter], mono: [Menlo]}}}");
        let overrides = doc("theme: {extend: {fontFamily: {sans: [Iosevka Web]}}}");

        let merged = merge(&base, &overrides);

        assert_eq!(
            merged.font_family("sans"),
            Some(&["Iosevka Web".to_string()][..])
        );
        assert_eq!(merged.font_family("mono"), Some(&["Menlo".to_string()][..]));
    }

    #[test]
    fn top_level_fields_are_replaced_wholesale() {
        let base = doc(
            r#"
content: ["src/**/*.rs", "templates/**/*.html"]
darkMode: media
plugins: [forms, typography]
"#,
        );
        let overrides = doc(
            r#"
content: ["./templates/**/*.html"]
plugins: [typography]
"#,
        );

        let merged = merge(&base, &overrides);

        assert_eq!(merged.content(), ["./templates/**/*.html"]);
        assert_eq!(merged.plugins(), [PluginRef::from("typography")]);
        // Absent in overrides: inherited.
        assert_eq!(merged.dark_mode(), DarkMode::Media);
    }

    #[test]
    fn absent_fields_inherit_from_base() {
        let base = doc("content: [a.html]\ndarkMode: class\nplugins: [forms]");
        let merged = merge(&base, &ConfigDocument::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn explicit_empty_plugins_clear_base_plugins() {
        let base = doc("plugins: [forms]");
        let overrides = doc("plugins: []");

        let merged = merge(&base, &overrides);

        assert!(merged.plugins.is_some());
        assert!(merged.plugins().is_empty());
    }

    #[test]
    fn dark_mode_selector_comes_from_override() {
        let base = doc("darkMode: class");
        let overrides = doc(r#"darkMode: [selector, "[data-theme=dark]"]"#);

        let merged = merge(&base, &overrides);

        assert_eq!(
            merged.dark_mode,
            Some(DarkModeSetting::with_selector(
                DarkMode::Selector,
                "[data-theme=dark]"
            ))
        );
    }

    #[test]
    fn extra_extend_tables_merge_shallowly() {
        let base = doc("theme: {extend: {colors: {brand: '#123456', accent: '#ff0000'}}}");
        let overrides =
            doc("theme: {extend: {colors: {brand: '#abcdef'}, spacing: {'128': 32rem}}}");

        let merged = merge(&base, &overrides);
        let colors = merged.theme.extend.extra.get("colors").unwrap();

        assert_eq!(colors["brand"], serde_yaml::Value::from("#abcdef"));
        assert_eq!(colors["accent"], serde_yaml::Value::from("#ff0000"));
        assert!(merged.theme.extend.extra.contains_key("spacing"));
    }

    #[test]
    fn theme_replacement_tables_are_replaced() {
        let base = doc("theme: {colors: {red: '#f00', blue: '#00f'}}");
        let overrides = doc("theme: {colors: {green: '#0f0'}}");

        let merged = merge(&base, &overrides);
        let colors = merged.theme.overrides.get("colors").unwrap();

        assert!(colors.get("green").is_some());
        assert!(colors.get("red").is_none());
    }

    #[test]
    fn merge_is_idempotent() {
        let base = doc(
            r#"
content: ["src/**/*.html"]
theme:
  extend:
    fontSize: {sm: 0.875rem, base: 1rem}
    colors: {brand: '#111'}
plugins: [forms]
"#,
        );
        let overrides = doc(
            r#"
darkMode: class
theme:
  extend:
    fontSize: {base: 1.25rem}
    colors: {brand: '#222', accent: '#333'}
"#,
        );

        let once = merge(&base, &overrides);
        let twice = merge(&once, &overrides);

        assert_eq!(once, twice);
    }

    #[test]
    fn merged_with_matches_free_function() {
        let base = doc("content: [a.html]");
        let overrides = doc("darkMode: selector");
        assert_eq!(base.merged_with(&overrides), merge(&base, &overrides));
    }
}
