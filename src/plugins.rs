//! Plugin reference resolution.
//!
//! Plugins are never executed here. A reference is valid when it names a
//! plugin the engine can load: a first-party plugin, a name registered on
//! the registry, or a package installed under `node_modules/` in the
//! project root.

use crate::config::PluginRef;
use crate::error::{BreezeError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// npm scope of the first-party plugins.
pub const FIRST_PARTY_SCOPE: &str = "@tailwindcss";

/// First-party plugins, by short name.
pub const FIRST_PARTY_PLUGINS: &[&str] =
    &["typography", "forms", "aspect-ratio", "container-queries"];

/// Where a plugin reference was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginSource {
    FirstParty,
    Registered,
    /// Installed package; holds the package directory.
    Installed(PathBuf),
}

/// A plugin reference that resolved successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlugin {
    /// Short name (`typography`).
    pub name: String,
    /// Package name (`@tailwindcss/typography`).
    pub package: String,
    pub source: PluginSource,
}

/// The set of plugins a document may reference.
#[derive(Debug, Clone)]
pub struct PluginRegistry {
    first_party: bool,
    registered: BTreeSet<String>,
    search_root: Option<PathBuf>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginRegistry {
    /// Registry that knows the first-party plugins.
    pub fn new() -> Self {
        Self {
            first_party: true,
            registered: BTreeSet::new(),
            search_root: None,
        }
    }

    /// Registry that resolves nothing until plugins are registered.
    pub fn empty() -> Self {
        Self {
            first_party: false,
            registered: BTreeSet::new(),
            search_root: None,
        }
    }

    /// Also look for installed packages under `<root>/node_modules/`.
    pub fn with_search_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.search_root = Some(root.into());
        self
    }

    /// Register a plugin by short or package name.
    pub fn with_plugin(mut self, name: impl Into<String>) -> Self {
        self.register(name);
        self
    }

    pub fn register(&mut self, name: impl Into<String>) {
        self.registered.insert(name.into());
    }

    pub fn search_root(&self) -> Option<&Path> {
        self.search_root.as_deref()
    }

    /// Resolve one reference by name.
    pub fn resolve(&self, reference: &str) -> Option<ResolvedPlugin> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }
        let (name, package) = split_reference(reference);

        if self.first_party
            && FIRST_PARTY_PLUGINS.contains(&name.as_str())
            && is_first_party(&package)
        {
            return Some(ResolvedPlugin {
                name,
                package,
                source: PluginSource::FirstParty,
            });
        }

        if self.registered.contains(reference)
            || self.registered.contains(&name)
            || self.registered.contains(&package)
        {
            return Some(ResolvedPlugin {
                name,
                package,
                source: PluginSource::Registered,
            });
        }

        let root = self.search_root.as_ref()?;
        let dir = root.join("node_modules").join(&package);
        if dir.join("package.json").is_file() {
            return Some(ResolvedPlugin {
                name,
                package,
                source: PluginSource::Installed(dir),
            });
        }

        None
    }

    /// Resolve every reference in order. The first unresolvable reference
    /// is a `SchemaError`.
    pub fn resolve_all(&self, references: &[PluginRef]) -> Result<Vec<ResolvedPlugin>> {
        references
            .iter()
            .map(|reference| {
                let resolved = self.resolve(reference.name()).ok_or_else(|| {
                    BreezeError::SchemaError(format!(
                        "config validation failed: plugin '{}' is not installed",
                        reference.name()
                    ))
                })?;
                debug!(plugin = %resolved.package, source = ?resolved.source, "resolved plugin");
                Ok(resolved)
            })
            .collect()
    }
}

/// Split a reference into (short name, package name).
///
/// `@tailwindcss/forms` and `forms` both give `("forms", "@tailwindcss/forms")`
/// for first-party plugins; third-party names are kept as written.
fn split_reference(reference: &str) -> (String, String) {
    if let Some(short) = reference
        .strip_prefix(FIRST_PARTY_SCOPE)
        .and_then(|rest| rest.strip_prefix('/'))
    {
        return (short.to_string(), reference.to_string());
    }
    if FIRST_PARTY_PLUGINS.contains(&reference) {
        return (
            reference.to_string(),
            format!("{}/{}", FIRST_PARTY_SCOPE, reference),
        );
    }
    (reference.to_string(), reference.to_string())
}

fn is_first_party(package: &str) -> bool {
    package.starts_with(&format!("{}/", FIRST_PARTY_SCOPE))
}
