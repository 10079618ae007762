//! Config file loading.
//!
//! The loader reads a file, picks the format from its extension, merges any
//! presets underneath it and validates the result. Each call produces a
//! fresh document; nothing is cached between loads, so a watch-mode caller
//! simply loads again.

use crate::config::{ConfigDocument, Format, merge};
use crate::error::{BreezeError, Result};
use crate::plugins::PluginRegistry;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads config documents against a plugin registry.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    registry: PluginRegistry,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: PluginRegistry) -> Self {
        Self { registry }
    }

    /// Loader whose registry also searches `node_modules/` next to `path`.
    pub fn for_config_file<P: AsRef<Path>>(path: P) -> Self {
        let root = match path.as_ref().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self::with_registry(PluginRegistry::new().with_search_root(root))
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Load a complete document: presets merged, everything validated.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<ConfigDocument> {
        let path = path.as_ref();
        let document = self.resolve(path, &mut Vec::new())?;
        document.validate(&self.registry)?;
        info!(path = %path.display(), "loaded config");
        Ok(document)
    }

    /// Load a fragment: presets merged, present fields validated, `content`
    /// may be absent.
    pub fn load_fragment<P: AsRef<Path>>(&self, path: P) -> Result<ConfigDocument> {
        let path = path.as_ref();
        let document = self.resolve(path, &mut Vec::new())?;
        document.validate_fragment(&self.registry)?;
        debug!(path = %path.display(), "loaded config fragment");
        Ok(document)
    }

    /// Read `path` and merge its presets underneath it.
    ///
    /// `chain` holds the files currently being resolved, outermost first.
    fn resolve(&self, path: &Path, chain: &mut Vec<PathBuf>) -> Result<ConfigDocument> {
        let identity = std::fs::canonicalize(path).map_err(|e| {
            BreezeError::ReadError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        if chain.contains(&identity) {
            let cycle: Vec<String> = chain
                .iter()
                .chain(std::iter::once(&identity))
                .map(|p| p.display().to_string())
                .collect();
            return Err(BreezeError::SchemaError(format!(
                "config validation failed: preset cycle detected: {}",
                cycle.join(" -> ")
            )));
        }

        let document = read_document(path)?;
        if document.presets().is_empty() {
            return Ok(document);
        }

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        chain.push(identity);

        let mut base = ConfigDocument::default();
        for preset in document.presets() {
            let preset_path = dir.join(preset);
            debug!(preset = %preset_path.display(), "merging preset");
            let preset_doc = self.resolve(&preset_path, chain)?;
            base = merge(&base, &preset_doc);
        }

        chain.pop();
        Ok(merge(&base, &document))
    }
}

/// Read and parse a single file without resolving presets or validating.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<ConfigDocument> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| {
        BreezeError::UserError(format!(
            "unsupported config file '{}': expected a .yaml, .yml or .json extension",
            path.display()
        ))
    })?;

    let content = std::fs::read_to_string(path).map_err(|e| {
        BreezeError::ReadError(format!(
            "failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    debug!(path = %path.display(), format = format.as_str(), "parsing config");
    ConfigDocument::parse(&content, format).map_err(|err| match err {
        BreezeError::ParseError(msg) => {
            BreezeError::ParseError(format!("{}: {}", path.display(), msg))
        }
        BreezeError::SchemaError(msg) => {
            BreezeError::SchemaError(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}
