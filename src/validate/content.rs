//! Content glob compilation.
//!
//! Content patterns name the template files the external engine scans for
//! class names. A leading `!` marks an exclusion pattern. Patterns are
//! compiled here so invalid globs are caught at load time; no filesystem
//! walk happens in this crate.

use crate::error::{BreezeError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Compiled include/exclude glob sets for a document's `content` field.
#[derive(Debug, Clone)]
pub struct ContentGlobs {
    include: GlobSet,
    exclude: GlobSet,
    include_patterns: Vec<String>,
    exclude_patterns: Vec<String>,
}

impl ContentGlobs {
    /// Compile content patterns.
    ///
    /// Returns `SchemaError` naming the first pattern that is empty or fails
    /// to compile.
    pub fn compile(patterns: &[String]) -> Result<Self> {
        let mut include = GlobSetBuilder::new();
        let mut exclude = GlobSetBuilder::new();
        let mut include_patterns = Vec::new();
        let mut exclude_patterns = Vec::new();

        for pattern in patterns {
            let (negated, body) = match pattern.trim().strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, pattern.trim()),
            };
            let normalized = normalize_pattern(body);
            if normalized.is_empty() {
                return Err(BreezeError::SchemaError(format!(
                    "config validation failed: content pattern '{}' is empty",
                    pattern
                )));
            }

            let glob = GlobBuilder::new(&normalized)
                .literal_separator(true)
                .backslash_escape(true)
                .build()
                .map_err(|e| {
                    BreezeError::SchemaError(format!(
                        "config validation failed: invalid glob in content: '{}' - {}",
                        pattern, e
                    ))
                })?;

            if negated {
                exclude.add(glob);
                exclude_patterns.push(normalized);
            } else {
                include.add(glob);
                include_patterns.push(normalized);
            }
        }

        let build = |builder: GlobSetBuilder| {
            builder.build().map_err(|e| {
                BreezeError::SchemaError(format!("failed to compile content globs: {}", e))
            })
        };

        Ok(Self {
            include: build(include)?,
            exclude: build(exclude)?,
            include_patterns,
            exclude_patterns,
        })
    }

    /// Returns true if `path` matches an include pattern and no exclude pattern.
    pub fn is_match<P: AsRef<Path>>(&self, path: P) -> bool {
        let normalized = normalize_path(&path.as_ref().to_string_lossy());
        self.include.is_match(&normalized) && !self.exclude.is_match(&normalized)
    }

    /// The include pattern that matches `path`, if any (exclusions applied).
    pub fn matching_pattern<P: AsRef<Path>>(&self, path: P) -> Option<&str> {
        let normalized = normalize_path(&path.as_ref().to_string_lossy());
        if self.exclude.is_match(&normalized) {
            return None;
        }
        let matches = self.include.matches(&normalized);
        matches
            .first()
            .and_then(|&i| self.include_patterns.get(i))
            .map(String::as_str)
    }

    pub fn include_patterns(&self) -> &[String] {
        &self.include_patterns
    }

    pub fn exclude_patterns(&self) -> &[String] {
        &self.exclude_patterns
    }
}

/// Drop a leading `./` so `./templates/**` and `templates/a.html` compare in
/// the same form. A backslash in a pattern is a glob escape, not a separator.
fn normalize_pattern(pattern: &str) -> String {
    strip_current_dir(pattern.trim()).to_string()
}

/// Paths may use either separator; patterns always use `/`.
fn normalize_path(path: &str) -> String {
    let replaced = path.trim().replace('\\', "/");
    strip_current_dir(&replaced).to_string()
}

fn strip_current_dir(mut rest: &str) -> &str {
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest
}
