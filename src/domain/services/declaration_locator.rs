//! Base declaration lookup
//!
//! Bases are sibling files: `basedOn: fox` in `decl/fox_blue.yml` refers to
//! `decl/fox.yml`.

use std::path::{Path, PathBuf};

use crate::domain::ports::DeclarationSource;

#[derive(Debug, Clone)]
pub struct DeclarationLocator {
    fallback_extensions: Vec<String>,
}

impl Default for DeclarationLocator {
    fn default() -> Self {
        Self::new(vec!["yml".to_string(), "yaml".to_string(), "json".to_string()])
    }
}

impl DeclarationLocator {
    pub fn new(fallback_extensions: Vec<String>) -> Self {
        Self {
            fallback_extensions,
        }
    }

    /// Path of the declaration `base_name` referenced from `current`.
    ///
    /// The current file's extension is tried first, then the fallbacks in
    /// order. When nothing exists the primary candidate is returned so the
    /// caller can report it.
    pub fn locate(&self, source: &dyn DeclarationSource, current: &Path, base_name: &str) -> PathBuf {
        let dir = current.parent().unwrap_or_else(|| Path::new(""));
        let primary_ext = current
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_string)
            .or_else(|| self.fallback_extensions.first().cloned())
            .unwrap_or_else(|| "yml".to_string());

        let primary = dir.join(format!("{}.{}", base_name, primary_ext));
        if source.exists(&primary) {
            return primary;
        }

        self.fallback_extensions
            .iter()
            .filter(|ext| **ext != primary_ext)
            .map(|ext| dir.join(format!("{}.{}", base_name, ext)))
            .find(|candidate| source.exists(candidate))
            .unwrap_or(primary)
    }
}
