//! Declaration document formats

use std::path::Path;

/// Serialization format of a declaration file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclarationFormat {
    #[default]
    Yaml,
    Json,
}

impl DeclarationFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yml" | "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Format of the file at `path`; `None` when the extension is not a
    /// declaration extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}
