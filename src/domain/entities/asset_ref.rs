//! AssetRef - one drawable attached to an entry

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A drawable layer of an emote (eyes, body, a held object, ...).
///
/// `kind` is the identifying key that overwrite directives target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRef {
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

impl AssetRef {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            source: None,
            color: None,
        }
    }

    /// Builder: set the source file
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Builder: set the fill color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}
