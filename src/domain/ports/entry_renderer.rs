//! EntryRenderer port
//!
//! Materializes one resolved entry. Implementations only read the set; the
//! same `VariantSet` may be handed to several renderers at once.

use std::path::PathBuf;

use crate::domain::entities::{Entry, VariantSet};

/// Output parameters shared by every entry of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub output_dir: PathBuf,
    /// Square raster sizes to produce; empty means vector output only
    pub dimensions: Vec<u32>,
    /// Fit the view box to the drawing's bounding box
    pub resize: bool,
}

impl RenderRequest {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            dimensions: Vec::new(),
            resize: true,
        }
    }

    pub fn with_dimensions(mut self, dimensions: Vec<u32>) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_resize(mut self, resize: bool) -> Self {
        self.resize = resize;
        self
    }

    /// Requested dimensions without zeros or repeats, in first-seen order.
    pub fn effective_dimensions(&self) -> Vec<u32> {
        let mut seen = Vec::new();
        for &dim in &self.dimensions {
            if dim != 0 && !seen.contains(&dim) {
                seen.push(dim);
            }
        }
        seen
    }
}

/// What a renderer produced for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub entry: String,
    pub output: PathBuf,
    /// `false` when the output already had identical content
    pub written: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize '{entry}': {message}")]
    Serialize { entry: String, message: String },

    #[error("name '{name}' cannot be used in an output file name")]
    UnsafeName { name: String },
}

pub trait EntryRenderer: Send + Sync {
    fn render(
        &self,
        set: &VariantSet,
        entry: &Entry,
        request: &RenderRequest,
    ) -> Result<RenderedEntry, RenderError>;
}
