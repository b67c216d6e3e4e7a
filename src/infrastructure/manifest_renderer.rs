//! JSON render manifests
//!
//! Rasterizing is left to downstream tooling. For every exported entry this
//! renderer writes `<output>/<set>_<entry>.json`, a flat description of the
//! layers to draw: asset files resolved against the declaration directory,
//! colors after overwrites, and the requested output sizes.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::domain::entities::{Entry, VariantSet};
use crate::domain::ports::{EntryRenderer, RenderError, RenderRequest, RenderedEntry};

#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestRenderer;

impl ManifestRenderer {
    pub fn new() -> Self {
        Self
    }

    /// File name stem for an entry: `<set>_<entry>`.
    ///
    /// Names containing a path separator are rejected so the manifest always
    /// lands directly inside the output directory.
    pub fn output_name(set: &VariantSet, entry: &Entry) -> Result<String, RenderError> {
        for name in [set.name(), entry.name()] {
            if name.contains(['/', '\\', '\0']) {
                return Err(RenderError::UnsafeName {
                    name: name.to_string(),
                });
            }
        }
        Ok(format!("{}_{}", set.name(), entry.name()))
    }
}

#[derive(Serialize)]
struct Manifest<'a> {
    set: &'a str,
    entry: &'a str,
    origin: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    base: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    src: Option<PathBuf>,
    assets: Vec<ManifestAsset<'a>>,
    dimensions: Vec<u32>,
    resize: bool,
}

#[derive(Serialize)]
struct ManifestAsset<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    src: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
}

impl EntryRenderer for ManifestRenderer {
    fn render(
        &self,
        set: &VariantSet,
        entry: &Entry,
        request: &RenderRequest,
    ) -> Result<RenderedEntry, RenderError> {
        let stem = Self::output_name(set, entry)?;
        let dir = set.declaration_dir();
        let manifest = Manifest {
            set: set.name(),
            entry: entry.name(),
            origin: entry.origin_chain(),
            base: entry.effective_base(),
            src: entry.source().map(|src| dir.join(src)),
            assets: entry
                .assets()
                .iter()
                .map(|asset| ManifestAsset {
                    kind: asset.kind(),
                    src: asset.source().map(|src| dir.join(src)),
                    color: asset.color(),
                })
                .collect(),
            dimensions: request.effective_dimensions(),
            resize: request.resize,
        };

        let mut content =
            serde_json::to_string_pretty(&manifest).map_err(|e| RenderError::Serialize {
                entry: entry.name().to_string(),
                message: e.to_string(),
            })?;
        content.push('\n');

        let output = request.output_dir.join(format!("{}.json", stem));

        if std::fs::read_to_string(&output).is_ok_and(|existing| existing == content) {
            debug!(output = %output.display(), "manifest unchanged");
            return Ok(RenderedEntry {
                entry: entry.name().to_string(),
                output,
                written: false,
            });
        }

        write_atomic(&output, content.as_bytes())?;
        Ok(RenderedEntry {
            entry: entry.name().to_string(),
            output,
            written: true,
        })
    }
}

/// Write through a temp file in the target directory, then rename.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), RenderError> {
    let io_err = |source: std::io::Error| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(io_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(io_err)?;
    tmp.write_all(content).map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
