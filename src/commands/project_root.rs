use std::path::{Path, PathBuf};

use emotegen::config::PROJECT_CONFIG_FILE;

/// Directory holding the project config for declarations at `start`.
///
/// Walks upward from `start` (or its parent, for a file) and stops at the
/// first directory with an `emotegen.toml`. The walk ends at a `.git` root.
pub(crate) fn discover_config_dir(start: &Path) -> Option<PathBuf> {
    let start = if start.is_dir() {
        start
    } else {
        start.parent().unwrap_or_else(|| Path::new("."))
    };
    let start = if start.as_os_str().is_empty() {
        Path::new(".")
    } else {
        start
    };

    for dir in start.ancestors() {
        if dir.join(PROJECT_CONFIG_FILE).is_file() {
            return Some(dir.to_path_buf());
        }
        if dir.join(".git").exists() {
            return None;
        }
    }
    None
}
