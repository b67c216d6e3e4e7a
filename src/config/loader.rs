//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::services::closest_match;
use crate::error::{EmotegenError, EmotegenResult};

use super::types::{Config, Verbosity};

pub use crate::domain::value_objects::ConfigWarning;

/// File name of the project config, looked up next to the declarations.
pub const PROJECT_CONFIG_FILE: &str = "emotegen.toml";

const KNOWN_KEYS: &[&str] = &[
    "resolve",
    "extensions",
    "export",
    "output_dir",
    "dimensions",
    "resize",
    "output",
    "verbosity",
    "color",
    "unicode",
];

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> EmotegenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EmotegenError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: closest_match(&key, KNOWN_KEYS),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults, then apply
/// environment overrides.
///
/// The first config file found wins; files are not layered.
pub fn load_or_default(project_dir: Option<&Path>) -> EmotegenResult<(Config, Vec<ConfigWarning>)> {
    let candidates = project_dir
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for candidate in candidates {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (EMOTEGEN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // EMOTEGEN_OUTPUT_DIR
    if let Some(dir) = lookup("EMOTEGEN_OUTPUT_DIR").filter(|d| !d.trim().is_empty()) {
        config.export.output_dir = PathBuf::from(dir);
    }

    // EMOTEGEN_DIMENSIONS (comma-separated)
    if let Some(dimensions) = lookup("EMOTEGEN_DIMENSIONS") {
        let parsed: Vec<u32> = dimensions
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        if !parsed.is_empty() {
            config.export.dimensions = parsed;
        }
    }

    // EMOTEGEN_EXTENSIONS (comma-separated)
    if let Some(extensions) = lookup("EMOTEGEN_EXTENSIONS") {
        let parsed: Vec<String> = extensions
            .split(',')
            .map(|s| s.trim().trim_start_matches('.').to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if !parsed.is_empty() {
            config.resolve.extensions = parsed;
        }
    }

    // EMOTEGEN_VERBOSITY
    if let Some(verbosity) = lookup("EMOTEGEN_VERBOSITY") {
        config.output.verbosity = Verbosity::parse_lossy(&verbosity);
    }

    config
}

/// `$XDG_CONFIG_HOME/emotegen/config.toml`, falling back to the platform
/// config directory.
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("emotegen").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}
