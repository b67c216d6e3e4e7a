//! Tests for the config module

use super::loader::{apply_overrides, load_or_default};
use super::types::*;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.resolve.extensions, vec!["yml", "yaml", "json"]);
    assert_eq!(config.export.output_dir, PathBuf::from("output"));
    assert!(config.export.dimensions.is_empty());
    assert!(config.export.resize);
    assert_eq!(config.output.verbosity, Verbosity::Normal);
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[resolve]
extensions = ["yaml", "json"]

[export]
output_dir = "build/emotes"
dimensions = [64, 128]
resize = false

[output]
verbosity = "verbose"
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.resolve.extensions, vec!["yaml", "json"]);
    assert_eq!(config.export.output_dir, PathBuf::from("build/emotes"));
    assert_eq!(config.export.dimensions, vec![64, 128]);
    assert!(!config.export.resize);
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_partial_section_keeps_defaults() {
    let config: Config = toml::from_str("[export]\ndimensions = [32]\n").unwrap();

    assert_eq!(config.export.dimensions, vec![32]);
    assert_eq!(config.export.output_dir, PathBuf::from("output"));
    assert!(config.export.resize);
}

#[test]
fn test_verbosity_serde() {
    let v: Verbosity = toml::from_str::<OutputConfig>("verbosity = \"quiet\"")
        .unwrap()
        .verbosity;
    assert_eq!(v, Verbosity::Quiet);

    assert_eq!(Verbosity::parse_lossy("DEBUG"), Verbosity::Debug);
    assert_eq!(Verbosity::parse_lossy("chatty"), Verbosity::Normal);
    assert!(Verbosity::Debug > Verbosity::Verbose);
}

#[test]
fn test_env_override_output_dir_and_dimensions() {
    let config = apply_overrides(
        Config::default(),
        env(&[
            ("EMOTEGEN_OUTPUT_DIR", "dist"),
            ("EMOTEGEN_DIMENSIONS", "64, 128,oops"),
        ]),
    );

    assert_eq!(config.export.output_dir, PathBuf::from("dist"));
    assert_eq!(config.export.dimensions, vec![64, 128]);
}

#[test]
fn test_env_override_extensions_and_verbosity() {
    let config = apply_overrides(
        Config::default(),
        env(&[
            ("EMOTEGEN_EXTENSIONS", ".JSON,yml"),
            ("EMOTEGEN_VERBOSITY", "debug"),
        ]),
    );

    assert_eq!(config.resolve.extensions, vec!["json", "yml"]);
    assert_eq!(config.output.verbosity, Verbosity::Debug);
}

#[test]
fn test_env_override_ignores_empty_values() {
    let config = apply_overrides(
        Config::default(),
        env(&[("EMOTEGEN_OUTPUT_DIR", " "), ("EMOTEGEN_DIMENSIONS", "")]),
    );

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_load_with_warnings_reports_unknown_key_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("emotegen.toml");

    fs::write(&path, "[resolve]\nextensons = [\"yml\"]\n").unwrap();

    let (_config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "extensons");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion, Some("extensions".to_string()));
}

#[test]
fn test_config_load_invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("emotegen.toml");

    fs::write(&path, "[export]\nresize = \"sometimes\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("invalid config in"));
}

#[test]
fn test_load_or_default_prefers_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("emotegen.toml"),
        "[export]\noutput_dir = \"from-project\"\n",
    )
    .unwrap();

    let (config, warnings) = load_or_default(Some(dir.path())).unwrap();

    assert!(warnings.is_empty());
    // Environment overrides still apply on top; only assert when unset.
    if std::env::var_os("EMOTEGEN_OUTPUT_DIR").is_none() {
        assert_eq!(config.export.output_dir, PathBuf::from("from-project"));
    }
}
