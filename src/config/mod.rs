//! Configuration module for emotegen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (EMOTEGEN_*)
//! 3. Project config (emotegen.toml next to the declarations)
//! 4. User config (~/.config/emotegen/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{user_config_path, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, ExportConfig, OutputConfig, ResolveConfig, Verbosity};
