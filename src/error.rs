//! Error types for emotegen
//!
//! Layer-specific errors live next to the code that raises them
//! (`ResolveError`, `MergeError`, `RenderError`, ...). `EmotegenError` covers
//! what the CLI glue adds on top: configuration and argument handling.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::services::ResolveError;

/// Result type alias for emotegen operations
pub type EmotegenResult<T> = Result<T, EmotegenError>;

#[derive(Error, Debug)]
pub enum EmotegenError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Directory argument without any declaration files
    #[error("no declaration files (.yml, .yaml, .json) found in {path}")]
    NoDeclarations { path: PathBuf },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
