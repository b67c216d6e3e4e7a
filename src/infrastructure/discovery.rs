//! Declaration discovery
//!
//! Expands CLI path arguments: files are taken as-is, directories contribute
//! every declaration file directly inside them (hidden and git-ignored files
//! are skipped).

use std::path::{Path, PathBuf};

use crate::domain::value_objects::DeclarationFormat;
use crate::error::{EmotegenError, EmotegenResult};

/// Declaration files directly inside `dir`, sorted by path.
pub fn discover_declarations(dir: &Path) -> EmotegenResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(EmotegenError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut found: Vec<PathBuf> = ignore::WalkBuilder::new(dir)
        .max_depth(Some(1))
        .build()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| DeclarationFormat::from_path(path).is_some())
        .collect();

    found.sort();
    Ok(found)
}

/// Expand a list of files and directories into declaration paths.
pub fn expand_declaration_args(paths: &[PathBuf]) -> EmotegenResult<Vec<PathBuf>> {
    let mut expanded = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = discover_declarations(path)?;
            if found.is_empty() {
                return Err(EmotegenError::NoDeclarations { path: path.clone() });
            }
            expanded.extend(found);
        } else {
            expanded.push(path.clone());
        }
    }
    Ok(expanded)
}
