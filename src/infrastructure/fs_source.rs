//! Local disk DeclarationSource

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::DeclarationSource;

#[derive(Debug, Clone, Copy, Default)]
pub struct FsDeclarationSource;

impl FsDeclarationSource {
    pub fn new() -> Self {
        Self
    }
}

impl DeclarationSource for FsDeclarationSource {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
}
