//! DeclarationSource port - where declaration bytes come from
//!
//! Implementations:
//! - `FsDeclarationSource` - local disk
//! - `InMemorySource` - fixed documents, for tests and tooling

use std::io;
use std::path::{Path, PathBuf};

pub trait DeclarationSource: Send + Sync {
    /// Read the raw bytes of a declaration
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Check whether a declaration exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Canonical cache key for `path`.
    ///
    /// Two spellings of the same file must map to the same key. Paths that do
    /// not exist are returned unchanged.
    fn canonicalize(&self, path: &Path) -> PathBuf;
}
