//! In-memory DeclarationSource
//!
//! Holds declarations keyed by normalized path. Used by tests and by tools
//! that assemble declarations without touching disk.

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::ports::DeclarationSource;

#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    documents: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    reads: Arc<AtomicUsize>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a document
    pub fn with_document(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add or replace a document
    pub fn insert(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let mut documents = self.documents.lock().unwrap_or_else(|e| e.into_inner());
        documents.insert(normalize(path.as_ref()), content.as_ref().to_vec());
    }

    /// Number of successful `read` calls so far
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DeclarationSource for InMemorySource {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let documents = self.documents.lock().unwrap_or_else(|e| e.into_inner());
        let content = documents.get(&normalize(path)).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no document at {}", path.display()),
            )
        })?;
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(content)
    }

    fn exists(&self, path: &Path) -> bool {
        let documents = self.documents.lock().unwrap_or_else(|e| e.into_inner());
        documents.contains_key(&normalize(path))
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        normalize(path)
    }
}

/// Lexically drop `.` segments and fold `..` into a preceding named segment.
///
/// Leading `..` segments are kept, so `../fox.yml` and `fox.yml` stay distinct.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                let named = matches!(last, Some(Component::Normal(_)));
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));
                if named {
                    out.pop();
                } else if !at_root {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
