//! VariantSet entity - a resolved, ordered collection of entries

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Entry;

/// Two entries of one set share a name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate entry '{0}'")]
pub struct DuplicateEntry(pub String);

/// A fully resolved variant set.
///
/// Entries keep insertion order: inherited entries first (in the base set's
/// order), then entries introduced by this set in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantSet {
    name: String,
    #[serde(rename = "basedOn", skip_serializing_if = "Option::is_none")]
    based_on: Option<String>,
    path: PathBuf,
    entries: Vec<Entry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl VariantSet {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        entries: Vec<Entry>,
    ) -> Result<Self, DuplicateEntry> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.name().to_string(), position).is_some() {
                return Err(DuplicateEntry(entry.name().to_string()));
            }
        }

        Ok(Self {
            name: name.into(),
            based_on: None,
            path: path.into(),
            entries,
            index,
        })
    }

    /// Builder: record the base set name
    pub fn with_based_on(mut self, based_on: impl Into<String>) -> Self {
        self.based_on = Some(based_on.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn based_on(&self) -> Option<&str> {
        self.based_on.as_deref()
    }

    /// Declaration file this set was resolved from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory asset paths are relative to
    pub fn declaration_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
