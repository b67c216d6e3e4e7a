//! Set resolver
//!
//! Turns one decoded declaration into a `VariantSet`, merging it onto its
//! already-resolved base set when it has one:
//! - a declared entry whose name exists in the base replaces that entry, at
//!   the same position, with `apply_overwrite(base_entry, entry)`
//! - other declared entries are appended after the inherited ones, in
//!   declaration order
//!
//! Loading the base (and guarding against cycles) is the registry's job; see
//! `application::DeclarationRegistry`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::domain::entities::{DuplicateEntry, Entry, VariantSet};
use crate::domain::value_objects::Node;

use super::entry_decoder::decode_entry;
use super::entry_merger::{apply_overwrite, MergeError};
use super::fields::{FieldError, Fields};

const DECLARATION_KEYS: &[&str] = &["name", "basedOn", "basedOff", "variants"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("declaration not found: {path}")]
    DeclarationNotFound { path: PathBuf },

    #[error("failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("invalid declaration {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("set '{set}' ({declared_in}) is based on '{base}', but {expected} does not exist")]
    BaseNotFound {
        set: String,
        base: String,
        expected: PathBuf,
        declared_in: PathBuf,
    },

    #[error("cyclic inheritance: {}", .cycle.join(" -> "))]
    CyclicInheritance {
        cycle: Vec<String>,
        paths: Vec<PathBuf>,
    },

    #[error("duplicate entry '{entry}' in set '{set}' ({path})")]
    DuplicateEntryName {
        set: String,
        entry: String,
        path: PathBuf,
    },

    #[error("set '{set}' ({path}): overwrite '{target}' on entry '{entry}' matches no inherited asset")]
    UnknownOverwriteTarget {
        set: String,
        entry: String,
        target: String,
        path: PathBuf,
    },

    #[error("set '{set}' ({path}): entry '{entry}' has overwrites but no inherited entry to apply them to")]
    OverwriteWithoutBase {
        set: String,
        entry: String,
        path: PathBuf,
    },
}

impl ResolveError {
    /// Declaration file the error should be fixed in.
    pub fn path(&self) -> &Path {
        match self {
            ResolveError::DeclarationNotFound { path }
            | ResolveError::Read { path, .. }
            | ResolveError::Decode { path, .. }
            | ResolveError::DuplicateEntryName { path, .. }
            | ResolveError::UnknownOverwriteTarget { path, .. }
            | ResolveError::OverwriteWithoutBase { path, .. } => path,
            ResolveError::BaseNotFound { declared_in, .. } => declared_in,
            ResolveError::CyclicInheritance { paths, .. } => {
                paths.first().map(PathBuf::as_path).unwrap_or_else(|| Path::new(""))
            }
        }
    }

    /// Name of the set that failed, when it was decoded far enough to know.
    pub fn set_name(&self) -> Option<&str> {
        match self {
            ResolveError::BaseNotFound { set, .. }
            | ResolveError::DuplicateEntryName { set, .. }
            | ResolveError::UnknownOverwriteTarget { set, .. }
            | ResolveError::OverwriteWithoutBase { set, .. } => Some(set),
            ResolveError::CyclicInheritance { cycle, .. } => cycle.first().map(String::as_str),
            _ => None,
        }
    }
}

/// A decoded, not yet merged, declaration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub path: PathBuf,
    pub name: String,
    pub based_on: Option<String>,
    /// Entries in declaration order, names already checked for uniqueness
    pub entries: Vec<Entry>,
}

/// Extract name, base reference and entries from a decoded document.
pub fn parse_declaration(path: &Path, node: &Node) -> Result<Declaration, ResolveError> {
    let decode = |e: FieldError| ResolveError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut fields = Fields::new(node, "declaration").map_err(decode)?;
    let name = fields.required_str("name").map_err(decode)?;
    fields.set_context(format!("set '{}'", name));
    fields.deny_unknown(DECLARATION_KEYS).map_err(decode)?;

    // `basedOff` is the spelling used by older declaration files.
    let based_on = match (
        fields.optional_str("basedOn").map_err(decode)?,
        fields.optional_str("basedOff").map_err(decode)?,
    ) {
        (Some(_), Some(_)) => {
            return Err(ResolveError::Decode {
                path: path.to_path_buf(),
                message: format!("{}: 'basedOn' and 'basedOff' are both set", fields.context()),
            })
        }
        (on, off) => on.or(off),
    };

    let variants = fields.required_seq("variants").map_err(decode)?;
    let mut entries: Vec<Entry> = Vec::with_capacity(variants.len());
    let mut seen: HashSet<String> = HashSet::with_capacity(variants.len());
    for variant in variants {
        let entry = decode_entry(variant, name).map_err(|e| ResolveError::Decode {
            path: path.to_path_buf(),
            message: format!("{}: {}", fields.context(), e),
        })?;

        if !seen.insert(entry.name().to_string()) {
            return Err(ResolveError::DuplicateEntryName {
                set: name.to_string(),
                entry: entry.name().to_string(),
                path: path.to_path_buf(),
            });
        }
        entries.push(entry);
    }

    Ok(Declaration {
        path: path.to_path_buf(),
        name: name.to_string(),
        based_on: based_on.map(str::to_string),
        entries,
    })
}

/// Merge `declaration` onto `base` (if any) into a finished set.
pub fn resolve_declaration(
    declaration: Declaration,
    base: Option<&VariantSet>,
) -> Result<VariantSet, ResolveError> {
    let Declaration {
        path,
        name,
        based_on,
        entries,
    } = declaration;

    let orphan = |entry: &Entry| ResolveError::OverwriteWithoutBase {
        set: name.clone(),
        entry: entry.name().to_string(),
        path: path.clone(),
    };

    let merged = match base {
        None => {
            if let Some(entry) = entries.iter().find(|e| !e.overwrites().is_empty()) {
                return Err(orphan(entry));
            }
            entries
        }
        Some(base) => {
            let mut merged: Vec<Entry> = base.entries().to_vec();
            let mut additional: Vec<Entry> = Vec::new();

            for entry in entries {
                match base.position(entry.name()) {
                    Some(position) => {
                        trace!(set = %name, entry = entry.name(), base = base.name(), "applying overwrite");
                        merged[position] = apply_overwrite(&merged[position], &entry).map_err(
                            |MergeError::UnknownOverwriteTarget { entry, target, .. }| {
                                ResolveError::UnknownOverwriteTarget {
                                    set: name.clone(),
                                    entry,
                                    target,
                                    path: path.clone(),
                                }
                            },
                        )?;
                    }
                    None if !entry.overwrites().is_empty() => return Err(orphan(&entry)),
                    None => additional.push(entry),
                }
            }

            merged.extend(additional);
            merged
        }
    };

    let set = VariantSet::new(name.as_str(), path.as_path(), merged).map_err(|DuplicateEntry(entry)| {
        ResolveError::DuplicateEntryName {
            set: name.clone(),
            entry,
            path: path.clone(),
        }
    })?;

    Ok(match based_on {
        Some(base_name) => set.with_based_on(base_name),
        None => set,
    })
}
