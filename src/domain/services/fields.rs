//! Field-by-field reading of mapping nodes
//!
//! Every typed view of a declaration goes through `Fields`, which rejects
//! keys the caller does not list instead of silently ignoring them.

use std::path::PathBuf;

use crate::domain::value_objects::Node;

use super::suggest::closest_match;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{context} must be a mapping, found {found}")]
    NotAMapping { context: String, found: &'static str },

    #[error("{context} is missing required field '{field}'")]
    MissingField { context: String, field: &'static str },

    #[error("{context}: field '{field}' must be a {expected}, found {found}")]
    WrongType {
        context: String,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{context}: unknown field '{key}'{}", .suggestion.as_ref().map(|s| format!(" (did you mean '{}'?)", s)).unwrap_or_default())]
    UnknownKey {
        context: String,
        key: String,
        suggestion: Option<String>,
    },
}

/// Typed accessors over one mapping node.
pub(crate) struct Fields<'a> {
    context: String,
    entries: &'a [(String, Node)],
}

impl<'a> Fields<'a> {
    pub(crate) fn new(node: &'a Node, context: impl Into<String>) -> Result<Self, FieldError> {
        let context = context.into();
        match node.as_mapping() {
            Some(entries) => Ok(Self { context, entries }),
            None => Err(FieldError::NotAMapping {
                context,
                found: node.kind_name(),
            }),
        }
    }

    /// Rename the context once a better label (e.g. the entry name) is known.
    pub(crate) fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    pub(crate) fn context(&self) -> &str {
        &self.context
    }

    /// Fail on the first key not in `known`.
    pub(crate) fn deny_unknown(&self, known: &[&str]) -> Result<(), FieldError> {
        match self.entries.iter().find(|(k, _)| !known.contains(&k.as_str())) {
            Some((key, _)) => Err(FieldError::UnknownKey {
                context: self.context.clone(),
                key: key.clone(),
                suggestion: closest_match(key, known),
            }),
            None => Ok(()),
        }
    }

    fn lookup(&self, field: &str) -> Option<&'a Node> {
        self.entries
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v)
            .filter(|v| !v.is_null())
    }

    fn wrong_type(&self, field: &'static str, expected: &'static str, found: &Node) -> FieldError {
        FieldError::WrongType {
            context: self.context.clone(),
            field,
            expected,
            found: found.kind_name(),
        }
    }

    pub(crate) fn required_str(&self, field: &'static str) -> Result<&'a str, FieldError> {
        self.optional_str(field)?
            .ok_or_else(|| FieldError::MissingField {
                context: self.context.clone(),
                field,
            })
    }

    pub(crate) fn optional_str(&self, field: &'static str) -> Result<Option<&'a str>, FieldError> {
        match self.lookup(field) {
            None => Ok(None),
            Some(node) => node
                .as_str()
                .map(Some)
                .ok_or_else(|| self.wrong_type(field, "string", node)),
        }
    }

    pub(crate) fn optional_path(&self, field: &'static str) -> Result<Option<PathBuf>, FieldError> {
        Ok(self.optional_str(field)?.map(PathBuf::from))
    }

    pub(crate) fn optional_bool(&self, field: &'static str) -> Result<Option<bool>, FieldError> {
        match self.lookup(field) {
            None => Ok(None),
            Some(node) => node
                .as_bool()
                .map(Some)
                .ok_or_else(|| self.wrong_type(field, "boolean", node)),
        }
    }

    /// Sequence field; absent or `null` reads as empty.
    pub(crate) fn optional_seq(&self, field: &'static str) -> Result<&'a [Node], FieldError> {
        match self.lookup(field) {
            None => Ok(&[]),
            Some(node) => node
                .as_sequence()
                .ok_or_else(|| self.wrong_type(field, "sequence", node)),
        }
    }

    pub(crate) fn required_seq(&self, field: &'static str) -> Result<&'a [Node], FieldError> {
        if self.lookup(field).is_none() {
            return Err(FieldError::MissingField {
                context: self.context.clone(),
                field,
            });
        }
        self.optional_seq(field)
    }
}
