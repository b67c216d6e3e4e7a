//! DocumentDecoder port
//!
//! Turns raw declaration bytes into a generic `Node` tree.

use crate::domain::value_objects::{DeclarationFormat, Node};

pub trait DocumentDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8], format: DeclarationFormat) -> Result<Node, SyntaxError>;
}

/// Malformed document (not valid YAML/JSON, or not representable as a `Node`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{format} syntax error{}: {message}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
pub struct SyntaxError {
    pub format: &'static str,
    pub line: Option<usize>,
    pub message: String,
}

impl SyntaxError {
    pub fn new(format: DeclarationFormat, message: impl Into<String>) -> Self {
        Self {
            format: format.as_str(),
            line: None,
            message: message.into(),
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}
