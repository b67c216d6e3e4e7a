//! Overwrite directive

use serde::Serialize;

/// Instruction to recolor or remove one asset of an inherited entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overwrite {
    target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    remove: bool,
}

impl Overwrite {
    /// Directive that replaces the color of the asset keyed `target`.
    pub fn recolor(target: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            color: Some(color.into()),
            remove: false,
        }
    }

    /// Directive that deletes the asset keyed `target`.
    pub fn remove(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            color: None,
            remove: true,
        }
    }

    pub fn new(target: impl Into<String>, color: Option<String>, remove: bool) -> Self {
        Self {
            target: target.into(),
            color,
            remove,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn is_remove(&self) -> bool {
        self.remove
    }
}
