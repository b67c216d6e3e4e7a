//! Domain Value Objects
//!
//! Immutable value types shared across the domain layer.

mod config_warning;
mod declaration_format;
mod node;

pub use config_warning::ConfigWarning;
pub use declaration_format::DeclarationFormat;
pub use node::Node;
