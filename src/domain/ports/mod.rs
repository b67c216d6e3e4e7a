//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod declaration_source;
pub mod document_decoder;
pub mod entry_renderer;

pub use declaration_source::DeclarationSource;
pub use document_decoder::{DocumentDecoder, SyntaxError};
pub use entry_renderer::{EntryRenderer, RenderError, RenderRequest, RenderedEntry};
