//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//! - `SerdeDecoder` - YAML/JSON → `Node`
//! - `FsDeclarationSource` / `InMemorySource` - declaration bytes
//! - `ManifestRenderer` - per-entry JSON render manifests
//! - declaration discovery for CLI arguments

pub mod decoder;
pub mod discovery;
pub mod fs_source;
pub mod manifest_renderer;
pub mod memory_source;

pub use decoder::SerdeDecoder;
pub use discovery::{discover_declarations, expand_declaration_args};
pub use fs_source::FsDeclarationSource;
pub use manifest_renderer::ManifestRenderer;
pub use memory_source::InMemorySource;
