//! emotegen - layered emote declarations
//!
//! Emote sets are declared in YAML or JSON. A set may be `basedOn` another
//! set in the same directory; resolving it yields every inherited entry with
//! the child's overwrites applied, followed by the entries the child adds.
//! Resolved sets can then be exported entry by entry.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeclarationRegistry, EntrySelection, ExportReport, ExportUseCase};
pub use config::Config;
pub use domain::entities::{AssetRef, Entry, Overwrite, VariantSet};
pub use domain::services::ResolveError;
pub use error::{EmotegenError, EmotegenResult};
