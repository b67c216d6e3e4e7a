//! Application Layer
//!
//! Use cases that orchestrate the resolution and export flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain merge rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeclarationRegistry` - Loads declarations, follows `basedOn` chains, caches resolved sets
//! - `ExportUseCase` - Renders the selected entries of a resolved set

pub mod export;
pub mod registry;

pub use export::{EntrySelection, ExportError, ExportReport, ExportUseCase};
pub use registry::DeclarationRegistry;
