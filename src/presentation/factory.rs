//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{DeclarationRegistry, ExportUseCase};
use crate::config::Config;
use crate::domain::services::DeclarationLocator;
use crate::infrastructure::{FsDeclarationSource, ManifestRenderer, SerdeDecoder};

/// Registry reading declarations from disk, with the configured fallback
/// extensions.
pub fn create_registry(config: &Config) -> DeclarationRegistry {
    DeclarationRegistry::new(
        Arc::new(FsDeclarationSource::new()),
        Arc::new(SerdeDecoder::new()),
    )
    .with_locator(DeclarationLocator::new(config.resolve.extensions.clone()))
}

/// Export use case writing JSON render manifests.
pub fn create_export_use_case() -> ExportUseCase {
    ExportUseCase::new(Arc::new(ManifestRenderer::new()))
}
