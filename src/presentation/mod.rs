//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Terminal capability detection and output styling
//! - Output formatting (text/JSON)
//! - Diagnostic logging setup
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `context` - Color/unicode decisions for one run
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Set, failure and export views
//! - `theme` - Colors and icons, with ASCII fallbacks

pub mod cli;
pub mod context;
pub mod factory;
pub mod logging;
pub mod output;
pub mod terminal;
pub mod theme;

pub use cli::{Cli, ColorWhen, Commands};
pub use context::UiContext;
pub use factory::{create_export_use_case, create_registry};
pub use output::Style;
