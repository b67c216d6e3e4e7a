//! Domain Layer
//!
//! The core of emotegen: the entry model and set resolution, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - AssetRef, Overwrite, Entry, VariantSet
//! - `value_objects/` - Node (decoded document tree), DeclarationFormat, ConfigWarning
//! - `services/` - Entry decoding, overwrite merging, set resolution
//! - `ports/` - Interfaces for declaration sources, decoders and renderers

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
