//! Domain Entities
//!
//! - `AssetRef` - A drawable attached to an entry
//! - `Overwrite` - A recolor/remove directive against an inherited asset
//! - `Entry` - One emote of a set
//! - `VariantSet` - A resolved, ordered collection of entries

mod asset_ref;
mod entry;
mod overwrite;
mod variant_set;

pub use asset_ref::AssetRef;
pub use entry::{Entry, DEFAULT_BASE_ENTRY};
pub use overwrite::Overwrite;
pub use variant_set::{DuplicateEntry, VariantSet};
