//! Entry merger
//!
//! Applies a child declaration of an entry onto the inherited entry:
//! - `remove` directives delete every asset with the matching kind
//! - other directives replace the color of every matching asset
//! - assets declared by the child are appended after the inherited ones
//!
//! The inherited entry is only read; the result is a new value.

use crate::domain::entities::{AssetRef, Entry, Overwrite};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    #[error("overwrite '{target}' on entry '{entry}' matches no inherited asset (available: {})", .available.join(", "))]
    UnknownOverwriteTarget {
        entry: String,
        target: String,
        available: Vec<String>,
    },
}

/// Merge `incoming` onto `base`, returning the combined entry.
pub fn apply_overwrite(base: &Entry, incoming: &Entry) -> Result<Entry, MergeError> {
    let mut assets: Vec<AssetRef> = base.assets().to_vec();

    for directive in incoming.overwrites() {
        let target = directive.target();
        if !assets.iter().any(|a| a.kind() == target) {
            return Err(MergeError::UnknownOverwriteTarget {
                entry: incoming.name().to_string(),
                target: target.to_string(),
                available: assets.iter().map(|a| a.kind().to_string()).collect(),
            });
        }

        if directive.is_remove() {
            assets.retain(|a| a.kind() != target);
        } else if let Some(color) = directive.color() {
            for asset in assets.iter_mut().filter(|a| a.kind() == target) {
                *asset = recolor(asset, color);
            }
        }
    }

    assets.extend(incoming.assets().iter().cloned());

    let origin_chain: Vec<String> = base
        .origin_chain()
        .iter()
        .chain(incoming.origin_chain())
        .cloned()
        .collect();

    let overwrites: Vec<Overwrite> = base
        .overwrites()
        .iter()
        .chain(incoming.overwrites())
        .cloned()
        .collect();

    let mut merged = Entry::new(base.name(), incoming.latest_origin())
        .with_origin_chain(origin_chain)
        .with_assets(assets)
        .with_overwrites(overwrites);

    if let Some(base_name) = incoming.base_name().or(base.base_name()) {
        merged = merged.with_base_name(base_name);
    }
    if let Some(source) = incoming.source().or(base.source()) {
        merged = merged.with_source(source);
    }

    Ok(merged)
}

fn recolor(asset: &AssetRef, color: &str) -> AssetRef {
    let patched = AssetRef::new(asset.kind()).with_color(color);
    match asset.source() {
        Some(source) => patched.with_source(source),
        None => patched,
    }
}
