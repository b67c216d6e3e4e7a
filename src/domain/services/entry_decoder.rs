//! Entry decoding
//!
//! Builds typed entries from the generic tree of one `variants` item.
//! Recognized shape:
//!
//! ```yaml
//! - name: happy
//!   base: base            # optional
//!   src: happy.svg        # optional
//!   objects:              # optional
//!     - type: eye
//!       src: eye.svg
//!   overwrites:           # optional
//!     - id: eye
//!       color: blue
//!     - id: blush
//!       remove: true
//! ```

use crate::domain::entities::{AssetRef, Entry, Overwrite};
use crate::domain::value_objects::Node;

use super::fields::{FieldError, Fields};

const ENTRY_KEYS: &[&str] = &["name", "base", "src", "objects", "overwrites"];
const OBJECT_KEYS: &[&str] = &["type", "src"];
const OVERWRITE_KEYS: &[&str] = &["id", "color", "remove"];

/// Decode one entry mapping declared by the set named `origin`.
pub fn decode_entry(node: &Node, origin: &str) -> Result<Entry, FieldError> {
    let mut fields = Fields::new(node, "variant")?;
    let name = fields.required_str("name")?;
    fields.set_context(format!("variant '{}'", name));
    fields.deny_unknown(ENTRY_KEYS)?;

    let mut entry = Entry::new(name, origin);
    if let Some(base) = fields.optional_str("base")? {
        entry = entry.with_base_name(base);
    }
    if let Some(src) = fields.optional_path("src")? {
        entry = entry.with_source(src);
    }

    let assets = fields
        .optional_seq("objects")?
        .iter()
        .map(|object| decode_asset(object, fields.context()))
        .collect::<Result<Vec<_>, _>>()?;

    let overwrites = fields
        .optional_seq("overwrites")?
        .iter()
        .map(|overwrite| decode_overwrite(overwrite, fields.context()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(entry.with_assets(assets).with_overwrites(overwrites))
}

fn decode_asset(node: &Node, parent: &str) -> Result<AssetRef, FieldError> {
    let fields = Fields::new(node, format!("{}: object", parent))?;
    fields.deny_unknown(OBJECT_KEYS)?;

    let asset = AssetRef::new(fields.required_str("type")?);
    Ok(match fields.optional_path("src")? {
        Some(src) => asset.with_source(src),
        None => asset,
    })
}

fn decode_overwrite(node: &Node, parent: &str) -> Result<Overwrite, FieldError> {
    let fields = Fields::new(node, format!("{}: overwrite", parent))?;
    fields.deny_unknown(OVERWRITE_KEYS)?;

    Ok(Overwrite::new(
        fields.required_str("id")?,
        fields.optional_str("color")?.map(str::to_string),
        fields.optional_bool("remove")?.unwrap_or(false),
    ))
}
