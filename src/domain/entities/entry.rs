//! Entry entity - one emote of a variant set
//!
//! Entries are values: merging a child declaration onto an inherited entry
//! produces a new `Entry` (see `domain::services::apply_overwrite`), so an
//! entry held by a cached base set is never changed after resolution.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{AssetRef, Overwrite};

/// Name of the emote an entry builds on when it declares neither `base` nor `src`.
pub const DEFAULT_BASE_ENTRY: &str = "base";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    name: String,
    /// Every declaration that contributed to this entry, oldest first
    origin_chain: Vec<String>,
    #[serde(rename = "base", skip_serializing_if = "Option::is_none")]
    base_name: Option<String>,
    #[serde(rename = "src", skip_serializing_if = "Option::is_none")]
    source: Option<PathBuf>,
    assets: Vec<AssetRef>,
    overwrites: Vec<Overwrite>,
}

impl Entry {
    /// Create an empty entry declared by `origin`.
    pub fn new(name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin_chain: vec![origin.into()],
            base_name: None,
            source: None,
            assets: Vec::new(),
            overwrites: Vec::new(),
        }
    }

    /// Builder: set the base emote name
    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = Some(base_name.into());
        self
    }

    /// Builder: set the SVG source
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Builder: set the assets
    pub fn with_assets(mut self, assets: Vec<AssetRef>) -> Self {
        self.assets = assets;
        self
    }

    /// Builder: set the overwrite directives
    pub fn with_overwrites(mut self, overwrites: Vec<Overwrite>) -> Self {
        self.overwrites = overwrites;
        self
    }

    /// Builder: replace the origin chain.
    ///
    /// An empty chain is ignored; every entry keeps at least its declaring origin.
    pub(crate) fn with_origin_chain(mut self, origin_chain: Vec<String>) -> Self {
        if !origin_chain.is_empty() {
            self.origin_chain = origin_chain;
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin_chain(&self) -> &[String] {
        &self.origin_chain
    }

    /// The declaration that most recently changed this entry.
    pub fn latest_origin(&self) -> &str {
        self.origin_chain.last().map(String::as_str).unwrap_or("")
    }

    pub fn base_name(&self) -> Option<&str> {
        self.base_name.as_deref()
    }

    /// The emote this entry is drawn on top of.
    ///
    /// Entries with neither an explicit `base` nor their own `src` build on
    /// the set's `base` emote; entries with a `src` stand alone.
    pub fn effective_base(&self) -> Option<&str> {
        match (&self.base_name, &self.source) {
            (Some(base), _) => Some(base),
            (None, Some(_)) => None,
            (None, None) if self.name == DEFAULT_BASE_ENTRY => None,
            (None, None) => Some(DEFAULT_BASE_ENTRY),
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn assets(&self) -> &[AssetRef] {
        &self.assets
    }

    pub fn asset(&self, kind: &str) -> Option<&AssetRef> {
        self.assets.iter().find(|a| a.kind() == kind)
    }

    pub fn overwrites(&self) -> &[Overwrite] {
        &self.overwrites
    }
}
