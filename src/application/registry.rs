//! Declaration Registry
//!
//! Memoizes resolved sets by canonical declaration path, so a base shared by
//! several children is decoded and resolved once per registry.
//!
//! ## Resolution
//!
//! `get` walks the `basedOn` chain iteratively: each declaration is decoded
//! once and pushed on the active-resolution stack until the walk reaches a
//! cached set or a declaration without a base. The chain is then folded
//! oldest-first through `resolve_declaration`, caching every set as it is
//! produced. Meeting a path that is already on the stack is a
//! `CyclicInheritance` error.
//!
//! A registry is scoped to one run. It takes `&mut self` and is not meant to
//! be shared between concurrent top-level resolutions; the sets it hands out
//! are immutable and can be shared freely.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::VariantSet;
use crate::domain::ports::{DeclarationSource, DocumentDecoder};
use crate::domain::services::{
    parse_declaration, resolve_declaration, Declaration, DeclarationLocator, ResolveError,
};
use crate::domain::value_objects::DeclarationFormat;

/// A declaration currently being resolved.
#[derive(Debug, Clone)]
struct ActiveDeclaration {
    path: PathBuf,
    name: String,
}

pub struct DeclarationRegistry {
    source: Arc<dyn DeclarationSource>,
    decoder: Arc<dyn DocumentDecoder>,
    locator: DeclarationLocator,
    cache: HashMap<PathBuf, Arc<VariantSet>>,
    active: Vec<ActiveDeclaration>,
    decoded: usize,
}

impl DeclarationRegistry {
    pub fn new(source: Arc<dyn DeclarationSource>, decoder: Arc<dyn DocumentDecoder>) -> Self {
        Self {
            source,
            decoder,
            locator: DeclarationLocator::default(),
            cache: HashMap::new(),
            active: Vec::new(),
            decoded: 0,
        }
    }

    pub fn with_locator(mut self, locator: DeclarationLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Resolved set for the declaration at `path`.
    pub fn get(&mut self, path: &Path) -> Result<Arc<VariantSet>, ResolveError> {
        let result = self.resolve_chain(path);
        self.active.clear();
        result
    }

    /// Resolve several top-level declarations independently.
    ///
    /// A failure only affects its own path (and anything based on it); sets
    /// resolved along the way stay cached for the remaining paths.
    pub fn resolve_all(
        &mut self,
        paths: &[PathBuf],
    ) -> Vec<(PathBuf, Result<Arc<VariantSet>, ResolveError>)> {
        paths
            .iter()
            .map(|path| (path.clone(), self.get(path)))
            .collect()
    }

    /// Number of documents decoded so far.
    pub fn decode_count(&self) -> usize {
        self.decoded
    }

    pub fn cached(&self, path: &Path) -> Option<Arc<VariantSet>> {
        self.cache.get(&self.source.canonicalize(path)).cloned()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn resolve_chain(&mut self, path: &Path) -> Result<Arc<VariantSet>, ResolveError> {
        let key = self.source.canonicalize(path);
        if let Some(set) = self.cache.get(&key) {
            debug!(path = %key.display(), "declaration cache hit");
            return Ok(Arc::clone(set));
        }

        let top = self.enter(&key, None)?;
        let mut bases: Vec<Declaration> = Vec::new();

        let inherited = loop {
            let child = bases.last().unwrap_or(&top);
            let Some(base_name) = child.based_on.as_deref() else {
                break None;
            };

            let located = self
                .locator
                .locate(self.source.as_ref(), &child.path, base_name);
            let base_key = self.source.canonicalize(&located);
            debug!(set = %child.name, base = base_name, path = %base_key.display(), "located base declaration");

            if let Some(set) = self.cache.get(&base_key) {
                debug!(path = %base_key.display(), "declaration cache hit");
                break Some(Arc::clone(set));
            }

            let base = self.enter(&base_key, Some(child))?;
            bases.push(base);
        };

        let mut resolved = inherited;
        for declaration in bases.into_iter().rev() {
            let set = resolve_declaration(declaration, resolved.as_deref())?;
            resolved = Some(self.store(set));
        }

        let set = resolve_declaration(top, resolved.as_deref())?;
        Ok(self.store(set))
    }

    /// Decode the declaration at `path` and push it on the active stack.
    ///
    /// `dependent` is the declaration that referenced `path` as its base.
    fn enter(
        &mut self,
        path: &Path,
        dependent: Option<&Declaration>,
    ) -> Result<Declaration, ResolveError> {
        if let Some(start) = self.active.iter().position(|a| a.path == path) {
            return Err(self.cycle_from(start));
        }

        if !self.source.exists(path) {
            return Err(match dependent {
                Some(child) => ResolveError::BaseNotFound {
                    set: child.name.clone(),
                    base: child.based_on.clone().unwrap_or_default(),
                    expected: path.to_path_buf(),
                    declared_in: child.path.clone(),
                },
                None => ResolveError::DeclarationNotFound {
                    path: path.to_path_buf(),
                },
            });
        }

        let bytes = self.source.read(path).map_err(|e| ResolveError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let format = DeclarationFormat::from_path(path).unwrap_or_default();
        debug!(path = %path.display(), format = format.as_str(), "decoding declaration");
        self.decoded += 1;
        let node = self
            .decoder
            .decode(&bytes, format)
            .map_err(|e| ResolveError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let declaration = parse_declaration(path, &node)?;
        self.active.push(ActiveDeclaration {
            path: path.to_path_buf(),
            name: declaration.name.clone(),
        });
        Ok(declaration)
    }

    fn cycle_from(&self, start: usize) -> ResolveError {
        let looped = &self.active[start..];
        let mut cycle: Vec<String> = looped.iter().map(|a| a.name.clone()).collect();
        let mut paths: Vec<PathBuf> = looped.iter().map(|a| a.path.clone()).collect();
        cycle.push(looped[0].name.clone());
        paths.push(looped[0].path.clone());
        ResolveError::CyclicInheritance { cycle, paths }
    }

    fn store(&mut self, set: VariantSet) -> Arc<VariantSet> {
        debug!(set = set.name(), entries = set.len(), "resolved set");
        let set = Arc::new(set);
        self.cache
            .insert(set.path().to_path_buf(), Arc::clone(&set));
        set
    }
}
