//! Lazily built class metadata cache.
//!
//! The only registry store mutated after construction. Entries are added on
//! first request (or eagerly by `preload`) and never evicted: a class's
//! structure is fixed for the lifetime of the process.
//!
//! # Thread Safety
//! A single `RwLock` guards the map. Reflection runs with no lock held, so
//! concurrent first accesses for one class may each build metadata; the last
//! insert wins. Readers only ever see fully built `Arc<ClassMetadata>`.

use std::sync::Arc;

use data_types::{ClassMetadata, TypeName};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{ReflectionProvider, Result};

/// Metadata keyed by canonical class identifier.
#[derive(Debug, Default)]
pub struct ClassMetadataCache {
    classes: RwLock<FxHashMap<TypeName, Arc<ClassMetadata>>>,
}

impl ClassMetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached metadata, without building.
    pub fn get(&self, class: &TypeName) -> Option<Arc<ClassMetadata>> {
        self.classes.read().get(class).cloned()
    }

    /// Cached metadata for `class`, reflecting and storing it on a miss.
    ///
    /// A reflection failure is returned as is and leaves no entry behind.
    pub fn get_or_build(
        &self,
        class: &TypeName,
        reflection: &dyn ReflectionProvider,
    ) -> Result<Arc<ClassMetadata>> {
        // Fast path: already cached
        if let Some(hit) = self.get(class) {
            trace!(%class, "class metadata cache hit");
            return Ok(hit);
        }

        // Slow path: build outside the lock
        let built = Arc::new(reflection.reflect(class)?);
        debug!(
            %class,
            properties = built.properties.len(),
            "built class metadata"
        );

        self.classes.write().insert(class.clone(), Arc::clone(&built));
        Ok(built)
    }

    /// Seed the cache, overwriting existing entries with the same name.
    ///
    /// Meant for process warm-up, before concurrent lookups begin.
    pub fn preload<I>(&self, classes: I) -> usize
    where
        I: IntoIterator<Item = ClassMetadata>,
    {
        let mut map = self.classes.write();
        let mut count = 0;
        for class in classes {
            map.insert(class.name.clone(), Arc::new(class));
            count += 1;
        }
        debug!(count, total = map.len(), "preloaded class metadata");
        count
    }

    /// Copy of the current entries. Never builds anything.
    pub fn snapshot(&self) -> FxHashMap<TypeName, Arc<ClassMetadata>> {
        self.classes.read().clone()
    }

    pub fn contains(&self, class: &TypeName) -> bool {
        self.classes.read().contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.classes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.read().is_empty()
    }
}
