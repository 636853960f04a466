//! Global transformer lookup by runtime value type.
//!
//! Registration order is part of the contract: pairs are tried in the order
//! they were registered and the first whose key the value's type is (exactly
//! or through an ancestor) wins. A later, more specific registration never
//! overrides an earlier, broader one; register overrides first.

use std::fmt;
use std::sync::Arc;

use data_types::{TypeLineage, TypeName, Value};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::trace;

use crate::Transformer;

/// Insertion-ordered type identifier → transformer.
#[derive(Default)]
pub struct GlobalTransformerIndex {
    transformers: IndexMap<TypeName, Arc<dyn Transformer>, FxBuildHasher>,
}

impl GlobalTransformerIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `transformer` for `ty`.
    ///
    /// Re-registering a type replaces its transformer but keeps its original
    /// position in the lookup order.
    pub fn insert(&mut self, ty: TypeName, transformer: Arc<dyn Transformer>) {
        self.transformers.insert(ty, transformer);
    }

    /// Transformer for a runtime value.
    ///
    /// Scalars, sequences, mappings and null never have one.
    pub fn find(&self, value: &Value) -> Option<&Arc<dyn Transformer>> {
        let Some(object) = value.as_object() else {
            trace!(kind = ?value.kind(), "no global transformer for non-object value");
            return None;
        };
        self.find_for_lineage(&object.lineage)
    }

    /// First registered pair whose key `lineage` is.
    pub fn find_for_lineage(&self, lineage: &TypeLineage) -> Option<&Arc<dyn Transformer>> {
        for (ty, transformer) in &self.transformers {
            if lineage.is_exactly(ty) {
                trace!(class = %lineage.name, %ty, "global transformer found (exact)");
                return Some(transformer);
            }

            if lineage.is_a(ty) {
                trace!(class = %lineage.name, %ty, "global transformer found (ancestor)");
                return Some(transformer);
            }
        }

        trace!(class = %lineage.name, "no global transformer");
        None
    }

    /// Registered types in lookup order.
    pub fn types(&self) -> impl Iterator<Item = &TypeName> {
        self.transformers.keys()
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

impl fmt::Debug for GlobalTransformerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalTransformerIndex")
            .field("types", &self.types().map(TypeName::as_str).collect::<Vec<_>>())
            .finish()
    }
}
