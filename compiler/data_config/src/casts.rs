//! Global cast lookup by declared property type.

use std::fmt;
use std::sync::Arc;

use data_types::{TypeAcceptance, TypeName};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::Cast;

/// Type identifier → cast. Immutable once the registry is built.
#[derive(Default)]
pub struct GlobalCastIndex {
    casts: FxHashMap<TypeName, Arc<dyn Cast>>,
}

impl GlobalCastIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `cast` for `ty`, replacing any earlier registration.
    pub fn insert(&mut self, ty: TypeName, cast: Arc<dyn Cast>) {
        self.casts.insert(ty, cast);
    }

    /// First cast registered for any candidate of `acceptance`.
    ///
    /// Candidates are tried accepted type by accepted type, and within one
    /// accepted type the type itself before its bases. `None` means no global
    /// cast applies and the caller should fall back to local resolution.
    pub fn find(&self, acceptance: &TypeAcceptance) -> Option<&Arc<dyn Cast>> {
        let found = acceptance
            .candidates()
            .find_map(|ty| self.casts.get(ty).map(|cast| (ty, cast)));
        match found {
            Some((ty, cast)) => {
                trace!(%ty, "global cast found");
                Some(cast)
            }
            None => {
                trace!(accepted = acceptance.len(), "no global cast");
                None
            }
        }
    }

    pub fn get(&self, ty: &TypeName) -> Option<&Arc<dyn Cast>> {
        self.casts.get(ty)
    }

    pub fn len(&self) -> usize {
        self.casts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.casts.is_empty()
    }
}

impl fmt::Debug for GlobalCastIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&str> = self.casts.keys().map(TypeName::as_str).collect();
        types.sort_unstable();
        f.debug_struct("GlobalCastIndex")
            .field("types", &types)
            .finish()
    }
}

#[cfg(test)]
mod tests;
