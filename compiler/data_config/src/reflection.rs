//! Reflection collaborator.
//!
//! Turning a class identifier into `ClassMetadata` (walking properties,
//! declared types, ancestors and attributes) happens outside the registry.
//! The registry only asks for a finished record and memoizes it.

use data_types::{ClassMetadata, TypeName};
use rustc_hash::FxHashMap;

use crate::{RegistryError, Result};

/// Builds metadata for a class identifier.
///
/// Must be a deterministic, side-effect-free function of `class`: the cache
/// may call it more than once for the same class under concurrent first
/// access.
pub trait ReflectionProvider: Send + Sync {
    fn reflect(&self, class: &TypeName) -> Result<ClassMetadata>;
}

/// Reflection over a fixed table of declared classes.
///
/// Used by tools that already hold complete metadata (generated code,
/// discovery passes) and by tests.
#[derive(Clone, Debug, Default)]
pub struct StaticReflection {
    classes: FxHashMap<TypeName, ClassMetadata>,
}

impl StaticReflection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a class, replacing any earlier declaration with the same name.
    pub fn declare(&mut self, class: ClassMetadata) -> &mut Self {
        self.classes.insert(class.name.clone(), class);
        self
    }

    pub fn is_declared(&self, class: &TypeName) -> bool {
        self.classes.contains_key(class)
    }
}

impl FromIterator<ClassMetadata> for StaticReflection {
    fn from_iter<I: IntoIterator<Item = ClassMetadata>>(iter: I) -> Self {
        let mut reflection = Self::new();
        for class in iter {
            reflection.declare(class);
        }
        reflection
    }
}

impl ReflectionProvider for StaticReflection {
    fn reflect(&self, class: &TypeName) -> Result<ClassMetadata> {
        self.classes
            .get(class)
            .cloned()
            .ok_or_else(|| RegistryError::not_reflectable(class, "class is not declared"))
    }
}
