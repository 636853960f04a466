//! Nominal type ancestry.
//!
//! "Is-a" checks are answered from data: each type carries its full
//! transitive ancestry (parent classes and implemented interfaces) as
//! computed by reflection, so no runtime type introspection is needed.

use crate::TypeName;

/// A type together with every type it is substitutable for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeLineage {
    /// The concrete type.
    pub name: TypeName,

    /// Transitive ancestors, nearest first. Never contains `name`.
    pub ancestors: Vec<TypeName>,
}

impl TypeLineage {
    /// A type with no ancestors.
    pub fn new(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            ancestors: Vec::new(),
        }
    }

    /// A type with the given ancestors, nearest first.
    ///
    /// Duplicates and self-references are dropped, keeping first occurrences.
    pub fn with_ancestors<I, T>(name: impl Into<TypeName>, ancestors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        let mut lineage = Self::new(name);
        for ancestor in ancestors {
            lineage.push_ancestor(ancestor.into());
        }
        lineage
    }

    /// Append an ancestor unless it is already known.
    pub fn push_ancestor(&mut self, ancestor: TypeName) {
        if ancestor != self.name && !self.ancestors.contains(&ancestor) {
            self.ancestors.push(ancestor);
        }
    }

    /// Exact type match.
    #[inline]
    pub fn is_exactly(&self, ty: &TypeName) -> bool {
        self.name == *ty
    }

    /// Nominal subtype check: the type itself or any ancestor.
    pub fn is_a(&self, ty: &TypeName) -> bool {
        self.is_exactly(ty) || self.ancestors.contains(ty)
    }

    /// `[name, ancestors...]` in specificity order.
    pub fn chain(&self) -> impl Iterator<Item = &TypeName> {
        std::iter::once(&self.name).chain(self.ancestors.iter())
    }
}
