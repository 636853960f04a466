//! Specificity-ordered type acceptance for a property.
//!
//! A property declared as `PositiveInt|Integer` accepts `PositiveInt` (and
//! everything `PositiveInt` extends) first, then `Integer` and its bases.
//! Global cast lookup walks this order and stops at the first registered
//! type, so the most specific declaration always wins.

use crate::{TypeLineage, TypeName};

/// One accepted type and its base types, nearest first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct AcceptedType {
    /// The declared (or union member) type.
    pub ty: TypeName,

    /// Transitive base types of `ty`.
    pub bases: Vec<TypeName>,
}

impl AcceptedType {
    /// `[ty, bases...]`.
    pub fn chain(&self) -> impl Iterator<Item = &TypeName> {
        std::iter::once(&self.ty).chain(self.bases.iter())
    }
}

/// Ordered map from accepted type to its base types.
///
/// Behaves as an insertion-ordered map: re-inserting an existing accepted
/// type replaces its bases but keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeAcceptance {
    entries: Vec<AcceptedType>,
}

impl TypeAcceptance {
    /// An acceptance with no types (e.g. an untyped property).
    pub fn new() -> Self {
        Self::default()
    }

    /// A single accepted type with no bases.
    pub fn single(ty: impl Into<TypeName>) -> Self {
        let mut acceptance = Self::new();
        acceptance.insert(ty, std::iter::empty::<TypeName>());
        acceptance
    }

    /// One entry per lineage, in the given order.
    pub fn from_lineages<'a, I>(lineages: I) -> Self
    where
        I: IntoIterator<Item = &'a TypeLineage>,
    {
        let mut acceptance = Self::new();
        for lineage in lineages {
            acceptance.insert(lineage.name.clone(), lineage.ancestors.iter().cloned());
        }
        acceptance
    }

    /// Insert or replace the bases of `ty`.
    pub fn insert<I, T>(&mut self, ty: impl Into<TypeName>, bases: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        let ty = ty.into();
        let bases: Vec<TypeName> = bases.into_iter().map(Into::into).collect();
        match self.entries.iter_mut().find(|entry| entry.ty == ty) {
            Some(entry) => entry.bases = bases,
            None => self.entries.push(AcceptedType { ty, bases }),
        }
    }

    /// Builder-style `insert`.
    #[must_use]
    pub fn with<I, T>(mut self, ty: impl Into<TypeName>, bases: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        self.insert(ty, bases);
        self
    }

    /// Accepted-type entries in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, AcceptedType> {
        self.entries.iter()
    }

    /// Bases recorded for an accepted type.
    pub fn bases_of(&self, ty: &TypeName) -> Option<&[TypeName]> {
        self.entries
            .iter()
            .find(|entry| entry.ty == *ty)
            .map(|entry| entry.bases.as_slice())
    }

    /// Every type identifier in lookup order:
    /// `[t1, t1.bases..., t2, t2.bases..., ...]`.
    ///
    /// The same identifier may appear more than once when union members
    /// share ancestors; the first occurrence is the one that matters.
    pub fn candidates(&self) -> impl Iterator<Item = &TypeName> {
        self.entries.iter().flat_map(AcceptedType::chain)
    }

    /// Whether `ty` is accepted directly or through a base type.
    pub fn accepts(&self, ty: &TypeName) -> bool {
        self.candidates().any(|candidate| candidate == ty)
    }

    /// Number of accepted-type entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a TypeAcceptance {
    type Item = &'a AcceptedType;
    type IntoIter = std::slice::Iter<'a, AcceptedType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
