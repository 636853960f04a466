//! Reflected structure of data classes.
//!
//! `ClassMetadata` is produced once per class by a reflection provider (or
//! loaded from an offline manifest) and is immutable afterwards.

use crate::{TypeAcceptance, TypeLineage, TypeName};

/// A single reflected property of a data class.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct DataProperty {
    /// Property name as declared.
    pub name: String,

    /// Types the declared type accepts, most specific first.
    pub acceptance: TypeAcceptance,

    /// Declared type admits null.
    pub nullable: bool,

    /// Property has a default value.
    pub has_default: bool,

    /// Name used when reading input, if mapped.
    pub input_name: Option<String>,

    /// Name used when writing output, if mapped.
    pub output_name: Option<String>,

    /// Attribute type identifiers attached to the property.
    pub attributes: Vec<TypeName>,
}

impl DataProperty {
    pub fn new(name: impl Into<String>, acceptance: TypeAcceptance) -> Self {
        Self {
            name: name.into(),
            acceptance,
            nullable: false,
            has_default: false,
            input_name: None,
            output_name: None,
            attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    #[must_use]
    pub fn mapped(mut self, input: Option<&str>, output: Option<&str>) -> Self {
        self.input_name = input.map(str::to_owned);
        self.output_name = output.map(str::to_owned);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<TypeName>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Name to read from input payloads.
    pub fn input_key(&self) -> &str {
        self.input_name.as_deref().unwrap_or(&self.name)
    }

    /// Name to write into output payloads.
    pub fn output_key(&self) -> &str {
        self.output_name.as_deref().unwrap_or(&self.name)
    }

    pub fn has_attribute(&self, attribute: &TypeName) -> bool {
        self.attributes.contains(attribute)
    }
}

/// Immutable description of a data class.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassMetadata {
    /// Canonical class identifier; the cache key.
    pub name: TypeName,

    /// Parent classes and interfaces, nearest first.
    pub ancestors: Vec<TypeName>,

    /// Class cannot be instantiated directly.
    pub is_abstract: bool,

    /// Attribute type identifiers attached to the class.
    pub attributes: Vec<TypeName>,

    /// Properties in declaration order.
    pub properties: Vec<DataProperty>,
}

impl ClassMetadata {
    pub fn new(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            ancestors: Vec::new(),
            is_abstract: false,
            attributes: Vec::new(),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, property: DataProperty) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn with_ancestors<I, T>(mut self, ancestors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        // Reuse lineage construction for dedup and self-reference filtering.
        self.ancestors = TypeLineage::with_ancestors(self.name.clone(), ancestors).ancestors;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<TypeName>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    #[must_use]
    pub fn abstract_class(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Look up a property by declared name.
    pub fn property(&self, name: &str) -> Option<&DataProperty> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// The class as a nominal type.
    pub fn lineage(&self) -> TypeLineage {
        TypeLineage::with_ancestors(self.name.clone(), self.ancestors.iter().cloned())
    }
}
