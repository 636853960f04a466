//! Runtime values seen by transformer lookup.

use std::collections::BTreeMap;

use crate::{TypeLineage, TypeName};

/// Coarse kind of a runtime value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    List,
    Map,
    Object,
}

impl ValueKind {
    /// Only objects have a nominal type that handlers can be keyed by.
    #[inline]
    pub fn is_object(self) -> bool {
        matches!(self, ValueKind::Object)
    }
}

/// A structured value carrying its runtime type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectValue {
    /// Runtime type and everything it extends or implements.
    pub lineage: TypeLineage,

    /// Named fields.
    pub fields: BTreeMap<String, Value>,
}

impl ObjectValue {
    pub fn new(lineage: TypeLineage) -> Self {
        Self {
            lineage,
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Exact runtime type.
    #[inline]
    pub fn class(&self) -> &TypeName {
        &self.lineage.name
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A dynamically typed runtime value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Object(ObjectValue),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// The object view, or `None` for scalars, sequences, mappings and null.
    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Shorthand for an object with no fields.
    pub fn object(lineage: TypeLineage) -> Self {
        Value::Object(ObjectValue::new(lineage))
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Value::Object(object)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
