//! Canonical type identifiers.
//!
//! Type identifiers arrive from configuration files, reflection output and
//! runtime values, sometimes fully qualified with a leading separator
//! (`\App\Money`) and sometimes not (`App\Money`). Both must name the same
//! type, so every `TypeName` is canonicalized on construction.

use std::fmt;

/// Separator between namespace segments of a type identifier.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Strip leading separators and surrounding whitespace from a raw identifier.
///
/// Idempotent: `canonicalize(canonicalize(s)) == canonicalize(s)`.
#[inline]
pub fn canonicalize(raw: &str) -> &str {
    raw.trim_start_matches(|c: char| c == NAMESPACE_SEPARATOR || c.is_whitespace())
        .trim_end()
}

/// Canonical type identifier.
///
/// Two names are equal iff their canonical forms are byte-equal. There is no
/// way to build a `TypeName` that skips canonicalization, so map lookups keyed
/// by `TypeName` are insensitive to a leading separator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "cache",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct TypeName(Box<str>);

impl TypeName {
    /// Canonicalize `raw` into a type name.
    pub fn new(raw: &str) -> Self {
        TypeName(canonicalize(raw).into())
    }

    /// The canonical identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last namespace segment (`App\Data\Money` -> `Money`).
    pub fn short_name(&self) -> &str {
        match self.0.rfind(NAMESPACE_SEPARATOR) {
            Some(pos) => &self.0[pos + NAMESPACE_SEPARATOR.len_utf8()..],
            None => &self.0,
        }
    }

    /// Whether canonicalization left nothing behind.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeName({:?})", self.as_str())
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TypeName {
    fn from(raw: &str) -> Self {
        TypeName::new(raw)
    }
}

impl From<&String> for TypeName {
    fn from(raw: &String) -> Self {
        TypeName::new(raw)
    }
}

impl From<String> for TypeName {
    fn from(raw: String) -> Self {
        // Avoid the reallocation when the input is already canonical.
        if canonicalize(&raw).len() == raw.len() {
            TypeName(raw.into_boxed_str())
        } else {
            TypeName::new(&raw)
        }
    }
}

impl From<TypeName> for String {
    fn from(name: TypeName) -> Self {
        name.0.into_string()
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == canonicalize(other)
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
