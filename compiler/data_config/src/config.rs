//! Registry configuration record.
//!
//! Four optional sections; anything else in the source document is ignored.
//! Identifiers are kept exactly as written here and canonicalized when the
//! registry is built.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{RegistryError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Rule inferrer strategy identifiers, in application order.
    pub rule_inferrers: Vec<String>,

    /// Transformable type → transformer identifier, in lookup order.
    pub transformers: IndexMap<String, String>,

    /// Castable type → cast identifier.
    pub casts: IndexMap<String, String>,

    /// Roots under which data classes are discovered.
    pub data_paths: Vec<PathBuf>,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document.
    ///
    /// A key repeated within `transformers` or `casts` keeps its first
    /// position and its last value.
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        Self::from_json_str(&source)
    }

    #[must_use]
    pub fn with_rule_inferrer(mut self, id: impl Into<String>) -> Self {
        self.rule_inferrers.push(id.into());
        self
    }

    #[must_use]
    pub fn with_transformer(mut self, ty: impl Into<String>, id: impl Into<String>) -> Self {
        self.transformers.insert(ty.into(), id.into());
        self
    }

    #[must_use]
    pub fn with_cast(mut self, ty: impl Into<String>, id: impl Into<String>) -> Self {
        self.casts.insert(ty.into(), id.into());
        self
    }

    #[must_use]
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_paths.push(path.into());
        self
    }
}
