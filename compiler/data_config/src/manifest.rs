//! Offline class manifests.
//!
//! A discovery tool reflects every data class under the configured data
//! paths once, writes the result as a manifest, and production processes
//! load it at startup instead of reflecting on first use.

use std::path::Path;

use data_types::ClassMetadata;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{DataConfig, RegistryError, Result};

/// Bumped whenever the encoded layout of `ClassMetadata` changes.
pub const MANIFEST_FORMAT_VERSION: u32 = 1;

/// Serialized set of precomputed class metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassManifest {
    pub format_version: u32,
    pub classes: Vec<ClassMetadata>,
}

impl ClassManifest {
    /// A manifest in the current format, sorted by class name.
    pub fn new(mut classes: Vec<ClassMetadata>) -> Self {
        classes.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            format_version: MANIFEST_FORMAT_VERSION,
            classes,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(RegistryError::Manifest)
    }

    /// Decode and check the format version.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let manifest: Self = bincode::deserialize(bytes).map_err(RegistryError::Manifest)?;
        if manifest.format_version != MANIFEST_FORMAT_VERSION {
            return Err(RegistryError::ManifestVersion {
                found: manifest.format_version,
                expected: MANIFEST_FORMAT_VERSION,
            });
        }
        Ok(manifest)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode()?;
        std::fs::write(path, bytes).map_err(|e| RegistryError::io(path, e))?;
        debug!(path = %path.display(), classes = self.classes.len(), "class manifest written");
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| RegistryError::io(path, e))?;
        Self::decode(&bytes)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl DataConfig {
    /// Manifest of every class cached so far.
    pub fn manifest(&self) -> ClassManifest {
        ClassManifest::new(
            self.data_classes()
                .into_values()
                .map(|class| ClassMetadata::clone(&class))
                .collect(),
        )
    }

    /// Load a manifest file into the metadata cache.
    ///
    /// Returns the number of classes loaded.
    pub fn load_manifest(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let manifest = ClassManifest::read_from(path)?;
        let count = manifest.len();
        debug!(path = %path.display(), classes = count, "loading class manifest");
        self.initialize_cached_data_classes(manifest.classes);
        Ok(count)
    }
}

#[cfg(test)]
mod tests;
