//! Registry errors.
//!
//! Absence of a global handler is `None`, never an error. Every variant here
//! is a hard failure surfaced to the immediate caller; nothing is retried.

use std::path::PathBuf;

use data_types::TypeName;

use crate::strategy::StrategyKind;

/// Registry result type.
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;

/// Errors raised while building or querying the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A class identifier could not be turned into metadata.
    #[error("class `{class}` is not reflectable: {reason}")]
    NotReflectable { class: TypeName, reason: String },

    /// A configured strategy identifier could not be instantiated.
    #[error("cannot resolve {kind} strategy `{id}`")]
    UnresolvableStrategy { kind: StrategyKind, id: TypeName },

    /// Configuration record could not be parsed.
    #[error("invalid registry configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("cannot access `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Class manifest could not be encoded or decoded.
    #[cfg(feature = "cache")]
    #[error("malformed class manifest: {0}")]
    Manifest(#[source] bincode::Error),

    /// Class manifest was written by an incompatible version.
    #[cfg(feature = "cache")]
    #[error("class manifest format version {found} is not supported (expected {expected})")]
    ManifestVersion { found: u32, expected: u32 },
}

impl RegistryError {
    pub fn not_reflectable(class: &TypeName, reason: impl Into<String>) -> Self {
        RegistryError::NotReflectable {
            class: class.clone(),
            reason: reason.into(),
        }
    }

    pub fn unresolvable(kind: StrategyKind, id: &TypeName) -> Self {
        RegistryError::UnresolvableStrategy {
            kind,
            id: id.clone(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RegistryError::Io {
            path: path.into(),
            source,
        }
    }
}
