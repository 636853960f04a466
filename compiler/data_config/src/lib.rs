//! Registry for data classes.
//!
//! Given a class identifier, a property, or a runtime value, the registry
//! locates the strategy responsible for it. It never performs a cast or a
//! transformation itself.
//!
//! # Architecture
//!
//! ```text
//! DataConfig (built once from RegistryConfig)
//!     └── ClassMetadataCache      (class → metadata, lazy, the only mutable store)
//!     └── GlobalCastIndex         (type → cast, walked by TypeAcceptance)
//!     └── GlobalTransformerIndex  (type → transformer, registration ordered)
//!     └── RuleInferrerList        (ordered, exposed verbatim)
//! ```
//!
//! Reflection (`ReflectionProvider`) and strategy construction
//! (`StrategyResolver`) are collaborators supplied by the embedder.

mod cache;
mod casts;
mod config;
mod error;
#[cfg(feature = "cache")]
mod manifest;
mod reflection;
mod registry;
mod rule_inferrers;
mod strategy;
mod tracing_setup;
mod transformers;

#[cfg(test)]
mod test_support;

pub use cache::ClassMetadataCache;
pub use casts::GlobalCastIndex;
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
#[cfg(feature = "cache")]
pub use manifest::{ClassManifest, MANIFEST_FORMAT_VERSION};
pub use reflection::{ReflectionProvider, StaticReflection};
pub use registry::DataConfig;
pub use rule_inferrers::RuleInferrerList;
pub use strategy::{
    Cast, RuleInferrer, StrategyContainer, StrategyKind, StrategyResolver, Transformer,
};
pub use tracing_setup::{init_tracing, LOG_ENV};
pub use transformers::GlobalTransformerIndex;

pub use data_types;
