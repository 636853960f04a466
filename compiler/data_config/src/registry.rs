//! The registry: composition root for metadata, casts, transformers and
//! rule inferrers.
//!
//! Built once from a `RegistryConfig` and shared by reference (or `Arc`)
//! with every pipeline that needs it. Only the class metadata cache changes
//! after construction.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use data_types::{ClassMetadata, DataProperty, TypeName, Value};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    Cast, ClassMetadataCache, GlobalCastIndex, GlobalTransformerIndex, ReflectionProvider,
    RegistryConfig, Result, RuleInferrer, RuleInferrerList, StrategyResolver, Transformer,
};

/// Process-wide data class registry.
pub struct DataConfig {
    classes: ClassMetadataCache,
    casts: GlobalCastIndex,
    transformers: GlobalTransformerIndex,
    rule_inferrers: RuleInferrerList,
    data_paths: Vec<PathBuf>,
    reflection: Box<dyn ReflectionProvider>,
}

impl DataConfig {
    /// Build the registry, resolving every configured strategy.
    ///
    /// The first identifier `resolver` cannot instantiate aborts construction.
    pub fn new<R>(
        config: &RegistryConfig,
        resolver: &dyn StrategyResolver,
        reflection: R,
    ) -> Result<Self>
    where
        R: ReflectionProvider + 'static,
    {
        let rule_inferrers = config
            .rule_inferrers
            .iter()
            .map(|id| resolver.resolve_rule_inferrer(&TypeName::new(id)))
            .collect::<Result<RuleInferrerList>>()?;

        let mut transformers = GlobalTransformerIndex::new();
        for (ty, id) in &config.transformers {
            let transformer = resolver.resolve_transformer(&TypeName::new(id))?;
            transformers.insert(TypeName::new(ty), transformer);
        }

        let mut casts = GlobalCastIndex::new();
        for (ty, id) in &config.casts {
            let cast = resolver.resolve_cast(&TypeName::new(id))?;
            casts.insert(TypeName::new(ty), cast);
        }

        debug!(
            rule_inferrers = rule_inferrers.len(),
            transformers = transformers.len(),
            casts = casts.len(),
            data_paths = config.data_paths.len(),
            "data config built"
        );

        Ok(Self {
            classes: ClassMetadataCache::new(),
            casts,
            transformers,
            rule_inferrers,
            data_paths: config.data_paths.clone(),
            reflection: Box::new(reflection),
        })
    }

    /// Metadata for `class`, reflected on first request and cached after.
    pub fn data_class(&self, class: &TypeName) -> Result<Arc<ClassMetadata>> {
        self.classes.get_or_build(class, self.reflection.as_ref())
    }

    /// Global cast for a property's declared type, if any.
    pub fn find_global_cast_for_property(
        &self,
        property: &DataProperty,
    ) -> Option<&Arc<dyn Cast>> {
        self.casts.find(&property.acceptance)
    }

    /// Global transformer for a runtime value, if any.
    pub fn find_global_transformer_for_value(
        &self,
        value: &Value,
    ) -> Option<&Arc<dyn Transformer>> {
        self.transformers.find(value)
    }

    /// Seed the metadata cache, e.g. from an offline manifest.
    ///
    /// Existing entries with the same class name are replaced.
    pub fn initialize_cached_data_classes<I>(&self, classes: I)
    where
        I: IntoIterator<Item = ClassMetadata>,
    {
        self.classes.preload(classes);
    }

    pub fn rule_inferrers(&self) -> &[Arc<dyn RuleInferrer>] {
        self.rule_inferrers.all()
    }

    pub fn data_paths(&self) -> &[PathBuf] {
        &self.data_paths
    }

    /// Snapshot of every class metadata cached so far.
    pub fn data_classes(&self) -> FxHashMap<TypeName, Arc<ClassMetadata>> {
        self.classes.snapshot()
    }

    pub fn cast_index(&self) -> &GlobalCastIndex {
        &self.casts
    }

    pub fn transformer_index(&self) -> &GlobalTransformerIndex {
        &self.transformers
    }
}

impl fmt::Debug for DataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataConfig")
            .field("classes", &self.classes.len())
            .field("casts", &self.casts)
            .field("transformers", &self.transformers)
            .field("rule_inferrers", &self.rule_inferrers.len())
            .field("data_paths", &self.data_paths)
            .finish_non_exhaustive()
    }
}
