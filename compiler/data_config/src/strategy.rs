//! Strategy capability contracts and the injector that builds them.
//!
//! The registry stores and returns strategies but never runs them. The
//! traits below are the narrow contracts the cast, transform and validation
//! pipelines rely on.

use std::fmt;
use std::sync::Arc;

use data_types::{DataProperty, TypeName, Value};
use rustc_hash::FxHashMap;

use crate::{RegistryError, Result};

/// Converts a raw input value into a property's typed value.
pub trait Cast: Send + Sync + fmt::Debug {
    /// `None` means the value is uncastable by this strategy.
    fn cast(&self, property: &DataProperty, value: Value) -> Option<Value>;
}

/// Converts a typed runtime value into its serializable representation.
pub trait Transformer: Send + Sync + fmt::Debug {
    fn transform(&self, property: &DataProperty, value: &Value) -> Value;
}

/// Derives validation rules from a property's metadata.
pub trait RuleInferrer: Send + Sync + fmt::Debug {
    /// Return `rules` extended (or rewritten) for `property`.
    fn infer(&self, property: &DataProperty, rules: Vec<String>) -> Vec<String>;
}

/// Which configuration section a strategy identifier came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Cast,
    Transformer,
    RuleInferrer,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrategyKind::Cast => "cast",
            StrategyKind::Transformer => "transformer",
            StrategyKind::RuleInferrer => "rule inferrer",
        })
    }
}

/// Instantiates configured strategy identifiers.
///
/// Any failure aborts registry construction.
pub trait StrategyResolver {
    fn resolve_cast(&self, id: &TypeName) -> Result<Arc<dyn Cast>>;
    fn resolve_transformer(&self, id: &TypeName) -> Result<Arc<dyn Transformer>>;
    fn resolve_rule_inferrer(&self, id: &TypeName) -> Result<Arc<dyn RuleInferrer>>;
}

type Factory<T> = Box<dyn Fn() -> Arc<T> + Send + Sync>;

/// Factory table for one strategy kind.
struct Factories<T: ?Sized> {
    kind: StrategyKind,
    by_id: FxHashMap<TypeName, Factory<T>>,
}

impl<T: ?Sized> Factories<T> {
    fn new(kind: StrategyKind) -> Self {
        Self {
            kind,
            by_id: FxHashMap::default(),
        }
    }

    fn insert(&mut self, id: TypeName, factory: Factory<T>) {
        self.by_id.insert(id, factory);
    }

    fn resolve(&self, id: &TypeName) -> Result<Arc<T>> {
        self.by_id
            .get(id)
            .map(|factory| factory())
            .ok_or_else(|| RegistryError::unresolvable(self.kind, id))
    }
}

/// Table-driven `StrategyResolver`.
///
/// Strategy identifiers are bound to constructor closures up front; each
/// resolve calls the closure, so bindings made with `*_factory` produce a
/// fresh instance per configuration entry while `bind_*` shares one.
pub struct StrategyContainer {
    casts: Factories<dyn Cast>,
    transformers: Factories<dyn Transformer>,
    rule_inferrers: Factories<dyn RuleInferrer>,
}

impl StrategyContainer {
    pub fn new() -> Self {
        Self {
            casts: Factories::new(StrategyKind::Cast),
            transformers: Factories::new(StrategyKind::Transformer),
            rule_inferrers: Factories::new(StrategyKind::RuleInferrer),
        }
    }

    pub fn cast_factory<F>(&mut self, id: impl Into<TypeName>, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn Cast> + Send + Sync + 'static,
    {
        self.casts.insert(id.into(), Box::new(factory));
        self
    }

    pub fn transformer_factory<F>(&mut self, id: impl Into<TypeName>, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn Transformer> + Send + Sync + 'static,
    {
        self.transformers.insert(id.into(), Box::new(factory));
        self
    }

    pub fn rule_inferrer_factory<F>(&mut self, id: impl Into<TypeName>, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn RuleInferrer> + Send + Sync + 'static,
    {
        self.rule_inferrers.insert(id.into(), Box::new(factory));
        self
    }

    /// Share a single cast instance for `id`.
    pub fn bind_cast(&mut self, id: impl Into<TypeName>, cast: Arc<dyn Cast>) -> &mut Self {
        self.cast_factory(id, move || Arc::clone(&cast))
    }

    /// Share a single transformer instance for `id`.
    pub fn bind_transformer(
        &mut self,
        id: impl Into<TypeName>,
        transformer: Arc<dyn Transformer>,
    ) -> &mut Self {
        self.transformer_factory(id, move || Arc::clone(&transformer))
    }

    /// Share a single rule inferrer instance for `id`.
    pub fn bind_rule_inferrer(
        &mut self,
        id: impl Into<TypeName>,
        inferrer: Arc<dyn RuleInferrer>,
    ) -> &mut Self {
        self.rule_inferrer_factory(id, move || Arc::clone(&inferrer))
    }
}

impl Default for StrategyContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrategyContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyContainer")
            .field("casts", &self.casts.by_id.len())
            .field("transformers", &self.transformers.by_id.len())
            .field("rule_inferrers", &self.rule_inferrers.by_id.len())
            .finish()
    }
}

impl StrategyResolver for StrategyContainer {
    fn resolve_cast(&self, id: &TypeName) -> Result<Arc<dyn Cast>> {
        self.casts.resolve(id)
    }

    fn resolve_transformer(&self, id: &TypeName) -> Result<Arc<dyn Transformer>> {
        self.transformers.resolve(id)
    }

    fn resolve_rule_inferrer(&self, id: &TypeName) -> Result<Arc<dyn RuleInferrer>> {
        self.rule_inferrers.resolve(id)
    }
}
