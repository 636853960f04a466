//! Ordered rule inferrers, handed verbatim to the validation rule builder.

use std::sync::Arc;

use crate::RuleInferrer;

#[derive(Debug, Default)]
pub struct RuleInferrerList {
    inferrers: Vec<Arc<dyn RuleInferrer>>,
}

impl RuleInferrerList {
    pub fn new(inferrers: Vec<Arc<dyn RuleInferrer>>) -> Self {
        Self { inferrers }
    }

    /// All inferrers in configuration order.
    pub fn all(&self) -> &[Arc<dyn RuleInferrer>] {
        &self.inferrers
    }

    pub fn len(&self) -> usize {
        self.inferrers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inferrers.is_empty()
    }
}

impl FromIterator<Arc<dyn RuleInferrer>> for RuleInferrerList {
    fn from_iter<I: IntoIterator<Item = Arc<dyn RuleInferrer>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
