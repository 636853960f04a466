//! Labelled strategy doubles shared by unit tests.

use std::io;
use std::sync::Arc;

use data_types::{DataProperty, TypeAcceptance, Value};
use parking_lot::Mutex;

use crate::{Cast, RuleInferrer, StrategyContainer, Transformer};

#[derive(Debug)]
pub(crate) struct LabelCast(pub(crate) String);

impl Cast for LabelCast {
    fn cast(&self, _property: &DataProperty, _value: Value) -> Option<Value> {
        Some(Value::Str(self.0.clone()))
    }
}

#[derive(Debug)]
pub(crate) struct LabelTransformer(pub(crate) String);

impl Transformer for LabelTransformer {
    fn transform(&self, _property: &DataProperty, _value: &Value) -> Value {
        Value::Str(self.0.clone())
    }
}

#[derive(Debug)]
pub(crate) struct LabelInferrer(pub(crate) String);

impl RuleInferrer for LabelInferrer {
    fn infer(&self, _property: &DataProperty, mut rules: Vec<String>) -> Vec<String> {
        rules.push(self.0.clone());
        rules
    }
}

fn probe() -> DataProperty {
    DataProperty::new("probe", TypeAcceptance::new())
}

/// Label a cast reports when run.
pub(crate) fn cast_label(cast: &dyn Cast) -> Option<String> {
    match cast.cast(&probe(), Value::Null) {
        Some(Value::Str(label)) => Some(label),
        _ => None,
    }
}

/// Label a transformer reports when run.
pub(crate) fn transformer_label(transformer: &dyn Transformer) -> Option<String> {
    match transformer.transform(&probe(), &Value::Null) {
        Value::Str(label) => Some(label),
        _ => None,
    }
}

/// Labels of rule inferrers, in order.
pub(crate) fn inferrer_labels(inferrers: &[Arc<dyn RuleInferrer>]) -> Vec<String> {
    inferrers
        .iter()
        .fold(Vec::new(), |rules, inferrer| inferrer.infer(&probe(), rules))
}

/// A container that resolves each id to a strategy labelled with that id.
pub(crate) fn labelled_container(
    casts: &[&str],
    transformers: &[&str],
    inferrers: &[&str],
) -> StrategyContainer {
    let mut container = StrategyContainer::new();
    for &id in casts {
        let label = id.to_owned();
        container.cast_factory(id, move || Arc::new(LabelCast(label.clone())) as Arc<dyn Cast>);
    }
    for &id in transformers {
        let label = id.to_owned();
        container.transformer_factory(id, move || {
            Arc::new(LabelTransformer(label.clone())) as Arc<dyn Transformer>
        });
    }
    for &id in inferrers {
        let label = id.to_owned();
        container.rule_inferrer_factory(id, move || {
            Arc::new(LabelInferrer(label.clone())) as Arc<dyn RuleInferrer>
        });
    }
    container
}

/// In-memory sink for formatted log lines.
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a thread-local TRACE subscriber and return what it logged.
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&buf);
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || SharedBuf(Arc::clone(&sink)))
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let logged = String::from_utf8_lossy(&buf.lock()).into_owned();
    logged
}
