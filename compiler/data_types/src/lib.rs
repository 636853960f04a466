//! Type identifiers and structural metadata for data classes.
//!
//! Everything here is plain data: the registry in `data_config` resolves
//! handlers by scanning these structures, it never inspects Rust types.
//!
//! # Type Identifiers
//!
//! - `TypeName`: canonical identifier (leading `\` and whitespace stripped)
//! - `TypeLineage`: a type plus its transitive ancestor/interface set
//! - `TypeAcceptance`: the specificity-ordered types a property accepts
//!
//! # Metadata
//!
//! - `DataProperty`: one reflected property
//! - `ClassMetadata`: an immutable description of a data class
//! - `Value`: a runtime value handed to transformer lookup

mod acceptance;
mod lineage;
mod metadata;
mod type_name;
mod value;

pub use acceptance::{AcceptedType, TypeAcceptance};
pub use lineage::TypeLineage;
pub use metadata::{ClassMetadata, DataProperty};
pub use type_name::{canonicalize, TypeName, NAMESPACE_SEPARATOR};
pub use value::{ObjectValue, Value, ValueKind};
