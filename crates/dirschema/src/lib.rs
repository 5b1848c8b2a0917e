//! ## Crate layout
//! - `core`: syntaxes, matching rules, assertions, indexers, the schema
//!   context, and observability.
//! - `primitives`: the const registry of built-in syntax and rule
//!   descriptors.
//! - `error`: the public error type with a stable kind + origin taxonomy.
//!
//! The `prelude` module carries the vocabulary most callers need to
//! validate, normalize, assert and index attribute values.

pub use dirschema_core as core;
pub use dirschema_primitives as primitives;

pub mod error;

pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a TOML engine configuration, mapping failures into [`Error`].
pub fn load_config(source: &str) -> Result<crate::core::context::EngineConfig, Error> {
    Ok(crate::core::context::EngineConfig::from_toml_str(source)?)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        assertion::{Assertion, ConditionResult},
        context::{EngineConfig, IndexingOptions, SchemaContext, SchemaOptions},
        diagnostics::Diagnostics,
        index::{IndexKey, IndexQueryFactory, Indexer},
        registry::core_registry,
        rule::MatchingRule,
        schema::{AttributeType, Schema, SchemaBuilder},
        syntax::Syntax,
    };
    pub use crate::primitives::{RuleKind, RuleUsage, SyntaxKind};
}
