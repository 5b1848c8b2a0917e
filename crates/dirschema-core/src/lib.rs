//! Core engine for dirschema: attribute syntaxes, matching rules, assertions,
//! and index-key derivation, plus the ergonomics exported via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod assertion;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod index;
pub mod normalize;
pub mod obs;
pub mod registry;
pub mod rule;
pub mod schema;
pub mod syntax;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Default width, in bytes, of the sliding window used for substring keys.
pub const DEFAULT_SUBSTRING_KEY_SIZE: usize = 6;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or normalization helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        assertion::{Assertion, ConditionResult},
        context::{SchemaContext, SchemaOptions},
        index::{IndexKey, IndexQueryFactory, Indexer, IndexingOptions},
        rule::MatchingRule,
        schema::Schema,
        syntax::Syntax,
    };
}
