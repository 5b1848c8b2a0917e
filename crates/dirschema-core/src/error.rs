use derive_more::Display;
use dirschema_primitives::RuleUsage;
use std::error::Error as StdError;
use thiserror::Error as ThisError;

type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

///
/// DecodeError
///
/// A normalize or assertion-build step could not parse its input under the
/// expected grammar. Aborts only the value under construction.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct DecodeError {
    pub class: DecodeClass,
    pub message: String,

    #[source]
    cause: Option<BoxedCause>,
}

impl DecodeError {
    pub fn new(class: DecodeClass, message: impl Into<String>) -> Self {
        Self {
            class,
            message: message.into(),
            cause: None,
        }
    }

    /// Construct a grammar failure.
    pub fn grammar(message: impl Into<String>) -> Self {
        Self::new(DecodeClass::Grammar, message)
    }

    /// Construct a failure for a value that parsed but cannot be represented.
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(DecodeClass::OutOfRange, message)
    }

    /// Construct a value-domain failure (unknown literal, bad component count).
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(DecodeClass::InvalidValue, message)
    }

    /// Construct a grammar failure pinned to a character position.
    pub fn at_position(message: impl Into<String>, position: usize) -> Self {
        Self::grammar(format!("{} at position {position}", message.into()))
    }

    /// Attach an underlying cause, keeping the existing class and message.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<BoxedCause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    #[must_use]
    pub const fn has_cause(&self) -> bool {
        self.cause.is_some()
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {}", self.class, self.message)
    }
}

impl From<ResolutionError> for DecodeError {
    fn from(err: ResolutionError) -> Self {
        Self::new(
            DecodeClass::Resolution,
            format!("schema resolution failed: {err}"),
        )
        .with_cause(err)
    }
}

///
/// DecodeClass
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum DecodeClass {
    #[display("grammar")]
    Grammar,

    #[display("invalid_value")]
    InvalidValue,

    #[display("out_of_range")]
    OutOfRange,

    #[display("resolution")]
    Resolution,
}

///
/// ResolutionError
///
/// A name or OID lookup against the schema context failed.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ResolutionError {
    #[error("unknown attribute type '{0}'")]
    UnknownAttributeType(String),

    #[error("unknown schema element '{0}'")]
    UnknownOid(String),
}

///
/// SchemaError
///
/// Construction-time defects in a syntax or rule definition. These are
/// schema-build problems, never runtime data problems.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum SchemaError {
    #[error("attribute type '{name}' is already registered")]
    DuplicateAttributeType { name: String },

    #[error("enumeration syntax '{oid}' declares '{value}' more than once")]
    DuplicateEnumValue { oid: String, value: String },

    #[error("syntax '{oid}' is already registered")]
    DuplicateSyntax { oid: String },

    #[error("enumeration syntax '{oid}' declares no values")]
    EmptyEnumeration { oid: String },

    #[error("pattern syntax '{oid}' has an invalid pattern: {source}")]
    InvalidPattern {
        oid: String,
        #[source]
        source: regex::Error,
    },

    #[error("schema element is missing its OID")]
    MissingOid,

    #[error("unknown {} matching rule '{rule}'", .usage.label())]
    UnknownMatchingRule { rule: String, usage: RuleUsage },

    #[error("unknown syntax '{0}'")]
    UnknownSyntax(String),
}
