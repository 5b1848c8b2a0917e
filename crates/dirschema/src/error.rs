use derive_more::Display;
use dirschema_core::{
    context::ConfigError,
    error::{DecodeClass, DecodeError, SchemaError},
    syntax::SyntaxViolation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        let kind = match err.class {
            DecodeClass::Grammar => DecodeErrorKind::Grammar,
            DecodeClass::InvalidValue => DecodeErrorKind::InvalidValue,
            DecodeClass::OutOfRange => DecodeErrorKind::OutOfRange,
            DecodeClass::Resolution => DecodeErrorKind::Unresolved,
        };

        Self::new(ErrorKind::Decode(kind), ErrorOrigin::Normalize, err.message)
    }
}

impl From<SyntaxViolation> for Error {
    fn from(err: SyntaxViolation) -> Self {
        Self::new(ErrorKind::SyntaxViolation, ErrorOrigin::Syntax, err.message)
    }
}

impl From<SchemaError> for Error {
    fn from(err: SchemaError) -> Self {
        let kind = match err {
            SchemaError::DuplicateAttributeType { .. }
            | SchemaError::DuplicateEnumValue { .. }
            | SchemaError::DuplicateSyntax { .. } => SchemaErrorKind::Conflict,
            SchemaError::EmptyEnumeration { .. }
            | SchemaError::InvalidPattern { .. }
            | SchemaError::MissingOid => SchemaErrorKind::Invalid,
            SchemaError::UnknownMatchingRule { .. } | SchemaError::UnknownSyntax(_) => {
                SchemaErrorKind::UnknownReference
            }
        };

        Self::new(ErrorKind::Schema(kind), ErrorOrigin::Schema, err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Decode(DecodeErrorKind),
    Schema(SchemaErrorKind),

    /// A value failed its syntax check.
    SyntaxViolation,

    /// The engine configuration could not be loaded.
    Config,
}

///
/// DecodeErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum DecodeErrorKind {
    /// The value does not follow the rule's grammar.
    Grammar,

    /// Grammatical, but outside the rule's value domain.
    InvalidValue,

    /// A numeric component overflows its representation.
    OutOfRange,

    /// A name inside the value could not be resolved against the schema.
    Unresolved,
}

///
/// SchemaErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SchemaErrorKind {
    /// Two definitions claim the same OID or name.
    Conflict,

    /// A definition is malformed on its own.
    Invalid,

    /// A definition refers to a syntax or rule that does not exist.
    UnknownReference,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Config,
    Normalize,
    Schema,
    Syntax,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirschema_core::{
        context::EngineConfig, rule::MatchingRule, schema::Schema, syntax::Syntax,
    };
    use dirschema_primitives::{RuleKind, SyntaxKind};

    #[test]
    fn decode_errors_keep_their_class() {
        let err = MatchingRule::builtin(RuleKind::Integer)
            .normalize(&Schema::default(), b"99999999999999999999")
            .expect_err("overflow");
        let err = Error::from(err);

        assert_eq!(err.kind, ErrorKind::Decode(DecodeErrorKind::OutOfRange));
        assert_eq!(err.origin, ErrorOrigin::Normalize);
    }

    #[test]
    fn syntax_violations_map_to_the_syntax_origin() {
        let violation = Syntax::builtin(SyntaxKind::Boolean)
            .validate(&Schema::default(), b"maybe")
            .expect_err("not a boolean");
        let err = Error::from(violation);

        assert_eq!(err.kind, ErrorKind::SyntaxViolation);
        assert_eq!(err.origin.to_string(), "Syntax");
    }

    #[test]
    fn schema_errors_are_classified() {
        let mut builder = Schema::builder();
        builder
            .add_enum_syntax("1.2.3", "Color", ["RED"])
            .expect("enum");
        let err = builder
            .add_enum_syntax("1.2.3", "Color", ["RED"])
            .map(|_| ())
            .expect_err("duplicate");

        assert_eq!(
            Error::from(err).kind,
            ErrorKind::Schema(SchemaErrorKind::Conflict)
        );
    }

    #[test]
    fn config_errors_surface_through_load_config() {
        let err = EngineConfig::from_toml_str("[indexing]\nsubstring_key_size = 0\n")
            .expect_err("zero key size");
        let err = Error::from(err);

        assert_eq!(err.kind, ErrorKind::Config);
        assert!(err.message.contains("substring_key_size"));
        assert!(crate::load_config("[indexing]\nsubstring_key_size = 0\n").is_err());
    }
}
