//! Module: syntax
//! Responsibility: per-value-domain acceptability predicates.
//! Does not own: normalization (see `rule`) or schema storage.
//! Boundary: `Syntax::accept` answers yes/no and explains every "no"
//! through the diagnostics sink.

mod binary;
mod bits;
mod boolean;
mod dn;
mod enumeration;
mod identifier;
mod numeric;
mod password;
mod pattern;
mod string;
mod time;


use crate::{
    context::SchemaContext,
    diagnostics::{Diagnostics, DiscardDiagnostics},
    error::{DecodeError, SchemaError},
    obs::sink::{self, MetricsEvent},
};
use dirschema_primitives::{SyntaxKind, SyntaxMetadata};
use std::fmt;
use thiserror::Error as ThisError;
use tracing::debug;

// re-exports
pub use enumeration::EnumerationSyntax;
pub use pattern::PatternSyntax;

pub(crate) use bits::parse_bit_string;
pub(crate) use boolean::parse_boolean;
pub(crate) use identifier::check_uuid;
pub(crate) use password::{parse_auth_password, split_user_password};

///
/// SyntaxViolation
///
/// Why a value falls outside its syntax. Only ever surfaces as a
/// diagnostic message paired with a `false` verdict.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct SyntaxViolation {
    pub message: String,
}

impl SyntaxViolation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<DecodeError> for SyntaxViolation {
    fn from(err: DecodeError) -> Self {
        Self::new(err.message)
    }
}

///
/// SyntaxImpl
///
/// Tagged validator variant; each arm is self-contained.
///

#[derive(Clone, Debug)]
#[remain::sorted]
pub enum SyntaxImpl {
    AuthPassword,
    BitString,
    Boolean,
    CountryString,
    DirectoryString,
    DistinguishedName,
    Enumeration(EnumerationSyntax),
    GeneralizedTime,
    Ia5String,
    Integer,
    Jpeg,
    NameAndOptionalUid,
    NumericString,
    Octets,
    Oid,
    Pattern(PatternSyntax),
    PostalAddress,
    PrintableString,
    TelephoneNumber,
    UserPassword,
    Uuid,
}

impl SyntaxImpl {
    const fn from_kind(kind: SyntaxKind) -> Self {
        match kind {
            SyntaxKind::AuthPassword => Self::AuthPassword,
            SyntaxKind::Binary | SyntaxKind::OctetString => Self::Octets,
            SyntaxKind::BitString => Self::BitString,
            SyntaxKind::Boolean => Self::Boolean,
            SyntaxKind::CountryString => Self::CountryString,
            SyntaxKind::DirectoryString => Self::DirectoryString,
            SyntaxKind::DistinguishedName => Self::DistinguishedName,
            SyntaxKind::GeneralizedTime => Self::GeneralizedTime,
            SyntaxKind::Ia5String => Self::Ia5String,
            SyntaxKind::Integer => Self::Integer,
            SyntaxKind::Jpeg => Self::Jpeg,
            SyntaxKind::NameAndOptionalUid => Self::NameAndOptionalUid,
            SyntaxKind::NumericString => Self::NumericString,
            SyntaxKind::Oid => Self::Oid,
            SyntaxKind::PostalAddress => Self::PostalAddress,
            SyntaxKind::PrintableString => Self::PrintableString,
            SyntaxKind::TelephoneNumber => Self::TelephoneNumber,
            SyntaxKind::UserPassword => Self::UserPassword,
            SyntaxKind::Uuid => Self::Uuid,
        }
    }

    fn check(&self, ctx: &dyn SchemaContext, value: &[u8]) -> Result<(), SyntaxViolation> {
        let options = ctx.options();

        match self {
            Self::AuthPassword => password::check_auth_password(value),
            Self::BitString => bits::check_bit_string(value),
            Self::Boolean => boolean::check_boolean(value),
            Self::CountryString => string::check_country_string(value),
            Self::DirectoryString => string::check_directory_string(value, options),
            Self::DistinguishedName => dn::check_dn(ctx, value),
            Self::Enumeration(syntax) => syntax.check(value),
            Self::GeneralizedTime => time::check_generalized_time(value),
            Self::Ia5String => string::check_ia5_string(value, options),
            Self::Integer => numeric::check_integer(value),
            Self::Jpeg => binary::check_jpeg(value, options),
            Self::NameAndOptionalUid => dn::check_name_and_optional_uid(ctx, value),
            Self::NumericString => numeric::check_numeric_string(value),
            Self::Octets => Ok(()),
            Self::Oid => identifier::check_oid(value, options),
            Self::Pattern(syntax) => syntax.check(value),
            Self::PostalAddress => string::check_postal_address(value, options),
            Self::PrintableString => string::check_printable_string(value),
            Self::TelephoneNumber => string::check_telephone_number(value),
            Self::UserPassword => password::check_user_password(value),
            Self::Uuid => identifier::check_uuid(value),
        }
    }
}

///
/// Syntax
///
/// An attribute syntax: identity, readability, the default matching rule
/// for each usage, and the acceptability predicate.
///

#[derive(Clone)]
pub struct Syntax {
    oid: String,
    description: String,
    human_readable: bool,
    equality_rule: Option<String>,
    ordering_rule: Option<String>,
    substring_rule: Option<String>,
    approximate_rule: Option<String>,
    imp: SyntaxImpl,
}

impl Syntax {
    /// Build a built-in syntax from its registry descriptor.
    #[must_use]
    pub fn builtin(kind: SyntaxKind) -> Self {
        let SyntaxMetadata {
            oid,
            name,
            human_readable,
            equality,
            ordering,
            substring,
            approximate,
        } = kind.metadata();

        Self {
            oid: oid.to_string(),
            description: name.to_string(),
            human_readable,
            equality_rule: equality.map(str::to_string),
            ordering_rule: ordering.map(str::to_string),
            substring_rule: substring.map(str::to_string),
            approximate_rule: approximate.map(str::to_string),
            imp: SyntaxImpl::from_kind(kind),
        }
    }

    /// Build an enumeration syntax. Its ordering rule OID is minted from the
    /// syntax OID; equality and substring fall back to case-ignore.
    #[must_use]
    pub fn enumeration(enumeration: EnumerationSyntax, description: impl Into<String>) -> Self {
        let base = Self::builtin(SyntaxKind::DirectoryString);

        Self {
            oid: enumeration.oid().to_string(),
            description: description.into(),
            ordering_rule: Some(enumeration.ordering_rule_oid()),
            approximate_rule: None,
            imp: SyntaxImpl::Enumeration(enumeration),
            ..base
        }
    }

    /// Build a pattern syntax; matching rules are those of DirectoryString.
    #[must_use]
    pub fn pattern(pattern: PatternSyntax, description: impl Into<String>) -> Self {
        let base = Self::builtin(SyntaxKind::DirectoryString);

        Self {
            oid: pattern.oid().to_string(),
            description: description.into(),
            imp: SyntaxImpl::Pattern(pattern),
            ..base
        }
    }

    /// Build an enumeration syntax straight from its literals.
    pub fn try_enumeration<I, S>(
        oid: impl Into<String>,
        description: impl Into<String>,
        values: I,
    ) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::enumeration(
            EnumerationSyntax::new(oid, values)?,
            description,
        ))
    }

    #[must_use]
    pub fn oid(&self) -> &str {
        &self.oid
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn is_human_readable(&self) -> bool {
        self.human_readable
    }

    #[must_use]
    pub fn equality_rule_oid(&self) -> Option<&str> {
        self.equality_rule.as_deref()
    }

    #[must_use]
    pub fn ordering_rule_oid(&self) -> Option<&str> {
        self.ordering_rule.as_deref()
    }

    #[must_use]
    pub fn substring_rule_oid(&self) -> Option<&str> {
        self.substring_rule.as_deref()
    }

    #[must_use]
    pub fn approximate_rule_oid(&self) -> Option<&str> {
        self.approximate_rule.as_deref()
    }

    #[must_use]
    pub const fn imp(&self) -> &SyntaxImpl {
        &self.imp
    }

    /// Decide whether `value` belongs to this syntax. Every rejection pushes
    /// exactly one message into `diagnostics`; acceptance pushes none.
    pub fn accept(
        &self,
        ctx: &dyn SchemaContext,
        value: &[u8],
        diagnostics: &mut dyn Diagnostics,
    ) -> bool {
        match self.imp.check(ctx, value) {
            Ok(()) => true,
            Err(violation) => {
                debug!(
                    target: "dirschema::syntax",
                    syntax = %self.oid,
                    reason = %violation,
                    "value rejected"
                );
                sink::record(MetricsEvent::SyntaxRejected {
                    syntax_oid: &self.oid,
                });
                diagnostics.issue(violation.message);

                false
            }
        }
    }

    /// Convenience form of [`Self::accept`] returning the violation.
    pub fn validate(&self, ctx: &dyn SchemaContext, value: &[u8]) -> Result<(), SyntaxViolation> {
        let mut messages = Vec::new();
        if self.accept(ctx, value, &mut messages) {
            Ok(())
        } else {
            Err(SyntaxViolation::new(messages.join("; ")))
        }
    }

    /// Verdict only; rejection messages are dropped.
    #[must_use]
    pub fn is_valid(&self, ctx: &dyn SchemaContext, value: &[u8]) -> bool {
        self.accept(ctx, value, &mut DiscardDiagnostics)
    }
}

impl fmt::Debug for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Syntax")
            .field("oid", &self.oid)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Shared UTF-8 gate for textual syntaxes.
fn text<'a>(value: &'a [u8], syntax: &str) -> Result<&'a str, SyntaxViolation> {
    std::str::from_utf8(value).map_err(|err| {
        SyntaxViolation::new(format!(
            "value is not valid UTF-8 for syntax {syntax} (error at byte {})",
            err.valid_up_to()
        ))
    })
}
