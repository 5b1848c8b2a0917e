//! Module: rule
//! Responsibility: matching-rule dispatch: normalization, assertion
//! construction, and indexer selection per rule.
//! Does not own: value grammars (see `normalize` and `syntax`).
//! Boundary: every rule is an immutable `MatchingRule` whose behaviour is
//! selected by its `RuleImpl` tag.

mod first_component;
mod identifier;
mod password;
mod scalar;
mod substring;
mod text;


use crate::{
    assertion::{Assertion, SubstringFragments},
    context::{IndexingOptions, SchemaContext},
    error::DecodeError,
    index::{Indexer, IndexerKind},
    normalize::NormalizedValue,
    obs::sink::{self, MetricsEvent},
    syntax::EnumerationSyntax,
};
use dirschema_primitives::{RuleKind, RuleMetadata, RuleUsage};
use std::fmt;
use tracing::debug;

// re-exports
pub use first_component::FirstComponentKind;
pub use text::TextProfile;

///
/// RuleImpl
///
/// Tagged normalization variant. Equality, ordering and substring rules
/// over the same value space share one variant; `MatchingRule::usage`
/// decides which assertions they build.
///

#[derive(Clone, Debug)]
#[remain::sorted]
pub enum RuleImpl {
    AuthPasswordExact,
    BitString,
    Boolean,
    DistinguishedName,
    DoubleMetaphone,
    EnumOrdering(EnumerationSyntax),
    EqualLengthApproximate,
    FirstComponent(FirstComponentKind),
    GeneralizedTime,
    Integer,
    Keyword,
    ObjectIdentifier,
    Text(TextProfile),
    UniqueMember,
    UserPasswordExact,
    Uuid,
}

impl RuleImpl {
    const fn from_kind(kind: RuleKind) -> Self {
        match kind {
            RuleKind::AuthPasswordExact => Self::AuthPasswordExact,
            RuleKind::BitString => Self::BitString,
            RuleKind::Boolean => Self::Boolean,
            RuleKind::CaseExact | RuleKind::CaseExactOrdering | RuleKind::CaseExactSubstrings => {
                Self::Text(TextProfile::CaseExact)
            }
            RuleKind::CaseExactIa5 | RuleKind::CaseExactIa5Substrings => {
                Self::Text(TextProfile::CaseExactIa5)
            }
            RuleKind::CaseIgnore
            | RuleKind::CaseIgnoreOrdering
            | RuleKind::CaseIgnoreSubstrings => Self::Text(TextProfile::CaseIgnore),
            RuleKind::CaseIgnoreIa5 | RuleKind::CaseIgnoreIa5Substrings => {
                Self::Text(TextProfile::CaseIgnoreIa5)
            }
            RuleKind::CaseIgnoreList | RuleKind::CaseIgnoreListSubstrings => {
                Self::Text(TextProfile::CaseIgnoreList)
            }
            RuleKind::DirectoryStringFirstComponent => {
                Self::FirstComponent(FirstComponentKind::DirectoryString)
            }
            RuleKind::DistinguishedName => Self::DistinguishedName,
            RuleKind::DoubleMetaphoneApproximate => Self::DoubleMetaphone,
            RuleKind::EqualLengthApproximate => Self::EqualLengthApproximate,
            RuleKind::GeneralizedTime | RuleKind::GeneralizedTimeOrdering => Self::GeneralizedTime,
            RuleKind::Integer | RuleKind::IntegerOrdering => Self::Integer,
            RuleKind::IntegerFirstComponent => Self::FirstComponent(FirstComponentKind::Integer),
            RuleKind::Keyword | RuleKind::Word => Self::Keyword,
            RuleKind::NumericString
            | RuleKind::NumericStringOrdering
            | RuleKind::NumericStringSubstrings => Self::Text(TextProfile::NumericString),
            RuleKind::ObjectIdentifier => Self::ObjectIdentifier,
            RuleKind::ObjectIdentifierFirstComponent => {
                Self::FirstComponent(FirstComponentKind::ObjectIdentifier)
            }
            RuleKind::OctetString
            | RuleKind::OctetStringOrdering
            | RuleKind::OctetStringSubstrings => Self::Text(TextProfile::Octets),
            RuleKind::TelephoneNumber | RuleKind::TelephoneNumberSubstrings => {
                Self::Text(TextProfile::TelephoneNumber)
            }
            RuleKind::UniqueMember => Self::UniqueMember,
            RuleKind::UserPasswordExact => Self::UserPasswordExact,
            RuleKind::Uuid | RuleKind::UuidOrdering => Self::Uuid,
        }
    }

    fn normalize(&self, ctx: &dyn SchemaContext, raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
        match self {
            Self::AuthPasswordExact => password::normalize_auth_password(raw),
            Self::BitString => scalar::normalize_bit_string(raw),
            Self::Boolean => scalar::normalize_boolean(raw),
            Self::DistinguishedName => identifier::normalize_dn(ctx, raw),
            Self::DoubleMetaphone => text::normalize_phonetic(raw),
            Self::EnumOrdering(enumeration) => scalar::normalize_enum(enumeration, raw),
            Self::EqualLengthApproximate | Self::Keyword => TextProfile::CaseIgnore.normalize(raw),
            Self::FirstComponent(kind) => kind.normalize_value(ctx, raw),
            Self::GeneralizedTime => scalar::normalize_generalized_time(raw),
            Self::Integer => scalar::normalize_integer(raw),
            Self::ObjectIdentifier => identifier::normalize_oid(ctx, raw),
            Self::Text(profile) => profile.normalize(raw),
            Self::UniqueMember => identifier::normalize_unique_member(ctx, raw),
            Self::UserPasswordExact => Ok(password::normalize_user_password(raw)),
            Self::Uuid => scalar::normalize_uuid(raw),
        }
    }

    /// Normalize the assertion side; differs from the stored side only for
    /// first-component rules, whose assertion is the bare component.
    fn normalize_assertion(
        &self,
        ctx: &dyn SchemaContext,
        raw: &[u8],
    ) -> Result<Vec<u8>, DecodeError> {
        match self {
            Self::FirstComponent(kind) => kind.normalize_component(ctx, raw),
            _ => self.normalize(ctx, raw),
        }
    }

    const fn has_textual_keys(&self) -> bool {
        !matches!(
            self,
            Self::EnumOrdering(_)
                | Self::GeneralizedTime
                | Self::Integer
                | Self::Text(TextProfile::Octets)
                | Self::FirstComponent(FirstComponentKind::Integer)
        )
    }
}

///
/// MatchingRule
///
/// An immutable matching rule: identity, usage, index binding, and the
/// normalization variant.
///

#[derive(Clone)]
pub struct MatchingRule {
    oid: String,
    name: String,
    usage: RuleUsage,
    syntax_oid: String,
    index_id: String,
    imp: RuleImpl,
}

impl MatchingRule {
    /// Build a built-in rule from its registry descriptor.
    #[must_use]
    pub fn builtin(kind: RuleKind) -> Self {
        let RuleMetadata {
            oid,
            name,
            usage,
            syntax_oid,
            index_id,
        } = kind.metadata();

        Self {
            oid: oid.to_string(),
            name: name.to_string(),
            usage,
            syntax_oid: syntax_oid.to_string(),
            index_id: index_id.to_string(),
            imp: RuleImpl::from_kind(kind),
        }
    }

    /// Mint the ordering rule for an enumeration syntax: values order by
    /// declaration position.
    #[must_use]
    pub fn enum_ordering(enumeration: &EnumerationSyntax) -> Self {
        let name = enumeration.ordering_rule_name();

        Self {
            oid: enumeration.ordering_rule_oid(),
            index_id: name.clone(),
            name,
            usage: RuleUsage::Ordering,
            syntax_oid: enumeration.oid().to_string(),
            imp: RuleImpl::EnumOrdering(enumeration.clone()),
        }
    }

    #[must_use]
    pub fn oid(&self) -> &str {
        &self.oid
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn usage(&self) -> RuleUsage {
        self.usage
    }

    #[must_use]
    pub fn syntax_oid(&self) -> &str {
        &self.syntax_oid
    }

    /// Stable id of the index this rule's keys live in.
    #[must_use]
    pub fn index_id(&self) -> &str {
        &self.index_id
    }

    #[must_use]
    pub const fn imp(&self) -> &RuleImpl {
        &self.imp
    }

    pub(crate) const fn has_textual_keys(&self) -> bool {
        self.imp.has_textual_keys()
    }

    /// Canonical encoding of `raw` under this rule.
    pub fn normalize(
        &self,
        ctx: &dyn SchemaContext,
        raw: &[u8],
    ) -> Result<NormalizedValue, DecodeError> {
        let result = self.imp.normalize(ctx, raw);
        self.observe(result)
    }

    fn normalize_assertion(
        &self,
        ctx: &dyn SchemaContext,
        raw: &[u8],
    ) -> Result<NormalizedValue, DecodeError> {
        let result = self.imp.normalize_assertion(ctx, raw);
        self.observe(result)
    }

    fn observe(&self, result: Result<Vec<u8>, DecodeError>) -> Result<NormalizedValue, DecodeError> {
        match result {
            Ok(bytes) => {
                sink::record(MetricsEvent::Normalized {
                    rule_oid: &self.oid,
                });

                Ok(NormalizedValue::new(bytes))
            }
            Err(err) => {
                debug!(
                    target: "dirschema::normalize",
                    rule = %self.name,
                    error = %err.display_with_class(),
                    "normalization failed"
                );
                sink::record(MetricsEvent::DecodeFailed {
                    rule_oid: &self.oid,
                });

                Err(err)
            }
        }
    }

    /// Build the rule's primary assertion: equality for equality rules
    /// (bounded containment for keyword rules), length-equality or
    /// phonetic-key equality for approximate rules, strictly-less-than for
    /// ordering rules, and a parsed `initial*any*final` pattern for
    /// substring rules.
    pub fn assertion(&self, ctx: &dyn SchemaContext, raw: &[u8]) -> Result<Assertion, DecodeError> {
        let index_id = self.index_id.clone();

        match (self.usage, &self.imp) {
            (RuleUsage::Equality, RuleImpl::Keyword) => Ok(Assertion::Keyword {
                index_id,
                value: self.normalize_assertion(ctx, raw)?,
            }),
            (RuleUsage::Approximate, RuleImpl::EqualLengthApproximate) => {
                Ok(Assertion::Approximate {
                    index_id,
                    value: self.normalize_assertion(ctx, raw)?,
                })
            }
            (RuleUsage::Equality | RuleUsage::Approximate, _) => Ok(Assertion::Equality {
                index_id,
                value: self.normalize_assertion(ctx, raw)?,
            }),
            (RuleUsage::Ordering, _) => Ok(Assertion::LessThan {
                index_id,
                value: self.normalize_assertion(ctx, raw)?,
            }),
            (RuleUsage::Substring, _) => {
                let parts = substring::parse_substring_assertion(raw)?;
                let any: Vec<&[u8]> = parts.any.iter().map(Vec::as_slice).collect();

                self.substring_assertion(ctx, parts.initial.as_deref(), &any, parts.final_.as_deref())
            }
        }
    }

    pub fn greater_or_equal_assertion(
        &self,
        ctx: &dyn SchemaContext,
        raw: &[u8],
    ) -> Result<Assertion, DecodeError> {
        if self.usage != RuleUsage::Ordering {
            return Ok(Assertion::Undefined);
        }

        Ok(Assertion::GreaterOrEqual {
            index_id: self.index_id.clone(),
            value: self.normalize_assertion(ctx, raw)?,
        })
    }

    pub fn less_or_equal_assertion(
        &self,
        ctx: &dyn SchemaContext,
        raw: &[u8],
    ) -> Result<Assertion, DecodeError> {
        if self.usage != RuleUsage::Ordering {
            return Ok(Assertion::Undefined);
        }

        Ok(Assertion::LessOrEqual {
            index_id: self.index_id.clone(),
            value: self.normalize_assertion(ctx, raw)?,
        })
    }

    /// Build a substring assertion from raw fragments. Initial fragments
    /// are trimmed only at the leading edge, final fragments only at the
    /// trailing edge, and middle fragments not at all.
    pub fn substring_assertion(
        &self,
        _ctx: &dyn SchemaContext,
        initial: Option<&[u8]>,
        any: &[&[u8]],
        final_: Option<&[u8]>,
    ) -> Result<Assertion, DecodeError> {
        let RuleImpl::Text(profile) = &self.imp else {
            return Ok(Assertion::Undefined);
        };
        if self.usage != RuleUsage::Substring {
            return Ok(Assertion::Undefined);
        }

        let fragments = SubstringFragments {
            initial: initial
                .map(|fragment| profile.normalize_initial(fragment))
                .transpose()?
                .filter(|fragment| !fragment.is_empty()),
            any: any
                .iter()
                .map(|fragment| profile.normalize_any(fragment))
                .filter(|fragment| !matches!(fragment, Ok(bytes) if bytes.is_empty()))
                .collect::<Result<_, _>>()?,
            final_: final_
                .map(|fragment| profile.normalize_final(fragment))
                .transpose()?
                .filter(|fragment| !fragment.is_empty()),
        };

        Ok(Assertion::Substring {
            index_id: self.index_id.clone(),
            fragments,
        })
    }

    /// Indexers that maintain this rule's index. Ordering rules that share
    /// their equality rule's index return an indexer for that shared id.
    #[must_use]
    pub fn create_indexers(&self, options: &IndexingOptions) -> Vec<Indexer<'_>> {
        let kind = match (self.usage, &self.imp) {
            (RuleUsage::Equality, RuleImpl::Keyword) => IndexerKind::Tokens,
            (RuleUsage::Approximate, RuleImpl::EqualLengthApproximate) => IndexerKind::Length,
            (RuleUsage::Equality | RuleUsage::Ordering | RuleUsage::Approximate, _) => {
                IndexerKind::Value
            }
            (RuleUsage::Substring, _) => IndexerKind::Substring {
                key_size: options.substring_key_size.max(1),
            },
        };

        vec![Indexer::new(self, kind)]
    }
}

impl fmt::Debug for MatchingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchingRule")
            .field("oid", &self.oid)
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("index_id", &self.index_id)
            .finish_non_exhaustive()
    }
}
