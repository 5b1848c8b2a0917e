#[macro_use]
mod macros;

/// OID of the substring assertion syntax used by every substrings rule.
pub const SUBSTRING_ASSERTION_SYNTAX_OID: &str = "1.3.6.1.4.1.1466.115.121.1.58";

/// Enumeration ordering rules are minted per syntax as `<base>.<syntax-oid>`.
pub const ENUM_ORDERING_RULE_OID_BASE: &str = "1.3.6.1.4.1.26027.1.4.8";

/// Enumeration ordering rule names are `<prefix><syntax-oid>`.
pub const ENUM_ORDERING_RULE_NAME_PREFIX: &str = "enumOrderingMatch";

///
/// SyntaxKind
///
/// Built-in attribute syntaxes shipped with the core schema.
/// Data-parameterized syntaxes (enumerations, patterns) are not listed here;
/// they are minted per schema definition.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SyntaxKind {
    AuthPassword,
    Binary,
    BitString,
    Boolean,
    CountryString,
    DirectoryString,
    DistinguishedName,
    GeneralizedTime,
    Ia5String,
    Integer,
    Jpeg,
    NameAndOptionalUid,
    NumericString,
    OctetString,
    Oid,
    PostalAddress,
    PrintableString,
    TelephoneNumber,
    UserPassword,
    Uuid,
}

impl SyntaxKind {
    /// Return the full metadata descriptor for one syntax kind.
    #[must_use]
    pub const fn metadata(self) -> SyntaxMetadata {
        syntax_kind_registry!(syntax_metadata_from_registry, self)
    }

    #[must_use]
    pub const fn oid(self) -> &'static str {
        self.metadata().oid
    }

    /// Return whether values of this syntax are textual.
    #[must_use]
    pub const fn is_human_readable(self) -> bool {
        self.metadata().human_readable
    }
}

///
/// SyntaxMetadata
///
/// Descriptor shared between the registry and the validators: identity,
/// readability, and the default matching rule OIDs for each usage.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SyntaxMetadata {
    pub oid: &'static str,
    pub name: &'static str,
    pub human_readable: bool,
    pub equality: Option<&'static str>,
    pub ordering: Option<&'static str>,
    pub substring: Option<&'static str>,
    pub approximate: Option<&'static str>,
}

/// Ordered list of all syntax kinds in registry order.
pub const ALL_SYNTAX_KINDS: [SyntaxKind; 20] =
    syntax_kind_registry!(all_syntax_kinds_from_registry);

///
/// RuleUsage
///
/// The filter-evaluation capability a matching rule provides.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RuleUsage {
    Equality,
    Ordering,
    Substring,
    Approximate,
}

impl RuleUsage {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Equality => "equality",
            Self::Ordering => "ordering",
            Self::Substring => "substring",
            Self::Approximate => "approximate",
        }
    }
}

///
/// RuleKind
///
/// Built-in matching rules shipped with the core schema.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RuleKind {
    AuthPasswordExact,
    BitString,
    Boolean,
    CaseExact,
    CaseExactIa5,
    CaseExactIa5Substrings,
    CaseExactOrdering,
    CaseExactSubstrings,
    CaseIgnore,
    CaseIgnoreIa5,
    CaseIgnoreIa5Substrings,
    CaseIgnoreList,
    CaseIgnoreListSubstrings,
    CaseIgnoreOrdering,
    CaseIgnoreSubstrings,
    DirectoryStringFirstComponent,
    DistinguishedName,
    DoubleMetaphoneApproximate,
    EqualLengthApproximate,
    GeneralizedTime,
    GeneralizedTimeOrdering,
    Integer,
    IntegerFirstComponent,
    IntegerOrdering,
    Keyword,
    NumericString,
    NumericStringOrdering,
    NumericStringSubstrings,
    ObjectIdentifier,
    ObjectIdentifierFirstComponent,
    OctetString,
    OctetStringOrdering,
    OctetStringSubstrings,
    TelephoneNumber,
    TelephoneNumberSubstrings,
    UniqueMember,
    UserPasswordExact,
    Uuid,
    UuidOrdering,
    Word,
}

impl RuleKind {
    /// Return the full metadata descriptor for one rule kind.
    #[must_use]
    pub const fn metadata(self) -> RuleMetadata {
        rule_kind_registry!(rule_metadata_from_registry, self)
    }

    #[must_use]
    pub const fn oid(self) -> &'static str {
        self.metadata().oid
    }

    #[must_use]
    pub const fn usage(self) -> RuleUsage {
        self.metadata().usage
    }

    /// Return whether this rule writes into an index owned by another rule.
    #[must_use]
    pub fn shares_index(self) -> bool {
        let metadata = self.metadata();

        metadata.index_id != metadata.name
    }
}

///
/// RuleMetadata
///
/// Identity and index binding for one built-in matching rule.
/// Ordering rules whose encoding is byte-identical to their equality
/// counterpart carry the equality rule's index id.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RuleMetadata {
    pub oid: &'static str,
    pub name: &'static str,
    pub usage: RuleUsage,
    pub syntax_oid: &'static str,
    pub index_id: &'static str,
}

/// Ordered list of all rule kinds in registry order.
pub const ALL_RULE_KINDS: [RuleKind; 40] = rule_kind_registry!(all_rule_kinds_from_registry);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn syntax_oids_are_unique() {
        let oids: BTreeSet<_> = ALL_SYNTAX_KINDS.iter().map(|kind| kind.oid()).collect();

        assert_eq!(oids.len(), ALL_SYNTAX_KINDS.len());
    }

    #[test]
    fn rule_oids_and_names_are_unique() {
        let oids: BTreeSet<_> = ALL_RULE_KINDS.iter().map(|kind| kind.oid()).collect();
        let names: BTreeSet<_> = ALL_RULE_KINDS
            .iter()
            .map(|kind| kind.metadata().name)
            .collect();

        assert_eq!(oids.len(), ALL_RULE_KINDS.len());
        assert_eq!(names.len(), ALL_RULE_KINDS.len());
    }

    #[test]
    fn syntax_default_rules_exist_with_matching_usage() {
        for syntax in ALL_SYNTAX_KINDS {
            let metadata = syntax.metadata();
            let bindings = [
                (metadata.equality, RuleUsage::Equality),
                (metadata.ordering, RuleUsage::Ordering),
                (metadata.substring, RuleUsage::Substring),
                (metadata.approximate, RuleUsage::Approximate),
            ];

            for (oid, usage) in bindings {
                let Some(oid) = oid else { continue };
                let rule = ALL_RULE_KINDS
                    .iter()
                    .find(|kind| kind.oid() == oid)
                    .unwrap_or_else(|| panic!("{syntax:?} references unknown rule {oid}"));

                assert_eq!(rule.usage(), usage, "{syntax:?} binds {oid} as {usage:?}");
            }
        }
    }

    #[test]
    fn shared_index_ids_point_at_equality_rules() {
        for kind in ALL_RULE_KINDS.iter().filter(|kind| kind.shares_index()) {
            let index_id = kind.metadata().index_id;
            let owner = ALL_RULE_KINDS
                .iter()
                .find(|other| other.metadata().name == index_id)
                .expect("shared index id must name a built-in rule");

            assert_eq!(kind.usage(), RuleUsage::Ordering);
            assert_eq!(owner.usage(), RuleUsage::Equality);
        }
    }
}
