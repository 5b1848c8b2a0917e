#[macro_export]
macro_rules! syntax_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                AuthPassword,
                oid = "1.3.6.1.4.1.4203.1.1.2",
                name = "AuthenticationPasswordSyntax",
                human_readable = true,
                equality = Some("1.3.6.1.4.1.4203.1.2.2"),
                ordering = None,
                substring = None,
                approximate = None
            ),
            (
                Binary,
                oid = "1.3.6.1.4.1.1466.115.121.1.5",
                name = "Binary",
                human_readable = false,
                equality = Some("2.5.13.17"),
                ordering = Some("2.5.13.18"),
                substring = Some("2.5.13.19"),
                approximate = None
            ),
            (
                BitString,
                oid = "1.3.6.1.4.1.1466.115.121.1.6",
                name = "BitString",
                human_readable = true,
                equality = Some("2.5.13.16"),
                ordering = None,
                substring = None,
                approximate = None
            ),
            (
                Boolean,
                oid = "1.3.6.1.4.1.1466.115.121.1.7",
                name = "Boolean",
                human_readable = true,
                equality = Some("2.5.13.13"),
                ordering = None,
                substring = None,
                approximate = None
            ),
            (
                CountryString,
                oid = "1.3.6.1.4.1.1466.115.121.1.11",
                name = "CountryString",
                human_readable = true,
                equality = Some("2.5.13.2"),
                ordering = None,
                substring = Some("2.5.13.4"),
                approximate = None
            ),
            (
                DirectoryString,
                oid = "1.3.6.1.4.1.1466.115.121.1.15",
                name = "DirectoryString",
                human_readable = true,
                equality = Some("2.5.13.2"),
                ordering = Some("2.5.13.3"),
                substring = Some("2.5.13.4"),
                approximate = Some("1.3.6.1.4.1.26027.1.4.1")
            ),
            (
                DistinguishedName,
                oid = "1.3.6.1.4.1.1466.115.121.1.12",
                name = "DN",
                human_readable = true,
                equality = Some("2.5.13.1"),
                ordering = None,
                substring = None,
                approximate = None
            ),
            (
                GeneralizedTime,
                oid = "1.3.6.1.4.1.1466.115.121.1.24",
                name = "GeneralizedTime",
                human_readable = true,
                equality = Some("2.5.13.27"),
                ordering = Some("2.5.13.28"),
                substring = None,
                approximate = None
            ),
            (
                Ia5String,
                oid = "1.3.6.1.4.1.1466.115.121.1.26",
                name = "IA5String",
                human_readable = true,
                equality = Some("1.3.6.1.4.1.1466.109.114.2"),
                ordering = None,
                substring = Some("1.3.6.1.4.1.1466.109.114.3"),
                approximate = Some("1.3.6.1.4.1.26027.1.4.1")
            ),
            (
                Integer,
                oid = "1.3.6.1.4.1.1466.115.121.1.27",
                name = "Integer",
                human_readable = true,
                equality = Some("2.5.13.14"),
                ordering = Some("2.5.13.15"),
                substring = None,
                approximate = None
            ),
            (
                Jpeg,
                oid = "1.3.6.1.4.1.1466.115.121.1.28",
                name = "JPEG",
                human_readable = false,
                equality = Some("2.5.13.17"),
                ordering = Some("2.5.13.18"),
                substring = Some("2.5.13.19"),
                approximate = None
            ),
            (
                NameAndOptionalUid,
                oid = "1.3.6.1.4.1.1466.115.121.1.34",
                name = "NameAndOptionalUID",
                human_readable = true,
                equality = Some("2.5.13.23"),
                ordering = None,
                substring = None,
                approximate = None
            ),
            (
                NumericString,
                oid = "1.3.6.1.4.1.1466.115.121.1.36",
                name = "NumericString",
                human_readable = true,
                equality = Some("2.5.13.8"),
                ordering = Some("2.5.13.9"),
                substring = Some("2.5.13.10"),
                approximate = None
            ),
            (
                OctetString,
                oid = "1.3.6.1.4.1.1466.115.121.1.40",
                name = "OctetString",
                human_readable = false,
                equality = Some("2.5.13.17"),
                ordering = Some("2.5.13.18"),
                substring = Some("2.5.13.19"),
                approximate = None
            ),
            (
                Oid,
                oid = "1.3.6.1.4.1.1466.115.121.1.38",
                name = "OID",
                human_readable = true,
                equality = Some("2.5.13.0"),
                ordering = None,
                substring = None,
                approximate = None
            ),
            (
                PostalAddress,
                oid = "1.3.6.1.4.1.1466.115.121.1.41",
                name = "PostalAddress",
                human_readable = true,
                equality = Some("2.5.13.11"),
                ordering = None,
                substring = Some("2.5.13.12"),
                approximate = None
            ),
            (
                PrintableString,
                oid = "1.3.6.1.4.1.1466.115.121.1.44",
                name = "PrintableString",
                human_readable = true,
                equality = Some("2.5.13.2"),
                ordering = Some("2.5.13.3"),
                substring = Some("2.5.13.4"),
                approximate = Some("1.3.6.1.4.1.26027.1.4.1")
            ),
            (
                TelephoneNumber,
                oid = "1.3.6.1.4.1.1466.115.121.1.50",
                name = "TelephoneNumber",
                human_readable = true,
                equality = Some("2.5.13.20"),
                ordering = None,
                substring = Some("2.5.13.21"),
                approximate = None
            ),
            (
                UserPassword,
                oid = "1.3.6.1.4.1.26027.1.3.1",
                name = "ds-syntax-user-password",
                human_readable = true,
                equality = Some("1.3.6.1.4.1.26027.1.4.2"),
                ordering = None,
                substring = None,
                approximate = None
            ),
            (
                Uuid,
                oid = "1.3.6.1.1.16.1",
                name = "UUID",
                human_readable = true,
                equality = Some("1.3.6.1.1.16.2"),
                ordering = Some("1.3.6.1.1.16.3"),
                substring = None,
                approximate = None
            ),
        }
    };
}

#[macro_export]
macro_rules! syntax_kind_registry {
    ($macro:ident) => {
        $crate::syntax_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::syntax_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! syntax_metadata_from_registry {
    ( @args $kind:expr; @entries $( ($syntax:ident, oid = $oid:expr, name = $name:expr, human_readable = $human_readable:expr, equality = $equality:expr, ordering = $ordering:expr, substring = $substring:expr, approximate = $approximate:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::SyntaxKind::$syntax => $crate::SyntaxMetadata {
                    oid: $oid,
                    name: $name,
                    human_readable: $human_readable,
                    equality: $equality,
                    ordering: $ordering,
                    substring: $substring,
                    approximate: $approximate,
                },
            )*
        }
    };
}

macro_rules! all_syntax_kinds_from_registry {
    ( @entries $( ($syntax:ident, oid = $oid:expr, name = $name:expr, human_readable = $human_readable:expr, equality = $equality:expr, ordering = $ordering:expr, substring = $substring:expr, approximate = $approximate:expr) ),* $(,)? ) => {
        [ $( $crate::SyntaxKind::$syntax ),* ]
    };
}

#[macro_export]
macro_rules! rule_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                AuthPasswordExact,
                oid = "1.3.6.1.4.1.4203.1.2.2",
                name = "authPasswordExactMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.4203.1.1.2",
                index_id = "authPasswordExactMatch"
            ),
            (
                BitString,
                oid = "2.5.13.16",
                name = "bitStringMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.6",
                index_id = "bitStringMatch"
            ),
            (
                Boolean,
                oid = "2.5.13.13",
                name = "booleanMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.7",
                index_id = "booleanMatch"
            ),
            (
                CaseExact,
                oid = "2.5.13.5",
                name = "caseExactMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.15",
                index_id = "caseExactMatch"
            ),
            (
                CaseExactIa5,
                oid = "1.3.6.1.4.1.1466.109.114.1",
                name = "caseExactIA5Match",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.26",
                index_id = "caseExactIA5Match"
            ),
            (
                CaseExactIa5Substrings,
                oid = "1.3.6.1.4.1.26027.1.4.902",
                name = "caseExactIA5SubstringsMatch",
                usage = Substring,
                syntax = "1.3.6.1.4.1.1466.115.121.1.58",
                index_id = "caseExactIA5SubstringsMatch"
            ),
            (
                CaseExactOrdering,
                oid = "2.5.13.6",
                name = "caseExactOrderingMatch",
                usage = Ordering,
                syntax = "1.3.6.1.4.1.1466.115.121.1.15",
                index_id = "caseExactMatch"
            ),
            (
                CaseExactSubstrings,
                oid = "2.5.13.7",
                name = "caseExactSubstringsMatch",
                usage = Substring,
                syntax = "1.3.6.1.4.1.1466.115.121.1.58",
                index_id = "caseExactSubstringsMatch"
            ),
            (
                CaseIgnore,
                oid = "2.5.13.2",
                name = "caseIgnoreMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.15",
                index_id = "caseIgnoreMatch"
            ),
            (
                CaseIgnoreIa5,
                oid = "1.3.6.1.4.1.1466.109.114.2",
                name = "caseIgnoreIA5Match",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.26",
                index_id = "caseIgnoreIA5Match"
            ),
            (
                CaseIgnoreIa5Substrings,
                oid = "1.3.6.1.4.1.1466.109.114.3",
                name = "caseIgnoreIA5SubstringsMatch",
                usage = Substring,
                syntax = "1.3.6.1.4.1.1466.115.121.1.58",
                index_id = "caseIgnoreIA5SubstringsMatch"
            ),
            (
                CaseIgnoreList,
                oid = "2.5.13.11",
                name = "caseIgnoreListMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.41",
                index_id = "caseIgnoreListMatch"
            ),
            (
                CaseIgnoreListSubstrings,
                oid = "2.5.13.12",
                name = "caseIgnoreListSubstringsMatch",
                usage = Substring,
                syntax = "1.3.6.1.4.1.1466.115.121.1.58",
                index_id = "caseIgnoreListSubstringsMatch"
            ),
            (
                CaseIgnoreOrdering,
                oid = "2.5.13.3",
                name = "caseIgnoreOrderingMatch",
                usage = Ordering,
                syntax = "1.3.6.1.4.1.1466.115.121.1.15",
                index_id = "caseIgnoreMatch"
            ),
            (
                CaseIgnoreSubstrings,
                oid = "2.5.13.4",
                name = "caseIgnoreSubstringsMatch",
                usage = Substring,
                syntax = "1.3.6.1.4.1.1466.115.121.1.58",
                index_id = "caseIgnoreSubstringsMatch"
            ),
            (
                DirectoryStringFirstComponent,
                oid = "2.5.13.31",
                name = "directoryStringFirstComponentMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.15",
                index_id = "directoryStringFirstComponentMatch"
            ),
            (
                DistinguishedName,
                oid = "2.5.13.1",
                name = "distinguishedNameMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.12",
                index_id = "distinguishedNameMatch"
            ),
            (
                DoubleMetaphoneApproximate,
                oid = "1.3.6.1.4.1.26027.1.4.1",
                name = "ds-mr-double-metaphone-approx",
                usage = Approximate,
                syntax = "1.3.6.1.4.1.1466.115.121.1.15",
                index_id = "ds-mr-double-metaphone-approx"
            ),
            (
                EqualLengthApproximate,
                oid = "1.3.6.1.4.1.26027.1.999.26",
                name = "equalLengthApproximateMatch",
                usage = Approximate,
                syntax = "1.3.6.1.4.1.1466.115.121.1.15",
                index_id = "equalLengthApproximateMatch"
            ),
            (
                GeneralizedTime,
                oid = "2.5.13.27",
                name = "generalizedTimeMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.24",
                index_id = "generalizedTimeMatch"
            ),
            (
                GeneralizedTimeOrdering,
                oid = "2.5.13.28",
                name = "generalizedTimeOrderingMatch",
                usage = Ordering,
                syntax = "1.3.6.1.4.1.1466.115.121.1.24",
                index_id = "generalizedTimeMatch"
            ),
            (
                Integer,
                oid = "2.5.13.14",
                name = "integerMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.27",
                index_id = "integerMatch"
            ),
            (
                IntegerFirstComponent,
                oid = "2.5.13.29",
                name = "integerFirstComponentMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.27",
                index_id = "integerFirstComponentMatch"
            ),
            (
                IntegerOrdering,
                oid = "2.5.13.15",
                name = "integerOrderingMatch",
                usage = Ordering,
                syntax = "1.3.6.1.4.1.1466.115.121.1.27",
                index_id = "integerMatch"
            ),
            (
                Keyword,
                oid = "2.5.13.33",
                name = "keywordMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.15",
                index_id = "keywordMatch"
            ),
            (
                NumericString,
                oid = "2.5.13.8",
                name = "numericStringMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.36",
                index_id = "numericStringMatch"
            ),
            (
                NumericStringOrdering,
                oid = "2.5.13.9",
                name = "numericStringOrderingMatch",
                usage = Ordering,
                syntax = "1.3.6.1.4.1.1466.115.121.1.36",
                index_id = "numericStringMatch"
            ),
            (
                NumericStringSubstrings,
                oid = "2.5.13.10",
                name = "numericStringSubstringsMatch",
                usage = Substring,
                syntax = "1.3.6.1.4.1.1466.115.121.1.58",
                index_id = "numericStringSubstringsMatch"
            ),
            (
                ObjectIdentifier,
                oid = "2.5.13.0",
                name = "objectIdentifierMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.38",
                index_id = "objectIdentifierMatch"
            ),
            (
                ObjectIdentifierFirstComponent,
                oid = "2.5.13.30",
                name = "objectIdentifierFirstComponentMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.38",
                index_id = "objectIdentifierFirstComponentMatch"
            ),
            (
                OctetString,
                oid = "2.5.13.17",
                name = "octetStringMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.40",
                index_id = "octetStringMatch"
            ),
            (
                OctetStringOrdering,
                oid = "2.5.13.18",
                name = "octetStringOrderingMatch",
                usage = Ordering,
                syntax = "1.3.6.1.4.1.1466.115.121.1.40",
                index_id = "octetStringMatch"
            ),
            (
                OctetStringSubstrings,
                oid = "2.5.13.19",
                name = "octetStringSubstringsMatch",
                usage = Substring,
                syntax = "1.3.6.1.4.1.1466.115.121.1.40",
                index_id = "octetStringSubstringsMatch"
            ),
            (
                TelephoneNumber,
                oid = "2.5.13.20",
                name = "telephoneNumberMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.50",
                index_id = "telephoneNumberMatch"
            ),
            (
                TelephoneNumberSubstrings,
                oid = "2.5.13.21",
                name = "telephoneNumberSubstringsMatch",
                usage = Substring,
                syntax = "1.3.6.1.4.1.1466.115.121.1.58",
                index_id = "telephoneNumberSubstringsMatch"
            ),
            (
                UniqueMember,
                oid = "2.5.13.23",
                name = "uniqueMemberMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.34",
                index_id = "uniqueMemberMatch"
            ),
            (
                UserPasswordExact,
                oid = "1.3.6.1.4.1.26027.1.4.2",
                name = "ds-mr-user-password-exact",
                usage = Equality,
                syntax = "1.3.6.1.4.1.26027.1.3.1",
                index_id = "ds-mr-user-password-exact"
            ),
            (
                Uuid,
                oid = "1.3.6.1.1.16.2",
                name = "uuidMatch",
                usage = Equality,
                syntax = "1.3.6.1.1.16.1",
                index_id = "uuidMatch"
            ),
            (
                UuidOrdering,
                oid = "1.3.6.1.1.16.3",
                name = "uuidOrderingMatch",
                usage = Ordering,
                syntax = "1.3.6.1.1.16.1",
                index_id = "uuidMatch"
            ),
            (
                Word,
                oid = "2.5.13.32",
                name = "wordMatch",
                usage = Equality,
                syntax = "1.3.6.1.4.1.1466.115.121.1.15",
                index_id = "wordMatch"
            ),
        }
    };
}

#[macro_export]
macro_rules! rule_kind_registry {
    ($macro:ident) => {
        $crate::rule_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::rule_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! rule_metadata_from_registry {
    ( @args $kind:expr; @entries $( ($rule:ident, oid = $oid:expr, name = $name:expr, usage = $usage:ident, syntax = $syntax:expr, index_id = $index_id:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::RuleKind::$rule => $crate::RuleMetadata {
                    oid: $oid,
                    name: $name,
                    usage: $crate::RuleUsage::$usage,
                    syntax_oid: $syntax,
                    index_id: $index_id,
                },
            )*
        }
    };
}

macro_rules! all_rule_kinds_from_registry {
    ( @entries $( ($rule:ident, oid = $oid:expr, name = $name:expr, usage = $usage:ident, syntax = $syntax:expr, index_id = $index_id:expr) ),* $(,)? ) => {
        [ $( $crate::RuleKind::$rule ),* ]
    };
}
