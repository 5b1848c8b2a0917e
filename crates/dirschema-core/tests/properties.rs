//! Normalization properties: determinism, idempotence, order preservation,
//! agreement between equality and substring rules, and keyword containment.

use dirschema_core::{
    assertion::ConditionResult, context::SchemaOptions, rule::MatchingRule, schema::Schema,
    syntax::Syntax,
};
use dirschema_primitives::{RuleKind, SyntaxKind};
use proptest::prelude::*;
use std::cmp::Ordering;

fn normalized(kind: RuleKind, raw: &str) -> Vec<u8> {
    MatchingRule::builtin(kind)
        .normalize(&Schema::default(), raw.as_bytes())
        .expect("value should normalize")
        .into_bytes()
}

fn generalized_time(parts: (i32, u8, u8, u8, u8, u8)) -> String {
    let (year, month, day, hour, minute, second) = parts;

    format!("{year:04}{month:02}{day:02}{hour:02}{minute:02}{second:02}Z")
}

fn time_parts() -> impl Strategy<Value = (i32, u8, u8, u8, u8, u8)> {
    (1900..=2200i32, 1..=12u8, 1..=28u8, 0..24u8, 0..60u8, 0..60u8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn integer_encoding_preserves_numeric_order(lhs in any::<i64>(), rhs in any::<i64>()) {
        let lhs_bytes = normalized(RuleKind::IntegerOrdering, &lhs.to_string());
        let rhs_bytes = normalized(RuleKind::IntegerOrdering, &rhs.to_string());

        prop_assert_eq!(lhs.cmp(&rhs), lhs_bytes.cmp(&rhs_bytes));
    }

    #[test]
    fn generalized_time_encoding_preserves_chronological_order(
        lhs in time_parts(),
        rhs in time_parts(),
    ) {
        let lhs_bytes = normalized(RuleKind::GeneralizedTimeOrdering, &generalized_time(lhs));
        let rhs_bytes = normalized(RuleKind::GeneralizedTimeOrdering, &generalized_time(rhs));

        prop_assert_eq!(lhs.cmp(&rhs), lhs_bytes.cmp(&rhs_bytes));
    }

    #[test]
    fn case_ignore_is_deterministic_and_idempotent(raw in "[ -~]{0,32}") {
        let once = normalized(RuleKind::CaseIgnore, &raw);
        let again = normalized(RuleKind::CaseIgnore, &raw);
        let twice = normalized(
            RuleKind::CaseIgnore,
            std::str::from_utf8(&once).expect("normalized text is UTF-8"),
        );

        prop_assert_eq!(&once, &again);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn case_ignore_equality_ignores_case_and_space_runs(raw in "[a-zA-Z]{1,8}( {1,3}[a-zA-Z]{1,8}){0,3}") {
        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

        prop_assert_eq!(
            normalized(RuleKind::CaseIgnore, &raw.to_ascii_uppercase()),
            normalized(RuleKind::CaseIgnore, &format!("  {collapsed} "))
        );
    }

    #[test]
    fn any_substring_of_a_value_matches_it(
        value in "[a-z]{1,8}( [a-z]{1,8}){0,3}",
        start in 0usize..64,
        len in 1usize..8,
    ) {
        let schema = Schema::default();
        let rule = MatchingRule::builtin(RuleKind::CaseIgnoreSubstrings);
        let start = start % value.len();
        let end = (start + len).min(value.len());
        let fragment = &value[start..end];
        prop_assume!(!fragment.trim().is_empty());

        let assertion = rule
            .assertion(&schema, format!("*{fragment}*").as_bytes())
            .expect("assertion");
        let stored = rule.normalize(&schema, value.as_bytes()).expect("value");

        prop_assert_eq!(assertion.matches(&stored), ConditionResult::True);
    }

    #[test]
    fn every_token_of_a_value_is_one_of_its_keywords(
        words in prop::collection::vec("[a-z]{1,8}", 1..5),
        pick in 0usize..5,
    ) {
        let schema = Schema::default();
        let rule = MatchingRule::builtin(RuleKind::Keyword);
        let value = words.join(", ");
        let keyword = words[pick % words.len()].to_ascii_uppercase();

        let assertion = rule.assertion(&schema, keyword.as_bytes()).expect("assertion");
        let stored = rule.normalize(&schema, value.as_bytes()).expect("value");

        prop_assert_eq!(assertion.matches(&stored), ConditionResult::True);
    }

    #[test]
    fn accepted_integers_always_normalize(raw in "-?[1-9][0-9]{0,17}|0") {
        let schema = Schema::default();
        let syntax = Syntax::builtin(SyntaxKind::Integer);
        let mut messages = Vec::new();

        prop_assert!(syntax.accept(&schema, raw.as_bytes(), &mut messages));
        prop_assert!(messages.is_empty());
        prop_assert!(
            MatchingRule::builtin(RuleKind::Integer)
                .normalize(&schema, raw.as_bytes())
                .is_ok()
        );
    }
}

#[test]
fn enumeration_order_is_declaration_order() {
    let mut builder = Schema::builder();
    builder
        .add_enum_syntax("1.3.6.1.4.1.99999.9", "Level", ["low", "medium", "high"])
        .expect("enum");
    let schema = builder.build().expect("schema");
    let rule = schema
        .matching_rule("enumOrderingMatch1.3.6.1.4.1.99999.9")
        .expect("minted rule");

    let encode = |raw: &str| rule.normalize(&schema, raw.as_bytes()).expect("member");
    assert_eq!(encode("LOW").cmp(&encode("Medium")), Ordering::Less);
    assert_eq!(encode("high").cmp(&encode("medium")), Ordering::Greater);
    assert!(rule.normalize(&schema, b"extreme").is_err());
}

#[test]
fn rejections_always_explain_themselves() {
    let schema = Schema::core(SchemaOptions {
        allow_malformed_jpeg_photos: false,
        ..SchemaOptions::default()
    });
    let samples: [&[u8]; 6] = [b"", b"maybe", b"\xff\xfe", b"12a", b"'12'B", b"not a uuid"];

    for kind in dirschema_primitives::ALL_SYNTAX_KINDS {
        let syntax = Syntax::builtin(kind);
        for sample in samples {
            let mut messages = Vec::new();
            let accepted = syntax.accept(&schema, sample, &mut messages);

            assert_eq!(
                accepted,
                messages.is_empty(),
                "{kind:?} on {sample:?}: {messages:?}"
            );
        }
    }
}
