use super::*;
use crate::{rule::MatchingRule, test_support::TestContext};
use dirschema_primitives::RuleKind;
use std::collections::BTreeSet;

fn keys_for(kind: RuleKind, options: &IndexingOptions, values: &[&str]) -> BTreeSet<IndexKey> {
    let rule = MatchingRule::builtin(kind);
    let ctx = TestContext::default();
    let mut keys = BTreeSet::new();

    for indexer in rule.create_indexers(options) {
        for value in values {
            indexer
                .create_keys(&ctx, value.as_bytes(), &mut keys)
                .expect("indexable value");
        }
    }

    keys
}

#[test]
fn windows_truncate_at_the_tail() {
    let windows = substring_windows(b"ABCDE", 3);

    assert_eq!(
        windows,
        vec![&b"ABC"[..], &b"BCD"[..], &b"CDE"[..], &b"DE"[..], &b"E"[..]]
    );
    assert!(substring_windows(b"", 3).is_empty());
    assert_eq!(substring_windows(b"ab", 0), vec![&b"a"[..], &b"b"[..]]);
}

#[test]
fn length_key_is_big_endian() {
    assert_eq!(length_key(0), [0, 0, 0, 0]);
    assert_eq!(length_key(258), [0, 0, 1, 2]);
}

#[test]
fn duplicate_windows_collapse_into_one_key() {
    let keys = keys_for(
        RuleKind::CaseIgnoreSubstrings,
        &IndexingOptions::new(2),
        &["aaaa", "AAA"],
    );
    let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();

    assert_eq!(
        rendered,
        vec![
            "caseIgnoreSubstringsMatch:61".to_string(),
            "caseIgnoreSubstringsMatch:6161".to_string(),
        ]
    );
}

#[test]
fn equal_values_share_one_key() {
    let keys = keys_for(
        RuleKind::CaseIgnore,
        &IndexingOptions::default(),
        &["Hello  World", "hello world", " HELLO WORLD "],
    );

    assert_eq!(keys.len(), 1);
    let key = keys.first().expect("one key");
    assert_eq!(key.index_id(), "caseIgnoreMatch");
    assert_eq!(key.bytes(), b"hello world");
}

#[test]
fn undecodable_values_emit_no_keys() {
    let rule = MatchingRule::builtin(RuleKind::Integer);
    let indexers = rule.create_indexers(&IndexingOptions::default());
    let mut keys = BTreeSet::new();

    assert!(
        indexers[0]
            .create_keys(&TestContext::default(), b"forty-two", &mut keys)
            .is_err()
    );
    assert!(keys.is_empty());
}

#[test]
fn human_readable_keys_depend_on_the_encoding() {
    let options = IndexingOptions::default();

    let text_rule = MatchingRule::builtin(RuleKind::CaseIgnore);
    let text_indexer = text_rule.create_indexers(&options)[0];
    assert_eq!(text_indexer.key_to_human_readable_string(b"abc"), "abc");

    let int_rule = MatchingRule::builtin(RuleKind::Integer);
    let int_indexer = int_rule.create_indexers(&options)[0];
    assert_eq!(
        int_indexer.key_to_human_readable_string(&[0x80, 0, 0, 0, 0, 0, 0, 1]),
        "8000000000000001"
    );

    let approx_rule = MatchingRule::builtin(RuleKind::EqualLengthApproximate);
    let approx_indexer = approx_rule.create_indexers(&options)[0];
    assert_eq!(
        approx_indexer.key_to_human_readable_string(&length_key(3)),
        "00000003"
    );
}

#[test]
fn ordering_rules_write_into_the_equality_index() {
    let options = IndexingOptions::default();

    let equality = keys_for(RuleKind::Integer, &options, &["7"]);
    let ordering = keys_for(RuleKind::IntegerOrdering, &options, &["7"]);

    assert_eq!(equality, ordering);
}
