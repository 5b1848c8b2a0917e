use super::*;
use dirschema_primitives::{RuleKind, SyntaxKind};

#[test]
fn every_builtin_is_registered() {
    let registry = core_registry();

    assert_eq!(registry.syntaxes().count(), ALL_SYNTAX_KINDS.len());
    assert_eq!(registry.matching_rules().count(), ALL_RULE_KINDS.len());

    for kind in ALL_SYNTAX_KINDS {
        assert!(registry.syntax(kind.oid()).is_some(), "{kind:?}");
    }
    for kind in ALL_RULE_KINDS {
        assert!(registry.matching_rule(kind.oid()).is_some(), "{kind:?}");
    }
}

#[test]
fn lookups_accept_names_in_any_case() {
    let registry = core_registry();

    let by_name = registry.matching_rule("CASEIGNOREMATCH").expect("rule");
    assert_eq!(by_name.oid(), RuleKind::CaseIgnore.oid());

    let syntax = registry.syntax("directorystring").expect("syntax");
    assert_eq!(syntax.oid(), SyntaxKind::DirectoryString.oid());

    assert!(registry.syntax("no-such-syntax").is_none());
    assert!(registry.matching_rule("2.5.13.999").is_none());
}

#[test]
fn default_rules_follow_the_syntax_bindings() {
    let registry = core_registry();
    let integer = registry
        .syntax(SyntaxKind::Integer.oid())
        .expect("integer syntax");

    let equality = registry
        .default_rule(integer, RuleUsage::Equality)
        .expect("equality");
    let ordering = registry
        .default_rule(integer, RuleUsage::Ordering)
        .expect("ordering");

    assert_eq!(equality.name(), "integerMatch");
    assert_eq!(ordering.name(), "integerOrderingMatch");
    assert!(registry.default_rule(integer, RuleUsage::Substring).is_none());
}

#[test]
fn registry_is_shared() {
    assert!(std::ptr::eq(core_registry(), core_registry()));
}
