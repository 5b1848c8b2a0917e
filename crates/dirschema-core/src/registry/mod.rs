//! Module: registry
//! Responsibility: the process-wide, read-only table of built-in syntaxes
//! and matching rules.
//! Does not own: data-parameterized syntaxes (see `schema`).
//! Boundary: built once on first use; lookups never lock.

#[cfg(test)]
mod tests;

use crate::{rule::MatchingRule, syntax::Syntax};
use dirschema_primitives::{ALL_RULE_KINDS, ALL_SYNTAX_KINDS, RuleUsage};
use std::{collections::HashMap, sync::LazyLock};
use tracing::info;

///
/// CORE_REGISTRY
///

static CORE_REGISTRY: LazyLock<CoreRegistry> = LazyLock::new(CoreRegistry::build);

/// The shared built-in registry.
#[must_use]
pub fn core_registry() -> &'static CoreRegistry {
    &CORE_REGISTRY
}

///
/// CoreRegistry
///
/// Built-in syntaxes and rules, addressable by numeric OID or by
/// case-insensitive name.
///

#[derive(Debug)]
pub struct CoreRegistry {
    syntaxes: Vec<Syntax>,
    rules: Vec<MatchingRule>,
    syntax_lookup: HashMap<String, usize>,
    rule_lookup: HashMap<String, usize>,
}

impl CoreRegistry {
    fn build() -> Self {
        let syntaxes: Vec<Syntax> = ALL_SYNTAX_KINDS.into_iter().map(Syntax::builtin).collect();
        let rules: Vec<MatchingRule> = ALL_RULE_KINDS
            .into_iter()
            .map(MatchingRule::builtin)
            .collect();

        let syntax_lookup = lookup_table(
            syntaxes
                .iter()
                .map(|syntax| (syntax.oid(), syntax.description())),
        );
        let rule_lookup = lookup_table(rules.iter().map(|rule| (rule.oid(), rule.name())));

        info!(
            target: "dirschema::registry",
            syntaxes = syntaxes.len(),
            rules = rules.len(),
            "core registry built"
        );

        Self {
            syntaxes,
            rules,
            syntax_lookup,
            rule_lookup,
        }
    }

    /// Look up a built-in syntax by OID or name.
    #[must_use]
    pub fn syntax(&self, oid_or_name: &str) -> Option<&Syntax> {
        self.syntax_lookup
            .get(&oid_or_name.to_ascii_lowercase())
            .map(|&index| &self.syntaxes[index])
    }

    /// Look up a built-in matching rule by OID or name.
    #[must_use]
    pub fn matching_rule(&self, oid_or_name: &str) -> Option<&MatchingRule> {
        self.rule_lookup
            .get(&oid_or_name.to_ascii_lowercase())
            .map(|&index| &self.rules[index])
    }

    /// The built-in rule a syntax names for `usage`, if any.
    #[must_use]
    pub fn default_rule(&self, syntax: &Syntax, usage: RuleUsage) -> Option<&MatchingRule> {
        let oid = match usage {
            RuleUsage::Equality => syntax.equality_rule_oid(),
            RuleUsage::Ordering => syntax.ordering_rule_oid(),
            RuleUsage::Substring => syntax.substring_rule_oid(),
            RuleUsage::Approximate => syntax.approximate_rule_oid(),
        }?;

        self.matching_rule(oid)
    }

    pub fn syntaxes(&self) -> impl Iterator<Item = &Syntax> {
        self.syntaxes.iter()
    }

    pub fn matching_rules(&self) -> impl Iterator<Item = &MatchingRule> {
        self.rules.iter()
    }
}

// Every element is reachable through its OID and its lower-cased name.
fn lookup_table<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>) -> HashMap<String, usize> {
    let mut table = HashMap::new();
    for (index, (oid, name)) in entries.enumerate() {
        table.insert(oid.to_string(), index);
        table.insert(name.to_ascii_lowercase(), index);
    }

    table
}
