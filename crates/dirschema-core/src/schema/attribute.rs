use dirschema_primitives::RuleUsage;
use std::collections::BTreeSet;

///
/// AttributeType
///
/// An attribute type definition: OID, names, syntax, and optional explicit
/// matching rule bindings that override the syntax defaults.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AttributeType {
    oid: String,
    names: Vec<String>,
    syntax_oid: String,
    equality_rule: Option<String>,
    ordering_rule: Option<String>,
    substring_rule: Option<String>,
    approximate_rule: Option<String>,
}

impl AttributeType {
    #[must_use]
    pub fn new(oid: impl Into<String>, syntax_oid: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            syntax_oid: syntax_oid.into(),
            ..Self::default()
        }
    }

    /// Add a name; the first name added is the primary one.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Bind an explicit rule (OID or name) for `usage`.
    #[must_use]
    pub fn with_rule(mut self, usage: RuleUsage, rule: impl Into<String>) -> Self {
        let slot = match usage {
            RuleUsage::Equality => &mut self.equality_rule,
            RuleUsage::Ordering => &mut self.ordering_rule,
            RuleUsage::Substring => &mut self.substring_rule,
            RuleUsage::Approximate => &mut self.approximate_rule,
        };
        *slot = Some(rule.into());

        self
    }

    #[must_use]
    pub fn oid(&self) -> &str {
        &self.oid
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn syntax_oid(&self) -> &str {
        &self.syntax_oid
    }

    #[must_use]
    pub fn rule_oid(&self, usage: RuleUsage) -> Option<&str> {
        match usage {
            RuleUsage::Equality => self.equality_rule.as_deref(),
            RuleUsage::Ordering => self.ordering_rule.as_deref(),
            RuleUsage::Substring => self.substring_rule.as_deref(),
            RuleUsage::Approximate => self.approximate_rule.as_deref(),
        }
    }

    /// Lower-cased primary name, or the OID for unnamed types.
    #[must_use]
    pub fn canonical_name(&self) -> String {
        self.names
            .first()
            .map_or_else(|| self.oid.clone(), |name| name.to_ascii_lowercase())
    }

    pub(super) fn lookup_keys(&self) -> BTreeSet<String> {
        let mut keys: BTreeSet<String> = self
            .names
            .iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        keys.insert(self.oid.clone());

        keys
    }
}
