//! Module: schema
//! Responsibility: a concrete `SchemaContext`: attribute types, options,
//! and the data-parameterized syntaxes and rules one schema defines.
//! Does not own: built-in syntaxes and rules (see `registry`).
//! Boundary: assembled through `SchemaBuilder`, immutable once built.

mod attribute;


use crate::{
    context::{SchemaContext, SchemaOptions},
    error::{ResolutionError, SchemaError},
    registry::{CoreRegistry, core_registry},
    rule::MatchingRule,
    syntax::{EnumerationSyntax, PatternSyntax, Syntax},
};
use dirschema_primitives::RuleUsage;
use std::collections::{BTreeMap, HashMap};
use tracing::info;

// re-exports
pub use attribute::AttributeType;

///
/// Schema
///
/// Resolved view over the core registry plus this schema's own attribute
/// types, enumeration syntaxes, pattern syntaxes and minted rules.
///

#[derive(Debug)]
pub struct Schema {
    options: SchemaOptions,
    attribute_types: Vec<AttributeType>,
    attribute_lookup: HashMap<String, usize>,
    syntaxes: BTreeMap<String, Syntax>,
    rules: BTreeMap<String, MatchingRule>,
    rule_names: HashMap<String, String>,
    core: &'static CoreRegistry,
}

impl Schema {
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// A schema with no definitions of its own.
    #[must_use]
    pub fn core(options: SchemaOptions) -> Self {
        Self {
            options,
            attribute_types: Vec::new(),
            attribute_lookup: HashMap::new(),
            syntaxes: BTreeMap::new(),
            rules: BTreeMap::new(),
            rule_names: HashMap::new(),
            core: core_registry(),
        }
    }

    #[must_use]
    pub fn attribute_type(&self, oid_or_name: &str) -> Option<&AttributeType> {
        self.attribute_lookup
            .get(&oid_or_name.to_ascii_lowercase())
            .map(|&index| &self.attribute_types[index])
    }

    pub fn attribute_types(&self) -> impl Iterator<Item = &AttributeType> {
        self.attribute_types.iter()
    }

    /// Look up a syntax defined by this schema, then a built-in one.
    #[must_use]
    pub fn syntax(&self, oid_or_name: &str) -> Option<&Syntax> {
        self.syntaxes
            .get(oid_or_name)
            .or_else(|| self.core.syntax(oid_or_name))
    }

    /// Look up a rule minted by this schema, then a built-in one.
    #[must_use]
    pub fn matching_rule(&self, oid_or_name: &str) -> Option<&MatchingRule> {
        let oid = self
            .rule_names
            .get(&oid_or_name.to_ascii_lowercase())
            .map_or(oid_or_name, String::as_str);

        self.rules
            .get(oid)
            .or_else(|| self.core.matching_rule(oid_or_name))
    }

    /// The rule an attribute type uses for `usage`: the type's own binding
    /// when it has one, otherwise its syntax's default.
    #[must_use]
    pub fn attribute_rule(&self, attribute: &str, usage: RuleUsage) -> Option<&MatchingRule> {
        let attribute = self.attribute_type(attribute)?;
        if let Some(oid) = attribute.rule_oid(usage) {
            return self.matching_rule(oid);
        }

        let syntax = self.syntax(attribute.syntax_oid())?;
        let oid = match usage {
            RuleUsage::Equality => syntax.equality_rule_oid(),
            RuleUsage::Ordering => syntax.ordering_rule_oid(),
            RuleUsage::Substring => syntax.substring_rule_oid(),
            RuleUsage::Approximate => syntax.approximate_rule_oid(),
        }?;

        self.matching_rule(oid)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::core(SchemaOptions::default())
    }
}

impl SchemaContext for Schema {
    fn options(&self) -> &SchemaOptions {
        &self.options
    }

    fn resolve_attribute_type(&self, name: &str) -> Result<String, ResolutionError> {
        self.attribute_type(name)
            .map(AttributeType::canonical_name)
            .ok_or_else(|| ResolutionError::UnknownAttributeType(name.to_string()))
    }

    fn resolve_oid(&self, name: &str) -> Result<String, ResolutionError> {
        let lower = name.to_ascii_lowercase();

        if let Some(attribute) = self.attribute_type(&lower) {
            return Ok(attribute.oid().to_string());
        }
        if let Some(rule) = self.matching_rule(&lower) {
            return Ok(rule.oid().to_string());
        }
        if let Some(syntax) = self.syntax(&lower) {
            return Ok(syntax.oid().to_string());
        }

        Err(ResolutionError::UnknownOid(name.to_string()))
    }
}

///
/// SchemaBuilder
///
/// Collects definitions and validates them together in `build`.
///

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    options: SchemaOptions,
    attribute_types: Vec<AttributeType>,
    syntaxes: BTreeMap<String, Syntax>,
    rules: BTreeMap<String, MatchingRule>,
}

impl SchemaBuilder {
    pub fn options(&mut self, options: SchemaOptions) -> &mut Self {
        self.options = options;
        self
    }

    pub fn add_attribute_type(&mut self, attribute: AttributeType) -> &mut Self {
        self.attribute_types.push(attribute);
        self
    }

    /// Register an enumeration syntax and mint its ordering rule.
    pub fn add_enum_syntax<I, S>(
        &mut self,
        oid: impl Into<String>,
        description: impl Into<String>,
        values: I,
    ) -> Result<&mut Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let enumeration = EnumerationSyntax::new(oid, values)?;
        self.ensure_new_syntax(enumeration.oid())?;

        let rule = MatchingRule::enum_ordering(&enumeration);
        self.rules.insert(rule.oid().to_string(), rule);
        self.insert_syntax(Syntax::enumeration(enumeration, description));

        Ok(self)
    }

    /// Register a syntax whose values must match a regular expression.
    pub fn add_pattern_syntax(
        &mut self,
        oid: impl Into<String>,
        description: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Result<&mut Self, SchemaError> {
        let pattern = PatternSyntax::new(oid, pattern)?;
        self.ensure_new_syntax(pattern.oid())?;
        self.insert_syntax(Syntax::pattern(pattern, description));

        Ok(self)
    }

    fn ensure_new_syntax(&self, oid: &str) -> Result<(), SchemaError> {
        if self.syntaxes.contains_key(oid) || core_registry().syntax(oid).is_some() {
            return Err(SchemaError::DuplicateSyntax {
                oid: oid.to_string(),
            });
        }

        Ok(())
    }

    fn insert_syntax(&mut self, syntax: Syntax) {
        self.syntaxes.insert(syntax.oid().to_string(), syntax);
    }

    fn knows_rule(&self, name_or_oid: &str) -> bool {
        self.rules.contains_key(name_or_oid)
            || self
                .rules
                .values()
                .any(|rule| rule.name().eq_ignore_ascii_case(name_or_oid))
    }

    /// Validate cross-references and freeze the schema.
    pub fn build(&self) -> Result<Schema, SchemaError> {
        let core = core_registry();
        let mut attribute_lookup = HashMap::new();

        for (index, attribute) in self.attribute_types.iter().enumerate() {
            if attribute.oid().is_empty() {
                return Err(SchemaError::MissingOid);
            }

            let syntax_oid = attribute.syntax_oid();
            if !self.syntaxes.contains_key(syntax_oid) && core.syntax(syntax_oid).is_none() {
                return Err(SchemaError::UnknownSyntax(syntax_oid.to_string()));
            }

            for usage in [
                RuleUsage::Equality,
                RuleUsage::Ordering,
                RuleUsage::Substring,
                RuleUsage::Approximate,
            ] {
                if let Some(rule) = attribute.rule_oid(usage)
                    && !self.knows_rule(rule)
                    && core.matching_rule(rule).is_none()
                {
                    return Err(SchemaError::UnknownMatchingRule {
                        rule: rule.to_string(),
                        usage,
                    });
                }
            }

            for key in attribute.lookup_keys() {
                if attribute_lookup.insert(key.clone(), index).is_some() {
                    return Err(SchemaError::DuplicateAttributeType { name: key });
                }
            }
        }

        let rule_names = self
            .rules
            .values()
            .map(|rule| (rule.name().to_ascii_lowercase(), rule.oid().to_string()))
            .collect();

        info!(
            target: "dirschema::schema",
            attribute_types = self.attribute_types.len(),
            syntaxes = self.syntaxes.len(),
            rules = self.rules.len(),
            "schema built"
        );

        Ok(Schema {
            options: self.options.clone(),
            attribute_types: self.attribute_types.clone(),
            attribute_lookup,
            syntaxes: self.syntaxes.clone(),
            rules: self.rules.clone(),
            rule_names,
            core,
        })
    }
}
