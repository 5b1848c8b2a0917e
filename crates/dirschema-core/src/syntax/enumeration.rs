use crate::{
    error::SchemaError,
    normalize::string::casefold,
    syntax::{SyntaxViolation, text},
};
use dirschema_primitives::{ENUM_ORDERING_RULE_NAME_PREFIX, ENUM_ORDERING_RULE_OID_BASE};
use std::collections::BTreeSet;

///
/// EnumerationSyntax
///
/// Ordered literal list declared by a schema. Membership and position are
/// judged after trimming and case folding.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumerationSyntax {
    oid: String,
    values: Vec<String>,
    keys: Vec<String>,
}

impl EnumerationSyntax {
    pub fn new<I, S>(oid: impl Into<String>, values: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let oid = oid.into();
        if oid.is_empty() {
            return Err(SchemaError::MissingOid);
        }

        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(SchemaError::EmptyEnumeration { oid });
        }

        let mut seen = BTreeSet::new();
        let mut keys = Vec::with_capacity(values.len());
        for value in &values {
            let key = enum_key(value);
            if !seen.insert(key.clone()) {
                return Err(SchemaError::DuplicateEnumValue {
                    oid,
                    value: value.clone(),
                });
            }
            keys.push(key);
        }

        Ok(Self { oid, values, keys })
    }

    #[must_use]
    pub fn oid(&self) -> &str {
        &self.oid
    }

    /// Declared literals in declaration order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Zero-based declaration position of `value`.
    #[must_use]
    pub fn position(&self, value: &str) -> Option<usize> {
        let key = enum_key(value);

        self.keys.iter().position(|candidate| *candidate == key)
    }

    #[must_use]
    pub fn ordering_rule_oid(&self) -> String {
        format!("{ENUM_ORDERING_RULE_OID_BASE}.{}", self.oid)
    }

    #[must_use]
    pub fn ordering_rule_name(&self) -> String {
        format!("{ENUM_ORDERING_RULE_NAME_PREFIX}{}", self.oid)
    }

    pub(super) fn check(&self, value: &[u8]) -> Result<(), SyntaxViolation> {
        let value = text(value, &self.oid)?;

        if self.position(value).is_some() {
            Ok(())
        } else {
            Err(SyntaxViolation::new(format!(
                "'{value}' is not one of the values allowed by enumeration syntax {}",
                self.oid
            )))
        }
    }
}

fn enum_key(value: &str) -> String {
    casefold(value.trim())
}
