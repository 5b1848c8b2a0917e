use crate::{
    error::SchemaError,
    syntax::{SyntaxViolation, text},
};
use regex::Regex;

///
/// PatternSyntax
///
/// Values must match the declared pattern in full.
///

#[derive(Clone, Debug)]
pub struct PatternSyntax {
    oid: String,
    pattern: String,
    regex: Regex,
}

impl PatternSyntax {
    pub fn new(oid: impl Into<String>, pattern: impl Into<String>) -> Result<Self, SchemaError> {
        let oid = oid.into();
        if oid.is_empty() {
            return Err(SchemaError::MissingOid);
        }

        let pattern = pattern.into();
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            SchemaError::InvalidPattern {
                oid: oid.clone(),
                source,
            }
        })?;

        Ok(Self {
            oid,
            pattern,
            regex,
        })
    }

    #[must_use]
    pub fn oid(&self) -> &str {
        &self.oid
    }

    /// The pattern as declared, without anchoring.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    pub(super) fn check(&self, value: &[u8]) -> Result<(), SyntaxViolation> {
        let value = text(value, &self.oid)?;

        if self.is_match(value) {
            Ok(())
        } else {
            Err(SyntaxViolation::new(format!(
                "'{value}' does not match the pattern '{}' of syntax {}",
                self.pattern, self.oid
            )))
        }
    }
}
