//! Module: normalize
//! Responsibility: grammar readers and canonical byte transforms shared by
//! syntaxes and matching rules.
//! Does not own: rule dispatch or index identity.
//! Boundary: pure functions over borrowed input; no context mutation.

pub mod dn;
pub mod integer;
pub mod oid;
pub mod ordered;
pub mod reader;
pub mod string;
pub mod time;

use crate::error::DecodeError;
use derive_more::{Deref, From};

// re-exports
pub use reader::SubstringReader;

///
/// NormalizedValue
///
/// Canonical encoding of an attribute value under one matching rule.
/// Byte equality is rule equality; for ordering rules byte order is rule
/// order.
///

#[derive(Clone, Debug, Default, Deref, Eq, From, Hash, Ord, PartialEq, PartialOrd)]
pub struct NormalizedValue(Vec<u8>);

impl NormalizedValue {
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<String> for NormalizedValue {
    fn from(value: String) -> Self {
        Self(value.into_bytes())
    }
}

impl From<&str> for NormalizedValue {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl AsRef<[u8]> for NormalizedValue {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Interpret a raw attribute value as UTF-8.
pub fn utf8(raw: &[u8]) -> Result<&str, DecodeError> {
    std::str::from_utf8(raw).map_err(|err| {
        DecodeError::invalid_value(format!(
            "value is not valid UTF-8 (error at byte {})",
            err.valid_up_to()
        ))
        .with_cause(err)
    })
}
