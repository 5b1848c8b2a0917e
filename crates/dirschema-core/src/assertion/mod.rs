//! Module: assertion
//! Responsibility: prepared query-side values and their ternary evaluation.
//! Does not own: normalization (rules build assertions) or index storage.
//! Boundary: evaluates against normalized values, or lowers itself into
//! a caller-supplied `IndexQueryFactory`.

mod query;

#[cfg(test)]
mod tests;

use crate::normalize::{NormalizedValue, string::contains_keyword};

///
/// ConditionResult
///
/// Three-valued filter outcome.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConditionResult {
    True,
    False,
    Undefined,
}

impl ConditionResult {
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }

    /// Three-valued negation; `Undefined` stays `Undefined`.
    #[must_use]
    pub const fn not(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Undefined => Self::Undefined,
        }
    }

    /// Three-valued conjunction.
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::False, _) | (_, Self::False) => Self::False,
            (Self::True, Self::True) => Self::True,
            _ => Self::Undefined,
        }
    }

    /// Three-valued disjunction.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::True, _) | (_, Self::True) => Self::True,
            (Self::False, Self::False) => Self::False,
            _ => Self::Undefined,
        }
    }

    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }
}

///
/// SubstringFragments
///
/// Normalized pieces of a substring assertion, in assertion order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubstringFragments {
    pub initial: Option<Vec<u8>>,
    pub any: Vec<Vec<u8>>,
    pub final_: Option<Vec<u8>>,
}

impl SubstringFragments {
    /// Whether `value` starts with `initial`, then contains each `any` in
    /// order without overlap, then ends with `final_` after them.
    #[must_use]
    pub fn matches(&self, value: &[u8]) -> bool {
        let mut pos = 0usize;

        if let Some(initial) = &self.initial {
            if !value.starts_with(initial) {
                return false;
            }
            pos = initial.len();
        }

        for fragment in &self.any {
            match find(&value[pos..], fragment) {
                Some(offset) => pos += offset + fragment.len(),
                None => return false,
            }
        }

        if let Some(final_) = &self.final_ {
            return value.len() - pos >= final_.len() && value.ends_with(final_);
        }

        true
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.initial.is_none() && self.any.is_empty() && self.final_.is_none()
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

///
/// Assertion
///
/// Immutable query-side value prepared by a matching rule. Every
/// non-undefined variant carries the index id its keys live under.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Assertion {
    Equality {
        index_id: String,
        value: NormalizedValue,
    },
    LessThan {
        index_id: String,
        value: NormalizedValue,
    },
    GreaterOrEqual {
        index_id: String,
        value: NormalizedValue,
    },
    LessOrEqual {
        index_id: String,
        value: NormalizedValue,
    },
    Substring {
        index_id: String,
        fragments: SubstringFragments,
    },
    /// Approximately equal when normalized lengths agree.
    Approximate {
        index_id: String,
        value: NormalizedValue,
    },
    /// Holds when the keyword occurs in the value between separators.
    Keyword {
        index_id: String,
        value: NormalizedValue,
    },
    /// The rule cannot evaluate this kind of assertion.
    Undefined,
}

impl Assertion {
    /// Evaluate against a value normalized by the rule that built this
    /// assertion.
    #[must_use]
    pub fn matches(&self, normalized: &[u8]) -> ConditionResult {
        let outcome = match self {
            Self::Equality { value, .. } => normalized == value.as_bytes(),
            Self::LessThan { value, .. } => normalized < value.as_bytes(),
            Self::GreaterOrEqual { value, .. } => normalized >= value.as_bytes(),
            Self::LessOrEqual { value, .. } => normalized <= value.as_bytes(),
            Self::Substring { fragments, .. } => fragments.matches(normalized),
            Self::Approximate { value, .. } => normalized.len() == value.len(),
            Self::Keyword { value, .. } => {
                match (std::str::from_utf8(normalized), std::str::from_utf8(value)) {
                    (Ok(normalized), Ok(keyword)) => contains_keyword(normalized, keyword),
                    _ => return ConditionResult::Undefined,
                }
            }
            Self::Undefined => return ConditionResult::Undefined,
        };

        ConditionResult::from_bool(outcome)
    }

    #[must_use]
    pub fn index_id(&self) -> Option<&str> {
        match self {
            Self::Equality { index_id, .. }
            | Self::LessThan { index_id, .. }
            | Self::GreaterOrEqual { index_id, .. }
            | Self::LessOrEqual { index_id, .. }
            | Self::Substring { index_id, .. }
            | Self::Approximate { index_id, .. }
            | Self::Keyword { index_id, .. } => Some(index_id),
            Self::Undefined => None,
        }
    }

    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}
