use crate::{
    normalize::time::GeneralizedTime,
    syntax::{SyntaxViolation, text},
};

/// Accepts only instants the generalized-time rules can encode.
pub(super) fn check_generalized_time(value: &[u8]) -> Result<(), SyntaxViolation> {
    let value = text(value, "GeneralizedTime")?;

    GeneralizedTime::parse(value)
        .and_then(GeneralizedTime::to_ordered_bytes)
        .map(|_| ())
        .map_err(|err| SyntaxViolation::new(format!("invalid generalized time '{value}': {err}")))
}
