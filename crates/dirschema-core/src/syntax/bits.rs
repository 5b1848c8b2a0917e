use crate::{error::DecodeError, syntax::SyntaxViolation};

/// Parse `'<bits>'B` and return the bits. The trailing `B` must already be
/// upper case.
pub(crate) fn parse_bit_string(value: &str) -> Result<&str, DecodeError> {
    if value.len() < 3 {
        return Err(DecodeError::grammar(format!(
            "bit string '{value}' is too short"
        )));
    }
    if !value.starts_with('\'') || !value.ends_with("'B") {
        return Err(DecodeError::grammar(format!(
            "bit string '{value}' is not of the form '<bits>'B"
        )));
    }

    let bits = &value[1..value.len() - 2];
    if let Some(index) = bits.chars().position(|c| c != '0' && c != '1') {
        return Err(DecodeError::at_position("illegal bit", index + 1));
    }

    Ok(bits)
}

pub(super) fn check_bit_string(value: &[u8]) -> Result<(), SyntaxViolation> {
    let value = std::str::from_utf8(value)
        .map_err(|_| SyntaxViolation::new("bit string value is not valid UTF-8"))?;

    parse_bit_string(value)
        .map(|_| ())
        .map_err(SyntaxViolation::from)
}
