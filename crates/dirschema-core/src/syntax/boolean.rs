use crate::{error::DecodeError, syntax::SyntaxViolation};

const TRUE_LITERALS: [&str; 4] = ["TRUE", "YES", "ON", "1"];
const FALSE_LITERALS: [&str; 4] = ["FALSE", "NO", "OFF", "0"];

/// Decode a boolean literal, case-insensitively.
pub(crate) fn parse_boolean(value: &[u8]) -> Result<bool, DecodeError> {
    let matches = |literal: &&str| literal.as_bytes().eq_ignore_ascii_case(value);

    if TRUE_LITERALS.iter().any(matches) {
        Ok(true)
    } else if FALSE_LITERALS.iter().any(matches) {
        Ok(false)
    } else {
        Err(DecodeError::invalid_value(format!(
            "'{}' is not a valid boolean value",
            String::from_utf8_lossy(value)
        )))
    }
}

pub(super) fn check_boolean(value: &[u8]) -> Result<(), SyntaxViolation> {
    parse_boolean(value).map(|_| ()).map_err(SyntaxViolation::from)
}
