use crate::error::DecodeError;

/// Parse an INTEGER value: optional `-`, at least one digit, no leading
/// zeros, and no negative zero.
pub fn parse_integer(value: &str) -> Result<i64, DecodeError> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let negative = digits.len() != value.len();

    if digits.is_empty() {
        return Err(DecodeError::grammar(if negative {
            "integer contains no digits after the minus sign"
        } else {
            "integer value is empty"
        }));
    }

    let offset = usize::from(negative);
    if let Some(index) = digits.chars().position(|c| !c.is_ascii_digit()) {
        return Err(DecodeError::at_position(
            "integer contains an illegal character",
            index + offset,
        ));
    }

    if digits.len() > 1 && digits.starts_with('0') {
        return Err(DecodeError::at_position(
            "integer contains a leading zero",
            offset,
        ));
    }
    if negative && digits == "0" {
        return Err(DecodeError::grammar("integer value '-0' is not allowed"));
    }

    value.parse::<i64>().map_err(|err| {
        DecodeError::out_of_range(format!("integer '{value}' is out of range")).with_cause(err)
    })
}
