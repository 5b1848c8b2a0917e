use crate::{error::DecodeError, normalize::SubstringReader};

/// Read a numeric OID or a descriptor from `reader`.
///
/// Descriptors start with a letter and continue with letters, digits and
/// hyphens. `allow_malformed` also permits `_` and a leading digit or hyphen.
pub fn read_oid<'a>(
    reader: &mut SubstringReader<'a>,
    allow_malformed: bool,
) -> Result<&'a str, DecodeError> {
    let start = reader.position();
    let token = reader.read_while(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));

    if token.is_empty() {
        return Err(DecodeError::at_position(
            "expected an OID or descriptor",
            start,
        ));
    }

    if token.starts_with(|c: char| c.is_ascii_digit()) && token.chars().all(is_numeric_oid_char) {
        check_numeric_oid(token, start)?;
        return Ok(token);
    }

    check_descriptor(token, start, allow_malformed)?;

    Ok(token)
}

/// Parse a complete value as an OID or descriptor.
pub fn parse_oid(value: &str, allow_malformed: bool) -> Result<&str, DecodeError> {
    let mut reader = SubstringReader::new(value);
    let oid = read_oid(&mut reader, allow_malformed)?;

    if !reader.is_empty() {
        return Err(DecodeError::at_position(
            "unexpected character after OID",
            reader.position(),
        ));
    }

    Ok(oid)
}

/// Whether `value` has the numeric OID shape (`1.2.3`).
#[must_use]
pub fn is_numeric_oid(value: &str) -> bool {
    !value.is_empty()
        && value
            .split('.')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

const fn is_numeric_oid_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn check_numeric_oid(token: &str, start: usize) -> Result<(), DecodeError> {
    let mut previous_dot = false;
    for (index, c) in token.chars().enumerate() {
        if c == '.' {
            if previous_dot {
                return Err(DecodeError::at_position(
                    "numeric OID contains consecutive periods",
                    start + index,
                ));
            }
            previous_dot = true;
        } else {
            previous_dot = false;
        }
    }
    if previous_dot {
        return Err(DecodeError::at_position(
            "numeric OID ends with a period",
            start + token.chars().count() - 1,
        ));
    }

    Ok(())
}

fn check_descriptor(token: &str, start: usize, allow_malformed: bool) -> Result<(), DecodeError> {
    for (index, c) in token.chars().enumerate() {
        let valid = match c {
            'a'..='z' | 'A'..='Z' => true,
            '0'..='9' | '-' => index > 0 || allow_malformed,
            '_' => allow_malformed,
            _ => false,
        };
        if !valid {
            return Err(DecodeError::at_position(
                format!("illegal character '{c}' in descriptor"),
                start + index,
            ));
        }
    }

    Ok(())
}
