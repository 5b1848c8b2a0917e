use crate::{
    error::DecodeError,
    normalize::{
        integer::parse_integer, ordered::ordered_i64_bytes, time::GeneralizedTime, utf8,
    },
    syntax::{EnumerationSyntax, check_uuid, parse_bit_string, parse_boolean},
};

pub(super) fn normalize_boolean(raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let literal: &[u8] = if parse_boolean(raw)? { b"TRUE" } else { b"FALSE" };

    Ok(literal.to_vec())
}

pub(super) fn normalize_integer(raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let value = parse_integer(utf8(raw)?.trim_matches(' '))?;

    Ok(ordered_i64_bytes(value).to_vec())
}

pub(super) fn normalize_generalized_time(raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let time = GeneralizedTime::parse(utf8(raw)?.trim_matches(' '))?;

    Ok(time.to_ordered_bytes()?.to_vec())
}

pub(super) fn normalize_uuid(raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
    check_uuid(raw).map_err(|violation| DecodeError::invalid_value(violation.message))?;

    Ok(raw.to_ascii_lowercase())
}

/// Upper-case the value, then require `'<bits>'B`.
pub(super) fn normalize_bit_string(raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let upper = utf8(raw)?.trim_matches(' ').to_ascii_uppercase();
    parse_bit_string(&upper)?;

    Ok(upper.into_bytes())
}

/// Declaration position as a sign-biased integer.
pub(super) fn normalize_enum(
    enumeration: &EnumerationSyntax,
    raw: &[u8],
) -> Result<Vec<u8>, DecodeError> {
    let value = utf8(raw)?;
    let position = enumeration.position(value).ok_or_else(|| {
        DecodeError::invalid_value(format!(
            "'{value}' is not a value of enumeration {}",
            enumeration.oid()
        ))
    })?;
    let position = i64::try_from(position)
        .map_err(|err| DecodeError::out_of_range("enumeration position").with_cause(err))?;

    Ok(ordered_i64_bytes(position).to_vec())
}
