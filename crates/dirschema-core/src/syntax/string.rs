use crate::{
    context::SchemaOptions,
    syntax::{SyntaxViolation, text},
};

const PRINTABLE_PUNCTUATION: &[u8] = b" '()+,-./:=?";

fn is_printable(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || PRINTABLE_PUNCTUATION.contains(&byte)
}

pub(super) fn check_directory_string(
    value: &[u8],
    options: &SchemaOptions,
) -> Result<(), SyntaxViolation> {
    text(value, "DirectoryString")?;

    if value.is_empty() && !options.allow_zero_length_values_directory_string {
        return Err(SyntaxViolation::new(
            "zero-length values are not allowed for DirectoryString",
        ));
    }

    Ok(())
}

pub(super) fn check_ia5_string(
    value: &[u8],
    options: &SchemaOptions,
) -> Result<(), SyntaxViolation> {
    if value.is_empty() && !options.allow_zero_length_values_directory_string {
        return Err(SyntaxViolation::new(
            "zero-length values are not allowed for IA5String",
        ));
    }

    match value.iter().position(|b| !b.is_ascii()) {
        None => Ok(()),
        Some(position) => Err(SyntaxViolation::new(format!(
            "IA5String value contains a non-ASCII byte at position {position}"
        ))),
    }
}

pub(super) fn check_printable_string(value: &[u8]) -> Result<(), SyntaxViolation> {
    if value.is_empty() {
        return Err(SyntaxViolation::new("printable string value is empty"));
    }

    check_printable_bytes(value)
}

pub(super) fn check_country_string(value: &[u8]) -> Result<(), SyntaxViolation> {
    let value_text = text(value, "CountryString")?;
    if value.len() != 2 {
        return Err(SyntaxViolation::new(format!(
            "country string '{value_text}' must be exactly two characters"
        )));
    }

    check_printable_bytes(value)
}

/// Lines are separated by `$`; the syntax itself only demands text.
pub(super) fn check_postal_address(
    value: &[u8],
    options: &SchemaOptions,
) -> Result<(), SyntaxViolation> {
    text(value, "PostalAddress")?;

    if value.is_empty() && !options.allow_zero_length_values_directory_string {
        return Err(SyntaxViolation::new(
            "zero-length values are not allowed for PostalAddress",
        ));
    }

    Ok(())
}

pub(super) fn check_telephone_number(value: &[u8]) -> Result<(), SyntaxViolation> {
    if value.is_empty() {
        return Err(SyntaxViolation::new("telephone number value is empty"));
    }

    check_printable_bytes(value)?;

    if !value.iter().any(u8::is_ascii_digit) {
        return Err(SyntaxViolation::new(format!(
            "telephone number '{}' contains no digits",
            String::from_utf8_lossy(value)
        )));
    }

    Ok(())
}

fn check_printable_bytes(value: &[u8]) -> Result<(), SyntaxViolation> {
    match value.iter().position(|b| !is_printable(*b)) {
        None => Ok(()),
        Some(position) => Err(SyntaxViolation::new(format!(
            "'{}' contains a non-printable character at position {position}",
            String::from_utf8_lossy(value)
        ))),
    }
}
