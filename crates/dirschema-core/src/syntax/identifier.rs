use crate::{
    context::SchemaOptions,
    normalize::oid::parse_oid,
    syntax::{SyntaxViolation, text},
};

const UUID_LENGTH: usize = 36;
const UUID_DASHES: [usize; 4] = [8, 13, 18, 23];

pub(super) fn check_oid(value: &[u8], options: &SchemaOptions) -> Result<(), SyntaxViolation> {
    let value = text(value, "OID")?;

    parse_oid(value, options.allow_malformed_names_and_options)
        .map(|_| ())
        .map_err(SyntaxViolation::from)
}

/// `8-4-4-4-12` hex digits; case is not significant.
pub(crate) fn check_uuid(value: &[u8]) -> Result<(), SyntaxViolation> {
    if value.len() != UUID_LENGTH {
        return Err(SyntaxViolation::new(format!(
            "UUID '{}' must be exactly {UUID_LENGTH} characters long",
            String::from_utf8_lossy(value)
        )));
    }

    for (position, byte) in value.iter().enumerate() {
        let valid = if UUID_DASHES.contains(&position) {
            *byte == b'-'
        } else {
            byte.is_ascii_hexdigit()
        };
        if !valid {
            return Err(SyntaxViolation::new(format!(
                "UUID '{}' has an illegal character at position {position}",
                String::from_utf8_lossy(value)
            )));
        }
    }

    Ok(())
}
