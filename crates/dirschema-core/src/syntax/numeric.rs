use crate::{
    normalize::integer::parse_integer,
    syntax::{SyntaxViolation, text},
};

pub(super) fn check_numeric_string(value: &[u8]) -> Result<(), SyntaxViolation> {
    if value.is_empty() {
        return Err(SyntaxViolation::new("numeric string value is empty"));
    }

    match value.iter().position(|b| !b.is_ascii_digit() && *b != b' ') {
        None => Ok(()),
        Some(position) => Err(SyntaxViolation::new(format!(
            "numeric string '{}' contains an illegal character at position {position}",
            String::from_utf8_lossy(value)
        ))),
    }
}

pub(super) fn check_integer(value: &[u8]) -> Result<(), SyntaxViolation> {
    let value = text(value, "INTEGER")?;

    parse_integer(value).map(|_| ()).map_err(SyntaxViolation::from)
}
