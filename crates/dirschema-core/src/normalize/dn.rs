//! Module: normalize::dn
//! Responsibility: distinguished-name grammar reader and canonical form.
//! Does not own: attribute type lookup (delegated to the context).
//! Boundary: string representation in, canonical string out.

use crate::{
    context::SchemaContext,
    error::DecodeError,
    normalize::{
        SubstringReader,
        oid::read_oid,
        string::{CaseFolding, TrimMode, normalize_string},
    },
};
use std::fmt::Write as _;

const ESCAPED_SPECIALS: &[char] = &[',', '+', '"', '\\', '<', '>', ';', '='];

///
/// Dn
///
/// A parsed distinguished name, leftmost RDN first.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Dn {
    rdns: Vec<Rdn>,
}

///
/// Rdn
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rdn {
    avas: Vec<Ava>,
}

///
/// Ava
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ava {
    attribute_type: String,
    value: AvaValue,
}

///
/// AvaValue
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AvaValue {
    /// `#` followed by the lower-cased hex of a BER encoding.
    Hex(String),
    Text(String),
}

impl Dn {
    /// Parse the string representation of a DN.
    pub fn parse(value: &str, allow_malformed: bool) -> Result<Self, DecodeError> {
        let mut reader = SubstringReader::new(value);
        reader.skip_whitespace();
        if reader.is_empty() {
            return Ok(Self::default());
        }

        let mut rdns = Vec::new();
        loop {
            rdns.push(read_rdn(&mut reader, allow_malformed)?);
            reader.skip_whitespace();

            let position = reader.position();
            match reader.read() {
                None => break,
                Some(',' | ';') => {}
                Some(c) => {
                    return Err(DecodeError::at_position(
                        format!("unexpected character '{c}' in DN"),
                        position,
                    ));
                }
            }
        }

        Ok(Self { rdns })
    }

    /// Canonical form: RDNs in order joined by `,`, AVAs sorted and joined
    /// by `+`, types resolved through `ctx`, values case-ignore normalized
    /// and re-escaped.
    pub fn normalize(&self, ctx: &dyn SchemaContext) -> Result<String, DecodeError> {
        let mut rdns = Vec::with_capacity(self.rdns.len());
        for rdn in &self.rdns {
            let mut avas = Vec::with_capacity(rdn.avas.len());
            for ava in &rdn.avas {
                avas.push(ava.normalize(ctx)?);
            }
            avas.sort();
            rdns.push(avas.join("+"));
        }

        Ok(rdns.join(","))
    }
}

impl Ava {
    fn normalize(&self, ctx: &dyn SchemaContext) -> Result<String, DecodeError> {
        let attribute_type = ctx.resolve_attribute_type(&self.attribute_type)?;
        let value = match &self.value {
            AvaValue::Hex(hex) => format!("#{hex}"),
            AvaValue::Text(text) => escape_value(&normalize_string(
                text,
                CaseFolding::Lower,
                TrimMode::Both,
            )),
        };

        Ok(format!("{attribute_type}={value}"))
    }
}

fn read_rdn(reader: &mut SubstringReader<'_>, allow_malformed: bool) -> Result<Rdn, DecodeError> {
    let mut avas = vec![read_ava(reader, allow_malformed)?];
    while reader.eat('+') {
        avas.push(read_ava(reader, allow_malformed)?);
    }

    Ok(Rdn { avas })
}

fn read_ava(reader: &mut SubstringReader<'_>, allow_malformed: bool) -> Result<Ava, DecodeError> {
    reader.skip_whitespace();
    let attribute_type = read_oid(reader, allow_malformed)?.to_string();
    reader.skip_whitespace();

    if !reader.eat('=') {
        return Err(DecodeError::at_position(
            format!("attribute type '{attribute_type}' is not followed by '='"),
            reader.position(),
        ));
    }
    reader.skip_whitespace();

    let value = match reader.peek() {
        Some('#') => read_hex_value(reader)?,
        Some('"') => read_quoted_value(reader)?,
        _ => read_string_value(reader)?,
    };

    Ok(Ava {
        attribute_type,
        value,
    })
}

fn read_hex_value(reader: &mut SubstringReader<'_>) -> Result<AvaValue, DecodeError> {
    reader.read();
    let start = reader.position();
    let hex = reader.read_while(|c| c.is_ascii_hexdigit());

    if hex.is_empty() || hex.len() % 2 != 0 {
        return Err(DecodeError::at_position(
            "hex attribute value must contain an even, non-zero number of digits",
            start,
        ));
    }
    reader.skip_whitespace();

    Ok(AvaValue::Hex(hex.to_ascii_lowercase()))
}

fn read_quoted_value(reader: &mut SubstringReader<'_>) -> Result<AvaValue, DecodeError> {
    let open = reader.position();
    reader.read();

    let mut bytes = Vec::new();
    loop {
        match reader.read() {
            None => {
                return Err(DecodeError::at_position(
                    "quoted attribute value is not terminated",
                    open,
                ));
            }
            Some('"') => break,
            Some('\\') => read_escape(reader, &mut bytes)?,
            Some(c) => push_char(&mut bytes, c),
        }
    }
    reader.skip_whitespace();

    into_text(bytes, open)
}

fn read_string_value(reader: &mut SubstringReader<'_>) -> Result<AvaValue, DecodeError> {
    let start = reader.position();
    let mut bytes = Vec::new();
    let mut trailing_spaces = 0usize;

    while let Some(c) = reader.peek() {
        if matches!(c, ',' | ';' | '+') {
            break;
        }
        reader.read();

        if c == '\\' {
            read_escape(reader, &mut bytes)?;
            trailing_spaces = 0;
        } else {
            push_char(&mut bytes, c);
            trailing_spaces = if c == ' ' { trailing_spaces + 1 } else { 0 };
        }
    }
    bytes.truncate(bytes.len() - trailing_spaces);

    into_text(bytes, start)
}

fn read_escape(reader: &mut SubstringReader<'_>, bytes: &mut Vec<u8>) -> Result<(), DecodeError> {
    let position = reader.position();
    let Some(first) = reader.read() else {
        return Err(DecodeError::at_position(
            "attribute value ends with an escape character",
            position,
        ));
    };

    if ESCAPED_SPECIALS.contains(&first) || matches!(first, ' ' | '#') {
        push_char(bytes, first);
        return Ok(());
    }

    let second = reader.read();
    match (first.to_digit(16), second.and_then(|c| c.to_digit(16))) {
        (Some(high), Some(low)) => {
            // both digits are < 16
            bytes.push(u8::try_from(high * 16 + low).unwrap_or_default());
            Ok(())
        }
        _ => Err(DecodeError::at_position(
            "invalid escape sequence in attribute value",
            position,
        )),
    }
}

fn push_char(bytes: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

fn into_text(bytes: Vec<u8>, position: usize) -> Result<AvaValue, DecodeError> {
    String::from_utf8(bytes).map(AvaValue::Text).map_err(|err| {
        DecodeError::at_position("escaped attribute value is not valid UTF-8", position)
            .with_cause(err)
    })
}

/// Escape a normalized value for its canonical string form.
#[must_use]
pub fn escape_value(value: &str) -> String {
    let last = value.chars().count().saturating_sub(1);
    let mut out = String::with_capacity(value.len());

    for (index, c) in value.chars().enumerate() {
        let edge = (index == 0 && matches!(c, ' ' | '#')) || (index == last && c == ' ');
        if edge || ESCAPED_SPECIALS.contains(&c) {
            out.push('\\');
            out.push(c);
        } else if c.is_control() {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).as_bytes() {
                let _ = write!(out, "\\{byte:02x}");
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Split a trailing `#'<bits>'B` unique identifier from a
/// NameAndOptionalUID value. The `#` must not be escaped.
#[must_use]
pub fn split_optional_uid(value: &str) -> (&str, Option<&str>) {
    let Some(index) = value.rfind('#') else {
        return (value, None);
    };
    if value[..index].ends_with('\\') {
        return (value, None);
    }

    let suffix = &value[index + 1..];
    let is_bits = suffix.len() >= 3
        && suffix.starts_with('\'')
        && suffix.ends_with(['B', 'b'])
        && suffix[..suffix.len() - 1].ends_with('\'')
        && suffix[1..suffix.len() - 2].chars().all(|c| c == '0' || c == '1');

    if is_bits {
        (&value[..index], Some(&value[index..]))
    } else {
        (value, None)
    }
}
