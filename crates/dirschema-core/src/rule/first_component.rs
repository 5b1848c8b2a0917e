use crate::{
    context::SchemaContext,
    error::DecodeError,
    normalize::{
        SubstringReader,
        integer::parse_integer,
        oid::{parse_oid, read_oid},
        ordered::ordered_i64_bytes,
        string::{CaseFolding, TrimMode, normalize_string},
        utf8,
    },
    rule::identifier::canonical_oid,
};

///
/// FirstComponentKind
///
/// Which grammar the first component of a `( token ... )` value follows.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FirstComponentKind {
    DirectoryString,
    Integer,
    ObjectIdentifier,
}

impl FirstComponentKind {
    /// Stored side: `WSP* "(" WSP* token ...`; only the token is normalized.
    pub(crate) fn normalize_value(
        self,
        ctx: &dyn SchemaContext,
        raw: &[u8],
    ) -> Result<Vec<u8>, DecodeError> {
        let mut reader = SubstringReader::new(utf8(raw)?);
        reader.skip_whitespace();

        if reader.is_empty() {
            return Err(DecodeError::at_position(
                "first-component value is empty",
                reader.position(),
            ));
        }
        if !reader.eat('(') {
            return Err(DecodeError::at_position(
                "first-component value does not start with '('",
                reader.position(),
            ));
        }
        reader.skip_whitespace();

        match self {
            Self::ObjectIdentifier => {
                let oid = read_oid(&mut reader, ctx.options().allow_malformed_names_and_options)?;

                Ok(canonical_oid(ctx, oid).into_bytes())
            }
            Self::Integer => {
                let start = reader.position();
                let token = reader.read_while(|c| c == '-' || c.is_ascii_digit());
                let value = parse_integer(token).map_err(|err| {
                    DecodeError::grammar(format!(
                        "invalid first component at position {start}: {}",
                        err.message
                    ))
                    .with_cause(err)
                })?;

                Ok(ordered_i64_bytes(value).to_vec())
            }
            Self::DirectoryString => {
                let token = read_directory_string_token(&mut reader)?;

                Ok(fold(token))
            }
        }
    }

    /// Assertion side: the bare component value.
    pub(crate) fn normalize_component(
        self,
        ctx: &dyn SchemaContext,
        raw: &[u8],
    ) -> Result<Vec<u8>, DecodeError> {
        let value = utf8(raw)?.trim_matches(' ');

        match self {
            Self::ObjectIdentifier => {
                let oid = parse_oid(value, ctx.options().allow_malformed_names_and_options)?;

                Ok(canonical_oid(ctx, oid).into_bytes())
            }
            Self::Integer => Ok(ordered_i64_bytes(parse_integer(value)?).to_vec()),
            Self::DirectoryString => Ok(fold(value)),
        }
    }
}

/// A quoted `'...'` string or a bare word ending at space or `)`.
fn read_directory_string_token<'a>(
    reader: &mut SubstringReader<'a>,
) -> Result<&'a str, DecodeError> {
    let start = reader.position();

    if reader.eat('\'') {
        let token = reader.read_while(|c| c != '\'');
        if !reader.eat('\'') {
            return Err(DecodeError::at_position(
                "quoted first component is not terminated",
                start,
            ));
        }
        return Ok(token);
    }

    let token = reader.read_while(|c| c != ' ' && c != ')');
    if token.is_empty() {
        return Err(DecodeError::at_position(
            "first component is missing",
            start,
        ));
    }

    Ok(token)
}

fn fold(value: &str) -> Vec<u8> {
    normalize_string(value, CaseFolding::Lower, TrimMode::Both).into_bytes()
}
