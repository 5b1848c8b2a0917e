use crate::{
    error::DecodeError,
    syntax::{SyntaxViolation, text},
};

///
/// AuthPassword
///
/// The three components of an RFC 3112 `scheme $ authInfo $ authValue`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct AuthPassword<'a> {
    pub(crate) scheme: &'a str,
    pub(crate) info: &'a str,
    pub(crate) value: &'a str,
}

const fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

const fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}

/// Parse an authPassword value; spaces around the delimiters are ignored.
pub(crate) fn parse_auth_password(value: &str) -> Result<AuthPassword<'_>, DecodeError> {
    let mut parts = value.split('$');
    let (Some(scheme), Some(info), Some(auth_value), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(DecodeError::invalid_value(format!(
            "authPassword '{value}' must have exactly three '$'-separated components"
        )));
    };

    let scheme = component(scheme, "scheme", is_scheme_char)?;
    let info = component(info, "authInfo", is_base64_char)?;
    let auth_value = component(auth_value, "authValue", is_base64_char)?;

    Ok(AuthPassword {
        scheme,
        info,
        value: auth_value,
    })
}

fn component<'a>(
    raw: &'a str,
    label: &str,
    allowed: impl Fn(char) -> bool,
) -> Result<&'a str, DecodeError> {
    let trimmed = raw.trim_matches(' ');
    if trimmed.is_empty() {
        return Err(DecodeError::invalid_value(format!(
            "authPassword {label} is empty"
        )));
    }
    if let Some(c) = trimmed.chars().find(|c| !allowed(*c)) {
        return Err(DecodeError::invalid_value(format!(
            "authPassword {label} contains the illegal character '{c}'"
        )));
    }

    Ok(trimmed)
}

/// Split `{scheme}rest` into its scheme and remainder. Values without a
/// leading `{` have no scheme.
pub(crate) fn split_user_password(value: &str) -> Result<(Option<&str>, &str), DecodeError> {
    let Some(rest) = value.strip_prefix('{') else {
        return Ok((None, value));
    };
    let Some(close) = rest.find('}') else {
        return Err(DecodeError::grammar(format!(
            "userPassword '{value}' opens a scheme without closing it"
        )));
    };
    if close == 0 {
        return Err(DecodeError::grammar("userPassword scheme is empty"));
    }

    Ok((Some(&rest[..close]), &rest[close + 1..]))
}

pub(super) fn check_auth_password(value: &[u8]) -> Result<(), SyntaxViolation> {
    let value = text(value, "AuthenticationPasswordSyntax")?;

    parse_auth_password(value)
        .map(|_| ())
        .map_err(SyntaxViolation::from)
}

pub(super) fn check_user_password(value: &[u8]) -> Result<(), SyntaxViolation> {
    if value.is_empty() {
        return Err(SyntaxViolation::new("userPassword value is empty"));
    }
    let value = text(value, "ds-syntax-user-password")?;

    split_user_password(value)
        .map(|_| ())
        .map_err(SyntaxViolation::from)
}
