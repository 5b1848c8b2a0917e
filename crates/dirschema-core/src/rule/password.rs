use crate::{
    error::DecodeError,
    normalize::utf8,
    syntax::{parse_auth_password, split_user_password},
};

/// Exactly three `$`-separated components, re-joined without the spaces
/// around the delimiters; no case folding.
pub(super) fn normalize_auth_password(raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let parsed = parse_auth_password(utf8(raw)?)?;

    Ok(format!("{}${}${}", parsed.scheme, parsed.info, parsed.value).into_bytes())
}

/// Lower-case only a well-formed `{scheme}` prefix; anything else is kept
/// byte for byte.
pub(super) fn normalize_user_password(raw: &[u8]) -> Vec<u8> {
    let scheme = std::str::from_utf8(raw)
        .ok()
        .and_then(|value| split_user_password(value).ok());

    match scheme {
        Some((Some(scheme), rest)) => {
            format!("{{{}}}{rest}", scheme.to_ascii_lowercase()).into_bytes()
        }
        _ => raw.to_vec(),
    }
}
