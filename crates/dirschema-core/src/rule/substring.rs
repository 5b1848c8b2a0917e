use crate::error::DecodeError;

///
/// RawSubstrings
///
/// Unnormalized pieces of an `initial*any*final` assertion value.
///

#[derive(Debug, Default, Eq, PartialEq)]
pub(super) struct RawSubstrings {
    pub(super) initial: Option<Vec<u8>>,
    pub(super) any: Vec<Vec<u8>>,
    pub(super) final_: Option<Vec<u8>>,
}

/// Split on unescaped `*`; `\XX` hex escapes stand for one byte each.
pub(super) fn parse_substring_assertion(raw: &[u8]) -> Result<RawSubstrings, DecodeError> {
    let mut pieces: Vec<Vec<u8>> = vec![Vec::new()];
    let mut index = 0;

    while index < raw.len() {
        match raw[index] {
            b'*' => pieces.push(Vec::new()),
            b'\\' => {
                let byte = raw
                    .get(index + 1..index + 3)
                    .and_then(|pair| std::str::from_utf8(pair).ok())
                    .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                    .ok_or_else(|| {
                        DecodeError::at_position("invalid escape in substring assertion", index)
                    })?;
                if let Some(piece) = pieces.last_mut() {
                    piece.push(byte);
                }
                index += 2;
            }
            byte => {
                if let Some(piece) = pieces.last_mut() {
                    piece.push(byte);
                }
            }
        }
        index += 1;
    }

    if pieces.len() < 2 {
        return Err(DecodeError::grammar(
            "substring assertion contains no wildcard",
        ));
    }

    let final_ = pieces.pop().filter(|piece| !piece.is_empty());
    let mut pieces = pieces.into_iter();
    let initial = pieces.next().filter(|piece| !piece.is_empty());
    let any = pieces.filter(|piece| !piece.is_empty()).collect();

    Ok(RawSubstrings {
        initial,
        any,
        final_,
    })
}
