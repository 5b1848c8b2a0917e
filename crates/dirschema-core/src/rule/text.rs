use crate::{
    error::DecodeError,
    normalize::{
        string::{
            CaseFolding, TrimMode, normalize_string, strip_spaces, strip_telephone_separators,
        },
        utf8,
    },
};
use rphonetic::{DoubleMetaphone, Encoder};

///
/// TextProfile
///
/// Normalization family shared by the equality, ordering and substring
/// rules over one value space.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextProfile {
    CaseExact,
    CaseExactIa5,
    CaseIgnore,
    CaseIgnoreIa5,
    /// `$`-separated lines, each folded and trimmed on its own.
    CaseIgnoreList,
    NumericString,
    Octets,
    TelephoneNumber,
}

impl TextProfile {
    pub(crate) fn normalize(self, raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
        self.normalize_with(raw, TrimMode::Both)
    }

    pub(crate) fn normalize_initial(self, raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
        self.normalize_with(raw, TrimMode::Leading)
    }

    pub(crate) fn normalize_any(self, raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
        self.normalize_with(raw, TrimMode::None)
    }

    pub(crate) fn normalize_final(self, raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
        self.normalize_with(raw, TrimMode::Trailing)
    }

    fn normalize_with(self, raw: &[u8], trim: TrimMode) -> Result<Vec<u8>, DecodeError> {
        let folding = match self {
            Self::CaseExact | Self::CaseExactIa5 => CaseFolding::Preserve,
            Self::CaseIgnore | Self::CaseIgnoreIa5 => CaseFolding::Lower,
            Self::CaseIgnoreList => return Ok(normalize_list(utf8(raw)?, trim).into_bytes()),
            Self::NumericString => return Ok(strip_spaces(utf8(raw)?).into_bytes()),
            Self::Octets => return Ok(raw.to_vec()),
            Self::TelephoneNumber => {
                let folded = normalize_string(utf8(raw)?, CaseFolding::Lower, trim);
                return Ok(strip_telephone_separators(&folded).into_bytes());
            }
        };

        if matches!(self, Self::CaseExactIa5 | Self::CaseIgnoreIa5)
            && let Some(position) = raw.iter().position(|b| !b.is_ascii())
        {
            return Err(DecodeError::at_position(
                "IA5 value contains a non-ASCII byte",
                position,
            ));
        }

        Ok(normalize_string(utf8(raw)?, folding, trim).into_bytes())
    }
}

/// Primary Double Metaphone key of the case-ignore form of `raw`. The key
/// covers the whole value; no letter emits more than two code characters.
pub(super) fn normalize_phonetic(raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let folded = normalize_string(utf8(raw)?, CaseFolding::Lower, TrimMode::Both);
    let encoder = DoubleMetaphone::new(folded.chars().count().saturating_mul(2).max(1));

    Ok(encoder.encode(&folded).into_bytes())
}

/// Lines keep the trim of the fragment edge they sit on; every line edge
/// that meets a `$` is trimmed.
fn normalize_list(value: &str, trim: TrimMode) -> String {
    let lines: Vec<&str> = value.split('$').collect();
    let last = lines.len() - 1;

    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let edges = TrimMode::from_edges(
                index > 0 || trim.trims_leading(),
                index < last || trim.trims_trailing(),
            );

            normalize_string(line, CaseFolding::Lower, edges)
        })
        .collect::<Vec<_>>()
        .join("$")
}
