use unicode_normalization::UnicodeNormalization;

///
/// CaseFolding
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CaseFolding {
    Preserve,
    Lower,
}

///
/// TrimMode
///
/// Which edges of a value lose their whitespace. Substring fragments keep
/// the edges that join neighbouring fragments.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrimMode {
    Both,
    Leading,
    Trailing,
    None,
}

impl TrimMode {
    #[must_use]
    pub const fn from_edges(leading: bool, trailing: bool) -> Self {
        match (leading, trailing) {
            (true, true) => Self::Both,
            (true, false) => Self::Leading,
            (false, true) => Self::Trailing,
            (false, false) => Self::None,
        }
    }

    #[must_use]
    pub const fn trims_leading(self) -> bool {
        matches!(self, Self::Both | Self::Leading)
    }

    #[must_use]
    pub const fn trims_trailing(self) -> bool {
        matches!(self, Self::Both | Self::Trailing)
    }
}

/// Prepare a directory string for comparison.
///
/// Applies NFKC, optional lower-case folding, edge trimming per `trim`, and
/// collapses each interior whitespace run to one space. A non-empty value
/// made only of whitespace normalizes to a single space under
/// [`TrimMode::Both`].
#[must_use]
pub fn normalize_string(value: &str, folding: CaseFolding, trim: TrimMode) -> String {
    let composed: String = value.nfkc().collect();
    let folded = match folding {
        CaseFolding::Preserve => composed,
        CaseFolding::Lower => casefold(&composed),
    };

    let mut out = String::with_capacity(folded.len());
    let mut pending_space = false;
    for c in folded.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && (!out.is_empty() || !trim.trims_leading()) {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }
    // an all-whitespace fragment sits entirely on its trimmed edge
    if pending_space && !trim.trims_trailing() && !(out.is_empty() && trim.trims_leading()) {
        out.push(' ');
    }

    if out.is_empty() && trim == TrimMode::Both && !value.is_empty() {
        out.push(' ');
    }

    out
}

/// Lower-case fold with an ASCII fast path.
#[must_use]
pub fn casefold(input: &str) -> String {
    if input.is_ascii() {
        return input.to_ascii_lowercase();
    }

    input.to_lowercase()
}

/// Remove every space; used by numeric-string rules.
#[must_use]
pub fn strip_spaces(value: &str) -> String {
    value.chars().filter(|c| *c != ' ').collect()
}

/// Remove spaces and hyphens; used by telephone-number rules.
#[must_use]
pub fn strip_telephone_separators(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, ' ' | '-')).collect()
}

/// Keywords are delimited by whitespace and ASCII punctuation.
#[must_use]
pub fn is_keyword_separator(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}

/// The separator-free tokens of `value`, in order.
pub fn keywords(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(is_keyword_separator)
        .filter(|token| !token.is_empty())
}

/// Whether `keyword` occurs in `value` with a separator or an end of the
/// value on both sides. A keyword with no tokens never matches.
#[must_use]
pub fn contains_keyword(value: &str, keyword: &str) -> bool {
    if keywords(keyword).next().is_none() {
        return false;
    }

    value
        .char_indices()
        .filter(|(start, _)| value[*start..].starts_with(keyword))
        .any(|(start, _)| {
            let end = start + keyword.len();
            let bounded_before = value[..start]
                .chars()
                .next_back()
                .is_none_or(is_keyword_separator);
            let bounded_after = value[end..].chars().next().is_none_or(is_keyword_separator);

            bounded_before && bounded_after
        })
}
