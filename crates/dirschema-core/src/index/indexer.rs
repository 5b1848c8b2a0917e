use crate::{
    context::SchemaContext,
    error::DecodeError,
    index::{IndexKey, length_key, substring_windows},
    normalize::{string::keywords, utf8},
    obs::sink::{self, MetricsEvent},
    rule::MatchingRule,
};
use std::{collections::BTreeSet, fmt::Write as _};

///
/// IndexerKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexerKind {
    /// One key: the normalized value.
    Value,
    /// One key per `key_size` window of the normalized value.
    Substring { key_size: usize },
    /// One key: the big-endian length of the normalized value.
    Length,
    /// One key per keyword token of the normalized value.
    Tokens,
}

///
/// Indexer
///
/// Derives keys for one index id from raw attribute values.
///

#[derive(Clone, Copy, Debug)]
pub struct Indexer<'r> {
    rule: &'r MatchingRule,
    kind: IndexerKind,
}

impl<'r> Indexer<'r> {
    pub(crate) const fn new(rule: &'r MatchingRule, kind: IndexerKind) -> Self {
        Self { rule, kind }
    }

    #[must_use]
    pub fn index_id(&self) -> &'r str {
        self.rule.index_id()
    }

    #[must_use]
    pub const fn kind(&self) -> IndexerKind {
        self.kind
    }

    #[must_use]
    pub const fn rule(&self) -> &'r MatchingRule {
        self.rule
    }

    /// Normalize `raw` and add its keys to `out`. Keys already present are
    /// not duplicated.
    pub fn create_keys(
        &self,
        ctx: &dyn SchemaContext,
        raw: &[u8],
        out: &mut BTreeSet<IndexKey>,
    ) -> Result<(), DecodeError> {
        let normalized = self.rule.normalize(ctx, raw)?;
        let index_id = self.index_id();
        let before = out.len();

        match self.kind {
            IndexerKind::Value => {
                out.insert(IndexKey::new(index_id, normalized.into_bytes()));
            }
            IndexerKind::Substring { key_size } => {
                for window in substring_windows(&normalized, key_size) {
                    out.insert(IndexKey::new(index_id, window));
                }
            }
            IndexerKind::Length => {
                out.insert(IndexKey::new(index_id, length_key(normalized.len())));
            }
            IndexerKind::Tokens => {
                for token in keywords(utf8(&normalized)?) {
                    out.insert(IndexKey::new(index_id, token.as_bytes().to_vec()));
                }
            }
        }

        let emitted = out.len() - before;
        sink::record(MetricsEvent::KeysEmitted {
            index_id,
            count: u64::try_from(emitted).unwrap_or(u64::MAX),
        });

        Ok(())
    }

    /// Render a key for logs and diagnostics: text for human-readable
    /// encodings, lower-case hex otherwise.
    #[must_use]
    pub fn key_to_human_readable_string(&self, key: &[u8]) -> String {
        if self.kind != IndexerKind::Length
            && self.rule.has_textual_keys()
            && let Ok(text) = std::str::from_utf8(key)
        {
            return text.to_string();
        }

        let mut out = String::with_capacity(key.len() * 2);
        for byte in key {
            let _ = write!(out, "{byte:02x}");
        }

        out
    }
}
