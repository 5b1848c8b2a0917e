use crate::{
    assertion::{Assertion, SubstringFragments},
    index::{IndexQueryFactory, length_key, substring_windows},
    normalize::{ordered::prefix_successor, string::keywords},
};
use std::{collections::BTreeSet, ops::Bound};

impl Assertion {
    /// Lower this assertion into an index query built by `factory`.
    pub fn create_index_query<F: IndexQueryFactory>(&self, factory: &F) -> F::Query {
        match self {
            Self::Equality { index_id, value } => {
                factory.create_exact_match_query(index_id, value.as_bytes())
            }
            Self::LessThan { index_id, value } => factory.create_range_match_query(
                index_id,
                Bound::Unbounded,
                Bound::Excluded(value.as_bytes()),
            ),
            Self::GreaterOrEqual { index_id, value } => factory.create_range_match_query(
                index_id,
                Bound::Included(value.as_bytes()),
                Bound::Unbounded,
            ),
            Self::LessOrEqual { index_id, value } => factory.create_range_match_query(
                index_id,
                Bound::Unbounded,
                Bound::Included(value.as_bytes()),
            ),
            Self::Substring {
                index_id,
                fragments,
            } => substring_query(factory, index_id, fragments),
            Self::Approximate { index_id, value } => {
                factory.create_exact_match_query(index_id, &length_key(value.len()))
            }
            Self::Keyword { index_id, value } => keyword_query(factory, index_id, value),
            Self::Undefined => factory.create_match_all_query(),
        }
    }
}

/// Intersect exact matches on the keyword's tokens; every value holding
/// the keyword was indexed under each of them.
fn keyword_query<F: IndexQueryFactory>(factory: &F, index_id: &str, keyword: &[u8]) -> F::Query {
    let Ok(keyword) = std::str::from_utf8(keyword) else {
        return factory.create_match_all_query();
    };

    let tokens: BTreeSet<&str> = keywords(keyword).collect();
    let mut queries: Vec<F::Query> = tokens
        .into_iter()
        .map(|token| factory.create_exact_match_query(index_id, token.as_bytes()))
        .collect();

    match queries.len() {
        0 => factory.create_match_all_query(),
        1 => queries.remove(0),
        _ => factory.create_intersection_query(queries),
    }
}

/// Intersect one sub-query per fragment window. Fragments at least one key
/// wide contribute exact matches on each of their windows; shorter ones
/// contribute a prefix range, or an exact match for a short final fragment
/// since tail keys are truncated.
fn substring_query<F: IndexQueryFactory>(
    factory: &F,
    index_id: &str,
    fragments: &SubstringFragments,
) -> F::Query {
    let key_size = factory.indexing_options().substring_key_size.max(1);
    let mut queries = Vec::new();

    if let Some(initial) = &fragments.initial {
        let prefix = &initial[..initial.len().min(key_size)];
        queries.push(prefix_query(factory, index_id, prefix));
    }

    for fragment in &fragments.any {
        fragment_queries(factory, index_id, fragment, key_size, false, &mut queries);
    }

    if let Some(final_) = &fragments.final_ {
        fragment_queries(factory, index_id, final_, key_size, true, &mut queries);
    }

    match queries.len() {
        0 => factory.create_match_all_query(),
        1 => queries.remove(0),
        _ => factory.create_intersection_query(queries),
    }
}

fn fragment_queries<F: IndexQueryFactory>(
    factory: &F,
    index_id: &str,
    fragment: &[u8],
    key_size: usize,
    is_final: bool,
    out: &mut Vec<F::Query>,
) {
    if fragment.is_empty() {
        return;
    }

    if fragment.len() >= key_size {
        let windows: BTreeSet<&[u8]> = substring_windows(fragment, key_size)
            .into_iter()
            .filter(|window| window.len() == key_size)
            .collect();
        for window in windows {
            out.push(factory.create_exact_match_query(index_id, window));
        }
    } else if is_final {
        out.push(factory.create_exact_match_query(index_id, fragment));
    } else {
        out.push(prefix_query(factory, index_id, fragment));
    }
}

fn prefix_query<F: IndexQueryFactory>(factory: &F, index_id: &str, prefix: &[u8]) -> F::Query {
    if prefix.is_empty() {
        return factory.create_match_all_query();
    }

    match prefix_successor(prefix) {
        Some(upper) => factory.create_range_match_query(
            index_id,
            Bound::Included(prefix),
            Bound::Excluded(upper.as_slice()),
        ),
        None => factory.create_range_match_query(index_id, Bound::Included(prefix), Bound::Unbounded),
    }
}
