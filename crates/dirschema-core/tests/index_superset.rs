//! Index queries built from assertions must select every stored value the
//! assertion itself matches.

use dirschema_core::{
    assertion::Assertion,
    context::{IndexingOptions, SchemaContext},
    index::{IndexKey, IndexQueryFactory},
    rule::MatchingRule,
    schema::Schema,
};
use dirschema_primitives::RuleKind;
use std::{
    collections::{BTreeMap, BTreeSet},
    ops::Bound,
};
use tracing_subscriber::EnvFilter;

const CORPUS: &[&str] = &[
    "Hello World",
    "hello   world",
    "World Hello",
    "Help",
    "Yellow",
    "helloworld",
    "Mellow Wordsmith",
    "x",
    "Ab",
    "abcdefghij",
    "ABCDEFGH",
    "the quick brown fox",
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

///
/// MemoryIndex
///
/// Keys per index id, each pointing at the ids of the entries holding it.
///

#[derive(Default)]
struct MemoryIndex {
    options: IndexingOptions,
    keys: BTreeMap<String, BTreeMap<Vec<u8>, BTreeSet<usize>>>,
    entries: BTreeSet<usize>,
}

impl MemoryIndex {
    fn build(ctx: &dyn SchemaContext, rule: &MatchingRule, options: IndexingOptions) -> Self {
        let mut index = Self {
            options,
            ..Self::default()
        };

        for (id, value) in CORPUS.iter().enumerate() {
            let mut keys = BTreeSet::new();
            for indexer in rule.create_indexers(&options) {
                // undecodable values only show up through match-all queries
                indexer.create_keys(ctx, value.as_bytes(), &mut keys).ok();
            }

            index.entries.insert(id);
            for key in keys {
                index
                    .keys
                    .entry(key.index_id().to_string())
                    .or_default()
                    .entry(key.into_bytes())
                    .or_default()
                    .insert(id);
            }
        }

        index
    }
}

impl IndexQueryFactory for MemoryIndex {
    type Query = BTreeSet<usize>;

    fn indexing_options(&self) -> IndexingOptions {
        self.options
    }

    fn create_exact_match_query(&self, index_id: &str, key: &[u8]) -> Self::Query {
        self.keys
            .get(index_id)
            .and_then(|keys| keys.get(key))
            .cloned()
            .unwrap_or_default()
    }

    fn create_range_match_query(
        &self,
        index_id: &str,
        lower: Bound<&[u8]>,
        upper: Bound<&[u8]>,
    ) -> Self::Query {
        self.keys
            .get(index_id)
            .map(|keys| {
                keys.range::<[u8], _>((lower, upper))
                    .flat_map(|(_, ids)| ids.iter().copied())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn create_intersection_query(&self, queries: Vec<Self::Query>) -> Self::Query {
        let mut queries = queries.into_iter();
        let first = queries.next().unwrap_or_default();

        queries.fold(first, |acc, next| acc.intersection(&next).copied().collect())
    }

    fn create_match_all_query(&self) -> Self::Query {
        self.entries.clone()
    }
}

fn assert_superset(
    ctx: &dyn SchemaContext,
    rule: &MatchingRule,
    index: &MemoryIndex,
    assertion: &Assertion,
) {
    let candidates = assertion.create_index_query(index);

    for (id, value) in CORPUS.iter().enumerate() {
        let Ok(normalized) = rule.normalize(ctx, value.as_bytes()) else {
            continue;
        };
        if assertion.matches(&normalized).is_true() {
            assert!(
                candidates.contains(&id),
                "{assertion:?} matches {value:?} but the index query missed it"
            );
        }
    }
}

#[test]
fn substring_queries_cover_every_match() {
    init_tracing();
    let schema = Schema::default();
    let rule = MatchingRule::builtin(RuleKind::CaseIgnoreSubstrings);

    for key_size in [1, 2, 3, 6] {
        let index = MemoryIndex::build(&schema, &rule, IndexingOptions::new(key_size));

        for pattern in [
            "*world", "hel*", "*llo*", "he*o*wor*", "*o w*", "h*d", "*", "abc*hij", "*x*",
            "the*fox", "*ELLOW*", "y*w",
        ] {
            let assertion = rule
                .assertion(&schema, pattern.as_bytes())
                .expect("substring assertion");
            assert_superset(&schema, &rule, &index, &assertion);
        }
    }
}

#[test]
fn substring_queries_are_selective() {
    let schema = Schema::default();
    let rule = MatchingRule::builtin(RuleKind::CaseIgnoreSubstrings);
    let index = MemoryIndex::build(&schema, &rule, IndexingOptions::new(3));

    let assertion = rule.assertion(&schema, b"*quick*").expect("assertion");
    let candidates = assertion.create_index_query(&index);

    assert_eq!(candidates, BTreeSet::from([CORPUS.len() - 1]));
}

#[test]
fn equality_ordering_and_approximate_queries_cover_every_match() {
    init_tracing();
    let schema = Schema::default();
    let options = IndexingOptions::default();

    let equality = MatchingRule::builtin(RuleKind::CaseIgnore);
    let index = MemoryIndex::build(&schema, &equality, options);
    let assertion = equality.assertion(&schema, b"HELLO WORLD").expect("assertion");
    assert_superset(&schema, &equality, &index, &assertion);
    assert_eq!(
        assertion.create_index_query(&index),
        BTreeSet::from([0, 1])
    );

    let ordering = MatchingRule::builtin(RuleKind::CaseIgnoreOrdering);
    let index = MemoryIndex::build(&schema, &ordering, options);
    for raw in ["m", "hello", "zzz", "a"] {
        for assertion in [
            ordering.assertion(&schema, raw.as_bytes()),
            ordering.greater_or_equal_assertion(&schema, raw.as_bytes()),
            ordering.less_or_equal_assertion(&schema, raw.as_bytes()),
        ] {
            assert_superset(&schema, &ordering, &index, &assertion.expect("assertion"));
        }
    }

    let approximate = MatchingRule::builtin(RuleKind::EqualLengthApproximate);
    let index = MemoryIndex::build(&schema, &approximate, options);
    let assertion = approximate.assertion(&schema, b"Hulp").expect("assertion");
    assert_superset(&schema, &approximate, &index, &assertion);
}

#[test]
fn keyword_and_phonetic_queries_cover_every_match() {
    init_tracing();
    let schema = Schema::default();
    let options = IndexingOptions::default();

    let keyword = MatchingRule::builtin(RuleKind::Keyword);
    let index = MemoryIndex::build(&schema, &keyword, options);
    for raw in ["world", "HELLO WORLD", "quick brown", "fox", "orl", " "] {
        let assertion = keyword.assertion(&schema, raw.as_bytes()).expect("assertion");
        assert_superset(&schema, &keyword, &index, &assertion);
    }
    let assertion = keyword.assertion(&schema, b"World").expect("assertion");
    assert_eq!(
        assertion.create_index_query(&index),
        BTreeSet::from([0, 1, 2])
    );

    let phonetic = MatchingRule::builtin(RuleKind::DoubleMetaphoneApproximate);
    let index = MemoryIndex::build(&schema, &phonetic, options);
    for raw in ["Helo Wurld", "Yelow", "Abe"] {
        let assertion = phonetic.assertion(&schema, raw.as_bytes()).expect("assertion");
        assert_superset(&schema, &phonetic, &index, &assertion);
    }
}

#[test]
fn index_keys_render_with_their_index_id() {
    let schema = Schema::default();
    let rule = MatchingRule::builtin(RuleKind::Boolean);
    let mut keys = BTreeSet::new();

    for indexer in rule.create_indexers(&IndexingOptions::default()) {
        indexer
            .create_keys(&schema, b"yes", &mut keys)
            .expect("boolean");
        indexer
            .create_keys(&schema, b"TRUE", &mut keys)
            .expect("boolean");
    }

    assert_eq!(keys, BTreeSet::from([IndexKey::new("booleanMatch", "TRUE")]));
}
