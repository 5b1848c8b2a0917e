use super::*;
use crate::index::{IndexQueryFactory, IndexingOptions};
use std::ops::Bound;

///
/// DescribingFactory
///
/// Renders queries as strings so their shape can be asserted directly.
///

struct DescribingFactory {
    key_size: usize,
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn bound(bound: Bound<&[u8]>) -> String {
    match bound {
        Bound::Included(bytes) => format!("[{}", text(bytes)),
        Bound::Excluded(bytes) => format!("({}", text(bytes)),
        Bound::Unbounded => "*".to_string(),
    }
}

impl IndexQueryFactory for DescribingFactory {
    type Query = String;

    fn indexing_options(&self) -> IndexingOptions {
        IndexingOptions::new(self.key_size)
    }

    fn create_exact_match_query(&self, index_id: &str, key: &[u8]) -> String {
        format!("{index_id}={}", text(key))
    }

    fn create_range_match_query(
        &self,
        index_id: &str,
        lower: Bound<&[u8]>,
        upper: Bound<&[u8]>,
    ) -> String {
        format!("{index_id} in {}..{}", bound(lower), bound(upper))
    }

    fn create_intersection_query(&self, queries: Vec<String>) -> String {
        format!("AND({})", queries.join(", "))
    }

    fn create_match_all_query(&self) -> String {
        "ALL".to_string()
    }
}

fn value(bytes: &str) -> NormalizedValue {
    NormalizedValue::from(bytes)
}

fn fragments(initial: Option<&str>, any: &[&str], final_: Option<&str>) -> SubstringFragments {
    SubstringFragments {
        initial: initial.map(|s| s.as_bytes().to_vec()),
        any: any.iter().map(|s| s.as_bytes().to_vec()).collect(),
        final_: final_.map(|s| s.as_bytes().to_vec()),
    }
}

#[test]
fn ternary_logic_tables() {
    use ConditionResult::{False, True, Undefined};

    assert_eq!(True.not(), False);
    assert_eq!(Undefined.not(), Undefined);

    assert_eq!(True.and(Undefined), Undefined);
    assert_eq!(False.and(Undefined), False);
    assert_eq!(True.and(True), True);

    assert_eq!(True.or(Undefined), True);
    assert_eq!(False.or(Undefined), Undefined);
    assert_eq!(False.or(False), False);

    assert!(ConditionResult::from_bool(true).is_true());
    assert!(!Undefined.is_true());
}

#[test]
fn substring_fragments_do_not_overlap() {
    assert!(fragments(Some("ab"), &["c"], Some("de")).matches(b"abcde"));
    assert!(!fragments(Some("abc"), &[], Some("cde")).matches(b"abcde"));
    assert!(!fragments(None, &["b", "a"], None).matches(b"ab"));
    assert!(fragments(None, &["a", "a"], None).matches(b"xaxa"));
    assert!(fragments(None, &[], None).matches(b""));
    assert!(fragments(None, &[], None).is_empty());
}

#[test]
fn comparison_assertions_evaluate_bytewise() {
    let lt = Assertion::LessThan {
        index_id: "i".to_string(),
        value: value("m"),
    };
    let ge = Assertion::GreaterOrEqual {
        index_id: "i".to_string(),
        value: value("m"),
    };
    let le = Assertion::LessOrEqual {
        index_id: "i".to_string(),
        value: value("m"),
    };

    assert_eq!(lt.matches(b"a"), ConditionResult::True);
    assert_eq!(lt.matches(b"m"), ConditionResult::False);
    assert_eq!(ge.matches(b"m"), ConditionResult::True);
    assert_eq!(ge.matches(b"a"), ConditionResult::False);
    assert_eq!(le.matches(b"m"), ConditionResult::True);
    assert_eq!(le.matches(b"z"), ConditionResult::False);
    assert_eq!(lt.index_id(), Some("i"));
}

#[test]
fn equality_and_ordering_lower_to_exact_and_range_queries() {
    let factory = DescribingFactory { key_size: 3 };

    let eq = Assertion::Equality {
        index_id: "cim".to_string(),
        value: value("abc"),
    };
    assert_eq!(eq.create_index_query(&factory), "cim=abc");

    let lt = Assertion::LessThan {
        index_id: "int".to_string(),
        value: value("k"),
    };
    assert_eq!(lt.create_index_query(&factory), "int in *..(k");

    let ge = Assertion::GreaterOrEqual {
        index_id: "int".to_string(),
        value: value("k"),
    };
    assert_eq!(ge.create_index_query(&factory), "int in [k..*");

    let le = Assertion::LessOrEqual {
        index_id: "int".to_string(),
        value: value("k"),
    };
    assert_eq!(le.create_index_query(&factory), "int in *..[k");

    assert_eq!(Assertion::Undefined.create_index_query(&factory), "ALL");
}

#[test]
fn substring_lowers_to_window_intersection() {
    let factory = DescribingFactory { key_size: 3 };
    let assertion = Assertion::Substring {
        index_id: "sub".to_string(),
        fragments: fragments(Some("hello"), &["wor", "x"], Some("ld")),
    };

    assert_eq!(
        assertion.create_index_query(&factory),
        "AND(sub in [hel..(hem, sub=wor, sub in [x..(y, sub=ld)"
    );
}

#[test]
fn substring_windows_are_deduplicated() {
    let factory = DescribingFactory { key_size: 2 };
    let assertion = Assertion::Substring {
        index_id: "sub".to_string(),
        fragments: fragments(None, &["aaaa"], None),
    };

    assert_eq!(assertion.create_index_query(&factory), "sub=aa");
}

#[test]
fn empty_substring_matches_everything() {
    let factory = DescribingFactory { key_size: 3 };
    let assertion = Assertion::Substring {
        index_id: "sub".to_string(),
        fragments: SubstringFragments::default(),
    };

    assert_eq!(assertion.create_index_query(&factory), "ALL");
    assert_eq!(assertion.matches(b"anything"), ConditionResult::True);
}

#[test]
fn approximate_lowers_to_length_key() {
    let factory = DescribingFactory { key_size: 3 };
    let assertion = Assertion::Approximate {
        index_id: "len".to_string(),
        value: value("abc"),
    };

    assert_eq!(
        assertion.create_index_query(&factory),
        format!("len={}", text(&[0, 0, 0, 3]))
    );
    assert_eq!(assertion.matches(b"xyz"), ConditionResult::True);
    assert_eq!(assertion.matches(b"xy"), ConditionResult::False);
}
