use crate::context::IndexingOptions;
use std::ops::Bound;

///
/// IndexQueryFactory
///
/// Caller-implemented builder that turns assertion requirements into the
/// caller's own query representation.
///

pub trait IndexQueryFactory {
    type Query;

    /// Options the caller's indexes were built with.
    fn indexing_options(&self) -> IndexingOptions;

    fn create_exact_match_query(&self, index_id: &str, key: &[u8]) -> Self::Query;

    fn create_range_match_query(
        &self,
        index_id: &str,
        lower: Bound<&[u8]>,
        upper: Bound<&[u8]>,
    ) -> Self::Query;

    fn create_intersection_query(&self, queries: Vec<Self::Query>) -> Self::Query;

    /// A query selecting every candidate; the assertion decides later.
    fn create_match_all_query(&self) -> Self::Query;
}
