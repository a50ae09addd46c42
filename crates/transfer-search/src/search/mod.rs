//! Destination matching.
//!
//! A destination matches when any of its localized names, normalized, contains
//! the normalized query. Matches are ranked prefix-first, then by shorter name,
//! then by catalog order. Searching never fails: unmatched or too-short input
//! simply produces no hits.

mod normalize;

use itertools::Itertools;
use tracing::{debug, trace};
use transfer_search_data::{Catalog, Destination, Locale};

pub use normalize::normalize;

use crate::{
    SearchConfigBuilder,
    index::{MatchKind, NameIndex, NameMatch},
};

/// Queries shorter than this many normalized characters never match.
pub const MIN_QUERY_CHARS: usize = 2;

/// Number of suggestion rows the search box shows at once.
pub const VISIBLE_SUGGESTIONS: usize = 3;

/// Configuration for destination search.
///
/// Use [`SearchConfigBuilder`] (or [`SearchConfig::builder`]) to create one.
///
/// ```rust
/// use transfer_search::SearchConfig;
///
/// let config = SearchConfig::builder().limit(5).build();
/// assert_eq!(config.limit, Some(5));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of results to return, `None` for every match
    pub limit: Option<usize>,
    /// Minimum normalized query length, at least 1
    pub min_query_chars: usize,
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: None,
            min_query_chars: MIN_QUERY_CHARS,
        }
    }
}

/// A ranked match with details on which name matched and how.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub destination: &'a Destination,
    /// Locale of the name that produced the best match
    pub matched_locale: Locale,
    pub kind: MatchKind,
    /// Character offset of the query within the normalized matched name
    pub offset: usize,
}

impl SearchHit<'_> {
    #[must_use]
    pub fn is_prefix(&self) -> bool {
        self.kind == MatchKind::Prefix
    }

    /// The name that matched, as written in the catalog.
    #[must_use]
    pub fn matched_name(&self) -> &str {
        self.destination.name(self.matched_locale)
    }
}

/// Rank every destination of `catalog` matching `query`.
///
/// `index` must have been built from `catalog`.
pub(crate) fn search_inner<'a>(
    catalog: &'a Catalog,
    index: &NameIndex,
    query: &str,
    config: &SearchConfig,
) -> Vec<SearchHit<'a>> {
    let query = normalize(query);
    if query.chars().count() < config.min_query_chars.max(1) {
        trace!(query = %query, "Query below minimum length");
        return Vec::new();
    }

    let matches = index.matches(&query);
    let ranked: Vec<NameMatch> = match config.limit {
        Some(limit) => matches.k_smallest_by_key(limit, |found| found.rank).collect(),
        None => matches.sorted_unstable_by_key(|found| found.rank).collect(),
    };

    debug!(query = %query, hits = ranked.len(), limit = ?config.limit, "Destination search");

    let destinations = catalog.all();
    ranked
        .into_iter()
        .map(|found| SearchHit {
            destination: &destinations[found.rank.position],
            matched_locale: found.locale,
            kind: found.rank.kind,
            offset: found.offset,
        })
        .collect()
}
