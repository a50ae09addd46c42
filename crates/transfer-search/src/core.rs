//! Core destination search functionality.
//!
//! This module provides the main [`DestinationSearcher`] interface: it owns a
//! validated [`Catalog`] together with the normalized name index built from
//! it, and answers search-box queries against both.
//!
//! # Quick Start
//!
//! ```rust
//! use transfer_search::{DestinationSearcher, Locale};
//!
//! let searcher = DestinationSearcher::new_embedded()?;
//!
//! // Suggestions while typing
//! for destination in searcher.search_with_limit("beni", 3) {
//!     println!("{}", destination.name(Locale::En));
//! }
//!
//! // Best guess when the form is submitted without picking a suggestion
//! let best = searcher.lookup("benidorm");
//! assert!(best.is_some());
//! # Ok::<(), transfer_search::error::TransferSearchError>(())
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{info, instrument};
use transfer_search_data::{Catalog, Destination, load_embedded_catalog};

use crate::{
    error::TransferSearchError,
    index::NameIndex,
    search::{SearchConfig, SearchHit, search_inner},
};

/// Matches free text against every localized destination name.
///
/// Cloning is cheap and clones share the catalog and index. Nothing inside is
/// mutable, so a searcher can be used from any number of threads, and calls
/// never interfere with each other.
///
/// Every search method is total: empty, too-short or unmatched queries return
/// an empty result, never an error.
///
/// # Examples
///
/// ```rust
/// use transfer_search::{DestinationSearcher, SearchConfigBuilder, test_data};
///
/// let searcher = DestinationSearcher::new(test_data::sample_catalog());
///
/// let results = searcher.search("ben");
/// assert_eq!(results.len(), 1);
/// assert!(searcher.search("v").is_empty());
///
/// let config = SearchConfigBuilder::suggestions().build();
/// let suggestions = searcher.search_with_config("valencia", &config);
/// assert!(suggestions.len() <= 3);
/// ```
#[derive(Debug, Clone)]
pub struct DestinationSearcher {
    catalog: Catalog,
    index: Arc<NameIndex>,
}

impl DestinationSearcher {
    /// Create a searcher over `catalog`, normalizing every name up front.
    #[instrument(name = "Create DestinationSearcher", level = "info", skip_all, fields(destinations = catalog.len()))]
    pub fn new(catalog: Catalog) -> Self {
        let t_init = std::time::Instant::now();
        let index = Arc::new(NameIndex::build(&catalog));
        info!(
            elapsed = ?t_init.elapsed(),
            "DestinationSearcher ready"
        );
        Self { catalog, index }
    }

    /// Create a searcher over the catalog compiled into the library.
    ///
    /// Fails only if the bundled catalog does not validate.
    pub fn new_embedded() -> Result<Self, TransferSearchError> {
        Ok(Self::new(load_embedded_catalog()?))
    }

    /// Parse, validate and index a JSON catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, TransferSearchError> {
        Ok(Self::new(Catalog::from_json_str(json)?))
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every matching destination, best first.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Destination> {
        self.search_with_config(query, &SearchConfig::default())
    }

    /// The `limit` best matching destinations.
    #[must_use]
    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<&Destination> {
        let config = SearchConfig {
            limit: Some(limit),
            ..SearchConfig::default()
        };
        self.search_with_config(query, &config)
    }

    #[must_use]
    pub fn search_with_config(&self, query: &str, config: &SearchConfig) -> Vec<&Destination> {
        self.search_hits(query, config)
            .into_iter()
            .map(|hit| hit.destination)
            .collect()
    }

    /// Ranked matches with the locale and position of the name that matched.
    #[must_use]
    pub fn search_hits(&self, query: &str, config: &SearchConfig) -> Vec<SearchHit<'_>> {
        search_inner(&self.catalog, &self.index, query, config)
    }

    /// Best match for free text submitted without picking a suggestion.
    ///
    /// This is the first result of [`search`](Self::search). When a fragment
    /// matches several destinations the top-ranked one wins.
    #[must_use]
    pub fn lookup(&self, query: &str) -> Option<&Destination> {
        let config = SearchConfig {
            limit: Some(1),
            ..SearchConfig::default()
        };
        self.search_with_config(query, &config).into_iter().next()
    }

    /// Search many queries in parallel. Results are in query order.
    #[instrument(name = "Bulk destination search", level = "debug", skip_all, fields(queries = queries.len()))]
    pub fn search_bulk<Q>(&self, queries: &[Q], config: &SearchConfig) -> Vec<Vec<&Destination>>
    where
        Q: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.search_with_config(query.as_ref(), config))
            .collect()
    }
}
