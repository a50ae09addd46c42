//! Transfer Search - Destination Matching for Airport-Transfer Quotes
//!
//! Transfer Search finds the destinations a customer means while they type in a
//! search box: partial input, any capitalisation, with or without accents, in
//! any of the supported languages. Each destination carries a fixed price,
//! travel time and distance from the airport.
//!
//! # Quick Start
//!
//! ```rust
//! use transfer_search::{DestinationSearcher, Locale, SearchConfigBuilder, locale};
//!
//! // Create a searcher using the embedded catalog
//! let searcher = DestinationSearcher::new_embedded()?;
//!
//! // The request decides which language names are shown in
//! let lang = locale::from_query("lg=en");
//!
//! // Suggestions for the drop-down
//! let config = SearchConfigBuilder::suggestions().build();
//! for destination in searcher.search_with_config("jave", &config) {
//!     println!(
//!         "{}: €{} / {} min",
//!         locale::display_name(destination, lang),
//!         destination.price_eur(),
//!         destination.duration_minutes()
//!     );
//! }
//!
//! // Submitting the form without picking a suggestion
//! if let Some(best) = searcher.lookup("Jávea") {
//!     assert_eq!(best.name(Locale::En), "Javea");
//! }
//! # Ok::<(), transfer_search::error::TransferSearchError>(())
//! ```
//!
//! # Matching
//!
//! - **Normalization**: case-folding, diacritic stripping and whitespace
//!   collapsing, applied identically to names and queries
//! - **Substring matching** over every localized name, not only the displayed one
//! - **Ranking**: prefix matches first, then shorter names, then catalog order
//! - **Total**: queries under two characters, or matching nothing, return empty
//!   results rather than errors
//!
//! # Data
//!
//! The catalog ships inside the library and is validated when loaded: unique
//! ids, a name in every locale, non-negative prices and distances, positive
//! durations. A catalog that breaks any of these fails to load.
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
pub mod contact;
mod core;
pub mod error;
mod index;
pub mod locale;
mod search;

pub use crate::core::DestinationSearcher;

pub use config::SearchConfigBuilder;
pub use contact::ContactConfig;
pub use index::MatchKind;
pub use search::{MIN_QUERY_CHARS, SearchConfig, SearchHit, VISIBLE_SUGGESTIONS, normalize};
pub use transfer_search_data as data;
pub use transfer_search_data::{
    Catalog, Category, Destination, DestinationId, Locale, LocalizedNames, test_data,
};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Transfer Search library.
///
/// Sets up a `tracing` subscriber that honours `RUST_LOG` and otherwise shows
/// events at `level` and above. Calling it again is a no-op.
///
/// # Examples
///
/// ```rust
/// use tracing::Level;
/// use transfer_search::init_logging;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), transfer_search::error::TransferSearchError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::TransferSearchError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?;

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(())
    })
}
