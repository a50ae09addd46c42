//! The destination catalog compiled into the library.

use tracing::instrument;

use crate::{Catalog, error::Result};

/// Raw JSON of the built-in catalog document.
pub const EMBEDDED_CATALOG_JSON: &str = include_str!("destinations.json");

/// Parse and validate the built-in catalog.
///
/// The document ships with the crate, so an error here means the bundled data
/// itself is broken and startup should abort.
#[instrument(name = "Load embedded catalog", level = "info")]
pub fn load_embedded_catalog() -> Result<Catalog> {
    Catalog::from_json_str(EMBEDDED_CATALOG_JSON)
}
