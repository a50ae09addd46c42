//! Destination data for the transfer-search library.
//!
//! This crate owns the data model ([`Destination`], [`LocalizedNames`],
//! [`Category`], [`Locale`]), the validated, read-only [`Catalog`] and the
//! catalog compiled into the library. Every rule a catalog must satisfy is
//! checked when it is built, so code holding a `&Destination` never has to
//! handle a missing name or a negative price.

mod catalog;
mod destination;
pub mod embedded;
mod error;
mod locale;
pub mod test_data;

pub use catalog::Catalog;
pub use destination::{Category, Destination, DestinationId, LocalizedNames};
pub use embedded::load_embedded_catalog;
pub use error::{DataError, Result};
pub use locale::Locale;
