//! The immutable destination table.
//!
//! A [`Catalog`] is validated once when it is built and then only read. Cloning
//! shares the underlying records.

use std::{io::Read, sync::Arc};

use ahash::AHashMap as HashMap;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::{
    Destination, DestinationId,
    error::{DataError, Result},
};

/// Shape of a serialized catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    version: Option<String>,
    destinations: Vec<Destination>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Arc<[Destination]>,
    positions: Arc<HashMap<DestinationId, usize>>,
    version: Option<Arc<str>>,
}

impl Catalog {
    /// Validate `destinations` and build a catalog that keeps their order.
    #[instrument(name = "Build Catalog", level = "debug", skip(destinations), fields(count = destinations.len()))]
    pub fn new(destinations: Vec<Destination>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(destinations.len());
        for (position, destination) in destinations.iter().enumerate() {
            validate(destination)?;
            if positions.insert(destination.id, position).is_some() {
                return Err(DataError::DuplicateId(destination.id));
            }
        }
        debug!(count = destinations.len(), "Catalog validated");

        Ok(Self {
            destinations: destinations.into(),
            positions: Arc::new(positions),
            version: None,
        })
    }

    /// Parse and validate a JSON catalog document.
    ///
    /// The document is an object with an optional `version` string and a
    /// `destinations` array.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_document(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_document(serde_json::from_reader(reader)?)
    }

    fn from_document(document: CatalogDocument) -> Result<Self> {
        let mut catalog = Self::new(document.destinations)?;
        catalog.version = document.version.map(Into::into);
        info!(
            version = catalog.version().unwrap_or("unversioned"),
            destinations = catalog.len(),
            "Loaded destination catalog"
        );
        Ok(catalog)
    }

    /// Every destination, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Destination] {
        &self.destinations
    }

    #[must_use]
    pub fn by_id(&self, id: DestinationId) -> Option<&Destination> {
        self.positions
            .get(&id)
            .map(|&position| &self.destinations[position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Destination> {
        self.destinations.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Destination;
    type IntoIter = std::slice::Iter<'a, Destination>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate(destination: &Destination) -> Result<()> {
    let id = destination.id;
    for (locale, name) in destination.names.iter() {
        if name.trim().is_empty() {
            return Err(DataError::EmptyName { id, locale });
        }
    }
    for (field, value) in [
        ("priceEur", destination.price_eur),
        ("distanceKm", destination.distance_km),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(DataError::InvalidNumber { id, field, value });
        }
    }
    if destination.duration_minutes == 0 {
        return Err(DataError::ZeroDuration(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Locale, LocalizedNames, test_data};

    fn destination(id: DestinationId, name: &str) -> Destination {
        Destination {
            id,
            names: LocalizedNames::uniform(name),
            category: Category::City,
            price_eur: 50.0,
            duration_minutes: 40,
            distance_km: 35.0,
        }
    }

    #[test]
    fn test_keeps_insertion_order() {
        let catalog = Catalog::new(vec![
            destination(3, "Elche"),
            destination(1, "Altea"),
            destination(2, "Calpe"),
        ])
        .unwrap();
        let ids: Vec<_> = catalog.iter().map(Destination::id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_by_id() {
        let catalog = test_data::sample_catalog();
        assert_eq!(catalog.by_id(2).map(|d| d.name(Locale::En)), Some("Valencia"));
        assert!(catalog.by_id(99).is_none());
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let result = Catalog::new(vec![destination(1, "Altea"), destination(1, "Calpe")]);
        assert!(matches!(result, Err(DataError::DuplicateId(1))));
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut bad = destination(4, "Dénia");
        bad.names.de = "  ".to_string();
        let result = Catalog::new(vec![bad]);
        assert!(matches!(
            result,
            Err(DataError::EmptyName {
                id: 4,
                locale: Locale::De
            })
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let mut bad = destination(5, "Murcia");
        bad.price_eur = -1.0;
        assert!(matches!(
            Catalog::new(vec![bad]),
            Err(DataError::InvalidNumber {
                field: "priceEur",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_nan_distance() {
        let mut bad = destination(6, "Elda");
        bad.distance_km = f64::NAN;
        assert!(matches!(
            Catalog::new(vec![bad]),
            Err(DataError::InvalidNumber {
                field: "distanceKm",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_duration() {
        let mut bad = destination(7, "Santa Pola");
        bad.duration_minutes = 0;
        assert!(matches!(
            Catalog::new(vec![bad]),
            Err(DataError::ZeroDuration(7))
        ));
    }

    #[test]
    fn test_from_json_str_reads_version() {
        let catalog = Catalog::from_json_str(
            r#"{
                "version": "2025-06",
                "destinations": [
                    {"id": 1, "names": {"es": "Altea", "en": "Altea", "de": "Altea"},
                     "category": "resort", "priceEur": 60, "durationMinutes": 55, "distanceKm": 60}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.version(), Some("2025-06"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_json_str_missing_locale_fails() {
        let result = Catalog::from_json_str(
            r#"{"destinations": [
                {"id": 1, "names": {"es": "Altea", "en": "Altea"},
                 "category": "resort", "priceEur": 60, "durationMinutes": 55, "distanceKm": 60}
            ]}"#,
        );
        assert!(matches!(result, Err(DataError::Serde(_))));
    }

    #[test]
    fn test_from_reader() {
        let json = br#"{"destinations": []}"#;
        let catalog = Catalog::from_reader(&json[..]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.version(), None);
    }
}
