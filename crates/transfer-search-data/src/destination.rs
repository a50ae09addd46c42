use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Locale;

/// Stable catalog identifier. Never reused.
pub type DestinationId = u32;

/// Display names of a destination, one per [`Locale`].
///
/// Serialized as a map keyed by locale code. Unknown codes are rejected, and so
/// is a document missing any supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalizedNames {
    pub es: String,
    pub en: String,
    pub de: String,
}

impl LocalizedNames {
    pub fn new(es: impl Into<String>, en: impl Into<String>, de: impl Into<String>) -> Self {
        Self {
            es: es.into(),
            en: en.into(),
            de: de.into(),
        }
    }

    /// Same name in every locale, common for place names that don't translate.
    pub fn uniform(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            es: name.clone(),
            en: name.clone(),
            de: name,
        }
    }

    #[must_use]
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Es => &self.es,
            Locale::En => &self.en,
            Locale::De => &self.de,
        }
    }

    /// `(locale, name)` pairs in [`Locale::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &str)> {
        Locale::ALL.into_iter().map(|locale| (locale, self.get(locale)))
    }
}

/// Kind of place a destination is. Used to filter what is shown, never to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    City,
    Resort,
    Landmark,
    Airport,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::City => "city",
            Self::Resort => "resort",
            Self::Landmark => "landmark",
            Self::Airport => "airport",
        };
        f.write_str(label)
    }
}

/// A transfer endpoint with its fixed quote.
///
/// Instances are only handed out by a validated [`crate::Catalog`], so a
/// `&Destination` obtained from one always satisfies the catalog invariants:
/// non-empty names in every locale, finite non-negative price and distance, and
/// a strictly positive duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: DestinationId,
    pub names: LocalizedNames,
    pub category: Category,
    /// Fixed one-way quote in euros
    pub price_eur: f64,
    /// Estimated one-way travel time
    pub duration_minutes: u32,
    /// Estimated one-way road distance
    pub distance_km: f64,
}

impl Destination {
    #[must_use]
    pub fn id(&self) -> DestinationId {
        self.id
    }

    /// Name to display for `locale`.
    #[must_use]
    pub fn name(&self, locale: Locale) -> &str {
        self.names.get(locale)
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn price_eur(&self) -> f64 {
        self.price_eur
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): €{}, {} min, {} km",
            self.names.get(Locale::default()),
            self.category,
            self.price_eur,
            self.duration_minutes,
            self.distance_km
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_deserialize_from_locale_map() {
        let names: LocalizedNames =
            serde_json::from_str(r#"{"es": "Jávea", "en": "Javea", "de": "Jávea"}"#).unwrap();
        assert_eq!(names.get(Locale::Es), "Jávea");
        assert_eq!(names.get(Locale::En), "Javea");
    }

    #[test]
    fn test_names_reject_missing_locale() {
        let result = serde_json::from_str::<LocalizedNames>(r#"{"es": "Elche", "en": "Elche"}"#);
        assert!(result.is_err(), "A name is required for every locale");
    }

    #[test]
    fn test_names_reject_unknown_locale() {
        let result = serde_json::from_str::<LocalizedNames>(
            r#"{"es": "Elche", "en": "Elche", "de": "Elche", "fr": "Elche"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_destination_camel_case_fields() {
        let destination: Destination = serde_json::from_str(
            r#"{
                "id": 7,
                "names": {"es": "Altea", "en": "Altea", "de": "Altea"},
                "category": "resort",
                "priceEur": 60,
                "durationMinutes": 55,
                "distanceKm": 60.5
            }"#,
        )
        .unwrap();
        assert_eq!(destination.id(), 7);
        assert_eq!(destination.category(), Category::Resort);
        assert!((destination.price_eur() - 60.0).abs() < f64::EPSILON);
        assert_eq!(destination.duration_minutes(), 55);
    }

    #[test]
    fn test_iter_follows_locale_order() {
        let names = LocalizedNames::new("Aeropuerto", "Airport", "Flughafen");
        let locales: Vec<_> = names.iter().map(|(locale, _)| locale).collect();
        assert_eq!(locales, Locale::ALL);
    }
}
