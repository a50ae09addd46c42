//! Small fixed catalogs for tests and examples.

use crate::{Catalog, Category, Destination, LocalizedNames};

/// Benidorm and Valencia, with the same name in every locale.
#[must_use]
pub fn sample_destinations() -> Vec<Destination> {
    vec![
        Destination {
            id: 1,
            names: LocalizedNames::uniform("Benidorm"),
            category: Category::Resort,
            price_eur: 45.0,
            duration_minutes: 50,
            distance_km: 45.0,
        },
        Destination {
            id: 2,
            names: LocalizedNames::uniform("Valencia"),
            category: Category::City,
            price_eur: 90.0,
            duration_minutes: 110,
            distance_km: 130.0,
        },
    ]
}

/// [`sample_destinations`] as a validated catalog.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_destinations()).expect("sample destinations are valid")
}
