//! Pre-normalized name index over a destination catalog.
//!
//! Every localized name is normalized once when the index is built, so a
//! keystroke only pays for normalizing the query and a linear substring scan.
//! Locales whose names fold to the same text are stored once.
//!
//! The index belongs to [`DestinationSearcher`](crate::DestinationSearcher)
//! and is not part of the public API:
//!
//! ```compile_fail
//! use transfer_search::NameIndex;
//! ```

use tracing::{debug, instrument};
use transfer_search_data::{Catalog, Locale};

use crate::search::normalize;

/// Where the query landed inside a matching name. Prefix sorts first.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchKind {
    /// The name starts with the query
    Prefix,
    /// The query occurs later in the name
    Infix,
}

/// Sort key of a matching destination: prefix before infix, then shorter
/// name, then catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct MatchRank {
    pub kind: MatchKind,
    pub name_chars: usize,
    pub position: usize,
}

/// Best name match found for one destination.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NameMatch {
    pub rank: MatchRank,
    pub locale: Locale,
    /// Character offset of the query inside the normalized name
    pub offset: usize,
}

#[derive(Debug, Clone)]
struct IndexedName {
    locale: Locale,
    normalized: String,
    chars: usize,
}

impl IndexedName {
    fn find(&self, query: &str) -> Option<(MatchKind, usize)> {
        let byte_offset = self.normalized.find(query)?;
        let kind = if byte_offset == 0 {
            MatchKind::Prefix
        } else {
            MatchKind::Infix
        };
        Some((kind, self.normalized[..byte_offset].chars().count()))
    }
}

#[derive(Debug, Clone)]
struct IndexedDestination {
    names: Vec<IndexedName>,
}

/// Normalized names of every catalog entry, in catalog order.
#[derive(Debug, Clone)]
pub struct NameIndex {
    entries: Vec<IndexedDestination>,
}

impl NameIndex {
    #[instrument(name = "Build name index", level = "debug", skip_all, fields(destinations = catalog.len()))]
    pub fn build(catalog: &Catalog) -> Self {
        let entries: Vec<_> = catalog
            .iter()
            .map(|destination| {
                let mut names: Vec<IndexedName> = Vec::with_capacity(Locale::ALL.len());
                for (locale, name) in destination.names.iter() {
                    let normalized = normalize(name);
                    if names.iter().any(|seen| seen.normalized == normalized) {
                        continue;
                    }
                    names.push(IndexedName {
                        locale,
                        chars: normalized.chars().count(),
                        normalized,
                    });
                }
                IndexedDestination { names }
            })
            .collect();

        debug!(
            names = entries.iter().map(|e| e.names.len()).sum::<usize>(),
            "Name index built"
        );
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best match of an already-normalized `query` for every destination that
    /// has one, in catalog order.
    pub(crate) fn matches<'q>(&'q self, query: &'q str) -> impl Iterator<Item = NameMatch> + 'q {
        self.entries
            .iter()
            .enumerate()
            .filter_map(move |(position, entry)| best_match(entry, position, query))
    }
}

fn best_match(entry: &IndexedDestination, position: usize, query: &str) -> Option<NameMatch> {
    entry
        .names
        .iter()
        .filter_map(|name| {
            name.find(query).map(|(kind, offset)| NameMatch {
                rank: MatchRank {
                    kind,
                    name_chars: name.chars,
                    position,
                },
                locale: name.locale,
                offset,
            })
        })
        // First of equal ranks wins, so ties go to the earlier locale
        .min_by_key(|found| found.rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use transfer_search_data::{Category, Destination, LocalizedNames, test_data};

    fn catalog_of(names: Vec<LocalizedNames>) -> Catalog {
        let destinations = names
            .into_iter()
            .zip(1..)
            .map(|(names, id)| Destination {
                id,
                names,
                category: Category::City,
                price_eur: 10.0,
                duration_minutes: 10,
                distance_km: 10.0,
            })
            .collect();
        Catalog::new(destinations).unwrap()
    }

    #[test]
    fn test_uniform_names_stored_once() {
        let index = NameIndex::build(&test_data::sample_catalog());
        assert_eq!(index.len(), 2);
        assert!(index.entries.iter().all(|entry| entry.names.len() == 1));
    }

    #[test]
    fn test_accent_only_differences_stored_once() {
        let index = NameIndex::build(&catalog_of(vec![LocalizedNames::new(
            "Dénia", "Denia", "Dénia",
        )]));
        assert_eq!(index.entries[0].names.len(), 1);
    }

    #[test]
    fn test_prefix_beats_infix_across_locales() {
        let index = NameIndex::build(&catalog_of(vec![LocalizedNames::new(
            "Aeropuerto de Valencia",
            "Valencia Airport",
            "Flughafen Valencia",
        )]));
        let found: Vec<_> = index.matches("valencia").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].rank.kind, MatchKind::Prefix);
        assert_eq!(found[0].locale, Locale::En);
        assert_eq!(found[0].offset, 0);
    }

    #[test]
    fn test_infix_offset_in_chars() {
        let index = NameIndex::build(&catalog_of(vec![LocalizedNames::uniform(
            "Castillo de Santa Bárbara",
        )]));
        let found: Vec<_> = index.matches("barbara").collect();
        assert_eq!(found[0].rank.kind, MatchKind::Infix);
        assert_eq!(found[0].offset, "castillo de santa ".chars().count());
    }

    #[test]
    fn test_no_match_yields_nothing() {
        let index = NameIndex::build(&test_data::sample_catalog());
        assert_eq!(index.matches("zzz").count(), 0);
    }

    #[test]
    fn test_match_kind_ordering() {
        assert!(MatchKind::Prefix < MatchKind::Infix);
    }
}
