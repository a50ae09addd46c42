//! Mapping between the `lg` URL parameter and [`Locale`].
//!
//! Resolution never fails: a missing or unrecognized value degrades to the
//! default locale. The default locale is represented by the parameter being
//! absent, which keeps default-language URLs clean.
//!
//! The resolved locale is a value handed down from the request boundary to
//! whatever renders names; nothing here holds it globally.
//!
//! ```rust
//! use transfer_search::{Locale, locale};
//!
//! let locale = locale::from_query("?lg=de&utm_source=ads");
//! assert_eq!(locale, Locale::De);
//! assert_eq!(locale::with_locale("lg=de&utm_source=ads", Locale::Es), "utm_source=ads");
//! ```

use tracing::trace;
use transfer_search_data::{Destination, Locale};
use url::form_urlencoded;

/// Query parameter carrying the locale.
pub const LOCALE_PARAM: &str = "lg";

/// Resolve an external value to a supported locale, falling back to the default.
#[must_use]
pub fn resolve(raw: Option<&str>) -> Locale {
    match raw.and_then(Locale::from_code) {
        Some(locale) => locale,
        None => {
            trace!(raw = ?raw, "Falling back to default locale");
            Locale::default()
        }
    }
}

/// Parameter value for `locale`, or `None` when the parameter should be omitted.
#[must_use]
pub fn serialize(locale: Locale) -> Option<&'static str> {
    if locale.is_default() {
        None
    } else {
        Some(locale.code())
    }
}

/// Resolve the locale from a URL query string (with or without a leading `?`).
///
/// The first `lg` value is used.
#[must_use]
pub fn from_query(query: &str) -> Locale {
    let value = parse(query)
        .find(|(key, _)| key == LOCALE_PARAM)
        .map(|(_, value)| value);
    resolve(value.as_deref())
}

/// Rewrite a query string so that it selects `locale`, keeping every other
/// parameter in order.
///
/// Existing `lg` parameters are dropped; a non-default locale is appended.
#[must_use]
pub fn with_locale(query: &str, locale: Locale) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(parse(query).filter(|(key, _)| key != LOCALE_PARAM));
    if let Some(code) = serialize(locale) {
        serializer.append_pair(LOCALE_PARAM, code);
    }
    serializer.finish()
}

/// Name of `destination` to show in `locale`.
#[must_use]
pub fn display_name(destination: &Destination, locale: Locale) -> &str {
    destination.name(locale)
}

fn parse(query: &str) -> form_urlencoded::Parse<'_> {
    form_urlencoded::parse(query.strip_prefix('?').unwrap_or(query).as_bytes())
}
