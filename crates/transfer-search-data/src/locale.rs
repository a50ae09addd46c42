use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported display language.
///
/// The set is closed: adding a variant means every [`crate::LocalizedNames`]
/// gains a field, so catalog documents lacking the new name fail to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish, the site default.
    #[default]
    Es,
    /// English
    En,
    /// German
    De,
}

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Self; 3] = [Self::Es, Self::En, Self::De];

    /// Two-letter language code, as used in URLs and catalog documents.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Name of the language in that language, for a language switcher.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Es => "Español",
            Self::En => "English",
            Self::De => "Deutsch",
        }
    }

    /// Exact code lookup. Returns `None` for anything that isn't a supported code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    #[must_use]
    pub fn is_default(self) -> bool {
        self == Self::default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
