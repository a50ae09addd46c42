use unicode_casefold::UnicodeCaseFold;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Fold text into the form every comparison is made in.
///
/// Applies full Unicode case folding (so `ß` and `ẞ` become `ss`), strips
/// diacritics (canonical decomposition, then combining marks dropped), trims,
/// and collapses whitespace runs to one space. Applying it twice gives the
/// same result as applying it once.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        let folded: String = word
            .chars()
            .case_fold()
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect();
        // A word made only of combining marks folds to nothing
        if folded.is_empty() {
            continue;
        }
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(&folded);
    }
    normalized
}
