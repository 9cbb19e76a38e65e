//! Text normalization for upstream query parameters.

use unicode_normalization::UnicodeNormalization;

/// Remove diacritics: decompose to NFD and drop the combining diacritical
/// marks (U+0300..=U+036F), leaving the base characters in place.
///
/// The address-match registry returns zero matches, rather than an error,
/// for parameter values that carry accents, so every structured field sent
/// there must pass through this first.
#[must_use]
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_diacritic(*c)).collect()
}

const fn is_combining_diacritic(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}
