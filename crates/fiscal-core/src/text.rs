//! # Text Normalization
//!
//! Cleans raw codes and personal names into the uppercase, accent-free,
//! alphanumeric form the rest of the crate works on.
//!
//! ```text
//!   "  d'Àngelo-Rè "  ──clean──►  "DANGELORE"
//!                                     │
//!                         ┌───────────┴───────────┐
//!                    consonants()              vowels()
//!                      "DNGLR"                  "AOE"
//! ```

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Removes everything that is not a letter or decimal digit, strips
/// diacritics and uppercases the result.
///
/// Numeric symbols such as `²` or `Ⅻ` are not digits and are dropped.
///
/// Diacritics are removed by canonical decomposition (NFD), dropping the
/// combining marks, then recomposing (NFC). Uppercasing does not depend on
/// any locale.
///
/// ## Example
/// ```rust
/// use fiscal_core::text::clean;
///
/// assert_eq!(clean("Niccolò Dell'Àcqua"), "NICCOLODELLACQUA");
/// assert_eq!(clean("rss-lra 90d70"), "RSSLRA90D70");
/// assert_eq!(clean(""), "");
/// ```
pub fn clean(input: &str) -> String {
    let alphanumeric: String = input
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_ascii_digit())
        .collect();

    alphanumeric
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .nfc()
        .collect::<String>()
        .to_uppercase()
}

/// Returns `true` for the five letters the standard treats as vowels.
#[inline]
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Returns `true` for letters that are not vowels.
///
/// Letters without an ASCII decomposition (`Ø`, `Ł`) count as consonants.
#[inline]
pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

/// All consonants of `input`, uppercased, in input order.
pub fn consonants(input: &str) -> String {
    input
        .chars()
        .filter(|&c| is_consonant(c))
        .flat_map(char::to_uppercase)
        .collect()
}

/// All vowels of `input`, uppercased, in input order.
pub fn vowels(input: &str) -> String {
    input
        .chars()
        .filter(|&c| is_vowel(c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
