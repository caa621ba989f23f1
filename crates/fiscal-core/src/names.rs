//! # Name Codes
//!
//! Transliterates surnames and given names into the three-letter codes that
//! open every fiscal code, and recognizes well-formed name codes.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Surname       consonants + vowels + "XXX", first three letters        │
//! │                "Rossi"    → RSS + OI + XXX → RSS                        │
//! │                "Fo"       → F   + O  + XXX → FOX                        │
//! │                                                                         │
//! │  Given name    4+ consonants: 1st, 3rd and 4th consonant               │
//! │                "Virginia" → VRGN → V_GN → VGN                           │
//! │                otherwise: same rule as the surname                      │
//! │                "Laura"    → LR + AUA + XXX → LRA                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::text::{clean, consonants, vowels};

/// Consonants, then vowels, then padding X. Anchored at the start only, the
/// caller checks that exactly three characters were consumed.
static NAME_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[B-DF-HJ-NP-TV-Z]{0,3}[AEIOU]{0,3}X{0,3}").expect("name code pattern is valid")
});

/// Three-letter code for a surname.
///
/// The name is cleaned first, so spaces, apostrophes and accents do not
/// matter.
///
/// ## Example
/// ```rust
/// use fiscal_core::names::surname_code;
///
/// assert_eq!(surname_code("Ait Hadda"), "THD");
/// assert_eq!(surname_code("Rossi"), "RSS");
/// assert_eq!(surname_code("Fo"), "FOX");
/// ```
pub fn surname_code(name: &str) -> String {
    let name = clean(name);
    pad_code(&consonants(&name), &vowels(&name))
}

/// Three-letter code for a given name.
///
/// With four or more consonants the second one is skipped. Shorter names
/// follow the surname rule.
///
/// ## Example
/// ```rust
/// use fiscal_core::names::given_name_code;
///
/// assert_eq!(given_name_code("Virginia"), "VGN");
/// assert_eq!(given_name_code("Alessandro"), "LSN");
/// assert_eq!(given_name_code("Saad"), "SDA");
/// ```
pub fn given_name_code(name: &str) -> String {
    let name = clean(name);
    let consonants = consonants(&name);
    let picked: Vec<char> = consonants.chars().collect();

    if let [first, _, third, fourth, ..] = picked[..] {
        return [first, third, fourth].iter().collect();
    }

    pad_code(&consonants, &vowels(&name))
}

fn pad_code(consonants: &str, vowels: &str) -> String {
    consonants
        .chars()
        .chain(vowels.chars())
        .chain("XXX".chars())
        .take(3)
        .collect()
}

/// Checks that `code` has the shape of a name code: up to three consonants,
/// then up to three vowels, then up to three `X`, for exactly three letters.
///
/// ```rust
/// use fiscal_core::names::is_valid_name_code;
///
/// assert!(is_valid_name_code("RSS"));
/// assert!(is_valid_name_code("FOX"));
/// assert!(!is_valid_name_code("ARS"));
/// assert!(!is_valid_name_code("R5S"));
/// ```
pub fn is_valid_name_code(code: &str) -> bool {
    NAME_CODE_PATTERN
        .find(code)
        .is_some_and(|m| m.len() == 3)
}

// =============================================================================
// Unit Tests
// =============================================================================
