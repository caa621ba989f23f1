//! # Check Character
//!
//! The sixteenth character of a fiscal code is derived from the first
//! fifteen.
//!
//! ```text
//!   position (1-indexed)   1   2   3   4  ...  15
//!   table                 odd even odd even ... odd
//!                          │   │   │   │        │
//!                          └───┴───┴───┴── sum ─┘
//!                                          │
//!                              "A..Z"[sum % 26]
//! ```
//!
//! Positions are counted from one in the standard, so 0-indexed even
//! positions use the odd table.

use crate::tables::{even_value, odd_value, CHECKED_LENGTH, CHECK_ALPHABET};

/// Computes the check character for the first fifteen characters of `code`.
///
/// Characters past the fifteenth are ignored. Returns `None` when `code` is
/// shorter than fifteen bytes or holds anything other than digits and
/// uppercase ASCII letters in that range.
///
/// ## Example
/// ```rust
/// use fiscal_core::checksum::check_character;
///
/// assert_eq!(check_character("BRNGNN71B26L219"), Some('T'));
/// assert_eq!(check_character("BRNGNN71B26L219T"), Some('T'));
/// assert_eq!(check_character("brngnn71b26l219"), None);
/// ```
pub fn check_character(code: &str) -> Option<char> {
    let checked = code.as_bytes().get(..CHECKED_LENGTH)?;

    let mut sum = 0u32;
    for (i, &c) in checked.iter().enumerate() {
        let value = if i % 2 == 0 {
            odd_value(c)?
        } else {
            even_value(c)?
        };
        sum += u32::from(value);
    }

    Some(CHECK_ALPHABET[(sum % 26) as usize] as char)
}

// =============================================================================
// Unit Tests
// =============================================================================
