//! # Omocode Normalization
//!
//! When two people would receive the same fiscal code, the registry swaps
//! digits for letters (right to left) until the codes differ. Decoding has to
//! undo that substitution before the numeric fields can be read.
//!
//! ```text
//!   C H R V G N 9 4 P S 4 H 2 U 2 F      (omocode, S=6 and U=8)
//!               ▲ ▲   ▲ ▲   ▲ ▲ ▲
//!               numeric positions 6 7 9 10 12 13 14
//!   C H R V G N 9 4 P 6 4 H 2 8 2 H      (canonical, check char recomputed)
//! ```

use crate::checksum::check_character;
use crate::tables::{omocode_digit, CHECKED_LENGTH, CODE_LENGTH, NUMERIC_POSITIONS};

/// Rewrites omocode letters at the numeric positions back to digits and
/// recomputes the trailing check character.
///
/// `code` must be a cleaned, 16-character uppercase alphanumeric code;
/// anything else yields `None`. Positions outside the numeric set are never
/// touched, and characters that are not substitution letters stay as they
/// are.
///
/// The recomputed check character belongs to the canonical form only. The
/// validity of the input code is judged on its own trailing character.
///
/// ## Example
/// ```rust
/// use fiscal_core::omocode::normalize;
///
/// assert_eq!(
///     normalize("CHRVGN94PS4H2U2F").as_deref(),
///     Some("CHRVGN94P64H282H")
/// );
/// ```
pub fn normalize(code: &str) -> Option<String> {
    if code.len() != CODE_LENGTH
        || !code
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    {
        return None;
    }

    let mut bytes = code.as_bytes().to_vec();
    for &position in &NUMERIC_POSITIONS {
        if let Some(digit) = omocode_digit(bytes[position]) {
            bytes[position] = digit;
        }
    }

    let mut canonical = String::from_utf8(bytes).ok()?;
    let check = check_character(&canonical)?;
    canonical.truncate(CHECKED_LENGTH);
    canonical.push(check);

    Some(canonical)
}

/// Returns `true` if any numeric position holds a substitution letter.
pub fn is_omocode(code: &str) -> bool {
    let bytes = code.as_bytes();
    NUMERIC_POSITIONS
        .iter()
        .filter_map(|&position| bytes.get(position))
        .any(|&b| omocode_digit(b).is_some())
}

// =============================================================================
// Unit Tests
// =============================================================================
