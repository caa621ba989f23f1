//! # Lookup Tables
//!
//! Constant data from the fiscal code standard. Everything here is a
//! `const` or a pure `match`, so the tables are shared by every thread
//! without synchronization and never change after compilation.

// =============================================================================
// Code Layout
// =============================================================================

/// Length of a complete fiscal code.
pub const CODE_LENGTH: usize = 16;

/// Number of characters covered by the check character.
pub const CHECKED_LENGTH: usize = 15;

/// Positions (0-indexed) that carry digits in a canonical code and may hold
/// an omocode letter instead.
pub const NUMERIC_POSITIONS: [usize; 7] = [6, 7, 9, 10, 12, 13, 14];

/// Month letters, January first.
pub const MONTH_LETTERS: &str = "ABCDEHLMPRST";

/// Alphabet indexed by `sum % 26` to produce the check character.
pub const CHECK_ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// =============================================================================
// Checksum Values
// =============================================================================

/// Values for letters A..Z at odd (1-indexed) positions.
const ODD_LETTER_VALUES: [u8; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

/// Value of `c` at an odd (1-indexed) position.
///
/// Digits share the values of the first ten letters, so `'0'` weighs the same
/// as `'A'`, `'1'` the same as `'B'`, and so on.
pub fn odd_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(ODD_LETTER_VALUES[(c - b'0') as usize]),
        b'A'..=b'Z' => Some(ODD_LETTER_VALUES[(c - b'A') as usize]),
        _ => None,
    }
}

/// Value of `c` at an even (1-indexed) position.
pub fn even_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'Z' => Some(c - b'A'),
        _ => None,
    }
}

// =============================================================================
// Omocode Substitutions
// =============================================================================

/// Maps an omocode letter back to the digit it replaces.
///
/// `L M N P Q R S T U V` stand for `0..=9`. Anything else is not a
/// substitution letter.
pub fn omocode_digit(c: u8) -> Option<u8> {
    match c {
        b'L' => Some(b'0'),
        b'M' => Some(b'1'),
        b'N' => Some(b'2'),
        b'P' => Some(b'3'),
        b'Q' => Some(b'4'),
        b'R' => Some(b'5'),
        b'S' => Some(b'6'),
        b'T' => Some(b'7'),
        b'U' => Some(b'8'),
        b'V' => Some(b'9'),
        _ => None,
    }
}

/// Month number (1..=12) for a month letter.
pub fn month_from_letter(c: u8) -> Option<u32> {
    MONTH_LETTERS
        .bytes()
        .position(|m| m == c)
        .map(|index| index as u32 + 1)
}

// =============================================================================
// Unit Tests
// =============================================================================
