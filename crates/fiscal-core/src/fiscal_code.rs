//! # Fiscal Code Decoding
//!
//! Turns a raw string into a [`FiscalCode`] record with every field it can
//! decode.
//!
//! ## Layout
//! ```text
//!    0  1  2 │ 3  4  5 │ 6  7 │ 8 │ 9 10 │ 11 12 13 14 │ 15
//!    R  S  S │ L  R  A │ 9  0 │ D │ 7  0 │ L  3  7  8  │ H
//!   ─────────┼─────────┼──────┼───┼──────┼─────────────┼──────
//!    surname │  name   │ year │ m │ day  │    place    │ check
//!                                  (+40 female)
//! ```
//!
//! ## Decoding Pipeline
//! ```text
//!   raw ──► clean ──► 16 alphanumerics? ──no──► all fields None
//!                           │ yes
//!                           ▼
//!                     omocode::normalize
//!                           │
//!         ┌───────┬─────────┼─────────┬─────────┐
//!         ▼       ▼         ▼         ▼         ▼
//!     surname   name     gender     date      place
//!      (each field independently Some or None)
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::DecoderConfig;
use crate::error::{CoreError, CoreResult};
use crate::names::is_valid_name_code;
use crate::omocode;
use crate::tables::{month_from_letter, CHECKED_LENGTH, CODE_LENGTH};
use crate::text::clean;
use crate::types::{Gender, NoPlaces, Place, PlaceLookup};

// =============================================================================
// Fiscal Code Record
// =============================================================================

/// A decoded fiscal code.
///
/// Immutable once built. Fields that could not be decoded are `None`; a
/// malformed sub-field never prevents the others from being read. When the
/// cleaned input is not 16 alphanumeric characters, every field, the raw
/// code included, is `None`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use fiscal_core::{DecoderConfig, FiscalCode, Gender, Place, PlaceTable};
///
/// let places = PlaceTable::from_places([Place::new("L378", "Trento", "TN").unwrap()]).unwrap();
/// let config = DecoderConfig::with_pivot_year(2024);
/// let code = FiscalCode::parse_with("rsslra90d70l378h", &places, &config).unwrap();
///
/// assert_eq!(code.raw_code(), Some("RSSLRA90D70L378H"));
/// assert_eq!(code.gender(), Some(Gender::Female));
/// assert_eq!(code.birth_date(), NaiveDate::from_ymd_opt(1990, 4, 30));
/// assert_eq!(code.birth_place().map(|p| p.code.as_str()), Some("L378"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FiscalCode {
    raw_code: Option<String>,
    last_name_code: Option<String>,
    first_name_code: Option<String>,
    gender: Option<Gender>,
    birth_date: Option<NaiveDate>,
    birth_place: Option<Place>,
}

impl FiscalCode {
    /// Decodes `code` using the default configuration.
    ///
    /// Fails only when `code` is empty.
    pub fn parse<L>(code: &str, places: &L) -> CoreResult<Self>
    where
        L: PlaceLookup + ?Sized,
    {
        Self::parse_with(code, places, &DecoderConfig::default())
    }

    /// Like [`FiscalCode::parse`], treating `None` as an empty input.
    pub fn parse_opt<L>(code: Option<&str>, places: &L) -> CoreResult<Self>
    where
        L: PlaceLookup + ?Sized,
    {
        Self::parse(code.unwrap_or_default(), places)
    }

    /// Decodes `code` with an explicit configuration.
    pub fn parse_with<L>(code: &str, places: &L, config: &DecoderConfig) -> CoreResult<Self>
    where
        L: PlaceLookup + ?Sized,
    {
        if code.is_empty() {
            return Err(CoreError::InvalidInput("fiscal code is empty".to_string()));
        }

        let cleaned = clean(code);
        if !is_well_formed(&cleaned) {
            debug!(length = cleaned.chars().count(), "Rejecting malformed fiscal code");
            return Ok(Self::default());
        }

        let Some(normalized) = omocode::normalize(&cleaned) else {
            return Ok(Self::default());
        };

        let day_field = parse_two_digits(&normalized[9..11]);
        let record = FiscalCode {
            last_name_code: decode_name_code(&normalized[0..3]),
            first_name_code: decode_name_code(&normalized[3..6]),
            gender: day_field.and_then(Gender::from_day_field),
            birth_date: decode_birth_date(&normalized, day_field, config),
            birth_place: places.place_by_code(&normalized[11..15]),
            raw_code: Some(cleaned),
        };

        record.trace_absent_fields();
        Ok(record)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The cleaned input code, as written (omocode letters kept).
    pub fn raw_code(&self) -> Option<&str> {
        self.raw_code.as_deref()
    }

    /// Three-letter surname code.
    pub fn last_name_code(&self) -> Option<&str> {
        self.last_name_code.as_deref()
    }

    /// Three-letter given-name code.
    pub fn first_name_code(&self) -> Option<&str> {
        self.first_name_code.as_deref()
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn birth_place(&self) -> Option<&Place> {
        self.birth_place.as_ref()
    }

    /// The code with birth date, gender and place masked, for logs.
    ///
    /// ```rust
    /// use fiscal_core::FiscalCode;
    ///
    /// let code: FiscalCode = "RSSLRA90D70L378H".parse().unwrap();
    /// assert_eq!(code.redacted().as_deref(), Some("RSSLRA*********H"));
    /// ```
    pub fn redacted(&self) -> Option<String> {
        self.raw_code.as_deref().map(redact)
    }

    /// Whether the code uses omocode letters in its numeric positions.
    pub fn is_omocode(&self) -> bool {
        self.raw_code().is_some_and(omocode::is_omocode)
    }

    fn trace_absent_fields(&self) {
        let fields = [
            ("last_name", self.last_name_code.is_none()),
            ("first_name", self.first_name_code.is_none()),
            ("gender", self.gender.is_none()),
            ("birth_date", self.birth_date.is_none()),
            ("birth_place", self.birth_place.is_none()),
        ];

        for (field, absent) in fields {
            if absent {
                trace!(code = ?self.redacted(), field, "Field not decodable");
            }
        }
    }
}

impl fmt::Display for FiscalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.raw_code() {
            Some(code) => write!(f, "{}", code),
            None => write!(f, "<invalid>"),
        }
    }
}

/// Parses without a place registry, so the birth place is always absent.
impl FromStr for FiscalCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &NoPlaces)
    }
}

// =============================================================================
// Field Decoders
// =============================================================================

/// Masks positions 6..15 of a well-formed code.
fn redact(code: &str) -> String {
    code.char_indices()
        .map(|(i, c)| if (6..CHECKED_LENGTH).contains(&i) { '*' } else { c })
        .collect()
}

fn is_well_formed(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Parses exactly two ASCII digits.
fn parse_two_digits(s: &str) -> Option<u32> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn decode_name_code(code: &str) -> Option<String> {
    is_valid_name_code(code).then(|| code.to_string())
}

/// Year from positions 6..8, month letter at 8, day from the day field with
/// the female offset removed.
fn decode_birth_date(
    code: &str,
    day_field: Option<u32>,
    config: &DecoderConfig,
) -> Option<NaiveDate> {
    let year = parse_two_digits(&code[6..8])?;
    let month = month_from_letter(code.as_bytes()[8])?;
    let mut day = day_field?;
    if day > Gender::FEMALE_DAY_OFFSET {
        day -= Gender::FEMALE_DAY_OFFSET;
    }

    let year = config.expand_year(year as i32);
    NaiveDate::from_ymd_opt(year, month, day)
}

// =============================================================================
// Unit Tests
// =============================================================================
