//! # Validation Module
//!
//! Decides whether a decoded fiscal code is valid, optionally against the
//! identity data of the person it should belong to, and validates the place
//! reference data fed into lookups.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Phases                                  │
//! │                                                                         │
//! │  Phase 1: Completeness                                                 │
//! │  └── every decoded field present? no → false                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Phase 2: Identity (only the fields the caller supplied)               │
//! │  ├── last name  → surname code        == code[0..3]                    │
//! │  ├── first name → given name code     == code[3..6]                    │
//! │  ├── gender, birth date, birth place code                              │
//! │  └── any mismatch → false                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Phase 3: Check character                                              │
//! │  └── computed over the code AS WRITTEN (omocode letters included)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use chrono::NaiveDate;
//! use fiscal_core::{FiscalCode, Gender, Identity, Place, PlaceTable};
//!
//! let places = PlaceTable::from_places([Place::new("Z330", "Marocco", "EE").unwrap()]).unwrap();
//! let code = FiscalCode::parse("THDSDA95P08Z330H", &places).unwrap();
//!
//! assert!(code.is_valid());
//!
//! let identity = Identity::new()
//!     .last_name("Ait Hadda")
//!     .first_name("Saad")
//!     .gender(Gender::Male)
//!     .birth_date(NaiveDate::from_ymd_opt(1995, 9, 8).unwrap());
//! assert!(code.is_valid_for(&identity));
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::checksum::check_character;
use crate::error::ValidationError;
use crate::fiscal_code::FiscalCode;
use crate::names::{given_name_code, surname_code};
use crate::tables::CHECKED_LENGTH;
use crate::types::{Gender, Place};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Identity
// =============================================================================

/// Known facts about a person, checked against a decoded code.
///
/// Every field is optional; only the supplied ones are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity<'a> {
    /// Full surname, e.g. `"Ait Hadda"`.
    pub last_name: Option<&'a str>,
    /// Full given name, e.g. `"Saad"`.
    pub first_name: Option<&'a str>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    /// Compared by place code only.
    pub birth_place: Option<&'a Place>,
}

impl<'a> Identity<'a> {
    /// An identity with nothing to compare.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_name(mut self, last_name: &'a str) -> Self {
        self.last_name = Some(last_name);
        self
    }

    pub fn first_name(mut self, first_name: &'a str) -> Self {
        self.first_name = Some(first_name);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    /// Sets the birth date from a timestamp, dropping the time of day.
    pub fn birth_datetime(mut self, datetime: NaiveDateTime) -> Self {
        self.birth_date = Some(datetime.date());
        self
    }

    pub fn birth_place(mut self, place: &'a Place) -> Self {
        self.birth_place = Some(place);
        self
    }
}

// =============================================================================
// Fiscal Code Validation
// =============================================================================

impl FiscalCode {
    /// Whether the surname code matches the given surname.
    ///
    /// False when the code's own surname field could not be decoded.
    pub fn match_last_name(&self, last_name: &str) -> bool {
        self.last_name_code()
            .is_some_and(|code| code == surname_code(last_name))
    }

    /// Whether the given-name code matches the given name.
    pub fn match_first_name(&self, first_name: &str) -> bool {
        self.first_name_code()
            .is_some_and(|code| code == given_name_code(first_name))
    }

    /// Whether the decoded gender equals `gender`.
    pub fn match_gender(&self, gender: Gender) -> bool {
        self.gender() == Some(gender)
    }

    /// Whether the decoded birth date equals `date`.
    pub fn match_date(&self, date: NaiveDate) -> bool {
        self.birth_date() == Some(date)
    }

    /// Whether the decoded birth place has the same code as `place`.
    pub fn match_place(&self, place: &Place) -> bool {
        self.birth_place().is_some_and(|p| p.code == place.code)
    }

    /// True when every field was decoded.
    pub fn is_complete(&self) -> bool {
        matches!(
            (
                self.raw_code(),
                self.last_name_code(),
                self.first_name_code(),
                self.gender(),
                self.birth_date(),
                self.birth_place(),
            ),
            (Some(_), Some(_), Some(_), Some(_), Some(_), Some(_))
        )
    }

    /// Whether the trailing character of the code, as written, is the
    /// correct check character.
    pub fn has_valid_check_character(&self) -> bool {
        let Some(code) = self.raw_code() else {
            return false;
        };

        let expected = check_character(code);
        let actual = code.chars().nth(CHECKED_LENGTH);
        if expected.is_none() || expected != actual {
            debug!(code = ?self.redacted(), ?expected, ?actual, "Check character mismatch");
            return false;
        }

        true
    }

    /// Structural validity: every field decodes and the check character
    /// matches.
    ///
    /// ## Example
    /// ```rust
    /// use fiscal_core::{FiscalCode, Place, PlaceTable};
    ///
    /// let places = PlaceTable::from_places([Place::new("L219", "Torino", "TO").unwrap()]).unwrap();
    ///
    /// assert!(FiscalCode::parse("BRNGNN71B26L219T", &places).unwrap().is_valid());
    /// assert!(!FiscalCode::parse("BRNGNN71B26L219A", &places).unwrap().is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        self.is_valid_for(&Identity::new())
    }

    /// Validity cross-checked against the supplied identity fields.
    pub fn is_valid_for(&self, identity: &Identity<'_>) -> bool {
        if !self.is_complete() {
            debug!(code = ?self.redacted(), "Fiscal code is not fully decodable");
            return false;
        }

        if let Some(last_name) = identity.last_name {
            if !self.match_last_name(last_name) {
                debug!(field = "last_name", "Identity mismatch");
                return false;
            }
        }

        if let Some(first_name) = identity.first_name {
            if !self.match_first_name(first_name) {
                debug!(field = "first_name", "Identity mismatch");
                return false;
            }
        }

        if let Some(gender) = identity.gender {
            if !self.match_gender(gender) {
                debug!(field = "gender", "Identity mismatch");
                return false;
            }
        }

        if let Some(date) = identity.birth_date {
            if !self.match_date(date) {
                debug!(field = "birth_date", "Identity mismatch");
                return false;
            }
        }

        if let Some(place) = identity.birth_place {
            if !self.match_place(place) {
                debug!(field = "birth_place", "Identity mismatch");
                return false;
            }
        }

        self.has_valid_check_character()
    }
}

// =============================================================================
// Reference Data Validators
// =============================================================================

/// Validates a place code.
///
/// ## Rules
/// - Must not be empty
/// - Exactly 4 characters
/// - Only digits and uppercase ASCII letters
///
/// ## Example
/// ```rust
/// use fiscal_core::validation::validate_place_code;
///
/// assert!(validate_place_code("L378").is_ok());
/// assert!(validate_place_code("").is_err());
/// assert!(validate_place_code("A26 ").is_err());
/// ```
pub fn validate_place_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "place code".to_string(),
        });
    }

    if code.len() != 4 {
        return Err(ValidationError::InvalidFormat {
            field: "place code".to_string(),
            reason: format!("must be 4 characters, got {}", code.chars().count()),
        });
    }

    if !code
        .bytes()
        .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    {
        return Err(ValidationError::InvalidFormat {
            field: "place code".to_string(),
            reason: "must contain only digits and uppercase letters".to_string(),
        });
    }

    Ok(())
}

/// Validates a province code.
///
/// ## Rules
/// - Must not be empty
/// - Exactly 2 uppercase ASCII letters
pub fn validate_province_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "province code".to_string(),
        });
    }

    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat {
            field: "province code".to_string(),
            reason: "must be 2 uppercase letters".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
