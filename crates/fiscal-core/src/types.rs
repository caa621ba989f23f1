//! # Domain Types
//!
//! Reference and identity types used throughout fiscal-core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Gender      │   │      Place      │   │    Province     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Male   (1-31)  │   │  code  "L378"   │   │  code  "TN"     │       │
//! │  │  Female (41-71) │   │  name           │   │  name           │       │
//! │  └─────────────────┘   │  province "TN"  │   └─────────────────┘       │
//! │                        └────────┬────────┘                              │
//! │                                 │ resolved through                      │
//! │                        ┌────────▼────────┐                              │
//! │                        │   PlaceLookup   │◄── PlaceTable, LookupFn      │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Places and provinces are owned by the caller. A decoded
//! [`crate::FiscalCode`] keeps its own copy of the place it resolved.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{validate_place_code, validate_province_code, ValidationResult};

// =============================================================================
// Gender
// =============================================================================

/// Gender as encoded in the day-of-month field.
///
/// Female codes add 40 to the birth day, so days 41..=71 are female and
/// 1..=31 are male.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Day field in 1..=31.
    Male,
    /// Day field in 41..=71.
    Female,
}

impl Gender {
    /// Offset added to the day of month for female codes.
    pub const FEMALE_DAY_OFFSET: u32 = 40;

    /// Decodes the gender from the raw two-digit day field.
    pub fn from_day_field(day: u32) -> Option<Self> {
        match day {
            1..=31 => Some(Gender::Male),
            41..=71 => Some(Gender::Female),
            _ => None,
        }
    }

    /// Single-letter form used on Italian documents.
    pub fn letter(&self) -> char {
        match self {
            Gender::Male => 'M',
            Gender::Female => 'F',
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            other => Err(ValidationError::InvalidFormat {
                field: "gender".to_string(),
                reason: format!("unknown gender '{}', expected M or F", other),
            }),
        }
    }
}

// =============================================================================
// Place
// =============================================================================

/// A birth place: an Italian municipality or a foreign country.
///
/// Foreign countries use codes starting with `Z` (e.g. `Z330` Morocco).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Place {
    /// Four-character cadastral code, e.g. `L378`.
    pub code: String,

    /// Display name, e.g. `Trento`.
    pub name: String,

    /// Two-letter province code, e.g. `TN`.
    pub province: String,
}

impl Place {
    /// Creates a place after validating its codes.
    ///
    /// Codes are trimmed and uppercased before validation.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        province: impl Into<String>,
    ) -> ValidationResult<Self> {
        let code = code.into().trim().to_uppercase();
        let province = province.into().trim().to_uppercase();
        validate_place_code(&code)?;
        validate_province_code(&province)?;

        Ok(Place {
            code,
            name: name.into(),
            province,
        })
    }

    /// Whether this is a foreign country rather than an Italian municipality.
    pub fn is_foreign(&self) -> bool {
        self.code.starts_with('Z')
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.name, self.province, self.code)
    }
}

// =============================================================================
// Province
// =============================================================================

/// An Italian province, e.g. `TN` Trento.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Province {
    /// Two-letter code.
    pub code: String,

    /// Display name.
    pub name: String,
}

impl Province {
    /// Creates a province after validating its code.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> ValidationResult<Self> {
        let code = code.into().trim().to_uppercase();
        validate_province_code(&code)?;

        Ok(Province {
            code,
            name: name.into(),
        })
    }
}

// =============================================================================
// Place Lookup
// =============================================================================

/// Resolves four-character place codes to places.
///
/// This is the only collaborator the decoder needs. Implementations should
/// be side-effect free. Returning `None` simply leaves the decoded birth place
/// absent.
///
/// ## Implementations
/// - [`PlaceTable`] - in-memory table
/// - [`LookupFn`] - wraps a `Fn(&str) -> Option<Place>` closure
/// - `&T`, `Box<T>` and `Arc<T>` for any lookup `T`
pub trait PlaceLookup {
    /// Returns the place with the given code, if known.
    fn place_by_code(&self, code: &str) -> Option<Place>;
}

impl<T: PlaceLookup + ?Sized> PlaceLookup for &T {
    fn place_by_code(&self, code: &str) -> Option<Place> {
        (**self).place_by_code(code)
    }
}

impl<T: PlaceLookup + ?Sized> PlaceLookup for Box<T> {
    fn place_by_code(&self, code: &str) -> Option<Place> {
        (**self).place_by_code(code)
    }
}

impl<T: PlaceLookup + ?Sized> PlaceLookup for Arc<T> {
    fn place_by_code(&self, code: &str) -> Option<Place> {
        (**self).place_by_code(code)
    }
}

/// Adapts a closure into a [`PlaceLookup`].
///
/// ```rust
/// use fiscal_core::{LookupFn, Place, PlaceLookup};
///
/// let lookup = LookupFn(|code: &str| {
///     (code == "L378").then(|| Place::new("L378", "Trento", "TN").unwrap())
/// });
/// assert_eq!(lookup.place_by_code("L378").unwrap().name, "Trento");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LookupFn<F>(pub F);

impl<F> PlaceLookup for LookupFn<F>
where
    F: Fn(&str) -> Option<Place>,
{
    fn place_by_code(&self, code: &str) -> Option<Place> {
        (self.0)(code)
    }
}

/// A lookup that knows no places.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlaces;

impl PlaceLookup for NoPlaces {
    fn place_by_code(&self, _code: &str) -> Option<Place> {
        None
    }
}

// =============================================================================
// Place Table
// =============================================================================

/// In-memory place and province registry.
///
/// Filled by the caller from whatever source it owns (database, bundled
/// data, fixtures). Entries are kept sorted by code.
///
/// ## Example
/// ```rust
/// use fiscal_core::{Place, PlaceLookup, PlaceTable};
///
/// let mut table = PlaceTable::new();
/// table.insert_place(Place::new("L378", "Trento", "TN").unwrap()).unwrap();
///
/// assert_eq!(table.place_by_code("L378").unwrap().name, "Trento");
/// assert!(table.place_by_code("Z999").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlaceTable {
    places: BTreeMap<String, Place>,
    provinces: BTreeMap<String, Province>,
}

impl PlaceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a list of places.
    pub fn from_places(places: impl IntoIterator<Item = Place>) -> ValidationResult<Self> {
        let mut table = Self::new();
        for place in places {
            table.insert_place(place)?;
        }
        Ok(table)
    }

    /// Adds a place. Fails on malformed codes or a duplicate place code.
    pub fn insert_place(&mut self, place: Place) -> ValidationResult<()> {
        validate_place_code(&place.code)?;
        validate_province_code(&place.province)?;

        if self.places.contains_key(&place.code) {
            return Err(ValidationError::Duplicate {
                field: "place code".to_string(),
                value: place.code,
            });
        }

        self.places.insert(place.code.clone(), place);
        Ok(())
    }

    /// Adds a province. Fails on a malformed or duplicate province code.
    pub fn insert_province(&mut self, province: Province) -> ValidationResult<()> {
        validate_province_code(&province.code)?;

        if self.provinces.contains_key(&province.code) {
            return Err(ValidationError::Duplicate {
                field: "province code".to_string(),
                value: province.code,
            });
        }

        self.provinces.insert(province.code.clone(), province);
        Ok(())
    }

    /// Borrows the place with the given code.
    pub fn get(&self, code: &str) -> Option<&Place> {
        self.places.get(code)
    }

    /// All places, ordered by code.
    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.places.values()
    }

    /// Places belonging to the given province.
    pub fn places_in_province<'a>(&'a self, province: &'a str) -> impl Iterator<Item = &'a Place> {
        self.places.values().filter(move |p| p.province == province)
    }

    /// All provinces, ordered by code.
    pub fn provinces(&self) -> impl Iterator<Item = &Province> {
        self.provinces.values()
    }

    /// The province with the given code.
    pub fn province(&self, code: &str) -> Option<&Province> {
        self.provinces.get(code)
    }

    /// Number of places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the table has no places.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl PlaceLookup for PlaceTable {
    fn place_by_code(&self, code: &str) -> Option<Place> {
        self.get(code).cloned()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
