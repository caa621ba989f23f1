//! # fiscal-core: Italian Fiscal Code Decoding
//!
//! Decodes and validates Italian fiscal codes (codice fiscale) as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Decoding Pipeline                                │
//! │                                                                         │
//! │   raw string                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────┐   ┌──────────┐   ┌─────────────┐   ┌──────────────────┐   │
//! │  │  text   │──►│ omocode  │──►│ fiscal_code │──►│    validation    │   │
//! │  │ clean() │   │normalize │   │ FiscalCode  │   │ is_valid_for()   │   │
//! │  └─────────┘   └────┬─────┘   └──────┬──────┘   └────────┬─────────┘   │
//! │                     │                │                   │             │
//! │                     ▼                ▼                   ▼             │
//! │               ┌──────────┐     ┌───────────┐       ┌──────────┐        │
//! │               │ checksum │     │PlaceLookup│       │  names   │        │
//! │               └────┬─────┘     │ (caller)  │       └──────────┘        │
//! │                    ▼           └───────────┘                            │
//! │               ┌──────────┐                                              │
//! │               │  tables  │   NO I/O • NO GLOBAL MUTABLE STATE          │
//! │               └──────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`fiscal_code`] - The decoded [`FiscalCode`] record
//! - [`validation`] - Validity checks and identity matching
//! - [`types`] - Gender, Place, Province, place lookups
//! - [`omocode`] - Omocode letter substitution
//! - [`checksum`] - Check character computation
//! - [`names`] - Surname and given-name codes
//! - [`text`] - Input cleaning
//! - [`tables`] - Constant tables from the standard
//! - [`config`] - Decoder configuration
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input and configuration, same record
//! 2. **No I/O**: birth places come from a caller-supplied [`PlaceLookup`]
//! 3. **Partial Decoding**: an undecodable field is `None`, never an error
//! 4. **Explicit Errors**: only an empty input fails to produce a record
//!
//! ## Example Usage
//!
//! ```rust
//! use fiscal_core::{FiscalCode, Place, PlaceTable};
//!
//! let places = PlaceTable::from_places([
//!     Place::new("H282", "Rieti", "RI").unwrap(),
//! ])
//! .unwrap();
//!
//! // Omocode: S and U stand for 6 and 8
//! let code = FiscalCode::parse("CHRVGN94PS4H2U2F", &places).unwrap();
//!
//! assert!(code.is_omocode());
//! assert_eq!(code.birth_place().unwrap().name, "Rieti");
//! assert!(code.is_valid());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checksum;
pub mod config;
pub mod error;
pub mod fiscal_code;
pub mod names;
pub mod omocode;
pub mod tables;
pub mod text;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fiscal_core::FiscalCode` instead of
// `use fiscal_core::fiscal_code::FiscalCode`

pub use config::DecoderConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use fiscal_code::FiscalCode;
pub use types::*;
pub use validation::Identity;
