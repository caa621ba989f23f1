//! # Error Types
//!
//! Domain-specific error types for fiscal-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fiscal-core errors (this file)                                        │
//! │  ├── CoreError        - Caller contract violations, bad config         │
//! │  └── ValidationError  - Reference data (places/provinces) rejected     │
//! │                                                                         │
//! │  NOT errors (data states on FiscalCode)                                │
//! │  ├── Undecodable          - a sub-field is None                        │
//! │  └── StructurallyInvalid  - every field is None, is_valid() == false   │
//! │                                                                         │
//! │  PlaceTable builders: ValidationError.  Decoding: CoreError.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, code, etc.)
//! 3. Expected decode failures are `Option::None`, never an `Err`

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core decoding errors.
///
/// Only contract violations end up here. A code that cannot be decoded is
/// still a successfully constructed [`crate::FiscalCode`] with absent fields.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The raw fiscal code was missing or empty.
    ///
    /// ## When This Occurs
    /// - `FiscalCode::parse("")`
    /// - `FiscalCode::parse_opt(None)`
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Decoder configuration failed validation.
    #[error("Invalid decoder config: {0}")]
    InvalidConfig(String),

    /// Decoder configuration text is not valid TOML.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Reference data validation errors.
///
/// Raised when places or provinces handed to a [`crate::PlaceTable`] are
/// malformed or clash with existing entries.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., place code not 4 characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two places with the same code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
