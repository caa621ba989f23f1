//! # Decoder Configuration
//!
//! Settings that influence how a fiscal code is decoded.
//!
//! ## Century Pivot
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Two-digit birth year YY, pivot year P (default: current year)         │
//! │                                                                         │
//! │    2000 + YY >= P   →  19YY   (a future birth year is impossible)      │
//! │    2000 + YY <  P   →  20YY                                            │
//! │                                                                         │
//! │  P = 2024:  "90" → 1990    "23" → 2023    "24" → 1924                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration Format
//! ```toml
//! [decoder]
//! pivot_year = 2024  # omit to follow the clock
//! ```
//!
//! The crate never reads files or the environment. Callers hand the text
//! over to [`DecoderConfig::from_toml_str`].

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Earliest accepted pivot year.
const MIN_PIVOT_YEAR: i32 = 1900;

/// Latest accepted pivot year.
const MAX_PIVOT_YEAR: i32 = 2999;

// =============================================================================
// Decoder Configuration
// =============================================================================

/// Decoding settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Year used to expand two-digit birth years.
    /// `None` uses the current calendar year.
    #[serde(default)]
    pub pivot_year: Option<i32>,
}

/// Top-level layout of the configuration text.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    decoder: DecoderConfig,
}

impl DecoderConfig {
    /// Configuration that follows the clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with a fixed pivot year, for reproducible decoding.
    pub fn with_pivot_year(year: i32) -> Self {
        DecoderConfig {
            pivot_year: Some(year),
        }
    }

    /// Parses and validates a `[decoder]` TOML table.
    ///
    /// A missing table or key falls back to defaults.
    ///
    /// ## Example
    /// ```rust
    /// use fiscal_core::DecoderConfig;
    ///
    /// let config = DecoderConfig::from_toml_str("[decoder]\npivot_year = 2024").unwrap();
    /// assert_eq!(config.pivot_year, Some(2024));
    ///
    /// assert!(DecoderConfig::from_toml_str("[decoder]\npivot_year = 12").is_err());
    /// ```
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        let config = file.decoder;
        config.validate()?;

        debug!(pivot_year = ?config.pivot_year, "Decoder config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(year) = self.pivot_year {
            if !(MIN_PIVOT_YEAR..=MAX_PIVOT_YEAR).contains(&year) {
                return Err(CoreError::InvalidConfig(format!(
                    "pivot_year must be between {} and {}, got {}",
                    MIN_PIVOT_YEAR, MAX_PIVOT_YEAR, year
                )));
            }
        }

        Ok(())
    }

    /// The pivot year in effect: the configured one or the current year.
    pub fn resolved_pivot_year(&self) -> i32 {
        self.pivot_year.unwrap_or_else(|| Local::now().year())
    }

    /// Expands a two-digit year (0..=99) to a full year.
    pub fn expand_year(&self, two_digit_year: i32) -> i32 {
        if two_digit_year + 2000 >= self.resolved_pivot_year() {
            1900 + two_digit_year
        } else {
            2000 + two_digit_year
        }
    }
}
