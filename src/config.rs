//! Configuration loaded once at startup.
//!
//! A [`Config`] is plain data with serde support so hosts can ship it as
//! JSON. Validation happens exactly once, when the trainer is constructed;
//! after that the configuration is immutable for the session.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Axis;

/// Default grid dimension (a classic 9x9 times table).
pub const DEFAULT_GRID_SIZE: u32 = 9;

// =============================================================================
// Config
// =============================================================================

/// Startup configuration.
///
/// Unknown JSON fields are ignored; missing fields fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid dimension N. Factors are selectable in `1..=grid_size`.
    pub grid_size: u32,
    /// Initial row-axis selection. Must lie in `1..=grid_size`.
    pub initial_multiplicand: u32,
    /// Initial column-axis selection. Must lie in `1..=grid_size`.
    pub initial_multiplier: u32,
    /// Whether the audio port should make any noise at all.
    pub sound_enabled: bool,
    /// Opaque to the core: handed to the hosting loop as its poll cadence.
    pub animation_duration_ms: u64,
    /// Answer-toggle label while the answer is visible.
    pub label_hide_answer: String,
    /// Answer-toggle label while the answer is hidden.
    pub label_show_answer: String,
    /// Multiplicand accent color (RGB).
    pub primary_color: (u8, u8, u8),
    /// Multiplier accent color (RGB).
    pub secondary_color: (u8, u8, u8),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            initial_multiplicand: 1,
            initial_multiplier: 1,
            sound_enabled: true,
            animation_duration_ms: 120,
            label_hide_answer: "Hide answer".to_string(),
            label_show_answer: "Show answer".to_string(),
            primary_color: (37, 99, 235),
            secondary_color: (236, 72, 153),
        }
    }
}

impl Config {
    /// Check the numeric invariants.
    ///
    /// The grid must have at least one cell and both initial factors must
    /// be selectable on it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        for (axis, value) in [
            (Axis::Row, self.initial_multiplicand),
            (Axis::Column, self.initial_multiplier),
        ] {
            if value < 1 || value > self.grid_size {
                return Err(ConfigError::FactorOutOfRange {
                    axis,
                    value,
                    grid_size: self.grid_size,
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}

// =============================================================================
// ConfigError
// =============================================================================

/// Why a configuration was rejected.
#[derive(Debug)]
pub enum ConfigError {
    /// `grid_size` was zero.
    EmptyGrid,
    /// An initial factor fell outside `1..=grid_size`.
    FactorOutOfRange {
        /// Which factor was out of range.
        axis: Axis,
        value: u32,
        grid_size: u32,
    },
    /// The JSON source did not parse as a configuration.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid_size must be at least 1"),
            Self::FactorOutOfRange {
                axis,
                value,
                grid_size,
            } => write!(
                f,
                "initial {} {value} is outside 1..={grid_size}",
                axis.factor_name()
            ),
            Self::Parse(e) => write!(f, "invalid configuration JSON: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
