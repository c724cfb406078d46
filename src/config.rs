//! Tunable physics parameters captured before each playthrough.

use std::fmt;

use thiserror::Error;

pub const DEFAULT_GRAVITY: f64 = 1.0;
pub const DEFAULT_PIPE_SPEED: f64 = 2.0;

/// The two user-editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Gravity,
    Speed,
}

impl ConfigField {
    pub const ALL: [ConfigField; 2] = [ConfigField::Gravity, ConfigField::Speed];

    pub fn label(&self) -> &'static str {
        match self {
            ConfigField::Gravity => "GRAVITY",
            ConfigField::Speed => "SPEED",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigField::Gravity => f.write_str("gravity"),
            ConfigField::Speed => f.write_str("speed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field}: {input:?} is not a number")]
    InvalidNumber { field: ConfigField, input: String },
    #[error("{field} must be finite")]
    NonFinite { field: ConfigField },
    #[error("speed must be greater than zero, got {0}")]
    NonPositiveSpeed(f64),
}

/// Per-frame vertical acceleration and per-frame horizontal scroll.
///
/// Read once when a playthrough starts and held immutable until game over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub gravity: f64,
    pub pipe_speed: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            pipe_speed: DEFAULT_PIPE_SPEED,
        }
    }
}

impl Config {
    /// Parse `value` and store it into `field`. On error the previous value is kept.
    pub fn set(&mut self, field: ConfigField, value: &str) -> Result<(), ConfigError> {
        let parsed = parse_field(field, value)?;
        match field {
            ConfigField::Gravity => self.gravity = parsed,
            ConfigField::Speed => self.pipe_speed = parsed,
        }
        Ok(())
    }

    pub fn get(&self, field: ConfigField) -> f64 {
        match field {
            ConfigField::Gravity => self.gravity,
            ConfigField::Speed => self.pipe_speed,
        }
    }
}

/// Validate one field's text. Gravity may be zero or negative; speed may not.
pub fn parse_field(field: ConfigField, value: &str) -> Result<f64, ConfigError> {
    let v: f64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            field,
            input: value.to_string(),
        })?;
    if !v.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if field == ConfigField::Speed && v <= 0.0 {
        return Err(ConfigError::NonPositiveSpeed(v));
    }
    Ok(v)
}
