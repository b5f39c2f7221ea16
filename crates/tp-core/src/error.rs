//! Configuration validation errors.
//!
//! Sub-crates keep their own error enums and wrap `ConfigError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Why a [`SimulationConfig`][crate::SimulationConfig] was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} = {value} is out of range")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("speed must be a positive number of km/h, got {0}")]
    InvalidSpeed(f64),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
