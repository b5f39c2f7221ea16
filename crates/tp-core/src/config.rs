//! Run and engine configuration.

use std::time::Duration;

use crate::position::DEFAULT_ACCURACY_M;
use crate::{ConfigError, ConfigResult, Coordinate};

// ── SimulationConfig ─────────────────────────────────────────────────────────

/// One drive: where from, where to, how fast.
///
/// Built by the caller (or loaded from a profile) and handed to the engine on
/// start.  The engine never mutates it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    pub start:     Coordinate,
    pub end:       Coordinate,
    /// Constant travel speed, km/h.  Must be `> 0`.
    pub speed_kmh: f64,
}

impl SimulationConfig {
    pub fn new(start: Coordinate, end: Coordinate, speed_kmh: f64) -> Self {
        Self { start, end, speed_kmh }
    }

    /// Check every numeric field.
    ///
    /// Non-finite values are reported before range problems so a `NaN`
    /// latitude reads as `NonFinite`, not `OutOfRange`.
    pub fn validate(&self) -> ConfigResult<()> {
        check_coordinate(self.start, "start.latitude", "start.longitude")?;
        check_coordinate(self.end, "end.latitude", "end.longitude")?;

        if !self.speed_kmh.is_finite() || self.speed_kmh <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed_kmh));
        }
        Ok(())
    }

    /// Distance covered in one second of simulated travel, km.
    #[inline]
    pub fn km_per_second(&self) -> f64 {
        self.speed_kmh / 3_600.0
    }
}

fn check_coordinate(c: Coordinate, lat: &'static str, lon: &'static str) -> ConfigResult<()> {
    if !c.is_finite() {
        let field = if c.latitude.is_finite() { lon } else { lat };
        return Err(ConfigError::NonFinite { field });
    }
    if !(-90.0..=90.0).contains(&c.latitude) {
        return Err(ConfigError::OutOfRange { field: lat, value: c.latitude });
    }
    if !(-180.0..=180.0).contains(&c.longitude) {
        return Err(ConfigError::OutOfRange { field: lon, value: c.longitude });
    }
    Ok(())
}

// ── EngineConfig ─────────────────────────────────────────────────────────────

/// Engine tunables.  The tick period is deliberately absent: it is fixed at
/// [`TICK_PERIOD`][crate::TICK_PERIOD].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Accuracy attached to every emitted position, metres.  Default: 1.0.
    pub accuracy_m: f64,

    /// How far past the destination the final position lands, km.
    /// Default: 0.02 (20 m).
    pub overshoot_km: f64,

    /// Wait before each best-effort re-send of the final position.
    /// Default: 200 ms.
    pub settle_delay: Duration,

    /// How many times the final position is re-sent after completion.
    /// `0` disables the re-send.  Default: 1.
    pub settle_repushes: u32,
}

impl EngineConfig {
    /// Reject negative or non-finite distances.
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [("accuracy_m", self.accuracy_m), ("overshoot_km", self.overshoot_km)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            accuracy_m:      DEFAULT_ACCURACY_M,
            overshoot_km:    0.02,
            settle_delay:    Duration::from_millis(200),
            settle_repushes: 1,
        }
    }
}
