//! The value pushed to a location sink each tick.

use std::fmt;

use crate::Coordinate;

/// Horizontal accuracy reported when the caller doesn't choose one, metres.
pub const DEFAULT_ACCURACY_M: f64 = 1.0;

/// A reported location fix.
///
/// Ephemeral: the engine builds one per emission and does not keep it beyond
/// the tick (apart from the "latest position" cache).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub latitude:    f64,
    pub longitude:   f64,
    pub accuracy_m:  f64,
}

impl Position {
    #[inline]
    pub fn new(latitude: f64, longitude: f64, accuracy_m: f64) -> Self {
        Self { latitude, longitude, accuracy_m }
    }

    /// Wrap `coord` with the given accuracy.
    #[inline]
    pub fn at(coord: Coordinate, accuracy_m: f64) -> Self {
        Self::new(coord.latitude, coord.longitude, accuracy_m)
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl From<Coordinate> for Position {
    fn from(coord: Coordinate) -> Self {
        Self::at(coord, DEFAULT_ACCURACY_M)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}) ±{:.2}m", self.latitude, self.longitude, self.accuracy_m)
    }
}
