//! The straight-line route between two coordinates.

use tp_core::{bearing_rad, destination_point, distance_km, Coordinate};

/// Geometry of one drive, computed once when a run starts.
///
/// `total_distance_km` is fixed for the life of the value; nothing mutates a
/// `RoutePath` after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutePath {
    start:             Coordinate,
    end:               Coordinate,
    total_distance_km: f64,
}

impl RoutePath {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self {
            start,
            end,
            total_distance_km: distance_km(start, end),
        }
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coordinate {
        self.end
    }

    #[inline]
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Fraction of the route covered after `traveled_km`, in `[0.0, 1.0]`.
    ///
    /// A zero-length route is always fully covered.
    pub fn fraction(&self, traveled_km: f64) -> f64 {
        if self.total_distance_km <= 0.0 {
            return 1.0;
        }
        (traveled_km / self.total_distance_km).clamp(0.0, 1.0)
    }

    /// `true` once `traveled_km` reaches the end of the route.
    #[inline]
    pub fn is_arrived(&self, traveled_km: f64) -> bool {
        traveled_km >= self.total_distance_km
    }

    /// Coordinate after `traveled_km` along the route (linear lat/lon blend).
    pub fn interpolate(&self, traveled_km: f64) -> Coordinate {
        self.start.lerp(self.end, self.fraction(traveled_km))
    }

    /// Initial bearing of the route, radians.  `0.0` for a zero-length route.
    #[inline]
    pub fn bearing_rad(&self) -> f64 {
        bearing_rad(self.start, self.end)
    }

    /// The point `distance_km` beyond `end`, continuing along the start→end
    /// bearing.
    pub fn overshoot(&self, distance_km: f64) -> Coordinate {
        destination_point(self.end, self.bearing_rad(), distance_km)
    }
}
