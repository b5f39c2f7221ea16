//! Geographic coordinate type and spherical-earth geodesy.
//!
//! Everything here uses `f64` and a spherical earth of radius
//! [`EARTH_RADIUS_KM`].  Angles passed between functions are radians; the
//! `Coordinate` fields themselves are degrees.

use std::fmt;

/// Mean Earth radius used by every formula in this module, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude:  f64,
    pub longitude: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// `true` when both fields are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Straight-line blend of latitude and longitude.
    ///
    /// This is a planar lerp on the raw degrees, not a great-circle slerp.
    /// `fraction` is used as given; callers clamp it.
    #[inline]
    pub fn lerp(self, other: Coordinate, fraction: f64) -> Coordinate {
        Coordinate {
            latitude:  self.latitude + (other.latitude - self.latitude) * fraction,
            longitude: self.longitude + (other.longitude - self.longitude) * fraction,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Haversine great-circle distance between `a` and `b`, kilometres.
///
/// Never fails.  Identical points give exactly `0.0`.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Initial great-circle bearing from `a` to `b`, radians clockwise from north
/// in `(-π, π]`.
///
/// The direction is undefined for `a == b`; this returns `0.0` (due north).
pub fn bearing_rad(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    y.atan2(x)
}

/// The point reached from `origin` after `distance_km` along `bearing_rad`.
///
/// Spherical direct problem.  The returned longitude is normalised to
/// `[-180, 180]`.
pub fn destination_point(origin: Coordinate, bearing_rad: f64, distance_km: f64) -> Coordinate {
    let delta = distance_km / EARTH_RADIUS_KM;
    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing_rad.cos()).asin();
    let lon2 = lon1
        + (bearing_rad.sin() * delta.sin() * lat1.cos())
            .atan2(delta.cos() - lat1.sin() * lat2.sin());

    Coordinate {
        latitude:  lat2.to_degrees(),
        longitude: normalize_lon(lon2.to_degrees()),
    }
}

fn normalize_lon(lon: f64) -> f64 {
    let wrapped = (lon + 540.0).rem_euclid(360.0) - 180.0;
    // rem_euclid maps +180 to -180; keep the caller's sign at the seam.
    if wrapped == -180.0 && lon > 0.0 { 180.0 } else { wrapped }
}
