//! Great-circle distance on a spherical Earth
//!
//! Haversine formula against the mean-radius sphere. Inputs are taken as
//! given: coordinates outside the geographic ranges produce a finite but
//! geographically meaningless result rather than an error, matching the
//! permissive contract of the calling search paths.

use crate::core::{GeoPoint, EARTH_RADIUS_METERS};

/// Great-circle surface distance between two points, in meters.
///
/// Pure and side-effect free; identical points yield exactly zero.
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1] near antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

impl GeoPoint {
    /// Distance from this point to `other`, in meters.
    pub fn distance_to(&self, other: GeoPoint) -> f64 {
        distance_meters(*self, other)
    }
}
