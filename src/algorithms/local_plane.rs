//! Local tangent plane approximation
//!
//! Converts geographic coordinates to an East/North meter plane around a
//! reference point. The meters-per-degree approximation is only valid for
//! small areas (a campus, a city district), which is the scale the map
//! screens operate at.

use nalgebra::Vector2;

use crate::core::GeoPoint;

// Approximate meters per degree of arc; longitude scales with cos(lat)
const METERS_PER_DEG_LAT: f64 = 111_132.0;
const METERS_PER_DEG_LON_EQUATOR: f64 = 111_320.0;

/// Project a point onto the local East/North plane centered on `reference`.
///
/// Returns meters east (x) and north (y) of the reference.
pub fn geodetic_to_local(point: GeoPoint, reference: GeoPoint) -> Vector2<f64> {
    let lat0_rad = reference.latitude.to_radians();
    let east = (point.longitude - reference.longitude) * METERS_PER_DEG_LON_EQUATOR * lat0_rad.cos();
    let north = (point.latitude - reference.latitude) * METERS_PER_DEG_LAT;

    Vector2::new(east, north)
}

/// Inverse of [`geodetic_to_local`] for the same reference point.
pub fn local_to_geodetic(local: Vector2<f64>, reference: GeoPoint) -> GeoPoint {
    let lat0_rad = reference.latitude.to_radians();
    let meters_per_deg_lon = METERS_PER_DEG_LON_EQUATOR * lat0_rad.cos();

    GeoPoint {
        latitude: reference.latitude + local.y / METERS_PER_DEG_LAT,
        longitude: reference.longitude + local.x / meters_per_deg_lon,
    }
}
