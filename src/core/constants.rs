//! Physical constants and display thresholds

/// Mean Earth radius under the spherical approximation (m)
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Distances below this render as zero; sorting still uses the raw value (m)
pub const DISPLAY_ZERO_METERS: f64 = 1e-6;
