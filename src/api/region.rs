//! Map region fitting for marker sets
//!
//! Computes the camera region that covers a set of markers: the center of
//! their geographic bounding box plus East/North spans in meters, measured
//! through the local tangent plane. A span floor keeps single-marker
//! regions renderable instead of collapsing to a point.

use serde::{Deserialize, Serialize};

use crate::algorithms::local_plane::geodetic_to_local;
use crate::core::GeoPoint;

/// Default floor for a fitted span (m)
pub const DEFAULT_MIN_SPAN_METERS: f64 = 50.0;

/// A camera region covering a set of markers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: GeoPoint,
    pub east_span_meters: f64,
    pub north_span_meters: f64,
}

/// Fit a region around `points` with the default span floor.
pub fn fit_region(points: &[GeoPoint]) -> Option<MapRegion> {
    fit_region_with_floor(points, DEFAULT_MIN_SPAN_METERS)
}

/// Fit a region around `points`, flooring both spans at `min_span_meters`.
///
/// Returns `None` for an empty slice.
pub fn fit_region_with_floor(points: &[GeoPoint], min_span_meters: f64) -> Option<MapRegion> {
    let first = *points.first()?;

    let mut min_lat = first.latitude;
    let mut max_lat = first.latitude;
    let mut min_lon = first.longitude;
    let mut max_lon = first.longitude;
    for point in &points[1..] {
        min_lat = min_lat.min(point.latitude);
        max_lat = max_lat.max(point.latitude);
        min_lon = min_lon.min(point.longitude);
        max_lon = max_lon.max(point.longitude);
    }

    let center = GeoPoint::new((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0);

    // Spans measured through the local plane so they come out in meters
    let low = geodetic_to_local(GeoPoint::new(min_lat, min_lon), center);
    let high = geodetic_to_local(GeoPoint::new(max_lat, max_lon), center);
    let extent = high - low;

    Some(MapRegion {
        center,
        east_span_meters: extent.x.abs().max(min_span_meters),
        north_span_meters: extent.y.abs().max(min_span_meters),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_marker_set_has_no_region() {
        assert!(fit_region(&[]).is_none());
    }

    #[test]
    fn test_single_marker_gets_span_floor() {
        let point = GeoPoint::new(25.2048, 55.2708);
        let region = fit_region(&[point]).unwrap();

        assert_eq!(region.center, point);
        assert_eq!(region.east_span_meters, DEFAULT_MIN_SPAN_METERS);
        assert_eq!(region.north_span_meters, DEFAULT_MIN_SPAN_METERS);
    }

    #[test]
    fn test_spans_cover_the_extremes() {
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.01, 0.01),
        ];

        let region = fit_region(&points).unwrap();
        assert!((region.center.latitude - 0.005).abs() < 1e-12);
        assert!((region.center.longitude - 0.005).abs() < 1e-12);

        // 0.01 degrees is roughly 1.1 km in both directions near the equator
        assert!((region.north_span_meters - 1_111.32).abs() < 5.0);
        assert!((region.east_span_meters - 1_113.2).abs() < 5.0);
    }

    #[test]
    fn test_custom_floor_applies() {
        let point = GeoPoint::new(48.0, 11.0);
        let region = fit_region_with_floor(&[point], 200.0).unwrap();

        assert_eq!(region.east_span_meters, 200.0);
        assert_eq!(region.north_span_meters, 200.0);
    }
}
