//! Attendance zone checks
//!
//! A check-in is accepted when the reported position falls inside the zone
//! radius. The boundary itself counts as inside.

use serde::{Deserialize, Serialize};

use crate::algorithms::haversine::distance_meters;
use crate::core::GeoPoint;

/// Circular check-in zone around an attendance center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceZone {
    pub id: String,
    pub name: String,
    pub center: GeoPoint,
    pub radius_meters: f64,
}

/// Verdict of evaluating a position against a zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZoneCheck {
    Inside {
        distance_meters: f64,
    },
    Outside {
        distance_meters: f64,
        /// How far past the boundary the position is
        overshoot_meters: f64,
    },
}

impl GeofenceZone {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        center: GeoPoint,
        radius_meters: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            center,
            radius_meters,
        }
    }

    /// Whether `point` lies inside the zone. A non-positive radius never
    /// contains anything.
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.radius_meters > 0.0 && distance_meters(self.center, point) <= self.radius_meters
    }

    /// Distance verdict for `point`, with the remaining gap when outside.
    pub fn evaluate(&self, point: GeoPoint) -> ZoneCheck {
        let distance = distance_meters(self.center, point);
        if self.radius_meters > 0.0 && distance <= self.radius_meters {
            ZoneCheck::Inside {
                distance_meters: distance,
            }
        } else {
            ZoneCheck::Outside {
                distance_meters: distance,
                overshoot_meters: (distance - self.radius_meters.max(0.0)).max(0.0),
            }
        }
    }
}

/// Index and center distance of the closest zone, if any zones exist.
///
/// Equidistant centers resolve to the earliest zone in the slice.
pub fn nearest_zone(point: GeoPoint, zones: &[GeofenceZone]) -> Option<(usize, f64)> {
    zones
        .iter()
        .enumerate()
        .map(|(index, zone)| (index, distance_meters(zone.center, point)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(id: &str, latitude: f64, longitude: f64, radius_meters: f64) -> GeofenceZone {
        GeofenceZone::new(id, format!("Zone {}", id), GeoPoint::new(latitude, longitude), radius_meters)
    }

    #[test]
    fn test_center_is_inside() {
        let z = zone("hq", 25.2048, 55.2708, 500.0);
        assert!(z.contains(z.center));

        match z.evaluate(z.center) {
            ZoneCheck::Inside { distance_meters } => assert_eq!(distance_meters, 0.0),
            other => panic!("expected inside verdict, got {:?}", other),
        }
    }

    #[test]
    fn test_point_within_radius_is_inside() {
        let z = zone("hq", 25.2048, 55.2708, 500.0);
        // ~300 m north of the center
        let nearby = GeoPoint::new(25.2048 + 0.0027, 55.2708);

        assert!(z.contains(nearby));
    }

    #[test]
    fn test_point_past_radius_reports_overshoot() {
        let z = zone("hq", 25.2048, 55.2708, 500.0);
        // ~1 km north of the center
        let away = GeoPoint::new(25.2048 + 0.009, 55.2708);

        assert!(!z.contains(away));
        match z.evaluate(away) {
            ZoneCheck::Outside {
                distance_meters,
                overshoot_meters,
            } => {
                assert!(distance_meters > 900.0 && distance_meters < 1_100.0);
                assert!((overshoot_meters - (distance_meters - 500.0)).abs() < 1e-9);
            }
            other => panic!("expected outside verdict, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_radius_never_contains() {
        let degenerate = zone("pin", 25.0, 55.0, 0.0);
        assert!(!degenerate.contains(degenerate.center));

        match degenerate.evaluate(degenerate.center) {
            ZoneCheck::Outside {
                distance_meters,
                overshoot_meters,
            } => {
                assert_eq!(distance_meters, 0.0);
                assert_eq!(overshoot_meters, 0.0);
            }
            other => panic!("expected outside verdict, got {:?}", other),
        }
    }

    #[test]
    fn test_nearest_zone_prefers_earliest_on_ties() {
        let point = GeoPoint::new(0.0, 0.0);
        let zones = vec![
            zone("west", 0.0, -1.0, 100.0),
            zone("east", 0.0, 1.0, 100.0),
        ];

        let (index, distance) = nearest_zone(point, &zones).unwrap();
        assert_eq!(index, 0);
        assert!(distance > 0.0);

        assert!(nearest_zone(point, &[]).is_none());
    }
}
