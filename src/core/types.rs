//! Core data types for the proximity search core

use serde::{Deserialize, Serialize};

/// Geographic coordinate in decimal degrees
///
/// Plain value type: equality is by value and copies are cheap. The math
/// paths accept any finite coordinates; range screening lives in the
/// validation module for callers that want it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// An entity with a known position, taken from a live location feed
///
/// Snapshots are caller-owned; the search paths only read them. The
/// metadata payload is carried verbatim and never inspected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedEntity {
    /// Unique identifier within one snapshot
    pub id: String,
    pub position: GeoPoint,
    /// Name shown in list rows and map markers
    pub display_name: String,
    /// Opaque caller data (role, avatar URL, shift id, ...)
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// One entry of a ranking result
///
/// Built fresh on every ranking call and never mutated afterwards; the
/// caller renders it and drops it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntity {
    pub entity: LocatedEntity,
    /// Great-circle distance from the reference point (m)
    pub distance_meters: f64,
    /// Set on exactly one entry of a non-empty result
    pub is_nearest: bool,
}
