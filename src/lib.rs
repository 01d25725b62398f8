//! Proximity Search Core
//!
//! Geospatial support library for an employee attendance client: ranks
//! located entities by great-circle distance from a reference point,
//! evaluates geofenced check-in zones, and fits map regions around marker
//! sets.

pub mod core;
pub mod algorithms;
pub mod geofence;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{GeoPoint, LocatedEntity, RankedEntity, EARTH_RADIUS_METERS};
pub use crate::algorithms::haversine::distance_meters;
pub use crate::algorithms::ranking::{rank_by_proximity, rank_nearest};
pub use crate::algorithms::local_plane::{geodetic_to_local, local_to_geodetic};
pub use crate::geofence::{nearest_zone, GeofenceZone, ZoneCheck};
pub use crate::validation::{CoordinateValidator, SnapshotValidator, ValidationReport};
pub use crate::utils::config::{ConfigError, SearchConfig};
pub use crate::api::{
    fit_region, load_snapshot, parse_snapshot, ApiError, ApiResult, DistanceFormatter,
    JsonFormatter, MapRegion, ProximitySearch, SearchRequest, SearchResponse, TextFormatter,
};
