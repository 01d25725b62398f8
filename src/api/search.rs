//! Synchronous search façade
//!
//! The view-model layer drives this object once per pin move or roster
//! refresh. It holds nothing but its configuration, so concurrent callers
//! working on their own snapshots do not interfere; discarding results for
//! a stale reference point is the caller's job.

use crate::algorithms::ranking::{rank_by_proximity, rank_nearest};
use crate::api::region::{fit_region_with_floor, MapRegion};
use crate::api::types::{SearchRequest, SearchResponse};
use crate::core::{GeoPoint, LocatedEntity, RankedEntity};
use crate::geofence::{nearest_zone, GeofenceZone, ZoneCheck};
use crate::utils::config::SearchConfig;

/// Entry point used by list, map, and check-in screens
pub struct ProximitySearch {
    config: SearchConfig,
}

impl Default for ProximitySearch {
    fn default() -> Self {
        Self::new()
    }
}

impl ProximitySearch {
    /// Create a façade with the default configuration.
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Create a façade with an explicit configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Rank a snapshot against the request's reference point.
    ///
    /// A limit on the request wins over the configured default; with
    /// neither set the full ranking is returned.
    pub fn search(&self, request: &SearchRequest, entities: &[LocatedEntity]) -> SearchResponse {
        let results = match request.limit.or(self.config.default_limit) {
            Some(limit) => rank_nearest(request.reference, entities, limit),
            None => rank_by_proximity(request.reference, entities),
        };

        SearchResponse {
            reference: request.reference,
            results,
            total_candidates: entities.len(),
        }
    }

    /// The single nearest entity, if the snapshot is non-empty.
    pub fn nearest(&self, reference: GeoPoint, entities: &[LocatedEntity]) -> Option<RankedEntity> {
        rank_nearest(reference, entities, 1).into_iter().next()
    }

    /// Evaluate a reported position for check-in.
    ///
    /// Prefers a zone that contains the position; otherwise reports
    /// against the closest center so the caller can tell the employee how
    /// far away they still are. `None` when no zones are configured.
    pub fn check_in(&self, position: GeoPoint, zones: &[GeofenceZone]) -> Option<(usize, ZoneCheck)> {
        if let Some((index, zone)) = zones.iter().enumerate().find(|(_, z)| z.contains(position)) {
            return Some((index, zone.evaluate(position)));
        }

        nearest_zone(position, zones).map(|(index, _)| (index, zones[index].evaluate(position)))
    }

    /// Fit a map region around the snapshot with the configured span floor.
    pub fn fit_region(&self, entities: &[LocatedEntity]) -> Option<MapRegion> {
        let points: Vec<GeoPoint> = entities.iter().map(|e| e.position).collect();
        fit_region_with_floor(&points, self.config.min_region_span_meters)
    }
}
