//! Proximity ranking of located entities
//!
//! Wraps every entity of a snapshot with its distance to a reference point
//! and orders the result nearest-first. The sort is stable: entities at
//! equal distance keep their snapshot order, and only the first entry of
//! the sorted output carries the nearest flag.

use crate::algorithms::haversine::distance_meters;
use crate::core::{GeoPoint, LocatedEntity, RankedEntity};

/// Rank all entities by ascending distance from `reference`.
///
/// The result has the same cardinality as the input; an empty snapshot
/// produces an empty result and is not an error. Input entities are cloned
/// into the result and never mutated.
pub fn rank_by_proximity(reference: GeoPoint, entities: &[LocatedEntity]) -> Vec<RankedEntity> {
    let mut ranked: Vec<RankedEntity> = entities
        .iter()
        .map(|entity| RankedEntity {
            distance_meters: distance_meters(reference, entity.position),
            entity: entity.clone(),
            is_nearest: false,
        })
        .collect();

    // Stable sort: snapshot order is the tie break between equal distances
    ranked.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));

    if let Some(first) = ranked.first_mut() {
        first.is_nearest = true;
    }

    ranked
}

/// Rank entities and keep only the `limit` nearest.
///
/// Ordering and tie-break rules are identical to [`rank_by_proximity`]. A
/// limit of zero yields an empty list; a limit beyond the snapshot size
/// returns the full ranking.
pub fn rank_nearest(
    reference: GeoPoint,
    entities: &[LocatedEntity],
    limit: usize,
) -> Vec<RankedEntity> {
    let mut ranked = rank_by_proximity(reference, entities);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn entity(id: &str, latitude: f64, longitude: f64) -> LocatedEntity {
        LocatedEntity {
            id: id.to_string(),
            position: GeoPoint::new(latitude, longitude),
            display_name: format!("Entity {}", id),
            metadata: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_empty_snapshot_ranks_to_empty() {
        let reference = GeoPoint::new(25.2048, 55.2708);
        assert!(rank_by_proximity(reference, &[]).is_empty());
    }

    #[test]
    fn test_cardinality_is_preserved() {
        let reference = GeoPoint::new(0.0, 0.0);
        let entities = vec![
            entity("a", 1.0, 1.0),
            entity("b", 2.0, 2.0),
            entity("c", 0.5, 0.5),
            entity("d", 3.0, 3.0),
        ];

        let ranked = rank_by_proximity(reference, &entities);
        assert_eq!(ranked.len(), entities.len());

        let ids: HashSet<&str> = ranked.iter().map(|r| r.entity.id.as_str()).collect();
        assert_eq!(ids.len(), entities.len());
        for e in &entities {
            assert!(ids.contains(e.id.as_str()));
        }
    }

    #[test]
    fn test_output_is_sorted_non_decreasing() {
        let reference = GeoPoint::new(0.0, 0.0);
        let entities = vec![
            entity("far", 10.0, 10.0),
            entity("near", 0.1, 0.1),
            entity("mid", 5.0, 5.0),
        ];

        let ranked = rank_by_proximity(reference, &entities);
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_meters <= pair[1].distance_meters);
        }
    }

    #[test]
    fn test_exactly_one_nearest_flag_on_first() {
        let reference = GeoPoint::new(0.0, 0.0);
        let entities = vec![
            entity("a", 2.0, 2.0),
            entity("b", 1.0, 1.0),
            entity("c", 3.0, 3.0),
        ];

        let ranked = rank_by_proximity(reference, &entities);
        assert!(ranked[0].is_nearest);
        assert_eq!(ranked[0].entity.id, "b");
        assert_eq!(ranked.iter().filter(|r| r.is_nearest).count(), 1);
    }

    #[test]
    fn test_ties_keep_snapshot_order_and_flag_only_first() {
        let reference = GeoPoint::new(0.0, 0.0);
        // Three entities at the identical position tie at the minimum
        let entities = vec![
            entity("first", 1.0, 1.0),
            entity("second", 1.0, 1.0),
            entity("third", 1.0, 1.0),
            entity("far", 4.0, 4.0),
        ];

        let ranked = rank_by_proximity(reference, &entities);
        let ids: Vec<&str> = ranked.iter().map(|r| r.entity.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third", "far"]);

        assert!(ranked[0].is_nearest);
        assert!(!ranked[1].is_nearest);
        assert!(!ranked[2].is_nearest);
    }

    #[test]
    fn test_limit_truncates_to_smallest_distances() {
        let reference = GeoPoint::new(0.0, 0.0);
        let entities = vec![
            entity("e1", 5.0, 5.0),
            entity("e2", 1.0, 1.0),
            entity("e3", 4.0, 4.0),
            entity("e4", 2.0, 2.0),
            entity("e5", 3.0, 3.0),
        ];

        let top2 = rank_nearest(reference, &entities, 2);
        assert_eq!(top2.len(), 2);
        assert_eq!(top2[0].entity.id, "e2");
        assert_eq!(top2[1].entity.id, "e4");
        assert!(top2[0].is_nearest);
    }

    #[test]
    fn test_limit_edge_cases() {
        let reference = GeoPoint::new(0.0, 0.0);
        let entities = vec![entity("a", 1.0, 1.0), entity("b", 2.0, 2.0)];

        assert!(rank_nearest(reference, &entities, 0).is_empty());
        assert_eq!(rank_nearest(reference, &entities, 10).len(), 2);
    }

    #[test]
    fn test_reference_scenario_around_dubai() {
        let reference = GeoPoint::new(25.2048, 55.2708);
        let entities = vec![
            entity("e1", 25.2048, 55.2708),
            entity("e2", 25.3, 55.3),
            entity("e3", 24.7136, 46.6753),
        ];

        let ranked = rank_by_proximity(reference, &entities);
        let ids: Vec<&str> = ranked.iter().map(|r| r.entity.id.as_str()).collect();
        assert_eq!(ids, ["e1", "e2", "e3"]);

        assert!(ranked[0].is_nearest);
        assert_eq!(ranked[0].distance_meters, 0.0);
        assert!(ranked[1].distance_meters > 10_000.0 && ranked[1].distance_meters < 13_000.0);
        assert!(ranked[2].distance_meters > 860_000.0 && ranked[2].distance_meters < 885_000.0);
    }
}
