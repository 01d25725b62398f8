//! Coordinate and snapshot screening
//!
//! The math core accepts any finite input and never fails; screening bad
//! feed data before it reaches a screen is the caller's job, and these
//! helpers are that screen.

use std::collections::HashSet;

use crate::core::{GeoPoint, LocatedEntity};

/// Range checks for geographic coordinates
pub struct CoordinateValidator;

impl CoordinateValidator {
    /// Validate a coordinate pair against the geographic ranges.
    pub fn validate(point: GeoPoint) -> Result<(), &'static str> {
        if !point.latitude.is_finite() || !point.longitude.is_finite() {
            return Err("Coordinate components must be finite");
        }
        if point.latitude < -90.0 || point.latitude > 90.0 {
            return Err("Invalid latitude: must be between -90 and 90 degrees");
        }
        if point.longitude < -180.0 || point.longitude > 180.0 {
            return Err("Invalid longitude: must be between -180 and 180 degrees");
        }

        Ok(())
    }
}

/// Outcome of screening an entity snapshot
#[derive(Debug)]
pub struct ValidationReport {
    /// No errors found; warnings may still be present
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Screens entity snapshots before they are handed to the search paths
pub struct SnapshotValidator;

impl SnapshotValidator {
    /// Check a snapshot for duplicate ids, out-of-range positions, and
    /// blank display names.
    pub fn validate(entities: &[LocatedEntity]) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut seen_ids = HashSet::new();

        for entity in entities {
            if !seen_ids.insert(entity.id.as_str()) {
                errors.push(format!("Duplicate entity id '{}'", entity.id));
            }
            if let Err(reason) = CoordinateValidator::validate(entity.position) {
                errors.push(format!("Entity '{}': {}", entity.id, reason));
            }
            if entity.display_name.trim().is_empty() {
                warnings.push(format!("Entity '{}' has no display name", entity.id));
            }
        }

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}
