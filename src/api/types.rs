//! Common API types and snapshot loading

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{GeoPoint, LocatedEntity, RankedEntity};

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API error types
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Snapshot or config file could not be read
    Io { message: String },
    /// File contents were not valid JSON of the expected shape
    Parse { message: String },
    /// Caller-supplied argument outside the usable range
    InvalidArgument { argument: String, reason: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Io { message } => write!(f, "I/O error: {}", message),
            ApiError::Parse { message } => write!(f, "Parse error: {}", message),
            ApiError::InvalidArgument { argument, reason } => {
                write!(f, "Invalid argument '{}': {}", argument, reason)
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Proximity search parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Point the ranking is computed against
    pub reference: GeoPoint,
    /// Optional cap on the number of results
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn new(reference: GeoPoint) -> Self {
        Self {
            reference,
            limit: None,
        }
    }

    /// Cap the result list at `limit` entries.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Ranked search result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Reference point the distances were computed against
    pub reference: GeoPoint,
    /// Ranked results, nearest first
    pub results: Vec<RankedEntity>,
    /// Snapshot size before any limit was applied
    pub total_candidates: usize,
}

impl SearchResponse {
    /// The nearest entity, when any results survived the limit.
    pub fn nearest(&self) -> Option<&RankedEntity> {
        self.results.first()
    }
}

/// On-disk snapshot shape: a JSON object with an `entities` array
#[derive(Debug, Serialize, Deserialize)]
struct EntitiesJson {
    entities: Vec<LocatedEntity>,
}

/// Load an entity snapshot from a JSON file.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> ApiResult<Vec<LocatedEntity>> {
    let path_str = path.as_ref().to_string_lossy().to_string();

    let content = fs::read_to_string(&path).map_err(|e| ApiError::Io {
        message: format!("Failed to read snapshot '{}': {}", path_str, e),
    })?;

    parse_snapshot(&content)
}

/// Parse an entity snapshot from a JSON string.
pub fn parse_snapshot(json: &str) -> ApiResult<Vec<LocatedEntity>> {
    let parsed: EntitiesJson = serde_json::from_str(json).map_err(|e| ApiError::Parse {
        message: format!("Failed to parse snapshot: {}", e),
    })?;

    Ok(parsed.entities)
}
