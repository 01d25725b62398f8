//! Data validation and quality screening

pub mod coordinates;

pub use coordinates::{CoordinateValidator, SnapshotValidator, ValidationReport};
