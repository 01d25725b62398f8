//! Core types and constants for proximity search

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
