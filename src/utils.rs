//! Utility functions for the rating engine

use crate::types::RunId;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique run ID
pub fn generate_run_id() -> RunId {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Calculate the absolute difference between two ratings
pub fn rating_difference(rating1: f64, rating2: f64) -> f64 {
    (rating1 - rating2).abs()
}
