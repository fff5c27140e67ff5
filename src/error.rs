//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

use chrono::NaiveDate;

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating-engine scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid game record: {reason}")]
    InvalidGameRecord { reason: String },

    #[error("Game dated {current} precedes previously processed game dated {previous}")]
    OutOfOrderRecord {
        previous: NaiveDate,
        current: NaiveDate,
    },

    #[error("Unknown team code: {team}")]
    UnknownTeam { team: String },

    #[error("League table error: {message}")]
    LeagueTableError { message: String },

    #[error("Stats lookup failed for {key}: {reason}")]
    StatsLookupFailed { key: String, reason: String },

    #[error("Rating store error: {message}")]
    StoreError { message: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal engine error: {message}")]
    InternalError { message: String },
}
