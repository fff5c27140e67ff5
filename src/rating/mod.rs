//! Elo rating core
//!
//! This module provides the expected-score model, the margin-of-victory
//! scaled update rule, and the per-run rating ledger.

pub mod expected;
pub mod ledger;
pub mod update;

// Re-export commonly used types
pub use expected::expected_score;
pub use ledger::RatingLedger;
pub use update::RatingUpdateRule;
