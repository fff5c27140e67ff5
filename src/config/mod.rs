//! Configuration management for the rating engine
//!
//! This module handles engine parameter loading from environment variables
//! or TOML files, validation, and the static league table.

pub mod app;
pub mod league;

// Re-export commonly used types
pub use app::{validate_config, AdjustmentWindow, EngineConfig, RatingSettings};
pub use league::League;
