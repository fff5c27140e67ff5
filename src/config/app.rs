//! Main engine configuration
//!
//! This module defines the primary configuration structures for the rating
//! engine, including environment variable loading, TOML file loading, and
//! validation.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub rating: RatingSettings,
    pub adjustment_window: AdjustmentWindow,
}

/// Core rating parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingSettings {
    /// Base K-factor before margin-of-victory scaling
    pub base_k: f64,
    /// Rating points granted to the home side for the outcome computation
    pub home_field_advantage: f64,
    /// Rating assigned to a team on first reference
    pub starting_rating: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            base_k: 20.0,
            home_field_advantage: 35.0,
            starting_rating: 1500.0,
        }
    }
}

/// Date window within which pitcher/injury overlays are computed
///
/// Historical games outside the window never receive overlays; the
/// supplemental data sources do not exist for past seasons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AdjustmentWindow {
    /// Overlays disabled for every game
    #[default]
    Disabled,
    /// Every game falling in this calendar year receives overlays
    Season { year: i32 },
    /// Inclusive date range
    DateRange { from: NaiveDate, to: NaiveDate },
}

impl AdjustmentWindow {
    /// Whether a game on `date` falls inside the adjustment window
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            AdjustmentWindow::Disabled => false,
            AdjustmentWindow::Season { year } => {
                use chrono::Datelike;
                date.year() == *year
            }
            AdjustmentWindow::DateRange { from, to } => date >= *from && date <= *to,
        }
    }
}

impl EngineConfig {
    /// Configuration with overlays scoped to one season
    pub fn for_season(year: i32) -> Self {
        Self {
            rating: RatingSettings::default(),
            adjustment_window: AdjustmentWindow::Season { year },
        }
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_k) = env::var("ELO_BASE_K") {
            config.rating.base_k = base_k
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_BASE_K value: {}", base_k))?;
        }
        if let Ok(hfa) = env::var("ELO_HOME_FIELD_ADVANTAGE") {
            config.rating.home_field_advantage = hfa
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_HOME_FIELD_ADVANTAGE value: {}", hfa))?;
        }
        if let Ok(start) = env::var("ELO_STARTING_RATING") {
            config.rating.starting_rating = start
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_STARTING_RATING value: {}", start))?;
        }
        if let Ok(year) = env::var("ELO_ADJUSTMENT_SEASON") {
            config.adjustment_window = AdjustmentWindow::Season {
                year: year
                    .parse()
                    .map_err(|_| anyhow!("Invalid ELO_ADJUSTMENT_SEASON value: {}", year))?,
            };
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            anyhow!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            )
        })?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| anyhow!("Failed to parse config file: {}", e))?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &EngineConfig) -> Result<()> {
    if !config.rating.base_k.is_finite() || config.rating.base_k <= 0.0 {
        return Err(anyhow!("Base K-factor must be positive"));
    }

    if !config.rating.home_field_advantage.is_finite() || config.rating.home_field_advantage < 0.0 {
        return Err(anyhow!("Home field advantage must be non-negative"));
    }

    if !config.rating.starting_rating.is_finite() || config.rating.starting_rating <= 0.0 {
        return Err(anyhow!("Starting rating must be positive"));
    }

    if let AdjustmentWindow::DateRange { from, to } = &config.adjustment_window {
        if from > to {
            return Err(anyhow!(
                "Adjustment window start {} is after its end {}",
                from,
                to
            ));
        }
    }

    Ok(())
}
