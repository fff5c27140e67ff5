//! Player stats provider interface and implementations
//!
//! This module defines the interface to the supplemental-data collaborator.
//! Lookups are synchronous; the collaborator resolves any remote calls before
//! the value reaches the engine. A value the collaborator cannot produce is
//! an explicit [`StatLookup::Unavailable`], not a swallowed error.

use crate::error::Result;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

/// Outcome of one stats lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatLookup<T> {
    Available(T),
    /// The collaborator has no value for this key (e.g. rookie pitcher with
    /// no season ERA yet); callers fall back to their neutral default
    Unavailable,
}

impl<T> StatLookup<T> {
    pub fn available(self) -> Option<T> {
        match self {
            StatLookup::Available(value) => Some(value),
            StatLookup::Unavailable => None,
        }
    }
}

/// Trait for resolving per-player and per-team supplemental signals
pub trait PlayerStatsProvider: Send + Sync {
    /// Season earned-run average for a pitcher, by name
    fn lookup_era(&self, pitcher_name: &str) -> Result<StatLookup<f64>>;

    /// Number of players on a team's injured-reserve roster
    fn lookup_injured_count(&self, team_abbrev: &str) -> Result<StatLookup<u32>>;
}

/// Mock stats provider for testing and development
///
/// Records every lookup so tests can assert cache behavior, and can be told
/// to fail for specific keys to exercise the degrade path.
#[derive(Debug, Default)]
pub struct MockStatsProvider {
    eras: RwLock<HashMap<String, f64>>,
    injured_counts: RwLock<HashMap<String, u32>>,
    failing_keys: RwLock<HashSet<String>>,
    era_calls: RwLock<Vec<String>>,
    injured_calls: RwLock<Vec<String>>,
}

impl MockStatsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset a pitcher's season ERA
    pub fn with_pitcher_era(self, name: &str, era: f64) -> Self {
        self.eras.write().unwrap().insert(name.to_string(), era);
        self
    }

    /// Preset a team's injured-list count
    pub fn with_injured_count(self, team: &str, count: u32) -> Self {
        self.injured_counts
            .write()
            .unwrap()
            .insert(team.to_string(), count);
        self
    }

    /// Make lookups for this key return an error
    pub fn failing_for(self, key: &str) -> Self {
        self.failing_keys.write().unwrap().insert(key.to_string());
        self
    }

    /// All ERA lookups made, in order (for testing)
    pub fn era_calls(&self) -> Vec<String> {
        self.era_calls.read().unwrap().clone()
    }

    /// All injured-count lookups made, in order (for testing)
    pub fn injured_calls(&self) -> Vec<String> {
        self.injured_calls.read().unwrap().clone()
    }
}

impl PlayerStatsProvider for MockStatsProvider {
    fn lookup_era(&self, pitcher_name: &str) -> Result<StatLookup<f64>> {
        self.era_calls
            .write()
            .unwrap()
            .push(pitcher_name.to_string());

        if self.failing_keys.read().unwrap().contains(pitcher_name) {
            return Err(crate::error::RatingError::StatsLookupFailed {
                key: pitcher_name.to_string(),
                reason: "injected failure".to_string(),
            }
            .into());
        }

        Ok(match self.eras.read().unwrap().get(pitcher_name) {
            Some(era) => StatLookup::Available(*era),
            None => StatLookup::Unavailable,
        })
    }

    fn lookup_injured_count(&self, team_abbrev: &str) -> Result<StatLookup<u32>> {
        self.injured_calls
            .write()
            .unwrap()
            .push(team_abbrev.to_string());

        if self.failing_keys.read().unwrap().contains(team_abbrev) {
            return Err(crate::error::RatingError::StatsLookupFailed {
                key: team_abbrev.to_string(),
                reason: "injected failure".to_string(),
            }
            .into());
        }

        Ok(match self.injured_counts.read().unwrap().get(team_abbrev) {
            Some(count) => StatLookup::Available(*count),
            None => StatLookup::Unavailable,
        })
    }
}
