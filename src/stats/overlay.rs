//! Transient rating overlay policy
//!
//! Computes non-persistent rating deltas from pitcher quality and injury
//! signals. Deltas are cached per key for the lifetime of one run; a
//! provider failure degrades to a zero delta and is counted, never fatal.

use crate::stats::provider::{PlayerStatsProvider, StatLookup};
use crate::types::TeamAbbrev;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// ERA at or below this earns the strongest pitcher bonus
const ERA_ELITE: f64 = 3.0;
/// ERA at or below this (above elite) earns a modest bonus
const ERA_SOLID: f64 = 4.0;
/// ERA at or above this draws a penalty
const ERA_POOR: f64 = 5.0;
/// Neutral-band stand-in when the provider has no ERA
const ERA_DEFAULT: f64 = 4.5;

/// Injured-list size above which the roster penalty applies
const IL_COUNT_THRESHOLD: u32 = 3;
const IL_BASE_PENALTY: i32 = -10;
/// Extra penalty when the game note names the team outright
const IL_CONFIRMED_PENALTY: i32 = -10;

/// Per-run overlay calculator with its own lookup caches
///
/// The caches belong to this object, not the module, so two runs never share
/// stale entries.
pub struct AdjustmentOverlay {
    provider: Arc<dyn PlayerStatsProvider>,
    pitcher_cache: HashMap<String, i32>,
    injury_cache: HashMap<TeamAbbrev, i32>,
    degraded_lookups: u64,
}

impl AdjustmentOverlay {
    pub fn new(provider: Arc<dyn PlayerStatsProvider>) -> Self {
        Self {
            provider,
            pitcher_cache: HashMap::new(),
            injury_cache: HashMap::new(),
            degraded_lookups: 0,
        }
    }

    /// Rating delta for a starting pitcher, by ERA band
    ///
    /// A missing name contributes 0 without touching the provider. Each
    /// distinct name is resolved at most once per run.
    pub fn pitcher_adjustment(&mut self, pitcher_name: &str) -> i32 {
        if pitcher_name.is_empty() {
            return 0;
        }
        if let Some(delta) = self.pitcher_cache.get(pitcher_name) {
            return *delta;
        }

        let delta = match self.provider.lookup_era(pitcher_name) {
            Ok(StatLookup::Available(era)) => {
                debug!(pitcher = pitcher_name, era, "resolved pitcher ERA");
                Self::era_delta(era)
            }
            Ok(StatLookup::Unavailable) => Self::era_delta(ERA_DEFAULT),
            Err(e) => {
                warn!(
                    pitcher = pitcher_name,
                    error = %e,
                    "ERA lookup failed, using zero delta"
                );
                self.degraded_lookups += 1;
                0
            }
        };

        self.pitcher_cache.insert(pitcher_name.to_string(), delta);
        delta
    }

    /// Rating delta for a team's injury situation
    ///
    /// The roster-size penalty is cached per team; the confirmed-impact
    /// penalty depends on the game note and is applied on top, per game.
    pub fn injury_adjustment(&mut self, team: &str, note_mentions_team: bool) -> i32 {
        let base = match self.injury_cache.get(team) {
            Some(delta) => *delta,
            None => {
                let delta = match self.provider.lookup_injured_count(team) {
                    Ok(StatLookup::Available(il_count)) => {
                        debug!(team, il_count, "resolved injured-list count");
                        if il_count > IL_COUNT_THRESHOLD {
                            IL_BASE_PENALTY
                        } else {
                            0
                        }
                    }
                    Ok(StatLookup::Unavailable) => 0,
                    Err(e) => {
                        warn!(
                            team,
                            error = %e,
                            "injured-list lookup failed, using zero delta"
                        );
                        self.degraded_lookups += 1;
                        0
                    }
                };
                self.injury_cache.insert(team.to_string(), delta);
                delta
            }
        };

        if note_mentions_team {
            base + IL_CONFIRMED_PENALTY
        } else {
            base
        }
    }

    /// Number of lookups that degraded to a zero delta because the provider
    /// errored
    pub fn degraded_lookups(&self) -> u64 {
        self.degraded_lookups
    }

    /// Resolved deltas so far, for audit logging
    pub fn policy_snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "pitcher_deltas": self.pitcher_cache,
            "injury_base_deltas": self.injury_cache,
            "degraded_lookups": self.degraded_lookups,
        })
    }

    fn era_delta(era: f64) -> i32 {
        if era <= ERA_ELITE {
            15
        } else if era <= ERA_SOLID {
            5
        } else if era >= ERA_POOR {
            -10
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::provider::MockStatsProvider;

    fn overlay_with(provider: MockStatsProvider) -> (AdjustmentOverlay, Arc<MockStatsProvider>) {
        let provider = Arc::new(provider);
        (AdjustmentOverlay::new(provider.clone()), provider)
    }

    #[test]
    fn test_era_policy_bands() {
        assert_eq!(AdjustmentOverlay::era_delta(2.1), 15);
        assert_eq!(AdjustmentOverlay::era_delta(3.0), 15);
        assert_eq!(AdjustmentOverlay::era_delta(3.01), 5);
        assert_eq!(AdjustmentOverlay::era_delta(4.0), 5);
        assert_eq!(AdjustmentOverlay::era_delta(4.5), 0);
        assert_eq!(AdjustmentOverlay::era_delta(4.99), 0);
        assert_eq!(AdjustmentOverlay::era_delta(5.0), -10);
        assert_eq!(AdjustmentOverlay::era_delta(6.8), -10);
    }

    #[test]
    fn test_pitcher_adjustment_from_provider() {
        let (mut overlay, _) = overlay_with(MockStatsProvider::new().with_pitcher_era("Ace", 2.8));

        assert_eq!(overlay.pitcher_adjustment("Ace"), 15);
    }

    #[test]
    fn test_pitcher_cache_prevents_second_lookup() {
        let (mut overlay, provider) =
            overlay_with(MockStatsProvider::new().with_pitcher_era("Ace", 2.8));

        let first = overlay.pitcher_adjustment("Ace");
        let second = overlay.pitcher_adjustment("Ace");

        assert_eq!(first, 15);
        assert_eq!(second, first);
        assert_eq!(provider.era_calls().len(), 1);
    }

    #[test]
    fn test_missing_pitcher_name_skips_provider() {
        let (mut overlay, provider) = overlay_with(MockStatsProvider::new());

        assert_eq!(overlay.pitcher_adjustment(""), 0);
        assert!(provider.era_calls().is_empty());
    }

    #[test]
    fn test_unavailable_era_is_neutral() {
        let (mut overlay, _) = overlay_with(MockStatsProvider::new());

        assert_eq!(overlay.pitcher_adjustment("Unknown Rookie"), 0);
        assert_eq!(overlay.degraded_lookups(), 0);
    }

    #[test]
    fn test_provider_error_degrades_and_caches() {
        let (mut overlay, provider) =
            overlay_with(MockStatsProvider::new().failing_for("Glass Arm"));

        assert_eq!(overlay.pitcher_adjustment("Glass Arm"), 0);
        assert_eq!(overlay.degraded_lookups(), 1);

        // The failure is cached too; no retry storm against a broken provider
        assert_eq!(overlay.pitcher_adjustment("Glass Arm"), 0);
        assert_eq!(provider.era_calls().len(), 1);
        assert_eq!(overlay.degraded_lookups(), 1);
    }

    #[test]
    fn test_injury_penalty_threshold() {
        let (mut overlay, _) = overlay_with(
            MockStatsProvider::new()
                .with_injured_count("NYY", 4)
                .with_injured_count("BOS", 3),
        );

        assert_eq!(overlay.injury_adjustment("NYY", false), -10);
        assert_eq!(overlay.injury_adjustment("BOS", false), 0);
    }

    #[test]
    fn test_confirmed_impact_stacks_with_base() {
        let (mut overlay, _) =
            overlay_with(MockStatsProvider::new().with_injured_count("NYY", 6));

        assert_eq!(overlay.injury_adjustment("NYY", true), -20);
    }

    #[test]
    fn test_confirmed_impact_without_base_penalty() {
        let (mut overlay, _) =
            overlay_with(MockStatsProvider::new().with_injured_count("TBR", 1));

        assert_eq!(overlay.injury_adjustment("TBR", true), -10);
    }

    #[test]
    fn test_injury_cache_keeps_note_penalty_per_game() {
        let (mut overlay, provider) =
            overlay_with(MockStatsProvider::new().with_injured_count("NYY", 5));

        // Same team, different note situations across two games
        assert_eq!(overlay.injury_adjustment("NYY", false), -10);
        assert_eq!(overlay.injury_adjustment("NYY", true), -20);
        assert_eq!(overlay.injury_adjustment("NYY", false), -10);

        // Roster size resolved exactly once
        assert_eq!(provider.injured_calls().len(), 1);
    }

    #[test]
    fn test_policy_snapshot_shape() {
        let (mut overlay, _) = overlay_with(MockStatsProvider::new().with_pitcher_era("Ace", 2.8));
        overlay.pitcher_adjustment("Ace");

        let snapshot = overlay.policy_snapshot();
        assert_eq!(snapshot["pitcher_deltas"]["Ace"], 15);
        assert_eq!(snapshot["degraded_lookups"], 0);
    }
}
