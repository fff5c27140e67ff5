//! Per-run rating ledger
//!
//! The mapping from team to current raw rating: the single source of truth
//! for one simulation run. Exclusively owned by its simulator; callers
//! serialize concurrent runs rather than sharing a ledger between them.

use crate::config::League;
use crate::types::{RatingSnapshot, RunId, TeamAbbrev};
use crate::utils::current_timestamp;
use std::collections::HashMap;

/// Team → current raw rating
///
/// Raw means exclusive of every transient overlay: home-field, pitcher
/// quality, and injury deltas are stripped before anything is written here.
#[derive(Debug, Clone)]
pub struct RatingLedger {
    ratings: HashMap<TeamAbbrev, f64>,
    starting_rating: f64,
}

impl RatingLedger {
    /// Empty ledger; teams are seeded at `starting_rating` on first reference
    pub fn new(starting_rating: f64) -> Self {
        Self {
            ratings: HashMap::new(),
            starting_rating,
        }
    }

    /// Ledger with every league team pre-seeded at the starting rating
    pub fn seeded_from(league: &League, starting_rating: f64) -> Self {
        let ratings = league
            .abbrevs()
            .map(|abbrev| (abbrev.to_string(), starting_rating))
            .collect();
        Self {
            ratings,
            starting_rating,
        }
    }

    /// Current rating for a team, seeding the entry on first reference
    pub fn rating_or_seed(&mut self, team: &str) -> f64 {
        *self
            .ratings
            .entry(team.to_string())
            .or_insert(self.starting_rating)
    }

    /// Read a rating without seeding
    pub fn rating(&self, team: &str) -> Option<f64> {
        self.ratings.get(team).copied()
    }

    /// Write a team's post-game raw rating
    pub fn set_rating(&mut self, team: &str, rating: f64) {
        self.ratings.insert(team.to_string(), rating);
    }

    pub fn starting_rating(&self) -> f64 {
        self.starting_rating
    }

    pub fn team_count(&self) -> usize {
        self.ratings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ratings.iter().map(|(team, r)| (team.as_str(), *r))
    }

    /// Ordered point-in-time copy for persistence or prediction
    pub fn snapshot(&self, run_id: RunId) -> RatingSnapshot {
        RatingSnapshot {
            run_id,
            taken_at: current_timestamp(),
            ratings: self
                .ratings
                .iter()
                .map(|(team, r)| (team.clone(), *r))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::generate_run_id;

    #[test]
    fn test_seed_on_first_reference() {
        let mut ledger = RatingLedger::new(1500.0);

        assert!(ledger.rating("NYY").is_none());
        assert_eq!(ledger.rating_or_seed("NYY"), 1500.0);
        assert_eq!(ledger.rating("NYY"), Some(1500.0));
        assert_eq!(ledger.team_count(), 1);
    }

    #[test]
    fn test_set_and_read_back() {
        let mut ledger = RatingLedger::new(1500.0);

        ledger.rating_or_seed("BOS");
        ledger.set_rating("BOS", 1512.34);

        assert_eq!(ledger.rating("BOS"), Some(1512.34));
        assert_eq!(ledger.rating_or_seed("BOS"), 1512.34);
    }

    #[test]
    fn test_seeded_from_league() {
        let league = League::mlb();
        let ledger = RatingLedger::seeded_from(&league, 1500.0);

        assert_eq!(ledger.team_count(), 30);
        assert_eq!(ledger.rating("SEA"), Some(1500.0));
        assert_eq!(ledger.rating("XXX"), None);
    }

    #[test]
    fn test_snapshot_is_ordered_and_detached() {
        let mut ledger = RatingLedger::new(1500.0);
        ledger.set_rating("NYY", 1550.0);
        ledger.set_rating("BOS", 1450.0);

        let snapshot = ledger.snapshot(generate_run_id());
        assert_eq!(snapshot.team_count(), 2);
        assert_eq!(snapshot.rating_of("NYY"), Some(1550.0));

        // Snapshots are copies; later ledger writes do not leak in
        ledger.set_rating("NYY", 1600.0);
        assert_eq!(snapshot.rating_of("NYY"), Some(1550.0));

        // BTreeMap ordering gives stable output
        let teams: Vec<_> = snapshot.ratings.keys().cloned().collect();
        assert_eq!(teams, vec!["BOS".to_string(), "NYY".to_string()]);
    }
}
