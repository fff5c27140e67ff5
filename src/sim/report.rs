//! Completed-run report
//!
//! Bundles the outputs of one run — the ordered result sequence, the final
//! ledger snapshot, and diagnostics — and derives the per-team summary and
//! the raw-vs-adjusted audit rows from them. Everything here is a pure view
//! over emitted results; nothing touches live rating state.

use crate::error::Result;
use crate::sim::diagnostics::RunDiagnostics;
use crate::store::RatingStore;
use crate::types::{GameResult, RatingSnapshot, RunId, TeamAbbrev};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything a completed (or partially completed) run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonReport {
    pub run_id: RunId,
    /// Rating teams held before their first game of this run
    pub starting_rating: f64,
    pub results: Vec<GameResult>,
    pub final_snapshot: RatingSnapshot,
    pub diagnostics: RunDiagnostics,
}

/// Per-team season movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSeasonSummary {
    pub team: TeamAbbrev,
    pub initial_rating: f64,
    pub final_rating: f64,
    pub change: f64,
}

/// One side of one game, raw against adjusted, for overlay auditing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentAuditRow {
    pub date: NaiveDate,
    pub team: TeamAbbrev,
    pub post_raw: f64,
    pub post_adjusted: f64,
    /// `post_adjusted - post_raw`; nonzero only for games that carried
    /// overlays
    pub difference: f64,
}

impl SeasonReport {
    /// Hand the run's outputs to a store
    pub fn persist_to(&self, store: &dyn RatingStore) -> Result<()> {
        store.store_results(&self.results)?;
        store.store_snapshot(&self.final_snapshot)?;
        Ok(())
    }

    /// Per-team {initial, final, change} rows, ordered by team code
    pub fn team_summaries(&self) -> Vec<TeamSeasonSummary> {
        self.final_snapshot
            .ratings
            .iter()
            .map(|(team, final_rating)| TeamSeasonSummary {
                team: team.clone(),
                initial_rating: self.starting_rating,
                final_rating: *final_rating,
                change: final_rating - self.starting_rating,
            })
            .collect()
    }

    /// Two audit rows per processed game, in emission order
    pub fn adjustment_audit(&self) -> Vec<AdjustmentAuditRow> {
        let mut rows = Vec::with_capacity(self.results.len() * 2);
        for result in &self.results {
            rows.push(AdjustmentAuditRow {
                date: result.date,
                team: result.home_team.clone(),
                post_raw: result.home_post_raw,
                post_adjusted: result.home_post_adjusted,
                difference: result.home_post_adjusted - result.home_post_raw,
            });
            rows.push(AdjustmentAuditRow {
                date: result.date,
                team: result.away_team.clone(),
                post_raw: result.away_post_raw,
                post_adjusted: result.away_post_adjusted,
                difference: result.away_post_adjusted - result.away_post_raw,
            });
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryRatingStore;
    use crate::utils::{current_timestamp, generate_run_id};
    use std::collections::BTreeMap;

    fn sample_report() -> SeasonReport {
        let result = GameResult {
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            home_team: "NYY".to_string(),
            away_team: "BOS".to_string(),
            home_score: 5,
            away_score: 3,
            home_post_raw: 1503.0,
            away_post_raw: 1497.0,
            home_post_adjusted: 1518.0,
            away_post_adjusted: 1487.0,
        };

        SeasonReport {
            run_id: generate_run_id(),
            starting_rating: 1500.0,
            results: vec![result],
            final_snapshot: RatingSnapshot {
                run_id: generate_run_id(),
                taken_at: current_timestamp(),
                ratings: BTreeMap::from([
                    ("BOS".to_string(), 1497.0),
                    ("NYY".to_string(), 1503.0),
                ]),
            },
            diagnostics: RunDiagnostics {
                games_processed: 1,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_team_summaries() {
        let report = sample_report();
        let summaries = report.team_summaries();

        assert_eq!(summaries.len(), 2);
        // BTreeMap ordering: BOS first
        assert_eq!(summaries[0].team, "BOS");
        assert_eq!(summaries[0].change, -3.0);
        assert_eq!(summaries[1].team, "NYY");
        assert_eq!(summaries[1].change, 3.0);
    }

    #[test]
    fn test_adjustment_audit_rows() {
        let report = sample_report();
        let audit = report.adjustment_audit();

        assert_eq!(audit.len(), 2);
        assert_eq!(audit[0].team, "NYY");
        assert_eq!(audit[0].difference, 15.0);
        assert_eq!(audit[1].team, "BOS");
        assert_eq!(audit[1].difference, -10.0);
    }

    #[test]
    fn test_persist_to_store() {
        let report = sample_report();
        let store = InMemoryRatingStore::new();

        report.persist_to(&store).unwrap();

        assert_eq!(store.stored_results().len(), 1);
        assert_eq!(store.stored_snapshots().len(), 1);
    }
}
