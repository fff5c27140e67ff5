//! Common types used throughout the rating engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Stable short code identifying a team (e.g. "NYY", "BOS")
pub type TeamAbbrev = String;

/// Unique identifier for one simulation run
pub type RunId = Uuid;

/// A game record as handed over by a log source or schedule provider.
///
/// Fields that upstream data occasionally corrupts (date, scores) stay
/// optional here so a malformed row can be skipped and counted instead of
/// failing the run. Validation into a [`GameRecord`] happens in the
/// simulator, before any rating state is touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGameRecord {
    /// Game date; `None` when the source row had a missing or unparseable date
    pub date: Option<NaiveDate>,
    pub home_team: TeamAbbrev,
    pub away_team: TeamAbbrev,
    /// Signed so that negative upstream values are representable and rejectable
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    /// Probable starting pitchers, when the provider knows them
    pub home_pitcher: Option<String>,
    pub away_pitcher: Option<String>,
    /// Free-text note attached to the game (injury reports, postponements)
    pub note: Option<String>,
}

impl RawGameRecord {
    /// Convenience constructor for a plain final score with no extras
    pub fn score_line(
        date: NaiveDate,
        home_team: &str,
        away_team: &str,
        home_score: i64,
        away_score: i64,
    ) -> Self {
        Self {
            date: Some(date),
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score: Some(home_score),
            away_score: Some(away_score),
            home_pitcher: None,
            away_pitcher: None,
            note: None,
        }
    }
}

/// A structurally valid game, ready for rating processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub home_team: TeamAbbrev,
    pub away_team: TeamAbbrev,
    pub home_score: u32,
    pub away_score: u32,
    pub home_pitcher: Option<String>,
    pub away_pitcher: Option<String>,
    pub note: Option<String>,
}

impl GameRecord {
    /// Score differential from the home side's perspective
    pub fn home_margin(&self) -> i64 {
        i64::from(self.home_score) - i64::from(self.away_score)
    }

    /// Whether the game ended level (no rating movement by policy)
    pub fn is_tie(&self) -> bool {
        self.home_score == self.away_score
    }
}

/// Per-game output record carrying both rating views for audit
///
/// Immutable once emitted; the ordered sequence of these is the run's
/// detailed trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub date: NaiveDate,
    pub home_team: TeamAbbrev,
    pub away_team: TeamAbbrev,
    pub home_score: u32,
    pub away_score: u32,
    /// Post-game ratings with all transient overlays stripped
    pub home_post_raw: f64,
    pub away_post_raw: f64,
    /// Post-game ratings as used for the outcome computation
    /// (home-field already removed, pitcher/injury overlays included)
    pub home_post_adjusted: f64,
    pub away_post_adjusted: f64,
}

/// Transient per-game, per-team rating deltas
///
/// Exists only while one game is being processed; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdjustmentContext {
    pub pitcher_delta: i32,
    pub injury_delta: i32,
}

impl AdjustmentContext {
    /// Combined overlay applied to (and later stripped from) one side
    pub fn total(&self) -> f64 {
        f64::from(self.pitcher_delta + self.injury_delta)
    }

    pub fn is_neutral(&self) -> bool {
        self.pitcher_delta == 0 && self.injury_delta == 0
    }
}

/// Point-in-time copy of the ledger, ordered for stable output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingSnapshot {
    pub run_id: RunId,
    pub taken_at: chrono::DateTime<chrono::Utc>,
    pub ratings: BTreeMap<TeamAbbrev, f64>,
}

impl RatingSnapshot {
    pub fn rating_of(&self, team: &str) -> Option<f64> {
        self.ratings.get(team).copied()
    }

    pub fn team_count(&self) -> usize {
        self.ratings.len()
    }
}
