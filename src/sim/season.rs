//! Sequential per-game rating driver
//!
//! Owns the run's ledger and overlay, consumes a date-ordered record stream,
//! and emits one [`GameResult`] per structurally valid game. Strictly
//! single-threaded; rating state flows forward game to game.

use crate::config::{validate_config, EngineConfig, League};
use crate::error::{RatingError, Result};
use crate::rating::{RatingLedger, RatingUpdateRule};
use crate::sim::diagnostics::RunDiagnostics;
use crate::sim::report::SeasonReport;
use crate::source::{GameLogSource, ScheduleProvider};
use crate::stats::{AdjustmentOverlay, PlayerStatsProvider};
use crate::types::{
    AdjustmentContext, GameRecord, GameResult, RatingSnapshot, RawGameRecord, RunId,
};
use crate::utils::generate_run_id;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Why a record was dropped from the stream instead of processed
enum SkipReason {
    Malformed(String),
    UnknownTeam(String),
}

/// The per-game rating loop for one run
///
/// Exclusively owns its [`RatingLedger`]; concurrent runs over overlapping
/// team sets must be serialized by the caller.
pub struct SeasonSimulator {
    run_id: RunId,
    config: EngineConfig,
    league: League,
    update_rule: RatingUpdateRule,
    ledger: RatingLedger,
    overlay: AdjustmentOverlay,
    diagnostics: RunDiagnostics,
    results: Vec<GameResult>,
    last_date: Option<NaiveDate>,
}

impl SeasonSimulator {
    /// Create a simulator with every league team pre-seeded at the starting
    /// rating
    pub fn new(
        config: EngineConfig,
        league: League,
        stats_provider: Arc<dyn PlayerStatsProvider>,
    ) -> Result<Self> {
        let ledger = RatingLedger::seeded_from(&league, config.rating.starting_rating);
        Self::with_ledger(config, league, stats_provider, ledger)
    }

    /// Create a simulator continuing from an existing ledger (e.g. a prior
    /// snapshot restored by the caller)
    pub fn with_ledger(
        config: EngineConfig,
        league: League,
        stats_provider: Arc<dyn PlayerStatsProvider>,
        ledger: RatingLedger,
    ) -> Result<Self> {
        validate_config(&config)?;

        let run_id = generate_run_id();
        info!(%run_id, teams = league.team_count(), "starting rating run");

        Ok(Self {
            run_id,
            update_rule: RatingUpdateRule::new(config.rating.base_k),
            overlay: AdjustmentOverlay::new(stats_provider),
            config,
            league,
            ledger,
            diagnostics: RunDiagnostics::default(),
            results: Vec::new(),
            last_date: None,
        })
    }

    /// Process one record
    ///
    /// Returns the emitted result, or `None` when the record was skipped and
    /// counted. Fails only on an out-of-order date, which indicates an
    /// upstream merge/sort defect and invalidates further processing.
    pub fn process_game(&mut self, raw: RawGameRecord) -> Result<Option<GameResult>> {
        let game = match self.validate(raw) {
            Ok(game) => game,
            Err(SkipReason::Malformed(reason)) => {
                warn!(run_id = %self.run_id, %reason, "skipping malformed record");
                self.diagnostics.malformed_records += 1;
                return Ok(None);
            }
            Err(SkipReason::UnknownTeam(team)) => {
                warn!(run_id = %self.run_id, %team, "skipping record with non-league team");
                self.diagnostics.unknown_team_records += 1;
                return Ok(None);
            }
        };

        if let Some(previous) = self.last_date {
            if game.date < previous {
                return Err(RatingError::OutOfOrderRecord {
                    previous,
                    current: game.date,
                }
                .into());
            }
        }

        let result = self.rate_game(&game);
        self.last_date = Some(game.date);
        self.diagnostics.games_processed += 1;
        self.results.push(result.clone());

        Ok(Some(result))
    }

    /// Consume an entire record stream and produce the run report
    pub fn run<I>(&mut self, records: I) -> Result<SeasonReport>
    where
        I: IntoIterator<Item = RawGameRecord>,
    {
        for record in records {
            self.process_game(record)?;
        }

        let diagnostics = self.diagnostics();
        info!(run_id = %self.run_id, %diagnostics, "rating run complete");

        Ok(SeasonReport {
            run_id: self.run_id,
            starting_rating: self.ledger.starting_rating(),
            results: self.results.clone(),
            final_snapshot: self.snapshot(),
            diagnostics,
        })
    }

    /// Consume a historical log followed by the current season's schedule
    pub fn run_sources(
        &mut self,
        log: &dyn GameLogSource,
        schedule: &dyn ScheduleProvider,
    ) -> Result<SeasonReport> {
        let records = crate::source::merged_records(log, schedule)?;
        let collected: Vec<RawGameRecord> = records.collect();
        self.run(collected)
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Results emitted so far; valid even for a partially consumed stream
    pub fn results(&self) -> &[GameResult] {
        &self.results
    }

    pub fn ledger(&self) -> &RatingLedger {
        &self.ledger
    }

    /// Current counters, including overlay degradations
    pub fn diagnostics(&self) -> RunDiagnostics {
        let mut diagnostics = self.diagnostics;
        diagnostics.degraded_lookups = self.overlay.degraded_lookups();
        diagnostics
    }

    /// Ordered copy of the current ledger state
    pub fn snapshot(&self) -> RatingSnapshot {
        self.ledger.snapshot(self.run_id)
    }

    /// Structural validation, before any rating state is touched
    fn validate(&self, raw: RawGameRecord) -> std::result::Result<GameRecord, SkipReason> {
        let date = raw
            .date
            .ok_or_else(|| SkipReason::Malformed("missing or invalid date".to_string()))?;

        if raw.home_team.is_empty() || raw.away_team.is_empty() {
            return Err(SkipReason::Malformed("missing team identifier".to_string()));
        }
        if raw.home_team == raw.away_team {
            return Err(SkipReason::Malformed(format!(
                "team {} cannot play itself",
                raw.home_team
            )));
        }

        let home_score = match raw.home_score {
            Some(score) => u32::try_from(score)
                .map_err(|_| SkipReason::Malformed(format!("invalid home score {}", score)))?,
            None => return Err(SkipReason::Malformed("missing home score".to_string())),
        };
        let away_score = match raw.away_score {
            Some(score) => u32::try_from(score)
                .map_err(|_| SkipReason::Malformed(format!("invalid away score {}", score)))?,
            None => return Err(SkipReason::Malformed("missing away score".to_string())),
        };

        // Source data occasionally carries preseason/exhibition codes
        if !self.league.contains(&raw.home_team) {
            return Err(SkipReason::UnknownTeam(raw.home_team));
        }
        if !self.league.contains(&raw.away_team) {
            return Err(SkipReason::UnknownTeam(raw.away_team));
        }

        Ok(GameRecord {
            date,
            home_team: raw.home_team,
            away_team: raw.away_team,
            home_score,
            away_score,
            home_pitcher: raw.home_pitcher,
            away_pitcher: raw.away_pitcher,
            note: raw.note,
        })
    }

    /// The per-game state machine: ratings fetched → adjustments computed →
    /// home field applied → outcome resolved → ledger updated → result built
    fn rate_game(&mut self, game: &GameRecord) -> GameResult {
        let raw_home = self.ledger.rating_or_seed(&game.home_team);
        let raw_away = self.ledger.rating_or_seed(&game.away_team);

        let (home_ctx, away_ctx) = self.adjustments_for(game);

        let hfa = self.config.rating.home_field_advantage;
        let adjusted_home = raw_home + home_ctx.total() + hfa;
        let adjusted_away = raw_away + away_ctx.total();

        let margin = game.home_margin();
        let (post_home, post_away) = match margin.cmp(&0) {
            Ordering::Greater => self.update_rule.update(adjusted_home, adjusted_away, margin),
            Ordering::Less => {
                let (winner, loser) = self.update_rule.update(adjusted_away, adjusted_home, margin);
                (loser, winner)
            }
            // Ties leave both adjusted ratings untouched by policy
            Ordering::Equal => {
                self.diagnostics.ties += 1;
                (adjusted_home, adjusted_away)
            }
        };

        // Strip the home-field constant and the same per-side overlays so the
        // ledger never absorbs transient per-game effects
        let home_post_adjusted = post_home - hfa;
        let away_post_adjusted = post_away;
        let home_post_raw = home_post_adjusted - home_ctx.total();
        let away_post_raw = away_post_adjusted - away_ctx.total();

        self.ledger.set_rating(&game.home_team, home_post_raw);
        self.ledger.set_rating(&game.away_team, away_post_raw);

        debug!(
            run_id = %self.run_id,
            date = %game.date,
            home = %game.home_team,
            away = %game.away_team,
            home_post_raw,
            away_post_raw,
            "game rated"
        );

        GameResult {
            date: game.date,
            home_team: game.home_team.clone(),
            away_team: game.away_team.clone(),
            home_score: game.home_score,
            away_score: game.away_score,
            home_post_raw,
            away_post_raw,
            home_post_adjusted,
            away_post_adjusted,
        }
    }

    /// Overlay deltas for both sides; all zero outside the adjustment window
    fn adjustments_for(&mut self, game: &GameRecord) -> (AdjustmentContext, AdjustmentContext) {
        if !self.config.adjustment_window.contains(game.date) {
            return (AdjustmentContext::default(), AdjustmentContext::default());
        }

        let note = game
            .note
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();
        let mentions = |team: &str| !note.is_empty() && note.contains(&team.to_lowercase());

        let home_ctx = AdjustmentContext {
            pitcher_delta: self
                .overlay
                .pitcher_adjustment(game.home_pitcher.as_deref().unwrap_or("")),
            injury_delta: self
                .overlay
                .injury_adjustment(&game.home_team, mentions(&game.home_team)),
        };
        let away_ctx = AdjustmentContext {
            pitcher_delta: self
                .overlay
                .pitcher_adjustment(game.away_pitcher.as_deref().unwrap_or("")),
            injury_delta: self
                .overlay
                .injury_adjustment(&game.away_team, mentions(&game.away_team)),
        };

        (home_ctx, away_ctx)
    }
}
