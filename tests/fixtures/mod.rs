//! Shared fixtures for integration tests

use chrono::NaiveDate;
use pennant::types::RawGameRecord;
use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Install a test subscriber once; respects RUST_LOG
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A plain final score with no pitcher/note extras
pub fn game(
    game_date: NaiveDate,
    home: &str,
    away: &str,
    home_score: i64,
    away_score: i64,
) -> RawGameRecord {
    RawGameRecord::score_line(game_date, home, away, home_score, away_score)
}

/// A current-season game with probable pitchers and a note attached
pub fn game_with_context(
    game_date: NaiveDate,
    home: &str,
    away: &str,
    home_score: i64,
    away_score: i64,
    home_pitcher: &str,
    away_pitcher: &str,
    note: &str,
) -> RawGameRecord {
    let mut record = game(game_date, home, away, home_score, away_score);
    record.home_pitcher = Some(home_pitcher.to_string());
    record.away_pitcher = Some(away_pitcher.to_string());
    record.note = Some(note.to_string());
    record
}
