//! Out-of-band run diagnostics
//!
//! Counts of records the run skipped or degraded. A run that completes with
//! nonzero counts here is still a valid run; the counts are how upstream
//! data problems surface without aborting rating history.

use serde::{Deserialize, Serialize};

/// Diagnostic counters for one simulation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunDiagnostics {
    /// Games fully processed and emitted
    pub games_processed: u64,
    /// Records skipped for a missing/invalid date, bad scores, or self-play
    pub malformed_records: u64,
    /// Records skipped because a team code is outside the configured league
    pub unknown_team_records: u64,
    /// Processed games that ended level (no rating movement)
    pub ties: u64,
    /// Overlay lookups that fell back to a zero delta on provider failure
    pub degraded_lookups: u64,
}

impl RunDiagnostics {
    /// Total records dropped from the stream
    pub fn skipped_records(&self) -> u64 {
        self.malformed_records + self.unknown_team_records
    }

    /// Whether the run consumed its input without data-quality incidents
    pub fn is_clean(&self) -> bool {
        self.skipped_records() == 0 && self.degraded_lookups == 0
    }
}

impl std::fmt::Display for RunDiagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games processed ({} ties), {} skipped ({} malformed, {} unknown team), {} degraded lookups",
            self.games_processed,
            self.ties,
            self.skipped_records(),
            self.malformed_records,
            self.unknown_team_records,
            self.degraded_lookups
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_records_total() {
        let diagnostics = RunDiagnostics {
            games_processed: 10,
            malformed_records: 2,
            unknown_team_records: 3,
            ties: 1,
            degraded_lookups: 0,
        };

        assert_eq!(diagnostics.skipped_records(), 5);
        assert!(!diagnostics.is_clean());
    }

    #[test]
    fn test_clean_run() {
        let diagnostics = RunDiagnostics {
            games_processed: 42,
            ties: 2,
            ..Default::default()
        };

        assert!(diagnostics.is_clean());
    }

    #[test]
    fn test_display_summary() {
        let diagnostics = RunDiagnostics {
            games_processed: 3,
            malformed_records: 1,
            ..Default::default()
        };

        let line = diagnostics.to_string();
        assert!(line.contains("3 games processed"));
        assert!(line.contains("1 malformed"));
    }
}
