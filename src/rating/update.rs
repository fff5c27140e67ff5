//! Margin-of-victory scaled rating update rule
//!
//! Given two adjusted ratings and a score differential, computes new ratings
//! using a MOV-scaled, rating-gap-dampened K-factor. Called only for games
//! with a strict winner; ties leave both ratings untouched by policy.

use crate::rating::expected::expected_score;
use crate::utils::rating_difference;

/// The update rule with its tunable base K-factor
#[derive(Debug, Clone, Copy)]
pub struct RatingUpdateRule {
    base_k: f64,
}

impl Default for RatingUpdateRule {
    fn default() -> Self {
        Self::new(20.0)
    }
}

impl RatingUpdateRule {
    pub fn new(base_k: f64) -> Self {
        Self { base_k }
    }

    pub fn base_k(&self) -> f64 {
        self.base_k
    }

    /// Margin-of-victory multiplier on the K-factor
    ///
    /// Larger margins inflate the effective K; a larger pre-existing rating
    /// gap dampens it, so a heavy favorite cannot swing wildly against a
    /// mismatch.
    pub fn mov_multiplier(score_diff: i64, rating_a: f64, rating_b: f64) -> f64 {
        let margin = score_diff.unsigned_abs() as f64;
        (margin + 1.0).powf(0.8) / (7.5 + 0.006 * rating_difference(rating_a, rating_b))
    }

    /// Apply one decisive result: `(winner, loser)` adjusted ratings in,
    /// updated pair out
    ///
    /// Zero-sum: the winner's gain equals the loser's loss exactly. No bound
    /// is placed on either rating; clamping is the caller's prerogative.
    pub fn update(&self, winner: f64, loser: f64, score_diff: i64) -> (f64, f64) {
        let k = self.base_k * Self::mov_multiplier(score_diff, winner, loser);
        let exchanged = k * (1.0 - expected_score(winner, loser));
        (winner + exchanged, loser - exchanged)
    }
}
