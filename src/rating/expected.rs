//! Logistic expected-score model
//!
//! Pure win-probability function over a pair of ratings; everything else in
//! the engine builds on it.

/// Probability in (0, 1) that the first side wins
///
/// Logistic form `1 / (1 + 10^((b − a) / 400))`. Satisfies
/// `expected_score(a, b) + expected_score(b, a) == 1` for all finite inputs.
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / 400.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_equal_ratings_are_even() {
        assert!((expected_score(1500.0, 1500.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_favorite_is_above_half() {
        let favorite = expected_score(1600.0, 1400.0);
        let underdog = expected_score(1400.0, 1600.0);

        assert!(favorite > 0.5);
        assert!(underdog < 0.5);
        assert!((favorite + underdog - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_400_point_gap() {
        // A 400-point favorite wins ten times for every underdog win
        let p = expected_score(1900.0, 1500.0);
        assert!((p - 10.0 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_worked_home_field_scenario() {
        // 1500 vs 1500 with the default 35-point home bump applied
        let p = expected_score(1535.0, 1500.0);
        assert!((p - 0.5502).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_symmetric_identity(a in 500.0..3000.0f64, b in 500.0..3000.0f64) {
            let total = expected_score(a, b) + expected_score(b, a);
            prop_assert!((total - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_bounded_open_interval(a in 0.0..4000.0f64, b in 0.0..4000.0f64) {
            let p = expected_score(a, b);
            prop_assert!(p > 0.0 && p < 1.0);
        }

        #[test]
        fn prop_monotone_in_first_rating(a in 500.0..3000.0f64, b in 500.0..3000.0f64) {
            prop_assert!(expected_score(a + 10.0, b) > expected_score(a, b));
        }
    }
}
