use serde::{Deserialize, Serialize};

use crate::food::error::FoodCalcError;

/// How actual consumption compared to the estimate. Ordered from ran-out-
/// fastest to lasted-longest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedingStatus {
    Overfeeding,
    SlightlyOver,
    Normal,
    SlightlyUnder,
    Underfeeding,
}

/// Variance band (in percent) treated as on-track.
pub const NORMAL_BAND_PERCENT: f64 = 5.0;
/// Variance magnitude (in percent) at which "slightly" becomes the full
/// over/underfeeding status.
pub const EXTREME_BAND_PERCENT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarianceOutcome {
    pub status: FeedingStatus,
    pub variance_percent: f64,
}

/// Buckets the finished entry by how far actual days drifted from expected.
///
/// Positive variance means the food lasted longer than estimated (the pet is
/// being fed less than planned); negative means it ran out early. Bands:
/// |v| < 5% is normal, 5%..20% is slight, 20% and beyond is full
/// over/underfeeding. Symmetric around zero.
pub fn classify(expected_days: i64, actual_days_elapsed: i64) -> Result<VarianceOutcome, FoodCalcError> {
    if expected_days <= 0 {
        // Unreachable when the estimator produced expected_days, but callers
        // may feed stored values back in.
        return Err(FoodCalcError::InvalidExpectedDays(expected_days));
    }

    let variance_percent =
        (actual_days_elapsed - expected_days) as f64 / expected_days as f64 * 100.0;

    let status = if variance_percent.abs() < NORMAL_BAND_PERCENT {
        FeedingStatus::Normal
    } else if variance_percent <= -EXTREME_BAND_PERCENT {
        FeedingStatus::Overfeeding
    } else if variance_percent < 0.0 {
        FeedingStatus::SlightlyOver
    } else if variance_percent >= EXTREME_BAND_PERCENT {
        FeedingStatus::Underfeeding
    } else {
        FeedingStatus::SlightlyUnder
    };

    Ok(VarianceOutcome {
        status,
        variance_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_normal() {
        let out = classify(20, 20).unwrap();
        assert_eq!(out.status, FeedingStatus::Normal);
        assert_eq!(out.variance_percent, 0.0);
    }

    #[test]
    fn five_percent_early_is_slightly_over() {
        // Scenario from the tracker: 20 expected, finished after 19 days.
        let out = classify(20, 19).unwrap();
        assert_eq!(out.variance_percent, -5.0);
        assert_eq!(out.status, FeedingStatus::SlightlyOver);
    }

    #[test]
    fn band_edges() {
        // Just inside the normal band: 100 expected, 4% drift.
        assert_eq!(classify(100, 104).unwrap().status, FeedingStatus::Normal);
        assert_eq!(classify(100, 96).unwrap().status, FeedingStatus::Normal);

        // 5% is already a slight drift.
        assert_eq!(classify(100, 105).unwrap().status, FeedingStatus::SlightlyUnder);
        assert_eq!(classify(100, 95).unwrap().status, FeedingStatus::SlightlyOver);

        // 19% stays slight, 20% flips to the full status.
        assert_eq!(classify(100, 119).unwrap().status, FeedingStatus::SlightlyUnder);
        assert_eq!(classify(100, 120).unwrap().status, FeedingStatus::Underfeeding);
        assert_eq!(classify(100, 81).unwrap().status, FeedingStatus::SlightlyOver);
        assert_eq!(classify(100, 80).unwrap().status, FeedingStatus::Overfeeding);
    }

    #[test]
    fn classification_is_symmetric_around_zero() {
        let mirror = |s: FeedingStatus| match s {
            FeedingStatus::Overfeeding => FeedingStatus::Underfeeding,
            FeedingStatus::SlightlyOver => FeedingStatus::SlightlyUnder,
            FeedingStatus::Normal => FeedingStatus::Normal,
            FeedingStatus::SlightlyUnder => FeedingStatus::SlightlyOver,
            FeedingStatus::Underfeeding => FeedingStatus::Overfeeding,
        };
        for d in 0..=60 {
            let under = classify(60, 60 + d).unwrap();
            let over = classify(60, 60 - d).unwrap();
            assert_eq!(under.status, mirror(over.status), "d = {d}");
            assert_eq!(under.variance_percent, -over.variance_percent);
        }
    }

    #[test]
    fn ran_out_immediately_is_overfeeding() {
        let out = classify(10, 0).unwrap();
        assert_eq!(out.status, FeedingStatus::Overfeeding);
        assert_eq!(out.variance_percent, -100.0);
    }

    #[test]
    fn zero_expected_days_is_guarded() {
        assert_eq!(
            classify(0, 5).unwrap_err(),
            FoodCalcError::InvalidExpectedDays(0)
        );
        assert_eq!(
            classify(-3, 5).unwrap_err(),
            FoodCalcError::InvalidExpectedDays(-3)
        );
    }

    #[test]
    fn status_wire_tokens_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&FeedingStatus::SlightlyUnder).unwrap(),
            r#""slightly-under""#
        );
        let s: FeedingStatus = serde_json::from_str(r#""overfeeding""#).unwrap();
        assert_eq!(s, FeedingStatus::Overfeeding);
    }
}
