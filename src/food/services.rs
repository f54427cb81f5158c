use time::Date;

use crate::food::depletion::estimate_depletion;
use crate::food::dto::{DerivedFields, FeedingOutcome, FoodEntry};
use crate::food::error::FoodCalcError;
use crate::food::variance::classify;

/// Recomputes every derived field for an entry. The CRUD layer calls this on
/// create/edit to refresh the countdown, and again when the entry is marked
/// finished (or its finish date edited) to produce the feeding outcome.
///
/// `today` is passed in rather than read from a clock, so reads are
/// deterministic and nothing is ever served stale.
pub fn refresh_entry(entry: &FoodEntry, today: Date) -> Result<DerivedFields, FoodCalcError> {
    let estimate = estimate_depletion(entry, today)?;

    let outcome = match (entry.date_started(), entry.date_finished()) {
        (Some(started), Some(finished)) => {
            // Inverted ranges clamp to zero; date-ordering validation is the
            // caller's job.
            let actual_days_elapsed = (finished - started).whole_days().max(0);
            let variance = classify(estimate.expected_days, actual_days_elapsed)?;
            Some(FeedingOutcome {
                actual_days_elapsed,
                feeding_status: variance.status,
                variance_percent: variance.variance_percent,
            })
        }
        _ => None,
    };

    tracing::debug!(
        expected_days = estimate.expected_days,
        remaining_days = estimate.remaining_days,
        finished = outcome.is_some(),
        "food entry derived fields refreshed"
    );

    Ok(DerivedFields {
        expected_days: estimate.expected_days,
        remaining_days: estimate.remaining_days,
        outcome,
    })
}
