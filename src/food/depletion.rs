use time::Date;

use crate::food::dto::FoodEntry;
use crate::food::error::FoodCalcError;
use crate::food::units::{parse_quantity, to_grams, EntryField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepletionEstimate {
    pub expected_days: i64,
    pub remaining_days: i64,
}

/// Total mass of the consumable in grams: the bag for dry food, units times
/// weight-per-unit for wet food.
pub fn total_mass_grams(entry: &FoodEntry) -> Result<f64, FoodCalcError> {
    match entry {
        FoodEntry::Dry(dry) => {
            let qty = parse_quantity(&dry.bag_weight, EntryField::BagWeight)?;
            to_grams(qty, dry.bag_weight_unit, entry.food_type(), EntryField::BagWeight)
        }
        FoodEntry::Wet(wet) => {
            if wet.number_of_units == 0 {
                return Err(FoodCalcError::InvalidQuantity {
                    field: EntryField::NumberOfUnits,
                    raw: "0".into(),
                });
            }
            let qty = parse_quantity(&wet.weight_per_unit, EntryField::WeightPerUnit)?;
            let per_unit = to_grams(
                qty,
                wet.weight_per_unit_unit,
                entry.food_type(),
                EntryField::WeightPerUnit,
            )?;
            Ok(f64::from(wet.number_of_units) * per_unit)
        }
    }
}

/// Daily consumption rate in grams. A stored `"0"` is a division-by-zero,
/// not a malformed quantity; negative or non-numeric input still rejects as
/// `InvalidQuantity`.
pub fn daily_amount_grams(entry: &FoodEntry) -> Result<f64, FoodCalcError> {
    let (raw, unit) = entry.daily_amount();
    let qty = parse_quantity(raw, EntryField::DailyAmount)?;
    if qty == 0.0 {
        return Err(FoodCalcError::DivisionByZero);
    }
    to_grams(qty, unit, entry.food_type(), EntryField::DailyAmount)
}

/// Expected days-to-depletion plus the live countdown as of `today`.
///
/// `expected_days` rounds up: a partial last day still counts as a day of
/// supply. `remaining_days` rounds down and floors at zero; an entry only
/// becomes "finished" when the user says so, never by the countdown alone.
pub fn estimate_depletion(entry: &FoodEntry, today: Date) -> Result<DepletionEstimate, FoodCalcError> {
    let total = total_mass_grams(entry)?;
    let daily = daily_amount_grams(entry)?;

    let expected_days = (total / daily).ceil() as i64;

    let elapsed_days = match entry.date_started() {
        Some(started) if today > started => (today - started).whole_days(),
        _ => 0,
    };
    let consumed = elapsed_days as f64 * daily;
    let remaining_grams = (total - consumed).max(0.0);
    let remaining_days = (remaining_grams / daily).floor() as i64;

    Ok(DepletionEstimate {
        expected_days,
        remaining_days,
    })
}
