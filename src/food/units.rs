use std::fmt;

use serde::{Deserialize, Serialize};

use crate::food::dto::FoodType;
use crate::food::error::FoodCalcError;

/// Mass units accepted anywhere on a food entry. Which ones are valid for a
/// given field depends on the food type, see [`allowed_units`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    Kg,
    Pounds,
    Grams,
    Cups,
    Oz,
}

impl MassUnit {
    /// Fixed conversion factor into grams. Cups uses the dry-food
    /// approximation (~240 g per cup of kibble).
    pub const fn grams_factor(self) -> f64 {
        match self {
            MassUnit::Kg => 1000.0,
            MassUnit::Pounds => 453.592,
            MassUnit::Grams => 1.0,
            MassUnit::Cups => 240.0,
            MassUnit::Oz => 28.3495,
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MassUnit::Kg => "kg",
            MassUnit::Pounds => "pounds",
            MassUnit::Grams => "grams",
            MassUnit::Cups => "cups",
            MassUnit::Oz => "oz",
        };
        f.write_str(s)
    }
}

/// Quantity-bearing fields of a food entry, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    BagWeight,
    WeightPerUnit,
    NumberOfUnits,
    DailyAmount,
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryField::BagWeight => "bagWeight",
            EntryField::WeightPerUnit => "weightPerUnit",
            EntryField::NumberOfUnits => "numberOfUnits",
            EntryField::DailyAmount => "dailyAmount",
        };
        f.write_str(s)
    }
}

/// Units permitted for `field` on a `food_type` entry. Empty slice means the
/// field does not carry a mass unit for that food type at all (e.g. there is
/// no bag weight on wet food).
pub fn allowed_units(food_type: FoodType, field: EntryField) -> &'static [MassUnit] {
    use MassUnit::*;
    match (food_type, field) {
        (FoodType::Dry, EntryField::BagWeight) => &[Kg, Pounds, Grams, Cups, Oz],
        (FoodType::Dry, EntryField::DailyAmount) => &[Grams, Cups],
        (FoodType::Wet, EntryField::WeightPerUnit) => &[Grams, Oz],
        (FoodType::Wet, EntryField::DailyAmount) => &[Grams, Oz],
        _ => &[],
    }
}

/// Parses one of the wire's decimal-string quantities. Rejects non-numeric,
/// non-finite, and negative input; zero is left for the caller to judge
/// (a zero daily amount is a division-by-zero, not a bad quantity).
pub fn parse_quantity(raw: &str, field: EntryField) -> Result<f64, FoodCalcError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FoodCalcError::InvalidQuantity {
            field,
            raw: raw.to_string(),
        })?;
    if !value.is_finite() || value < 0.0 {
        return Err(FoodCalcError::InvalidQuantity {
            field,
            raw: raw.to_string(),
        });
    }
    Ok(value)
}

/// Normalizes a positive quantity to grams, enforcing the per-food-type
/// allowed-unit set for the field.
pub fn to_grams(
    quantity: f64,
    unit: MassUnit,
    food_type: FoodType,
    field: EntryField,
) -> Result<f64, FoodCalcError> {
    if !allowed_units(food_type, field).contains(&unit) {
        return Err(FoodCalcError::InvalidUnit {
            food_type,
            field,
            unit,
        });
    }
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(FoodCalcError::InvalidQuantity {
            field,
            raw: quantity.to_string(),
        });
    }
    Ok(quantity * unit.grams_factor())
}
