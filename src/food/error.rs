use thiserror::Error;

use crate::food::dto::FoodType;
use crate::food::units::{EntryField, MassUnit};

/// Validation failures surfaced to the CRUD layer. All recoverable; the core
/// never logs, retries, or swallows these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FoodCalcError {
    #[error("`{unit}` is not a valid {field} unit for {food_type} food")]
    InvalidUnit {
        food_type: FoodType,
        field: EntryField,
        unit: MassUnit,
    },

    #[error("{field} value `{raw}` is not a positive number")]
    InvalidQuantity { field: EntryField, raw: String },

    #[error("daily amount normalizes to zero grams")]
    DivisionByZero,

    #[error("expected days must be positive, got {0}")]
    InvalidExpectedDays(i64),
}
