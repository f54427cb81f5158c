//! Consumable-tracking core for Pettr: unit normalization, days-to-depletion
//! estimates, and feeding-variance classification for dry and wet food
//! entries. Pure computation; the surrounding CRUD layer owns persistence
//! and validation policy.

pub mod food;

pub use food::depletion::{estimate_depletion, DepletionEstimate};
pub use food::display::{format_status_message, status_icon, status_label};
pub use food::dto::{DerivedFields, DryFood, FeedingOutcome, FoodEntry, FoodType, WetFood};
pub use food::error::FoodCalcError;
pub use food::services::refresh_entry;
pub use food::units::{to_grams, EntryField, MassUnit};
pub use food::variance::{classify, FeedingStatus, VarianceOutcome};
