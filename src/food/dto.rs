use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::food::units::MassUnit;
use crate::food::variance::FeedingStatus;

// The app stores dates as ISO calendar strings ("2024-01-01").
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

// Deserializes via `Option<String>` because the generated `iso_date::option`
// visitor cannot see JSON `null` through the internally-tagged enum's
// buffering (serde's `Content` hands null to `visit_unit`, which it lacks).
mod iso_date_opt {
    use serde::{Deserialize, Deserializer};
    use time::format_description::BorrowedFormatItem;
    use time::macros::format_description;
    use time::Date;

    pub use super::iso_date::option::serialize;

    const FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => Date::parse(&s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    Dry,
    Wet,
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FoodType::Dry => "dry",
            FoodType::Wet => "wet",
        })
    }
}

/// A tracked bag/case of food as stored by the app. Tagged on `foodType` so
/// dry-only and wet-only fields cannot show up on the wrong variant.
/// Quantities stay decimal strings exactly as stored; the core only reads
/// them and never writes anything back except derived fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "foodType", rename_all = "lowercase")]
pub enum FoodEntry {
    Dry(DryFood),
    Wet(WetFood),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryFood {
    pub bag_weight: String,
    pub bag_weight_unit: MassUnit,
    pub daily_amount: String,
    pub daily_amount_unit: MassUnit,
    #[serde(default, with = "iso_date_opt")]
    pub date_started: Option<Date>,
    #[serde(default, with = "iso_date_opt")]
    pub date_finished: Option<Date>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WetFood {
    pub number_of_units: u32,
    pub weight_per_unit: String,
    pub weight_per_unit_unit: MassUnit,
    pub daily_amount: String,
    pub daily_amount_unit: MassUnit,
    #[serde(default, with = "iso_date_opt")]
    pub date_started: Option<Date>,
    #[serde(default, with = "iso_date_opt")]
    pub date_finished: Option<Date>,
}

impl FoodEntry {
    pub fn food_type(&self) -> FoodType {
        match self {
            FoodEntry::Dry(_) => FoodType::Dry,
            FoodEntry::Wet(_) => FoodType::Wet,
        }
    }

    pub fn daily_amount(&self) -> (&str, MassUnit) {
        match self {
            FoodEntry::Dry(d) => (&d.daily_amount, d.daily_amount_unit),
            FoodEntry::Wet(w) => (&w.daily_amount, w.daily_amount_unit),
        }
    }

    pub fn date_started(&self) -> Option<Date> {
        match self {
            FoodEntry::Dry(d) => d.date_started,
            FoodEntry::Wet(w) => w.date_started,
        }
    }

    pub fn date_finished(&self) -> Option<Date> {
        match self {
            FoodEntry::Dry(d) => d.date_finished,
            FoodEntry::Wet(w) => w.date_finished,
        }
    }
}

/// Computed once an entry is finished. Bundled so `feedingStatus` and
/// `actualDaysElapsed` are persisted together or not at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingOutcome {
    pub actual_days_elapsed: i64,
    pub feeding_status: FeedingStatus,
    pub variance_percent: f64,
}

/// Everything the core hands back for the CRUD layer to persist onto the
/// entry and echo to API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedFields {
    pub expected_days: i64,
    pub remaining_days: i64,
    #[serde(flatten)]
    pub outcome: Option<FeedingOutcome>,
}
