//! Feeding plan result model
//!
//! Pure value records derived from the two input records. All fields keep
//! full floating-point precision; display rounding is the caller's concern.

use serde::{Deserialize, Serialize};

/// Pump rate for one infusion duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfusionRate {
    pub duration_hours: u32,
    pub ml_per_hour: f64,
}

/// Daily targets and delivery plan for one patient/product combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingPlan {
    /// Resting energy expenditure before activity adjustment (kcal/day)
    pub basal_energy_kcal: f64,
    /// Basal energy scaled by the activity factor (kcal/day)
    pub daily_energy_kcal: f64,
    /// Protein requirement (g/day)
    pub daily_protein_need_g: f64,
    /// Total water requirement (g/day)
    pub daily_water_need_g: f64,

    /// Product volume needed to meet the energy requirement (ml/day)
    pub feed_volume_ml_per_day: f64,
    /// Protein contained in the daily feed volume (g/day)
    pub protein_delivered_g: f64,
    /// Water contained in the daily feed volume (g/day)
    pub water_from_feed_g: f64,
    /// Extra water to administer on top of the feed, clamped at 0 (g/day)
    pub supplemental_water_g: f64,

    /// Whether the delivered protein covers the requirement
    pub protein_sufficient: bool,

    /// Pump rates for the fixed infusion durations, in ascending order
    pub hourly_rates: Vec<InfusionRate>,
}
