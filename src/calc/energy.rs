//! Basal energy regression
//!
//! Fixed-coefficient weight/age regression distinguished by sex. The
//! regression evaluates in MJ/day and is converted to kcal/day; the
//! coefficients are exact constants, not a tunable physiological model.

use crate::models::Sex;

// ============================================================================
// Regression Constants
// ============================================================================

/// kcal per MJ, conversion applied after the MJ-valued regression
pub const KCAL_PER_MJ: f64 = 239.0;
/// MJ/day per kg body weight
pub const WEIGHT_COEFF: f64 = 0.047;
/// MJ/day subtracted per year of age
pub const AGE_COEFF: f64 = 0.01452;
/// Regression intercept in MJ/day
pub const INTERCEPT_MJ: f64 = 3.21;
/// Additional MJ/day term applied for male patients
pub const MALE_OFFSET_MJ: f64 = 1.009;

/// Estimate resting energy expenditure in kcal/day
///
/// female: `(0.047*weight − 0.01452*age + 3.21) * 239`
/// male:   `(0.047*weight + 1.009 − 0.01452*age + 3.21) * 239`
pub fn basal_energy_kcal(sex: Sex, weight_kg: f64, age_years: f64) -> f64 {
    match sex {
        Sex::Female => (WEIGHT_COEFF * weight_kg - AGE_COEFF * age_years + INTERCEPT_MJ) * KCAL_PER_MJ,
        Sex::Male => {
            (WEIGHT_COEFF * weight_kg + MALE_OFFSET_MJ - AGE_COEFF * age_years + INTERCEPT_MJ)
                * KCAL_PER_MJ
        }
    }
}
