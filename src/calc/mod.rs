//! Feeding plan computation
//!
//! Single pass: validate both input records, evaluate the closed-form
//! requirement formulas, derive delivery volumes and pump rates. Stateless
//! and idempotent; identical inputs always produce identical plans.

pub mod energy;

pub use energy::basal_energy_kcal;

use crate::error::CalcResult;
use crate::models::{FeedingPlan, InfusionRate, PatientInput, ProductInput};

/// Daily water requirement in g per kg body weight
pub const WATER_G_PER_KG: f64 = 35.0;

/// Infusion durations the plan quotes pump rates for, in hours
pub const INFUSION_DURATIONS_H: [u32; 3] = [16, 20, 24];

/// Compute the daily feeding plan for one patient/product combination
///
/// Fails with `ValidationError` if any field is outside its declared
/// domain; no partial output is produced in that case.
pub fn compute(patient: &PatientInput, product: &ProductInput) -> CalcResult<FeedingPlan> {
    if let Err(e) = patient.validate() {
        tracing::warn!("rejected patient input: {}", e);
        return Err(e);
    }
    if let Err(e) = product.validate() {
        tracing::warn!("rejected product input: {}", e);
        return Err(e);
    }

    let basal_energy_kcal = energy::basal_energy_kcal(patient.sex, patient.weight_kg, patient.age_years);
    let daily_energy_kcal = basal_energy_kcal * patient.activity_factor;
    let daily_protein_need_g = patient.protein_target_per_kg * patient.weight_kg;

    // Label densities are per 100 ml; convert before scaling by volume
    let protein_density_per_ml = product.protein_density_per_100ml / 100.0;
    let water_density_per_ml = product.water_density_per_100ml / 100.0;

    let feed_volume_ml_per_day = daily_energy_kcal / product.energy_density;
    let protein_delivered_g = feed_volume_ml_per_day * protein_density_per_ml;

    let daily_water_need_g = WATER_G_PER_KG * patient.weight_kg;
    let water_from_feed_g = feed_volume_ml_per_day * water_density_per_ml;
    // Dense products can carry more water than the requirement; no negative
    // supplement is ever reported
    let supplemental_water_g = (daily_water_need_g - water_from_feed_g).max(0.0);

    let protein_sufficient = protein_delivered_g >= daily_protein_need_g;

    let hourly_rates = INFUSION_DURATIONS_H
        .iter()
        .map(|&h| InfusionRate {
            duration_hours: h,
            ml_per_hour: feed_volume_ml_per_day / h as f64,
        })
        .collect();

    let plan = FeedingPlan {
        basal_energy_kcal,
        daily_energy_kcal,
        daily_protein_need_g,
        daily_water_need_g,
        feed_volume_ml_per_day,
        protein_delivered_g,
        water_from_feed_g,
        supplemental_water_g,
        protein_sufficient,
        hourly_rates,
    };

    tracing::debug!(
        daily_energy_kcal = plan.daily_energy_kcal,
        feed_volume_ml_per_day = plan.feed_volume_ml_per_day,
        protein_sufficient = plan.protein_sufficient,
        "computed feeding plan"
    );

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::Sex;

    fn reference_patient() -> PatientInput {
        PatientInput {
            weight_kg: 70.0,
            age_years: 30.0,
            sex: Sex::Male,
            activity_factor: 1.3,
            protein_target_per_kg: 1.2,
        }
    }

    fn reference_product() -> ProductInput {
        ProductInput {
            energy_density: 1.5,
            protein_density_per_100ml: 6.3,
            water_density_per_100ml: 80.0,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let plan = compute(&reference_patient(), &reference_product()).unwrap();

        assert!((plan.basal_energy_kcal - 1690.5426).abs() < 1e-6);
        assert!((plan.daily_energy_kcal - 2197.70538).abs() < 1e-6);
        assert!((plan.daily_protein_need_g - 84.0).abs() < 1e-9);
        assert!((plan.feed_volume_ml_per_day - 1465.13692).abs() < 1e-4);
        assert!((plan.protein_delivered_g - 92.3036).abs() < 1e-3);
        assert!(plan.protein_sufficient);
        assert!((plan.daily_water_need_g - 2450.0).abs() < 1e-9);
        assert!((plan.water_from_feed_g - 1172.1095).abs() < 1e-3);
        assert!((plan.supplemental_water_g - 1277.8905).abs() < 1e-3);
    }

    #[test]
    fn test_female_variant_differs_by_male_offset() {
        let male = compute(&reference_patient(), &reference_product()).unwrap();

        let mut patient = reference_patient();
        patient.sex = Sex::Female;
        let female = compute(&patient, &reference_product()).unwrap();

        let diff = male.basal_energy_kcal - female.basal_energy_kcal;
        assert!((diff - 1.009 * 239.0).abs() < 1e-9);
    }

    #[test]
    fn test_hourly_rates_fixed_durations_in_order() {
        let plan = compute(&reference_patient(), &reference_product()).unwrap();

        assert_eq!(plan.hourly_rates.len(), 3);
        let durations: Vec<u32> = plan.hourly_rates.iter().map(|r| r.duration_hours).collect();
        assert_eq!(durations, vec![16, 20, 24]);

        for rate in &plan.hourly_rates {
            let expected = plan.feed_volume_ml_per_day / rate.duration_hours as f64;
            assert_eq!(rate.ml_per_hour, expected);
        }

        assert!((plan.hourly_rates[0].ml_per_hour - 91.5711).abs() < 1e-3);
        assert!((plan.hourly_rates[1].ml_per_hour - 73.2568).abs() < 1e-3);
        assert!((plan.hourly_rates[2].ml_per_hour - 61.0474).abs() < 1e-3);
    }

    #[test]
    fn test_supplemental_water_clamped_to_zero() {
        // Small, old patient with a watery low-energy product: the feed
        // volume alone carries more water than the 35 g/kg requirement
        let patient = PatientInput {
            weight_kg: 30.0,
            age_years: 100.0,
            sex: Sex::Female,
            activity_factor: 1.0,
            protein_target_per_kg: 0.6,
        };
        let product = ProductInput {
            energy_density: 0.5,
            protein_density_per_100ml: 4.0,
            water_density_per_100ml: 100.0,
        };

        let plan = compute(&patient, &product).unwrap();
        assert!(plan.water_from_feed_g > plan.daily_water_need_g);
        assert_eq!(plan.supplemental_water_g, 0.0);
    }

    #[test]
    fn test_supplemental_water_never_negative() {
        for &energy_density in &[0.5, 1.0, 1.5, 3.0] {
            for &water_density in &[50.0, 80.0, 100.0] {
                let product = ProductInput {
                    energy_density,
                    protein_density_per_100ml: 6.3,
                    water_density_per_100ml: water_density,
                };
                let plan = compute(&reference_patient(), &product).unwrap();
                assert!(plan.supplemental_water_g >= 0.0);
            }
        }
    }

    #[test]
    fn test_protein_flag_matches_comparison() {
        // Zero-protein product can never cover the need
        let mut product = reference_product();
        product.protein_density_per_100ml = 0.0;
        let plan = compute(&reference_patient(), &product).unwrap();
        assert_eq!(plan.protein_delivered_g, 0.0);
        assert!(!plan.protein_sufficient);

        // Flag is exactly the >= comparison, equality included
        let plan = compute(&reference_patient(), &reference_product()).unwrap();
        assert_eq!(
            plan.protein_sufficient,
            plan.protein_delivered_g >= plan.daily_protein_need_g
        );
    }

    #[test]
    fn test_idempotent() {
        let a = compute(&reference_patient(), &reference_product()).unwrap();
        let b = compute(&reference_patient(), &reference_product()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_under_age_rejected_before_computation() {
        let mut patient = reference_patient();
        patient.age_years = 17.0;
        let err = compute(&patient, &reference_product()).unwrap_err();
        assert_eq!(err, ValidationError::AdultOnly { age_years: 17.0 });
    }

    #[test]
    fn test_invalid_product_rejected() {
        let mut product = reference_product();
        product.water_density_per_100ml = 101.0;
        assert!(matches!(
            compute(&reference_patient(), &product).unwrap_err(),
            ValidationError::OutOfRange {
                field: "water_density_per_100ml",
                ..
            }
        ));
    }
}
