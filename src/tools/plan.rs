//! Feeding plan tool
//!
//! Wraps the calculator core for the MCP surface: full-precision plan plus
//! human-readable summary lines. Display rounding lives here, never in the
//! core.

use serde::Serialize;

use crate::calc;
use crate::error::CalcResult;
use crate::models::{FeedingPlan, PatientInput, ProductInput};

/// Response for the compute_feeding_plan tool
#[derive(Debug, Serialize)]
pub struct FeedingPlanResponse {
    /// Full-precision result record
    pub plan: FeedingPlan,
    /// Pre-formatted lines for direct display
    pub summary: Vec<String>,
}

/// Compute a plan and bundle it with display lines
pub fn compute_feeding_plan(
    patient: &PatientInput,
    product: &ProductInput,
) -> CalcResult<FeedingPlanResponse> {
    let plan = calc::compute(patient, product)?;
    let summary = summary_lines(&plan);
    Ok(FeedingPlanResponse { plan, summary })
}

/// Format a plan for display
///
/// Volumes and water in whole units, protein and pump rates to one decimal.
pub fn summary_lines(plan: &FeedingPlan) -> Vec<String> {
    let mut lines = vec![
        format!("Energy requirement: {:.0} kcal/day", plan.daily_energy_kcal),
        format!("Protein requirement: {:.1} g/day", plan.daily_protein_need_g),
        format!("Total water requirement: {:.0} g/day", plan.daily_water_need_g),
        format!("Required feed volume: {:.0} ml/day", plan.feed_volume_ml_per_day),
        format!("Protein delivered: {:.1} g/day", plan.protein_delivered_g),
        format!("Water from feed: {:.0} g/day", plan.water_from_feed_g),
        format!("Supplemental water: {:.0} g/day", plan.supplemental_water_g),
    ];

    if plan.protein_sufficient {
        lines.push("Protein requirement is covered".to_string());
    } else {
        lines.push("WARNING: protein requirement is NOT covered".to_string());
    }

    for rate in &plan.hourly_rates {
        lines.push(format!(
            "{} h infusion: {:.1} ml/h",
            rate.duration_hours, rate.ml_per_hour
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn reference_inputs() -> (PatientInput, ProductInput) {
        (
            PatientInput {
                weight_kg: 70.0,
                age_years: 30.0,
                sex: Sex::Male,
                activity_factor: 1.3,
                protein_target_per_kg: 1.2,
            },
            ProductInput {
                energy_density: 1.5,
                protein_density_per_100ml: 6.3,
                water_density_per_100ml: 80.0,
            },
        )
    }

    #[test]
    fn test_summary_reference_scenario() {
        let (patient, product) = reference_inputs();
        let response = compute_feeding_plan(&patient, &product).unwrap();

        assert_eq!(response.summary[0], "Energy requirement: 2198 kcal/day");
        assert_eq!(response.summary[1], "Protein requirement: 84.0 g/day");
        assert_eq!(response.summary[2], "Total water requirement: 2450 g/day");
        assert_eq!(response.summary[3], "Required feed volume: 1465 ml/day");
        assert_eq!(response.summary[4], "Protein delivered: 92.3 g/day");
        assert_eq!(response.summary[5], "Water from feed: 1172 g/day");
        assert_eq!(response.summary[6], "Supplemental water: 1278 g/day");
        assert_eq!(response.summary[7], "Protein requirement is covered");
        assert_eq!(response.summary[8], "16 h infusion: 91.6 ml/h");
        assert_eq!(response.summary[9], "20 h infusion: 73.3 ml/h");
        assert_eq!(response.summary[10], "24 h infusion: 61.0 ml/h");
    }

    #[test]
    fn test_summary_warns_on_insufficient_protein() {
        let (patient, mut product) = reference_inputs();
        product.protein_density_per_100ml = 0.5;
        let response = compute_feeding_plan(&patient, &product).unwrap();

        assert!(!response.plan.protein_sufficient);
        assert!(response
            .summary
            .iter()
            .any(|l| l.contains("NOT covered")));
    }

    #[test]
    fn test_summary_keeps_full_precision_in_plan() {
        let (patient, product) = reference_inputs();
        let response = compute_feeding_plan(&patient, &product).unwrap();

        // Rounding is display-only; the record keeps the exact value
        assert!(response.plan.feed_volume_ml_per_day != 1465.0);
        assert!((response.plan.feed_volume_ml_per_day - 1465.13692).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_input_produces_no_response() {
        let (mut patient, product) = reference_inputs();
        patient.age_years = 16.0;
        assert!(compute_feeding_plan(&patient, &product).is_err());
    }
}
