//! Patient input model
//!
//! Immutable record describing the patient whose feeding plan is computed.
//! Constructed fresh for every computation; nothing carries over between
//! invocations.

use serde::{Deserialize, Serialize};

use crate::error::{check_range, CalcResult, ValidationError};

/// Biological sex, selects the basal-energy regression variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse from string (lenient, for tool parameters)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Patient attributes for a single computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    /// Body weight in kilograms, domain [30, 200]
    pub weight_kg: f64,
    /// Age in years, domain [18, 100]
    pub age_years: f64,
    pub sex: Sex,
    /// Physical Activity Level, multiplier on basal energy, domain [1.0, 2.4]
    pub activity_factor: f64,
    /// Protein target in g per kg body weight per day, domain [0.6, 2.0]
    pub protein_target_per_kg: f64,
}

impl PatientInput {
    /// Check every field against its declared domain
    ///
    /// Under-age input gets the dedicated adult-only error rather than the
    /// generic range message.
    pub fn validate(&self) -> CalcResult<()> {
        check_range("weight_kg", self.weight_kg, 30.0, 200.0)?;
        if self.age_years < 18.0 {
            return Err(ValidationError::AdultOnly {
                age_years: self.age_years,
            });
        }
        // NaN slips past the < comparison; the range check rejects it
        check_range("age_years", self.age_years, 18.0, 100.0)?;
        check_range("activity_factor", self.activity_factor, 1.0, 2.4)?;
        check_range(
            "protein_target_per_kg",
            self.protein_target_per_kg,
            0.6,
            2.0,
        )?;
        Ok(())
    }
}
