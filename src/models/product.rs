//! Feeding product input model
//!
//! Nutrient densities of the tube-feeding product, as printed on the label:
//! energy per ml, protein and water per 100 ml.

use serde::{Deserialize, Serialize};

use crate::error::{check_range, CalcResult};

/// Nutrient densities of the feeding product
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    /// Energy density in kcal/ml, domain [0.5, 3.0]
    pub energy_density: f64,
    /// Protein content in g/100ml, domain [0.0, 20.0]
    pub protein_density_per_100ml: f64,
    /// Water content in g/100ml, domain [50.0, 100.0]
    pub water_density_per_100ml: f64,
}

impl ProductInput {
    /// Check every field against its declared domain
    pub fn validate(&self) -> CalcResult<()> {
        check_range("energy_density", self.energy_density, 0.5, 3.0)?;
        check_range(
            "protein_density_per_100ml",
            self.protein_density_per_100ml,
            0.0,
            20.0,
        )?;
        check_range(
            "water_density_per_100ml",
            self.water_density_per_100ml,
            50.0,
            100.0,
        )?;
        Ok(())
    }
}
