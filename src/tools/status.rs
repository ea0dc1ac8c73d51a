//! Service status tool
//!
//! Runtime status information and usage instructions for the planner
//! service. The calculator itself is stateless; the counters here only
//! describe the service process.

use std::time::Instant;

use serde::Serialize;

use crate::build_info::BuildInfo;

/// Usage instructions for AI assistants
pub const PLAN_INSTRUCTIONS: &str = r#"
# Enteral Feeding Calculator Instructions

This service computes daily nutritional targets and a tube-feeding delivery
plan for a single adult patient.

## Workflow

1. Collect the patient data: weight (kg), age (years), sex, activity level
   (PAL) and the protein target in g per kg body weight.
2. Collect the product data from the feeding product's label: energy
   density (kcal/ml), protein content (g/100ml), water content (g/100ml).
3. Call `compute_feeding_plan` with these values. The response contains the
   full-precision plan plus pre-formatted summary lines.
4. Optionally call `chart_infusion_rates` with the same values and a
   `file_path` to write a PNG bar chart of the pump rates for 16, 20 and
   24 hour infusions.

## Input domains

| Field | Domain |
|---|---|
| weight_kg | 30 - 200 |
| age_years | 18 - 100 (adults only) |
| sex | "male" or "female" |
| activity_factor | 1.0 - 2.4 (default 1.3) |
| protein_target_per_kg | 0.6 - 2.0 (default 1.2) |
| energy_density | 0.5 - 3.0 kcal/ml |
| protein_density_per_100ml | 0 - 20 g/100ml |
| water_density_per_100ml | 50 - 100 g/100ml |

Any value outside its domain is rejected before computation and no result
is produced. Re-invoke with corrected input; every invocation is
independent and idempotent.

## Reading the result

- `supplemental_water_g` is the water to administer on top of the feed.
  It is never negative: products watery enough to cover the requirement
  report 0.
- `protein_sufficient` is true when the delivered protein reaches the
  requirement (equality counts as sufficient). Surface the summary warning
  when it is false.
"#;

/// Runtime status snapshot
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub build: BuildInfo,
    pub uptime_seconds: u64,
    pub plans_computed: u64,
    pub charts_rendered: u64,
}

/// Tracks service-level counters since startup
pub struct StatusTracker {
    start_time: Instant,
    plans_computed: u64,
    charts_rendered: u64,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            plans_computed: 0,
            charts_rendered: 0,
        }
    }

    pub fn record_plan(&mut self) {
        self.plans_computed += 1;
    }

    pub fn record_chart(&mut self) {
        self.charts_rendered += 1;
    }

    /// Get the current status snapshot
    pub fn get_status(&self) -> ServiceStatus {
        ServiceStatus {
            build: BuildInfo::current(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            plans_computed: self.plans_computed,
            charts_rendered: self.charts_rendered,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
