//! Enteral Feeding Calculator MCP server
//!
//! Exposes the calculator core over MCP. The service is stateless apart
//! from status counters; every tool call builds fresh input records and
//! invokes the pure core once.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::models::{PatientInput, ProductInput, Sex};
use crate::tools::charts::{self, ChartResponse};
use crate::tools::plan;
use crate::tools::status::{StatusTracker, PLAN_INSTRUCTIONS};

/// Enteral Feeding Calculator MCP service
#[derive(Clone)]
pub struct PlannerService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<PlannerService>,
}

impl PlannerService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PlannerService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

fn default_activity_factor() -> f64 { 1.3 }
fn default_protein_target() -> f64 { 1.2 }
fn default_chart_width() -> u32 { 640 }
fn default_chart_height() -> u32 { 480 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComputeFeedingPlanParams {
    /// Body weight in kg (30-200)
    pub weight_kg: f64,
    /// Age in years (18-100, adults only)
    pub age_years: f64,
    /// "male" or "female"
    pub sex: String,
    /// Physical Activity Level (1.0-2.4)
    #[serde(default = "default_activity_factor")]
    pub activity_factor: f64,
    /// Protein target in g per kg body weight (0.6-2.0)
    #[serde(default = "default_protein_target")]
    pub protein_target_per_kg: f64,
    /// Product energy density in kcal/ml (0.5-3.0)
    pub energy_density: f64,
    /// Product protein content in g/100ml (0-20)
    pub protein_density_per_100ml: f64,
    /// Product water content in g/100ml (50-100)
    pub water_density_per_100ml: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ChartInfusionRatesParams {
    pub weight_kg: f64,
    pub age_years: f64,
    /// "male" or "female"
    pub sex: String,
    #[serde(default = "default_activity_factor")]
    pub activity_factor: f64,
    #[serde(default = "default_protein_target")]
    pub protein_target_per_kg: f64,
    pub energy_density: f64,
    pub protein_density_per_100ml: f64,
    pub water_density_per_100ml: f64,
    /// Where to write the PNG chart
    pub file_path: String,
    #[serde(default = "default_chart_width")]
    pub width: u32,
    #[serde(default = "default_chart_height")]
    pub height: u32,
}

/// Build the two input records from flat tool parameters
fn build_inputs(
    weight_kg: f64,
    age_years: f64,
    sex: &str,
    activity_factor: f64,
    protein_target_per_kg: f64,
    energy_density: f64,
    protein_density_per_100ml: f64,
    water_density_per_100ml: f64,
) -> Result<(PatientInput, ProductInput), McpError> {
    let sex = Sex::from_str(sex).ok_or_else(|| {
        McpError::invalid_params(
            format!("sex must be \"male\" or \"female\", got \"{}\"", sex),
            None,
        )
    })?;

    let patient = PatientInput {
        weight_kg,
        age_years,
        sex,
        activity_factor,
        protein_target_per_kg,
    };
    let product = ProductInput {
        energy_density,
        protein_density_per_100ml,
        water_density_per_100ml,
    };

    Ok((patient, product))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl PlannerService {
    #[tool(description = "Get the current status of the calculator service including build info and invocation counters")]
    async fn calc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for computing feeding plans. Call this when starting a planning session or when unsure how to use the calculator tools.")]
    fn plan_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(PLAN_INSTRUCTIONS)]))
    }

    #[tool(description = "Compute daily energy, protein and water targets plus the tube-feeding delivery plan (feed volume, supplemental water, pump rates for 16/20/24 h infusions) for one adult patient and one feeding product")]
    async fn compute_feeding_plan(&self, Parameters(p): Parameters<ComputeFeedingPlanParams>) -> Result<CallToolResult, McpError> {
        let (patient, product) = build_inputs(
            p.weight_kg, p.age_years, &p.sex, p.activity_factor, p.protein_target_per_kg,
            p.energy_density, p.protein_density_per_100ml, p.water_density_per_100ml,
        )?;

        let response = plan::compute_feeding_plan(&patient, &product)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        self.status_tracker.lock().await.record_plan();

        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Compute the feeding plan and write a PNG bar chart of the pump rates (ml/h) for 16, 20 and 24 hour infusion durations to the given file path")]
    async fn chart_infusion_rates(&self, Parameters(p): Parameters<ChartInfusionRatesParams>) -> Result<CallToolResult, McpError> {
        let (patient, product) = build_inputs(
            p.weight_kg, p.age_years, &p.sex, p.activity_factor, p.protein_target_per_kg,
            p.energy_density, p.protein_density_per_100ml, p.water_density_per_100ml,
        )?;

        let response = plan::compute_feeding_plan(&patient, &product)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let path = PathBuf::from(&p.file_path);
        charts::save_rate_chart(&response.plan, &path, p.width, p.height)
            .map_err(|e| McpError::internal_error(e, None))?;

        self.status_tracker.lock().await.record_chart();

        let result = ChartResponse {
            success: true,
            file_path: p.file_path,
            message: format!(
                "Infusion rate chart written ({} durations, feed volume {:.0} ml/day)",
                response.plan.hourly_rates.len(),
                response.plan.feed_volume_ml_per_day
            ),
        };
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for PlannerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "enteral-calc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Enteral Feeding Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Enteral Feeding Calculator - daily nutrition targets and tube-feeding plans for a single adult patient. \
                 IMPORTANT: Call plan_instructions first when unsure how to use the tools. \
                 compute_feeding_plan: energy/protein/water targets, feed volume, supplemental water, pump rates. \
                 chart_infusion_rates: same computation plus a PNG bar chart of the 16/20/24 h pump rates. \
                 All inputs are validated against fixed domains; out-of-domain values are rejected with no result. \
                 Each call is independent and idempotent."
                    .into(),
            ),
        }
    }
}
