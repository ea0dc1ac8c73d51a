//! Infusion-rate chart generation
//!
//! Renders the pump rates for the fixed infusion durations as a bar chart,
//! drawn with plotters into an RGB buffer and encoded to PNG on save.

use std::path::Path;

use serde::Serialize;

use crate::models::FeedingPlan;

/// Bar colors, one per duration (sky blue, orange, purple)
const BAR_COLORS: [(u8, u8, u8); 3] = [(135, 206, 235), (255, 165, 0), (128, 0, 128)];

/// Response for the chart_infusion_rates tool
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub success: bool,
    pub file_path: String,
    pub message: String,
}

/// Render the infusion-rate bar chart as raw RGB bytes (width * height * 3)
///
/// Bar labels show ml/h rounded to one decimal; the underlying plan keeps
/// full precision.
pub fn generate_rate_chart(
    plan: &FeedingPlan,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, String> {
    use plotters::prelude::*;

    if plan.hourly_rates.is_empty() {
        return Err("No rates to chart".to_string());
    }

    let mut buffer = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let y_max = plan
            .hourly_rates
            .iter()
            .map(|r| r.ml_per_hour)
            .fold(f64::NEG_INFINITY, f64::max)
            * 1.2;

        let n = plan.hourly_rates.len();

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption("Infusion rate", ("sans-serif", 24))
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0..(n as i32), 0.0..y_max)
            .map_err(|e| e.to_string())?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n)
            .x_label_formatter(&|x| {
                if *x >= 0 && (*x as usize) < n {
                    format!("{} h", plan.hourly_rates[*x as usize].duration_hours)
                } else {
                    String::new()
                }
            })
            .y_desc("ml per hour")
            .draw()
            .map_err(|e| e.to_string())?;

        for (i, rate) in plan.hourly_rates.iter().enumerate() {
            let (r, g, b) = BAR_COLORS[i % BAR_COLORS.len()];
            let color = RGBColor(r, g, b);

            let mut bar = Rectangle::new(
                [(i as i32, 0.0), (i as i32 + 1, rate.ml_per_hour)],
                color.filled(),
            );
            bar.set_margin(0, 0, 10, 10);
            chart
                .draw_series(std::iter::once(bar))
                .map_err(|e| e.to_string())?;

            // Value label slightly above the bar, one decimal for display
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{:.1}", rate.ml_per_hour),
                    (i as i32, rate.ml_per_hour + y_max * 0.02),
                    ("sans-serif", 16),
                )))
                .map_err(|e| e.to_string())?;
        }

        root.present().map_err(|e| e.to_string())?;
    }

    Ok(buffer)
}

/// Render the chart and write it to `path` as PNG
pub fn save_rate_chart(
    plan: &FeedingPlan,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), String> {
    let buffer = generate_rate_chart(plan, width, height)?;

    let img = image::RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| "Chart buffer size mismatch".to_string())?;
    img.save(path).map_err(|e| e.to_string())?;

    Ok(())
}
