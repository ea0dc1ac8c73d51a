//! One-shot utility to compute a feeding plan from a JSON document
//!
//! Reads `{ "patient": {...}, "product": {...} }` from the file given as the
//! first argument, or from stdin when no argument is given. Prints the
//! full-precision plan as pretty JSON to stdout and the display summary to
//! stderr. Exits nonzero on invalid input.

use std::fs;
use std::io::Read;

use serde::Deserialize;

use enteral_calc::calc;
use enteral_calc::models::{PatientInput, ProductInput};
use enteral_calc::tools::plan::summary_lines;

#[derive(Debug, Deserialize)]
struct PlanRequest {
    patient: PatientInput,
    product: ProductInput,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let request: PlanRequest = serde_json::from_str(&input)?;
    let plan = calc::compute(&request.patient, &request.product)?;

    println!("{}", serde_json::to_string_pretty(&plan)?);

    for line in summary_lines(&plan) {
        eprintln!("{}", line);
    }

    Ok(())
}
