//! Enteral Feeding Calculator Library
//!
//! Deterministic calculator for daily nutritional targets (energy, protein,
//! water) and a tube-feeding delivery plan for a single adult patient.

pub mod build_info;
pub mod calc;
pub mod error;
pub mod mcp;
pub mod models;
pub mod tools;
