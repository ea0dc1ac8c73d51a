//! Tools module
//!
//! MCP tool implementations for the Enteral Feeding Calculator.

pub mod charts;
pub mod plan;
pub mod status;
