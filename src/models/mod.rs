//! Data models
//!
//! Plain immutable value records: two inputs, one derived result.

mod patient;
mod plan;
mod product;

pub use patient::{PatientInput, Sex};
pub use plan::{FeedingPlan, InfusionRate};
pub use product::ProductInput;
