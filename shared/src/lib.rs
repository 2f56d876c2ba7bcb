//! Fitness Tracker Shared Library
//!
//! Records, drafts, derived value types, validation and pure calculations
//! shared by the tracker stores and any presentation layer.

pub mod calculations;
pub mod errors;
pub mod models;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::*;
pub use types::*;
pub use units::WeightUnit;
