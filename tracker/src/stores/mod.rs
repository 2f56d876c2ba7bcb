//! In-memory stores
//!
//! Each store owns its records exclusively and never reads another store.

pub mod nutrition;
pub mod progress;
pub mod recommendations;
pub mod workout;

pub use nutrition::{NutritionSnapshot, NutritionStore};
pub use progress::{ProgressSnapshot, ProgressStore};
pub use recommendations::{RecommendationSnapshot, RecommendationStore};
pub use workout::{WorkoutSnapshot, WorkoutStore};
