//! Tracking calculations
//!
//! Pure functions behind the derived queries: nutrient totals, goal
//! percentages, workout duration and calorie estimates, weight trends.

use crate::models::MealEntry;
use crate::types::{GoalProgress, MacroProgress, NutritionTotals, WeightTrend};

/// Flat calorie estimate per workout minute
pub const WORKOUT_CALORIES_PER_MINUTE: u32 = 8;

const MILLIS_PER_MINUTE: f64 = 60_000.0;

// ============================================================================
// Nutrition
// ============================================================================

/// Sum `nutrient * quantity` over the given entries
pub fn nutrition_totals<'a, I>(entries: I) -> NutritionTotals
where
    I: IntoIterator<Item = &'a MealEntry>,
{
    entries
        .into_iter()
        .map(|entry| NutritionTotals::of(&entry.food, entry.quantity))
        .sum()
}

/// Percentage of `goal` reached by `current`, 0 when there is no goal
pub fn progress_percent(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (current / goal) * 100.0
}

/// Same as [`progress_percent`] but never above 100
pub fn capped_percent(current: f64, goal: f64) -> f64 {
    progress_percent(current, goal).min(100.0)
}

pub fn macro_progress(current: f64, goal: u32) -> MacroProgress {
    MacroProgress {
        current,
        goal,
        percent: capped_percent(current, goal as f64),
    }
}

// ============================================================================
// Workouts
// ============================================================================

/// Workout duration in whole minutes, rounded to nearest
///
/// Negative elapsed time (clock moved backwards) counts as zero.
pub fn workout_duration_minutes(elapsed_ms: i64) -> u32 {
    let minutes = (elapsed_ms as f64 / MILLIS_PER_MINUTE).round();
    if minutes <= 0.0 {
        0
    } else {
        minutes as u32
    }
}

/// Minutes shown on a running workout timer, rounded down
pub fn elapsed_whole_minutes(elapsed_ms: i64) -> i64 {
    elapsed_ms.max(0) / 60_000
}

pub fn estimated_workout_calories(duration_minutes: u32) -> u32 {
    duration_minutes.saturating_mul(WORKOUT_CALORIES_PER_MINUTE)
}

// ============================================================================
// Body progress
// ============================================================================

pub fn weight_trend(latest: f64, previous: f64) -> WeightTrend {
    let delta = latest - previous;
    WeightTrend {
        delta,
        is_increasing: delta > 0.0,
    }
}

pub fn goal_progress(latest_weight: f64, target_weight: f64) -> GoalProgress {
    GoalProgress {
        latest_weight,
        target_weight,
        remaining: (target_weight - latest_weight).abs(),
        percent: progress_percent(latest_weight, target_weight),
    }
}
