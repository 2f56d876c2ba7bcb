//! Input validation functions
//!
//! Stores accept any well-formed value; callers run these checks before
//! dispatching. Uses both custom validators and the `validator` crate for
//! derive rules on drafts.

use validator::Validate;

use crate::errors::ValidationError;
use crate::models::{
    DailyGoalsPatch, Food, Measurements, NewExercise, NewMealEntry, NewProgressEntry,
    ProgressGoalsPatch,
};

/// Validate a body weight value (in the user's unit)
pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if weight.is_nan() || weight.is_infinite() {
        return Err(ValidationError::field("weight", "must be a valid number"));
    }
    if weight <= 0.0 {
        return Err(ValidationError::field("weight", "must be greater than 0"));
    }
    if weight > 1500.0 {
        return Err(ValidationError::field("weight", "unreasonably high"));
    }
    Ok(())
}

/// Validate percentage value (0-100)
pub fn validate_percentage(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::field(field, "must be a valid number"));
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::field(field, "must be between 0 and 100"));
    }
    Ok(())
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::field(field, "must be a valid number"));
    }
    if value < 0.0 {
        return Err(ValidationError::field(field, "cannot be negative"));
    }
    Ok(())
}

/// Validate a food's per-serving nutrients
pub fn validate_food(food: &Food) -> Result<(), ValidationError> {
    if food.name.trim().is_empty() {
        return Err(ValidationError::field("food.name", "cannot be empty"));
    }
    validate_non_negative("food.calories", food.calories)?;
    validate_non_negative("food.protein", food.protein)?;
    validate_non_negative("food.carbs", food.carbs)?;
    validate_non_negative("food.fat", food.fat)?;
    validate_non_negative("food.fiber", food.fiber)?;
    Ok(())
}

/// Validate a meal entry before logging it
pub fn validate_meal_entry(entry: &NewMealEntry) -> Result<(), ValidationError> {
    validate_food(&entry.food)?;
    if !entry.quantity.is_finite() {
        return Err(ValidationError::field("quantity", "must be a valid number"));
    }
    entry.validate()?;
    Ok(())
}

/// Validate an exercise before adding it to the active workout
pub fn validate_exercise(exercise: &NewExercise) -> Result<(), ValidationError> {
    if exercise.name.trim().is_empty() {
        return Err(ValidationError::field("name", "cannot be empty"));
    }
    if !exercise.weight.is_finite() {
        return Err(ValidationError::field("weight", "must be a valid number"));
    }
    exercise.validate()?;
    Ok(())
}

/// Validate the name given to a finished workout
pub fn validate_workout_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::field("name", "cannot be empty"));
    }
    if trimmed.chars().count() > 100 {
        return Err(ValidationError::field("name", "too long"));
    }
    Ok(())
}

fn validate_measurements(measurements: &Measurements) -> Result<(), ValidationError> {
    for (name, value) in measurements.recorded() {
        if value.is_nan() || value.is_infinite() || value <= 0.0 {
            return Err(ValidationError::field(
                "measurements",
                format!("{} must be greater than 0", name),
            ));
        }
    }
    Ok(())
}

/// Validate a progress entry; only the weight is required
pub fn validate_progress_entry(entry: &NewProgressEntry) -> Result<(), ValidationError> {
    validate_weight(entry.weight)?;
    if let Some(body_fat) = entry.body_fat {
        validate_percentage("body_fat", body_fat)?;
    }
    if let Some(muscle_mass) = entry.muscle_mass {
        validate_non_negative("muscle_mass", muscle_mass)?;
    }
    if let Some(measurements) = &entry.measurements {
        validate_measurements(measurements)?;
    }
    entry.validate()?;
    Ok(())
}

/// Validate a daily goals update
pub fn validate_daily_goals_patch(patch: &DailyGoalsPatch) -> Result<(), ValidationError> {
    if patch.calories == Some(0) {
        return Err(ValidationError::field("calories", "goal must be greater than 0"));
    }
    if let Some(calories) = patch.calories {
        if calories > 20_000 {
            return Err(ValidationError::field("calories", "goal unreasonably high"));
        }
    }
    Ok(())
}

/// Validate a body goals update
pub fn validate_progress_goals_patch(patch: &ProgressGoalsPatch) -> Result<(), ValidationError> {
    if let Some(target_weight) = patch.target_weight {
        validate_weight(target_weight)?;
    }
    if let Some(target_body_fat) = patch.target_body_fat {
        validate_percentage("target_body_fat", target_body_fat)?;
    }
    Ok(())
}
