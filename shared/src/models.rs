//! Data models for the Fitness Tracker
//!
//! Records owned by the stores, the drafts callers submit to create them and
//! the patch structures used for partial goal updates.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

// ============================================================================
// Nutrition
// ============================================================================

/// Food reference item, nutrient values are per serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    /// Human-readable serving label, e.g. "1 cup"
    pub serving: String,
}

/// Meal slot a food entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "snack" => Ok(MealSlot::Snack),
            _ => Err(format!("Unknown meal slot: {}", s)),
        }
    }
}

/// Logged food entry
///
/// The food is copied into the entry, so later catalog changes never alter
/// historical entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: String,
    pub food: Food,
    /// Multiplier applied to the food's per-serving values
    pub quantity: f64,
    pub meal: MealSlot,
    pub date: NaiveDate,
}

/// Meal entry as submitted by a caller, before an id is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewMealEntry {
    pub food: Food,
    #[validate(range(min = 0.01, max = 100.0))]
    pub quantity: f64,
    pub meal: MealSlot,
    pub date: NaiveDate,
}

/// Glasses of water drunk on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterIntakeRecord {
    pub date: NaiveDate,
    pub glasses: u32,
}

/// Daily nutrition targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGoals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            calories: 2200,
            protein: 140,
            carbs: 275,
            fat: 73,
            fiber: 25,
        }
    }
}

impl DailyGoals {
    /// Merge the provided fields of a patch, keeping the rest
    pub fn apply(&mut self, patch: &DailyGoalsPatch) {
        if let Some(calories) = patch.calories {
            self.calories = calories;
        }
        if let Some(protein) = patch.protein {
            self.protein = protein;
        }
        if let Some(carbs) = patch.carbs {
            self.carbs = carbs;
        }
        if let Some(fat) = patch.fat {
            self.fat = fat;
        }
        if let Some(fiber) = patch.fiber {
            self.fiber = fiber;
        }
    }
}

/// Partial update for [`DailyGoals`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGoalsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<u32>,
}

// ============================================================================
// Workouts
// ============================================================================

/// Exercise category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseCategory {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    Cardio,
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Chest => "Chest",
            ExerciseCategory::Back => "Back",
            ExerciseCategory::Legs => "Legs",
            ExerciseCategory::Shoulders => "Shoulders",
            ExerciseCategory::Arms => "Arms",
            ExerciseCategory::Core => "Core",
            ExerciseCategory::Cardio => "Cardio",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExerciseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chest" => Ok(ExerciseCategory::Chest),
            "back" => Ok(ExerciseCategory::Back),
            "legs" => Ok(ExerciseCategory::Legs),
            "shoulders" => Ok(ExerciseCategory::Shoulders),
            "arms" => Ok(ExerciseCategory::Arms),
            "core" => Ok(ExerciseCategory::Core),
            "cardio" => Ok(ExerciseCategory::Cardio),
            _ => Err(format!("Unknown exercise category: {}", s)),
        }
    }
}

/// Exercise library item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogExercise {
    pub name: String,
    pub category: ExerciseCategory,
}

/// Exercise logged during a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    /// Load per rep, 0 for bodyweight
    pub weight: f64,
    /// Minutes, cardio only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub category: ExerciseCategory,
}

/// Exercise as submitted by a caller, before an id is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewExercise {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 1, max = 100))]
    pub sets: u32,
    #[validate(range(min = 1, max = 1000))]
    pub reps: u32,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 2000.0))]
    pub weight: f64,
    #[serde(default)]
    #[validate(range(min = 1, max = 1440))]
    pub duration: Option<u32>,
    pub category: ExerciseCategory,
}

impl NewExercise {
    /// Bodyweight exercise draft with weight 0 and no duration
    pub fn bodyweight(name: impl Into<String>, sets: u32, reps: u32, category: ExerciseCategory) -> Self {
        Self {
            name: name.into(),
            sets,
            reps,
            weight: 0.0,
            duration: None,
            category,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    /// Turn the draft into a logged exercise
    pub fn into_exercise(self, id: String) -> Exercise {
        Exercise {
            id,
            name: self.name,
            sets: self.sets,
            reps: self.reps,
            weight: self.weight,
            duration: self.duration,
            category: self.category,
        }
    }
}

/// Completed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub exercises: Vec<Exercise>,
    /// Minutes
    pub duration: u32,
    pub calories: u32,
}

/// Workout in progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveWorkout {
    pub started_at: DateTime<Utc>,
    pub exercises: Vec<Exercise>,
}

// ============================================================================
// Body progress
// ============================================================================

/// Body measurements, each optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thighs: Option<f64>,
}

impl Measurements {
    /// Iterate over the recorded values with their names
    pub fn recorded(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("chest", self.chest),
            ("waist", self.waist),
            ("hips", self.hips),
            ("arms", self.arms),
            ("thighs", self.thighs),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

/// Body-composition snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id: String,
    pub date: NaiveDate,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,
}

/// Progress entry as submitted by a caller, before an id is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewProgressEntry {
    pub date: NaiveDate,
    #[validate(range(exclusive_min = 0.0, max = 1500.0))]
    pub weight: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub body_fat: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub muscle_mass: Option<f64>,
    #[serde(default)]
    pub measurements: Option<Measurements>,
}

impl NewProgressEntry {
    pub fn weight_only(date: NaiveDate, weight: f64) -> Self {
        Self {
            date,
            weight,
            body_fat: None,
            muscle_mass: None,
            measurements: None,
        }
    }

    pub fn into_entry(self, id: String) -> ProgressEntry {
        ProgressEntry {
            id,
            date: self.date,
            weight: self.weight,
            body_fat: self.body_fat,
            muscle_mass: self.muscle_mass,
            measurements: self.measurements,
        }
    }
}

/// Body goal targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressGoals {
    pub target_weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_body_fat: Option<f64>,
    pub target_date: NaiveDate,
}

impl ProgressGoals {
    /// Merge the provided fields of a patch, keeping the rest
    pub fn apply(&mut self, patch: &ProgressGoalsPatch) {
        if let Some(target_weight) = patch.target_weight {
            self.target_weight = target_weight;
        }
        if let Some(target_body_fat) = patch.target_body_fat {
            self.target_body_fat = Some(target_body_fat);
        }
        if let Some(target_date) = patch.target_date {
            self.target_date = target_date;
        }
    }
}

/// Partial update for [`ProgressGoals`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressGoalsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_body_fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
}

// ============================================================================
// Coaching recommendations
// ============================================================================

/// Recommendation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Workout,
    Nutrition,
    Tip,
}

/// Coaching recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub content: String,
    pub date_generated: NaiveDate,
    /// Only ever flips from false to true
    #[serde(default)]
    pub is_read: bool,
}

/// Recommendation content produced by a provider, before id and date are assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationDraft {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub content: String,
}

impl RecommendationDraft {
    pub fn new(kind: RecommendationKind, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn into_recommendation(self, id: String, date_generated: NaiveDate) -> Recommendation {
        Recommendation {
            id,
            kind: self.kind,
            title: self.title,
            content: self.content,
            date_generated,
            is_read: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_goals_patch_keeps_unspecified_fields() {
        let mut goals = DailyGoals::default();
        goals.apply(&DailyGoalsPatch {
            calories: Some(2500),
            fat: Some(80),
            ..Default::default()
        });

        assert_eq!(goals.calories, 2500);
        assert_eq!(goals.fat, 80);
        assert_eq!(goals.protein, 140);
        assert_eq!(goals.carbs, 275);
        assert_eq!(goals.fiber, 25);
    }

    #[test]
    fn test_progress_goals_patch() {
        let mut goals = ProgressGoals {
            target_weight: 170.0,
            target_body_fat: None,
            target_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        goals.apply(&ProgressGoalsPatch {
            target_body_fat: Some(12.0),
            ..Default::default()
        });

        assert_eq!(goals.target_weight, 170.0);
        assert_eq!(goals.target_body_fat, Some(12.0));
        assert_eq!(goals.target_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_meal_slot_parse() {
        assert_eq!("Lunch".parse::<MealSlot>(), Ok(MealSlot::Lunch));
        assert!("brunch".parse::<MealSlot>().is_err());
    }

    #[test]
    fn test_recommendation_serializes_kind_as_type() {
        let rec = RecommendationDraft::new(RecommendationKind::Tip, "Sleep", "Sleep more")
            .into_recommendation("r1".into(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        let json = serde_json::to_value(&rec).unwrap();

        assert_eq!(json["type"], "tip");
        assert_eq!(json["date_generated"], "2024-01-15");
        assert_eq!(json["is_read"], false);
    }

    #[test]
    fn test_measurements_recorded_skips_missing() {
        let m = Measurements {
            chest: Some(42.0),
            hips: Some(38.0),
            ..Default::default()
        };
        let recorded: Vec<_> = m.recorded().collect();
        assert_eq!(recorded, vec![("chest", 42.0), ("hips", 38.0)]);
    }
}
