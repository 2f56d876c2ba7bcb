//! Mutations as data
//!
//! Every store mutation has an action variant so callers can drive the whole
//! state through [`crate::state::AppState::dispatch`], log it, or replay it.

use chrono::NaiveDate;
use fitness_tracker_shared::{
    DailyGoalsPatch, NewExercise, NewMealEntry, NewProgressEntry, ProgressEntry,
    ProgressGoalsPatch, RecommendationDraft, Workout,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkoutAction {
    Start,
    AddExercise { exercise: NewExercise },
    UpdateExercise { index: usize, exercise: NewExercise },
    RemoveExercise { index: usize },
    End { name: String },
    AddWorkout { workout: Workout },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NutritionAction {
    AddMeal { entry: NewMealEntry },
    RemoveMeal { id: String },
    UpdateGoals { patch: DailyGoalsPatch },
    SetWaterIntake { date: NaiveDate, glasses: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressAction {
    AddEntry { entry: NewProgressEntry },
    UpdateEntry { entry: ProgressEntry },
    DeleteEntry { id: String },
    UpdateGoals { patch: ProgressGoalsPatch },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CoachAction {
    Generate,
    AddRecommendation { draft: RecommendationDraft },
    MarkAsRead { id: String },
}

/// Any mutation, addressed to the store that owns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "store", content = "action", rename_all = "snake_case")]
pub enum Action {
    Workout(WorkoutAction),
    Nutrition(NutritionAction),
    Progress(ProgressAction),
    Coach(CoachAction),
}

impl From<WorkoutAction> for Action {
    fn from(action: WorkoutAction) -> Self {
        Action::Workout(action)
    }
}

impl From<NutritionAction> for Action {
    fn from(action: NutritionAction) -> Self {
        Action::Nutrition(action)
    }
}

impl From<ProgressAction> for Action {
    fn from(action: ProgressAction) -> Self {
        Action::Progress(action)
    }
}

impl From<CoachAction> for Action {
    fn from(action: CoachAction) -> Self {
        Action::Coach(action)
    }
}

impl Action {
    /// Short label for logging
    pub fn name(&self) -> &'static str {
        match self {
            Action::Workout(action) => match action {
                WorkoutAction::Start => "workout.start",
                WorkoutAction::AddExercise { .. } => "workout.add_exercise",
                WorkoutAction::UpdateExercise { .. } => "workout.update_exercise",
                WorkoutAction::RemoveExercise { .. } => "workout.remove_exercise",
                WorkoutAction::End { .. } => "workout.end",
                WorkoutAction::AddWorkout { .. } => "workout.add_workout",
            },
            Action::Nutrition(action) => match action {
                NutritionAction::AddMeal { .. } => "nutrition.add_meal",
                NutritionAction::RemoveMeal { .. } => "nutrition.remove_meal",
                NutritionAction::UpdateGoals { .. } => "nutrition.update_goals",
                NutritionAction::SetWaterIntake { .. } => "nutrition.set_water_intake",
            },
            Action::Progress(action) => match action {
                ProgressAction::AddEntry { .. } => "progress.add_entry",
                ProgressAction::UpdateEntry { .. } => "progress.update_entry",
                ProgressAction::DeleteEntry { .. } => "progress.delete_entry",
                ProgressAction::UpdateGoals { .. } => "progress.update_goals",
            },
            Action::Coach(action) => match action {
                CoachAction::Generate => "coach.generate",
                CoachAction::AddRecommendation { .. } => "coach.add_recommendation",
                CoachAction::MarkAsRead { .. } => "coach.mark_as_read",
            },
        }
    }
}
