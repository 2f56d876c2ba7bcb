//! Application state management
//!
//! [`AppState`] owns the four stores and the capabilities they share. It is
//! constructed explicitly by the caller; there is no process-wide instance.
//!
//! # Design Principles
//!
//! 1. **Exclusive ownership**: each store owns its records, no cross-store reads
//! 2. **Injected capabilities**: time and ids come from the [`Environment`]
//! 3. **Actions as data**: every mutation is reachable through [`AppState::dispatch`]

use fitness_tracker_shared::DailyGoals;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actions::{Action, CoachAction, NutritionAction, ProgressAction, WorkoutAction};
use crate::clock::Environment;
use crate::coach::{CannedCoach, RecommendationProvider};
use crate::seed;
use crate::stores::{
    NutritionSnapshot, NutritionStore, ProgressSnapshot, ProgressStore, RecommendationSnapshot,
    RecommendationStore, WorkoutSnapshot, WorkoutStore,
};

/// Serializable read of every store at once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub workout: WorkoutSnapshot,
    pub nutrition: NutritionSnapshot,
    pub progress: ProgressSnapshot,
    pub ai: RecommendationSnapshot,
}

/// Root state container
///
/// Stores are public for direct calls; [`AppState::dispatch`] is the
/// equivalent action-driven entry point.
#[derive(Debug)]
pub struct AppState {
    pub workouts: WorkoutStore,
    pub nutrition: NutritionStore,
    pub progress: ProgressStore,
    pub coach: RecommendationStore,
    env: Environment,
}

impl AppState {
    /// Empty stores with default nutrition goals and the seed body goals
    pub fn new(env: Environment) -> Self {
        Self::with_provider(env, Box::new(CannedCoach))
    }

    /// Empty stores with a custom recommendation provider
    pub fn with_provider(env: Environment, provider: Box<dyn RecommendationProvider>) -> Self {
        Self {
            workouts: WorkoutStore::new(env.clone()),
            nutrition: NutritionStore::with_data(
                env.clone(),
                Vec::new(),
                DailyGoals::default(),
                Vec::new(),
            ),
            progress: ProgressStore::new(env.clone(), seed::progress_goals()),
            coach: RecommendationStore::new(env.clone(), provider),
            env,
        }
    }

    /// Stores loaded with the sample data set
    pub fn seeded(env: Environment) -> Self {
        let state = Self {
            workouts: WorkoutStore::with_history(env.clone(), seed::workouts()),
            nutrition: NutritionStore::with_data(
                env.clone(),
                seed::meals(),
                seed::daily_goals(),
                seed::water_intake(),
            ),
            progress: ProgressStore::with_entries(
                env.clone(),
                seed::progress_entries(),
                seed::progress_goals(),
            ),
            coach: RecommendationStore::with_recommendations(
                env.clone(),
                Box::new(CannedCoach),
                seed::recommendations(),
            ),
            env,
        };

        debug!(
            workouts = state.workouts.history().len(),
            meals = state.nutrition.meals().len(),
            progress_entries = state.progress.entries().len(),
            recommendations = state.coach.recommendations().len(),
            "State seeded"
        );
        state
    }

    /// Get a reference to the shared capabilities
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Route an action to the store that owns it
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        debug!(action = action.name(), "Dispatching");

        match action {
            Action::Workout(action) => self.dispatch_workout(action),
            Action::Nutrition(action) => self.dispatch_nutrition(action),
            Action::Progress(action) => self.dispatch_progress(action),
            Action::Coach(action) => self.dispatch_coach(action),
        }
    }

    fn dispatch_workout(&mut self, action: WorkoutAction) {
        match action {
            WorkoutAction::Start => self.workouts.start(),
            WorkoutAction::AddExercise { exercise } => {
                self.workouts.add_exercise(exercise);
            }
            WorkoutAction::UpdateExercise { index, exercise } => {
                self.workouts.update_exercise(index, exercise);
            }
            WorkoutAction::RemoveExercise { index } => {
                self.workouts.remove_exercise(index);
            }
            WorkoutAction::End { name } => {
                self.workouts.end(&name);
            }
            WorkoutAction::AddWorkout { workout } => self.workouts.add_workout(workout),
        }
    }

    fn dispatch_nutrition(&mut self, action: NutritionAction) {
        match action {
            NutritionAction::AddMeal { entry } => {
                self.nutrition.add_meal(entry);
            }
            NutritionAction::RemoveMeal { id } => {
                self.nutrition.remove_meal(&id);
            }
            NutritionAction::UpdateGoals { patch } => self.nutrition.update_goals(&patch),
            NutritionAction::SetWaterIntake { date, glasses } => {
                self.nutrition.set_water_intake(date, glasses)
            }
        }
    }

    fn dispatch_progress(&mut self, action: ProgressAction) {
        match action {
            ProgressAction::AddEntry { entry } => {
                self.progress.add_entry(entry);
            }
            ProgressAction::UpdateEntry { entry } => {
                self.progress.update_entry(entry);
            }
            ProgressAction::DeleteEntry { id } => {
                self.progress.delete_entry(&id);
            }
            ProgressAction::UpdateGoals { patch } => self.progress.update_goals(&patch),
        }
    }

    fn dispatch_coach(&mut self, action: CoachAction) {
        match action {
            CoachAction::Generate => {
                self.coach.generate();
            }
            CoachAction::AddRecommendation { draft } => {
                self.coach.add_recommendation(draft);
            }
            CoachAction::MarkAsRead { id } => {
                self.coach.mark_as_read(&id);
            }
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            workout: self.workouts.snapshot(),
            nutrition: self.nutrition.snapshot(),
            progress: self.progress.snapshot(),
            ai: self.coach.snapshot(),
        }
    }
}
