//! Workout tracker
//!
//! Two states: Idle and Active. While Active, exercises accumulate in an
//! in-progress session; ending the session turns it into a completed
//! [`Workout`] at the head of the history, provided at least one exercise
//! was logged.

use fitness_tracker_shared::calculations::{
    elapsed_whole_minutes, estimated_workout_calories, workout_duration_minutes,
};
use fitness_tracker_shared::{ActiveWorkout, NewExercise, Workout};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::clock::Environment;

/// Whole-store read of the workout tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSnapshot {
    pub workouts: Vec<Workout>,
    pub active: Option<ActiveWorkout>,
    pub is_workout_active: bool,
}

/// Workout session state and history
#[derive(Debug)]
pub struct WorkoutStore {
    env: Environment,
    /// Most recent first
    history: Vec<Workout>,
    session: Option<ActiveWorkout>,
}

impl WorkoutStore {
    pub fn new(env: Environment) -> Self {
        Self::with_history(env, Vec::new())
    }

    /// Store preloaded with completed workouts, most recent first
    pub fn with_history(env: Environment, history: Vec<Workout>) -> Self {
        Self {
            env,
            history,
            session: None,
        }
    }

    // ------------------------------------------------------------------------
    // Session lifecycle
    // ------------------------------------------------------------------------

    /// Begin a new session
    ///
    /// Starting while a session is already running re-arms it: the unsaved
    /// exercises are dropped and the timer restarts.
    pub fn start(&mut self) {
        if let Some(previous) = &self.session {
            warn!(
                discarded_exercises = previous.exercises.len(),
                "Workout restarted while active"
            );
        }

        let started_at = self.env.now();
        self.session = Some(ActiveWorkout {
            started_at,
            exercises: Vec::new(),
        });

        info!(started_at = %started_at, "Workout started");
    }

    /// Append an exercise to the running session
    ///
    /// Returns the id assigned to the exercise, or `None` when idle.
    pub fn add_exercise(&mut self, draft: NewExercise) -> Option<String> {
        let Some(session) = self.session.as_mut() else {
            warn!(exercise = %draft.name, "Ignoring exercise, no active workout");
            return None;
        };

        let id = self.env.next_id();
        debug!(exercise_id = %id, exercise = %draft.name, "Exercise added");
        session.exercises.push(draft.into_exercise(id.clone()));
        Some(id)
    }

    /// Replace the in-progress exercise at `index`, keeping its id
    pub fn update_exercise(&mut self, index: usize, draft: NewExercise) -> bool {
        let Some(slot) = self
            .session
            .as_mut()
            .and_then(|session| session.exercises.get_mut(index))
        else {
            debug!(index, "No in-progress exercise to update");
            return false;
        };

        let id = std::mem::take(&mut slot.id);
        *slot = draft.into_exercise(id);
        true
    }

    /// Remove the in-progress exercise at `index`
    pub fn remove_exercise(&mut self, index: usize) -> bool {
        match self.session.as_mut() {
            Some(session) if index < session.exercises.len() => {
                let removed = session.exercises.remove(index);
                debug!(exercise_id = %removed.id, "Exercise removed");
                true
            }
            _ => {
                debug!(index, "No in-progress exercise to remove");
                false
            }
        }
    }

    /// Finish the running session
    ///
    /// A workout is recorded only when at least one exercise was logged. The
    /// tracker is Idle afterwards in every case.
    pub fn end(&mut self, name: &str) -> Option<&Workout> {
        let Some(session) = self.session.take() else {
            debug!("End requested with no active workout");
            return None;
        };

        if session.exercises.is_empty() {
            info!("Workout ended without exercises, nothing recorded");
            return None;
        }

        let now = self.env.now();
        let elapsed_ms = (now - session.started_at).num_milliseconds();
        let duration = workout_duration_minutes(elapsed_ms);

        let workout = Workout {
            id: self.env.next_id(),
            name: name.to_string(),
            date: now.date_naive(),
            exercises: session.exercises,
            duration,
            calories: estimated_workout_calories(duration),
        };

        info!(
            workout_id = %workout.id,
            exercises = workout.exercises.len(),
            duration_minutes = workout.duration,
            calories = workout.calories,
            "Workout completed"
        );

        self.history.insert(0, workout);
        self.history.first()
    }

    /// Record an already completed workout at the head of the history
    pub fn add_workout(&mut self, workout: Workout) {
        debug!(workout_id = %workout.id, "Workout imported");
        self.history.insert(0, workout);
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn active(&self) -> Option<&ActiveWorkout> {
        self.session.as_ref()
    }

    /// Minutes since the session started, rounded down
    pub fn elapsed_minutes(&self) -> Option<i64> {
        self.session.as_ref().map(|session| {
            let elapsed_ms = (self.env.now() - session.started_at).num_milliseconds();
            elapsed_whole_minutes(elapsed_ms)
        })
    }

    /// Completed workouts, most recent first
    pub fn history(&self) -> &[Workout] {
        &self.history
    }

    /// At most `n` most recent workouts
    pub fn recent(&self, n: usize) -> &[Workout] {
        &self.history[..n.min(self.history.len())]
    }

    pub fn snapshot(&self) -> WorkoutSnapshot {
        WorkoutSnapshot {
            workouts: self.history.clone(),
            active: self.session.clone(),
            is_workout_active: self.is_active(),
        }
    }
}
