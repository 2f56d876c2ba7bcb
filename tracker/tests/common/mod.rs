//! Common test utilities for integration tests
//!
//! Builds state containers on a manual clock with predictable ids.

#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use fake::faker::lorem::en::Words;
use fake::faker::name::en::Name;
use fake::Fake;
use fitness_tracker::actions::WorkoutAction;
use fitness_tracker::catalog;
use fitness_tracker::clock::{Environment, ManualClock, SequentialIds};
use fitness_tracker::state::AppState;
use fitness_tracker_shared::{ExerciseCategory, MealSlot, NewExercise, NewMealEntry};
use std::sync::Arc;

/// State wrapper holding on to the clock so tests can move time
pub struct TestApp {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Empty state, clock at 2024-01-15 08:00 UTC
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::new(start_time()));
        let state = AppState::new(env(clock.clone()));
        Self { state, clock }
    }

    /// State loaded with the sample data set
    pub fn seeded() -> Self {
        let clock = Arc::new(ManualClock::new(start_time()));
        let state = AppState::seeded(env(clock.clone()));
        Self { state, clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.state.env().today()
    }

    pub fn advance_minutes(&self, minutes: i64) {
        self.clock.advance(Duration::minutes(minutes));
    }

    /// Start a session, log `exercises`, and end it after `minutes`
    pub fn complete_workout(&mut self, name: &str, exercises: Vec<NewExercise>, minutes: i64) {
        self.state.dispatch(WorkoutAction::Start);
        for exercise in exercises {
            self.state.dispatch(WorkoutAction::AddExercise { exercise });
        }
        self.advance_minutes(minutes);
        self.state.dispatch(WorkoutAction::End {
            name: name.to_string(),
        });
    }
}

fn env(clock: Arc<ManualClock>) -> Environment {
    Environment::new(clock, Arc::new(SequentialIds::new("it")))
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()
}

pub fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

/// Meal of a catalog food
pub fn meal(food_id: &str, quantity: f64, slot: MealSlot, date: NaiveDate) -> NewMealEntry {
    NewMealEntry {
        food: catalog::find_food(food_id)
            .expect("catalog food exists")
            .clone(),
        quantity,
        meal: slot,
        date,
    }
}

/// Exercise with a generated name
pub fn random_exercise() -> NewExercise {
    let words: Vec<String> = Words(1..3).fake();
    let name = format!("{} press", words.join(" "));
    NewExercise::bodyweight(name, (1u32..6).fake::<u32>(), (5u32..15).fake::<u32>(), ExerciseCategory::Arms)
}

pub fn random_workout_name() -> String {
    let name: String = Name().fake();
    format!("{name}'s session")
}
