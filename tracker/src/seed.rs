//! Seed data loaded at startup
//!
//! A week of sample history so a fresh install has something to show.

use chrono::NaiveDate;
use fitness_tracker_shared::{
    DailyGoals, Exercise, ExerciseCategory, MealEntry, MealSlot, Measurements, ProgressEntry,
    ProgressGoals, Recommendation, RecommendationKind, WaterIntakeRecord, Workout,
};

use crate::catalog;

fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).expect("seed dates are valid calendar days")
}

fn exercise(
    id: &str,
    name: &str,
    sets: u32,
    reps: u32,
    weight: f64,
    duration: Option<u32>,
    category: ExerciseCategory,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        sets,
        reps,
        weight,
        duration,
        category,
    }
}

/// Completed workouts, most recent first
pub fn workouts() -> Vec<Workout> {
    vec![
        Workout {
            id: "1".into(),
            name: "Upper Body Strength".into(),
            date: day(2024, 1, 15),
            exercises: vec![
                exercise("1", "Bench Press", 3, 10, 135.0, None, ExerciseCategory::Chest),
                exercise("2", "Pull-ups", 3, 8, 0.0, None, ExerciseCategory::Back),
                exercise("3", "Shoulder Press", 3, 12, 95.0, None, ExerciseCategory::Shoulders),
            ],
            duration: 45,
            calories: 320,
        },
        Workout {
            id: "2".into(),
            name: "Cardio Session".into(),
            date: day(2024, 1, 14),
            exercises: vec![
                exercise("4", "Treadmill", 1, 1, 0.0, Some(30), ExerciseCategory::Cardio),
                exercise("5", "Cycling", 1, 1, 0.0, Some(20), ExerciseCategory::Cardio),
            ],
            duration: 50,
            calories: 450,
        },
    ]
}

/// Logged meals, insertion order
pub fn meals() -> Vec<MealEntry> {
    [
        ("1", "1", 1.0, MealSlot::Breakfast),
        ("2", "2", 1.5, MealSlot::Lunch),
        ("3", "3", 0.75, MealSlot::Lunch),
    ]
    .into_iter()
    .map(|(id, food_id, quantity, meal)| MealEntry {
        id: id.to_string(),
        food: catalog::find_food(food_id)
            .expect("seed food ids exist in the catalog")
            .clone(),
        quantity,
        meal,
        date: day(2024, 1, 15),
    })
    .collect()
}

pub fn daily_goals() -> DailyGoals {
    DailyGoals {
        calories: 2200,
        protein: 140,
        carbs: 275,
        fat: 73,
        fiber: 25,
    }
}

pub fn water_intake() -> Vec<WaterIntakeRecord> {
    vec![
        WaterIntakeRecord {
            date: day(2024, 1, 15),
            glasses: 6,
        },
        WaterIntakeRecord {
            date: day(2024, 1, 14),
            glasses: 8,
        },
    ]
}

/// Body measurements, most recent first
pub fn progress_entries() -> Vec<ProgressEntry> {
    vec![
        ProgressEntry {
            id: "1".into(),
            date: day(2024, 1, 15),
            weight: 175.0,
            body_fat: Some(15.2),
            muscle_mass: Some(145.0),
            measurements: Some(Measurements {
                chest: Some(42.0),
                waist: Some(32.0),
                hips: Some(38.0),
                arms: Some(15.0),
                thighs: Some(24.0),
            }),
        },
        ProgressEntry {
            id: "2".into(),
            date: day(2024, 1, 8),
            weight: 177.0,
            body_fat: Some(15.8),
            muscle_mass: Some(143.0),
            measurements: Some(Measurements {
                chest: Some(41.5),
                waist: Some(32.5),
                hips: Some(38.2),
                arms: Some(14.8),
                thighs: Some(23.8),
            }),
        },
        ProgressEntry {
            id: "3".into(),
            date: day(2024, 1, 1),
            weight: 180.0,
            body_fat: Some(16.5),
            muscle_mass: Some(141.0),
            measurements: Some(Measurements {
                chest: Some(41.0),
                waist: Some(33.0),
                hips: Some(38.5),
                arms: Some(14.5),
                thighs: Some(23.5),
            }),
        },
    ]
}

pub fn progress_goals() -> ProgressGoals {
    ProgressGoals {
        target_weight: 170.0,
        target_body_fat: Some(12.0),
        target_date: day(2024, 6, 1),
    }
}

pub fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: "1".into(),
            kind: RecommendationKind::Workout,
            title: "High-Intensity Interval Training (HIIT) Session".into(),
            content: "Based on your recent progress, try this 20-minute HIIT workout: 4 rounds \
                      of 30 seconds burpees, 30 seconds mountain climbers, 30 seconds jump \
                      squats, and 90 seconds rest. This will boost your metabolism and help with \
                      fat loss while maintaining muscle mass."
                .into(),
            date_generated: day(2024, 1, 15),
            is_read: false,
        },
        Recommendation {
            id: "2".into(),
            kind: RecommendationKind::Nutrition,
            title: "Protein-Rich Post-Workout Meal Plan".into(),
            content: "After your strength training sessions, consume 25-30g of protein within 2 \
                      hours. Try grilled salmon (25g protein) with quinoa (8g protein) and \
                      steamed broccoli. This combination provides essential amino acids for \
                      muscle recovery and complex carbs for energy replenishment."
                .into(),
            date_generated: day(2024, 1, 15),
            is_read: false,
        },
        Recommendation {
            id: "3".into(),
            kind: RecommendationKind::Tip,
            title: "Sleep Optimization for Better Recovery".into(),
            content: "Your workout intensity suggests you need 7-9 hours of quality sleep for \
                      optimal recovery. Create a bedtime routine: dim lights 1 hour before bed, \
                      keep your room at 65-68°F, and avoid screens 30 minutes before sleep. Good \
                      sleep improves protein synthesis by up to 30%."
                .into(),
            date_generated: day(2024, 1, 14),
            is_read: true,
        },
    ]
}
