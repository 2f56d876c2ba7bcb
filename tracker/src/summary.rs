//! Dashboard aggregation
//!
//! Read-only view composed from all four stores for a given day. Nothing here
//! mutates state or is stored; it is rebuilt on every call.

use chrono::NaiveDate;
use fitness_tracker_shared::calculations::{macro_progress, progress_percent};
use fitness_tracker_shared::{
    DailyGoals, GoalProgress, MacroProgress, MealSlot, NutritionTotals, RecommendationCounts,
    WeightTrend, WeightUnit, Workout,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::TrackerConfig;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub nutrition: NutritionSummary,
    pub hydration: HydrationSummary,
    pub workouts: WorkoutSummary,
    pub progress: ProgressSummary,
    pub coach: RecommendationCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionSummary {
    pub totals: NutritionTotals,
    pub goals: DailyGoals,
    /// Uncapped, may exceed 100
    pub calorie_percent: f64,
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fat: MacroProgress,
    pub fiber: MacroProgress,
    pub meals_per_slot: BTreeMap<MealSlot, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydrationSummary {
    pub glasses: u32,
    pub target: u32,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_minutes: Option<i64>,
    pub recent: Vec<Workout>,
    pub recent_minutes: u32,
    pub recent_calories: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub unit: WeightUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<WeightTrend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
}

impl DashboardSummary {
    pub fn build(state: &AppState, today: NaiveDate, config: &TrackerConfig) -> Self {
        Self {
            date: today,
            nutrition: nutrition(state, today),
            hydration: hydration(state, today, config.water_glasses_target),
            workouts: workouts(state, config.recent_workouts),
            progress: progress(state, config.weight_unit),
            coach: state.coach.counts(),
        }
    }
}

fn nutrition(state: &AppState, today: NaiveDate) -> NutritionSummary {
    let totals = state.nutrition.daily_totals(today);
    let goals = state.nutrition.goals().clone();
    let meals_per_slot = state
        .nutrition
        .meals_by_slot(today)
        .into_iter()
        .map(|(slot, meals)| (slot, meals.len()))
        .collect();

    NutritionSummary {
        calorie_percent: progress_percent(totals.calories, goals.calories as f64),
        protein: macro_progress(totals.protein, goals.protein),
        carbs: macro_progress(totals.carbs, goals.carbs),
        fat: macro_progress(totals.fat, goals.fat),
        fiber: macro_progress(totals.fiber, goals.fiber),
        totals,
        goals,
        meals_per_slot,
    }
}

fn hydration(state: &AppState, today: NaiveDate, target: u32) -> HydrationSummary {
    let glasses = state.nutrition.water_intake(today);
    HydrationSummary {
        glasses,
        target,
        percent: progress_percent(glasses as f64, target as f64),
    }
}

fn workouts(state: &AppState, recent_count: usize) -> WorkoutSummary {
    let recent = state.workouts.recent(recent_count).to_vec();
    WorkoutSummary {
        is_active: state.workouts.is_active(),
        elapsed_minutes: state.workouts.elapsed_minutes(),
        recent_minutes: recent.iter().map(|w| w.duration).sum(),
        recent_calories: recent.iter().map(|w| w.calories).sum(),
        recent,
    }
}

fn progress(state: &AppState, unit: WeightUnit) -> ProgressSummary {
    let latest = state.progress.latest();
    ProgressSummary {
        unit,
        goal: state.progress.goal_progress(),
        trend: state.progress.trend(),
        latest_weight_kg: latest.map(|entry| unit.to_kg(entry.weight)),
        body_fat: latest.and_then(|entry| entry.body_fat),
        muscle_mass: latest.and_then(|entry| entry.muscle_mass),
    }
}
