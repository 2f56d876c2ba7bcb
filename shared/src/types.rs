//! Derived value types
//!
//! Computed on read by the stores and the summary layer, never stored.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use crate::models::Food;

/// Summed nutrients for a set of meal entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl NutritionTotals {
    /// Nutrients of `quantity` servings of `food`
    pub fn of(food: &Food, quantity: f64) -> Self {
        Self {
            calories: food.calories * quantity,
            protein: food.protein * quantity,
            carbs: food.carbs * quantity,
            fat: food.fat * quantity,
            fiber: food.fiber * quantity,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
            fiber: self.fiber + rhs.fiber,
        }
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for NutritionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Progress of one nutrient towards its goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    pub current: f64,
    pub goal: u32,
    /// Capped at 100
    pub percent: f64,
}

/// Change between the two most recently inserted weight entries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTrend {
    /// latest - previous
    pub delta: f64,
    pub is_increasing: bool,
}

/// Latest weight against the target weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub latest_weight: f64,
    pub target_weight: f64,
    /// Absolute distance to the target
    pub remaining: f64,
    /// latest / target * 100
    pub percent: f64,
}

/// Recommendation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCounts {
    pub total: usize,
    pub unread: usize,
    pub workout: usize,
    pub nutrition: usize,
    pub tip: usize,
}
