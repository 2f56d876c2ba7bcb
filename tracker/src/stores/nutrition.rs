//! Nutrition tracker
//!
//! Meal entries, daily macro goals and per-day water intake.

use chrono::NaiveDate;
use fitness_tracker_shared::calculations::nutrition_totals;
use fitness_tracker_shared::{
    DailyGoals, DailyGoalsPatch, MealEntry, MealSlot, NewMealEntry, NutritionTotals,
    WaterIntakeRecord,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::clock::Environment;

/// Whole-store read of the nutrition tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionSnapshot {
    pub meals: Vec<MealEntry>,
    pub daily_goals: DailyGoals,
    pub water_intake: Vec<WaterIntakeRecord>,
}

#[derive(Debug)]
pub struct NutritionStore {
    env: Environment,
    /// Insertion order
    meals: Vec<MealEntry>,
    goals: DailyGoals,
    /// At most one record per date
    water: Vec<WaterIntakeRecord>,
}

impl NutritionStore {
    pub fn new(env: Environment) -> Self {
        Self::with_data(env, Vec::new(), DailyGoals::default(), Vec::new())
    }

    pub fn with_data(
        env: Environment,
        meals: Vec<MealEntry>,
        goals: DailyGoals,
        water: Vec<WaterIntakeRecord>,
    ) -> Self {
        Self {
            env,
            meals,
            goals,
            water,
        }
    }

    /// Log a meal entry; returns the assigned id
    pub fn add_meal(&mut self, draft: NewMealEntry) -> String {
        let id = self.env.next_id();
        debug!(
            meal_id = %id,
            food = %draft.food.name,
            quantity = draft.quantity,
            meal = %draft.meal,
            date = %draft.date,
            "Meal logged"
        );

        self.meals.push(MealEntry {
            id: id.clone(),
            food: draft.food,
            quantity: draft.quantity,
            meal: draft.meal,
            date: draft.date,
        });
        id
    }

    /// Delete a meal entry; missing ids are ignored
    pub fn remove_meal(&mut self, id: &str) -> bool {
        let before = self.meals.len();
        self.meals.retain(|meal| meal.id != id);
        let removed = self.meals.len() != before;
        debug!(meal_id = %id, removed, "Meal removal");
        removed
    }

    pub fn update_goals(&mut self, patch: &DailyGoalsPatch) {
        self.goals.apply(patch);
        debug!(goals = ?self.goals, "Daily goals updated");
    }

    /// Set the glasses drunk on `date`, overwriting any previous count
    pub fn set_water_intake(&mut self, date: NaiveDate, glasses: u32) {
        match self.water.iter_mut().find(|record| record.date == date) {
            Some(record) => record.glasses = glasses,
            None => self.water.push(WaterIntakeRecord { date, glasses }),
        }
        debug!(date = %date, glasses, "Water intake set");
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn meals(&self) -> &[MealEntry] {
        &self.meals
    }

    pub fn goals(&self) -> &DailyGoals {
        &self.goals
    }

    pub fn water_records(&self) -> &[WaterIntakeRecord] {
        &self.water
    }

    /// Glasses drunk on `date`, 0 without a record
    pub fn water_intake(&self, date: NaiveDate) -> u32 {
        self.water
            .iter()
            .find(|record| record.date == date)
            .map(|record| record.glasses)
            .unwrap_or(0)
    }

    pub fn meals_on(&self, date: NaiveDate) -> impl Iterator<Item = &MealEntry> {
        self.meals.iter().filter(move |meal| meal.date == date)
    }

    /// Meals of `date` grouped by slot; every slot is present
    pub fn meals_by_slot(&self, date: NaiveDate) -> BTreeMap<MealSlot, Vec<&MealEntry>> {
        let mut grouped: BTreeMap<MealSlot, Vec<&MealEntry>> =
            MealSlot::ALL.iter().map(|slot| (*slot, Vec::new())).collect();
        for meal in self.meals_on(date) {
            grouped.entry(meal.meal).or_default().push(meal);
        }
        grouped
    }

    /// Sum of `nutrient * quantity` over the meals of `date`
    pub fn daily_totals(&self, date: NaiveDate) -> NutritionTotals {
        nutrition_totals(self.meals_on(date))
    }

    pub fn snapshot(&self) -> NutritionSnapshot {
        NutritionSnapshot {
            meals: self.meals.clone(),
            daily_goals: self.goals.clone(),
            water_intake: self.water.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::clock::{ManualClock, SequentialIds};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn store() -> NutritionStore {
        let env = Environment::new(
            Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap())),
            Arc::new(SequentialIds::new("meal")),
        );
        NutritionStore::new(env)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn draft(food_id: &str, quantity: f64, meal: MealSlot, date: NaiveDate) -> NewMealEntry {
        NewMealEntry {
            food: catalog::find_food(food_id).unwrap().clone(),
            quantity,
            meal,
            date,
        }
    }

    #[test]
    fn test_daily_totals_without_meals_are_zero() {
        let store = store();
        assert!(store.daily_totals(day(15)).is_zero());
    }

    #[test]
    fn test_daily_totals_only_count_that_date() {
        let mut store = store();
        store.add_meal(draft("1", 1.0, MealSlot::Breakfast, day(15)));
        store.add_meal(draft("2", 1.5, MealSlot::Lunch, day(15)));
        store.add_meal(draft("5", 2.0, MealSlot::Dinner, day(14)));

        let totals = store.daily_totals(day(15));
        assert!((totals.calories - 377.5).abs() < 1e-9);
        assert!((totals.protein - 66.5).abs() < 1e-9);
        assert!((store.daily_totals(day(14)).calories - 412.0).abs() < 1e-9);
    }

    #[test]
    fn test_remove_meal_excludes_it_from_totals() {
        let mut store = store();
        let keep = store.add_meal(draft("4", 1.0, MealSlot::Snack, day(15)));
        let drop = store.add_meal(draft("6", 1.0, MealSlot::Snack, day(15)));

        assert!(store.remove_meal(&drop));
        assert_eq!(store.meals().len(), 1);
        assert_eq!(store.meals()[0].id, keep);
        assert_eq!(store.daily_totals(day(15)).calories, 105.0);
    }

    #[test]
    fn test_remove_missing_meal_is_noop() {
        let mut store = store();
        store.add_meal(draft("4", 1.0, MealSlot::Snack, day(15)));
        let before = store.snapshot();

        assert!(!store.remove_meal("does-not-exist"));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_water_intake_overwrites() {
        let mut store = store();
        store.set_water_intake(day(15), 3);
        store.set_water_intake(day(15), 5);
        store.set_water_intake(day(14), 8);

        let records: Vec<_> = store
            .water_records()
            .iter()
            .filter(|r| r.date == day(15))
            .collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].glasses, 5);
        assert_eq!(store.water_intake(day(14)), 8);
        assert_eq!(store.water_intake(day(13)), 0);
    }

    #[test]
    fn test_update_goals_merges() {
        let mut store = store();
        store.update_goals(&DailyGoalsPatch {
            protein: Some(160),
            ..Default::default()
        });
        assert_eq!(store.goals().protein, 160);
        assert_eq!(store.goals().calories, 2200);
    }

    #[test]
    fn test_meals_by_slot_keeps_insertion_order() {
        let mut store = store();
        let rice = store.add_meal(draft("3", 1.0, MealSlot::Lunch, day(15)));
        store.add_meal(draft("1", 1.0, MealSlot::Breakfast, day(15)));
        let chicken = store.add_meal(draft("2", 1.0, MealSlot::Lunch, day(15)));

        let grouped = store.meals_by_slot(day(15));
        let lunch: Vec<_> = grouped[&MealSlot::Lunch].iter().map(|m| m.id.clone()).collect();
        assert_eq!(lunch, vec![rice, chicken]);
        assert!(grouped[&MealSlot::Dinner].is_empty());
        assert_eq!(grouped.len(), 4);
    }

    #[test]
    fn test_meal_keeps_food_copy() {
        let mut store = store();
        let mut food = catalog::find_food("4").unwrap().clone();
        store.add_meal(NewMealEntry {
            food: food.clone(),
            quantity: 1.0,
            meal: MealSlot::Snack,
            date: day(15),
        });
        food.calories = 999.0;

        assert_eq!(store.meals()[0].food.calories, 105.0);
    }

    fn meal_strategy() -> impl Strategy<Value = (usize, f64, u32)> {
        (0usize..8, 0.25f64..4.0, 13u32..17)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: daily calories equal the sum over exactly that day's entries
        #[test]
        fn prop_daily_totals_match_manual_sum(
            meals in proptest::collection::vec(meal_strategy(), 0..30),
            query_day in 13u32..17
        ) {
            let mut store = store();
            for (food_idx, quantity, d) in &meals {
                let food = catalog::foods()[*food_idx].clone();
                store.add_meal(NewMealEntry {
                    food,
                    quantity: *quantity,
                    meal: MealSlot::Snack,
                    date: day(*d),
                });
            }

            let expected: f64 = meals
                .iter()
                .filter(|(_, _, d)| *d == query_day)
                .map(|(idx, q, _)| catalog::foods()[*idx].calories * q)
                .sum();
            let totals = store.daily_totals(day(query_day));

            prop_assert!((totals.calories - expected).abs() < 1e-6,
                "calories {} != expected {}", totals.calories, expected);
        }
    }
}
