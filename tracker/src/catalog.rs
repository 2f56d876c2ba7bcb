//! Read-only food and exercise catalogs
//!
//! Entry-creation flows pick items from here. Meal entries copy the chosen
//! [`Food`] by value.

use fitness_tracker_shared::{CatalogExercise, ExerciseCategory, Food};
use once_cell::sync::Lazy;

fn food(
    id: &str,
    name: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    serving: &str,
) -> Food {
    Food {
        id: id.to_string(),
        name: name.to_string(),
        calories,
        protein,
        carbs,
        fat,
        fiber,
        serving: serving.to_string(),
    }
}

/// Food database
pub static FOODS: Lazy<Vec<Food>> = Lazy::new(|| {
    vec![
        food("1", "Greek Yogurt", 130.0, 20.0, 9.0, 0.0, 0.0, "1 cup"),
        food("2", "Chicken Breast", 165.0, 31.0, 0.0, 3.6, 0.0, "100g"),
        food("3", "Brown Rice", 218.0, 4.5, 45.0, 1.6, 3.5, "1 cup cooked"),
        food("4", "Banana", 105.0, 1.3, 27.0, 0.4, 3.1, "1 medium"),
        food("5", "Salmon", 206.0, 22.0, 0.0, 12.0, 0.0, "100g"),
        food("6", "Avocado", 160.0, 2.0, 8.5, 15.0, 6.7, "1/2 avocado"),
        food("7", "Oatmeal", 147.0, 5.4, 28.0, 2.8, 4.0, "1/2 cup dry"),
        food("8", "Eggs", 155.0, 13.0, 1.1, 11.0, 0.0, "2 large"),
    ]
});

/// Exercise library
pub static EXERCISES: Lazy<Vec<CatalogExercise>> = Lazy::new(|| {
    use ExerciseCategory::*;

    [
        ("Push-ups", Chest),
        ("Bench Press", Chest),
        ("Pull-ups", Back),
        ("Rows", Back),
        ("Squats", Legs),
        ("Deadlifts", Legs),
        ("Shoulder Press", Shoulders),
        ("Bicep Curls", Arms),
        ("Tricep Dips", Arms),
        ("Plank", Core),
    ]
    .into_iter()
    .map(|(name, category)| CatalogExercise {
        name: name.to_string(),
        category,
    })
    .collect()
});

pub fn foods() -> &'static [Food] {
    &FOODS
}

pub fn find_food(id: &str) -> Option<&'static Food> {
    FOODS.iter().find(|f| f.id == id)
}

/// Case-insensitive substring match on the food name
pub fn search_foods(query: &str) -> Vec<&'static Food> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return FOODS.iter().collect();
    }
    FOODS
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&query))
        .collect()
}

pub fn exercises() -> &'static [CatalogExercise] {
    &EXERCISES
}

pub fn exercises_in(category: ExerciseCategory) -> impl Iterator<Item = &'static CatalogExercise> {
    EXERCISES.iter().filter(move |e| e.category == category)
}

pub fn find_exercise(name: &str) -> Option<&'static CatalogExercise> {
    EXERCISES.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_food_ids_are_unique() {
        let ids: HashSet<_> = foods().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), foods().len());
    }

    #[test]
    fn test_nutrients_are_non_negative() {
        for f in foods() {
            assert!(fitness_tracker_shared::validation::validate_food(f).is_ok(), "{}", f.name);
        }
    }

    #[test]
    fn test_search_foods() {
        let hits = search_foods("  RICE ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Brown Rice");

        assert_eq!(search_foods("").len(), foods().len());
        assert!(search_foods("pizza").is_empty());
    }

    #[test]
    fn test_find_food() {
        assert_eq!(find_food("5").map(|f| f.name.as_str()), Some("Salmon"));
        assert!(find_food("99").is_none());
    }

    #[test]
    fn test_exercises_by_category() {
        let legs: Vec<_> = exercises_in(ExerciseCategory::Legs).map(|e| e.name.as_str()).collect();
        assert_eq!(legs, vec!["Squats", "Deadlifts"]);
        assert!(exercises_in(ExerciseCategory::Cardio).next().is_none());
    }

    #[test]
    fn test_find_exercise_ignores_case() {
        let plank = find_exercise("plank").unwrap();
        assert_eq!(plank.category, ExerciseCategory::Core);
    }
}
