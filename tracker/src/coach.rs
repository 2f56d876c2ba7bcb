//! Recommendation content providers
//!
//! The recommendation store asks a provider for a batch of drafts and owns
//! everything else (ids, dates, ordering, read state). Swapping the provider
//! changes the content only.

use fitness_tracker_shared::{RecommendationDraft, RecommendationKind};

/// Produces a batch of recommendation drafts
pub trait RecommendationProvider: Send + Sync {
    /// Drafts in display order
    fn recommendations(&self) -> Vec<RecommendationDraft>;
}

/// Fixed workout, nutrition and tip texts
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedCoach;

impl RecommendationProvider for CannedCoach {
    fn recommendations(&self) -> Vec<RecommendationDraft> {
        vec![
            RecommendationDraft::new(
                RecommendationKind::Workout,
                "Compound Movement Focus Week",
                "This week, focus on compound movements to maximize muscle growth. Include \
                 deadlifts, squats, bench press, and rows. These exercises work multiple muscle \
                 groups simultaneously, leading to better hormone response and overall strength \
                 gains. Aim for 3-4 sets of 6-8 reps with progressive overload.",
            ),
            RecommendationDraft::new(
                RecommendationKind::Nutrition,
                "Meal Timing for Fat Loss",
                "Optimize your meal timing for better fat loss results. Eat your largest meal \
                 post-workout when insulin sensitivity is highest. Include healthy fats like \
                 avocado and nuts in your morning meal to support hormone production. Consider a \
                 16:8 intermittent fasting window to enhance fat oxidation.",
            ),
            RecommendationDraft::new(
                RecommendationKind::Tip,
                "Stress Management for Better Results",
                "High cortisol from stress can sabotage your fitness goals. Incorporate 10 \
                 minutes of daily meditation, practice deep breathing between sets, and schedule \
                 regular rest days. Consider adaptogenic herbs like ashwagandha to help manage \
                 stress response and improve recovery.",
            ),
        ]
    }
}
