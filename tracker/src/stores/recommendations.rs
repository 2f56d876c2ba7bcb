//! Recommendation store
//!
//! Generation prepends a whole provider batch ahead of the existing records,
//! keeping the batch's own order. Records are never re-sorted by date.

use fitness_tracker_shared::{
    Recommendation, RecommendationCounts, RecommendationDraft, RecommendationKind,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::clock::Environment;
use crate::coach::RecommendationProvider;

/// Whole-store read of the recommendation store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSnapshot {
    pub recommendations: Vec<Recommendation>,
    pub is_generating: bool,
}

pub struct RecommendationStore {
    env: Environment,
    provider: Box<dyn RecommendationProvider>,
    recommendations: Vec<Recommendation>,
    is_generating: bool,
}

impl RecommendationStore {
    pub fn new(env: Environment, provider: Box<dyn RecommendationProvider>) -> Self {
        Self::with_recommendations(env, provider, Vec::new())
    }

    pub fn with_recommendations(
        env: Environment,
        provider: Box<dyn RecommendationProvider>,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            env,
            provider,
            recommendations,
            is_generating: false,
        }
    }

    /// Prepend a fresh batch from the provider; returns how many were added
    pub fn generate(&mut self) -> usize {
        self.is_generating = true;

        let today = self.env.today();
        let batch: Vec<Recommendation> = self
            .provider
            .recommendations()
            .into_iter()
            .map(|draft| draft.into_recommendation(self.env.next_id(), today))
            .collect();
        let added = batch.len();
        self.recommendations.splice(0..0, batch);

        self.is_generating = false;
        info!(added, total = self.recommendations.len(), "Recommendations generated");
        added
    }

    /// Prepend a single recommendation; returns the assigned id
    pub fn add_recommendation(&mut self, draft: RecommendationDraft) -> String {
        let id = self.env.next_id();
        debug!(recommendation_id = %id, kind = ?draft.kind, "Recommendation added");
        let recommendation = draft.into_recommendation(id.clone(), self.env.today());
        self.recommendations.insert(0, recommendation);
        id
    }

    /// Flag a recommendation as read; unknown ids are ignored
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.recommendations.iter_mut().find(|r| r.id == id) {
            Some(rec) => {
                rec.is_read = true;
                true
            }
            None => {
                debug!(recommendation_id = %id, "No recommendation to mark as read");
                false
            }
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    #[inline]
    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn unread_count(&self) -> usize {
        self.recommendations.iter().filter(|r| !r.is_read).count()
    }

    pub fn count_of(&self, kind: RecommendationKind) -> usize {
        self.recommendations.iter().filter(|r| r.kind == kind).count()
    }

    pub fn counts(&self) -> RecommendationCounts {
        self.recommendations.iter().fold(
            RecommendationCounts::default(),
            |mut counts, rec| {
                counts.total += 1;
                if !rec.is_read {
                    counts.unread += 1;
                }
                match rec.kind {
                    RecommendationKind::Workout => counts.workout += 1,
                    RecommendationKind::Nutrition => counts.nutrition += 1,
                    RecommendationKind::Tip => counts.tip += 1,
                }
                counts
            },
        )
    }

    pub fn snapshot(&self) -> RecommendationSnapshot {
        RecommendationSnapshot {
            recommendations: self.recommendations.clone(),
            is_generating: self.is_generating,
        }
    }
}

impl std::fmt::Debug for RecommendationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationStore")
            .field("recommendations", &self.recommendations.len())
            .field("is_generating", &self.is_generating)
            .finish_non_exhaustive()
    }
}
