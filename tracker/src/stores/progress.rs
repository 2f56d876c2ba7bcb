//! Body progress tracker
//!
//! Entries are kept newest-inserted first. `entries[0]` is the latest entry
//! *by insertion*, not by date: an entry backfilled for a past day still
//! becomes the latest one. [`ProgressStore::entries_by_date`] offers the
//! date-ordered view for callers that want it.

use fitness_tracker_shared::calculations::{goal_progress, weight_trend};
use fitness_tracker_shared::{
    GoalProgress, NewProgressEntry, ProgressEntry, ProgressGoals, ProgressGoalsPatch, WeightTrend,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::Environment;

/// Whole-store read of the progress tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub entries: Vec<ProgressEntry>,
    pub goals: ProgressGoals,
}

#[derive(Debug)]
pub struct ProgressStore {
    env: Environment,
    entries: Vec<ProgressEntry>,
    goals: ProgressGoals,
}

impl ProgressStore {
    pub fn new(env: Environment, goals: ProgressGoals) -> Self {
        Self::with_entries(env, Vec::new(), goals)
    }

    /// Store preloaded with entries, newest first
    pub fn with_entries(env: Environment, entries: Vec<ProgressEntry>, goals: ProgressGoals) -> Self {
        Self {
            env,
            entries,
            goals,
        }
    }

    /// Record a measurement as the latest entry; returns the assigned id
    pub fn add_entry(&mut self, draft: NewProgressEntry) -> String {
        let id = self.env.next_id();
        debug!(entry_id = %id, date = %draft.date, weight = draft.weight, "Progress entry added");
        self.entries.insert(0, draft.into_entry(id.clone()));
        id
    }

    /// Replace the entry with the same id in place
    pub fn update_entry(&mut self, entry: ProgressEntry) -> bool {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => {
                debug!(entry_id = %entry.id, "Progress entry updated");
                *existing = entry;
                true
            }
            None => {
                debug!(entry_id = %entry.id, "No progress entry to update");
                false
            }
        }
    }

    pub fn delete_entry(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        debug!(entry_id = %id, removed, "Progress entry removal");
        removed
    }

    pub fn update_goals(&mut self, patch: &ProgressGoalsPatch) {
        self.goals.apply(patch);
        debug!(goals = ?self.goals, "Progress goals updated");
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Newest inserted first
    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    /// Entries ordered by date, newest first; ties keep insertion order
    pub fn entries_by_date(&self) -> Vec<&ProgressEntry> {
        let mut sorted: Vec<&ProgressEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn goals(&self) -> &ProgressGoals {
        &self.goals
    }

    pub fn latest(&self) -> Option<&ProgressEntry> {
        self.entries.first()
    }

    /// Weight change between the two most recently inserted entries
    pub fn trend(&self) -> Option<WeightTrend> {
        match self.entries.as_slice() {
            [latest, previous, ..] => Some(weight_trend(latest.weight, previous.weight)),
            _ => None,
        }
    }

    /// Latest weight against the target weight; `None` without entries
    pub fn goal_progress(&self) -> Option<GoalProgress> {
        self.latest()
            .map(|latest| goal_progress(latest.weight, self.goals.target_weight))
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            entries: self.entries.clone(),
            goals: self.goals.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{SequentialIds, SystemClock};
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn store() -> ProgressStore {
        let env = Environment::new(Arc::new(SystemClock), Arc::new(SequentialIds::new("p")));
        ProgressStore::new(
            env,
            ProgressGoals {
                target_weight: 170.0,
                target_body_fat: Some(12.0),
                target_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            },
        )
    }

    #[test]
    fn test_insertion_order_defines_latest() {
        let mut store = store();
        let first = store.add_entry(NewProgressEntry::weight_only(day(20), 176.0));
        // Backfilled for an earlier day, still becomes the latest entry
        let second = store.add_entry(NewProgressEntry::weight_only(day(1), 180.0));

        assert_eq!(store.entries()[0].id, second);
        assert_eq!(store.entries()[1].id, first);
        assert_eq!(store.latest().unwrap().weight, 180.0);

        let by_date: Vec<_> = store.entries_by_date().iter().map(|e| e.id.clone()).collect();
        assert_eq!(by_date, vec![first, second]);
    }

    #[test]
    fn test_trend_needs_two_entries() {
        let mut store = store();
        assert!(store.trend().is_none());

        store.add_entry(NewProgressEntry::weight_only(day(1), 180.0));
        assert!(store.trend().is_none());

        store.add_entry(NewProgressEntry::weight_only(day(8), 177.0));
        let trend = store.trend().unwrap();
        assert_eq!(trend.delta, -3.0);
        assert!(!trend.is_increasing);
    }

    #[test]
    fn test_update_entry_replaces_in_place() {
        let mut store = store();
        let a = store.add_entry(NewProgressEntry::weight_only(day(1), 180.0));
        store.add_entry(NewProgressEntry::weight_only(day(8), 177.0));

        let mut edited = store.entries()[1].clone();
        assert_eq!(edited.id, a);
        edited.weight = 179.5;
        edited.body_fat = Some(16.0);

        assert!(store.update_entry(edited.clone()));
        assert_eq!(store.entries()[1], edited);
    }

    #[test]
    fn test_update_missing_entry_is_noop() {
        let mut store = store();
        store.add_entry(NewProgressEntry::weight_only(day(1), 180.0));
        let before = store.snapshot();

        let stranger = NewProgressEntry::weight_only(day(2), 150.0).into_entry("ghost".into());
        assert!(!store.update_entry(stranger));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_delete_entry() {
        let mut store = store();
        let a = store.add_entry(NewProgressEntry::weight_only(day(1), 180.0));
        assert!(store.delete_entry(&a));
        assert!(!store.delete_entry(&a));
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_goal_progress() {
        let mut store = store();
        assert!(store.goal_progress().is_none());

        store.add_entry(NewProgressEntry::weight_only(day(15), 175.0));
        store.update_goals(&ProgressGoalsPatch {
            target_weight: Some(165.0),
            ..Default::default()
        });

        let progress = store.goal_progress().unwrap();
        assert_eq!(progress.remaining, 10.0);
        assert_eq!(store.goals().target_body_fat, Some(12.0));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: entries come back in reverse insertion order, whatever their dates
        #[test]
        fn prop_entries_are_reverse_insertion_order(
            days in proptest::collection::vec(1u32..29, 1..20)
        ) {
            let mut store = store();
            let ids: Vec<String> = days
                .iter()
                .map(|d| store.add_entry(NewProgressEntry::weight_only(day(*d), 170.0)))
                .collect();

            let stored: Vec<String> = store.entries().iter().map(|e| e.id.clone()).collect();
            let expected: Vec<String> = ids.into_iter().rev().collect();
            prop_assert_eq!(stored, expected);
        }
    }
}
