//! Per-day presence indexes used as the fast conflict-reject gate.

use std::collections::{HashMap, HashSet};

use crate::models::Day;

/// Coarse per-day presence indexes over committed sessions.
///
/// Tracks which faculty and which batches already have at least one
/// session on a given day, and which days a subject has already used.
/// These are presence sets, not exact interval sets: when a presence
/// gate fires, exact overlap is re-derived from the authoritative
/// session list by the conflict checker, so the tracker can never cause
/// a false conflict on its own.
#[derive(Debug, Clone, Default)]
pub struct ConstraintTracker {
    faculty_days: HashMap<Day, HashSet<String>>,
    batch_days: HashMap<Day, HashSet<String>>,
    subject_days: HashMap<String, HashSet<Day>>,
}

impl ConstraintTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the faculty has any committed session on `day`.
    pub fn faculty_busy(&self, day: Day, faculty: &str) -> bool {
        self.faculty_days
            .get(&day)
            .is_some_and(|set| set.contains(faculty))
    }

    /// Whether the batch has any committed session on `day`.
    pub fn batch_busy(&self, day: Day, batch: &str) -> bool {
        self.batch_days
            .get(&day)
            .is_some_and(|set| set.contains(batch))
    }

    /// Whether the subject already received a session on `day`.
    pub fn subject_used(&self, subject_code: &str, day: Day) -> bool {
        self.subject_days
            .get(subject_code)
            .is_some_and(|days| days.contains(&day))
    }

    /// Records a committed session: marks the faculty and batch busy on
    /// `day` and the day used for the subject.
    pub fn record(&mut self, day: Day, faculty: &str, batch: &str, subject_code: &str) {
        self.faculty_days
            .entry(day)
            .or_default()
            .insert(faculty.to_string());
        self.batch_days
            .entry(day)
            .or_default()
            .insert(batch.to_string());
        self.subject_days
            .entry(subject_code.to_string())
            .or_default()
            .insert(day);
    }
}
