//! Conflict checking for candidate placements.
//!
//! # Algorithm
//!
//! For a candidate (course, day, slot):
//! 1. If the course's faculty has no session that day (presence gate),
//!    no faculty conflict is possible. Otherwise re-check exactly
//!    against every committed session of that faculty on that day with
//!    the half-open interval test `max(starts) < min(ends)`.
//! 2. Same two steps for the course's batch.
//! 3. A subject may not receive two sessions the same day, including
//!    across its lab and theory sub-assignments.
//!
//! The presence fast path avoids scanning the session list for faculty
//! and batches with zero activity that day; exactness comes from the
//! authoritative session list rather than a second interval index.

use crate::models::{Course, Day, Slot, TimeRange, Timetable};

use super::ConstraintTracker;

/// Read-only conflict gate over the tracker and the committed sessions.
#[derive(Debug, Clone, Copy)]
pub struct ConflictChecker<'a> {
    tracker: &'a ConstraintTracker,
    timetable: &'a Timetable,
}

impl<'a> ConflictChecker<'a> {
    /// Borrows the run state for checking.
    pub fn new(tracker: &'a ConstraintTracker, timetable: &'a Timetable) -> Self {
        Self { tracker, timetable }
    }

    /// Whether placing `course` on `slot` at `day` would violate faculty
    /// overlap, batch overlap, or the one-session-per-subject-per-day
    /// rule.
    pub fn has_conflict(&self, course: &Course, day: Day, slot: &Slot) -> bool {
        if self.tracker.faculty_busy(day, &course.faculty)
            && self.overlaps_committed(day, &slot.time, |faculty, _| faculty == course.faculty)
        {
            return true;
        }

        if self.tracker.batch_busy(day, &course.batch)
            && self.overlaps_committed(day, &slot.time, |_, batch| batch == course.batch)
        {
            return true;
        }

        self.tracker.subject_used(&course.subject_code, day)
    }

    fn overlaps_committed(
        &self,
        day: Day,
        candidate: &TimeRange,
        owner_matches: impl Fn(&str, &str) -> bool,
    ) -> bool {
        self.timetable.sessions().any(|session| {
            session.day == day
                && owner_matches(&session.faculty, &session.batch)
                && session.time.overlaps(candidate)
        })
    }
}
