//! Greedy first-fit schedule builder.
//!
//! # Algorithm
//!
//! Two deterministic passes over the course list, input order preserved
//! within each: pass 1 schedules lab-kind courses, pass 2 everything
//! else. Each course is assigned independently and exactly once; there
//! is no backtracking across courses, so an earlier greedy placement
//! can starve a later course. That shortfall is reported, not repaired.
//!
//! Per course:
//! - Lab strategy: one 3-hour lab block, first fit Monday→Friday, no
//!   smaller retry; then the theory load is delegated to the theory
//!   strategy over the same pool and tracker.
//! - Theory strategy: whole slot groups first, ranked by how closely
//!   their summed duration matches the required hours (stable ties keep
//!   catalog order); a group is reserved all-or-nothing. If no group
//!   works, individual slots are placed per 2-then-1-hour chunk,
//!   scanning Monday→Friday and stepping the requested duration down to
//!   one hour before giving up on that chunk.
//!
//! Every commit goes through [`ScheduleBuilder::place_session`], the
//! sole mutator of shared run state. The run is single-threaded, so the
//! check-then-commit pair can never interleave with another placement.

use log::{debug, info, trace};
use serde::Serialize;

use crate::catalog::{SlotCatalog, SlotPool};
use crate::models::{Course, Day, Session, SessionKind, Slot, SlotKind, Timetable};

use super::{ConflictChecker, ConstraintTracker};

/// Lab placements always reserve one block of this many hours.
const LAB_BLOCK_HOURS: u32 = 3;

/// Which strategy requested a placement. The stored session type is
/// derived from this plus the course's hour load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Theory,
    Lab,
}

/// Requested-versus-placed hours for one course.
///
/// The engine degrades silently on infeasible placements; this report
/// is how callers detect under-scheduling. A lab course always reserves
/// a full 3-hour block, so its placed hours can exceed a smaller
/// declared practical load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseCoverage {
    /// Subject code.
    pub subject_code: String,
    /// Batch the record was expanded for.
    pub batch: String,
    /// Hours declared by the course's L-T-P triple.
    pub requested_hours: u32,
    /// Hours actually committed for this (subject, batch) pair.
    pub placed_hours: u32,
}

impl CourseCoverage {
    /// Whether every requested hour was placed.
    pub fn is_complete(&self) -> bool {
        self.placed_hours >= self.requested_hours
    }
}

/// Output of one scheduling run.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResult {
    /// Subject code → committed sessions.
    pub timetable: Timetable,
    /// Per-course requested-versus-placed summary, in input course order.
    pub coverage: Vec<CourseCoverage>,
}

/// Owns the mutable state of one scheduling run.
///
/// The catalog, pool and tracker are private to the run; independent
/// runs never share state, which keeps the engine reentrant for
/// parallel independent timetables.
///
/// # Example
///
/// ```
/// use timegrid::models::{Course, Day, Slot, SlotKind, TimeRange};
/// use timegrid::scheduler::ScheduleBuilder;
///
/// let slots = vec![Slot::new(
///     "A1",
///     Day::Monday,
///     TimeRange::from_hm(8, 0, 9, 0).unwrap(),
///     1,
///     SlotKind::Theory,
/// )];
/// let courses = vec![Course::new("CS101")
///     .with_name("Intro")
///     .with_ltp("1-0-0")
///     .with_faculty("AB")
///     .with_batch("1st")];
///
/// let result = ScheduleBuilder::new(slots).build(&courses);
/// assert_eq!(result.timetable.sessions_for("CS101").len(), 1);
/// assert!(result.coverage[0].is_complete());
/// ```
#[derive(Debug)]
pub struct ScheduleBuilder {
    catalog: SlotCatalog,
    pool: SlotPool,
    tracker: ConstraintTracker,
    timetable: Timetable,
}

impl ScheduleBuilder {
    /// Builds the catalog and initial pool from the slot master table.
    pub fn new(slots: Vec<Slot>) -> Self {
        let catalog = SlotCatalog::from_slots(&slots);
        let pool = SlotPool::new(slots);
        Self {
            catalog,
            pool,
            tracker: ConstraintTracker::new(),
            timetable: Timetable::new(),
        }
    }

    /// Runs the two-pass sweep and returns the accumulated timetable
    /// plus the per-course coverage report.
    ///
    /// Never fails: infeasible placements are dropped and show up as
    /// incomplete coverage instead.
    pub fn build(mut self, courses: &[Course]) -> ScheduleResult {
        info!(
            "scheduling {} courses over {} slots in {} groups",
            courses.len(),
            self.pool.len(),
            self.catalog.len()
        );

        for course in courses.iter().filter(|c| c.kind.is_lab()) {
            self.assign_lab_course(course);
        }
        for course in courses.iter().filter(|c| !c.kind.is_lab()) {
            self.assign_theory_course(course);
        }

        let coverage: Vec<CourseCoverage> =
            courses.iter().map(|c| self.coverage_for(c)).collect();
        let shortfall = coverage.iter().filter(|c| !c.is_complete()).count();
        info!(
            "committed {} sessions; {} of {} courses fully covered",
            self.timetable.session_count(),
            coverage.len() - shortfall,
            coverage.len()
        );

        ScheduleResult {
            timetable: self.timetable,
            coverage,
        }
    }

    /// Lab strategy: one 3-hour lab block, then the theory load.
    fn assign_lab_course(&mut self, course: &Course) {
        let mut block_placed = false;
        for day in Day::ALL {
            let candidate = self
                .pool
                .slots()
                .iter()
                .filter(|s| {
                    s.day == day && s.duration == LAB_BLOCK_HOURS && s.kind == SlotKind::Lab
                })
                .find(|s| !self.has_conflict(course, s))
                .cloned();
            if let Some(slot) = candidate {
                self.place_session(course, &slot, Placement::Lab, LAB_BLOCK_HOURS);
                block_placed = true;
                break;
            }
        }
        if !block_placed {
            debug!(
                "no conflict-free 3h lab block for {} ({})",
                course.subject_code, course.batch
            );
        }

        let theory = course.theory_hours();
        if theory > 0 {
            self.assign_theory(course, theory);
        }
    }

    /// Theory strategy entry point for non-lab courses.
    fn assign_theory_course(&mut self, course: &Course) {
        let required = course.theory_hours();
        if required == 0 {
            // Malformed or empty loads require no placement.
            return;
        }
        self.assign_theory(course, required);
    }

    /// Places `required` theory hours: whole groups first, then the
    /// per-chunk individual fallback.
    fn assign_theory(&mut self, course: &Course, required: u32) {
        if self.try_group_placement(course, required) {
            return;
        }
        trace!(
            "{}: no group candidate succeeded, falling back to individual slots",
            course.subject_code
        );

        let mut remaining = required;
        while remaining > 0 {
            let chunk = if remaining >= 2 { 2 } else { 1 };
            let placed = self.assign_individual(course, chunk);
            if placed == 0 {
                debug!(
                    "{} ({}): dropped a {}h chunk, no conflict-free slot at any duration",
                    course.subject_code, course.batch, chunk
                );
                // Silent drop: the chunk is consumed from the request
                // and no hours are invented to compensate.
                remaining -= chunk;
            } else {
                remaining -= placed;
            }
        }
    }

    /// Tries every group whose summed duration covers `required`,
    /// closest total first. Returns whether one was committed.
    fn try_group_placement(&mut self, course: &Course, required: u32) -> bool {
        let mut candidates: Vec<(String, u32)> = self
            .catalog
            .groups()
            .iter()
            .filter(|g| g.total_duration() >= required)
            .map(|g| (g.tag.clone(), g.total_duration()))
            .collect();
        // Stable sort: ties keep catalog (first-appearance) order.
        candidates.sort_by_key(|(_, total)| total.abs_diff(required));

        for (tag, total) in candidates {
            if self.assign_with_group(course, &tag, required) {
                trace!(
                    "{}: reserved group {} ({}h for {}h required)",
                    course.subject_code,
                    tag,
                    total,
                    required
                );
                return true;
            }
        }
        false
    }

    /// Reserves one slot group all-or-nothing: every member must still
    /// be in the pool and individually conflict-free before anything is
    /// committed. Members are consumed in (day, start) order until the
    /// required hours reach zero.
    fn assign_with_group(&mut self, course: &Course, tag: &str, required: u32) -> bool {
        let members: Vec<Slot> = match self.catalog.group(tag) {
            Some(group) => group.slots.clone(),
            None => return false,
        };

        if !members.iter().all(|s| self.pool.contains(&s.code)) {
            return false;
        }
        if members.iter().any(|s| self.has_conflict(course, s)) {
            return false;
        }

        let mut remaining = required;
        for slot in &members {
            let duration = slot.duration.min(remaining);
            self.place_session(course, slot, Placement::Theory, duration);
            remaining -= duration;
            if remaining == 0 {
                break;
            }
        }
        // The candidate filter guarantees the group total covers the
        // requirement, so remaining is zero here.
        true
    }

    /// Places one individual theory session of `duration` hours,
    /// scanning days Monday→Friday and stepping the duration down to
    /// one hour when nothing fits. Returns the hours actually placed
    /// (zero when even a 1-hour slot cannot be found).
    fn assign_individual(&mut self, course: &Course, duration: u32) -> u32 {
        for day in Day::ALL {
            let candidate = self
                .pool
                .slots()
                .iter()
                .filter(|s| {
                    s.day == day && s.duration == duration && s.kind == SlotKind::Theory
                })
                .find(|s| !self.has_conflict(course, s))
                .cloned();
            if let Some(slot) = candidate {
                self.place_session(course, &slot, Placement::Theory, duration);
                return duration;
            }
        }
        if duration > 1 {
            self.assign_individual(course, duration - 1)
        } else {
            0
        }
    }

    fn has_conflict(&self, course: &Course, slot: &Slot) -> bool {
        ConflictChecker::new(&self.tracker, &self.timetable).has_conflict(course, slot.day, slot)
    }

    /// Sole mutator of run state: appends the session, marks the
    /// tracker, and consumes the slot. The caller must have verified
    /// `has_conflict` immediately before; nothing interleaves in
    /// between in this single-threaded engine.
    fn place_session(&mut self, course: &Course, slot: &Slot, placement: Placement, duration: u32) {
        let kind = match placement {
            Placement::Lab => SessionKind::Lab,
            Placement::Theory if course.load.tutorial > 0 => SessionKind::Tutorial,
            Placement::Theory => SessionKind::Lecture,
        };
        trace!(
            "place {} ({}) as {} on {} {} for {}h via slot {}",
            course.subject_code,
            course.batch,
            kind,
            slot.day,
            slot.time,
            duration,
            slot.code
        );

        self.timetable.add(Session {
            course_code: course.subject_code.clone(),
            course_name: course.subject_name.clone(),
            kind,
            day: slot.day,
            time: slot.time,
            faculty: course.faculty.clone(),
            duration,
            batch: course.batch.clone(),
        });
        self.tracker
            .record(slot.day, &course.faculty, &course.batch, &course.subject_code);
        self.pool.remove(&slot.code);
    }

    fn coverage_for(&self, course: &Course) -> CourseCoverage {
        CourseCoverage {
            subject_code: course.subject_code.clone(),
            batch: course.batch.clone(),
            requested_hours: course.load.total_hours(),
            placed_hours: self.timetable.hours_for(&course.subject_code, &course.batch),
        }
    }
}
