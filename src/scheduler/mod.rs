//! The slot-assignment engine.
//!
//! Owns one scheduling run: a private slot pool, a constraint tracker,
//! and the accumulating timetable.
//!
//! # Algorithm
//!
//! `ScheduleBuilder` sweeps the course list in two passes (labs first),
//! gating every candidate placement through `ConflictChecker` and
//! committing through a single placement routine that keeps the pool,
//! the tracker, and the timetable in step. Greedy first-fit throughout;
//! infeasible hours are dropped silently and surface only in the
//! per-course coverage report.
//!
//! # Concurrency
//!
//! Single-threaded and synchronous. Run state is exclusively owned by
//! the builder, so independent timetables can be produced on separate
//! threads without any shared locking.

mod builder;
mod conflict;
mod tracker;

pub use builder::{CourseCoverage, ScheduleBuilder, ScheduleResult};
pub use conflict::ConflictChecker;
pub use tracker::ConstraintTracker;
