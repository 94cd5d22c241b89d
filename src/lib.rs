//! Weekly course-timetable engine.
//!
//! Assigns academic course sessions (lectures, tutorials, labs) to a
//! fixed Monday–Friday grid of bookable slots, respecting faculty
//! availability, batch availability, and a one-session-per-subject-
//! per-day rule. The engine is a deterministic greedy first-fit — it
//! favors always producing *a* timetable over guaranteeing a complete
//! one, and reports any shortfall per course instead of failing.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Course`, `HourLoad`, `Slot`, `Day`,
//!   `Session`, `Timetable`
//! - **`catalog`**: the slot-group index and the live slot pool
//! - **`input`**: upstream expansion of raw course rows into one
//!   record per (subject, batch) pair
//! - **`scheduler`**: constraint tracker, conflict checker, and the
//!   two-pass schedule builder
//! - **`validation`**: input integrity checks and post-hoc timetable
//!   invariant checks
//!
//! # Architecture
//!
//! One `ScheduleBuilder` owns the state of one run (slot pool,
//! constraint tracker, accumulating timetable) and is discarded at the
//! end; only the timetable and its coverage report survive. Everything
//! around the engine — file upload, spreadsheet parsing, rendering —
//! is an external collaborator that exchanges plain serde-shaped
//! tables with this crate.
//!
//! # Example
//!
//! ```
//! use timegrid::models::{Course, Day, Slot, SlotKind, TimeRange};
//! use timegrid::scheduler::ScheduleBuilder;
//!
//! let slots = vec![
//!     Slot::new("A1(1)", Day::Monday, TimeRange::from_hm(8, 0, 9, 0).unwrap(), 1, SlotKind::Theory),
//!     Slot::new("A1(2)", Day::Wednesday, TimeRange::from_hm(8, 0, 9, 0).unwrap(), 1, SlotKind::Theory),
//!     Slot::new("A1(3)", Day::Friday, TimeRange::from_hm(8, 0, 9, 0).unwrap(), 1, SlotKind::Theory),
//! ];
//! let courses = vec![Course::new("AE21202")
//!     .with_name("Low Speed Aerodynamics")
//!     .with_ltp("3-0-0")
//!     .with_faculty("SG")
//!     .with_batch("2nd")];
//!
//! let result = ScheduleBuilder::new(slots).build(&courses);
//! assert_eq!(result.timetable.sessions_for("AE21202").len(), 3);
//! assert!(result.coverage.iter().all(|c| c.is_complete()));
//! ```

pub mod catalog;
pub mod input;
pub mod models;
pub mod scheduler;
pub mod validation;
