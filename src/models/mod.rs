//! Timetabling domain models.
//!
//! Core data types for the weekly grid: the demand side (`Course` with
//! its L-T-P hour load), the supply side (`Slot` on the Monday–Friday
//! grid), and the solution side (`Session`, `Timetable`).

mod course;
mod session;
mod slot;
mod time;

pub use course::{Course, CourseKind, HourLoad, ParseHourLoadError};
pub use session::{Session, SessionKind, Timetable};
pub use slot::{Day, ParseDayError, ParseSlotKindError, Slot, SlotKind};
pub use time::{ParseTimeRangeError, TimeRange};
