//! Course model.
//!
//! A course is the unit of demand: a subject taught to one batch by one
//! primary faculty member, with a weekly hour load given as an L-T-P
//! triple (lecture, tutorial, practical). Multi-batch subjects are
//! expanded upstream into one `Course` per batch (see [`crate::input`]),
//! all sharing the subject code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an L-T-P string is not three non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected three '-'-separated hour counts, got {0:?}")]
pub struct ParseHourLoadError(pub String);

/// Weekly hour load as a lecture-tutorial-practical triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourLoad {
    /// Lecture hours per week.
    pub lecture: u32,
    /// Tutorial hours per week.
    pub tutorial: u32,
    /// Practical (lab) hours per week.
    pub practical: u32,
}

impl HourLoad {
    /// Zero load; what malformed hour strings degrade to.
    pub const ZERO: HourLoad = HourLoad {
        lecture: 0,
        tutorial: 0,
        practical: 0,
    };

    /// Creates a load from the three hour counts.
    pub fn new(lecture: u32, tutorial: u32, practical: u32) -> Self {
        Self {
            lecture,
            tutorial,
            practical,
        }
    }

    /// Lenient parse: any malformed input yields [`HourLoad::ZERO`]
    /// rather than an error, so a bad row simply requires no placement.
    pub fn parse(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Hours the theory strategy must place (lecture + tutorial).
    #[inline]
    pub fn theory_hours(&self) -> u32 {
        self.lecture + self.tutorial
    }

    /// Total declared hours.
    #[inline]
    pub fn total_hours(&self) -> u32 {
        self.lecture + self.tutorial + self.practical
    }
}

impl fmt::Display for HourLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.lecture, self.tutorial, self.practical)
    }
}

impl FromStr for HourLoad {
    type Err = ParseHourLoadError;

    /// Strict parse: exactly three `-`-separated non-negative integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseHourLoadError(s.to_string());
        let mut parts = s.trim().split('-');
        let lecture = parts.next().ok_or_else(err)?.trim().parse().map_err(|_| err())?;
        let tutorial = parts.next().ok_or_else(err)?.trim().parse().map_err(|_| err())?;
        let practical = parts.next().ok_or_else(err)?.trim().parse().map_err(|_| err())?;
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Self::new(lecture, tutorial, practical))
    }
}

/// Course classification derived from the hour triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseKind {
    /// Has practical hours; scheduled in the lab pass.
    Lab,
    /// No practicals but tutorial hours.
    Tutorial,
    /// Lectures only.
    Lecture,
    /// Hour triple did not parse.
    Unknown,
}

impl CourseKind {
    /// Classifies a parsed load.
    pub fn from_load(load: HourLoad) -> Self {
        if load.practical > 0 {
            CourseKind::Lab
        } else if load.tutorial > 0 {
            CourseKind::Tutorial
        } else {
            CourseKind::Lecture
        }
    }

    /// Classifies a raw L-T-P string; unparseable input is [`Unknown`].
    ///
    /// [`Unknown`]: CourseKind::Unknown
    pub fn infer(ltp: &str) -> Self {
        match ltp.parse::<HourLoad>() {
            Ok(load) => Self::from_load(load),
            Err(_) => CourseKind::Unknown,
        }
    }

    /// Whether this course is processed in the lab pass.
    #[inline]
    pub fn is_lab(&self) -> bool {
        matches!(self, CourseKind::Lab)
    }
}

impl fmt::Display for CourseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CourseKind::Lab => "Lab",
            CourseKind::Tutorial => "Tutorial",
            CourseKind::Lecture => "Lecture",
            CourseKind::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// A course to be scheduled, immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Subject code; the key the output timetable is grouped under.
    pub subject_code: String,
    /// Human-readable subject name.
    pub subject_name: String,
    /// Weekly hour load.
    pub load: HourLoad,
    /// Classification; decides which scheduling pass handles the course.
    pub kind: CourseKind,
    /// Primary faculty identifier.
    pub faculty: String,
    /// Batch identifier, e.g. `"2nd"`.
    pub batch: String,
    /// Preferred room, if the input named one. Carried through for
    /// downstream renderers; the engine does not constrain on it.
    pub room_pref: Option<String>,
}

impl Course {
    /// Creates a course with the given subject code and an empty load.
    pub fn new(subject_code: impl Into<String>) -> Self {
        Self {
            subject_code: subject_code.into(),
            subject_name: String::new(),
            load: HourLoad::ZERO,
            kind: CourseKind::Lecture,
            faculty: String::new(),
            batch: String::new(),
            room_pref: None,
        }
    }

    /// Sets the subject name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.subject_name = name.into();
        self
    }

    /// Sets the load from a raw L-T-P string. The load parses leniently
    /// (malformed → zero hours) while the kind records the failure as
    /// [`CourseKind::Unknown`].
    pub fn with_ltp(mut self, ltp: &str) -> Self {
        self.load = HourLoad::parse(ltp);
        self.kind = CourseKind::infer(ltp);
        self
    }

    /// Sets an already-parsed load.
    pub fn with_load(mut self, load: HourLoad) -> Self {
        self.load = load;
        self.kind = CourseKind::from_load(load);
        self
    }

    /// Sets the primary faculty.
    pub fn with_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculty = faculty.into();
        self
    }

    /// Sets the batch.
    pub fn with_batch(mut self, batch: impl Into<String>) -> Self {
        self.batch = batch.into();
        self
    }

    /// Sets the preferred room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room_pref = Some(room.into());
        self
    }

    /// Hours the theory strategy must place for this course.
    #[inline]
    pub fn theory_hours(&self) -> u32 {
        self.load.theory_hours()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_load_strict_parse() {
        let load: HourLoad = "3-1-0".parse().unwrap();
        assert_eq!(load, HourLoad::new(3, 1, 0));
        assert_eq!(load.theory_hours(), 4);
        assert_eq!(load.total_hours(), 4);
    }

    #[test]
    fn test_hour_load_strict_rejects() {
        assert!("3-1".parse::<HourLoad>().is_err());
        assert!("3-1-0-2".parse::<HourLoad>().is_err());
        assert!("a-b-c".parse::<HourLoad>().is_err());
        assert!("3-1--1".parse::<HourLoad>().is_err());
        assert!("".parse::<HourLoad>().is_err());
    }

    #[test]
    fn test_hour_load_lenient_parse_zeroes() {
        assert_eq!(HourLoad::parse("nonsense"), HourLoad::ZERO);
        assert_eq!(HourLoad::parse("3-1"), HourLoad::ZERO);
        assert_eq!(HourLoad::parse(" 2-0-3 "), HourLoad::new(2, 0, 3));
    }

    #[test]
    fn test_hour_load_display_roundtrip() {
        let load = HourLoad::new(3, 1, 2);
        assert_eq!(load.to_string(), "3-1-2");
        assert_eq!(load.to_string().parse::<HourLoad>().unwrap(), load);
    }

    #[test]
    fn test_kind_inference() {
        assert_eq!(CourseKind::infer("0-0-3"), CourseKind::Lab);
        assert_eq!(CourseKind::infer("3-1-0"), CourseKind::Tutorial);
        assert_eq!(CourseKind::infer("3-0-0"), CourseKind::Lecture);
        assert_eq!(CourseKind::infer("garbled"), CourseKind::Unknown);
        // Practical hours dominate tutorial hours
        assert_eq!(CourseKind::infer("3-1-2"), CourseKind::Lab);
    }

    #[test]
    fn test_course_builder() {
        let course = Course::new("AE21202")
            .with_name("Low Speed Aerodynamics")
            .with_ltp("3-1-0")
            .with_faculty("SG")
            .with_batch("2nd")
            .with_room("NC141");

        assert_eq!(course.subject_code, "AE21202");
        assert_eq!(course.load, HourLoad::new(3, 1, 0));
        assert_eq!(course.kind, CourseKind::Tutorial);
        assert_eq!(course.theory_hours(), 4);
        assert_eq!(course.room_pref.as_deref(), Some("NC141"));
    }

    #[test]
    fn test_malformed_ltp_degrades_to_zero_unknown() {
        let course = Course::new("X").with_ltp("3/Jan");
        assert_eq!(course.load, HourLoad::ZERO);
        assert_eq!(course.kind, CourseKind::Unknown);
        assert_eq!(course.theory_hours(), 0);
    }
}
