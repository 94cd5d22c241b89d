//! Integrity checks for scheduling inputs and produced timetables.
//!
//! Input checks catch table problems before a run (duplicate slot
//! codes, zero-duration slots, malformed hour loads). Timetable checks
//! re-verify the engine's invariants on the output: no faculty or
//! batch double-booking and at most one session per subject per day.
//! The engine never aborts on these — validation is how callers and
//! tests observe what the silent-degradation policy glossed over.

use std::collections::HashSet;

use crate::models::{Course, CourseKind, Session, Slot, Timetable};

/// Validation result: `Ok(())` or every detected issue.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two slots share the same code.
    DuplicateSlotCode,
    /// A slot declares a zero-hour duration.
    ZeroDurationSlot,
    /// A course has an empty subject code.
    EmptySubjectCode,
    /// A course's L-T-P triple did not parse.
    MalformedHourLoad,
    /// Two sessions of one faculty overlap on the same day.
    FacultyOverlap,
    /// Two sessions of one batch overlap on the same day.
    BatchOverlap,
    /// A subject received more than one session on one day.
    SubjectDayRepeat,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the course and slot tables before a scheduling run.
///
/// Checks:
/// 1. No duplicate slot codes (the pool would drop the duplicates).
/// 2. No zero-duration slots.
/// 3. Every course has a non-empty subject code.
/// 4. Every course's hour load parsed (kind is not `Unknown`).
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(courses: &[Course], slots: &[Slot]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut codes = HashSet::new();
    for slot in slots {
        if !codes.insert(slot.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlotCode,
                format!("Duplicate slot code: {}", slot.code),
            ));
        }
        if slot.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDurationSlot,
                format!("Slot '{}' has zero duration", slot.code),
            ));
        }
    }

    for course in courses {
        if course.subject_code.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySubjectCode,
                format!("Course '{}' has an empty subject code", course.subject_name),
            ));
        }
        if course.kind == CourseKind::Unknown {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedHourLoad,
                format!("Course '{}' has a malformed L-T-P", course.subject_code),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Verifies the engine invariants on a produced timetable.
///
/// Checks every pair of sessions sharing a day:
/// 1. Same faculty never overlaps in time.
/// 2. Same batch never overlaps in time.
/// 3. A subject has at most one session per day.
pub fn check_timetable(timetable: &Timetable) -> ValidationResult {
    let mut errors = Vec::new();
    let sessions: Vec<&Session> = timetable.sessions().collect();

    for (i, a) in sessions.iter().enumerate() {
        for b in sessions.iter().skip(i + 1) {
            if a.day != b.day {
                continue;
            }
            if a.course_code == b.course_code {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SubjectDayRepeat,
                    format!("'{}' has two sessions on {}", a.course_code, a.day),
                ));
            }
            if !a.time.overlaps(&b.time) {
                continue;
            }
            if a.faculty == b.faculty {
                errors.push(ValidationError::new(
                    ValidationErrorKind::FacultyOverlap,
                    format!(
                        "Faculty '{}' double-booked on {} ({} vs {})",
                        a.faculty, a.day, a.course_code, b.course_code
                    ),
                ));
            }
            if a.batch == b.batch {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BatchOverlap,
                    format!(
                        "Batch '{}' double-booked on {} ({} vs {})",
                        a.batch, a.day, a.course_code, b.course_code
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, SessionKind, SlotKind, TimeRange};
    use crate::scheduler::ScheduleBuilder;

    fn slot(code: &str, day: Day, start_h: u32, hours: u32, kind: SlotKind) -> Slot {
        Slot::new(
            code,
            day,
            TimeRange::from_hm(start_h, 0, start_h + hours, 0).unwrap(),
            hours,
            kind,
        )
    }

    fn session(code: &str, faculty: &str, batch: &str, day: Day, start_h: u32, hours: u32) -> Session {
        Session {
            course_code: code.to_string(),
            course_name: String::new(),
            kind: SessionKind::Lecture,
            day,
            time: TimeRange::from_hm(start_h, 0, start_h + hours, 0).unwrap(),
            faculty: faculty.to_string(),
            duration: hours,
            batch: batch.to_string(),
        }
    }

    #[test]
    fn test_valid_input() {
        let courses = vec![Course::new("CS101").with_ltp("3-0-0")];
        let slots = vec![slot("A1", Day::Monday, 8, 1, SlotKind::Theory)];
        assert!(validate_input(&courses, &slots).is_ok());
    }

    #[test]
    fn test_duplicate_slot_code() {
        let slots = vec![
            slot("A1", Day::Monday, 8, 1, SlotKind::Theory),
            slot("A1", Day::Tuesday, 8, 1, SlotKind::Theory),
        ];
        let errors = validate_input(&[], &slots).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSlotCode));
    }

    #[test]
    fn test_zero_duration_slot() {
        let bad = Slot::new(
            "A1",
            Day::Monday,
            TimeRange::from_hm(8, 0, 9, 0).unwrap(),
            0,
            SlotKind::Theory,
        );
        let errors = validate_input(&[], &[bad]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroDurationSlot));
    }

    #[test]
    fn test_malformed_load_flagged() {
        let courses = vec![Course::new("CS101").with_ltp("3/Jan")];
        let errors = validate_input(&courses, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MalformedHourLoad));
    }

    #[test]
    fn test_empty_subject_code_flagged() {
        let courses = vec![Course::new("  ").with_ltp("3-0-0")];
        let errors = validate_input(&courses, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptySubjectCode));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let courses = vec![Course::new("").with_ltp("bad")];
        let slots = vec![
            slot("A1", Day::Monday, 8, 1, SlotKind::Theory),
            slot("A1", Day::Monday, 9, 1, SlotKind::Theory),
        ];
        let errors = validate_input(&courses, &slots).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_clean_timetable_passes() {
        let mut t = Timetable::new();
        t.add(session("C1", "SG", "2nd", Day::Monday, 8, 1));
        t.add(session("C2", "SG", "2nd", Day::Monday, 9, 1));
        t.add(session("C1", "SG", "2nd", Day::Tuesday, 8, 1));
        assert!(check_timetable(&t).is_ok());
    }

    #[test]
    fn test_faculty_overlap_detected() {
        let mut t = Timetable::new();
        t.add(session("C1", "SG", "2nd", Day::Monday, 8, 2));
        t.add(session("C2", "SG", "3rd", Day::Monday, 9, 1));
        let errors = check_timetable(&t).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::FacultyOverlap));
    }

    #[test]
    fn test_batch_overlap_detected() {
        let mut t = Timetable::new();
        t.add(session("C1", "SG", "2nd", Day::Monday, 8, 2));
        t.add(session("C2", "MK", "2nd", Day::Monday, 9, 1));
        let errors = check_timetable(&t).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::BatchOverlap));
    }

    #[test]
    fn test_subject_day_repeat_detected() {
        let mut t = Timetable::new();
        t.add(session("C1", "SG", "2nd", Day::Monday, 8, 1));
        t.add(session("C1", "SG", "2nd", Day::Monday, 14, 1));
        let errors = check_timetable(&t).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SubjectDayRepeat));
    }

    #[test]
    fn test_engine_output_passes_checks() {
        // End to end: whatever the greedy engine commits must satisfy
        // the invariants.
        let slots = vec![
            slot("A1(1)", Day::Monday, 8, 1, SlotKind::Theory),
            slot("A1(2)", Day::Wednesday, 8, 1, SlotKind::Theory),
            slot("A1(3)", Day::Friday, 8, 1, SlotKind::Theory),
            slot("L1", Day::Tuesday, 9, 3, SlotKind::Lab),
            slot("X1", Day::Thursday, 14, 2, SlotKind::Theory),
        ];
        let courses = vec![
            Course::new("AE29202")
                .with_ltp("0-0-3")
                .with_faculty("MK")
                .with_batch("2nd"),
            Course::new("AE21202")
                .with_ltp("3-1-0")
                .with_faculty("SG")
                .with_batch("2nd"),
        ];

        let result = ScheduleBuilder::new(slots).build(&courses);
        assert!(check_timetable(&result.timetable).is_ok());
    }
}
