//! Committed session and timetable (solution) models.
//!
//! A session is one committed placement of part of a course onto one
//! slot. The timetable maps each subject code to its sessions in commit
//! order; its serde shape is the output contract consumed by downstream
//! renderers (grid HTML, Excel export) as an opaque nested mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{Day, TimeRange};

/// The effective type stored on a committed session.
///
/// Serialized lowercase (`"lecture"`, `"tutorial"`, `"lab"`) per the
/// output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Lecture,
    Tutorial,
    Lab,
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionKind::Lecture => "lecture",
            SessionKind::Tutorial => "tutorial",
            SessionKind::Lab => "lab",
        };
        f.write_str(s)
    }
}

/// One committed placement of part of a course onto one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Subject code.
    pub course_code: String,
    /// Subject name.
    pub course_name: String,
    /// Effective session type.
    #[serde(rename = "type")]
    pub kind: SessionKind,
    /// Day of the week.
    pub day: Day,
    /// Occupied time range, serialized as `"HH:MM:SS - HH:MM:SS"`.
    pub time: TimeRange,
    /// Faculty identifier.
    pub faculty: String,
    /// Committed duration in hours. May be shorter than the slot when a
    /// group member covers the tail of a course's required hours.
    pub duration: u32,
    /// Batch identifier.
    pub batch: String,
}

/// Mapping from subject code to the sessions committed for it.
///
/// Within a subject, sessions appear in commit order. The mapping itself
/// is sorted by subject code, so two identical runs serialize to
/// identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    entries: BTreeMap<String, Vec<Session>>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a session under its subject code.
    pub fn add(&mut self, session: Session) {
        self.entries
            .entry(session.course_code.clone())
            .or_default()
            .push(session);
    }

    /// Sessions committed for one subject, in commit order.
    pub fn sessions_for(&self, subject_code: &str) -> &[Session] {
        self.entries
            .get(subject_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates over every committed session.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.entries.values().flatten()
    }

    /// Subject codes with at least one session.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Total committed hours for one (subject, batch) pair.
    pub fn hours_for(&self, subject_code: &str, batch: &str) -> u32 {
        self.sessions_for(subject_code)
            .iter()
            .filter(|s| s.batch == batch)
            .map(|s| s.duration)
            .sum()
    }

    /// Number of committed sessions.
    pub fn session_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether no session has been committed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
