//! Time-of-day ranges on the weekly grid.
//!
//! Slots and committed sessions both carry a [`TimeRange`]: a half-open
//! `[start, end)` interval within one day. The canonical text form is
//! `"HH:MM:SS - HH:MM:SS"`, which is also the wire form consumed by
//! downstream renderers, so serde round-trips through that string.

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a time-range string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeRangeError {
    /// Input is not two " - "-separated parts.
    #[error("expected \"HH:MM:SS - HH:MM:SS\", got {0:?}")]
    Malformed(String),
    /// One side is not a valid time of day.
    #[error("invalid time of day {0:?}")]
    BadTime(String),
    /// The range ends at or before its start.
    #[error("range {0:?} ends at or before its start")]
    Empty(String),
}

/// A half-open `[start, end)` interval within one day.
///
/// Overlap is defined on the half-open interval: two ranges overlap iff
/// `max(starts) < min(ends)`, so back-to-back ranges do not conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeRange {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeRange {
    /// Creates a range, or `None` when `end <= start`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Option<Self> {
        if end > start {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Convenience constructor from whole hours and minutes.
    pub fn from_hm(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> Option<Self> {
        let start = NaiveTime::from_hms_opt(start_h, start_m, 0)?;
        let end = NaiveTime::from_hms_opt(end_h, end_m, 0)?;
        Self::new(start, end)
    }

    /// Start of the range.
    #[inline]
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// End of the range (exclusive).
    #[inline]
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Half-open interval intersection test.
    #[inline]
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%H:%M:%S"),
            self.end.format("%H:%M:%S")
        )
    }
}

fn parse_time(part: &str) -> Result<NaiveTime, ParseTimeRangeError> {
    let part = part.trim();
    NaiveTime::parse_from_str(part, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(part, "%H:%M"))
        .map_err(|_| ParseTimeRangeError::BadTime(part.to_string()))
}

impl FromStr for TimeRange {
    type Err = ParseTimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lhs, rhs) = s
            .split_once('-')
            .ok_or_else(|| ParseTimeRangeError::Malformed(s.to_string()))?;
        let start = parse_time(lhs)?;
        let end = parse_time(rhs)?;
        Self::new(start, end).ok_or_else(|| ParseTimeRangeError::Empty(s.to_string()))
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
