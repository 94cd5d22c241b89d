//! Bookable slot model.
//!
//! A slot is an atomic bookable unit on the weekly grid: a day, a time
//! range, a duration in whole hours, and a kind (lab or theory). Slots
//! whose codes share a prefix before any parenthesis form a slot group;
//! the group is the unit the theory placement strategy reserves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::TimeRange;

/// Error returned when a day name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day {0:?} (expected Monday..Friday)")]
pub struct ParseDayError(pub String);

/// Error returned when a slot-kind label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown slot kind {0:?} (expected Lab or Theory)")]
pub struct ParseSlotKindError(pub String);

/// A teaching day. The grid covers Monday through Friday only.
///
/// Ordering follows the week, which is also the order every first-fit
/// scan uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All teaching days in week order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// English day name.
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = ParseDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" => Ok(Day::Monday),
            "tuesday" => Ok(Day::Tuesday),
            "wednesday" => Ok(Day::Wednesday),
            "thursday" => Ok(Day::Thursday),
            "friday" => Ok(Day::Friday),
            _ => Err(ParseDayError(s.to_string())),
        }
    }
}

/// Classification of a slot on the master grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    /// Long practical block.
    Lab,
    /// Lecture/tutorial slot.
    Theory,
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::Lab => f.write_str("Lab"),
            SlotKind::Theory => f.write_str("Theory"),
        }
    }
}

impl FromStr for SlotKind {
    type Err = ParseSlotKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lab" => Ok(SlotKind::Lab),
            "theory" => Ok(SlotKind::Theory),
            _ => Err(ParseSlotKindError(s.to_string())),
        }
    }
}

/// An atomic bookable unit on the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Unique slot code, e.g. `"A1(1)"`. The prefix before any
    /// parenthesis is the group tag.
    pub code: String,
    /// Day of the week.
    pub day: Day,
    /// Occupied time range.
    pub time: TimeRange,
    /// Duration in whole hours.
    pub duration: u32,
    /// Lab or theory.
    pub kind: SlotKind,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(
        code: impl Into<String>,
        day: Day,
        time: TimeRange,
        duration: u32,
        kind: SlotKind,
    ) -> Self {
        Self {
            code: code.into(),
            day,
            time,
            duration,
            kind,
        }
    }

    /// Group tag: the slot code with any trailing parenthetical suffix
    /// stripped. `"A1(2)"` and `"A1(3)"` share tag `"A1"`.
    pub fn group_tag(&self) -> &str {
        match self.code.split_once('(') {
            Some((tag, _)) => tag.trim(),
            None => self.code.trim(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(code: &str) -> Slot {
        Slot::new(
            code,
            Day::Monday,
            TimeRange::from_hm(8, 0, 9, 0).unwrap(),
            1,
            SlotKind::Theory,
        )
    }

    #[test]
    fn test_day_order_follows_week() {
        assert!(Day::Monday < Day::Friday);
        assert_eq!(Day::ALL[0], Day::Monday);
        assert_eq!(Day::ALL[4], Day::Friday);
    }

    #[test]
    fn test_day_parse() {
        assert_eq!("Wednesday".parse::<Day>().unwrap(), Day::Wednesday);
        assert_eq!(" friday ".parse::<Day>().unwrap(), Day::Friday);
        assert!("Saturday".parse::<Day>().is_err());
    }

    #[test]
    fn test_slot_kind_parse() {
        assert_eq!("Lab".parse::<SlotKind>().unwrap(), SlotKind::Lab);
        assert_eq!("theory".parse::<SlotKind>().unwrap(), SlotKind::Theory);
        assert!("Seminar".parse::<SlotKind>().is_err());
    }

    #[test]
    fn test_group_tag_strips_parenthetical() {
        assert_eq!(slot("A1(1)").group_tag(), "A1");
        assert_eq!(slot("A1(2)").group_tag(), "A1");
        assert_eq!(slot("L3").group_tag(), "L3");
        assert_eq!(slot("B2 (1)").group_tag(), "B2");
    }

    #[test]
    fn test_day_serde_as_name() {
        let json = serde_json::to_string(&Day::Tuesday).unwrap();
        assert_eq!(json, "\"Tuesday\"");
    }
}
