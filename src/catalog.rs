//! Slot catalog and the live slot pool.
//!
//! The catalog is built once per run from the slot master table. It
//! indexes slots by group tag (code prefix before any parenthesis);
//! each group's members are sorted by (day, start time) and represent a
//! fixed weekly pattern intended to cover a course's theory hours in
//! one reservation. Groups keep their first-appearance order, which is
//! the tie-break order for group ranking.
//!
//! The pool is the mutable counterpart: the set of slots not yet
//! consumed by a committed session. It only ever shrinks — there is no
//! release or undo within a run.

use crate::models::Slot;

/// A named set of slots sharing a group tag, sorted by (day, start).
#[derive(Debug, Clone)]
pub struct SlotGroup {
    /// Shared code prefix, e.g. `"A1"` for `"A1(1)"`, `"A1(2)"`.
    pub tag: String,
    /// Member slots in (day, start time) order.
    pub slots: Vec<Slot>,
}

impl SlotGroup {
    /// Summed duration of all members, in hours.
    pub fn total_duration(&self) -> u32 {
        self.slots.iter().map(|s| s.duration).sum()
    }
}

/// Read-only index from group tag to member slots.
#[derive(Debug, Clone, Default)]
pub struct SlotCatalog {
    groups: Vec<SlotGroup>,
}

impl SlotCatalog {
    /// Builds the catalog from the raw slot table.
    ///
    /// An empty table is not an error; it simply yields no candidate
    /// placements.
    pub fn from_slots(slots: &[Slot]) -> Self {
        let mut groups: Vec<SlotGroup> = Vec::new();
        for slot in slots {
            let tag = slot.group_tag();
            match groups.iter_mut().find(|g| g.tag == tag) {
                Some(group) => group.slots.push(slot.clone()),
                None => groups.push(SlotGroup {
                    tag: tag.to_string(),
                    slots: vec![slot.clone()],
                }),
            }
        }
        for group in &mut groups {
            group.slots.sort_by(|a, b| {
                (a.day, a.time.start()).cmp(&(b.day, b.time.start()))
            });
        }
        Self { groups }
    }

    /// All groups in first-appearance order.
    pub fn groups(&self) -> &[SlotGroup] {
        &self.groups
    }

    /// Looks up one group by tag.
    pub fn group(&self, tag: &str) -> Option<&SlotGroup> {
        self.groups.iter().find(|g| g.tag == tag)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the catalog holds no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// The mutable set of still-available slots.
///
/// A slot code appears at most once; once consumed it is permanently
/// removed for the remainder of the run.
#[derive(Debug, Clone, Default)]
pub struct SlotPool {
    slots: Vec<Slot>,
}

impl SlotPool {
    /// Creates the pool from the raw slot table, keeping the first
    /// occurrence of any duplicated slot code.
    pub fn new(slots: Vec<Slot>) -> Self {
        let mut pool = Self { slots: Vec::with_capacity(slots.len()) };
        for slot in slots {
            if !pool.contains(&slot.code) {
                pool.slots.push(slot);
            }
        }
        pool
    }

    /// Still-available slots, in input order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Whether a slot code is still available.
    pub fn contains(&self, code: &str) -> bool {
        self.slots.iter().any(|s| s.code == code)
    }

    /// Consumes a slot by code. Returns the removed slot, or `None` if
    /// it was already consumed.
    pub fn remove(&mut self, code: &str) -> Option<Slot> {
        let idx = self.slots.iter().position(|s| s.code == code)?;
        Some(self.slots.remove(idx))
    }

    /// Number of still-available slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether every slot has been consumed.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, SlotKind, TimeRange};

    fn slot(code: &str, day: Day, start_h: u32, hours: u32) -> Slot {
        Slot::new(
            code,
            day,
            TimeRange::from_hm(start_h, 0, start_h + hours, 0).unwrap(),
            hours,
            SlotKind::Theory,
        )
    }

    #[test]
    fn test_catalog_groups_by_tag() {
        let slots = vec![
            slot("A1(1)", Day::Monday, 8, 1),
            slot("B1", Day::Tuesday, 9, 2),
            slot("A1(2)", Day::Wednesday, 8, 1),
        ];
        let catalog = SlotCatalog::from_slots(&slots);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.group("A1").unwrap().slots.len(), 2);
        assert_eq!(catalog.group("B1").unwrap().total_duration(), 2);
        assert!(catalog.group("C1").is_none());
    }

    #[test]
    fn test_catalog_sorts_members_by_day_then_start() {
        let slots = vec![
            slot("A1(1)", Day::Friday, 8, 1),
            slot("A1(2)", Day::Monday, 10, 1),
            slot("A1(3)", Day::Monday, 8, 1),
        ];
        let catalog = SlotCatalog::from_slots(&slots);
        let members = &catalog.group("A1").unwrap().slots;

        assert_eq!(members[0].code, "A1(3)"); // Monday 08:00
        assert_eq!(members[1].code, "A1(2)"); // Monday 10:00
        assert_eq!(members[2].code, "A1(1)"); // Friday 08:00
    }

    #[test]
    fn test_catalog_keeps_first_appearance_order() {
        let slots = vec![
            slot("Z9", Day::Monday, 8, 1),
            slot("A1(1)", Day::Monday, 9, 1),
            slot("Z9(2)", Day::Tuesday, 8, 1),
        ];
        let catalog = SlotCatalog::from_slots(&slots);
        let tags: Vec<&str> = catalog.groups().iter().map(|g| g.tag.as_str()).collect();
        assert_eq!(tags, ["Z9", "A1"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = SlotCatalog::from_slots(&[]);
        assert!(catalog.is_empty());
        assert!(catalog.groups().is_empty());
    }

    #[test]
    fn test_pool_dedups_by_code() {
        let pool = SlotPool::new(vec![
            slot("A1", Day::Monday, 8, 1),
            slot("A1", Day::Tuesday, 9, 1),
            slot("B1", Day::Monday, 9, 1),
        ]);
        assert_eq!(pool.len(), 2);
        // First occurrence wins
        assert_eq!(
            pool.slots().iter().find(|s| s.code == "A1").unwrap().day,
            Day::Monday
        );
    }

    #[test]
    fn test_pool_remove_is_permanent() {
        let mut pool = SlotPool::new(vec![
            slot("A1", Day::Monday, 8, 1),
            slot("B1", Day::Monday, 9, 1),
        ]);

        let removed = pool.remove("A1").unwrap();
        assert_eq!(removed.code, "A1");
        assert!(!pool.contains("A1"));
        assert_eq!(pool.len(), 1);
        assert!(pool.remove("A1").is_none());
    }
}
