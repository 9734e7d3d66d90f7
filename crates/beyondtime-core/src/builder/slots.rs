//! Fixed hourly slots and the slot-to-task assignment map.
//!
//! The day is cut into sixteen one-hour slots, 06:00 through 21:00. Each slot
//! holds at most one task; assigning to an occupied slot replaces the
//! occupant. Nothing stops the same catalog task from sitting in several
//! slots at once.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::task::Task;

/// Hour of the first slot.
pub const FIRST_SLOT_HOUR: u8 = 6;
/// Number of slots in a day.
pub const SLOT_COUNT: usize = 16;

/// One of the sixteen hourly slots, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// Slot by position, 0 = 06:00.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SLOT_COUNT).then(|| TimeSlot(index as u8))
    }

    /// Every slot in chronological order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..SLOT_COUNT as u8).map(TimeSlot)
    }

    pub fn hour(self) -> u8 {
        FIRST_SLOT_HOUR + self.0
    }

    /// `HH:00` label.
    pub fn label(self) -> String {
        format!("{:02}:00", self.hour())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.hour())
    }
}

impl FromStr for TimeSlot {
    type Err = ValidationError;

    /// Only exact `HH:00` labels from the fixed set are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::all()
            .find(|slot| slot.label() == s)
            .ok_or_else(|| ValidationError::UnknownSlot(s.to_string()))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.label()
    }
}

/// All slot labels in order.
pub fn slot_labels() -> Vec<String> {
    TimeSlot::all().map(TimeSlot::label).collect()
}

/// Which task, if any, sits in each slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotMap {
    assignments: BTreeMap<TimeSlot, Task>,
}

impl SlotMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `task` in `slot`, replacing any occupant.
    ///
    /// The stored copy carries the slot label in `time_slot`. Returns the
    /// displaced task, if there was one.
    pub fn assign_slot(&mut self, slot: TimeSlot, task: &Task) -> Option<Task> {
        let previous = self.assignments.insert(slot, task.placed_at(slot.label()));
        debug!(
            slot = %slot,
            task_id = %task.id,
            displaced = previous.as_ref().map(|t| t.id.as_str()),
            "task assigned"
        );
        previous
    }

    /// Label-based [`assign_slot`](Self::assign_slot).
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnknownSlot`] if `slot` is not one of the fixed labels.
    pub fn assign(&mut self, slot: &str, task: &Task) -> Result<Option<Task>, ValidationError> {
        let slot: TimeSlot = slot.parse()?;
        Ok(self.assign_slot(slot, task))
    }

    /// Clear `slot`. Clearing an empty slot is a no-op.
    pub fn unassign_slot(&mut self, slot: TimeSlot) -> Option<Task> {
        let removed = self.assignments.remove(&slot);
        if let Some(task) = &removed {
            debug!(slot = %slot, task_id = %task.id, "task unassigned");
        }
        removed
    }

    /// # Errors
    ///
    /// [`ValidationError::UnknownSlot`] if `slot` is not one of the fixed labels.
    pub fn unassign(&mut self, slot: &str) -> Result<Option<Task>, ValidationError> {
        let slot: TimeSlot = slot.parse()?;
        Ok(self.unassign_slot(slot))
    }

    pub fn get(&self, slot: TimeSlot) -> Option<&Task> {
        self.assignments.get(&slot)
    }

    /// # Errors
    ///
    /// [`ValidationError::UnknownSlot`] if `slot` is not one of the fixed labels.
    pub fn lookup(&self, slot: &str) -> Result<Option<&Task>, ValidationError> {
        let slot: TimeSlot = slot.parse()?;
        Ok(self.get(slot))
    }

    /// Every slot in order, occupied or not.
    pub fn iter(&self) -> impl Iterator<Item = (TimeSlot, Option<&Task>)> + '_ {
        TimeSlot::all().map(move |slot| (slot, self.get(slot)))
    }

    pub fn occupied_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Sum of planned minutes across occupied slots.
    pub fn planned_minutes(&self) -> u32 {
        self.assignments.values().map(|t| t.duration_minutes).sum()
    }
}
