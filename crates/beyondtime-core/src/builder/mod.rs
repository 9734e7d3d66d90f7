//! Routine builder: drag catalog tasks into the hourly slots of a day.

mod drag;
mod slots;

pub use drag::{DragSession, DropOutcome};
pub use slots::{slot_labels, SlotMap, TimeSlot, FIRST_SLOT_HOUR, SLOT_COUNT};

use serde::Serialize;

use crate::task::Task;

/// One line of the "Your Day" column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotRow {
    pub slot: TimeSlot,
    pub task: Option<Task>,
    /// Slot is the current drop target
    pub hovered: bool,
}

impl SlotRow {
    /// Text shown in place of an empty slot.
    pub fn placeholder(&self) -> Option<&'static str> {
        match (&self.task, self.hovered) {
            (Some(_), _) => None,
            (None, true) => Some("Drop here"),
            (None, false) => Some("Empty slot"),
        }
    }
}

/// The full schedule view, one row per slot in chronological order.
pub fn schedule_view(map: &SlotMap, drag: &DragSession) -> Vec<SlotRow> {
    map.iter()
        .map(|(slot, task)| SlotRow {
            slot,
            task: task.cloned(),
            hovered: drag.hovered() == Some(slot),
        })
        .collect()
}
