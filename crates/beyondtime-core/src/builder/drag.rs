//! Drag-and-drop gesture state for the routine builder.
//!
//! ```text
//! Idle --start--> Dragging --hover/leave--> Dragging
//!                    |  \
//!                  drop  end
//!                    v    v
//!           (assign) Idle Idle (no mutation)
//! ```
//!
//! The gesture markers are transient; only a drop touches the [`SlotMap`].

use serde::Serialize;
use tracing::debug;

use super::slots::{SlotMap, TimeSlot};
use crate::task::Task;

/// What a successful drop did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropOutcome {
    pub slot: TimeSlot,
    pub task: Task,
    /// Task that occupied the slot before the drop
    pub displaced: Option<Task>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    candidate: Option<Task>,
    hovered: Option<TimeSlot>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick up `task`. Replaces any candidate already in hand.
    pub fn start(&mut self, task: Task) {
        debug!(task_id = %task.id, "drag started");
        self.candidate = Some(task);
        self.hovered = None;
    }

    /// Mark `slot` as the current drop target. Ignored when nothing is
    /// being dragged; returns whether the hover was recorded.
    pub fn hover(&mut self, slot: TimeSlot) -> bool {
        if self.candidate.is_none() {
            return false;
        }
        self.hovered = Some(slot);
        true
    }

    /// Pointer left the hovered slot.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Drop the candidate on `slot`.
    ///
    /// Without a candidate nothing happens and `None` is returned.
    pub fn drop_on(&mut self, slot: TimeSlot, map: &mut SlotMap) -> Option<DropOutcome> {
        let task = self.candidate.take()?;
        self.hovered = None;
        let displaced = map.assign_slot(slot, &task);
        let placed = map.get(slot).cloned().unwrap_or_else(|| task.placed_at(slot.label()));
        Some(DropOutcome {
            slot,
            task: placed,
            displaced,
        })
    }

    /// Drop onto whatever slot is currently hovered.
    pub fn drop_on_hovered(&mut self, map: &mut SlotMap) -> Option<DropOutcome> {
        let slot = self.hovered?;
        self.drop_on(slot, map)
    }

    /// Drag ended without a drop: clear markers, leave the map alone.
    pub fn end(&mut self) -> Option<Task> {
        self.hovered = None;
        let cancelled = self.candidate.take();
        if let Some(task) = &cancelled {
            debug!(task_id = %task.id, "drag cancelled");
        }
        cancelled
    }

    pub fn is_dragging(&self) -> bool {
        self.candidate.is_some()
    }

    pub fn candidate(&self) -> Option<&Task> {
        self.candidate.as_ref()
    }

    pub fn hovered(&self) -> Option<TimeSlot> {
        self.hovered
    }
}
