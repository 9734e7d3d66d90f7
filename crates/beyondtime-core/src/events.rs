use serde::{Deserialize, Serialize};

use crate::builder::TimeSlot;
use crate::task::Task;
use crate::theme::Theme;

/// Every session state change produces an Event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    DragStarted {
        task_id: String,
    },
    /// Drag ended without a drop.
    DragCancelled {
        task_id: String,
    },
    TaskAssigned {
        slot: TimeSlot,
        task: Task,
        /// Id of the task that was overwritten, if any
        displaced: Option<String>,
    },
    TaskUnassigned {
        slot: TimeSlot,
        task_id: String,
    },
    HabitToggled {
        habit_id: String,
        completed: bool,
    },
    ThemeChanged {
        theme: Theme,
    },
}
