//! Session state root.
//!
//! A [`Session`] owns everything the page can change: the theme, the slot
//! assignments, the in-flight drag and the habit flags. Callers describe a
//! user gesture as an [`Action`] and [`Session::apply`] returns the events it
//! caused. Nothing here outlives the process.

use serde::{Deserialize, Serialize};

use crate::builder::{schedule_view, DragSession, SlotMap, SlotRow, TimeSlot};
use crate::error::ValidationError;
use crate::events::Event;
use crate::habits::HabitTracker;
use crate::task::find_task;
use crate::theme::Theme;

/// A discrete user gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Pick up a catalog task.
    StartDrag { task_id: String },
    /// Drag is over a slot.
    Hover { slot: TimeSlot },
    /// Drag left the hovered slot.
    Leave,
    /// Release over a slot.
    Drop { slot: TimeSlot },
    /// Release outside any slot.
    EndDrag,
    /// Remove button on an occupied slot.
    Remove { slot: TimeSlot },
    ToggleHabit { habit_id: String },
    ToggleTheme,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    theme: Theme,
    schedule: SlotMap,
    drag: DragSession,
    habits: HabitTracker,
}

impl Session {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn schedule(&self) -> &SlotMap {
        &self.schedule
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn habits(&self) -> &HabitTracker {
        &self.habits
    }

    pub fn schedule_view(&self) -> Vec<SlotRow> {
        schedule_view(&self.schedule, &self.drag)
    }

    /// Apply one gesture.
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnknownTask`] or [`ValidationError::UnknownHabit`]
    /// for ids that do not exist. The session is unchanged on error.
    pub fn apply(&mut self, action: Action) -> Result<Vec<Event>, ValidationError> {
        let events = match action {
            Action::StartDrag { task_id } => {
                let task = find_task(&task_id)
                    .ok_or_else(|| ValidationError::UnknownTask(task_id.clone()))?;
                self.drag.start(task);
                vec![Event::DragStarted { task_id }]
            }
            Action::Hover { slot } => {
                self.drag.hover(slot);
                Vec::new()
            }
            Action::Leave => {
                self.drag.leave();
                Vec::new()
            }
            Action::Drop { slot } => self
                .drag
                .drop_on(slot, &mut self.schedule)
                .map(|outcome| Event::TaskAssigned {
                    slot: outcome.slot,
                    task: outcome.task,
                    displaced: outcome.displaced.map(|t| t.id),
                })
                .into_iter()
                .collect(),
            Action::EndDrag => self
                .drag
                .end()
                .map(|task| Event::DragCancelled { task_id: task.id })
                .into_iter()
                .collect(),
            Action::Remove { slot } => self
                .schedule
                .unassign_slot(slot)
                .map(|task| Event::TaskUnassigned {
                    slot,
                    task_id: task.id,
                })
                .into_iter()
                .collect(),
            Action::ToggleHabit { habit_id } => {
                let completed = self.habits.toggle(&habit_id)?;
                vec![Event::HabitToggled {
                    habit_id,
                    completed,
                }]
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                vec![Event::ThemeChanged { theme: self.theme }]
            }
        };
        Ok(events)
    }

    /// Drag `task_id` onto `slot` in one step.
    ///
    /// # Errors
    ///
    /// Same as [`apply`](Self::apply).
    pub fn drag_and_drop(
        &mut self,
        task_id: &str,
        slot: TimeSlot,
    ) -> Result<Vec<Event>, ValidationError> {
        let mut events = self.apply(Action::StartDrag {
            task_id: task_id.to_string(),
        })?;
        self.apply(Action::Hover { slot })?;
        events.extend(self.apply(Action::Drop { slot })?);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(label: &str) -> TimeSlot {
        label.parse().unwrap()
    }

    #[test]
    fn drop_emits_assignment_with_displaced_id() {
        let mut session = Session::default();
        session.drag_and_drop("t2", slot("09:00")).unwrap();
        let events = session.drag_and_drop("t1", slot("09:00")).unwrap();

        assert_eq!(events.len(), 2);
        match &events[1] {
            Event::TaskAssigned { task, displaced, .. } => {
                assert_eq!(task.id, "t1");
                assert_eq!(displaced.as_deref(), Some("t2"));
            }
            other => panic!("unexpected event {other:?}"),
        }
        let current = session.schedule().get(slot("09:00")).unwrap();
        assert_eq!(current.time_slot.as_deref(), Some("09:00"));
    }

    #[test]
    fn unknown_task_leaves_session_untouched() {
        let mut session = Session::default();
        let err = session
            .apply(Action::StartDrag {
                task_id: "nope".into(),
            })
            .unwrap_err();
        assert_eq!(err, ValidationError::UnknownTask("nope".into()));
        assert!(!session.drag().is_dragging());
    }

    #[test]
    fn end_drag_reports_cancel_once() {
        let mut session = Session::default();
        session
            .apply(Action::StartDrag {
                task_id: "t3".into(),
            })
            .unwrap();
        assert_eq!(session.apply(Action::EndDrag).unwrap().len(), 1);
        assert!(session.apply(Action::EndDrag).unwrap().is_empty());
        assert!(session.schedule().is_empty());
    }

    #[test]
    fn remove_empty_slot_emits_nothing() {
        let mut session = Session::default();
        assert!(session
            .apply(Action::Remove { slot: slot("10:00") })
            .unwrap()
            .is_empty());
    }

    #[test]
    fn remove_occupied_slot() {
        let mut session = Session::default();
        session.drag_and_drop("t4", slot("10:00")).unwrap();
        let events = session.apply(Action::Remove { slot: slot("10:00") }).unwrap();
        assert_eq!(
            events,
            vec![Event::TaskUnassigned {
                slot: slot("10:00"),
                task_id: "t4".into()
            }]
        );
        assert!(session.schedule().is_empty());
    }

    #[test]
    fn theme_toggle_is_explicit() {
        let mut session = Session::new(Theme::Light);
        let events = session.apply(Action::ToggleTheme).unwrap();
        assert_eq!(events, vec![Event::ThemeChanged { theme: Theme::Dark }]);
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn habit_toggle_event() {
        let mut session = Session::default();
        let events = session
            .apply(Action::ToggleHabit {
                habit_id: "6".into(),
            })
            .unwrap();
        assert_eq!(
            events,
            vec![Event::HabitToggled {
                habit_id: "6".into(),
                completed: true
            }]
        );
        assert_eq!(session.habits().completed_count(), 5);
    }

    #[test]
    fn actions_deserialize_from_json() {
        let action: Action = serde_json::from_str(r#"{"action":"drop","slot":"09:00"}"#).unwrap();
        assert_eq!(action, Action::Drop { slot: slot("09:00") });
        let action: Action = serde_json::from_str(r#"{"action":"toggle_theme"}"#).unwrap();
        assert_eq!(action, Action::ToggleTheme);
    }
}
