//! Habit tracker.
//!
//! Each habit is an "energy core": a ring that fills when the habit is done
//! for the day, plus a streak trail whose width grows with the streak.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;

/// Radius of the progress ring drawn around each habit icon.
pub const CORE_RING_RADIUS: f64 = 60.0;

/// Percent of trail width per streak day.
const TRAIL_PERCENT_PER_DAY: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub color: String,
    pub completed: bool,
    /// Consecutive days completed
    pub streak: u32,
}

impl Habit {
    pub fn new(id: &str, name: &str, color: &str, completed: bool, streak: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            completed,
            streak,
        }
    }

    /// 1.0 when done today, otherwise 0.0.
    pub fn fill(&self) -> f64 {
        if self.completed {
            1.0
        } else {
            0.0
        }
    }

    /// `stroke-dashoffset` for the progress ring.
    pub fn dash_offset(&self) -> f64 {
        core_ring_circumference() * (1.0 - self.fill())
    }

    /// Streak trail width as a percentage, capped at 100.
    pub fn trail_percent(&self) -> u32 {
        self.streak.saturating_mul(TRAIL_PERCENT_PER_DAY).min(100)
    }

    pub fn status_text(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Tap to complete"
        }
    }
}

pub fn core_ring_circumference() -> f64 {
    2.0 * std::f64::consts::PI * CORE_RING_RADIUS
}

/// The sample habits shown on first load.
pub fn initial_habits() -> Vec<Habit> {
    vec![
        Habit::new("1", "Hydration", "#888888", true, 7),
        Habit::new("2", "Meditation", "#aaaaaa", true, 12),
        Habit::new("3", "Exercise", "#cccccc", false, 5),
        Habit::new("4", "Reading", "#666666", true, 3),
        Habit::new("5", "Morning Routine", "#dddddd", true, 15),
        Habit::new("6", "Sleep Schedule", "#444444", false, 8),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitTracker {
    habits: Vec<Habit>,
}

impl Default for HabitTracker {
    fn default() -> Self {
        Self::new(initial_habits())
    }
}

impl HabitTracker {
    pub fn new(habits: Vec<Habit>) -> Self {
        Self { habits }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Flip today's completion for `id` and return the new state.
    ///
    /// The streak count is display data and is left as is.
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnknownHabit`] if no habit has that id.
    pub fn toggle(&mut self, id: &str) -> Result<bool, ValidationError> {
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| ValidationError::UnknownHabit(id.to_string()))?;
        habit.completed = !habit.completed;
        debug!(habit_id = %id, completed = habit.completed, "habit toggled");
        Ok(habit.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.habits.iter().filter(|h| h.completed).count()
    }

    pub fn total(&self) -> usize {
        self.habits.len()
    }

    pub fn all_completed(&self) -> bool {
        !self.habits.is_empty() && self.completed_count() == self.total()
    }

    /// "4/6" summary line.
    pub fn summary(&self) -> String {
        format!("{}/{}", self.completed_count(), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_has_four_of_six_done() {
        let tracker = HabitTracker::default();
        assert_eq!(tracker.total(), 6);
        assert_eq!(tracker.completed_count(), 4);
        assert_eq!(tracker.summary(), "4/6");
        assert!(!tracker.all_completed());
    }

    #[test]
    fn toggle_flips_only_target() {
        let mut tracker = HabitTracker::default();
        assert_eq!(tracker.toggle("3"), Ok(true));
        assert!(tracker.get("3").unwrap().completed);
        assert!(!tracker.get("6").unwrap().completed);
        assert_eq!(tracker.toggle("3"), Ok(false));
    }

    #[test]
    fn toggle_keeps_streak() {
        let mut tracker = HabitTracker::default();
        tracker.toggle("2").unwrap();
        assert_eq!(tracker.get("2").unwrap().streak, 12);
    }

    #[test]
    fn toggle_unknown_habit_fails() {
        let mut tracker = HabitTracker::default();
        assert_eq!(
            tracker.toggle("99"),
            Err(ValidationError::UnknownHabit("99".to_string()))
        );
    }

    #[test]
    fn completing_everything_sets_all_completed() {
        let mut tracker = HabitTracker::default();
        tracker.toggle("3").unwrap();
        tracker.toggle("6").unwrap();
        assert!(tracker.all_completed());
        assert!(!HabitTracker::new(Vec::new()).all_completed());
    }

    #[test]
    fn dash_offset_empties_ring_when_not_done() {
        let tracker = HabitTracker::default();
        let done = tracker.get("1").unwrap();
        let open = tracker.get("3").unwrap();
        assert_eq!(done.dash_offset(), 0.0);
        assert!((open.dash_offset() - core_ring_circumference()).abs() < 1e-9);
    }

    #[test]
    fn trail_is_capped_at_full_width() {
        let tracker = HabitTracker::default();
        assert_eq!(tracker.get("4").unwrap().trail_percent(), 18);
        assert_eq!(tracker.get("5").unwrap().trail_percent(), 90);
        let long = Habit::new("x", "Long", "#000000", true, 40);
        assert_eq!(long.trail_percent(), 100);
    }

    #[test]
    fn status_text_follows_completion() {
        let tracker = HabitTracker::default();
        assert_eq!(tracker.get("1").unwrap().status_text(), "Completed");
        assert_eq!(tracker.get("6").unwrap().status_text(), "Tap to complete");
    }
}
