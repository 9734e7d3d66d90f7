//! Task types shared by the routine builder and the time ring.
//!
//! Two shapes exist: [`Task`] is a catalog entry that can be dropped into an
//! hourly slot, and [`RingTask`] is a span of the day drawn on the 24-hour
//! ring. Both are defined once in [`catalog`] and never change at runtime.

pub mod catalog;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub use catalog::{find_task, ring_samples, routine_catalog};

/// Energy level for task scheduling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    /// Low energy (e.g., wind-down, coffee)
    Low,
    /// Medium energy (default)
    Medium,
    /// High energy (e.g., deep work)
    High,
}

impl EnergyLevel {
    /// All tiers in ascending order, as shown in the ring legend.
    pub const ALL: [EnergyLevel; 3] = [EnergyLevel::Low, EnergyLevel::Medium, EnergyLevel::High];

    /// Accent colour used for ring segments and legend dots.
    pub fn color(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "#06b6d4",
            EnergyLevel::Medium => "#a855f7",
            EnergyLevel::High => "#fbbf24",
        }
    }
}

impl Default for EnergyLevel {
    fn default() -> Self {
        EnergyLevel::Medium
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergyLevel::Low => write!(f, "low"),
            EnergyLevel::Medium => write!(f, "medium"),
            EnergyLevel::High => write!(f, "high"),
        }
    }
}

impl FromStr for EnergyLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(EnergyLevel::Low),
            "medium" => Ok(EnergyLevel::Medium),
            "high" => Ok(EnergyLevel::High),
            other => Err(ValidationError::InvalidValue {
                field: "energy".to_string(),
                message: format!("expected low, medium or high, got '{other}'"),
            }),
        }
    }
}

/// A schedulable unit from the routine catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Catalog identifier (`t1`..`t6`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Energy tier
    pub energy: EnergyLevel,
    /// Planned length in minutes
    pub duration_minutes: u32,
    /// Slot label this copy was placed in, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        energy: EnergyLevel,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            energy,
            duration_minutes,
            time_slot: None,
        }
    }

    /// Copy of this task stamped with the slot it was dropped on.
    pub fn placed_at(&self, slot: impl Into<String>) -> Self {
        Self {
            time_slot: Some(slot.into()),
            ..self.clone()
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} min, {})", self.name, self.duration_minutes, self.energy)
    }
}

/// A span of the day drawn on the time ring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RingTask {
    pub id: String,
    pub name: String,
    /// Hour of day the span starts at, fractional allowed
    pub start_hour: f64,
    /// Length of the span in hours
    pub duration_hours: f64,
    pub energy: EnergyLevel,
}

impl RingTask {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_hour: f64,
        duration_hours: f64,
        energy: EnergyLevel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_hour,
            duration_hours,
            energy,
        }
    }

    pub fn end_hour(&self) -> f64 {
        self.start_hour + self.duration_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_level_default() {
        assert_eq!(EnergyLevel::default(), EnergyLevel::Medium);
    }

    #[test]
    fn energy_level_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<EnergyLevel>().unwrap(), EnergyLevel::High);
        assert_eq!("low".parse::<EnergyLevel>().unwrap(), EnergyLevel::Low);
        assert!("extreme".parse::<EnergyLevel>().is_err());
    }

    #[test]
    fn energy_level_serializes_lowercase() {
        let json = serde_json::to_string(&EnergyLevel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn placed_at_keeps_catalog_fields() {
        let task = Task::new("t2", "Deep Work", EnergyLevel::High, 120);
        let placed = task.placed_at("09:00");
        assert_eq!(placed.id, "t2");
        assert_eq!(placed.duration_minutes, 120);
        assert_eq!(placed.time_slot.as_deref(), Some("09:00"));
        assert!(task.time_slot.is_none());
    }

    #[test]
    fn unplaced_task_omits_time_slot_in_json() {
        let task = Task::new("t4", "Reading", EnergyLevel::Low, 45);
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("time_slot").is_none());
    }

    #[test]
    fn ring_task_end_hour() {
        let task = RingTask::new("2", "Deep Work", 8.0, 3.0, EnergyLevel::High);
        assert_eq!(task.end_hour(), 11.0);
    }
}
