//! Dashboard: greeting card, live clock line and the stat cards.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

/// Time-of-day greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Greeting::Morning,
            12..=17 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Greeting::Morning => "Good Morning",
            Greeting::Afternoon => "Good Afternoon",
            Greeting::Evening => "Good Evening",
        }
    }
}

/// A headline figure with a progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub color: &'static str,
    /// Bar fill, 0-100
    pub progress: u8,
}

pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Tasks Completed",
            value: "12/15",
            color: "#888888",
            progress: 80,
        },
        StatCard {
            label: "Focus Time",
            value: "4.5h",
            color: "#aaaaaa",
            progress: 75,
        },
        StatCard {
            label: "Energy Level",
            value: "High",
            color: "#cccccc",
            progress: 90,
        },
        StatCard {
            label: "Productivity",
            value: "+23%",
            color: "#666666",
            progress: 85,
        },
    ]
}

/// Everything the greeting card shows for one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// e.g. "Friday, October 16"
    pub date_line: String,
    /// e.g. "Good Evening, Nirmal"
    pub greeting: String,
    /// 24-hour `HH:MM`
    pub clock: String,
    pub message: &'static str,
    pub stats: Vec<StatCard>,
}

impl DashboardView {
    pub fn at(now: NaiveDateTime, user_name: &str) -> Self {
        let greeting = Greeting::for_hour(now.hour()).text();
        Self {
            date_line: format!("{}, {} {}", now.format("%A"), now.format("%B"), now.day()),
            greeting: if user_name.is_empty() {
                greeting.to_string()
            } else {
                format!("{greeting}, {user_name}")
            },
            clock: now.format("%H:%M").to_string(),
            message: "You're ahead of schedule. Keep the momentum going.",
            stats: stat_cards(),
        }
    }
}
