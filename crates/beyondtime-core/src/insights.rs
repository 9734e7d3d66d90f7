//! Static insight cards.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub fn insights() -> Vec<Insight> {
    vec![
        Insight {
            id: "1",
            title: "Peak Focus Window",
            description: "You focus best between 6:30-9:00 AM. Schedule your most important work during this golden window.",
            color: "#fbbf24",
        },
        Insight {
            id: "2",
            title: "Energy Pattern Detected",
            description: "Your energy dips after long screen sessions. Try a 5-minute reset every 90 minutes to maintain peak performance.",
            color: "#a855f7",
        },
        Insight {
            id: "3",
            title: "Productivity Boost",
            description: "Tasks completed before 10 AM have a 40% higher success rate. Start your day with intention.",
            color: "#06b6d4",
        },
    ]
}
