//! Static sample content: the routine catalog and the ring's day plan.

use super::{EnergyLevel, RingTask, Task};

/// Tasks available for dragging into the routine builder.
pub fn routine_catalog() -> Vec<Task> {
    vec![
        Task::new("t1", "Morning Coffee", EnergyLevel::Low, 30),
        Task::new("t2", "Deep Work", EnergyLevel::High, 120),
        Task::new("t3", "Workout", EnergyLevel::Medium, 60),
        Task::new("t4", "Reading", EnergyLevel::Low, 45),
        Task::new("t5", "Meditation", EnergyLevel::Low, 20),
        Task::new("t6", "Evening Wind Down", EnergyLevel::Low, 30),
    ]
}

/// Look up a catalog task by id.
pub fn find_task(id: &str) -> Option<Task> {
    routine_catalog().into_iter().find(|t| t.id == id)
}

/// The sample day drawn on the time ring.
pub fn ring_samples() -> Vec<RingTask> {
    vec![
        RingTask::new("1", "Morning Meditation", 6.0, 1.0, EnergyLevel::Low),
        RingTask::new("2", "Deep Work", 8.0, 3.0, EnergyLevel::High),
        RingTask::new("3", "Lunch & Walk", 12.0, 1.0, EnergyLevel::Medium),
        RingTask::new("4", "Creative Session", 14.0, 2.0, EnergyLevel::High),
        RingTask::new("5", "Exercise", 18.0, 1.0, EnergyLevel::Medium),
        RingTask::new("6", "Evening Wind Down", 21.0, 1.0, EnergyLevel::Low),
    ]
}
