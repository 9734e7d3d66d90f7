//! # Beyond Time Core Library
//!
//! This library provides the model behind the Beyond Time daily routine
//! optimizer. All behaviour lives here; the CLI binary is a thin layer that
//! prints what the library computes.
//!
//! ## Architecture
//!
//! - **Time Ring**: 24-hour clock face geometry and SVG rendering
//! - **Routine Builder**: sixteen hourly slots filled by drag and drop
//! - **Habits**: daily completion flags with streak display math
//! - **Session**: the single owner of mutable state, driven by actions
//! - **Clock**: wall-clock refresh for the live displays
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`RingGeometry`]: converts a task span into an annular sector path
//! - [`SlotMap`]: slot-to-task assignments with overwrite semantics
//! - [`Session`]: applies user gestures and reports [`Event`]s
//! - [`Config`]: application configuration management

pub mod builder;
pub mod clock;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod habits;
pub mod hero;
pub mod insights;
pub mod particles;
pub mod ring;
pub mod session;
pub mod storage;
pub mod task;
pub mod theme;

pub use builder::{DragSession, SlotMap, TimeSlot};
pub use clock::{spawn_clock, ClockHandle, RefreshSchedule, RefreshTarget};
pub use dashboard::DashboardView;
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use habits::{Habit, HabitTracker};
pub use particles::ParticleField;
pub use ring::{RingGeometry, RingRenderer, RingSegment};
pub use session::{Action, Session};
pub use storage::Config;
pub use task::{EnergyLevel, RingTask, Task};
pub use theme::Theme;
