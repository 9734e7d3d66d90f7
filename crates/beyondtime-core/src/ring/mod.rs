//! The 24-hour time ring: segment geometry and SVG rendering.

mod geometry;
mod render;

pub use geometry::{
    current_hour, hour_to_angle, Point, RingGeometry, RingSegment, HOURS_PER_DAY,
};
pub use render::{legend, LegendEntry, RingRenderer};
