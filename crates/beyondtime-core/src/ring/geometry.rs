//! Annular-sector geometry for the 24-hour ring.
//!
//! Hour 0 sits at twelve o'clock and hours advance clockwise, so an hour maps
//! to `hour / 24 * 360 - 90` degrees in SVG screen space (y grows downward).
//!
//! Spans that run past hour 24 are not wrapped: the end angle is computed from
//! the raw end hour and simply continues past 270 degrees.

use chrono::Timelike;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ValidationError;
use crate::task::RingTask;

pub const HOURS_PER_DAY: f64 = 24.0;

/// Spans longer than this sweep more than half the circle.
const LARGE_ARC_THRESHOLD_HOURS: f64 = 12.0;

/// A point in SVG user space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Dimensions of the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    pub center_x: f64,
    pub center_y: f64,
    /// Outer radius of the task band
    pub radius: f64,
    /// Band thickness; inner radius is `radius - thickness`
    pub thickness: f64,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            center_x: 200.0,
            center_y: 200.0,
            radius: 150.0,
            thickness: 30.0,
        }
    }
}

/// One task's band on the ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSegment {
    pub start_angle: f64,
    pub end_angle: f64,
    pub large_arc: bool,
    pub radius: f64,
    pub inner_radius: f64,
    pub outer_start: Point,
    pub outer_end: Point,
    pub inner_end: Point,
    pub inner_start: Point,
}

/// Angle in degrees for an hour of the day, 0 h at the top.
pub fn hour_to_angle(hour: f64) -> f64 {
    (hour / HOURS_PER_DAY) * 360.0 - 90.0
}

/// Fractional hour of a wall-clock time (seconds ignored).
pub fn current_hour<T: Timelike>(time: &T) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0
}

impl RingGeometry {
    pub fn inner_radius(&self) -> f64 {
        self.radius - self.thickness
    }

    /// Project a polar coordinate (degrees) around the ring centre.
    pub fn point_at(&self, radius: f64, angle_deg: f64) -> Point {
        let rad = angle_deg.to_radians();
        Point {
            x: self.center_x + radius * rad.cos(),
            y: self.center_y + radius * rad.sin(),
        }
    }

    /// Compute the band for a span starting at `start_hour` lasting
    /// `duration_hours`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidHourRange`] when the start is outside
    /// `[0, 24)` and [`ValidationError::InvalidDuration`] when the duration is
    /// negative, not finite, or so large that the end angle overflows. A zero
    /// duration is accepted and yields a zero-area band.
    pub fn segment(
        &self,
        start_hour: f64,
        duration_hours: f64,
    ) -> Result<RingSegment, ValidationError> {
        if !start_hour.is_finite() || !(0.0..HOURS_PER_DAY).contains(&start_hour) {
            return Err(ValidationError::InvalidHourRange { hour: start_hour });
        }
        if !duration_hours.is_finite() || duration_hours < 0.0 {
            return Err(ValidationError::InvalidDuration {
                duration: duration_hours,
            });
        }

        let end_hour = start_hour + duration_hours;
        let start_angle = hour_to_angle(start_hour);
        let end_angle = hour_to_angle(end_hour);
        if !end_angle.is_finite() {
            return Err(ValidationError::InvalidDuration {
                duration: duration_hours,
            });
        }
        if end_hour > HOURS_PER_DAY {
            warn!(
                start_hour,
                duration_hours, "ring span runs past midnight; end angle is not wrapped"
            );
        }

        let inner_radius = self.inner_radius();

        Ok(RingSegment {
            start_angle,
            end_angle,
            large_arc: duration_hours > LARGE_ARC_THRESHOLD_HOURS,
            radius: self.radius,
            inner_radius,
            outer_start: self.point_at(self.radius, start_angle),
            outer_end: self.point_at(self.radius, end_angle),
            inner_end: self.point_at(inner_radius, end_angle),
            inner_start: self.point_at(inner_radius, start_angle),
        })
    }

    pub fn segment_for(&self, task: &RingTask) -> Result<RingSegment, ValidationError> {
        self.segment(task.start_hour, task.duration_hours)
    }

    /// Tip of the current-time hand, on the outer radius.
    ///
    /// Projected like the segments, with midnight at the top, so the hand
    /// points into the band of whatever is scheduled now.
    pub fn hand_tip<T: Timelike>(&self, time: &T) -> Point {
        self.point_at(self.radius, hour_to_angle(current_hour(time)))
    }
}

impl RingSegment {
    /// SVG path data: outer arc clockwise, line inward, inner arc back, close.
    pub fn path(&self) -> String {
        let large = u8::from(self.large_arc);
        format!(
            "M {} {} A {r} {r} 0 {large} 1 {} {} L {} {} A {ri} {ri} 0 {large} 0 {} {} Z",
            self.outer_start.x,
            self.outer_start.y,
            self.outer_end.x,
            self.outer_end.y,
            self.inner_end.x,
            self.inner_end.y,
            self.inner_start.x,
            self.inner_start.y,
            r = self.radius,
            ri = self.inner_radius,
        )
    }

    /// Zero-area band (start and end coincide).
    pub fn is_degenerate(&self) -> bool {
        self.outer_start == self.outer_end && self.inner_start == self.inner_end
    }
}
