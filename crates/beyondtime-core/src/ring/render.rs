//! SVG rendering of the full time ring.

use std::fmt;

use chrono::Timelike;

use super::geometry::{hour_to_angle, RingGeometry, RingSegment};
use crate::error::ValidationError;
use crate::task::{EnergyLevel, RingTask};
use crate::theme::Theme;

const VIEWBOX: u32 = 400;
const TICK_OUTER: f64 = 155.0;
const TICK_INNER: f64 = 145.0;
const LABEL_RADIUS: f64 = 170.0;
const CENTER_DISC_RADIUS: f64 = 40.0;
const HAND_COLOR: &str = "#fbbf24";

const SEGMENT_OPACITY: f64 = 0.6;
const HIGHLIGHT_OPACITY: f64 = 0.9;

/// One row of the energy legend under the ring.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LegendEntry {
    pub energy: EnergyLevel,
    pub color: &'static str,
    pub label: String,
}

pub fn legend() -> Vec<LegendEntry> {
    EnergyLevel::ALL
        .iter()
        .map(|&energy| LegendEntry {
            energy,
            color: energy.color(),
            label: format!("{energy} energy"),
        })
        .collect()
}

/// Renders the ring for one theme.
#[derive(Debug, Clone)]
pub struct RingRenderer {
    geometry: RingGeometry,
    theme: Theme,
    highlighted: Option<String>,
}

impl RingRenderer {
    pub fn new(geometry: RingGeometry, theme: Theme) -> Self {
        Self {
            geometry,
            theme,
            highlighted: None,
        }
    }

    /// Draw the task with this id at full highlight opacity.
    pub fn with_highlight(mut self, task_id: impl Into<String>) -> Self {
        self.highlighted = Some(task_id.into());
        self
    }

    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    /// Render a standalone SVG document.
    ///
    /// # Errors
    ///
    /// Fails on the first task whose span is rejected by
    /// [`RingGeometry::segment`].
    pub fn render_svg<T: Timelike>(
        &self,
        tasks: &[RingTask],
        now: &T,
    ) -> Result<String, ValidationError> {
        let bands = tasks
            .iter()
            .map(|task| self.geometry.segment_for(task).map(|segment| (task, segment)))
            .collect::<Result<Vec<_>, ValidationError>>()?;
        Ok(SvgDocument {
            renderer: self,
            bands,
            now,
        }
        .to_string())
    }
}

/// A ring whose bands are already validated, ready to write out.
struct SvgDocument<'a, T> {
    renderer: &'a RingRenderer,
    bands: Vec<(&'a RingTask, RingSegment)>,
    now: &'a T,
}

impl<T: Timelike> fmt::Display for SvgDocument<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let palette = self.renderer.theme.palette();
        let geo = &self.renderer.geometry;
        let (cx, cy) = (geo.center_x, geo.center_y);

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" viewBox="0 0 {VIEWBOX} {VIEWBOX}">"#
        )?;
        writeln!(
            f,
            r#"  <defs><linearGradient id="timeGradient" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="{HAND_COLOR}"/><stop offset="100%" stop-color="{}"/></linearGradient></defs>"#,
            EnergyLevel::Medium.color()
        )?;

        for r in [geo.radius, geo.inner_radius()] {
            writeln!(
                f,
                r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="{}" stroke-width="1"/>"#,
                palette.ring_stroke
            )?;
        }

        for hour in 0..24u32 {
            let angle = hour_to_angle(f64::from(hour));
            let outer = geo.point_at(TICK_OUTER, angle);
            let inner = geo.point_at(TICK_INNER, angle);
            let major = hour % 6 == 0;
            let (stroke, width) = if major {
                (palette.ring_accent, 2)
            } else {
                (palette.ring_stroke, 1)
            };
            writeln!(
                f,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{width}"/>"#,
                outer.x, outer.y, inner.x, inner.y
            )?;
            if major {
                let label = geo.point_at(LABEL_RADIUS, angle);
                writeln!(
                    f,
                    r#"  <text x="{}" y="{}" fill="{}" font-size="12" text-anchor="middle" dominant-baseline="middle">{hour}</text>"#,
                    label.x, label.y, palette.ring_accent
                )?;
            }
        }

        for (task, segment) in &self.bands {
            let opacity = if self.renderer.highlighted.as_deref() == Some(task.id.as_str()) {
                HIGHLIGHT_OPACITY
            } else {
                SEGMENT_OPACITY
            };
            writeln!(
                f,
                r#"  <path id="task-{}" d="{}" fill="{}" opacity="{opacity}"><title>{}</title></path>"#,
                task.id,
                segment.path(),
                task.energy.color(),
                escape_text(&task.name)
            )?;
        }

        let tip = geo.hand_tip(self.now);
        writeln!(
            f,
            r#"  <line x1="{cx}" y1="{cy}" x2="{}" y2="{}" stroke="url(#timeGradient)" stroke-width="3" stroke-linecap="round"/>"#,
            tip.x, tip.y
        )?;
        writeln!(
            f,
            r#"  <circle cx="{}" cy="{}" r="6" fill="{HAND_COLOR}"/>"#,
            tip.x, tip.y
        )?;

        writeln!(
            f,
            r#"  <circle cx="{cx}" cy="{cy}" r="{CENTER_DISC_RADIUS}" fill="{}" stroke="{}" stroke-width="2"/>"#,
            palette.card, palette.ring_accent
        )?;
        writeln!(
            f,
            r#"  <text x="{cx}" y="{}" fill="{}" font-size="16" font-weight="600" text-anchor="middle">{:02}:{:02}</text>"#,
            cy - 5.0,
            palette.foreground,
            self.now.hour(),
            self.now.minute()
        )?;
        writeln!(
            f,
            r#"  <text x="{cx}" y="{}" fill="{}" font-size="10" text-anchor="middle">NOW</text>"#,
            cy + 10.0,
            palette.ring_accent
        )?;
        writeln!(f, "</svg>")
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
