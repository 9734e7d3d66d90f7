//! Time ring commands: segment listing, single-span geometry, SVG export.

use std::path::PathBuf;

use clap::Subcommand;
use serde::Serialize;
use tracing::info;

use beyondtime_core::ring::{current_hour, hour_to_angle, legend, RingRenderer, RingSegment};
use beyondtime_core::task::ring_samples;
use beyondtime_core::{Config, Theme};

use super::{parse_time, print_json, CmdResult};

#[derive(Subcommand)]
pub enum RingAction {
    /// List the sample day with computed angles
    Segments {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute the band for one span
    Segment {
        /// Start hour, 0 <= start < 24 (fractional allowed)
        start: f64,
        /// Duration in hours
        duration: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the ring as SVG
    Svg {
        /// Time shown by the hand, HH:MM (default: now)
        #[arg(long)]
        at: Option<String>,
        /// Override the configured theme (dark or light)
        #[arg(long)]
        theme: Option<Theme>,
        /// Task id to highlight
        #[arg(long)]
        highlight: Option<String>,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Show the energy colour legend
    Legend,
}

#[derive(Serialize)]
struct SegmentRow {
    id: String,
    name: String,
    energy: String,
    start_hour: f64,
    end_hour: f64,
    #[serde(flatten)]
    segment: RingSegment,
    path: String,
}

pub fn run(action: RingAction) -> CmdResult {
    let config = Config::load_or_default();
    let geometry = config.geometry()?;

    match action {
        RingAction::Segments { json } => {
            let mut rows = Vec::new();
            for task in ring_samples() {
                let segment = geometry.segment_for(&task)?;
                rows.push(SegmentRow {
                    path: segment.path(),
                    id: task.id.clone(),
                    name: task.name.clone(),
                    energy: task.energy.to_string(),
                    start_hour: task.start_hour,
                    end_hour: task.end_hour(),
                    segment,
                });
            }
            if json {
                return print_json(&rows);
            }
            for row in &rows {
                println!(
                    "{:<20} {:>5.2}h-{:>5.2}h  {:>7.2}° -> {:>7.2}°  {}{}",
                    row.name,
                    row.start_hour,
                    row.end_hour,
                    row.segment.start_angle,
                    row.segment.end_angle,
                    row.energy,
                    if row.segment.large_arc { "  (major arc)" } else { "" }
                );
            }
        }
        RingAction::Segment {
            start,
            duration,
            json,
        } => {
            let segment = geometry.segment(start, duration)?;
            if json {
                return print_json(&segment);
            }
            println!("start angle: {:.2}°", segment.start_angle);
            println!("end angle:   {:.2}°", segment.end_angle);
            println!("arc:         {}", if segment.large_arc { "major" } else { "minor" });
            println!("path:        {}", segment.path());
        }
        RingAction::Svg {
            at,
            theme,
            highlight,
            out,
        } => {
            let now = parse_time(at.as_deref())?;
            let mut renderer = RingRenderer::new(geometry, theme.unwrap_or_else(|| config.theme()));
            if let Some(id) = highlight {
                renderer = renderer.with_highlight(id);
            }
            let svg = renderer.render_svg(&ring_samples(), &now)?;
            info!(
                hand_angle = hour_to_angle(current_hour(&now)),
                "ring rendered"
            );
            match out {
                Some(path) => {
                    std::fs::write(&path, svg)?;
                    println!("wrote {}", path.display());
                }
                None => print!("{svg}"),
            }
        }
        RingAction::Legend => {
            for entry in legend() {
                println!("{}  {}", entry.color, entry.label);
            }
        }
    }
    Ok(())
}
