//! Hero section copy and pointer parallax.

use serde::Serialize;

/// Max travel of a parallax layer, in px, across the whole viewport.
const PARALLAX_RANGE: f64 = 20.0;

/// Parallax factor of the two floating background shapes.
pub const LAYER_FACTORS: [f64; 2] = [0.3, -0.2];

pub const HEADLINE: &str = indoc::indoc! {"
    Master Your Time.
    Design Your Life."};

pub const TAGLINE: &str =
    "A living system that optimizes your routines, habits, and energy, intelligently.";

pub const PRIMARY_CTA: &str = "Start Optimizing My Day";
pub const SECONDARY_CTA: &str = "Experience a Perfect Day";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Pointer offset from the viewport centre, scaled to +/-10 px.
///
/// A zero-sized viewport yields no offset.
pub fn pointer_offset(pointer_x: f64, pointer_y: f64, width: f64, height: f64) -> Offset {
    let axis = |p: f64, extent: f64| {
        if extent > 0.0 {
            (p / extent - 0.5) * PARALLAX_RANGE
        } else {
            0.0
        }
    };
    Offset {
        x: axis(pointer_x, width),
        y: axis(pointer_y, height),
    }
}

/// Displacement of each floating layer for a pointer offset.
pub fn layer_offsets(offset: Offset) -> Vec<Offset> {
    LAYER_FACTORS
        .iter()
        .map(|f| Offset {
            x: offset.x * f,
            y: offset.y * f,
        })
        .collect()
}
