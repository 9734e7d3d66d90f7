//! Dark/light appearance.
//!
//! The theme is a plain value handed to whatever renders; toggling returns a
//! new value instead of flipping shared state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

/// Colours a renderer needs for a given theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    /// Guide circles and minor ticks
    pub ring_stroke: &'static str,
    /// Major ticks and hour labels
    pub ring_accent: &'static str,
    /// Centre disc of the ring
    pub card: &'static str,
}

const DARK: Palette = Palette {
    background: "#000000",
    foreground: "#ffffff",
    ring_stroke: "rgba(192, 132, 252, 0.1)",
    ring_accent: "rgba(192, 132, 252, 0.6)",
    card: "#0a0a0a",
};

const LIGHT: Palette = Palette {
    background: "#f9fafb",
    foreground: "#111827",
    ring_stroke: "rgba(168, 85, 247, 0.1)",
    ring_accent: "rgba(168, 85, 247, 0.6)",
    card: "#ffffff",
};

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    /// Label of the control that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light mode",
            Theme::Light => "Switch to dark mode",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ValidationError::InvalidValue {
                field: "theme".to_string(),
                message: format!("expected dark or light, got '{other}'"),
            }),
        }
    }
}
