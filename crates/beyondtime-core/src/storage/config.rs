//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Initial theme and the name used in the dashboard greeting
//! - Time ring dimensions
//! - Particle field size and seed
//!
//! Configuration is stored at `~/.config/beyondtime/config.toml`. It holds
//! defaults only; session state (slots, habits, theme toggles) is never
//! written back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, CoreError, Result};
use crate::particles::{DEFAULT_PARTICLE_COUNT, MAX_PARTICLE_COUNT};
use crate::ring::RingGeometry;
use crate::theme::Theme;

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    #[serde(default = "default_user_name")]
    pub user_name: String,
}

/// Time ring dimensions in SVG user units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingConfig {
    #[serde(default = "default_center")]
    pub center_x: f64,
    #[serde(default = "default_center")]
    pub center_y: f64,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_thickness")]
    pub thickness: f64,
}

/// Background particle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticlesConfig {
    #[serde(default = "default_particle_count")]
    pub count: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/beyondtime/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub ring: RingConfig,
    #[serde(default)]
    pub particles: ParticlesConfig,
}

// Default functions
fn default_true() -> bool {
    true
}
fn default_user_name() -> String {
    "Nirmal".into()
}
fn default_center() -> f64 {
    200.0
}
fn default_radius() -> f64 {
    150.0
}
fn default_thickness() -> f64 {
    30.0
}
fn default_particle_count() -> usize {
    DEFAULT_PARTICLE_COUNT
}
fn default_seed() -> u64 {
    42
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: default_true(),
            user_name: default_user_name(),
        }
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            center_x: default_center(),
            center_y: default_center(),
            radius: default_radius(),
            thickness: default_thickness(),
        }
    }
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            count: default_particle_count(),
            seed: default_seed(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;
            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => {
                    if let Ok(n) = value.parse::<u64>() {
                        serde_json::Value::Number(n.into())
                    } else if let Ok(n) = value.parse::<f64>() {
                        serde_json::Number::from_f64(n)
                            .map(serde_json::Value::Number)
                            .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                    } else {
                        return Err(invalid(format!("cannot parse '{value}' as number")));
                    }
                }
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                }
                _ => serde_json::Value::String(value.into()),
            };
            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// Default config file location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file is missing.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                CoreError::Config(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, in memory only.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// into the key's type, or the result fails [`validate`](Self::validate).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Check every value that has a range beyond its type.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for an undrawable ring or a particle
    /// count above [`MAX_PARTICLE_COUNT`].
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.geometry()?;
        if self.particles.count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::InvalidValue {
                key: "particles.count".to_string(),
                message: format!("must be at most {MAX_PARTICLE_COUNT}"),
            });
        }
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.ui.dark_mode)
    }

    /// Ring dimensions, checked for a drawable band.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] unless `0 < thickness < radius`.
    pub fn geometry(&self) -> std::result::Result<RingGeometry, ConfigError> {
        let ring = &self.ring;
        if !(ring.thickness > 0.0 && ring.thickness < ring.radius) {
            return Err(ConfigError::InvalidValue {
                key: "ring.thickness".to_string(),
                message: format!(
                    "must be positive and smaller than ring.radius ({})",
                    ring.radius
                ),
            });
        }
        Ok(RingGeometry {
            center_x: ring.center_x,
            center_y: ring.center_y,
            radius: ring.radius,
            thickness: ring.thickness,
        })
    }
}
