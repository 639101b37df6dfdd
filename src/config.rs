use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::camera::TickAltitude;
use crate::geom::{DEFAULT_PRESERVE_END, DEFAULT_PRESERVE_START, DEFAULT_SMOOTHING};

/// Largest smoothing half-width or preserved-point count a config may ask for.
const MAX_WINDOW: usize = 10_000;

/// Parameters for route smoothing and camera path derivation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Half-width of the moving-average window.
    pub smoothing: usize,
    pub preserve_start: usize,
    pub preserve_end: usize,
    /// Number of path vertices the camera trails behind the travelling point.
    pub camera_target_distance: usize,
    /// Extra ground distance (m) between camera and target on top of the path length.
    pub camera_lead_m: f64,
    /// Take one terrain elevation sample every this many vertices.
    pub elevation_step: usize,
    /// Upper bound on per-flowline fetches before thinning kicks in.
    pub max_flowline_samples: usize,
    pub altitude: TickAltitude,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            preserve_start: DEFAULT_PRESERVE_START,
            preserve_end: DEFAULT_PRESERVE_END,
            camera_target_distance: 10,
            camera_lead_m: 3_000.0,
            elevation_step: 10,
            max_flowline_samples: 250,
            altitude: TickAltitude::default(),
        }
    }
}

impl PathConfig {
    /// Read a JSON config file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("[PathConfig::from_json_file] Failed to read {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("[PathConfig::from_json_file] Invalid config in {}", path.display()))
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.smoothing > MAX_WINDOW { bail!("[PathConfig::validate] smoothing must be at most {MAX_WINDOW}, got {}", self.smoothing) }
        if self.preserve_start > MAX_WINDOW || self.preserve_end > MAX_WINDOW {
            bail!("[PathConfig::validate] preserve_start and preserve_end must be at most {MAX_WINDOW}")
        }
        if self.camera_target_distance > MAX_WINDOW {
            bail!("[PathConfig::validate] camera_target_distance must be at most {MAX_WINDOW}")
        }
        if self.elevation_step == 0 { bail!("[PathConfig::validate] elevation_step must be positive") }
        if self.max_flowline_samples == 0 { bail!("[PathConfig::validate] max_flowline_samples must be positive") }
        if !self.camera_lead_m.is_finite() { bail!("[PathConfig::validate] camera_lead_m must be finite") }
        Ok(())
    }
}
