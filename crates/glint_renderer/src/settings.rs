//! Render settings consumed by the estimator and the accumulation driver.
//!
//! Settings are plain data owned by the host. They can be built in code or
//! loaded from JSON; missing fields fall back to the defaults below.

use crate::error::{RenderError, RenderResult};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How Lambertian scattering draws its random offset from the normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffuseMethod {
    /// Rejection-sampled point inside the unit sphere.
    UnitSphere,
    /// Point on the unit sphere surface (true Lambertian).
    UnitVector,
    /// Point inside the unit ball, in the hemisphere around the normal.
    #[default]
    Hemisphere,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Accumulation stops once this many full frames have been rendered
    pub max_frames: i32,
    /// Scatter events allowed after the camera ray; the estimator recurses
    /// until the remaining budget drops below zero
    pub max_bounces: i32,
    /// Lower bound on hit distance, keeps scattered rays off their own surface
    pub epsilon: f32,
    /// Background color straight up
    pub sky_color: Color,
    /// Background color straight down
    pub ground_color: Color,
    /// Return remapped normals instead of shading
    pub show_normals: bool,
    /// Jitter camera samples inside each pixel
    pub antialiasing: bool,
    /// Apply gamma 2 when converting to 8-bit output
    pub gamma_correction: bool,
    pub diffuse_method: DiffuseMethod,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Base seed for per-pixel random streams
    pub seed: u64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            max_frames: 1000,
            max_bounces: 3,
            epsilon: 1e-3,
            sky_color: Color::new(0.5, 0.7, 1.0),
            ground_color: Color::new(0.5, 0.5, 0.5),
            show_normals: false,
            antialiasing: true,
            gamma_correction: true,
            diffuse_method: DiffuseMethod::Hemisphere,
            vfov: 90.0,
            seed: 0,
        }
    }
}

impl RenderSettings {
    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Check the values the driver and camera rely on.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidSettings(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(RenderError::InvalidSettings(format!(
                "vertical field of view must be in (0, 180) degrees, got {}",
                self.vfov
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Parse settings from a JSON document and validate them.
    pub fn from_json_str(json: &str) -> RenderResult<Self> {
        let settings: RenderSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded render settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> RenderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
