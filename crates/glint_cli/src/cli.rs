use clap::{Parser, ValueEnum};
use glint_renderer::RenderSettings;
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in demo scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Field of small random spheres around three large ones
    Random,
    /// A handful of material samples and a mirrored pyramid
    Showcase,
}

#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "Progressive CPU path tracer")]
pub struct Args {
    /// JSON render settings; command line flags override its values
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Demo scene to render
    #[arg(long, value_enum, default_value = "random")]
    pub scene: SceneKind,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of full-image passes to accumulate
    #[arg(long, short = 'f')]
    pub frames: Option<i32>,

    /// Bounce budget per path
    #[arg(long, short = 'b')]
    pub bounces: Option<i32>,

    /// Vertical field of view in degrees (defaults to the scene's framing)
    #[arg(long)]
    pub vfov: Option<f32>,

    /// Seed for scene generation and sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shade surfaces by their normal instead of path tracing
    #[arg(long)]
    pub normals: bool,

    /// Trace through pixel centers only
    #[arg(long)]
    pub no_aa: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Settings from the optional JSON file with command line overrides applied.
    pub fn render_settings(&self) -> anyhow::Result<RenderSettings> {
        let mut settings = match &self.settings {
            Some(path) => RenderSettings::load(path)?,
            None => RenderSettings::default(),
        };

        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(frames) = self.frames {
            settings.max_frames = frames;
        }
        if let Some(bounces) = self.bounces {
            settings.max_bounces = bounces;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(vfov) = self.vfov {
            settings.vfov = vfov;
        }
        settings.show_normals |= self.normals;
        settings.antialiasing &= !self.no_aa;

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "glint", "--width", "64", "--height", "32", "--frames", "4", "--no-aa", "--normals",
        ]);
        let settings = args.render_settings().unwrap();

        assert_eq!((settings.width, settings.height), (64, 32));
        assert_eq!(settings.max_frames, 4);
        assert_eq!(settings.max_bounces, RenderSettings::default().max_bounces);
        assert!(!settings.antialiasing);
        assert!(settings.show_normals);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let args = Args::parse_from(["glint", "--width", "0"]);
        assert!(args.render_settings().is_err());
    }

    #[test]
    fn test_scene_kind_parses() {
        let args = Args::parse_from(["glint", "--scene", "showcase", "--vfov", "45"]);
        assert_eq!(args.scene, SceneKind::Showcase);
        assert_eq!(args.render_settings().unwrap().vfov, 45.0);
    }
}
