use clap::{Parser, ValueEnum};
use log::LevelFilter;

use pinhole::camera::{CameraSettings, FOCAL_LENGTH, IMAGE_WIDTH, VIEWPORT_WIDTH};
use pinhole::shader::{SPHERE_CENTER, SPHERE_RADIUS};
use pinhole::sphere::Sphere;
use pinhole::tensor::point;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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

/// Accepts `W:H` (e.g. `16:9`) or a plain decimal ratio.
fn parse_aspect_ratio(s: &str) -> Result<f64, String> {
    let ratio = match s.split_once(':') {
        Some((width, height)) => {
            let width: f64 = width
                .trim()
                .parse()
                .map_err(|e| format!("invalid width in aspect ratio '{s}': {e}"))?;
            let height: f64 = height
                .trim()
                .parse()
                .map_err(|e| format!("invalid height in aspect ratio '{s}': {e}"))?;
            width / height
        }
        None => s
            .trim()
            .parse()
            .map_err(|e| format!("invalid aspect ratio '{s}': {e}"))?,
    };

    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(format!("aspect ratio must be positive, got '{s}'"))
    }
}

/// Accepts a finite radius greater than zero.
fn parse_sphere_radius(s: &str) -> Result<f64, String> {
    let radius: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid sphere radius '{s}': {e}"))?;

    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(format!("sphere radius must be positive, got '{s}'"))
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "pinhole")]
#[command(about = "Renders a single sphere against a sky gradient as a plain-text PPM image")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = IMAGE_WIDTH)]
    pub width: u32,

    /// Aspect ratio as W:H or a decimal
    #[arg(long, default_value = "16:9", value_parser = parse_aspect_ratio)]
    pub aspect_ratio: f64,

    /// Distance from the camera to the viewport
    #[arg(long, default_value_t = FOCAL_LENGTH)]
    pub focal_length: f64,

    /// Viewport width in world units
    #[arg(long, default_value_t = VIEWPORT_WIDTH)]
    pub viewport_width: f64,

    /// Radius of the sphere centred at (0, 0, 1)
    #[arg(long, default_value_t = SPHERE_RADIUS, value_parser = parse_sphere_radius)]
    pub sphere_radius: f64,

    /// Output file path, `-` for stdout
    #[arg(short, long, default_value = "-")]
    pub output: String,

    /// Set the logging level (defaults to "info")
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,

    /// Hide the scanline progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Camera settings from the command line.
    pub fn camera_settings(&self) -> CameraSettings {
        CameraSettings {
            image_width: self.width,
            aspect_ratio: self.aspect_ratio,
            focal_length: self.focal_length,
            viewport_width: self.viewport_width,
            ..CameraSettings::default()
        }
    }

    /// The scene sphere, resized by `--sphere-radius`.
    pub fn sphere(&self) -> Sphere {
        Sphere::new(point(SPHERE_CENTER), self.sphere_radius)
    }
}
