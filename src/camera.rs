//! Pinhole camera and viewport geometry.
//!
//! The camera sits at `center` looking down `+z`. The viewport is a
//! `viewport_width x viewport_height` rectangle at distance `focal_length`,
//! split into one cell per pixel; rays go through cell centres.

use log::debug;

use crate::error::RenderError;
use crate::tensor::{vec3, Point3, Vec3};

/// Default image width in pixels.
pub const IMAGE_WIDTH: u32 = 1920;

/// Default aspect ratio (width over height).
pub const ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Default distance from the camera to the viewport.
pub const FOCAL_LENGTH: f64 = 1.0;

/// Default viewport width in world units.
pub const VIEWPORT_WIDTH: f64 = 16.0;

/// User-facing camera parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Ratio of image width over image height
    pub aspect_ratio: f64,
    /// Distance from the camera center to the viewport
    pub focal_length: f64,
    /// Width of the viewport in world units
    pub viewport_width: f64,
    /// Camera position in world space
    pub center: Point3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            image_width: IMAGE_WIDTH,
            aspect_ratio: ASPECT_RATIO,
            focal_length: FOCAL_LENGTH,
            viewport_width: VIEWPORT_WIDTH,
            center: vec3(0.0, 0.0, 0.0),
        }
    }
}

/// Everything the tracer needs to generate one ray per pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// World position of the centre of pixel (0, 0).
    pub top_left_pixel: Point3,
    /// Offset from one pixel to the next one to the right.
    pub pixel_step_u: Vec3,
    /// Offset from one pixel to the next one down.
    pub pixel_step_v: Vec3,
    /// Where every ray starts.
    pub camera_origin: Point3,
}

impl Viewport {
    /// Total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// World position of the centre of pixel `(i, j)`, column `i`, row `j`.
    pub fn pixel_center(&self, i: u32, j: u32) -> Point3 {
        self.top_left_pixel + f64::from(i) * self.pixel_step_u + f64::from(j) * self.pixel_step_v
    }
}

/// Camera with validated settings and a derived image height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    settings: CameraSettings,
    image_height: u32,
}

impl Camera {
    /// Validates `settings` and derives the image height,
    /// `max(1, floor(width / aspect_ratio))`.
    pub fn new(settings: CameraSettings) -> Result<Self, RenderError> {
        if settings.image_width == 0 {
            return Err(RenderError::InvalidCamera(
                "image width must be at least 1 pixel".to_string(),
            ));
        }
        for (name, value) in [
            ("aspect ratio", settings.aspect_ratio),
            ("focal length", settings.focal_length),
            ("viewport width", settings.viewport_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(RenderError::InvalidCamera(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        let image_height = ((f64::from(settings.image_width) / settings.aspect_ratio) as u32).max(1);

        Ok(Self {
            settings,
            image_height,
        })
    }

    /// The settings this camera was built from.
    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// Image width in pixels.
    pub fn image_width(&self) -> u32 {
        self.settings.image_width
    }

    /// Image height in pixels.
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Lays the viewport out in front of the camera.
    ///
    /// The viewport height follows the realised pixel ratio rather than the
    /// requested aspect ratio, so pixels stay square after height rounding.
    pub fn viewport(&self) -> Viewport {
        let width = self.settings.image_width;
        let height = self.image_height;
        let center = self.settings.center;

        let viewport_width = self.settings.viewport_width;
        let viewport_height = viewport_width / (f64::from(width) / f64::from(height));

        // Across the top edge, and down the left edge
        let viewport_u = vec3(viewport_width, 0.0, 0.0);
        let viewport_v = vec3(0.0, -viewport_height, 0.0);

        let pixel_step_u = viewport_u / f64::from(width);
        let pixel_step_v = viewport_v / f64::from(height);

        let viewport_upper_left = center + vec3(0.0, 0.0, self.settings.focal_length)
            - viewport_u / 2.0
            - viewport_v / 2.0;
        let top_left_pixel = viewport_upper_left + 0.5 * (pixel_step_u + pixel_step_v);

        debug!(
            "Viewport {:.3}x{:.3} at focal length {}, top-left pixel ({:.4}, {:.4}, {:.4})",
            viewport_width,
            viewport_height,
            self.settings.focal_length,
            top_left_pixel.x(),
            top_left_pixel.y(),
            top_left_pixel.z()
        );

        Viewport {
            width,
            height,
            top_left_pixel,
            pixel_step_u,
            pixel_step_v,
            camera_origin: center,
        }
    }
}
