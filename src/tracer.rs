//! Raster loop: one primary ray per pixel, top-to-bottom, left-to-right.

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::camera::Viewport;
use crate::error::RenderError;
use crate::output::ColourSink;
use crate::ray::Ray;
use crate::shader::{Colour, Shader};

/// Progress bar that counts finished scanlines on stderr.
pub fn scanline_progress(height: u32) -> ProgressBar {
    let progress = ProgressBar::new(u64::from(height));
    let style = ProgressStyle::default_bar()
        .template("{msg} {bar:40} {pos}/{len} ETA: {eta}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style);
    progress
}

/// Ray from the camera through the centre of pixel `(i, j)`.
pub fn primary_ray(viewport: &Viewport, i: u32, j: u32) -> Ray {
    let pixel_center = viewport.pixel_center(i, j);
    Ray::new(viewport.camera_origin, pixel_center - viewport.camera_origin)
}

/// Renders every pixel of `viewport` and hands the colours to `sink`.
///
/// Rows go top to bottom, columns left to right, and `sink` sees exactly one
/// call per pixel in that order. The first sink error stops the render.
pub fn trace<S: ColourSink>(
    viewport: &Viewport,
    shader: &Shader,
    mut sink: S,
    progress: &ProgressBar,
) -> Result<(), RenderError> {
    debug!(
        "Tracing {}x{} pixels from ({}, {}, {})",
        viewport.width,
        viewport.height,
        viewport.camera_origin.x(),
        viewport.camera_origin.y(),
        viewport.camera_origin.z()
    );

    for j in 0..viewport.height {
        progress.set_message(format!("Scanlines remaining: {}", viewport.height - j));

        for i in 0..viewport.width {
            let ray = primary_ray(viewport, i, j);
            sink.write_colour(shader.colour(&ray))?;
        }

        progress.inc(1);
    }

    progress.finish_with_message("Done.");
    info!("Traced {} pixels", viewport.pixel_count());
    Ok(())
}

/// Renders into memory, returning colours in raster order.
pub fn render_to_buffer(viewport: &Viewport, shader: &Shader) -> Result<Vec<Colour>, RenderError> {
    let capacity = usize::try_from(viewport.pixel_count()).unwrap_or(0);
    let mut pixels = Vec::with_capacity(capacity);
    trace(viewport, shader, &mut pixels, &ProgressBar::hidden())?;
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::tensor::vec3;

    fn two_by_two() -> Viewport {
        Viewport {
            width: 2,
            height: 2,
            top_left_pixel: vec3(-0.5, 0.5, 1.0),
            pixel_step_u: vec3(1.0, 0.0, 0.0),
            pixel_step_v: vec3(0.0, -1.0, 0.0),
            camera_origin: vec3(0.0, 0.0, 0.0),
        }
    }

    #[test]
    fn primary_rays_walk_the_grid() {
        let viewport = two_by_two();
        assert_eq!(primary_ray(&viewport, 1, 0).direction(), vec3(0.5, 0.5, 1.0));
        assert_eq!(primary_ray(&viewport, 0, 1).direction(), vec3(-0.5, -0.5, 1.0));
        assert_eq!(primary_ray(&viewport, 1, 1).origin(), vec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn one_colour_per_pixel_in_raster_order() {
        let viewport = two_by_two();
        let shader = Shader::default();
        let pixels = render_to_buffer(&viewport, &shader).unwrap();
        assert_eq!(pixels.len(), 4);

        let expected: Vec<Colour> = [(0, 0), (1, 0), (0, 1), (1, 1)]
            .into_iter()
            .map(|(i, j)| shader.colour(&primary_ray(&viewport, i, j)))
            .collect();
        assert_eq!(pixels, expected);
    }

    struct FailingSink {
        accepted: usize,
    }

    impl ColourSink for FailingSink {
        fn write_colour(&mut self, _colour: Colour) -> io::Result<()> {
            if self.accepted == 2 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.accepted += 1;
            Ok(())
        }
    }

    #[test]
    fn sink_failure_aborts_the_render() {
        let mut sink = FailingSink { accepted: 0 };
        let result = trace(&two_by_two(), &Shader::default(), &mut sink, &ProgressBar::hidden());
        assert!(matches!(result, Err(RenderError::Io(_))));
        assert_eq!(sink.accepted, 2);
    }

    #[test]
    fn progress_counts_scanlines() {
        let progress = ProgressBar::hidden();
        let mut pixels: Vec<Colour> = Vec::new();
        trace(&two_by_two(), &Shader::default(), &mut pixels, &progress).unwrap();
        assert_eq!(progress.position(), 2);
        assert!(progress.is_finished());
    }
}
