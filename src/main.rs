use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use log::info;

use pinhole::camera::{Camera, Viewport};
use pinhole::output::PpmWriter;
use pinhole::shader::Shader;
use pinhole::tracer::{scanline_progress, trace};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Streams the whole image as PPM into `out`.
fn render<W: Write>(out: W, viewport: &Viewport, shader: &Shader, progress: &ProgressBar) -> Result<()> {
    let mut writer = PpmWriter::new(BufWriter::new(out), viewport.width, viewport.height)
        .context("failed to write PPM header")?;
    trace(viewport, shader, &mut writer, progress)?;
    writer.finish().context("failed to finish PPM image")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("pinhole - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let camera = Camera::new(args.camera_settings())?;
    let shader = Shader::new(args.sphere());
    let viewport = camera.viewport();

    info!("Image resolution: {}x{}", viewport.width, viewport.height);
    info!(
        "Sphere at ({}, {}, {}) with radius {}",
        shader.sphere().center.x(),
        shader.sphere().center.y(),
        shader.sphere().center.z(),
        shader.sphere().radius
    );

    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        scanline_progress(viewport.height)
    };

    let generation_start = Instant::now();
    if args.output == "-" {
        render(io::stdout().lock(), &viewport, &shader, &progress)?;
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("failed to create output file '{}'", args.output))?;
        render(file, &viewport, &shader, &progress)?;
        info!("Image saved as {}", args.output);
    }
    info!("Image generated in {:.2?}", generation_start.elapsed());

    Ok(())
}
