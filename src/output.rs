//! # Output Module
//!
//! Turns rendered colours into a plain-text PPM (`P3`) image:
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! r g b            one line per pixel, row-major, top-to-bottom
//! ```
//!
//! Each channel is `floor(255.999 * component)`, with no further clamping, so a
//! component of exactly `1.0` maps to `255`.
//!
//! The tracer never writes text itself. It hands every colour to a
//! [`ColourSink`]; [`PpmWriter`] streams them to any [`Write`], and a plain
//! `Vec<Colour>` collects them in memory.

use std::io::{self, Write};

use log::{debug, warn};

use crate::shader::Colour;

/// Largest channel value written in the header.
pub const MAX_CHANNEL: u32 = 255;

/// Consumer of per-pixel colours in raster order.
pub trait ColourSink {
    /// Accept the colour of the next pixel.
    fn write_colour(&mut self, colour: Colour) -> io::Result<()>;
}

impl ColourSink for Vec<Colour> {
    fn write_colour(&mut self, colour: Colour) -> io::Result<()> {
        self.push(colour);
        Ok(())
    }
}

impl<S: ColourSink + ?Sized> ColourSink for &mut S {
    fn write_colour(&mut self, colour: Colour) -> io::Result<()> {
        (**self).write_colour(colour)
    }
}

/// Converts a colour to its three integer channel intensities.
///
/// Truncates `255.999 * component` toward zero; values outside `[0, 1]` are
/// not clamped beyond what the cast does.
pub fn channel_intensities(colour: &Colour) -> [i32; 3] {
    [colour.x(), colour.y(), colour.z()].map(|component| (255.999 * component) as i32)
}

/// Writes one `r g b` line for `colour`.
pub fn write_colour<W: Write + ?Sized>(out: &mut W, colour: &Colour) -> io::Result<()> {
    let [red, green, blue] = channel_intensities(colour);
    writeln!(out, "{red} {green} {blue}")
}

/// Streams colours to `W` as a `P3` image.
///
/// The header is written on construction. [`finish`](Self::finish) checks that
/// exactly `width * height` pixels arrived and flushes the writer.
#[derive(Debug)]
pub struct PpmWriter<W: Write> {
    out: W,
    width: u32,
    height: u32,
    written: u64,
}

impl<W: Write> PpmWriter<W> {
    /// Writes the `P3` header for a `width x height` image to `out`.
    pub fn new(mut out: W, width: u32, height: u32) -> io::Result<Self> {
        writeln!(out, "P3")?;
        writeln!(out, "{width} {height}")?;
        writeln!(out, "{MAX_CHANNEL}")?;
        debug!("PPM header written for {}x{} image", width, height);

        Ok(Self {
            out,
            width,
            height,
            written: 0,
        })
    }

    /// Number of pixels written so far.
    pub fn pixels_written(&self) -> u64 {
        self.written
    }

    /// Number of pixels the header promises.
    pub fn expected_pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Flushes and returns the underlying writer.
    ///
    /// Fails with [`io::ErrorKind::InvalidData`] if the pixel count does not
    /// match the header.
    pub fn finish(mut self) -> io::Result<W> {
        let expected = self.expected_pixels();
        if self.written != expected {
            warn!(
                "PPM image incomplete: {} of {} pixels written",
                self.written, expected
            );
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "expected {expected} pixels for a {}x{} image, got {}",
                    self.width, self.height, self.written
                ),
            ));
        }

        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> ColourSink for PpmWriter<W> {
    fn write_colour(&mut self, colour: Colour) -> io::Result<()> {
        if self.written >= self.expected_pixels() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "pixel {} exceeds the {}x{} image",
                    self.written + 1,
                    self.width,
                    self.height
                ),
            ));
        }

        write_colour(&mut self.out, &colour)?;
        self.written += 1;
        Ok(())
    }
}

/// Writes a whole buffered image, header included.
pub fn write_ppm<W: Write>(out: W, width: u32, height: u32, pixels: &[Colour]) -> io::Result<W> {
    let mut writer = PpmWriter::new(out, width, height)?;
    for &colour in pixels {
        writer.write_colour(colour)?;
    }
    writer.finish()
}
