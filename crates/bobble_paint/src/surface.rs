//! Double-buffered pixel surface
//!
//! The render loop locks the surface for a [`Canvas`] over the back buffer,
//! draws, and posts; readers only ever see the front buffer. [`Frame`] is an
//! owned snapshot for tests and export.

use thiserror::Error;

use crate::color::Color;

/// Surface errors
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface dimensions must be non-zero (got {width}x{height})")]
    EmptySurface { width: u32, height: u32 },
    #[cfg(feature = "png")]
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "png")]
    #[error("failed to encode png: {0}")]
    Png(#[from] png::EncodingError),
}

/// A CPU pixel surface with front and back RGBA8 buffers.
#[derive(Clone, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    front: Vec<u8>,
    back: Vec<u8>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::EmptySurface { width, height });
        }
        let len = (width * height * 4) as usize;
        Ok(Self {
            width,
            height,
            front: vec![0; len],
            back: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Lock the back buffer for drawing.
    pub fn lock(&mut self) -> Canvas<'_> {
        Canvas {
            data: &mut self.back,
            width: self.width,
            height: self.height,
        }
    }

    /// Publish the back buffer as the new front buffer.
    pub fn post(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Snapshot the front buffer.
    pub fn frame(&self) -> Frame {
        Frame {
            data: self.front.clone(),
            width: self.width,
            height: self.height,
        }
    }
}

/// A locked view over a surface's back buffer.
#[derive(Debug)]
pub struct Canvas<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl Canvas<'_> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the whole canvas with a color, replacing what was there.
    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba8();
        for pixel in self.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    /// Source-over blend a color into one pixel at the given coverage.
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let alpha = (color.a * coverage).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        let dst = &mut self.data[idx..idx + 4];
        let src = [color.r, color.g, color.b];
        for (channel, s) in dst.iter_mut().zip(src) {
            let d = *channel as f32 / 255.0;
            *channel = ((s * alpha + d * (1.0 - alpha)) * 255.0).round() as u8;
        }
        let d_a = dst[3] as f32 / 255.0;
        dst[3] = ((alpha + d_a * (1.0 - alpha)) * 255.0).round() as u8;
    }
}

/// An owned RGBA8 snapshot of a rendered frame.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get a pixel at (x, y) as RGBA.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Compare with another frame, returning the number of different pixels.
    pub fn diff_pixel_count(&self, other: &Frame) -> usize {
        if self.width != other.width || self.height != other.height {
            return (self.width * self.height).max(other.width * other.height) as usize;
        }
        self.data
            .chunks(4)
            .zip(other.data.chunks(4))
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Export as PNG.
    #[cfg(feature = "png")]
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), SurfaceError> {
        use std::fs::File;
        use std::io::BufWriter;

        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.data)?;

        Ok(())
    }
}
