//! In-memory color buffer the ray tracer renders into.

use std::path::Path;

use prism_core::color::{self, Color, BLACK};
use thiserror::Error;

/// Errors that can occur when writing a framebuffer to disk.
#[derive(Error, Debug)]
pub enum FrameBufferError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Framebuffer is empty")]
    Empty,
}

/// A width x height grid of colors. Row 0 is the bottom of the image.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resize, discarding the current contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![BLACK; width as usize * height as usize];
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Set the pixel at (x, y). Out-of-range coordinates are ignored.
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Get the pixel at (x, y), or black outside the buffer.
    pub fn color(&self, x: u32, y: u32) -> Color {
        self.index(x, y).map_or(BLACK, |idx| self.pixels[idx])
    }

    /// All pixels, row-major, bottom row first.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Convert to 8-bit RGB bytes, top row first (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                bytes.extend_from_slice(&color::to_rgb8(self.color(x, y)));
            }
        }
        bytes
    }

    /// Write the buffer to a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), FrameBufferError> {
        let image = image::RgbImage::from_raw(self.width, self.height, self.to_rgb8())
            .filter(|_| self.width > 0 && self.height > 0)
            .ok_or(FrameBufferError::Empty)?;
        image.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::color::{RED, WHITE};

    #[test]
    fn test_set_and_get() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.set_color(1, 2, RED);

        assert_eq!(fb.color(1, 2), RED);
        assert_eq!(fb.color(0, 0), BLACK);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_color(5, 5, RED);

        assert_eq!(fb.color(5, 5), BLACK);
        assert!(fb.pixels().iter().all(|&c| c == BLACK));
    }

    #[test]
    fn test_to_rgb8_flips_rows() {
        let mut fb = FrameBuffer::new(1, 2);
        fb.set_color(0, 0, WHITE); // bottom
        fb.set_color(0, 1, RED); // top

        assert_eq!(fb.to_rgb8(), vec![255, 0, 0, 255, 255, 255]);
    }

    #[test]
    fn test_resize_and_clear() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(3, 1);
        assert_eq!(fb.pixels().len(), 3);

        fb.clear(WHITE);
        assert!(fb.pixels().iter().all(|&c| c == WHITE));
    }

    #[test]
    fn test_save_empty_fails() {
        let fb = FrameBuffer::new(0, 0);
        let err = fb.save_png(std::env::temp_dir().join("prism_empty.png")).unwrap_err();
        assert!(matches!(err, FrameBufferError::Empty));
    }
}
