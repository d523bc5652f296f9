//! Image textures for surface color.
//!
//! Textures are stored as linear RGB with rows ordered bottom to top, so that
//! `v = 0` is the bottom edge of the image and `v = 1` the top.

use std::path::Path;

use thiserror::Error;

use crate::color::{Color, BLACK};

/// Errors that can occur during texture loading.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Texture {path} has no pixels")]
    EmptyImage { path: String },

    #[error("Expected {expected} pixels for a {width}x{height} texture, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A texture with RGB pixel data.
#[derive(Clone, Debug)]
pub struct Texture {
    width: u32,
    height: u32,

    /// Row-major, bottom row first
    pixels: Vec<Color>,

    /// Source file path (for debugging)
    path: String,
}

impl Texture {
    /// Create a texture from pixel data in row-major order, bottom row first.
    pub fn from_pixels(
        width: u32,
        height: u32,
        pixels: Vec<Color>,
        path: impl Into<String>,
    ) -> TextureResult<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(TextureError::SizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
            path: path.into(),
        })
    }

    /// Create a solid color texture (1x1).
    pub fn solid_color(color: Color) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![color],
            path: "<solid>".to_string(),
        }
    }

    /// Create a checkerboard with `cells` squares along each side.
    pub fn checkerboard(size: u32, cells: u32, a: Color, b: Color) -> Self {
        let cell = (size / cells.max(1)).max(1);
        let pixels = (0..size)
            .flat_map(|y| (0..size).map(move |x| if (x / cell + y / cell) % 2 == 0 { a } else { b }))
            .collect();

        Self {
            width: size,
            height: size,
            pixels,
            path: "<checkerboard>".to_string(),
        }
    }

    /// Load a texture from an image file on disk.
    pub fn load(path: impl AsRef<Path>) -> TextureResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let bytes = std::fs::read(path).map_err(|source| TextureError::Io {
            path: display.clone(),
            source,
        })?;
        let rgb = image::load_from_memory(&bytes)?.to_rgb8();
        let (width, height) = rgb.dimensions();

        if width == 0 || height == 0 {
            return Err(TextureError::EmptyImage { path: display });
        }

        // Image rows run top to bottom; store them bottom-up.
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in (0..height).rev() {
            for x in 0..width {
                let p = rgb.get_pixel(x, y);
                pixels.push(Color::new(
                    p[0] as f64 / 255.0,
                    p[1] as f64 / 255.0,
                    p[2] as f64 / 255.0,
                ));
            }
        }

        log::debug!("Loaded texture: {} ({}x{})", display, width, height);

        Self::from_pixels(width, height, pixels, display)
    }

    /// Texture width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Source path, or a placeholder for generated textures.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// True if the texture has at least one pixel.
    pub fn is_valid(&self) -> bool {
        self.width != 0 && self.height != 0
    }

    /// Sample the texture at UV coordinates (nearest pixel).
    ///
    /// UV coordinates are clamped to [0, 1], with (0, 0) at bottom-left.
    pub fn pixel_uv(&self, u: f64, v: f64) -> Color {
        if !self.is_valid() {
            return BLACK;
        }

        let x = (u.clamp(0.0, 1.0) * (self.width - 1) as f64) as u32;
        let y = (v.clamp(0.0, 1.0) * (self.height - 1) as f64) as u32;
        self.pixel(x, y)
    }

    /// Get pixel at integer coordinates, y counted from the bottom row.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels.get(idx).copied().unwrap_or(BLACK)
    }
}
