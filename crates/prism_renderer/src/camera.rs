//! Cameras for ray generation.
//!
//! Pixel `(0, 0)` is the bottom-left corner of the image. Pixel coordinates
//! are fractional so that anti-aliasing can sample inside a pixel; the ray for
//! `(x, y)` passes through the point `(x + 0.5, y + 0.5)` of pixel space.

use prism_math::{DVec3, Frame, Ray};
use thiserror::Error;

/// Errors raised while configuring a camera.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("Cannot build a view basis from position {position:?}, focus {focus:?} and up {up:?}")]
    DegenerateView {
        position: [f64; 3],
        focus: [f64; 3],
        up: [f64; 3],
    },

    #[error("Viewport must be at least 1x1, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },

    #[error("Field of view must be in (0, pi) radians, got {0}")]
    InvalidFov(f64),

    #[error("Pixels per world unit must be positive, got {0}")]
    InvalidScale(f64),
}

/// Common interface of the cameras used by the ray tracer.
pub trait RaytracingCamera: Send + Sync {
    /// Current position and orientation of the camera.
    fn frame(&self) -> Frame;

    /// World-space ray through the (fractional) pixel coordinate `(x, y)`.
    fn get_ray(&self, x: f64, y: f64) -> Ray;

    /// Image width in pixels.
    fn width(&self) -> u32;

    /// Image height in pixels.
    fn height(&self) -> u32;
}

fn view_frame(position: DVec3, focus: DVec3, up: DVec3) -> Result<Frame, CameraError> {
    Frame::look_at(position, focus, up).ok_or(CameraError::DegenerateView {
        position: position.to_array(),
        focus: focus.to_array(),
        up: up.to_array(),
    })
}

fn check_viewport(width: u32, height: u32) -> Result<(), CameraError> {
    if width == 0 || height == 0 {
        return Err(CameraError::EmptyViewport { width, height });
    }
    Ok(())
}

/// A pinhole camera with a vertical field of view.
#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    frame: Frame,
    fov_y: f64,
    distance_to_plane: f64,
    width: u32,
    height: u32,
}

impl PerspectiveCamera {
    /// Create a camera at `position` looking at `focus`.
    ///
    /// `fov_y` is the full vertical field of view in radians.
    pub fn new(
        position: DVec3,
        focus: DVec3,
        up: DVec3,
        fov_y: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, CameraError> {
        if !(fov_y > 0.0 && fov_y < std::f64::consts::PI) {
            return Err(CameraError::InvalidFov(fov_y));
        }
        check_viewport(width, height)?;

        Ok(Self {
            frame: view_frame(position, focus, up)?,
            fov_y,
            distance_to_plane: 1.0 / (fov_y / 2.0).tan(),
            width,
            height,
        })
    }

    pub fn fov_y(&self) -> f64 {
        self.fov_y
    }

    /// Coordinates of pixel `(x, y)` on the image plane, which spans
    /// [-aspect, aspect] horizontally and [-1, 1] vertically.
    fn projection_plane_coords(&self, x: f64, y: f64) -> (f64, f64) {
        let aspect = self.width as f64 / self.height as f64;
        let (left, right) = (-aspect, aspect);
        let (bottom, top) = (-1.0, 1.0);

        let u = left + (right - left) * (x + 0.5) / self.width as f64;
        let v = bottom + (top - bottom) * (y + 0.5) / self.height as f64;
        (u, v)
    }
}

impl RaytracingCamera for PerspectiveCamera {
    fn frame(&self) -> Frame {
        self.frame
    }

    fn get_ray(&self, x: f64, y: f64) -> Ray {
        let (u, v) = self.projection_plane_coords(x, y);
        let direction = -self.distance_to_plane * self.frame.w + u * self.frame.u + v * self.frame.v;
        Ray::new(self.frame.origin, direction)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

/// A parallel-projection camera; every ray points along the viewing axis.
#[derive(Debug, Clone, Copy)]
pub struct OrthographicCamera {
    frame: Frame,
    pixels_per_unit: f64,
    width: u32,
    height: u32,
}

impl OrthographicCamera {
    pub fn new(
        position: DVec3,
        focus: DVec3,
        up: DVec3,
        pixels_per_unit: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, CameraError> {
        if !(pixels_per_unit > 0.0) {
            return Err(CameraError::InvalidScale(pixels_per_unit));
        }
        check_viewport(width, height)?;

        Ok(Self {
            frame: view_frame(position, focus, up)?,
            pixels_per_unit,
            width,
            height,
        })
    }
}

impl RaytracingCamera for OrthographicCamera {
    fn frame(&self) -> Frame {
        self.frame
    }

    fn get_ray(&self, x: f64, y: f64) -> Ray {
        let u = (x + 0.5 - self.width as f64 / 2.0) / self.pixels_per_unit;
        let v = (y + 0.5 - self.height as f64 / 2.0) / self.pixels_per_unit;
        let origin = self.frame.origin + u * self.frame.u + v * self.frame.v;
        Ray::new(origin, -self.frame.w)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
