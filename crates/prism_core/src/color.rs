//! RGB colors.
//!
//! Colors are linear RGB triples. Shading clamps channels to [0, 1]; the
//! ray tracer accumulates unclamped sums and relies on the framebuffer to
//! clamp on output.

use prism_math::{DVec3, Interval};

/// Color type alias (RGB values typically 0-1)
pub type Color = DVec3;

pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);
pub const LIGHT_GRAY: Color = Color::new(0.75, 0.75, 0.75);
pub const DARK_GRAY: Color = Color::new(0.25, 0.25, 0.25);
pub const RED: Color = Color::new(1.0, 0.0, 0.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

/// Clamp every channel to [0, 1].
#[inline]
pub fn clamp01(color: Color) -> Color {
    color.clamp(Color::ZERO, Color::ONE)
}

/// Convert a color to 8-bit RGB, clamping each channel first.
pub fn to_rgb8(color: Color) -> [u8; 3] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)).round() as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)).round() as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)).round() as u8;
    [r, g, b]
}
