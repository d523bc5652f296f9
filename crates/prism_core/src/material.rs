//! Phong material coefficients.
//!
//! The presets are the classic OpenGL material table (ambient, diffuse,
//! specular reflectances and a shininess exponent).

use crate::color::{Color, BLACK};

/// Surface reflectance properties used by the Phong illumination model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Ambient reflectance (RGB, 0-1)
    pub ambient: Color,

    /// Diffuse reflectance (RGB, 0-1)
    pub diffuse: Color,

    /// Specular reflectance (RGB, 0-1)
    pub specular: Color,

    /// Specular exponent
    pub shininess: f64,

    /// Opacity (0=transparent, 1=opaque)
    pub alpha: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: BLACK,
            diffuse: BLACK,
            specular: BLACK,
            shininess: 1.0,
            alpha: 1.0,
        }
    }
}

impl Material {
    /// Create a fully opaque material.
    pub const fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f64) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
            alpha: 1.0,
        }
    }

    /// A flat material that reflects only ambient light.
    pub fn ambient_only(color: Color) -> Self {
        Self {
            ambient: color,
            ..Default::default()
        }
    }

    /// A matte material: `color` as diffuse, a fifth of it as ambient.
    pub fn matte(color: Color) -> Self {
        Self {
            ambient: color * 0.2,
            diffuse: color,
            ..Default::default()
        }
    }

    /// Return a copy with a different opacity, clamped to [0, 1].
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Check if this material blocks all light.
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

const fn rgb(r: f64, g: f64, b: f64) -> Color {
    Color::new(r, g, b)
}

pub const BRASS: Material = Material::new(
    rgb(0.329412, 0.223529, 0.027451),
    rgb(0.780392, 0.568627, 0.113725),
    rgb(0.992157, 0.941176, 0.807843),
    27.8974,
);

pub const BRONZE: Material = Material::new(
    rgb(0.2125, 0.1275, 0.054),
    rgb(0.714, 0.4284, 0.18144),
    rgb(0.393548, 0.271906, 0.166721),
    25.6,
);

pub const POLISHED_BRONZE: Material = Material::new(
    rgb(0.25, 0.148, 0.06475),
    rgb(0.4, 0.2368, 0.1036),
    rgb(0.774597, 0.458561, 0.200621),
    76.8,
);

pub const CHROME: Material = Material::new(
    rgb(0.25, 0.25, 0.25),
    rgb(0.4, 0.4, 0.4),
    rgb(0.774597, 0.774597, 0.774597),
    76.8,
);

pub const COPPER: Material = Material::new(
    rgb(0.19125, 0.0735, 0.0225),
    rgb(0.7038, 0.27048, 0.0828),
    rgb(0.256777, 0.137622, 0.086014),
    12.8,
);

pub const POLISHED_COPPER: Material = Material::new(
    rgb(0.2295, 0.08825, 0.0275),
    rgb(0.5508, 0.2118, 0.066),
    rgb(0.580594, 0.223257, 0.0695701),
    51.2,
);

pub const GOLD: Material = Material::new(
    rgb(0.24725, 0.1995, 0.0745),
    rgb(0.75164, 0.60648, 0.22648),
    rgb(0.628281, 0.555802, 0.366065),
    51.2,
);

pub const POLISHED_GOLD: Material = Material::new(
    rgb(0.24725, 0.2245, 0.0645),
    rgb(0.34615, 0.3143, 0.0903),
    rgb(0.797357, 0.723991, 0.208006),
    83.2,
);

pub const TIN: Material = Material::new(
    rgb(0.105882, 0.058824, 0.113725),
    rgb(0.427451, 0.470588, 0.541176),
    rgb(0.333333, 0.333333, 0.521569),
    9.84615,
);

pub const SILVER: Material = Material::new(
    rgb(0.19225, 0.19225, 0.19225),
    rgb(0.50754, 0.50754, 0.50754),
    rgb(0.508273, 0.508273, 0.508273),
    51.2,
);

pub const POLISHED_SILVER: Material = Material::new(
    rgb(0.23125, 0.23125, 0.23125),
    rgb(0.2775, 0.2775, 0.2775),
    rgb(0.773911, 0.773911, 0.773911),
    89.6,
);
