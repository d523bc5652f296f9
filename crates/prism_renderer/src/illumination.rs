//! Phong illumination terms.
//!
//! All vectors are expected to be unit length. Every helper clamps its result
//! to [0, 1] per channel.

use prism_core::color::{clamp01, Color};
use prism_core::Material;
use prism_math::DVec3;

use crate::attenuation::AttenuationParams;
use crate::light::LightColor;

/// Ambient term: component-wise product of material and light.
pub fn ambient_color(mat_ambient: Color, light_ambient: Color) -> Color {
    clamp01(mat_ambient * light_ambient)
}

/// Diffuse term, scaled down by the shadow factor.
///
/// `dot(l, n)` is deliberately not clamped before scaling: a light behind the
/// surface gives a negative product, which the final clamp turns into black.
pub fn diffuse_color(
    mat_diffuse: Color,
    light_diffuse: Color,
    l: DVec3,
    n: DVec3,
    shadow: f64,
) -> Color {
    clamp01((1.0 - shadow) * mat_diffuse * light_diffuse * l.dot(n))
}

/// Specular term, scaled down by the shadow factor.
pub fn specular_color(
    mat_specular: Color,
    light_specular: Color,
    shininess: f64,
    r: DVec3,
    v: DVec3,
    shadow: f64,
) -> Color {
    clamp01((1.0 - shadow) * mat_specular * light_specular * r.dot(v).max(0.0).powf(shininess))
}

/// Color produced by a single light at a single point.
///
/// When attenuation is on only the diffuse term is scaled by the attenuation
/// factor; ambient and specular are never attenuated.
#[allow(clippy::too_many_arguments)]
pub fn total_color(
    material: &Material,
    light_color: &LightColor,
    v: DVec3,
    n: DVec3,
    light_pos: DVec3,
    point: DVec3,
    attenuation_on: bool,
    at_params: &AttenuationParams,
    shadow: f64,
) -> Color {
    let to_light = light_pos - point;
    let l = to_light.normalize_or_zero();
    let distance = to_light.length();
    let r = 2.0 * l.dot(n) * n - l;

    let ambient = ambient_color(material.ambient, light_color.ambient);
    let diffuse = diffuse_color(material.diffuse, light_color.diffuse, l, n, shadow);
    let specular = specular_color(
        material.specular,
        light_color.specular,
        material.shininess,
        r,
        v,
        shadow,
    );

    if attenuation_on {
        clamp01(ambient + at_params.factor(distance) * diffuse + specular)
    } else {
        clamp01(ambient + diffuse + specular)
    }
}

/// True if `point` lies inside the cone of a spotlight at `spot_pos` aiming
/// along the unit vector `spot_dir`.
///
/// The test compares against `cos(fov)`, so the cone's half-angle equals
/// `fov`.
pub fn in_cone(spot_pos: DVec3, spot_dir: DVec3, fov: f64, point: DVec3) -> bool {
    let to_point = (point - spot_pos).normalize_or_zero();
    to_point.dot(spot_dir) >= fov.cos()
}
