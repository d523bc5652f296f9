//! Opacity-weighted shadow test.

use prism_math::{DVec3, Ray};

use crate::hittable::VisibleShape;

/// Hits closer than this to the shadow ray origin are the surface itself.
pub const SELF_HIT_THRESHOLD: f64 = 0.0001;

/// Fraction of the light blocked between `point` and `light_pos`, in [0, 1].
///
/// Casts one ray toward the light and adds up the alpha of the closest hit on
/// every object, opaque objects first. Several translucent occluders can add
/// up to a full shadow. Every object along the ray counts, including ones
/// beyond the light.
///
/// `point` should already be lifted off its surface; `_normal` is accepted
/// for callers that shade with it but is not needed for the test.
pub fn shadow_factor(
    light_pos: DVec3,
    point: DVec3,
    _normal: DVec3,
    opaque: &[VisibleShape],
    transparent: &[VisibleShape],
) -> f64 {
    // A light sitting exactly on the point has no direction to test
    let Some(ray) = Ray::try_new(point, light_pos - point) else {
        return 0.0;
    };

    let mut shadow = 0.0;
    for object in opaque.iter().chain(transparent) {
        let hit = object.find_closest_intersection(&ray);
        if !hit.is_hit() || hit.t.abs() < SELF_HIT_THRESHOLD {
            continue;
        }

        shadow += hit.material.alpha;
        if shadow > 1.0 {
            return 1.0;
        }
    }

    shadow.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;
    use prism_core::material::{CHROME, GOLD};

    const LIGHT: DVec3 = DVec3::new(0.0, 10.0, 0.0);

    fn occluder(y: f64, alpha: f64) -> VisibleShape {
        VisibleShape::new(Sphere::new(DVec3::new(0.0, y, 0.0), 0.5), GOLD.with_alpha(alpha))
    }

    #[test]
    fn test_no_occluders() {
        assert_eq!(shadow_factor(LIGHT, DVec3::ZERO, DVec3::Y, &[], &[]), 0.0);
    }

    #[test]
    fn test_single_opaque_occluder() {
        let opaque = vec![occluder(5.0, 1.0)];
        assert_eq!(shadow_factor(LIGHT, DVec3::ZERO, DVec3::Y, &opaque, &[]), 1.0);
    }

    #[test]
    fn test_translucent_occluders_stack_and_clamp() {
        let transparent = vec![occluder(3.0, 0.6), occluder(6.0, 0.6)];
        assert_eq!(shadow_factor(LIGHT, DVec3::ZERO, DVec3::Y, &[], &transparent), 1.0);

        let single = vec![occluder(3.0, 0.6)];
        let s = shadow_factor(LIGHT, DVec3::ZERO, DVec3::Y, &[], &single);
        assert!((s - 0.6).abs() < 1.0e-12);
    }

    #[test]
    fn test_opaque_and_transparent_lists_both_count() {
        let opaque = vec![occluder(3.0, 0.3)];
        let transparent = vec![occluder(6.0, 0.4)];
        let s = shadow_factor(LIGHT, DVec3::ZERO, DVec3::Y, &opaque, &transparent);
        assert!((s - 0.7).abs() < 1.0e-12);
    }

    #[test]
    fn test_own_surface_is_ignored() {
        // Point lies exactly on top of the sphere; the only forward hit is the
        // surface itself at t == 0, which the shape already rejects, and the
        // light is above so nothing else is in the way.
        let sphere = VisibleShape::new(Sphere::new(DVec3::ZERO, 1.0), CHROME);
        let top = DVec3::new(0.0, 1.0, 0.0);
        assert_eq!(shadow_factor(LIGHT, top, DVec3::Y, &[sphere], &[]), 0.0);
    }

    #[test]
    fn test_hit_within_threshold_is_ignored() {
        // Start just inside the sphere's top surface: the exit hit is closer
        // than the self-hit threshold.
        let sphere = VisibleShape::new(Sphere::new(DVec3::ZERO, 1.0), CHROME);
        let just_below_top = DVec3::new(0.0, 1.0 - SELF_HIT_THRESHOLD / 2.0, 0.0);
        assert_eq!(shadow_factor(LIGHT, just_below_top, DVec3::Y, &[sphere], &[]), 0.0);
    }

    #[test]
    fn test_light_on_point() {
        let opaque = vec![occluder(5.0, 1.0)];
        assert_eq!(shadow_factor(LIGHT, LIGHT, DVec3::Y, &opaque, &[]), 0.0);
    }
}
