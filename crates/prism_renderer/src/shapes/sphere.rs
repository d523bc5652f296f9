//! Sphere primitive for ray tracing.

use std::f64::consts::PI;

use prism_math::{DVec3, Interval, Ray};

use crate::hittable::{Shape, SurfaceHit};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Get the UV coordinates for a point on the unit sphere.
    fn sphere_uv(p: DVec3) -> (f64, f64) {
        // theta: angle down from +Y
        // phi: angle around Y axis from +X
        let theta = (-p.y).acos();
        let phi = (-p.z).atan2(p.x) + PI;

        (phi / (2.0 * PI), theta / PI)
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        if self.radius <= 0.0 {
            return None;
        }

        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(SurfaceHit::new(
            ray,
            root,
            outward_normal,
            Self::sphere_uv(outward_normal),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray, Interval::FORWARD).unwrap();
        assert!((hit.t - 0.5).abs() < 1.0e-12); // Should hit at t=0.5
        assert!((hit.normal - DVec3::Z).length() < 1.0e-12);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 1.0, 0.0));
        assert!(sphere.intersect(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = Sphere::new(DVec3::ZERO, 2.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::X);

        let hit = sphere.intersect(&ray, Interval::FORWARD).unwrap();
        assert!((hit.t - 2.0).abs() < 1.0e-12);
        // Normal faces back toward the ray origin
        assert!((hit.normal + DVec3::X).length() < 1.0e-12);
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(DVec3::ZERO, -DVec3::Z);
        assert!(sphere.intersect(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_zero_radius_never_hits() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, -1.0), -3.0);
        assert_eq!(sphere.radius(), 0.0);

        let ray = Ray::new(DVec3::ZERO, -DVec3::Z);
        assert!(sphere.intersect(&ray, Interval::FORWARD).is_none());
    }
}
