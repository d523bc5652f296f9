//! Infinite plane primitive.

use prism_math::{DVec3, Interval, Ray};

use super::{GeometryError, PARALLEL_TOLERANCE};
use crate::hittable::{Shape, SurfaceHit};

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: DVec3,
    normal: DVec3,
    tangent: DVec3,
    bitangent: DVec3,
}

impl Plane {
    /// Create a plane. Fails if `normal` has zero length.
    pub fn new(point: DVec3, normal: DVec3) -> Result<Self, GeometryError> {
        let normal = normal
            .try_normalize()
            .ok_or(GeometryError::DegenerateNormal(normal.to_array()))?;
        Ok(Self::with_unit_normal(point, normal))
    }

    pub(crate) fn with_unit_normal(point: DVec3, normal: DVec3) -> Self {
        let (tangent, bitangent) = normal.any_orthonormal_pair();
        Self {
            point,
            normal,
            tangent,
            bitangent,
        }
    }

    pub fn point(&self) -> DVec3 {
        self.point
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Ray parameter where the ray crosses the plane, if it does so inside `ray_t`.
    pub(crate) fn crossing(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_TOLERANCE {
            return None;
        }

        let t = self.normal.dot(self.point - ray.origin()) / denom;
        ray_t.surrounds(t).then_some(t)
    }

    /// Tangent-space coordinates of `p` relative to the plane's anchor point.
    pub(crate) fn local_coords(&self, p: DVec3) -> (f64, f64) {
        let d = p - self.point;
        (d.dot(self.tangent), d.dot(self.bitangent))
    }
}

impl Shape for Plane {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        let t = self.crossing(ray, ray_t)?;
        let (s, r) = self.local_coords(ray.at(t));

        // Texture repeats once per world unit
        let uv = (s.rem_euclid(1.0), r.rem_euclid(1.0));
        Some(SurfaceHit::new(ray, t, self.normal, uv))
    }
}
