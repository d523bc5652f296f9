//! Flat circular disk.

use std::f64::consts::PI;

use prism_math::{DVec3, Interval, Ray};

use super::{GeometryError, Plane};
use crate::hittable::{Shape, SurfaceHit};

/// A disk of `radius` centered on `center`, lying in the plane with `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    plane: Plane,
    radius: f64,
}

impl Disk {
    pub fn new(center: DVec3, normal: DVec3, radius: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            plane: Plane::new(center, normal)?,
            radius: radius.max(0.0),
        })
    }

    pub(crate) fn with_unit_normal(center: DVec3, normal: DVec3, radius: f64) -> Self {
        Self {
            plane: Plane::with_unit_normal(center, normal),
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> DVec3 {
        self.plane.point()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Disk {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        let t = self.plane.crossing(ray, ray_t)?;
        let (s, r) = self.plane.local_coords(ray.at(t));

        let dist = (s * s + r * r).sqrt();
        if dist > self.radius {
            return None;
        }

        // Polar coordinates: u around the rim, v out from the center
        let u = (r.atan2(s) + PI) / (2.0 * PI);
        let v = if self.radius > 0.0 { dist / self.radius } else { 0.0 };
        Some(SurfaceHit::new(ray, t, self.plane.normal(), (u, v)))
    }
}
