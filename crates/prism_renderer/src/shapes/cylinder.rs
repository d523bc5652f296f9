//! Cylinders aligned with the Y axis.

use std::f64::consts::PI;

use prism_math::{DVec3, Interval, Ray};

use super::Disk;
use crate::hittable::{Shape, SurfaceHit};

/// An open cylinder (no caps) around a vertical axis.
///
/// `center` is the middle of the axis; the tube spans `height / 2` above and
/// below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderY {
    center: DVec3,
    radius: f64,
    height: f64,
}

impl CylinderY {
    pub fn new(center: DVec3, radius: f64, height: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            height: height.max(0.0),
        }
    }

    fn y_min(&self) -> f64 {
        self.center.y - self.height / 2.0
    }

    fn y_max(&self) -> f64 {
        self.center.y + self.height / 2.0
    }

    fn uv(&self, p: DVec3) -> (f64, f64) {
        let d = p - self.center;
        let u = (d.z.atan2(d.x) + PI) / (2.0 * PI);
        let v = if self.height > 0.0 {
            (p.y - self.y_min()) / self.height
        } else {
            0.0
        };
        (u, v)
    }
}

impl Shape for CylinderY {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        let dir = ray.direction();
        let oc = ray.origin() - self.center;

        // Quadratic in the XZ plane only
        let a = dir.x * dir.x + dir.z * dir.z;
        if a == 0.0 || self.radius <= 0.0 {
            return None;
        }
        let h = oc.x * dir.x + oc.z * dir.z;
        let c = oc.x * oc.x + oc.z * oc.z - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        let in_span = Interval::new(self.y_min(), self.y_max());
        [(-h - sqrtd) / a, (-h + sqrtd) / a]
            .into_iter()
            .filter(|&t| ray_t.surrounds(t))
            .find(|&t| in_span.contains(ray.at(t).y))
            .map(|t| {
                let p = ray.at(t);
                let outward_normal = DVec3::new(p.x - self.center.x, 0.0, p.z - self.center.z) / self.radius;
                SurfaceHit::new(ray, t, outward_normal, self.uv(p))
            })
    }
}

/// A cylinder capped with disks at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedCylinderY {
    tube: CylinderY,
    top: Disk,
    bottom: Disk,
}

impl ClosedCylinderY {
    pub fn new(center: DVec3, radius: f64, height: f64) -> Self {
        let tube = CylinderY::new(center, radius, height);
        let top = Disk::with_unit_normal(
            DVec3::new(center.x, tube.y_max(), center.z),
            DVec3::Y,
            tube.radius,
        );
        let bottom = Disk::with_unit_normal(
            DVec3::new(center.x, tube.y_min(), center.z),
            -DVec3::Y,
            tube.radius,
        );

        Self { tube, top, bottom }
    }
}

impl Shape for ClosedCylinderY {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        let parts: [&dyn Shape; 3] = [&self.tube, &self.top, &self.bottom];

        let mut closest: Option<SurfaceHit> = None;
        for part in parts {
            let max = closest.map_or(ray_t.max, |hit| hit.t);
            if let Some(hit) = part.intersect(ray, Interval::new(ray_t.min, max)) {
                closest = Some(hit);
            }
        }
        closest
    }
}
