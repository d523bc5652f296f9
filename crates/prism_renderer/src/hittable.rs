//! Shape trait and HitRecord for ray-object intersection.

use std::sync::Arc;

use prism_core::{Material, Texture};
use prism_math::{DVec3, Interval, Ray};

/// Ray parameter reported when nothing was hit.
pub const NO_HIT: f64 = f64::MAX;

/// Geometric result of intersecting a ray with a bare shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub point: DVec3,
    /// Unit surface normal, facing against the ray
    pub normal: DVec3,
    /// UV texture coordinates
    pub u: f64,
    pub v: f64,
}

impl SurfaceHit {
    /// Build a hit at parameter `t` along `ray`, orienting `outward_normal`
    /// so that it faces against the ray.
    pub fn new(ray: &Ray, t: f64, outward_normal: DVec3, (u, v): (f64, f64)) -> Self {
        // If the ray and normal point in the same direction, we're inside
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            t,
            point: ray.at(t),
            normal,
            u,
            v,
        }
    }
}

/// Record of a ray hitting a visible object.
///
/// Either `t == NO_HIT` and the remaining fields are meaningless, or `t` is a
/// valid parameter and every field describes the hit.
#[derive(Clone, Debug)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs, [`NO_HIT`] if none
    pub t: f64,
    /// Point of intersection
    pub point: DVec3,
    /// Unit surface normal at intersection (faces against the ray)
    pub normal: DVec3,
    /// Material at the intersection point
    pub material: Material,
    /// Texture of the object hit, if any
    pub texture: Option<&'a Texture>,
    /// UV texture coordinates
    pub u: f64,
    pub v: f64,
}

impl<'a> Default for HitRecord<'a> {
    fn default() -> Self {
        Self {
            t: NO_HIT,
            point: DVec3::ZERO,
            normal: DVec3::ZERO,
            material: Material::default(),
            texture: None,
            u: 0.0,
            v: 0.0,
        }
    }
}

impl<'a> HitRecord<'a> {
    /// True unless this is the "no hit" record.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.t != NO_HIT
    }
}

/// Trait for implicit surfaces that can be hit by rays.
pub trait Shape: Send + Sync {
    /// Find the closest intersection with parameter strictly inside `ray_t`.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit>;
}

/// A shape paired with the material (and optional texture) it is drawn with.
pub struct VisibleShape {
    shape: Box<dyn Shape>,
    material: Material,
    texture: Option<Arc<Texture>>,
}

impl VisibleShape {
    /// Create an untextured visible shape.
    pub fn new(shape: impl Shape + 'static, material: Material) -> Self {
        Self {
            shape: Box::new(shape),
            material,
            texture: None,
        }
    }

    /// Attach a texture that is blended with the lit color.
    pub fn with_texture(mut self, texture: Arc<Texture>) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_deref()
    }

    /// Closest intersection in front of the ray origin, or the "no hit" record.
    pub fn find_closest_intersection(&self, ray: &Ray) -> HitRecord<'_> {
        match self.shape.intersect(ray, Interval::FORWARD) {
            Some(hit) => HitRecord {
                t: hit.t,
                point: hit.point,
                normal: hit.normal,
                material: self.material,
                texture: self.texture.as_deref(),
                u: hit.u,
                v: hit.v,
            },
            None => HitRecord::default(),
        }
    }
}

/// Closest intersection across a list of objects.
///
/// Earlier objects win ties.
pub fn find_intersection<'a>(ray: &Ray, objects: &'a [VisibleShape]) -> HitRecord<'a> {
    let mut closest = HitRecord::default();

    for object in objects {
        let hit = object.find_closest_intersection(ray);
        if hit.t < closest.t {
            closest = hit;
        }
    }

    closest
}
