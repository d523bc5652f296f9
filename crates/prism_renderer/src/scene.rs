//! Everything a render pass reads: camera, objects, lights and quality settings.

use prism_core::Material;
use thiserror::Error;

use crate::camera::RaytracingCamera;
use crate::hittable::VisibleShape;
use crate::light::{Light, PositionalLight, SpotLight};

/// Errors raised when configuring a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Anti-aliasing needs at least one sample per axis")]
    ZeroAntiAliasing,
}

/// A scene to ray trace.
///
/// Objects live in two lists: opaque ones and transparent ones. Lights live in
/// two lists as well, one per light kind; [`Scene::lights`] walks both.
pub struct Scene {
    camera: Box<dyn RaytracingCamera>,
    opaque_objects: Vec<VisibleShape>,
    transparent_objects: Vec<VisibleShape>,
    positional_lights: Vec<PositionalLight>,
    spot_lights: Vec<SpotLight>,
    anti_aliasing: u32,
    num_reflections: u32,
}

impl Scene {
    /// Create an empty scene with one sample per pixel and no reflections.
    pub fn new(camera: impl RaytracingCamera + 'static) -> Self {
        Self {
            camera: Box::new(camera),
            opaque_objects: Vec::new(),
            transparent_objects: Vec::new(),
            positional_lights: Vec::new(),
            spot_lights: Vec::new(),
            anti_aliasing: 1,
            num_reflections: 0,
        }
    }

    pub fn camera(&self) -> &dyn RaytracingCamera {
        self.camera.as_ref()
    }

    /// Replace the camera, e.g. after the viewport is resized.
    pub fn set_camera(&mut self, camera: impl RaytracingCamera + 'static) {
        self.camera = Box::new(camera);
    }

    pub fn add_opaque_object(&mut self, object: VisibleShape) {
        self.opaque_objects.push(object);
    }

    /// Add a see-through object with opacity `alpha` (clamped to [0, 1]).
    pub fn add_transparent_object(&mut self, mut object: VisibleShape, alpha: f64) {
        let material: &mut Material = object.material_mut();
        *material = material.with_alpha(alpha);
        self.transparent_objects.push(object);
    }

    pub fn opaque_objects(&self) -> &[VisibleShape] {
        &self.opaque_objects
    }

    pub fn transparent_objects(&self) -> &[VisibleShape] {
        &self.transparent_objects
    }

    /// Total number of objects in both lists.
    pub fn object_count(&self) -> usize {
        self.opaque_objects.len() + self.transparent_objects.len()
    }

    pub fn add_positional_light(&mut self, light: PositionalLight) {
        self.positional_lights.push(light);
    }

    pub fn add_spot_light(&mut self, light: SpotLight) {
        self.spot_lights.push(light);
    }

    pub fn positional_lights(&self) -> &[PositionalLight] {
        &self.positional_lights
    }

    pub fn positional_lights_mut(&mut self) -> &mut [PositionalLight] {
        &mut self.positional_lights
    }

    pub fn spot_lights(&self) -> &[SpotLight] {
        &self.spot_lights
    }

    pub fn spot_lights_mut(&mut self) -> &mut [SpotLight] {
        &mut self.spot_lights
    }

    /// All lights: positional lights first, then spotlights.
    pub fn lights(&self) -> impl Iterator<Item = &dyn Light> + '_ {
        let positional = self.positional_lights.iter().map(|l| l as &dyn Light);
        let spots = self.spot_lights.iter().map(|l| l as &dyn Light);
        positional.chain(spots)
    }

    /// Samples per pixel along each axis; a pixel gets `n * n` rays per light.
    pub fn anti_aliasing(&self) -> u32 {
        self.anti_aliasing
    }

    pub fn set_anti_aliasing(&mut self, samples: u32) -> Result<(), SceneError> {
        if samples == 0 {
            return Err(SceneError::ZeroAntiAliasing);
        }
        self.anti_aliasing = samples;
        Ok(())
    }

    /// Recursion depth for reflection and refraction rays.
    pub fn num_reflections(&self) -> u32 {
        self.num_reflections
    }

    pub fn set_num_reflections(&mut self, depth: u32) {
        self.num_reflections = depth;
    }
}
