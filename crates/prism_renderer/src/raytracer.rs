//! Whitted-style recursive ray tracer.
//!
//! Implements:
//! - Nearest-hit search over opaque and transparent objects
//! - Phong shading per light with soft, opacity-weighted shadows
//! - 50/50 texture blending
//! - Reflection and straight-through refraction to a bounded depth
//! - Grid anti-aliasing

use prism_core::Color;
use prism_math::{move_point_off_surface, Ray};

use crate::framebuffer::FrameBuffer;
use crate::hittable::find_intersection;
use crate::light::Light;
use crate::scene::Scene;
use crate::shadow::shadow_factor;

/// Share of the reflected color in the opaque part of a surface's color.
pub const REFRACTION_FACTOR: f64 = 0.1;

/// Ray tracer configured with the color of rays that hit nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayTracer {
    pub default_color: Color,
}

impl RayTracer {
    pub fn new(default_color: Color) -> Self {
        Self { default_color }
    }

    /// Compute the color seen along `ray` when the scene is lit by `light`.
    ///
    /// Recurses into reflection and refraction rays while `depth > 0`. The
    /// result is not clamped; the shading helpers already clamp each light's
    /// direct contribution.
    pub fn trace_ray(&self, scene: &Scene, light: &dyn Light, ray: &Ray, depth: u32) -> Color {
        let hit_opaque = find_intersection(ray, scene.opaque_objects());
        let hit_transparent = find_intersection(ray, scene.transparent_objects());

        // Ties go to the opaque object
        let hit = if hit_transparent.t < hit_opaque.t {
            hit_transparent
        } else {
            hit_opaque
        };

        if !hit.is_hit() {
            return self.default_color;
        }

        // Lift the point off the surface so secondary rays don't hit it again
        let po = move_point_off_surface(hit.point, hit.normal);

        let frame = scene.camera().frame();
        let shadow = shadow_factor(
            light.actual_position(&frame),
            po,
            hit.normal,
            scene.opaque_objects(),
            scene.transparent_objects(),
        );
        let mut color = light.illuminate(hit.point, hit.normal, &hit.material, &frame, shadow);

        if let Some(texture) = hit.texture.filter(|t| t.is_valid()) {
            color = (color + texture.pixel_uv(hit.u, hit.v)) * 0.5;
        }

        if depth > 0 {
            let incident = ray.direction();
            let reflected = incident - 2.0 * hit.normal.dot(incident) * hit.normal;
            let reflection = self.trace_ray(scene, light, &Ray::new(po, reflected), depth - 1);

            // Refraction keeps the incoming direction; only the origin is
            // pushed through the surface.
            let pr = move_point_off_surface(hit.point, -hit.normal);
            let refraction =
                self.trace_ray(scene, light, &Ray::new(pr, ray.direction()), depth - 1);

            let alpha = hit.material.alpha;
            color = alpha * ((1.0 - REFRACTION_FACTOR) * color + REFRACTION_FACTOR * reflection)
                + (1.0 - alpha) * refraction;
        }

        color
    }

    /// Color of pixel `(x, y)`: every active light, `n * n` samples per light,
    /// summed over lights and averaged over samples.
    pub fn render_pixel(&self, scene: &Scene, depth: u32, x: u32, y: u32) -> Color {
        let camera = scene.camera();
        let n = scene.anti_aliasing().max(1);
        let step = 1.0 / n as f64;

        let mut pixel_color = Color::ZERO;
        for light in scene.lights().filter(|l| l.is_on()) {
            for i in 0..n {
                for j in 0..n {
                    let ray = camera.get_ray(x as f64 + i as f64 * step, y as f64 + j as f64 * step);
                    pixel_color += self.trace_ray(scene, light, &ray, depth);
                }
            }
        }

        let alias_scale = (n * n) as f64;
        pixel_color / alias_scale
    }

    /// Render the whole scene into `frame_buffer`.
    pub fn raytrace_scene(&self, frame_buffer: &mut FrameBuffer, depth: u32, scene: &Scene) {
        let height = frame_buffer.height();

        for y in 0..height {
            log::debug!("Progress {:.1}%", y as f64 * 100.0 / height as f64);

            for x in 0..frame_buffer.width() {
                let color = self.render_pixel(scene, depth, x, y);
                frame_buffer.set_color(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::camera::{PerspectiveCamera, RaytracingCamera};
    use crate::hittable::{Shape, SurfaceHit, VisibleShape};
    use crate::illumination::total_color;
    use crate::light::{LightColor, PositionalLight, SpotLight};
    use crate::{AttenuationParams, Sphere};
    use prism_core::color::{BLACK, GRAY, LIGHT_GRAY, WHITE};
    use prism_core::material::{COPPER, GOLD};
    use prism_core::{Material, Texture};
    use prism_math::{DVec3, Interval};

    /// Sphere that counts how often it is intersected.
    struct CountingSphere {
        inner: Sphere,
        calls: Arc<AtomicUsize>,
    }

    impl Shape for CountingSphere {
        fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.inner.intersect(ray, ray_t)
        }
    }

    /// Camera above the origin looking straight down.
    fn top_camera(size: u32) -> PerspectiveCamera {
        PerspectiveCamera::new(
            DVec3::new(0.0, 10.0, 0.0),
            DVec3::ZERO,
            DVec3::NEG_Z,
            std::f64::consts::FRAC_PI_2,
            size,
            size,
        )
        .unwrap()
    }

    fn overhead_light() -> PositionalLight {
        PositionalLight::new(DVec3::new(0.0, 20.0, 0.0), LightColor::PURE_WHITE)
    }

    fn sphere_scene(material: Material) -> Scene {
        let mut scene = Scene::new(top_camera(11));
        scene.add_opaque_object(VisibleShape::new(Sphere::new(DVec3::ZERO, 1.0), material));
        scene.add_positional_light(overhead_light());
        scene
    }

    #[test]
    fn test_empty_scene_returns_default_color() {
        let scene = Scene::new(top_camera(11));
        let tracer = RayTracer::new(LIGHT_GRAY);
        let light = overhead_light();

        for (x, y) in [(0.0, 0.0), (5.0, 5.0), (10.5, 3.25)] {
            let ray = scene.camera().get_ray(x, y);
            for depth in 0..3 {
                assert_eq!(tracer.trace_ray(&scene, &light, &ray, depth), LIGHT_GRAY);
            }
        }
    }

    #[test]
    fn test_depth_zero_does_not_recurse() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut scene = Scene::new(top_camera(11));
        scene.add_opaque_object(VisibleShape::new(
            CountingSphere {
                inner: Sphere::new(DVec3::ZERO, 1.0),
                calls: calls.clone(),
            },
            GOLD,
        ));

        let tracer = RayTracer::new(GRAY);
        let light = overhead_light();
        let ray = scene.camera().get_ray(5.0, 5.0);

        // One primary query plus one shadow query
        tracer.trace_ray(&scene, &light, &ray, 0);
        assert_eq!(calls.load(Ordering::Relaxed), 2);

        calls.store(0, Ordering::Relaxed);
        tracer.trace_ray(&scene, &light, &ray, 1);
        assert!(calls.load(Ordering::Relaxed) > 2);
    }

    #[test]
    fn test_sphere_apex_is_lit_and_background_is_default() {
        let scene = sphere_scene(GOLD);
        let tracer = RayTracer::new(GRAY);

        let mut fb = FrameBuffer::new(11, 11);
        tracer.raytrace_scene(&mut fb, 0, &scene);

        // Center pixel hits the top of the sphere head-on
        let apex = DVec3::Y;
        let expected = total_color(
            &GOLD,
            &LightColor::PURE_WHITE,
            DVec3::Y,
            DVec3::Y,
            DVec3::new(0.0, 20.0, 0.0),
            apex,
            false,
            &AttenuationParams::NONE,
            0.0,
        );
        let center = fb.color(5, 5);
        assert!((center - expected).length() < 1.0e-9);
        assert!(center.x > GOLD.ambient.x, "diffuse should contribute");

        // Corners miss the sphere entirely
        for (x, y) in [(0, 0), (10, 0), (0, 10), (10, 10)] {
            assert_eq!(fb.color(x, y), GRAY);
        }
    }

    #[test]
    fn test_no_active_lights_renders_black() {
        let mut scene = sphere_scene(GOLD);
        scene.positional_lights_mut()[0].set_on(false);

        let mut fb = FrameBuffer::new(11, 11);
        fb.clear(WHITE);
        RayTracer::new(GRAY).raytrace_scene(&mut fb, 1, &scene);

        assert!(fb.pixels().iter().all(|&c| c == BLACK));
    }

    #[test]
    fn test_anti_aliasing_averages_samples() {
        let mut scene = Scene::new(top_camera(4));
        scene.add_positional_light(overhead_light());
        scene.set_anti_aliasing(3).unwrap();

        let tracer = RayTracer::new(GRAY);
        assert_eq!(tracer.render_pixel(&scene, 0, 1, 2), GRAY);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut scene = sphere_scene(COPPER);
        scene.set_anti_aliasing(2).unwrap();
        scene.add_transparent_object(
            VisibleShape::new(Sphere::new(DVec3::new(1.5, 0.5, 0.0), 0.75), GOLD),
            0.4,
        );
        let tracer = RayTracer::new(GRAY);

        let mut first = FrameBuffer::new(11, 11);
        let mut second = FrameBuffer::new(11, 11);
        tracer.raytrace_scene(&mut first, 2, &scene);
        tracer.raytrace_scene(&mut second, 2, &scene);

        assert_eq!(first.pixels(), second.pixels());
    }

    #[test]
    fn test_texture_blends_half_and_half() {
        let mut scene = Scene::new(top_camera(11));
        scene.add_opaque_object(
            VisibleShape::new(Sphere::new(DVec3::ZERO, 1.0), GOLD)
                .with_texture(Arc::new(Texture::solid_color(WHITE))),
        );

        // A switched-off light contributes black, leaving only the texture
        let mut light = overhead_light();
        light.set_on(false);

        let ray = scene.camera().get_ray(5.0, 5.0);
        let color = RayTracer::new(GRAY).trace_ray(&scene, &light, &ray, 0);
        assert_eq!(color, WHITE * 0.5);
    }

    #[test]
    fn test_fully_transparent_sphere_passes_background() {
        let mut scene = Scene::new(top_camera(11));
        scene.add_transparent_object(VisibleShape::new(Sphere::new(DVec3::ZERO, 1.0), GOLD), 0.0);

        let mut light = overhead_light();
        light.set_on(false);
        let tracer = RayTracer::new(LIGHT_GRAY);
        let ray = scene.camera().get_ray(5.0, 5.0);

        // Without recursion only the (black) direct light is seen
        assert_eq!(tracer.trace_ray(&scene, &light, &ray, 0), BLACK);

        // Entering and leaving the sphere reaches the background
        assert_eq!(tracer.trace_ray(&scene, &light, &ray, 2), LIGHT_GRAY);
    }

    #[test]
    fn test_opaque_wins_ties() {
        let mut scene = Scene::new(top_camera(11));
        let red = Material::ambient_only(DVec3::new(1.0, 0.0, 0.0));
        let blue = Material::ambient_only(DVec3::new(0.0, 0.0, 1.0));
        scene.add_opaque_object(VisibleShape::new(Sphere::new(DVec3::ZERO, 1.0), red));
        scene.add_transparent_object(VisibleShape::new(Sphere::new(DVec3::ZERO, 1.0), blue), 0.5);

        let ray = scene.camera().get_ray(5.0, 5.0);
        let color = RayTracer::new(GRAY).trace_ray(&scene, &overhead_light(), &ray, 0);
        assert_eq!(color, DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_partial_alpha_blends_direct_reflection_and_refraction() {
        let alpha = 0.7;
        let mut scene = Scene::new(top_camera(11));
        scene.add_transparent_object(VisibleShape::new(Sphere::new(DVec3::ZERO, 1.0), GOLD), alpha);
        let light = overhead_light();
        let tracer = RayTracer::new(GRAY);
        let ray = scene.camera().get_ray(5.0, 5.0);

        // Trace each contribution on its own, one level down
        let hit = find_intersection(&ray, scene.transparent_objects());
        assert!(hit.is_hit());
        let direct = tracer.trace_ray(&scene, &light, &ray, 0);

        let po = move_point_off_surface(hit.point, hit.normal);
        let incident = ray.direction();
        let reflected = incident - 2.0 * hit.normal.dot(incident) * hit.normal;
        let reflection = tracer.trace_ray(&scene, &light, &Ray::new(po, reflected), 0);

        let pr = move_point_off_surface(hit.point, -hit.normal);
        let refraction = tracer.trace_ray(&scene, &light, &Ray::new(pr, incident), 0);

        // The reflected ray escapes to the background, so the weights matter
        assert_eq!(reflection, GRAY);
        assert!((direct - reflection).length() > 0.1);

        let expected = alpha * (0.9 * direct + 0.1 * reflection) + (1.0 - alpha) * refraction;
        let blended = tracer.trace_ray(&scene, &light, &ray, 1);
        assert!((blended - expected).length() < 1.0e-12);

        // Swapping the reflection weights gives a visibly different color
        let swapped = alpha * (0.1 * direct + 0.9 * reflection) + (1.0 - alpha) * refraction;
        assert!((blended - swapped).length() > 0.01);
    }

    #[test]
    fn test_spotlight_leaves_out_of_cone_hits_black() {
        let mut scene = Scene::new(top_camera(11));
        scene.add_opaque_object(VisibleShape::new(Sphere::new(DVec3::ZERO, 4.0), GOLD));

        // Narrow cone pointed straight down at the top of the sphere
        let spot = SpotLight::new(
            DVec3::new(0.0, 20.0, 0.0),
            -DVec3::Y,
            2.0_f64.to_radians(),
            LightColor::PURE_WHITE,
        )
        .unwrap();
        scene.add_spot_light(spot);

        let mut fb = FrameBuffer::new(11, 11);
        RayTracer::new(GRAY).raytrace_scene(&mut fb, 0, &scene);

        // Apex sits on the cone axis
        let apex = fb.color(5, 5);
        assert!(apex.x > GOLD.ambient.x);

        // Pixel (7, 5) hits the sphere about 8 degrees off axis
        assert_eq!(fb.color(7, 5), BLACK);

        // Misses still see the background
        assert_eq!(fb.color(0, 0), GRAY);
    }

    #[test]
    fn test_viewer_tied_light_casts_shadow_from_actual_position() {
        let mut scene = Scene::new(top_camera(11));
        scene.add_opaque_object(VisibleShape::new(Sphere::new(DVec3::ZERO, 1.0), GOLD));

        // Camera frame: u = +X, origin (0, 10, 0), so the light sits at (5, 10, 0)
        let mut light = PositionalLight::new(DVec3::new(5.0, 0.0, 0.0), LightColor::PURE_WHITE);
        light.set_tied_to_world(false);
        let actual = light.actual_position(&scene.camera().frame());
        assert!((actual - DVec3::new(5.0, 10.0, 0.0)).length() < 1.0e-12);

        // Occluder halfway between the top of the sphere and the light
        scene.add_opaque_object(VisibleShape::new(Sphere::new(DVec3::new(2.5, 5.5, 0.0), 0.3), GOLD));

        let ray = scene.camera().get_ray(5.0, 5.0);
        let color = RayTracer::new(GRAY).trace_ray(&scene, &light, &ray, 0);

        // Fully shadowed: only the ambient term survives
        assert!((color - GOLD.ambient).length() < 1.0e-12);
    }
}
