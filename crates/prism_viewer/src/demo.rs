//! The demo scene: a handful of metal primitives on a tin floor, cut by a
//! translucent gold plane and lit by one point light and one spotlight.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use prism_core::color::{BLUE, WHITE};
use prism_core::material::{CHROME, COPPER, GOLD, POLISHED_BRONZE, POLISHED_GOLD, TIN};
use prism_core::Texture;
use prism_math::DVec3;
use prism_renderer::{
    AttenuationParams, CylinderY, Disk, LightColor, PerspectiveCamera, Plane, PositionalLight,
    Scene, Sphere, SpotLight, VisibleShape,
};

const CAMERA_POSITION: DVec3 = DVec3::new(10.0, 10.0, 10.0);
const CAMERA_FOV: f64 = std::f64::consts::FRAC_PI_2;

/// Alpha of the gold plane splitting the scene.
const PLANE_ALPHA: f64 = 0.4;

pub fn camera(width: u32, height: u32) -> Result<PerspectiveCamera> {
    PerspectiveCamera::new(CAMERA_POSITION, DVec3::ZERO, DVec3::Y, CAMERA_FOV, width, height)
        .context("Failed to set up camera")
}

/// Load the cylinder texture, falling back to a checkerboard when it can't be read.
fn cylinder_texture(path: Option<&Path>) -> Texture {
    let fallback = || Texture::checkerboard(64, 8, WHITE, BLUE);

    match path {
        Some(path) => match Texture::load(path) {
            Ok(texture) => texture,
            Err(e) => {
                log::warn!("Could not load texture {}: {}", path.display(), e);
                fallback()
            }
        },
        None => fallback(),
    }
}

pub fn build_scene(width: u32, height: u32, texture: Option<&Path>) -> Result<Scene> {
    let mut scene = Scene::new(camera(width, height)?);

    scene.add_opaque_object(VisibleShape::new(
        Plane::new(DVec3::new(0.0, -4.0, 0.0), DVec3::Y)?,
        TIN,
    ));
    scene.add_opaque_object(VisibleShape::new(
        CylinderY::new(DVec3::new(0.0, 0.0, 6.5), 2.0, 4.0),
        GOLD,
    ));
    scene.add_opaque_object(VisibleShape::new(
        CylinderY::new(DVec3::new(8.0, -2.0, 0.5), 1.5, 5.0),
        POLISHED_BRONZE,
    ));
    scene.add_opaque_object(VisibleShape::new(Sphere::new(DVec3::ZERO, 4.0), COPPER));

    // Closed cylinder built from parts so only the tube carries the texture
    let (center, radius, height) = (DVec3::new(4.0, 1.0, -8.0), 3.0, 5.0);
    let half = DVec3::new(0.0, height / 2.0, 0.0);
    scene.add_opaque_object(VisibleShape::new(
        Disk::new(center - half, -DVec3::Y, radius)?,
        CHROME,
    ));
    scene.add_opaque_object(VisibleShape::new(
        Disk::new(center + half, DVec3::Y, radius)?,
        CHROME,
    ));
    scene.add_opaque_object(
        VisibleShape::new(CylinderY::new(center, radius, height), CHROME)
            .with_texture(Arc::new(cylinder_texture(texture))),
    );

    scene.add_transparent_object(
        VisibleShape::new(Plane::new(DVec3::ZERO, DVec3::X)?, POLISHED_GOLD),
        PLANE_ALPHA,
    );

    let attenuation = AttenuationParams::new(1.0, 0.017, 0.0007)?;

    let mut point_light = PositionalLight::new(DVec3::new(10.0, 20.0, -5.0), LightColor::PURE_WHITE);
    point_light.set_attenuation_params(attenuation);
    scene.add_positional_light(point_light);

    let mut spot_light = SpotLight::new(
        DVec3::new(-10.0, 10.0, 10.0),
        DVec3::new(1.0, -1.0, -1.0),
        15.0_f64.to_radians(),
        LightColor::PURE_WHITE,
    )?;
    spot_light.positional_mut().set_attenuation_params(attenuation);
    scene.add_spot_light(spot_light);

    Ok(scene)
}
