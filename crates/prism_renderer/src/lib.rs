//! Prism Renderer - Whitted-style CPU ray tracing
//!
//! A recursive ray tracer with Phong shading, soft opacity-weighted shadows,
//! attenuated positional lights and spotlights, texture blending, and
//! reflection/refraction to a fixed depth.
//!
//! Single-threaded and deterministic: the same scene always renders to the
//! same pixels.

mod attenuation;
mod camera;
mod config;
mod framebuffer;
mod hittable;
mod illumination;
mod light;
mod raytracer;
mod scene;
mod shadow;
mod shapes;

pub use attenuation::AttenuationParams;
pub use camera::{CameraError, OrthographicCamera, PerspectiveCamera, RaytracingCamera};
pub use config::{ConfigError, RenderConfig};
pub use framebuffer::{FrameBuffer, FrameBufferError};
pub use hittable::{find_intersection, HitRecord, Shape, SurfaceHit, VisibleShape, NO_HIT};
pub use illumination::{ambient_color, diffuse_color, in_cone, specular_color, total_color};
pub use light::{Light, LightColor, LightError, PositionalLight, SpotLight};
pub use raytracer::{RayTracer, REFRACTION_FACTOR};
pub use scene::{Scene, SceneError};
pub use shadow::{shadow_factor, SELF_HIT_THRESHOLD};
pub use shapes::{ClosedCylinderY, CylinderY, Disk, GeometryError, Plane, Sphere};

/// Re-export the surface and math types scenes are built from
pub use prism_core::{Color, Material, Texture};
pub use prism_math::{DVec3, Frame, Interval, Ray};
