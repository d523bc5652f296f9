//! Positional lights and spotlights.
//!
//! Both kinds implement [`Light`], so the ray tracer shades with either one
//! through the same code path. Lights are edited between frames (moved,
//! switched, re-aimed) and are read-only while a frame renders.

use prism_core::color::{Color, BLACK, WHITE};
use prism_core::Material;
use prism_math::{DVec3, Frame};
use thiserror::Error;

use crate::attenuation::AttenuationParams;
use crate::illumination::{in_cone, total_color};

/// Errors raised when configuring a light.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LightError {
    #[error("Attenuation constant must be positive, got {constant}")]
    NonPositiveAttenuation { constant: f64 },

    #[error("Attenuation coefficients must be non-negative, got linear={linear}, quadratic={quadratic}")]
    NegativeAttenuation { linear: f64, quadratic: f64 },

    #[error("Spotlight direction {0:?} cannot be normalized")]
    DegenerateDirection([f64; 3]),
}

/// Ambient, diffuse and specular color of a light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightColor {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl LightColor {
    pub const fn new(ambient: Color, diffuse: Color, specular: Color) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    /// White in all three channels.
    pub const PURE_WHITE: LightColor = LightColor::new(WHITE, WHITE, WHITE);
}

/// Shared interface of every light the ray tracer can shade with.
pub trait Light: Send + Sync {
    /// Whether the light currently contributes anything.
    fn is_on(&self) -> bool;

    /// World position of the light, given the viewer's frame.
    fn actual_position(&self, eye_frame: &Frame) -> DVec3;

    /// Color this light produces at `point` on a surface with unit `normal`.
    ///
    /// `shadow` is the shadow factor in [0, 1] between the point and the light.
    fn illuminate(
        &self,
        point: DVec3,
        normal: DVec3,
        material: &Material,
        eye_frame: &Frame,
        shadow: f64,
    ) -> Color;
}

/// A point light shining in every direction.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalLight {
    position: DVec3,
    color: LightColor,
    at_params: AttenuationParams,
    is_on: bool,
    attenuation_on: bool,
    tied_to_world: bool,
}

impl PositionalLight {
    /// Create a light that is on, tied to world space and not attenuated.
    pub fn new(position: DVec3, color: LightColor) -> Self {
        Self {
            position,
            color,
            at_params: AttenuationParams::NONE,
            is_on: true,
            attenuation_on: false,
            tied_to_world: true,
        }
    }

    /// Stored position: world coordinates, or camera-frame coordinates when
    /// the light is not tied to the world.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    /// Move the light by `delta` in its own coordinate space.
    pub fn translate(&mut self, delta: DVec3) {
        self.position += delta;
    }

    pub fn color(&self) -> &LightColor {
        &self.color
    }

    pub fn set_color(&mut self, color: LightColor) {
        self.color = color;
    }

    pub fn at_params(&self) -> &AttenuationParams {
        &self.at_params
    }

    /// Replace the attenuation coefficients and enable attenuation.
    pub fn set_attenuation_params(&mut self, params: AttenuationParams) {
        self.at_params = params;
        self.attenuation_on = true;
    }

    /// Rebuild the attenuation coefficients from raw values.
    ///
    /// On error the light keeps its previous coefficients.
    pub fn set_attenuation_coefficients(
        &mut self,
        constant: f64,
        linear: f64,
        quadratic: f64,
    ) -> Result<(), LightError> {
        self.set_attenuation_params(AttenuationParams::new(constant, linear, quadratic)?);
        Ok(())
    }

    pub fn attenuation_on(&self) -> bool {
        self.attenuation_on
    }

    pub fn set_attenuation(&mut self, on: bool) {
        self.attenuation_on = on;
    }

    pub fn set_on(&mut self, on: bool) {
        self.is_on = on;
    }

    pub fn is_tied_to_world(&self) -> bool {
        self.tied_to_world
    }

    /// Tie the light to world space, or to the viewer's frame.
    pub fn set_tied_to_world(&mut self, tied: bool) {
        self.tied_to_world = tied;
    }

    /// Shade `point` as seen from `eye_frame` with the light at `light_pos`.
    fn shade(
        &self,
        light_pos: DVec3,
        point: DVec3,
        normal: DVec3,
        material: &Material,
        eye_frame: &Frame,
        shadow: f64,
    ) -> Color {
        let v = (eye_frame.origin - point).normalize_or_zero();
        total_color(
            material,
            &self.color,
            v,
            normal,
            light_pos,
            point,
            self.attenuation_on,
            &self.at_params,
            shadow,
        )
    }
}

impl Light for PositionalLight {
    fn is_on(&self) -> bool {
        self.is_on
    }

    fn actual_position(&self, eye_frame: &Frame) -> DVec3 {
        if self.tied_to_world {
            self.position
        } else {
            eye_frame.to_world(self.position)
        }
    }

    fn illuminate(
        &self,
        point: DVec3,
        normal: DVec3,
        material: &Material,
        eye_frame: &Frame,
        shadow: f64,
    ) -> Color {
        if !self.is_on {
            return BLACK;
        }
        let light_pos = self.actual_position(eye_frame);
        self.shade(light_pos, point, normal, material, eye_frame, shadow)
    }
}

/// A positional light restricted to a cone around `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    light: PositionalLight,
    direction: DVec3,
    fov: f64,
}

impl SpotLight {
    /// Create a spotlight at `position` aiming along `direction`.
    ///
    /// `fov` is in radians; a point is lit when the angle between the axis and
    /// the direction to the point is at most `fov`.
    pub fn new(
        position: DVec3,
        direction: DVec3,
        fov: f64,
        color: LightColor,
    ) -> Result<Self, LightError> {
        Ok(Self {
            light: PositionalLight::new(position, color),
            direction: unit_direction(direction)?,
            fov,
        })
    }

    /// Unit aiming direction.
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: DVec3) -> Result<(), LightError> {
        self.direction = unit_direction(direction)?;
        Ok(())
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn set_fov(&mut self, fov: f64) {
        self.fov = fov;
    }

    /// The underlying positional light (position, color, attenuation, flags).
    pub fn positional(&self) -> &PositionalLight {
        &self.light
    }

    pub fn positional_mut(&mut self) -> &mut PositionalLight {
        &mut self.light
    }
}

fn unit_direction(direction: DVec3) -> Result<DVec3, LightError> {
    direction
        .try_normalize()
        .ok_or(LightError::DegenerateDirection(direction.to_array()))
}

impl Light for SpotLight {
    fn is_on(&self) -> bool {
        self.light.is_on
    }

    fn actual_position(&self, eye_frame: &Frame) -> DVec3 {
        self.light.actual_position(eye_frame)
    }

    fn illuminate(
        &self,
        point: DVec3,
        normal: DVec3,
        material: &Material,
        eye_frame: &Frame,
        shadow: f64,
    ) -> Color {
        if !self.light.is_on {
            return BLACK;
        }

        let light_pos = self.actual_position(eye_frame);
        if !in_cone(light_pos, self.direction, self.fov, point) {
            return BLACK;
        }
        self.light
            .shade(light_pos, point, normal, material, eye_frame, shadow)
    }
}
