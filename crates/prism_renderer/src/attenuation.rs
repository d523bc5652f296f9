//! Distance falloff for lights.

use serde::{Deserialize, Serialize};

use crate::light::LightError;

/// Constant, linear and quadratic falloff coefficients.
///
/// `factor(d) = 1 / (constant + linear*d + quadratic*d²)`. Construction
/// guarantees `constant > 0` and non-negative `linear` and `quadratic`, so the
/// denominator never reaches zero for non-negative distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAttenuation")]
pub struct AttenuationParams {
    constant: f64,
    linear: f64,
    quadratic: f64,
}

impl AttenuationParams {
    /// No falloff at all.
    pub const NONE: AttenuationParams = AttenuationParams {
        constant: 1.0,
        linear: 0.0,
        quadratic: 0.0,
    };

    pub fn new(constant: f64, linear: f64, quadratic: f64) -> Result<Self, LightError> {
        if !(constant > 0.0) {
            return Err(LightError::NonPositiveAttenuation { constant });
        }
        if linear < 0.0 || quadratic < 0.0 || linear.is_nan() || quadratic.is_nan() {
            return Err(LightError::NegativeAttenuation { linear, quadratic });
        }
        Ok(Self {
            constant,
            linear,
            quadratic,
        })
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn linear(&self) -> f64 {
        self.linear
    }

    pub fn quadratic(&self) -> f64 {
        self.quadratic
    }

    /// Attenuation factor at `distance` from the light.
    #[inline]
    pub fn factor(&self, distance: f64) -> f64 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

impl Default for AttenuationParams {
    fn default() -> Self {
        Self::NONE
    }
}

#[derive(Deserialize)]
struct RawAttenuation {
    constant: f64,
    linear: f64,
    quadratic: f64,
}

impl TryFrom<RawAttenuation> for AttenuationParams {
    type Error = LightError;

    fn try_from(raw: RawAttenuation) -> Result<Self, Self::Error> {
        Self::new(raw.constant, raw.linear, raw.quadratic)
    }
}
