//! Render settings loadable from JSON.

use std::path::Path;

use prism_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or checking a [`RenderConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Image size and quality settings for one render.
///
/// Every field is optional in JSON; missing ones take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,

    /// Recursion depth for reflection and refraction rays
    pub depth: u32,

    /// Samples per pixel along each axis
    pub anti_aliasing: u32,

    /// Color of rays that hit nothing, linear RGB
    pub background: [f64; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            depth: 1,
            anti_aliasing: 1,
            background: [0.5, 0.5, 0.5],
        }
    }
}

impl RenderConfig {
    pub fn background_color(&self) -> Color {
        Color::from_array(self.background)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject settings the renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.anti_aliasing == 0 {
            return Err(ConfigError::Invalid(
                "anti_aliasing must be at least 1".to_string(),
            ));
        }
        if self.background.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "background must be finite, got {:?}",
                self.background
            )));
        }
        Ok(())
    }
}
