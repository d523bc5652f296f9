//! Prism Core - surface description types for the ray tracer.
//!
//! This crate provides:
//!
//! - **Colors**: the `Color` alias and a handful of named colors
//! - **Materials**: Phong `Material` coefficients and classic presets
//! - **Textures**: image-backed `Texture` sampled by UV
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{material, Texture};
//!
//! let gold = material::GOLD;
//! let flag = Texture::load("usflag.png")?;
//! println!("{}x{} texture, gold shininess {}", flag.width(), flag.height(), gold.shininess);
//! ```

pub mod color;
pub mod material;
pub mod texture;

// Re-export commonly used types
pub use color::Color;
pub use material::Material;
pub use texture::{Texture, TextureError, TextureResult};
