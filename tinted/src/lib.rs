//! Host side of the tinted texture pipeline: tints, a CPU reference sampler
//! and a parallel per-pixel evaluator for the `tinted_texture` fragment shader.

mod error;

pub mod render;
pub mod sampler;
pub mod settings;
pub mod shader;
pub mod texture;
pub mod tint;

pub use error::{Error, Result};
pub use render::{Framebuffer, render, render_tinted};
pub use sampler::{AddressMode, Filter, Sampler};
pub use settings::{AlphaMode, Resolution, Settings};
pub use shader::{FragmentShader, TintedTexture};
pub use texture::Texture;
pub use tint::Tint;
pub use tinted_gpu::{TintUniform, glam};
