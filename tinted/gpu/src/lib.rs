#![cfg_attr(target_arch = "spirv", no_std)]

#[cfg(not(target_arch = "spirv"))]
use bytemuck::cast;

pub use spirv_std::glam;

use spirv_std::glam::{Vec3, Vec4};

/// Drop the sampled alpha and write 1.0.
pub const ALPHA_OPAQUE: u32 = 0;
/// Keep the sampled alpha (multiplied by the tint's implicit 1.0).
pub const ALPHA_TEXTURE: u32 = 1;

/// Uniform block bound at set 0, binding 2 of the tinted texture pipeline.
///
/// Laid out for std140: `color` occupies the first 12 bytes and `alpha_mode`
/// packs into the tail of the same 16 byte slot.
#[cfg_attr(not(target_arch = "spirv"), derive(Clone, Copy))]
#[repr(C)]
pub struct TintUniform {
    pub color: Vec3,
    pub alpha_mode: u32,
}

#[cfg(not(target_arch = "spirv"))]
impl TintUniform {
    pub fn color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    pub fn alpha_mode(mut self, alpha_mode: u32) -> Self {
        self.alpha_mode = alpha_mode;
        self
    }

    pub fn as_buffer(&self) -> [u8; UNIFORM_SIZE as usize] {
        cast::<[u32; 4], [u8; 16]>([
            self.color.x.to_bits(),
            self.color.y.to_bits(),
            self.color.z.to_bits(),
            self.alpha_mode,
        ])
    }
}

#[cfg(not(target_arch = "spirv"))]
impl Default for TintUniform {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            alpha_mode: ALPHA_OPAQUE,
        }
    }
}

/// Multiplies a sampled texel by the tint, with the tint's alpha fixed at 1.0.
pub fn shade(texel: Vec4, uniform: &TintUniform) -> Vec4 {
    let tinted = texel * Vec4::from((uniform.color, 1.0));
    if uniform.alpha_mode == ALPHA_OPAQUE {
        Vec4::from((tinted.truncate(), 1.0))
    } else {
        tinted
    }
}

#[cfg(not(target_arch = "spirv"))]
pub const UNIFORM_SIZE: u64 = size_of::<TintUniform>() as u64;

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(r: f32, g: f32, b: f32) -> TintUniform {
        TintUniform::default().color(Vec3::new(r, g, b))
    }

    #[test]
    fn multiplies_rgb_and_forces_alpha() {
        let texel = Vec4::new(0.5, 0.25, 1.0, 0.5);
        let out = shade(texel, &uniform(0.5, 1.0, 0.25));
        assert_eq!(out, Vec4::new(0.25, 0.25, 0.25, 1.0));
    }

    #[test]
    fn white_tint_returns_texel_with_opaque_alpha() {
        let texel = Vec4::new(0.125, 0.75, 0.375, 0.0);
        assert_eq!(
            shade(texel, &uniform(1.0, 1.0, 1.0)),
            Vec4::new(0.125, 0.75, 0.375, 1.0)
        );
    }

    #[test]
    fn black_tint_is_opaque_black() {
        for texel in [Vec4::ZERO, Vec4::ONE, Vec4::new(0.3, 0.6, 0.9, 0.2)] {
            assert_eq!(shade(texel, &uniform(0.0, 0.0, 0.0)), Vec4::new(0.0, 0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn texture_alpha_mode_keeps_sampled_alpha() {
        let texel = Vec4::new(1.0, 0.5, 0.25, 0.25);
        let tint = uniform(0.5, 0.5, 0.5).alpha_mode(ALPHA_TEXTURE);
        assert_eq!(shade(texel, &tint), Vec4::new(0.5, 0.25, 0.125, 0.25));
    }

    #[test]
    fn shading_is_repeatable() {
        let texel = Vec4::new(0.1, 0.2, 0.3, 0.4);
        let tint = uniform(0.7, 0.11, 0.9);
        assert_eq!(shade(texel, &tint), shade(texel, &tint));
    }

    #[test]
    fn uniform_buffer_layout() {
        assert_eq!(UNIFORM_SIZE, 16);

        let bytes = uniform(1.0, 0.5, 0.0).alpha_mode(ALPHA_TEXTURE).as_buffer();
        assert_eq!(bytes[0..4], 1.0f32.to_ne_bytes());
        assert_eq!(bytes[4..8], 0.5f32.to_ne_bytes());
        assert_eq!(bytes[8..12], 0.0f32.to_ne_bytes());
        assert_eq!(bytes[12..16], ALPHA_TEXTURE.to_ne_bytes());
    }
}
