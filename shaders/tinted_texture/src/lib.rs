#![cfg_attr(target_arch = "spirv", no_std)]

use spirv_std::{
    Image, Sampler,
    glam::{Vec2, Vec4},
    spirv,
};
use tinted_gpu::TintUniform;

pub type Texture2 = Image!(2D, type = f32, sampled);

#[spirv(fragment)]
pub fn main_fs(
    in_uv: Vec2,
    #[spirv(descriptor_set = 0, binding = 0)] texture: &Texture2,
    #[spirv(descriptor_set = 0, binding = 1)] sampler: &Sampler,
    #[spirv(uniform, descriptor_set = 0, binding = 2)] tint: &TintUniform,
    output: &mut Vec4,
) {
    let texel: Vec4 = texture.sample(*sampler, in_uv);
    *output = tinted_gpu::shade(texel, tint);
}
