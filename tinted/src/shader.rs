use tinted_gpu::{
    TintUniform,
    glam::{Vec2, Vec4},
};

use crate::{sampler::Sampler, texture::Texture};

/// A per-pixel program. One call is one invocation: it may only read its
/// own inputs, so invocations can run in any order and on any thread.
pub trait FragmentShader: Send + Sync {
    type Uniform: Send + Sync;
    type SharedData: Send + Sync;

    fn fragment(&self, shared: &Self::SharedData, uniform: &Self::Uniform) -> Vec4;
}

/// The host side of `tinted_texture::main_fs`: the bound texture and sampler.
pub struct TintedTexture<'a> {
    pub texture: &'a Texture,
    pub sampler: Sampler,
}

impl<'a> TintedTexture<'a> {
    pub fn new(texture: &'a Texture, sampler: Sampler) -> Self {
        Self { texture, sampler }
    }
}

impl FragmentShader for TintedTexture<'_> {
    type Uniform = TintUniform;
    /// Interpolated texture coordinate.
    type SharedData = Vec2;

    fn fragment(&self, uv: &Vec2, uniform: &TintUniform) -> Vec4 {
        let texel = self.sampler.sample(self.texture, *uv);
        tinted_gpu::shade(texel, uniform)
    }
}
