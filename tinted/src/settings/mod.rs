use tinted_gpu::{ALPHA_OPAQUE, ALPHA_TEXTURE, glam::Vec2};

use crate::{sampler::Sampler, tint::Tint};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self { width: 512, height: 512 }
    }
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// What happens to the sampled alpha channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlphaMode {
    /// Output alpha is always 1.0.
    #[default]
    Opaque,
    /// Output alpha is the sampled alpha.
    Texture,
}

impl AlphaMode {
    pub fn as_uniform(self) -> u32 {
        match self {
            AlphaMode::Opaque => ALPHA_OPAQUE,
            AlphaMode::Texture => ALPHA_TEXTURE,
        }
    }
}

/// Everything a tinted draw needs besides the texture itself.
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub resolution: Resolution,
    pub sampler: Sampler,
    pub tint: Tint,
    pub alpha: AlphaMode,
    pub uv_scale: Vec2,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            sampler: Sampler::default(),
            tint: Tint::default(),
            alpha: AlphaMode::default(),
            uv_scale: Vec2::ONE,
        }
    }
}

impl Settings {
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn sampler(mut self, sampler: Sampler) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    pub fn alpha(mut self, alpha: AlphaMode) -> Self {
        self.alpha = alpha;
        self
    }

    /// Values above 1.0 make the render cover the texture more than once,
    /// exercising the sampler's address modes.
    pub fn uv_scale(mut self, uv_scale: Vec2) -> Self {
        self.uv_scale = uv_scale;
        self
    }
}
