//! CPU reference for the sampler bound next to the texture.
//!
//! Follows the usual GPU conventions: texel centers sit at `(i + 0.5) / size`,
//! addressing is resolved on integer texel indices, and linear filtering
//! blends the four nearest texel centers.
use tinted_gpu::glam::{Vec2, Vec4};

use crate::texture::Texture;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressMode {
    #[default]
    Repeat,
    MirroredRepeat,
    ClampToEdge,
}

impl AddressMode {
    fn resolve(self, index: i64, size: u32) -> u32 {
        let size = size as i64;
        let resolved = match self {
            AddressMode::Repeat => index.rem_euclid(size),
            AddressMode::MirroredRepeat => {
                let period = size * 2;
                let m = index.rem_euclid(period);
                if m < size { m } else { period - 1 - m }
            }
            AddressMode::ClampToEdge => index.clamp(0, size - 1),
        };
        resolved as u32
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    Nearest,
    Linear,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sampler {
    pub address_u: AddressMode,
    pub address_v: AddressMode,
    pub filter: Filter,
}

impl Sampler {
    pub fn new(address: AddressMode, filter: Filter) -> Self {
        Self {
            address_u: address,
            address_v: address,
            filter,
        }
    }

    pub fn address_u(mut self, address: AddressMode) -> Self {
        self.address_u = address;
        self
    }

    pub fn address_v(mut self, address: AddressMode) -> Self {
        self.address_v = address;
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Total over every input: non-finite coordinates are read as 0.0.
    ///
    /// Texel space is computed in `f64` so that large finite coordinates
    /// cannot overflow once scaled by the texture size.
    pub fn sample(&self, texture: &Texture, uv: Vec2) -> Vec4 {
        let x = finite_or_zero(uv.x) as f64 * texture.width() as f64;
        let y = finite_or_zero(uv.y) as f64 * texture.height() as f64;

        match self.filter {
            Filter::Nearest => self.fetch(texture, x.floor() as i64, y.floor() as i64),
            Filter::Linear => {
                let (x, y) = (x - 0.5, y - 0.5);
                let (x0, y0) = (x.floor(), y.floor());
                let (fx, fy) = ((x - x0) as f32, (y - y0) as f32);
                let (x0, y0) = (x0 as i64, y0 as i64);
                let (x1, y1) = (x0.saturating_add(1), y0.saturating_add(1));

                let top = self.fetch(texture, x0, y0).lerp(self.fetch(texture, x1, y0), fx);
                let bottom = self.fetch(texture, x0, y1).lerp(self.fetch(texture, x1, y1), fx);
                top.lerp(bottom, fy)
            }
        }
    }

    fn fetch(&self, texture: &Texture, x: i64, y: i64) -> Vec4 {
        texture.texel(
            self.address_u.resolve(x, texture.width()),
            self.address_v.resolve(y, texture.height()),
        )
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}
