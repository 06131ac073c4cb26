use image::{Rgba32FImage, RgbaImage};
use tinted_gpu::glam::Vec4;

use crate::{Error, Result};

/// RGBA texels in row-major order. Row 0 is the top of the image, `v = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    texels: Vec<Vec4>,
}

impl Texture {
    pub fn new(width: u32, height: u32, texels: Vec<Vec4>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyTexture { width, height });
        }
        let expected = width as usize * height as usize;
        if texels.len() != expected {
            return Err(Error::TexelCount {
                expected,
                actual: texels.len(),
            });
        }

        log::trace!("tinted::texture - {width}x{height} texture");
        Ok(Self { width, height, texels })
    }

    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> Vec4) -> Result<Self> {
        let texels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self::new(width, height, texels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texel at integer coordinates. Callers resolve addressing first.
    pub fn texel(&self, x: u32, y: u32) -> Vec4 {
        debug_assert!(
            x < self.width && y < self.height,
            "texel ({x}, {y}) outside {}x{} texture",
            self.width,
            self.height
        );
        self.texels[x as usize + y as usize * self.width as usize]
    }
}

impl TryFrom<&RgbaImage> for Texture {
    type Error = Error;

    fn try_from(image: &RgbaImage) -> Result<Self> {
        let texels = image
            .pixels()
            .map(|p| Vec4::new(p[0] as f32, p[1] as f32, p[2] as f32, p[3] as f32) / 255.0)
            .collect();
        Self::new(image.width(), image.height(), texels)
    }
}

impl TryFrom<&Rgba32FImage> for Texture {
    type Error = Error;

    fn try_from(image: &Rgba32FImage) -> Result<Self> {
        let texels = image.pixels().map(|p| Vec4::from_array(p.0)).collect();
        Self::new(image.width(), image.height(), texels)
    }
}
