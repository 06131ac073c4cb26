use std::time::Instant;

use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use tinted_gpu::glam::{Vec2, Vec4};

use crate::{
    settings::{Resolution, Settings},
    shader::{FragmentShader, TintedTexture},
    texture::Texture,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    pub resolution: Resolution,
    pub color: Vec<Vec4>,
}

impl Framebuffer {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            color: vec![Vec4::ZERO; resolution.pixel_count()],
        }
    }

    pub fn color_at(&self, x: u32, y: u32) -> Vec4 {
        let Resolution { width, height } = self.resolution;
        debug_assert!(x < width && y < height, "pixel ({x}, {y}) outside {width}x{height} framebuffer");
        self.color[x as usize + y as usize * self.resolution.width as usize]
    }

    /// Quantizes to 8 bits per channel, clamping to `[0, 1]`.
    pub fn to_rgba8(&self) -> RgbaImage {
        let Resolution { width, height } = self.resolution;
        RgbaImage::from_fn(width, height, |x, y| {
            let c = self.color_at(x, y).clamp(Vec4::ZERO, Vec4::ONE) * 255.0;
            Rgba(c.round().to_array().map(|v| v as u8))
        })
    }
}

/// Texture coordinate of the center of pixel `(x, y)`.
pub fn pixel_uv(x: u32, y: u32, resolution: Resolution, uv_scale: Vec2) -> Vec2 {
    let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
    center / Vec2::new(resolution.width as f32, resolution.height as f32) * uv_scale
}

/// Runs one fragment invocation per pixel, in parallel.
pub fn render<S, F>(shader: &S, shared: F, uniform: &S::Uniform, resolution: Resolution) -> Framebuffer
where
    S: FragmentShader,
    F: Fn(u32, u32) -> S::SharedData + Send + Sync,
{
    let mut framebuffer = Framebuffer::new(resolution);
    if resolution.pixel_count() == 0 {
        log::warn!("tinted::render - nothing to shade at {}x{}", resolution.width, resolution.height);
        return framebuffer;
    }

    let start = Instant::now();
    let width = resolution.width as usize;
    framebuffer
        .color
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, color)| {
            let x = (index % width) as u32;
            let y = (index / width) as u32;
            *color = shader.fragment(&shared(x, y), uniform);
        });

    log::debug!(
        "tinted::render - shaded {}x{} in {:?}",
        resolution.width,
        resolution.height,
        start.elapsed()
    );
    framebuffer
}

/// Draws `texture` across the whole target, tinted per `settings`.
pub fn render_tinted(texture: &Texture, settings: &Settings) -> Framebuffer {
    let shader = TintedTexture::new(texture, settings.sampler);
    let uniform = settings.tint.uniform(settings.alpha);
    let Settings { resolution, uv_scale, .. } = *settings;

    log::debug!(
        "tinted::render - {} with {:?} over {}x{} texture",
        settings.tint,
        settings.sampler,
        texture.width(),
        texture.height()
    );
    render(
        &shader,
        |x, y| pixel_uv(x, y, resolution, uv_scale),
        &uniform,
        resolution,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sampler::Sampler, settings::AlphaMode, tint::Tint};

    struct Gradient;

    impl FragmentShader for Gradient {
        type Uniform = f32;
        type SharedData = Vec2;

        fn fragment(&self, uv: &Vec2, scale: &f32) -> Vec4 {
            Vec4::new(uv.x, uv.y, *scale, 1.0)
        }
    }

    #[test]
    fn pixel_centers() {
        let resolution = Resolution::new(4, 2);
        assert_eq!(pixel_uv(0, 0, resolution, Vec2::ONE), Vec2::new(0.125, 0.25));
        assert_eq!(pixel_uv(3, 1, resolution, Vec2::ONE), Vec2::new(0.875, 0.75));
        assert_eq!(pixel_uv(3, 1, resolution, Vec2::splat(2.0)), Vec2::new(1.75, 1.5));
    }

    #[test]
    fn parallel_matches_sequential() {
        let resolution = Resolution::new(37, 23);
        let shared = |x, y| pixel_uv(x, y, resolution, Vec2::ONE);
        let framebuffer = render(&Gradient, shared, &0.5, resolution);

        for y in 0..resolution.height {
            for x in 0..resolution.width {
                assert_eq!(framebuffer.color_at(x, y), Gradient.fragment(&shared(x, y), &0.5));
            }
        }
        assert_eq!(framebuffer, render(&Gradient, shared, &0.5, resolution));
    }

    #[test]
    fn empty_resolution_renders_nothing() {
        let framebuffer = render(&Gradient, |_, _| Vec2::ZERO, &1.0, Resolution::new(0, 8));
        assert!(framebuffer.color.is_empty());
    }

    #[test]
    fn tinted_render_maps_texture_to_target() {
        let texture = Texture::from_fn(2, 1, |x, _| {
            if x == 0 { Vec4::new(1.0, 1.0, 1.0, 0.0) } else { Vec4::new(0.5, 0.5, 0.5, 1.0) }
        })
        .unwrap();
        let settings = Settings::default()
            .resolution(Resolution::new(4, 1))
            .tint(Tint::new(1.0, 0.5, 0.0).unwrap());

        let framebuffer = render_tinted(&texture, &settings);
        assert_eq!(framebuffer.color_at(0, 0), Vec4::new(1.0, 0.5, 0.0, 1.0));
        assert_eq!(framebuffer.color_at(1, 0), Vec4::new(1.0, 0.5, 0.0, 1.0));
        assert_eq!(framebuffer.color_at(3, 0), Vec4::new(0.5, 0.25, 0.0, 1.0));

        let framebuffer = render_tinted(&texture, &settings.alpha(AlphaMode::Texture));
        assert_eq!(framebuffer.color_at(0, 0).w, 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside 2x2 framebuffer")]
    fn color_at_rejects_column_past_width() {
        Framebuffer::new(Resolution::new(2, 2)).color_at(2, 0);
    }

    #[test]
    fn quantizes_to_rgba8() {
        let mut framebuffer = Framebuffer::new(Resolution::new(1, 1));
        framebuffer.color[0] = Vec4::new(2.0, -1.0, 0.5, 1.0);
        assert_eq!(framebuffer.to_rgba8().get_pixel(0, 0), &Rgba([255, 0, 128, 255]));
    }

    #[test]
    fn uv_scale_exercises_sampler() {
        let texture = Texture::from_fn(2, 1, |x, _| Vec4::splat(x as f32)).unwrap();
        let settings = Settings::default()
            .resolution(Resolution::new(4, 1))
            .uv_scale(Vec2::new(2.0, 1.0))
            .sampler(Sampler::default());
        let framebuffer = render_tinted(&texture, &settings);
        let red: Vec<f32> = framebuffer.color.iter().map(|c| c.x).collect();
        assert_eq!(red, vec![0.0, 1.0, 0.0, 1.0]);
    }
}
