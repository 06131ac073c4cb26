//! Validated RGB tints and their conversion into the uniform block.
use std::{fmt, str::FromStr};

use tinted_gpu::{TintUniform, glam::Vec3};

use crate::{Error, Result, settings::AlphaMode};

/// A uniform RGB tint. Every component is finite; values above 1.0 brighten.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tint(Vec3);

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum HsvError {
    #[error("hue {0} outside 0..360")]
    HueOutOfRange(f32),
    #[error("saturation {0} outside 0.0..=1.0")]
    SaturationOutOfRange(f32),
    #[error("value {0} outside 0.0..=1.0")]
    ValueOutOfRange(f32),
}

impl Tint {
    pub const WHITE: Tint = Tint(Vec3::ONE);
    pub const BLACK: Tint = Tint(Vec3::ZERO);
    pub const RED: Tint = Tint(Vec3::X);
    pub const GREEN: Tint = Tint(Vec3::Y);
    pub const BLUE: Tint = Tint(Vec3::Z);

    pub fn new(r: f32, g: f32, b: f32) -> Result<Self> {
        if !(r.is_finite() && g.is_finite() && b.is_finite()) {
            return Err(Error::NonFiniteTint { r, g, b });
        }
        Ok(Self(Vec3::new(r, g, b)))
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self(Vec3::new(r as f32, g as f32, b as f32) / 255.0)
    }

    /// `0xRRGGBB`; bits above the low 24 are ignored.
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgb8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// `hue` in degrees `[0, 360)`, `sat` and `val` in `[0, 1]`.
    pub fn from_hsv(hue: f32, sat: f32, val: f32) -> Result<Self> {
        if !(0.0..360.0).contains(&hue) {
            return Err(HsvError::HueOutOfRange(hue).into());
        }
        if !(0.0..=1.0).contains(&sat) {
            return Err(HsvError::SaturationOutOfRange(sat).into());
        }
        if !(0.0..=1.0).contains(&val) {
            return Err(HsvError::ValueOutOfRange(val).into());
        }

        let c = val * sat;
        let sector = hue / 60.0;
        let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = val - c;

        Ok(Self(Vec3::new(r + m, g + m, b + m)))
    }

    pub fn rgb(&self) -> Vec3 {
        self.0
    }

    /// Components clamped to `[0, 1]` and rounded to 8 bits.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let [r, g, b] = self
            .0
            .clamp(Vec3::ZERO, Vec3::ONE)
            .to_array()
            .map(|c| (c * 255.0).round() as u8);
        (r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        let (r, g, b) = self.to_rgb8();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }

    pub fn uniform(&self, alpha: AlphaMode) -> TintUniform {
        TintUniform::default()
            .color(self.0)
            .alpha_mode(alpha.as_uniform())
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tint({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

/// Parses `#rrggbb` or `rrggbb`.
impl FromStr for Tint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(s.to_owned()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_| Error::InvalidHex(s.to_owned()))
    }
}
