use std::{error::Error, path::PathBuf};

use clap::{Parser, ValueEnum};
use tinted::{
    AddressMode, AlphaMode, Filter, Resolution, Sampler, Settings, Texture, Tint,
    glam::{Vec2, Vec4},
};

/// Shades a procedural checkerboard with a tint and writes it as a PNG.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Where to write the PNG.
    output: PathBuf,
    /// Tint as `#rrggbb`.
    #[arg(long, default_value = "#ffffff")]
    tint: Tint,
    #[arg(long, default_value_t = 512)]
    width: u32,
    #[arg(long, default_value_t = 512)]
    height: u32,
    #[arg(long, value_enum, default_value_t = Address::Repeat)]
    address_mode: Address,
    #[arg(long, value_enum, default_value_t = FilterArg::Nearest)]
    filter: FilterArg,
    #[arg(long, value_enum, default_value_t = Alpha::Opaque)]
    alpha: Alpha,
    /// How many times the texture repeats across the output.
    #[arg(long, default_value_t = 1.0)]
    uv_scale: f32,
    /// Checkerboard cells per side.
    #[arg(long, default_value_t = 8)]
    checker: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Address {
    Repeat,
    Mirror,
    Clamp,
}

impl From<Address> for AddressMode {
    fn from(address: Address) -> Self {
        match address {
            Address::Repeat => AddressMode::Repeat,
            Address::Mirror => AddressMode::MirroredRepeat,
            Address::Clamp => AddressMode::ClampToEdge,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterArg {
    Nearest,
    Linear,
}

impl From<FilterArg> for Filter {
    fn from(filter: FilterArg) -> Self {
        match filter {
            FilterArg::Nearest => Filter::Nearest,
            FilterArg::Linear => Filter::Linear,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Alpha {
    Opaque,
    Texture,
}

impl From<Alpha> for AlphaMode {
    fn from(alpha: Alpha) -> Self {
        match alpha {
            Alpha::Opaque => AlphaMode::Opaque,
            Alpha::Texture => AlphaMode::Texture,
        }
    }
}

// Opaque white and half-transparent grey cells.
fn checkerboard(cells: u32) -> tinted::Result<Texture> {
    Texture::from_fn(cells, cells, |x, y| match (x + y) % 2 {
        0 => Vec4::ONE,
        _ => Vec4::new(0.5, 0.5, 0.5, 0.5),
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let texture = checkerboard(args.checker)?;
    let settings = Settings::default()
        .resolution(Resolution::new(args.width, args.height))
        .sampler(Sampler::new(args.address_mode.into(), args.filter.into()))
        .tint(args.tint)
        .alpha(args.alpha.into())
        .uv_scale(Vec2::splat(args.uv_scale));

    let framebuffer = tinted::render_tinted(&texture, &settings);
    framebuffer
        .to_rgba8()
        .save(&args.output)
        .map_err(tinted::Error::from)?;

    log::info!("preview - wrote {} ({}x{})", args.output.display(), args.width, args.height);
    Ok(())
}
