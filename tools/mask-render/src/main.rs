//! Render an image file clipped to a circle or rounded rectangle.
//!
//! Usage:
//!   mask-render <input> -o <output.png> [--mask circle|round] [--radius 10dp]
//!               [--width N | --max-width N] [--height N | --max-height N]
//!               [--padding N] [--density D] [--anti-alias] [--filter nearest|box]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use masked_image::decode::open_image;
use masked_image::{
    Dimension, EdgeMode, MaskMode, MaskedImageView, MeasureSpec, Padding, PixelBuffer,
    RenderOptions, ScaleFilter, ViewConfig,
};

#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Image to mask (PNG or JPEG)
    input: PathBuf,
    /// Where to write the masked PNG
    #[arg(long, short)]
    output: PathBuf,
    /// Mask shape: `circle` or `round`
    #[arg(long, default_value = "circle")]
    mask: MaskMode,
    /// Corner radius for `round`, e.g. `12px` or `10dp`
    #[arg(long)]
    radius: Option<Dimension>,
    /// Physical pixels per density-independent pixel
    #[arg(long, default_value_t = 1.0)]
    density: f32,
    /// Exact output width
    #[arg(long, conflicts_with = "max_width")]
    width: Option<u32>,
    /// Upper bound on the output width
    #[arg(long)]
    max_width: Option<u32>,
    /// Exact output height
    #[arg(long, conflicts_with = "max_height")]
    height: Option<u32>,
    /// Upper bound on the output height
    #[arg(long)]
    max_height: Option<u32>,
    /// Padding on every side, in pixels
    #[arg(long, default_value_t = 0)]
    padding: u32,
    /// Smooth the mask edge
    #[arg(long)]
    anti_alias: bool,
    /// Resampling filter
    #[arg(long, value_enum, default_value_t = Filter::Nearest)]
    filter: Filter,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Filter {
    Nearest,
    Box,
}

impl From<Filter> for ScaleFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Nearest => ScaleFilter::Nearest,
            Filter::Box => ScaleFilter::Box,
        }
    }
}

fn axis_spec(exact: Option<u32>, at_most: Option<u32>) -> MeasureSpec {
    match (exact, at_most) {
        (Some(n), _) => MeasureSpec::Exact(n),
        (None, Some(n)) => MeasureSpec::AtMost(n),
        (None, None) => MeasureSpec::Unconstrained,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mask = match (args.mask, args.radius) {
        (MaskMode::RoundedRect { .. }, Some(border_radius)) => {
            MaskMode::RoundedRect { border_radius }
        }
        (MaskMode::Circle, Some(_)) => bail!("--radius only applies to --mask round"),
        (mask, None) => mask,
    };
    if !(args.density.is_finite() && args.density > 0.0) {
        bail!("--density must be a positive number, got {}", args.density);
    }

    let source = open_image(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    info!(
        "loaded {} ({}x{})",
        args.input.display(),
        source.width(),
        source.height()
    );

    let config = ViewConfig::default()
        .with_mask(mask)
        .with_density(args.density)
        .with_padding(Padding::uniform(args.padding))
        .with_options(RenderOptions {
            edge: if args.anti_alias {
                EdgeMode::AntiAliased
            } else {
                EdgeMode::Aliased
            },
            filter: args.filter.into(),
        });
    let mut view = MaskedImageView::new(config, Some(source));
    let size = view.measure(
        axis_spec(args.width, args.max_width),
        axis_spec(args.height, args.max_height),
    );
    if size.is_empty() {
        bail!("output would be empty ({}x{})", size.width, size.height);
    }

    let mut surface = PixelBuffer::try_new(size.width, size.height)?;
    view.draw(&mut surface)?;
    surface
        .into_rgba_image()?
        .save_with_format(&args.output, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!(
        "Saved: {} ({}x{})",
        args.output.display(),
        size.width,
        size.height
    );
    Ok(())
}
