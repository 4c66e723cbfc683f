//! Masked image renderer.
//!
//! Every render follows the same four steps:
//!
//! 1. Rescale the source to the canvas size (stretching, no aspect ratio).
//! 2. Rasterize the mask shape into an empty [`AlphaMask`].
//! 3. Lay the mask down as canvas alpha and composite the rescaled source
//!    over it with source-in.
//! 4. Hand the canvas to the caller.
//!
//! The source image is only read. Each call allocates its own working
//! copy, mask and canvas, so repeated calls with the same inputs produce
//! byte-identical results.

use log::trace;

use crate::alpha_mask::AlphaMask;
use crate::basics::Size;
use crate::comp_op::mask_source;
use crate::ellipse::Ellipse;
use crate::error::{Error, Result};
use crate::rasterizer::{EdgeMode, ScanlineRasterizer, ScanlineShape};
use crate::rendering_buffer::{RenderedImage, SourceImage};
use crate::resample::{rescale, ScaleFilter};
use crate::rounded_rect::RoundedRect;

/// Shape the source image is clipped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaskShape {
    /// Circle inscribed in the largest square that fits the canvas.
    #[default]
    Circle,
    /// Rectangle spanning the canvas with rounded corners.
    RoundedRect {
        /// Corner radius in pixels, used for both axes.
        corner_radius: u32,
    },
}

/// Rasterization and resampling settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RenderOptions {
    pub edge: EdgeMode,
    pub filter: ScaleFilter,
}

/// Renders a source image clipped to one mask shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaskedImageRenderer {
    shape: MaskShape,
    options: RenderOptions,
}

impl MaskedImageRenderer {
    pub fn new(shape: MaskShape, options: RenderOptions) -> Self {
        Self { shape, options }
    }

    pub fn shape(&self) -> MaskShape {
        self.shape
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Size of the image [`render`](Self::render) produces for a canvas of
    /// `size`: the largest square for a circle, the canvas itself otherwise.
    pub fn output_size(&self, size: Size) -> Size {
        match self.shape {
            MaskShape::Circle => size.square(),
            MaskShape::RoundedRect { .. } => size,
        }
    }

    /// Render `source` masked to this renderer's shape on a canvas of `size`.
    pub fn render(&self, source: Option<&SourceImage>, size: Size) -> Result<RenderedImage> {
        let source = source.ok_or(Error::MissingSourceImage)?;
        match self.shape {
            MaskShape::Circle => render_circle_mask(source, size, &self.options),
            MaskShape::RoundedRect { corner_radius } => {
                render_rounded_rect_mask(source, size, corner_radius, &self.options)
            }
        }
    }
}

/// Clip `source` to a circle.
///
/// The result is `side` x `side` with `side = min(width, height)`; the
/// circle has radius `side / 2` and is centred on the square.
pub fn render_circle_mask(
    source: &SourceImage,
    size: Size,
    options: &RenderOptions,
) -> Result<RenderedImage> {
    let side = size.min_side();
    let circle = Ellipse::inscribed(side);
    trace!(
        "circle mask: source {}x{} -> {side}x{side}, centre {:?}, radii {:?}, {:?}",
        source.width(),
        source.height(),
        circle.center(),
        circle.radii(),
        options
    );
    render_masked(source, Size::new(side, side), &circle, options)
}

/// Clip `source` to a rounded rectangle spanning a `size` canvas.
///
/// `corner_radius` is used as given; a radius of at least half the shorter
/// side produces a stadium or an ellipse.
pub fn render_rounded_rect_mask(
    source: &SourceImage,
    size: Size,
    corner_radius: u32,
    options: &RenderOptions,
) -> Result<RenderedImage> {
    let rect = RoundedRect::spanning(size, corner_radius as f64);
    trace!(
        "rounded rect mask: source {}x{} -> {:?}, radius {corner_radius} drawn as {:?}, {:?}",
        source.width(),
        source.height(),
        rect.bounds(),
        rect.effective_radii(),
        options
    );
    render_masked(source, size, &rect, options)
}

fn render_masked<S: ScanlineShape>(
    source: &SourceImage,
    size: Size,
    shape: &S,
    options: &RenderOptions,
) -> Result<RenderedImage> {
    let scaled = rescale(source, size.width, size.height, options.filter)?;
    let mut mask = AlphaMask::try_new(size.width, size.height)?;
    ScanlineRasterizer::new(options.edge).rasterize(shape, &mut mask)?;
    mask_source(&scaled, &mask)
}
