//! Scanline rasterizer that fills an alpha mask from an analytic shape.
//!
//! Shapes describe themselves one scanline at a time through
//! [`ScanlineShape::hspan`]. Both shapes in this crate are convex, so every
//! scanline crosses them in at most one interval.
//!
//! Two edge modes are supported:
//!
//! - [`EdgeMode::Aliased`]: a pixel is covered when its centre lies inside
//!   the shape. Every mask byte is either `COVER_NONE` or `COVER_FULL`.
//! - [`EdgeMode::AntiAliased`]: each pixel row is sampled on
//!   [`SUBPIXEL_ROWS`] sub-scanlines and the exact horizontal overlap of
//!   each span with the pixel is accumulated into a coverage fraction.

use crate::alpha_mask::AlphaMask;
use crate::basics::{cover_from_fraction, iceil, ifloor, CoverType, COVER_FULL};
use crate::error::{Error, Result};

/// Sub-scanlines sampled per pixel row in anti-aliased mode.
pub const SUBPIXEL_ROWS: u32 = 4;

/// A shape that can report its horizontal extent on a scanline.
pub trait ScanlineShape {
    /// The closed interval `[x1, x2]` covered on horizontal line `y`, in
    /// canvas coordinates, or `None` if the line misses the shape.
    fn hspan(&self, y: f64) -> Option<(f64, f64)>;
}

/// How pixels along the shape boundary are covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeMode {
    /// Binary coverage sampled at pixel centres.
    #[default]
    Aliased,
    /// Fractional area coverage.
    AntiAliased,
}

/// Rasterizer with a reusable coverage accumulator.
pub struct ScanlineRasterizer {
    edge: EdgeMode,
    accum: Vec<f64>,
    covers: Vec<CoverType>,
}

impl ScanlineRasterizer {
    pub fn new(edge: EdgeMode) -> Self {
        Self {
            edge,
            accum: Vec::new(),
            covers: Vec::new(),
        }
    }

    /// Fill `mask` with the coverage of `shape`.
    ///
    /// The mask is written row by row; pixels outside the shape keep the
    /// value they already had.
    pub fn rasterize<S: ScanlineShape>(&mut self, shape: &S, mask: &mut AlphaMask) -> Result<()> {
        match self.edge {
            EdgeMode::Aliased => {
                render_aliased(shape, mask);
                Ok(())
            }
            EdgeMode::AntiAliased => self.render_anti_aliased(shape, mask),
        }
    }

    fn render_anti_aliased<S: ScanlineShape>(
        &mut self,
        shape: &S,
        mask: &mut AlphaMask,
    ) -> Result<()> {
        let width = mask.width() as usize;
        if self.accum.len() < width {
            let failure = || Error::AllocationFailure {
                width: mask.width(),
                height: 1,
            };
            self.accum
                .try_reserve_exact(width - self.accum.len())
                .map_err(|_| failure())?;
            self.covers
                .try_reserve_exact(width - self.covers.len())
                .map_err(|_| failure())?;
            self.accum.resize(width, 0.0);
            self.covers.resize(width, 0);
        }

        let w = mask.width() as f64;
        let step = 1.0 / SUBPIXEL_ROWS as f64;
        for y in 0..mask.height() as i32 {
            let accum = &mut self.accum[..width];
            accum.fill(0.0);
            let mut min_x = width;
            let mut max_x = 0usize;

            for sub in 0..SUBPIXEL_ROWS {
                let sy = y as f64 + (sub as f64 + 0.5) * step;
                let Some((x1, x2)) = shape.hspan(sy) else {
                    continue;
                };
                let x1 = x1.max(0.0);
                let x2 = x2.min(w);
                if x1 >= x2 {
                    continue;
                }
                let first = ifloor(x1).max(0) as usize;
                let last = (iceil(x2) as usize).min(width);
                for (px, a) in accum.iter_mut().enumerate().take(last).skip(first) {
                    let left = x1.max(px as f64);
                    let right = x2.min(px as f64 + 1.0);
                    if right > left {
                        *a += right - left;
                    }
                }
                min_x = min_x.min(first);
                max_x = max_x.max(last);
            }

            if min_x >= max_x {
                continue;
            }
            for px in min_x..max_x {
                self.covers[px] = cover_from_fraction(self.accum[px] * step);
            }
            mask.fill_hspan(min_x as i32, y, &self.covers[min_x..max_x]);
        }
        Ok(())
    }
}

/// Pixel-centre sampling: pixel x on row y is covered iff
/// `x1 <= x + 0.5 <= x2` for the span at `y + 0.5`.
fn render_aliased<S: ScanlineShape>(shape: &S, mask: &mut AlphaMask) {
    let w = mask.width() as i32;
    for y in 0..mask.height() as i32 {
        let Some((x1, x2)) = shape.hspan(y as f64 + 0.5) else {
            continue;
        };
        let first = iceil(x1 - 0.5).max(0);
        let last = ifloor(x2 - 0.5).min(w - 1);
        if first > last {
            continue;
        }
        mask.fill_hline(first, y, (last - first + 1) as u32, COVER_FULL);
    }
}
