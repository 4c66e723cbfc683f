//! Compositing operations on non-premultiplied RGBA8 pixels.
//!
//! Two Porter-Duff operators are needed:
//!
//! - [`CompOp::SrcIn`] clips a source image against the canvas alpha. With
//!   the mask layer drawn into the canvas first, this is the alpha-mask
//!   intersection that produces the final masked image.
//! - [`CompOp::SrcOver`] places a finished image on a host surface.

use crate::alpha_mask::AlphaMask;
use crate::color::Rgba8;
use crate::error::Result;
use crate::rendering_buffer::{PixelBuffer, BPP};

/// Porter-Duff compositing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompOp {
    /// `Dc' = Sc`, `Da' = Sa.Da`; transparent wherever `Da == 0`.
    SrcIn,
    /// `Da' = Sa + Da.(1 - Sa)`, colors weighted by their alpha.
    #[default]
    SrcOver,
}

impl CompOp {
    /// Blend source color `s` into the pixel stored in `p`.
    #[inline]
    pub fn blend_pix(self, p: &mut [u8], s: &Rgba8) {
        match self {
            CompOp::SrcIn => blend_src_in(p, s),
            CompOp::SrcOver => blend_src_over(p, s),
        }
    }
}

// ---- SrcIn: Dca' = Sca.Da, Da' = Sa.Da
#[inline]
fn blend_src_in(p: &mut [u8], s: &Rgba8) {
    let da = p[3];
    if da == 0 {
        Rgba8::TRANSPARENT.write_to(p);
    } else {
        s.scaled_alpha(da).write_to(p);
    }
}

// ---- SrcOver: Dca' = Sca + Dca.(1 - Sa), Da' = Sa + Da.(1 - Sa)
#[inline]
fn blend_src_over(p: &mut [u8], s: &Rgba8) {
    if s.is_transparent() {
        return;
    }
    if s.is_opaque() {
        s.write_to(p);
        return;
    }
    let sa = s.a as u32;
    let da = Rgba8::multiply(p[3], 255 - s.a) as u32;
    let oa = sa + da;
    if oa == 0 {
        Rgba8::TRANSPARENT.write_to(p);
        return;
    }
    let mix = |sc: u8, dc: u8| ((sc as u32 * sa + dc as u32 * da + oa / 2) / oa) as u8;
    p[0] = mix(s.r, p[0]);
    p[1] = mix(s.g, p[1]);
    p[2] = mix(s.b, p[2]);
    p[3] = oa as u8;
}

/// Clip `source` to `mask`: the mask layer is laid down as canvas alpha,
/// then the source is composited over it with [`CompOp::SrcIn`].
///
/// Pixels with full coverage reproduce the source exactly, pixels with no
/// coverage are fully transparent, and partial coverage scales the source
/// alpha.
///
/// # Panics
/// If `source` and `mask` differ in size.
pub fn mask_source(source: &PixelBuffer, mask: &AlphaMask) -> Result<PixelBuffer> {
    assert_eq!(
        source.size(),
        mask.size(),
        "source and mask must have the same size"
    );
    let mut canvas = PixelBuffer::try_new(mask.width(), mask.height())?;
    for y in 0..mask.height() {
        let covers = mask.row(y);
        let src = source.row_slice(y);
        let dst = canvas.row_slice_mut(y);
        for ((p, s), &cover) in dst
            .chunks_exact_mut(BPP)
            .zip(src.chunks_exact(BPP))
            .zip(covers)
        {
            p[3] = cover;
            CompOp::SrcIn.blend_pix(p, &Rgba8::from_slice(s));
        }
    }
    Ok(canvas)
}

/// Composite `src` onto `dst` with its top-left corner at (x, y), clipped
/// to `dst`.
pub fn blend_from(dst: &mut PixelBuffer, src: &PixelBuffer, x: i32, y: i32, op: CompOp) {
    let x1 = x.max(0);
    let y1 = y.max(0);
    let x2 = (x as i64 + src.width() as i64).min(dst.width() as i64) as i32;
    let y2 = (y as i64 + src.height() as i64).min(dst.height() as i64) as i32;
    if x1 >= x2 || y1 >= y2 {
        return;
    }
    for dy in y1..y2 {
        let src_row = src.row_slice((dy - y) as u32);
        let dst_row = dst.row_slice_mut(dy as u32);
        for dx in x1..x2 {
            let so = (dx - x) as usize * BPP;
            let doff = dx as usize * BPP;
            let s = Rgba8::from_slice(&src_row[so..so + BPP]);
            op.blend_pix(&mut dst_row[doff..doff + BPP], &s);
        }
    }
}
