//! Non-interpolating image rescaling.
//!
//! Images are stretched to the requested size on each axis independently;
//! aspect ratio is not preserved. Neither filter blends neighbouring pixels
//! along an edge the way bilinear filtering does:
//!
//! - [`ScaleFilter::Nearest`] picks the source pixel under each destination
//!   pixel centre.
//! - [`ScaleFilter::Box`] averages the block of source pixels a destination
//!   pixel covers (alpha-weighted), which only matters when shrinking.

use crate::color::Rgba8;
use crate::error::Result;
use crate::rendering_buffer::{PixelBuffer, BPP};

/// Resampling filter used when rescaling a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleFilter {
    #[default]
    Nearest,
    Box,
}

/// Rescale `src` to `width` x `height`.
///
/// Always returns a newly allocated buffer, even when the size is
/// unchanged. An empty source yields a transparent result.
pub fn rescale(
    src: &PixelBuffer,
    width: u32,
    height: u32,
    filter: ScaleFilter,
) -> Result<PixelBuffer> {
    let mut dst = PixelBuffer::try_new(width, height)?;
    if src.is_empty() || dst.is_empty() {
        return Ok(dst);
    }
    match filter {
        ScaleFilter::Nearest => scale_nearest(src, &mut dst),
        ScaleFilter::Box => scale_box(src, &mut dst),
    }
    Ok(dst)
}

/// Source coordinate under the centre of destination pixel `d`.
#[inline]
fn nearest_index(d: u32, src_len: u32, dst_len: u32) -> u32 {
    let s = ((2 * d as u64 + 1) * src_len as u64) / (2 * dst_len as u64);
    (s as u32).min(src_len - 1)
}

/// Source range `[start, end)` covered by destination pixel `d`.
#[inline]
fn box_range(d: u32, src_len: u32, dst_len: u32) -> (u32, u32) {
    let start = (d as u64 * src_len as u64 / dst_len as u64) as u32;
    let end = (((d as u64 + 1) * src_len as u64 + dst_len as u64 - 1) / dst_len as u64) as u32;
    let start = start.min(src_len - 1);
    (start, end.clamp(start + 1, src_len))
}

fn scale_nearest(src: &PixelBuffer, dst: &mut PixelBuffer) {
    let (sw, sh) = (src.width(), src.height());
    let (dw, dh) = (dst.width(), dst.height());
    for y in 0..dh {
        let src_row = src.row_slice(nearest_index(y, sh, dh));
        let dst_row = dst.row_slice_mut(y);
        for (x, p) in dst_row.chunks_exact_mut(BPP).enumerate() {
            let sx = nearest_index(x as u32, sw, dw) as usize * BPP;
            p.copy_from_slice(&src_row[sx..sx + BPP]);
        }
    }
}

fn scale_box(src: &PixelBuffer, dst: &mut PixelBuffer) {
    let (sw, sh) = (src.width(), src.height());
    let (dw, dh) = (dst.width(), dst.height());
    for y in 0..dh {
        let (sy0, sy1) = box_range(y, sh, dh);
        for x in 0..dw {
            let (sx0, sx1) = box_range(x, sw, dw);
            let mut sum = [0u64; 4];
            let mut count = 0u64;
            for sy in sy0..sy1 {
                let row = src.row_slice(sy);
                for sx in sx0..sx1 {
                    let off = sx as usize * BPP;
                    let c = Rgba8::from_slice(&row[off..off + BPP]);
                    let a = c.a as u64;
                    sum[0] += c.r as u64 * a;
                    sum[1] += c.g as u64 * a;
                    sum[2] += c.b as u64 * a;
                    sum[3] += a;
                    count += 1;
                }
            }
            let c = if sum[3] == 0 {
                Rgba8::TRANSPARENT
            } else {
                let a = sum[3];
                Rgba8::new(
                    ((sum[0] + a / 2) / a) as u32,
                    ((sum[1] + a / 2) / a) as u32,
                    ((sum[2] + a / 2) / a) as u32,
                    ((a + count / 2) / count) as u32,
                )
            };
            dst.copy_pixel(x, y, &c);
        }
    }
}
