//! Color type and 8-bit fixed-point helpers.
//!
//! `Rgba8` is a non-premultiplied RGBA color with one byte per channel, the
//! pixel format of every buffer in this crate. [`Rgba8::multiply`] is the
//! exact rounded fixed-point product the compositing code is built on.

use crate::basics::CoverType;

/// RGBA color with u8 components, non-premultiplied alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_SHIFT: u32 = 8;
    pub const BASE_MASK: u32 = (1 << Self::BASE_SHIFT) - 1;
    pub const BASE_MSB: u32 = 1 << (Self::BASE_SHIFT - 1);

    /// Fully transparent black.
    pub const TRANSPARENT: Rgba8 = Rgba8 {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub fn new(r: u32, g: u32, b: u32, a: u32) -> Self {
        Self {
            r: r as u8,
            g: g as u8,
            b: b as u8,
            a: a as u8,
        }
    }

    pub fn new_opaque(r: u32, g: u32, b: u32) -> Self {
        Self::new(r, g, b, Self::BASE_MASK)
    }

    /// Read a color from the first four bytes of `p` (R, G, B, A order).
    #[inline]
    pub fn from_slice(p: &[u8]) -> Self {
        Self {
            r: p[0],
            g: p[1],
            b: p[2],
            a: p[3],
        }
    }

    /// Write this color into the first four bytes of `p`.
    #[inline]
    pub fn write_to(&self, p: &mut [u8]) {
        p[0] = self.r;
        p[1] = self.g;
        p[2] = self.b;
        p[3] = self.a;
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == Self::BASE_MASK as u8
    }

    /// Fixed-point multiply, exact over u8: `round(a * b / 255)`.
    #[inline]
    pub fn multiply(a: u8, b: u8) -> u8 {
        let t: u32 = a as u32 * b as u32 + Self::BASE_MSB;
        (((t >> Self::BASE_SHIFT) + t) >> Self::BASE_SHIFT) as u8
    }

    /// Same color with alpha scaled by `cover`.
    #[inline]
    pub fn scaled_alpha(&self, cover: CoverType) -> Self {
        Self {
            a: Self::multiply(self.a, cover),
            ..*self
        }
    }
}
