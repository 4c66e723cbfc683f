//! Foundation types, constants, and rounding helpers.
//!
//! The small vocabulary every other module shares: coverage values,
//! integer rounding of real-valued geometry, and the [`Size`] of a canvas.

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round a double to the nearest unsigned integer (round half up).
#[inline]
pub fn uround(v: f64) -> u32 {
    (v + 0.5) as u32
}

/// Floor a double to the nearest integer toward negative infinity.
#[inline]
pub fn ifloor(v: f64) -> i32 {
    let i = v as i32;
    i - (i as f64 > v) as i32
}

/// Ceiling of a double as a signed integer.
#[inline]
pub fn iceil(v: f64) -> i32 {
    v.ceil() as i32
}

// ============================================================================
// Coverage
// ============================================================================

/// Coverage of a pixel by a shape, `0` (outside) to `COVER_FULL` (inside).
pub type CoverType = u8;

pub const COVER_SHIFT: u32 = 8;
pub const COVER_SIZE: u32 = 1 << COVER_SHIFT;
pub const COVER_MASK: u32 = COVER_SIZE - 1;
pub const COVER_NONE: CoverType = 0;
pub const COVER_FULL: CoverType = COVER_MASK as CoverType;

/// Convert a coverage fraction in `[0, 1]` to a cover value.
#[inline]
pub fn cover_from_fraction(f: f64) -> CoverType {
    if f <= 0.0 {
        COVER_NONE
    } else if f >= 1.0 {
        COVER_FULL
    } else {
        uround(f * COVER_MASK as f64) as CoverType
    }
}

// ============================================================================
// Size
// ============================================================================

/// Pixel dimensions of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Side of the largest square that fits.
    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }

    /// The largest square that fits, anchored at the origin.
    pub fn square(&self) -> Size {
        let side = self.min_side();
        Size::new(side, side)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel count, or `None` on overflow.
    pub fn area(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }
}
