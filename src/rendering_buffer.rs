//! Rendering buffer: owned, row-oriented RGBA8 pixel storage.
//!
//! [`PixelBuffer`] is the one pixel container in the crate: source images,
//! rescaled working copies, rendered output and host drawing surfaces are
//! all `PixelBuffer`s. Rows are stored top-down and tightly packed
//! (`stride == width * 4`), channels in R, G, B, A order, alpha not
//! premultiplied.
//!
//! Every constructor allocates fallibly and reports
//! [`Error::AllocationFailure`] instead of aborting.

use crate::basics::Size;
use crate::color::Rgba8;
use crate::error::{Error, Result};

/// Bytes per pixel.
pub const BPP: usize = 4;

/// Allocate `len` zeroed bytes for a `width` x `height` buffer.
pub(crate) fn try_alloc_zeroed(len: Option<usize>, width: u32, height: u32) -> Result<Vec<u8>> {
    let failure = Error::AllocationFailure { width, height };
    let len = len.ok_or(failure)?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure { width, height })?;
    data.resize(len, 0);
    Ok(data)
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// Owned RGBA8 image.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// An image decoded by the host, read but never modified by rendering.
pub type SourceImage = PixelBuffer;

/// The result of a render, owned by the caller.
pub type RenderedImage = PixelBuffer;

impl PixelBuffer {
    /// Create a fully transparent buffer.
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        let len = Size::new(width, height)
            .area()
            .and_then(|n| n.checked_mul(BPP));
        let data = try_alloc_zeroed(len, width, height)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer filled with a solid color.
    pub fn filled(width: u32, height: u32, c: Rgba8) -> Result<Self> {
        let mut buf = Self::try_new(width, height)?;
        buf.clear(&c);
        Ok(buf)
    }

    /// Wrap existing RGBA8 bytes (top-down, tightly packed).
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Size::new(width, height)
            .area()
            .and_then(|n| n.checked_mul(BPP))
            .ok_or(Error::AllocationFailure { width, height })?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap bytes whose length is already known to be `width * height * 4`.
    #[cfg(feature = "decode")]
    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            Some(data.len()),
            Size::new(width, height)
                .area()
                .and_then(|n| n.checked_mul(BPP))
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * BPP
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get a safe immutable slice for row `y`.
    pub fn row_slice(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Get a safe mutable slice for row `y`.
    pub fn row_slice_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let stride = self.stride();
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    /// Get the pixel color at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let off = x as usize * BPP;
        Rgba8::from_slice(&self.row_slice(y)[off..off + BPP])
    }

    /// Copy (overwrite) a single pixel at (x, y) with color `c`.
    pub fn copy_pixel(&mut self, x: u32, y: u32, c: &Rgba8) {
        let off = x as usize * BPP;
        c.write_to(&mut self.row_slice_mut(y)[off..off + BPP]);
    }

    /// Overwrite every pixel with `c`.
    pub fn clear(&mut self, c: &Rgba8) {
        for p in self.data.chunks_exact_mut(BPP) {
            c.write_to(p);
        }
    }

    /// All pixel bytes, row after row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
