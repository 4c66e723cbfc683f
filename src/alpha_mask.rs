//! Alpha mask, the mask layer a source image is clipped against.
//!
//! One coverage byte per pixel: `COVER_NONE` where the shape is absent,
//! `COVER_FULL` where it is fully present, anything in between along an
//! anti-aliased edge. Masks are filled by the scanline rasterizer and
//! consumed by the source-in compositor.

use crate::basics::{CoverType, Size, COVER_NONE};
use crate::error::Result;
use crate::rendering_buffer::try_alloc_zeroed;

/// Coverage buffer with bounds-checked access.
#[derive(Clone, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    covers: Vec<CoverType>,
}

impl AlphaMask {
    /// Create an empty (fully transparent) mask.
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        let covers = try_alloc_zeroed(Size::new(width, height).area(), width, height)?;
        Ok(Self {
            width,
            height,
            covers,
        })
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

    /// Coverage at (x, y); zero outside the mask.
    pub fn pixel(&self, x: i32, y: i32) -> CoverType {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            self.covers[y as usize * self.width as usize + x as usize]
        } else {
            COVER_NONE
        }
    }

    /// Coverage row `y`.
    pub fn row(&self, y: u32) -> &[CoverType] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let w = self.width as usize;
        &self.covers[y as usize * w..(y as usize + 1) * w]
    }

    /// Write `covers` into row `y` starting at `x`, clipped to the mask.
    pub fn fill_hspan(&mut self, x: i32, y: i32, covers: &[CoverType]) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let w = self.width as i32;
        let x1 = x.max(0);
        let x2 = (x + covers.len() as i32).min(w);
        if x1 >= x2 {
            return;
        }
        let row_start = y as usize * self.width as usize;
        let src = &covers[(x1 - x) as usize..(x2 - x) as usize];
        self.covers[row_start + x1 as usize..row_start + x2 as usize].copy_from_slice(src);
    }

    /// Set `len` pixels of row `y` starting at `x` to a single cover value.
    pub fn fill_hline(&mut self, x: i32, y: i32, len: u32, cover: CoverType) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x1 = x.max(0);
        let x2 = (x + len as i32).min(self.width as i32);
        if x1 >= x2 {
            return;
        }
        let row_start = y as usize * self.width as usize;
        self.covers[row_start + x1 as usize..row_start + x2 as usize].fill(cover);
    }

    /// Number of pixels with non-zero coverage.
    pub fn covered_pixels(&self) -> usize {
        self.covers.iter().filter(|&&c| c != COVER_NONE).count()
    }

    pub fn as_bytes(&self) -> &[CoverType] {
        &self.covers
    }
}

impl std::fmt::Debug for AlphaMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaMask")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
