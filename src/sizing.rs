//! Sizing resolver: turns layout constraints into a canvas size.
//!
//! The host layout pass describes each axis with a [`MeasureSpec`]; the
//! natural size of the source image plus padding is the size the widget
//! would like. Resolution is a pure function of those inputs.

use crate::basics::Size;

/// Layout constraint for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeasureSpec {
    /// The parent dictates the size.
    Exact(u32),
    /// Any size up to the given bound.
    AtMost(u32),
    /// No constraint.
    #[default]
    Unconstrained,
}

impl MeasureSpec {
    pub const MODE_SHIFT: u32 = 30;
    pub const MODE_MASK: u32 = 0x3 << Self::MODE_SHIFT;
    pub const SIZE_MASK: u32 = !Self::MODE_MASK;

    pub const MODE_UNSPECIFIED: u32 = 0;
    pub const MODE_EXACTLY: u32 = 1 << Self::MODE_SHIFT;
    pub const MODE_AT_MOST: u32 = 2 << Self::MODE_SHIFT;

    /// Decode a packed spec (mode in the top two bits, size in the rest).
    ///
    /// The unused mode `0b11` decodes as `Unconstrained`.
    pub fn from_raw(raw: u32) -> Self {
        let size = raw & Self::SIZE_MASK;
        match raw & Self::MODE_MASK {
            Self::MODE_EXACTLY => MeasureSpec::Exact(size),
            Self::MODE_AT_MOST => MeasureSpec::AtMost(size),
            _ => MeasureSpec::Unconstrained,
        }
    }

    /// Encode as a packed spec. Sizes are truncated to 30 bits.
    pub fn to_raw(self) -> u32 {
        match self {
            MeasureSpec::Exact(size) => Self::MODE_EXACTLY | (size & Self::SIZE_MASK),
            MeasureSpec::AtMost(size) => Self::MODE_AT_MOST | (size & Self::SIZE_MASK),
            MeasureSpec::Unconstrained => Self::MODE_UNSPECIFIED,
        }
    }

    /// Resolve this axis against the size the content would like.
    pub fn resolve(self, desired: u32) -> u32 {
        match self {
            MeasureSpec::Exact(size) => size,
            MeasureSpec::AtMost(size) => desired.min(size),
            MeasureSpec::Unconstrained => desired,
        }
    }
}

/// Insets around the content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }

    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Resolve one axis: `natural` content size framed by two paddings.
pub fn resolve_axis(spec: MeasureSpec, natural: u32, before: u32, after: u32) -> u32 {
    let desired = before.saturating_add(after).saturating_add(natural);
    spec.resolve(desired)
}

/// Resolve both axes for content of `natural` size.
pub fn resolve(
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
    natural: Size,
    padding: &Padding,
) -> Size {
    Size::new(
        resolve_axis(width_spec, natural.width, padding.left, padding.right),
        resolve_axis(height_spec, natural.height, padding.top, padding.bottom),
    )
}
