//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Failure of a render, allocation, or decode step.
///
/// None of these are recoverable inside the crate: the call that hits one
/// returns it and leaves every caller-visible buffer untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// A render was requested before any source image was set.
    #[error("no source image to render")]
    MissingSourceImage,

    /// A pixel or mask buffer of the given dimensions could not be allocated.
    #[error("failed to allocate a {width}x{height} buffer")]
    AllocationFailure { width: u32, height: u32 },

    /// Raw pixel data does not match the declared dimensions.
    #[error("pixel data is {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// The host-side decoder could not read the image.
    #[cfg(feature = "decode")]
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
