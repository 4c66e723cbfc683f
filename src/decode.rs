//! Host-side image decoding, built on the `image` crate.
//!
//! Only compiled with the `decode` feature. The renderer itself never
//! decodes anything; this is the collaborator a host uses to turn encoded
//! bytes into a [`SourceImage`].

use std::path::Path;

use crate::error::{Error, Result};
use crate::rendering_buffer::{PixelBuffer, SourceImage};

/// Decode PNG or JPEG bytes into a straight-alpha RGBA8 source image.
pub fn decode_image(bytes: &[u8]) -> Result<SourceImage> {
    let decoded = image::load_from_memory(bytes)?;
    Ok(decoded.into_rgba8().into())
}

/// Decode an image file.
pub fn open_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let decoded = image::open(path)?;
    Ok(decoded.into_rgba8().into())
}

impl From<image::RgbaImage> for PixelBuffer {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        // An `RgbaImage` always holds exactly width * height * 4 bytes.
        PixelBuffer::from_parts(width, height, img.into_raw())
    }
}

impl PixelBuffer {
    /// Convert into an `image` buffer, e.g. for encoding.
    pub fn into_rgba_image(self) -> Result<image::RgbaImage> {
        let (width, height) = (self.width(), self.height());
        let expected = self.stride() * height as usize;
        let data = self.into_raw();
        let actual = data.len();
        image::RgbaImage::from_raw(width, height, data)
            .ok_or(Error::BufferSize { expected, actual })
    }
}
