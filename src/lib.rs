//! # masked-image
//!
//! Renders a bitmap clipped to a circle or a rounded rectangle, the way an
//! avatar or thumbnail view in a GUI toolkit does.
//!
//! ## Architecture
//!
//! A render runs a short pipeline over in-memory RGBA8 buffers:
//!
//! 1. **Sizing**: layout constraints and the image's natural size resolve
//!    to a canvas size ([`sizing`]).
//! 2. **Resampling**: the source is stretched to the canvas without
//!    interpolation ([`resample`]).
//! 3. **Rasterization**: the mask shape ([`ellipse`], [`rounded_rect`]) is
//!    scanline-filled into an alpha mask ([`rasterizer`], [`alpha_mask`]).
//! 4. **Compositing**: the rescaled source is composited over the mask
//!    layer with source-in, keeping only the intersection ([`comp_op`]).
//!
//! [`renderer`] runs the pipeline for one [`MaskShape`];
//! [`view::MaskedImageView`] adds the host-facing `measure` / `draw` surface
//! on top of it.
//!
//! ```
//! use masked_image::{MaskedImageView, MeasureSpec, PixelBuffer, Rgba8, ViewConfig};
//!
//! let avatar = PixelBuffer::filled(64, 48, Rgba8::new_opaque(200, 80, 40))?;
//! let mut view = MaskedImageView::new(ViewConfig::default(), Some(avatar));
//! let size = view.measure(MeasureSpec::Exact(32), MeasureSpec::AtMost(100));
//! assert_eq!((size.width, size.height), (32, 48));
//!
//! let circle = view.render()?;
//! assert_eq!((circle.width(), circle.height()), (32, 32));
//! assert!(circle.pixel(0, 0).is_transparent());
//! # Ok::<(), masked_image::Error>(())
//! ```

// Foundation
pub mod basics;
pub mod color;
pub mod error;

// Buffers and geometry
pub mod alpha_mask;
pub mod ellipse;
pub mod rendering_buffer;
pub mod rounded_rect;

// Rasterization, resampling and compositing
pub mod comp_op;
pub mod rasterizer;
pub mod resample;

// Rendering and host surface
pub mod config;
pub mod renderer;
pub mod sizing;
pub mod view;

#[cfg(feature = "decode")]
pub mod decode;

pub use basics::Size;
pub use color::Rgba8;
pub use config::{Dimension, MaskMode, ViewConfig};
pub use error::{Error, Result};
pub use rasterizer::EdgeMode;
pub use renderer::{
    render_circle_mask, render_rounded_rect_mask, MaskShape, MaskedImageRenderer, RenderOptions,
};
pub use rendering_buffer::{PixelBuffer, RenderedImage, SourceImage};
pub use resample::ScaleFilter;
pub use sizing::{MeasureSpec, Padding};
pub use view::MaskedImageView;
