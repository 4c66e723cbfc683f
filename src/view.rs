//! Host-facing masked image view.
//!
//! [`MaskedImageView`] is what a toolkit binding drives: the layout pass
//! calls [`measure`](MaskedImageView::measure), the drawing pass calls
//! [`draw`](MaskedImageView::draw) with the surface to paint on. The view
//! owns its configuration and an immutable source image; the last rendered
//! image is cached until the measured size or the source changes.

use log::{debug, warn};

use crate::basics::Size;
use crate::comp_op::{blend_from, CompOp};
use crate::config::ViewConfig;
use crate::error::Result;
use crate::renderer::MaskedImageRenderer;
use crate::rendering_buffer::{PixelBuffer, RenderedImage, SourceImage};
use crate::sizing::{resolve, MeasureSpec};

/// Last rendered image and the canvas size it was rendered for.
#[derive(Debug, Default)]
struct RenderCache {
    entry: Option<(Size, RenderedImage)>,
}

impl RenderCache {
    fn get(&self, size: Size) -> Option<&RenderedImage> {
        match &self.entry {
            Some((cached, image)) if *cached == size => Some(image),
            _ => None,
        }
    }

    fn insert(&mut self, size: Size, image: RenderedImage) -> &RenderedImage {
        &self.entry.insert((size, image)).1
    }

    fn clear(&mut self) {
        self.entry = None;
    }
}

/// A view that displays an image clipped to a circle or rounded rectangle.
#[derive(Debug)]
pub struct MaskedImageView {
    config: ViewConfig,
    renderer: MaskedImageRenderer,
    source: Option<SourceImage>,
    measured: Size,
    cache: RenderCache,
}

impl MaskedImageView {
    pub fn new(config: ViewConfig, source: Option<SourceImage>) -> Self {
        let renderer = MaskedImageRenderer::new(config.shape(), config.options);
        Self {
            config,
            renderer,
            source,
            measured: Size::ZERO,
            cache: RenderCache::default(),
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn renderer(&self) -> &MaskedImageRenderer {
        &self.renderer
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    /// Replace the source image. The next draw renders from scratch.
    pub fn set_source(&mut self, source: Option<SourceImage>) {
        self.source = source;
        self.cache.clear();
    }

    /// Size from the most recent [`measure`](Self::measure).
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Resolve the view size for the given constraints and remember it.
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let natural = match &self.source {
            Some(source) => source.size(),
            None => {
                warn!("measuring masked image view without a source image");
                Size::ZERO
            }
        };
        self.measured = resolve(width_spec, height_spec, natural, &self.config.padding);
        debug!(
            "measured {:?} x {:?} with natural {}x{} -> {}x{}",
            width_spec,
            height_spec,
            natural.width,
            natural.height,
            self.measured.width,
            self.measured.height
        );
        self.measured
    }

    /// Render the masked image at the measured size.
    ///
    /// Always renders afresh and returns an image the caller owns.
    pub fn render(&self) -> Result<RenderedImage> {
        self.renderer.render(self.source.as_ref(), self.measured)
    }

    /// Paint the masked image onto `surface` at the origin.
    ///
    /// On error nothing is painted.
    pub fn draw(&mut self, surface: &mut PixelBuffer) -> Result<()> {
        let size = self.measured;
        if self.cache.get(size).is_none() {
            debug!("render cache miss at {}x{}", size.width, size.height);
            let image = self.render().map_err(|e| {
                if self.source.is_none() {
                    warn!("drawing masked image view without a source image");
                }
                e
            })?;
            self.cache.insert(size, image);
        }
        if let Some(image) = self.cache.get(size) {
            blend_from(surface, image, 0, 0, CompOp::SrcOver);
        }
        Ok(())
    }
}
