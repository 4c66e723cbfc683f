//! Rounded rectangle shape.
//!
//! A rectangle whose four corners are replaced by quarter-ellipse arcs of
//! equal radii. Radii larger than half the rectangle are accepted as given;
//! when the shape is rasterized they are scaled down uniformly so opposite
//! arcs meet, which turns an oversize radius into a stadium or an ellipse.

use crate::basics::Size;
use crate::rasterizer::ScanlineShape;

/// Rounded rectangle with uniform corner radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    rx: f64,
    ry: f64,
}

impl RoundedRect {
    /// Create a new rounded rectangle with uniform corner radius.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, r: f64) -> Self {
        let mut rr = Self {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 0.0,
            rx: 0.0,
            ry: 0.0,
        };
        rr.rect(x1, y1, x2, y2);
        rr.radius(r);
        rr
    }

    /// A rounded rectangle spanning a whole canvas.
    pub fn spanning(size: Size, r: f64) -> Self {
        Self::new(0.0, 0.0, size.width as f64, size.height as f64, r)
    }

    /// Set the rectangle coordinates.
    pub fn rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.x1 = x1.min(x2);
        self.x2 = x1.max(x2);
        self.y1 = y1.min(y2);
        self.y2 = y1.max(y2);
    }

    /// Set uniform corner radius.
    pub fn radius(&mut self, r: f64) {
        self.rx = r.abs();
        self.ry = r.abs();
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Corner radii as drawn.
    ///
    /// If two arcs on the same edge would overlap, both radii are scaled by
    /// the same factor until they just meet.
    pub fn effective_radii(&self) -> (f64, f64) {
        let w = self.x2 - self.x1;
        let h = self.y2 - self.y1;
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return (0.0, 0.0);
        }
        let mut k = 1.0_f64;
        let t = w / (self.rx * 2.0);
        if t < k {
            k = t;
        }
        let t = h / (self.ry * 2.0);
        if t < k {
            k = t;
        }
        (self.rx * k, self.ry * k)
    }
}

impl ScanlineShape for RoundedRect {
    fn hspan(&self, y: f64) -> Option<(f64, f64)> {
        if y < self.y1 || y > self.y2 || self.x1 >= self.x2 {
            return None;
        }
        let (rx, ry) = self.effective_radii();
        if rx <= 0.0 || ry <= 0.0 {
            return Some((self.x1, self.x2));
        }

        let top = self.y1 + ry;
        let bottom = self.y2 - ry;
        let dy = if y < top {
            top - y
        } else if y > bottom {
            y - bottom
        } else {
            return Some((self.x1, self.x2));
        };

        let t = (dy / ry).min(1.0);
        let dx = rx * (1.0 - t * t).sqrt();
        Some((self.x1 + rx - dx, self.x2 - rx + dx))
    }
}
