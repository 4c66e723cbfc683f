//! Ellipse shape.
//!
//! An axis-aligned ellipse described analytically, so the rasterizer can ask
//! for its exact horizontal extent on any scanline instead of flattening it
//! to a polygon first.

use crate::rasterizer::ScanlineShape;

/// Axis-aligned ellipse centred at (x, y) with radii (rx, ry).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    x: f64,
    y: f64,
    rx: f64,
    ry: f64,
}

impl Ellipse {
    pub fn new(x: f64, y: f64, rx: f64, ry: f64) -> Self {
        Self {
            x,
            y,
            rx: rx.abs(),
            ry: ry.abs(),
        }
    }

    pub fn circle(x: f64, y: f64, r: f64) -> Self {
        Self::new(x, y, r, r)
    }

    /// The largest circle that fits a square canvas of `side` pixels:
    /// radius `side / 2`, centred at `(side / 2, side / 2)`.
    ///
    /// The centre is not truncated to whole pixels, so on an odd side the
    /// last row and column are covered like the first ones.
    pub fn inscribed(side: u32) -> Self {
        let r = side as f64 / 2.0;
        Self::circle(r, r, r)
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn radii(&self) -> (f64, f64) {
        (self.rx, self.ry)
    }
}

impl ScanlineShape for Ellipse {
    fn hspan(&self, y: f64) -> Option<(f64, f64)> {
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return None;
        }
        let t = (y - self.y) / self.ry;
        if t.abs() > 1.0 {
            return None;
        }
        let dx = self.rx * (1.0 - t * t).sqrt();
        Some((self.x - dx, self.x + dx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inscribed_circle() {
        let e = Ellipse::inscribed(100);
        assert_eq!(e.center(), (50.0, 50.0));
        assert_eq!(e.radii(), (50.0, 50.0));
    }

    #[test]
    fn test_inscribed_odd_side_uses_real_center() {
        let e = Ellipse::inscribed(5);
        assert_eq!(e.center(), (2.5, 2.5));
        assert_eq!(e.radii(), (2.5, 2.5));
    }

    #[test]
    fn test_hspan_through_center_is_diameter() {
        let e = Ellipse::circle(10.0, 10.0, 5.0);
        let (l, r) = e.hspan(10.0).unwrap();
        assert!((l - 5.0).abs() < 1e-12);
        assert!((r - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_hspan_narrows_towards_poles() {
        let e = Ellipse::new(0.0, 0.0, 8.0, 4.0);
        let (l0, r0) = e.hspan(0.0).unwrap();
        let (l1, r1) = e.hspan(3.0).unwrap();
        assert!(r1 - l1 < r0 - l0);
        // At the pole the span collapses to a point
        let (lp, rp) = e.hspan(4.0).unwrap();
        assert!((rp - lp).abs() < 1e-12);
        assert!(e.hspan(4.01).is_none());
        assert!(e.hspan(-4.01).is_none());
    }

    #[test]
    fn test_degenerate_radius_has_no_span() {
        let e = Ellipse::circle(3.0, 3.0, 0.0);
        assert!(e.hspan(3.0).is_none());
    }
}
