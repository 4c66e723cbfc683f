//! End-to-end rendering scenarios: sizing, masking and compositing together.

use masked_image::resample::rescale;
use masked_image::sizing::resolve_axis;
use masked_image::{
    render_circle_mask, render_rounded_rect_mask, EdgeMode, Error, MaskMode, MaskShape,
    MaskedImageRenderer, MaskedImageView, MeasureSpec, Padding, PixelBuffer, RenderOptions, Rgba8,
    ScaleFilter, Size, ViewConfig,
};

/// A source with varying color and alpha so misplaced pixels show up.
fn gradient(w: u32, h: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::try_new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            let c = Rgba8::new(
                x * 255 / w.max(1),
                y * 255 / h.max(1),
                (x + y) % 256,
                128 + (x * 7 + y * 3) % 128,
            );
            buf.copy_pixel(x, y, &c);
        }
    }
    buf
}

fn opaque(w: u32, h: u32) -> PixelBuffer {
    PixelBuffer::filled(w, h, Rgba8::new_opaque(30, 60, 90)).unwrap()
}

#[test]
fn test_sizing_resolver_examples() {
    assert_eq!(resolve_axis(MeasureSpec::Exact(100), 50, 0, 0), 100);
    assert_eq!(resolve_axis(MeasureSpec::AtMost(100), 150, 0, 0), 100);
    assert_eq!(resolve_axis(MeasureSpec::AtMost(100), 50, 0, 0), 50);
    assert_eq!(resolve_axis(MeasureSpec::Unconstrained, 50, 2, 3), 55);
}

#[test]
fn test_circle_outside_is_transparent_inside_is_source() {
    let options = RenderOptions::default();
    for side in [1u32, 2, 7, 16, 33, 64] {
        let src = gradient(45, 30);
        let out = render_circle_mask(&src, Size::new(side + 9, side), &options).unwrap();
        assert_eq!(out.size(), Size::new(side, side));

        let scaled = rescale(&src, side, side, ScaleFilter::Nearest).unwrap();
        let r = side as f64 / 2.0;
        for y in 0..side {
            for x in 0..side {
                let dx = x as f64 + 0.5 - r;
                let dy = y as f64 + 0.5 - r;
                let p = out.pixel(x, y);
                if (dx * dx + dy * dy).sqrt() > r {
                    assert_eq!(p, Rgba8::TRANSPARENT, "side {side}, pixel ({x}, {y})");
                } else {
                    assert_eq!(p, scaled.pixel(x, y), "side {side}, pixel ({x}, {y})");
                }
            }
        }
    }
}

#[test]
fn test_rounded_rect_zero_radius_is_rescaled_source() {
    let src = gradient(300, 150);
    let size = Size::new(150, 80);
    let out = render_rounded_rect_mask(&src, size, 0, &RenderOptions::default()).unwrap();
    let scaled = rescale(&src, 150, 80, ScaleFilter::Nearest).unwrap();
    assert_eq!(out.as_bytes(), scaled.as_bytes());
}

#[test]
fn test_render_is_idempotent() {
    let src = gradient(120, 90);
    let shapes = [
        MaskShape::Circle,
        MaskShape::RoundedRect { corner_radius: 12 },
    ];
    for shape in shapes {
        for edge in [EdgeMode::Aliased, EdgeMode::AntiAliased] {
            let options = RenderOptions {
                edge,
                filter: ScaleFilter::Box,
            };
            let renderer = MaskedImageRenderer::new(shape, options);
            let a = renderer.render(Some(&src), Size::new(70, 50)).unwrap();
            let b = renderer.render(Some(&src), Size::new(70, 50)).unwrap();
            assert_eq!(a.as_bytes(), b.as_bytes());
        }
    }
}

#[test]
fn test_circle_scenario_square_source() {
    let src = opaque(200, 200);
    let mut view = MaskedImageView::new(ViewConfig::default(), Some(src));
    let size = view.measure(MeasureSpec::Exact(100), MeasureSpec::Exact(100));
    assert_eq!(size, Size::new(100, 100));

    let out = view.render().unwrap();
    assert_eq!(out.size(), Size::new(100, 100));
    // Opaque disk of radius 50
    assert!(out.pixel(50, 50).is_opaque());
    assert!(out.pixel(50, 0).is_opaque());
    assert!(out.pixel(0, 50).is_opaque());
    assert!(out.pixel(99, 50).is_opaque());
    // Transparent corners
    for (x, y) in [(0, 0), (99, 0), (0, 99), (99, 99), (10, 10), (89, 89)] {
        assert_eq!(out.pixel(x, y), Rgba8::TRANSPARENT, "corner ({x}, {y})");
    }
}

#[test]
fn test_rounded_rect_scenario() {
    let src = gradient(300, 150);
    let config = ViewConfig::default().with_mask(MaskMode::RoundedRect {
        border_radius: masked_image::Dimension::Px(20),
    });
    let mut view = MaskedImageView::new(config, Some(src.clone()));
    view.measure(MeasureSpec::Exact(150), MeasureSpec::Exact(80));
    let out = view.render().unwrap();
    assert_eq!(out.size(), Size::new(150, 80));

    let scaled = rescale(&src, 150, 80, ScaleFilter::Nearest).unwrap();
    let r = 20.0;
    let corners = [(r, r), (150.0 - r, r), (r, 80.0 - r), (150.0 - r, 80.0 - r)];
    for y in 0..80u32 {
        for x in 0..150u32 {
            let px = x as f64 + 0.5;
            let py = y as f64 + 0.5;
            let in_corner_box = (px < r || px > 150.0 - r) && (py < r || py > 80.0 - r);
            let outside_arc = in_corner_box
                && corners.iter().all(|&(cx, cy)| {
                    let dx = px - cx;
                    let dy = py - cy;
                    (dx * dx + dy * dy).sqrt() > r
                });
            if outside_arc {
                assert_eq!(out.pixel(x, y), Rgba8::TRANSPARENT, "pixel ({x}, {y})");
            } else {
                assert_eq!(out.pixel(x, y), scaled.pixel(x, y), "pixel ({x}, {y})");
            }
        }
    }
}

#[test]
fn test_oversize_radius_degenerates_without_error() {
    let src = opaque(16, 16);
    // Square: the rounded rect becomes a circle
    let out = render_rounded_rect_mask(&src, Size::new(12, 12), 500, &RenderOptions::default())
        .unwrap();
    let circle = render_circle_mask(&src, Size::new(12, 12), &RenderOptions::default()).unwrap();
    assert_eq!(out.as_bytes(), circle.as_bytes());

    // Wide rect: a stadium, full height in the middle, rounded ends
    let out = render_rounded_rect_mask(&src, Size::new(30, 6), 7, &RenderOptions::default())
        .unwrap();
    assert!(out.pixel(15, 0).is_opaque());
    assert!(out.pixel(15, 5).is_opaque());
    assert!(out.pixel(0, 3).is_opaque());
    assert_eq!(out.pixel(0, 0), Rgba8::TRANSPARENT);
    assert_eq!(out.pixel(29, 5), Rgba8::TRANSPARENT);

    // Tiny canvases
    for (w, h) in [(1, 1), (2, 1), (1, 3)] {
        let out = render_rounded_rect_mask(&src, Size::new(w, h), 9, &RenderOptions::default())
            .unwrap();
        assert_eq!(out.size(), Size::new(w, h));
    }
}

#[test]
fn test_missing_source_draws_nothing() {
    let config = ViewConfig::default().with_padding(Padding::uniform(4));
    let mut view = MaskedImageView::new(config, None);
    let size = view.measure(MeasureSpec::AtMost(50), MeasureSpec::Unconstrained);
    assert_eq!(size, Size::new(8, 8));

    let background = Rgba8::new_opaque(1, 2, 3);
    let mut surface = PixelBuffer::filled(8, 8, background).unwrap();
    let err = view.draw(&mut surface).unwrap_err();
    assert!(matches!(err, Error::MissingSourceImage));
    assert!((0..8).all(|y| (0..8).all(|x| surface.pixel(x, y) == background)));
}

#[test]
fn test_anti_aliased_edges_only_soften_the_boundary() {
    let src = opaque(80, 80);
    let aliased = render_circle_mask(&src, Size::new(80, 80), &RenderOptions::default()).unwrap();
    let smooth = render_circle_mask(
        &src,
        Size::new(80, 80),
        &RenderOptions {
            edge: EdgeMode::AntiAliased,
            filter: ScaleFilter::Nearest,
        },
    )
    .unwrap();
    let mut softened = 0;
    for y in 0..80 {
        for x in 0..80 {
            let a = aliased.pixel(x, y).a;
            let s = smooth.pixel(x, y).a;
            if a != s {
                softened += 1;
                assert!(s > 0 && s < 255, "pixel ({x}, {y}) alpha {s}");
            }
        }
    }
    assert!(softened > 0);
    assert!(smooth.pixel(40, 40).is_opaque());
    assert_eq!(smooth.pixel(2, 2), Rgba8::TRANSPARENT);
}

#[test]
fn test_view_with_density_uses_scaled_radius() {
    let src = opaque(40, 40);
    let config = ViewConfig::default()
        .with_mask(MaskMode::rounded())
        .with_density(2.0);
    assert_eq!(config.shape(), MaskShape::RoundedRect { corner_radius: 20 });
    let mut view = MaskedImageView::new(config, Some(src));
    view.measure(MeasureSpec::Unconstrained, MeasureSpec::Unconstrained);
    let out = view.render().unwrap();
    // Radius 20 on a 40x40 canvas is a full circle
    assert_eq!(out.pixel(3, 3), Rgba8::TRANSPARENT);
    assert!(out.pixel(20, 0).is_opaque());
}
