//! Paints a [`Scene`] into a `vello_cpu` pixmap.
//!
//! This module is always available (no feature gate) so that callers which
//! only need pixels do not pull in the `image` crate.

use poster_core::{Color, Layer, PosterError, Scene};
use vello_cpu::kurbo::{Affine, BezPath, Point, Rect};
use vello_cpu::peniko::{self, Fill};
use vello_cpu::{Pixmap, RenderContext};

use crate::title::TitleFont;
use crate::RasterOptions;

/// A rendered poster. Every pixel is opaque, so the premultiplied pixmap
/// bytes are also straight RGBA8.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn width(&self) -> usize {
        usize::from(self.pixmap.width())
    }

    pub fn height(&self) -> usize {
        usize::from(self.pixmap.height())
    }

    /// RGBA8 at `(x, y)`, with `y` counted from the top row.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width() + x) * 4;
        let data = self.pixmap.data_as_u8_slice();
        [data[i], data[i + 1], data[i + 2], data[i + 3]]
    }

    /// Row-major RGBA8, `width * height * 4` bytes.
    pub fn as_rgba8(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    pub fn into_rgba8(self) -> Vec<u8> {
        self.pixmap.data_as_u8_slice().to_vec()
    }
}

fn paint(color: Color) -> peniko::Color {
    let [r, g, b] = color.to_rgb8();
    peniko::Color::from_rgba8(r, g, b, 255)
}

/// Closed outline of a layer in poster space.
fn layer_path(layer: &Layer) -> BezPath {
    let mut path = BezPath::new();
    let mut points = layer.path.points().iter();
    if let Some(first) = points.next() {
        path.move_to(Point::new(first.x, first.y));
        for p in points {
            path.line_to(Point::new(p.x, p.y));
        }
        path.close_path();
    }
    path
}

/// Maps the unit square (y up) onto the full pixmap (y down).
fn poster_transform(width: u16, height: u16) -> Affine {
    let (w, h) = (f64::from(width), f64::from(height));
    Affine::new([w, 0.0, 0.0, -h, 0.0, h])
}

fn paint_scene(
    scene: &Scene,
    options: &RasterOptions,
    title: Option<&mut TitleFont>,
) -> Result<Canvas, PosterError> {
    let (w, h) = options.pixmap_size()?;
    let mut ctx = RenderContext::new(w, h);
    ctx.set_fill_rule(Fill::NonZero);
    ctx.set_transform(poster_transform(w, h));

    ctx.set_paint(paint(scene.background));
    ctx.fill_rect(&Rect::new(0.0, 0.0, 1.0, 1.0));

    for layer in &scene.layers {
        let opacity = layer.opacity.clamp(0.0, 1.0) as f32;
        ctx.set_paint(paint(layer.color));
        if opacity < 1.0 {
            ctx.push_opacity_layer(opacity);
        }
        ctx.fill_path(&layer_path(layer));
        if opacity < 1.0 {
            ctx.pop_layer();
        }
    }

    if let Some(font) = title {
        font.draw(&mut ctx, &scene.title, w, h);
    }

    let mut pixmap = Pixmap::new(w, h);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    tracing::debug!(width = w, height = h, layers = scene.len(), "scene rasterized");
    Ok(Canvas { pixmap })
}

/// Paints the background and then every layer in order.
///
/// Returns `PosterError::InvalidDimensions` if `options` fails
/// [`RasterOptions::validate`].
pub fn compose_canvas(scene: &Scene, options: &RasterOptions) -> Result<Canvas, PosterError> {
    paint_scene(scene, options, None)
}

/// Like [`compose_canvas`], then draws `scene.title` on top in `font`.
pub fn compose_canvas_with_title(
    scene: &Scene,
    options: &RasterOptions,
    font: &mut TitleFont,
) -> Result<Canvas, PosterError> {
    paint_scene(scene, options, Some(font))
}

/// Rasterizes `scene` into a `width * height * 4` RGBA8 buffer.
pub fn rasterize(scene: &Scene, options: &RasterOptions) -> Result<Vec<u8>, PosterError> {
    compose_canvas(scene, options).map(Canvas::into_rgba8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use poster_core::{compose_poster, GenerationParams, Palette, Path, ShapeKind};

    fn rect_layer(x0: f64, y0: f64, x1: f64, y1: f64, color: Color, opacity: f64) -> Layer {
        Layer {
            path: Path::new(vec![
                DVec2::new(x0, y0),
                DVec2::new(x1, y0),
                DVec2::new(x1, y1),
                DVec2::new(x0, y1),
            ]),
            color,
            opacity,
            center: DVec2::new((x0 + x1) / 2.0, (y0 + y1) / 2.0),
            radius: 0.0,
        }
    }

    fn scene(layers: Vec<Layer>) -> Scene {
        Scene {
            title: String::new(),
            background: Color::BACKGROUND,
            palette: Palette::new(vec![]),
            layers,
        }
    }

    fn options(width: usize, height: usize) -> RasterOptions {
        RasterOptions { width, height }
    }

    fn close(actual: [u8; 4], expected: [u8; 4]) -> bool {
        actual
            .iter()
            .zip(expected)
            .all(|(&a, e)| a.abs_diff(e) <= 2)
    }

    const RED: Color = Color::new(1.0, 0.0, 0.0);
    const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    const BACKGROUND_RGBA: [u8; 4] = [250, 250, 247, 255];

    #[test]
    fn buffer_has_four_bytes_per_pixel() {
        let buf = rasterize(&scene(vec![]), &options(7, 10)).unwrap();
        assert_eq!(buf.len(), 7 * 10 * 4);
    }

    #[test]
    fn empty_scene_is_background() {
        let buf = rasterize(&scene(vec![]), &options(4, 4)).unwrap();
        for px in buf.chunks_exact(4) {
            assert_eq!(px, BACKGROUND_RGBA);
        }
    }

    #[test]
    fn opaque_full_canvas_layer_replaces_background() {
        let s = scene(vec![rect_layer(0.0, 0.0, 1.0, 1.0, RED, 1.0)]);
        let buf = rasterize(&s, &options(5, 5)).unwrap();
        for px in buf.chunks_exact(4) {
            assert_eq!(px, [255, 0, 0, 255]);
        }
    }

    #[test]
    fn translucent_layer_mixes_with_background() {
        let s = scene(vec![rect_layer(0.0, 0.0, 1.0, 1.0, Color::new(0.0, 0.0, 0.0), 0.5)]);
        let canvas = compose_canvas(&s, &options(2, 2)).unwrap();
        let px = canvas.pixel(1, 1);
        assert!(close(px, [125, 125, 124, 255]), "got {px:?}");
    }

    #[test]
    fn later_layers_paint_over_earlier_ones() {
        let s = scene(vec![
            rect_layer(0.0, 0.0, 1.0, 1.0, RED, 1.0),
            rect_layer(0.0, 0.0, 1.0, 1.0, BLUE, 1.0),
        ]);
        let canvas = compose_canvas(&s, &options(3, 3)).unwrap();
        assert_eq!(canvas.pixel(0, 0), [0, 0, 255, 255]);
    }

    #[test]
    fn poster_y_axis_points_up() {
        // Upper half of the unit square lands in the top rows of the image.
        let s = scene(vec![rect_layer(0.0, 0.5, 1.0, 1.0, RED, 1.0)]);
        let canvas = compose_canvas(&s, &options(4, 4)).unwrap();
        assert_eq!(canvas.pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(canvas.pixel(3, 1), [255, 0, 0, 255]);
        assert_eq!(canvas.pixel(0, 3), BACKGROUND_RGBA);
    }

    #[test]
    fn self_overlapping_outline_fills_with_nonzero_winding() {
        // The same square traced twice has winding number 2 inside.
        let mut layer = rect_layer(0.0, 0.0, 1.0, 1.0, RED, 1.0);
        let points = layer.path.points();
        let twice: Vec<DVec2> = points.iter().chain(points).copied().collect();
        layer.path = Path::new(twice);
        let canvas = compose_canvas(&scene(vec![layer]), &options(4, 4)).unwrap();
        assert_eq!(canvas.pixel(2, 2), [255, 0, 0, 255]);
    }

    #[test]
    fn degenerate_outline_paints_nothing() {
        let mut layer = rect_layer(0.0, 0.0, 1.0, 1.0, RED, 1.0);
        layer.path = Path::new(vec![DVec2::splat(0.5); 200]);
        let buf = rasterize(&scene(vec![layer]), &options(6, 6)).unwrap();
        assert!(buf.chunks_exact(4).all(|px| px == BACKGROUND_RGBA));
    }

    #[test]
    fn custom_background_is_used() {
        let mut s = scene(vec![]);
        s.background = Color::new(0.0, 0.0, 0.0);
        let buf = rasterize(&s, &options(1, 1)).unwrap();
        assert_eq!(buf, vec![0, 0, 0, 255]);
    }

    #[test]
    fn invalid_dimensions_are_rejected_before_allocating() {
        for (w, h) in [(0, 10), (10, 0), (1_000_000_000, 1_000_000_000), (70_000, 1)] {
            assert!(
                matches!(
                    rasterize(&scene(vec![]), &options(w, h)),
                    Err(PosterError::InvalidDimensions)
                ),
                "{w}x{h}"
            );
        }
    }

    #[test]
    fn circle_poster_covers_its_centers() {
        let params = GenerationParams {
            layer_count: 5,
            wobble: 0.0,
            shape_kind: ShapeKind::Circle,
            ..Default::default()
        };
        let s = compose_poster(&params).unwrap();
        let canvas = compose_canvas(&s, &options(70, 100)).unwrap();
        for layer in &s.layers {
            let x = ((layer.center.x * 70.0) as usize).min(69);
            let y = (((1.0 - layer.center.y) * 100.0) as usize).min(99);
            assert_ne!(canvas.pixel(x, y), BACKGROUND_RGBA, "center of layer not painted");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn any_poster_rasterizes_to_opaque_pixels(seed: u64, shape_idx in 0_usize..5) {
                let params = GenerationParams {
                    layer_count: 6,
                    seed,
                    shape_kind: ShapeKind::ALL[shape_idx],
                    ..Default::default()
                };
                let s = compose_poster(&params).unwrap();
                let buf = rasterize(&s, &options(20, 28)).unwrap();
                prop_assert_eq!(buf.len(), 20 * 28 * 4);
                prop_assert!(buf.chunks_exact(4).all(|px| px[3] == 255));
            }
        }
    }
}
