//! Poster caption, laid out with `parley` from caller-supplied font bytes.
//!
//! No fonts are bundled; the caption is only drawn when a [`TitleFont`] is
//! passed to [`compose_canvas_with_title`](crate::compose_canvas_with_title).

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use parley::layout::PositionedLayoutItem;
use parley::style::{FontStack, FontWeight, StyleProperty};
use parley::{FontContext, Layout, LayoutContext};
use poster_core::PosterError;
use vello_cpu::kurbo::Affine;
use vello_cpu::peniko::{Blob, Color, FontData};
use vello_cpu::{Glyph, RenderContext};

/// Caption size in points, on a poster that is nominally 10 inches tall.
pub const TITLE_SIZE_PT: f32 = 18.0;
/// Caption baseline origin as fractions of width and height, from the top-left.
pub const TITLE_ORIGIN: (f64, f64) = (0.05, 0.05);

const TITLE_BRUSH: [u8; 4] = [0, 0, 0, 255];

/// A font registered for caption layout, plus the outline data used to paint it.
pub struct TitleFont {
    font_ctx: FontContext,
    layout_ctx: LayoutContext<[u8; 4]>,
    family: String,
    data: FontData,
}

impl TitleFont {
    /// Registers a TrueType/OpenType font from raw bytes.
    ///
    /// Returns `PosterError::InvalidFont` if the bytes hold no usable family.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, PosterError> {
        let mut font_ctx = FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| PosterError::InvalidFont("no font families in font data".into()))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PosterError::InvalidFont("registered family has no name".into()))?
            .to_string();
        tracing::debug!(%family, "title font registered");

        Ok(Self {
            font_ctx,
            layout_ctx: LayoutContext::new(),
            family,
            data: FontData::new(Blob::from(bytes), 0),
        })
    }

    /// Reads a font file and registers it.
    pub fn load(path: &Path) -> Result<Self, PosterError> {
        let bytes = fs::read(path)
            .map_err(|e| PosterError::Io(format!("cannot read font {}: {e}", path.display())))?;
        Self::from_bytes(bytes)
            .map_err(|e| PosterError::InvalidFont(format!("{}: {e}", path.display())))
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    fn layout(&mut self, text: &str, size_px: f32) -> Layout<[u8; 4]> {
        let family = self.family.clone();
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(StyleProperty::FontStack(FontStack::Source(Cow::Owned(family))));
        builder.push_default(StyleProperty::FontSize(size_px));
        builder.push_default(StyleProperty::FontWeight(FontWeight::BOLD));
        builder.push_default(StyleProperty::Brush(TITLE_BRUSH));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Paints `text` with its first baseline at [`TITLE_ORIGIN`].
    pub(crate) fn draw(&mut self, ctx: &mut RenderContext, text: &str, width: u16, height: u16) {
        let layout = self.layout(text, title_size_px(height));
        let baseline = layout
            .lines()
            .next()
            .map_or(0.0, |line| line.metrics().baseline);
        let x = TITLE_ORIGIN.0 * f64::from(width);
        let y = TITLE_ORIGIN.1 * f64::from(height) - f64::from(baseline);
        ctx.set_transform(Affine::translate((x, y)));

        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let [r, g, b, a] = run.style().brush;
                ctx.set_paint(Color::from_rgba8(r, g, b, a));
                let glyphs = run.glyphs().map(|g| Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
}

/// Caption size in pixels for a canvas `height` pixels tall (dpi = height / 10).
pub fn title_size_px(height: u16) -> f32 {
    TITLE_SIZE_PT * (f32::from(height) / 10.0) / 72.0
}
