//! Poster composition: seeded palette plus a stack of randomly placed shapes.
//!
//! Draw order per call, all from one [`Xorshift64`] seeded with `params.seed`:
//!
//! 1. palette: `PALETTE_SIZE` colors, R/G/B each
//! 2. per layer: center x, center y, radius, the shape's own draws (blob only),
//!    palette index, opacity
//!
//! Changing the number or order of draws changes every later value, so the
//! sequence above is the reproducibility contract for recorded posters.

use std::ops::Range;

use glam::DVec2;

use crate::color::Color;
use crate::error::PosterError;
use crate::palette::{generate_palette, Palette};
use crate::params::GenerationParams;
use crate::prng::{RandomSource, Xorshift64};
use crate::scene::{Layer, Scene};
use crate::shape::generate_shape;

/// Colors drawn for every poster.
pub const PALETTE_SIZE: usize = 6;
/// Range of nominal layer radii.
pub const RADIUS_RANGE: Range<f64> = 0.15..0.45;
/// Range of layer fill opacities.
pub const OPACITY_RANGE: Range<f64> = 0.25..0.6;

/// Validates `params` and builds the scene.
///
/// The only error is `PosterError::InvalidParameter` from validation; a valid
/// parameter set always produces a scene with exactly `layer_count` layers.
#[tracing::instrument(skip(params), fields(
    seed = params.seed,
    layers = params.layer_count,
    palette = %params.palette_mode,
    shape = %params.shape_kind,
))]
pub fn compose_poster(params: &GenerationParams) -> Result<Scene, PosterError> {
    params.validate()?;

    let mut rng = Xorshift64::from_seed(params.seed);
    let palette = generate_palette(PALETTE_SIZE, params.palette_mode, &mut rng);

    let layers = (0..params.layer_count)
        .map(|index| {
            let layer = draw_layer(params, &palette, &mut rng);
            tracing::trace!(
                index,
                x = layer.center.x,
                y = layer.center.y,
                radius = layer.radius,
                opacity = layer.opacity,
                "layer"
            );
            layer
        })
        .collect();

    tracing::debug!("poster composed");
    Ok(Scene {
        title: params.title(),
        background: Color::BACKGROUND,
        palette,
        layers,
    })
}

fn draw_layer(params: &GenerationParams, palette: &Palette, rng: &mut impl RandomSource) -> Layer {
    let x = rng.next_f64();
    let y = rng.next_f64();
    let center = DVec2::new(x, y);
    let radius = rng.uniform(RADIUS_RANGE.start, RADIUS_RANGE.end);
    let path = generate_shape(params.shape_kind, center, radius, params.wobble, rng);
    // The palette always holds PALETTE_SIZE colors here.
    let color = palette.choose(rng).unwrap_or(Color::BACKGROUND);
    let opacity = rng.uniform(OPACITY_RANGE.start, OPACITY_RANGE.end);
    Layer {
        path,
        color,
        opacity,
        center,
        radius,
    }
}
