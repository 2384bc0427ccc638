#![deny(unsafe_code)]
//! Core generation for the generative poster.
//!
//! Maps a [`GenerationParams`] to a deterministic [`Scene`]: a seeded
//! [`Palette`] of RGB colors and a stack of semi-transparent filled outlines
//! (`blob`, `circle`, `heart`, `star`, `triangle`). All randomness flows from
//! one [`Xorshift64`] created per call, so identical params always produce a
//! bit-identical scene.

pub mod color;
pub mod compose;
pub mod error;
pub mod palette;
pub mod params;
pub mod prng;
pub mod scene;
pub mod shape;

pub use color::Color;
pub use compose::compose_poster;
pub use error::PosterError;
pub use palette::{generate_palette, Palette, PaletteMode};
pub use params::GenerationParams;
pub use prng::{RandomSource, Xorshift64};
pub use scene::{Layer, Scene};
pub use shape::{generate_shape, Path, Point, ShapeKind};
