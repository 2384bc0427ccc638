//! The scene: an ordered stack of filled outlines handed to a renderer.
//!
//! Layers are stored bottom-to-top (index 0 is painted first). Nothing here
//! assumes a rendering technology; `poster-render` is one consumer.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::palette::Palette;
use crate::shape::{Path, Point};

/// One filled outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub path: Path,
    pub color: Color,
    /// Fill opacity in [0, 1].
    pub opacity: f64,
    /// Center the outline was generated around.
    pub center: Point,
    /// Nominal radius before any wobble.
    pub radius: f64,
}

/// The full output of one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Display caption. Renderers may show or ignore it.
    pub title: String,
    pub background: Color,
    /// Colors the layers were picked from.
    pub palette: Palette,
    pub layers: Vec<Layer>,
}

impl Scene {
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total number of outline points across all layers.
    pub fn point_count(&self) -> usize {
        self.layers.iter().map(|l| l.path.len()).sum()
    }
}
