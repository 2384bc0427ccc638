//! Closed planar outlines for each poster shape.
//!
//! Every generator samples angles (or the curve parameter) with inclusive
//! linear spacing over [0, 2π], so the last sample lands exactly on 2π and
//! the outline closes onto its first point. Only [`ShapeKind::Blob`] draws from
//! the random source: one value per sample, in angle order.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::prng::RandomSource;

/// A point in unit-square poster coordinates, y up.
pub type Point = DVec2;

/// Samples on a circle or blob outline.
pub const CIRCLE_SAMPLES: usize = 200;
/// Samples on the heart curve.
pub const HEART_SAMPLES: usize = 300;
/// Tips on the star.
pub const STAR_POINTS: usize = 5;
/// Vertices on the triangle including the closing duplicate.
pub const TRIANGLE_SAMPLES: usize = 4;

/// Outline family drawn for every layer of a poster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ShapeKind {
    /// A circle whose radius is jittered per sample by the wobble factor.
    #[default]
    Blob,
    Circle,
    Heart,
    Star,
    Triangle,
}

impl ShapeKind {
    /// Every kind, in menu order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Blob,
        ShapeKind::Circle,
        ShapeKind::Heart,
        ShapeKind::Star,
        ShapeKind::Triangle,
    ];

    /// Parses a kind name. Unknown names fall back to [`ShapeKind::Blob`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "blob" => ShapeKind::Blob,
            "circle" => ShapeKind::Circle,
            "heart" => ShapeKind::Heart,
            "star" => ShapeKind::Star,
            "triangle" => ShapeKind::Triangle,
            other => {
                tracing::warn!(shape = other, "unknown shape kind, using blob");
                ShapeKind::Blob
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Blob => "blob",
            ShapeKind::Circle => "circle",
            ShapeKind::Heart => "heart",
            ShapeKind::Star => "star",
            ShapeKind::Triangle => "triangle",
        }
    }

    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.name()).collect()
    }

    /// Number of points in a path of this kind.
    pub fn sample_count(self) -> usize {
        match self {
            ShapeKind::Blob | ShapeKind::Circle => CIRCLE_SAMPLES,
            ShapeKind::Heart => HEART_SAMPLES,
            ShapeKind::Star => STAR_POINTS * 2 + 1,
            ShapeKind::Triangle => TRIANGLE_SAMPLES,
        }
    }

    /// Number of random draws one outline of this kind consumes.
    pub fn draws_per_shape(self) -> usize {
        match self {
            ShapeKind::Blob => CIRCLE_SAMPLES,
            _ => 0,
        }
    }
}

impl From<String> for ShapeKind {
    fn from(name: String) -> Self {
        ShapeKind::from_name(&name)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A closed outline. The fill region joins the last point back to the first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty path.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}

/// Builds the outline of `kind` centered at `center`.
///
/// `wobble` only affects [`ShapeKind::Blob`]. A radius that is not a positive
/// finite number yields a degenerate path of the usual length with every point
/// at `center`; a blob still consumes its draws so the stream stays aligned.
pub fn generate_shape(
    kind: ShapeKind,
    center: Point,
    radius: f64,
    wobble: f64,
    rng: &mut impl RandomSource,
) -> Path {
    if !(radius.is_finite() && radius > 0.0) {
        (0..kind.draws_per_shape()).for_each(|_| {
            rng.next_f64();
        });
        return Path::new(vec![center; kind.sample_count()]);
    }

    let points = match kind {
        ShapeKind::Circle => circle(center, radius),
        ShapeKind::Blob => blob(center, radius, wobble, rng),
        ShapeKind::Heart => heart(center, radius),
        ShapeKind::Star => star(center, radius),
        ShapeKind::Triangle => triangle(center, radius),
    };
    Path::new(points)
}

/// `n` evenly spaced values from `start` to `stop`, both inclusive.
///
/// The final value is exactly `stop`. A single sample is `start`.
fn linspace(start: f64, stop: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (stop - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            stop
        } else {
            start + i as f64 * step
        }
    })
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    center + radius * DVec2::new(angle.cos(), angle.sin())
}

fn circle(center: Point, radius: f64) -> Vec<Point> {
    linspace(0.0, TAU, CIRCLE_SAMPLES)
        .map(|theta| polar(center, radius, theta))
        .collect()
}

fn blob(center: Point, radius: f64, wobble: f64, rng: &mut impl RandomSource) -> Vec<Point> {
    linspace(0.0, TAU, CIRCLE_SAMPLES)
        .map(|theta| {
            let r = radius * (1.0 + wobble * (rng.next_f64() - 0.5));
            polar(center, r, theta)
        })
        .collect()
}

fn heart(center: Point, radius: f64) -> Vec<Point> {
    linspace(0.0, TAU, HEART_SAMPLES)
        .map(|t| {
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            center + DVec2::new(radius * x / 16.0, radius * y / 13.0)
        })
        .collect()
}

fn star(center: Point, radius: f64) -> Vec<Point> {
    linspace(0.0, TAU, STAR_POINTS * 2 + 1)
        .enumerate()
        .map(|(i, theta)| {
            let r = if i % 2 == 0 { radius } else { radius / 2.0 };
            polar(center, r, theta)
        })
        .collect()
}

fn triangle(center: Point, radius: f64) -> Vec<Point> {
    linspace(0.0, TAU, TRIANGLE_SAMPLES)
        .map(|theta| polar(center, radius, theta + FRAC_PI_2))
        .collect()
}
