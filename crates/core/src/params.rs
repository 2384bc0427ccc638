//! Generation parameters and typed extraction from JSON config objects.
//!
//! The `param_*` helpers return the default when a key is absent and report
//! an error when it is present with the wrong type or an impossible value.
//! Enum-valued keys (`palette`, `shape`) are lenient instead: an unknown name
//! falls back to the default variant.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PosterError;
use crate::palette::PaletteMode;
use crate::shape::ShapeKind;

/// Largest accepted layer count.
pub const MAX_LAYERS: usize = 500;
/// Largest accepted wobble factor.
pub const MAX_WOBBLE: f64 = 0.8;

pub const DEFAULT_LAYERS: usize = 11;
pub const DEFAULT_WOBBLE: f64 = 0.26;
pub const DEFAULT_SEED: u64 = 7015;

/// Inputs of one poster generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Number of layers, at most [`MAX_LAYERS`].
    pub layer_count: usize,
    /// Blob radius perturbation in [0, [`MAX_WOBBLE`]].
    pub wobble: f64,
    pub seed: u64,
    pub palette_mode: PaletteMode,
    pub shape_kind: ShapeKind,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            layer_count: DEFAULT_LAYERS,
            wobble: DEFAULT_WOBBLE,
            seed: DEFAULT_SEED,
            palette_mode: PaletteMode::default(),
            shape_kind: ShapeKind::default(),
        }
    }
}

impl GenerationParams {
    /// Reads params from a config object with keys `layers`, `wobble`, `seed`,
    /// `palette`, and `shape`, starting from `base` for missing keys.
    ///
    /// The result is not validated; call [`GenerationParams::validate`].
    pub fn merge_json(base: Self, params: &Value) -> Result<Self, PosterError> {
        Ok(Self {
            layer_count: param_usize(params, "layers", base.layer_count)?,
            wobble: param_f64(params, "wobble", base.wobble)?,
            seed: param_u64(params, "seed", base.seed)?,
            palette_mode: param_string(params, "palette")?
                .map_or(base.palette_mode, |s| PaletteMode::from_name(&s)),
            shape_kind: param_string(params, "shape")?
                .map_or(base.shape_kind, |s| ShapeKind::from_name(&s)),
        })
    }

    /// [`GenerationParams::merge_json`] over the defaults.
    pub fn from_json(params: &Value) -> Result<Self, PosterError> {
        Self::merge_json(Self::default(), params)
    }

    /// Checks the documented ranges.
    pub fn validate(&self) -> Result<(), PosterError> {
        if self.layer_count > MAX_LAYERS {
            return Err(PosterError::invalid_parameter(
                "layers",
                format!("must be at most {MAX_LAYERS}, got {}", self.layer_count),
            ));
        }
        if !(0.0..=MAX_WOBBLE).contains(&self.wobble) {
            return Err(PosterError::invalid_parameter(
                "wobble",
                format!("must be in [0, {MAX_WOBBLE}], got {}", self.wobble),
            ));
        }
        Ok(())
    }

    /// Caption shown on the poster.
    pub fn title(&self) -> String {
        format!(
            "Generative Poster • {} • {}",
            self.palette_mode, self.shape_kind
        )
    }
}

fn type_mismatch(name: &str, expected: &str, got: &Value) -> PosterError {
    PosterError::invalid_parameter(name, format!("expected {expected}, got {got}"))
}

/// Extracts an `f64` from `params[name]`. Integers are accepted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> Result<f64, PosterError> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v.as_f64().ok_or_else(|| type_mismatch(name, "a number", v)),
    }
}

/// Extracts a non-negative integer from `params[name]`.
pub fn param_u64(params: &Value, name: &str, default: u64) -> Result<u64, PosterError> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_u64()
            .ok_or_else(|| type_mismatch(name, "a non-negative integer", v)),
    }
}

/// [`param_u64`] narrowed to `usize`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> Result<usize, PosterError> {
    let v = param_u64(params, name, default as u64)?;
    usize::try_from(v).map_err(|_| {
        PosterError::invalid_parameter(name, format!("{v} does not fit in usize"))
    })
}

/// Extracts a string from `params[name]`, or `None` when absent.
pub fn param_string(params: &Value, name: &str) -> Result<Option<String>, PosterError> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(v) => Err(type_mismatch(name, "a string", v)),
    }
}
