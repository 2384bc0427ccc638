//! Layered generation settings: defaults, then a JSON config file, then flags.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use poster_core::params::param_string;
use poster_core::{Color, GenerationParams, PaletteMode, ShapeKind};
use serde_json::Value;

use crate::error::CliError;

/// Flags shared by every subcommand that generates a poster.
#[derive(Args, Debug, Default, Clone)]
pub struct GenArgs {
    /// Number of shape layers (0-500) [default: 11].
    #[arg(short, long)]
    pub layers: Option<usize>,

    /// Blob outline perturbation (0.0-0.8) [default: 0.26].
    #[arg(long)]
    pub wobble: Option<f64>,

    /// PRNG seed for deterministic output [default: 7015].
    #[arg(long)]
    pub seed: Option<u64>,

    /// Palette mode (pastel, vivid, autumn, ocean) [default: pastel].
    #[arg(short, long)]
    pub palette: Option<String>,

    /// Shape kind (blob, circle, heart, star, triangle) [default: blob].
    #[arg(short, long)]
    pub shape: Option<String>,

    /// Background color as "#rrggbb" [default: #fafaf7].
    #[arg(long)]
    pub background: Option<String>,

    /// JSON config file with keys layers, wobble, seed, palette, shape, background.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Final settings for one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub params: GenerationParams,
    pub background: Color,
}

impl GenArgs {
    /// Applies the config file (if any) and then the explicit flags over the defaults.
    pub fn resolve(&self) -> Result<Settings, CliError> {
        let file = self.config.as_deref().map(read_config).transpose()?;
        self.resolve_with(file.as_ref())
    }

    fn resolve_with(&self, file: Option<&Value>) -> Result<Settings, CliError> {
        let mut params = GenerationParams::default();
        let mut background = Color::BACKGROUND;
        if let Some(file) = file {
            params = GenerationParams::merge_json(params, file)?;
            if let Some(hex) = param_string(file, "background")? {
                background = Color::from_hex(&hex)?;
            }
        }

        if let Some(layers) = self.layers {
            params.layer_count = layers;
        }
        if let Some(wobble) = self.wobble {
            params.wobble = wobble;
        }
        if let Some(seed) = self.seed {
            params.seed = seed;
        }
        if let Some(palette) = &self.palette {
            params.palette_mode = PaletteMode::from_name(palette);
        }
        if let Some(shape) = &self.shape {
            params.shape_kind = ShapeKind::from_name(shape);
        }
        if let Some(hex) = &self.background {
            background = Color::from_hex(hex)?;
        }

        params.validate()?;
        tracing::debug!(?params, background = %background.to_hex(), "settings resolved");
        Ok(Settings { params, background })
    }
}

fn read_config(path: &Path) -> Result<Value, CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read config {}: {e}", path.display())))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid config {}: {e}", path.display())))?;
    if !value.is_object() {
        return Err(CliError::Input(format!(
            "config {} must be a JSON object",
            path.display()
        )));
    }
    Ok(value)
}
