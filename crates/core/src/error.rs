//! Error types for the poster core.

use thiserror::Error;

/// Errors produced while validating parameters or rendering a scene.
#[derive(Debug, Error)]
pub enum PosterError {
    /// A generation parameter was outside its documented range or had the wrong type.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Width or height was zero or above the raster size limits.
    #[error("invalid dimensions: width and height must be non-zero and within raster limits")]
    InvalidDimensions,

    /// Font data for the poster title could not be loaded.
    #[error("invalid font: {0}")]
    InvalidFont(String),

    /// Writing an output artifact failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl PosterError {
    /// Shorthand for building an [`PosterError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        PosterError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
