//! Failure classes of the `poster` binary and the exit status each one maps to.
//!
//! clap exits with 2 on bad arguments before any of this runs. Everything
//! else is one of:
//!
//! | status | class |
//! |--------|-------|
//! | 10 | parameters or raster size rejected by the generator |
//! | 11 | a config, font or output file could not be read or written |
//! | 12 | a config file, color or font that was read but is unusable |
//! | 13 | JSON output could not be produced |

use poster_core::PosterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generation(PosterError),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Input(String),
    #[error("{0}")]
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Generation(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl From<PosterError> for CliError {
    fn from(e: PosterError) -> Self {
        match e {
            PosterError::Io(msg) => CliError::Io(msg),
            PosterError::InvalidColor(_) | PosterError::InvalidFont(_) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Generation(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_class_has_its_own_status() {
        let codes = [
            CliError::Generation(PosterError::InvalidDimensions).exit_code(),
            CliError::Io("write failed".into()).exit_code(),
            CliError::Input("bad config".into()).exit_code(),
            CliError::Serialization("json fail".into()).exit_code(),
        ];
        assert_eq!(codes, [10, 11, 12, 13]);
    }

    #[test]
    fn poster_io_error_keeps_its_message() {
        let cli_err = CliError::from(PosterError::Io("disk full".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn bad_color_and_font_are_input_errors() {
        let color = CliError::from(PosterError::InvalidColor("#12".into()));
        assert_eq!(color.exit_code(), 12);
        assert!(color.to_string().contains("#12"));

        let font = CliError::from(PosterError::InvalidFont("title.ttf".into()));
        assert_eq!(font.exit_code(), 12);
        assert!(font.to_string().contains("title.ttf"));
    }

    #[test]
    fn rejected_parameter_is_generation_error() {
        let cli_err = CliError::from(PosterError::invalid_parameter("wobble", "too large"));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("wobble"));
    }

    #[test]
    fn json_failure_is_serialization_error() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
