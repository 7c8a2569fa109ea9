//! Errors from `circle-art` subcommands and the exit code each one ends with.
//!
//! Clap handles malformed arguments itself and exits with 2. Everything after
//! parsing lands in one of four buckets:
//!
//! | code | variant | raised by |
//! |------|---------|-----------|
//! | 10 | `Engine` | `NoiseConfig` validation, canvas or raster dimensions |
//! | 11 | `Io` | writing the `render` PNG |
//! | 12 | `Input` | `--config` JSON, `--background` hex, `--figure` name, `render --frames 0` |
//! | 13 | `Serialization` | printing `--json` output |

use circle_art_core::EngineError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// The scene refused its configuration or canvas.
    Engine(EngineError),
    /// The PNG could not be written.
    Io(String),
    /// An argument parsed but made no sense for this run.
    Input(String),
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Engine(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Io(msg) => CliError::Io(msg),
            EngineError::InvalidColor(msg) => CliError::Input(msg),
            EngineError::UnknownFigure(name) => {
                CliError::Input(format!("unknown figure {name:?}, see `circle-art list`"))
            }
            other => CliError::Engine(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
