//! Error types for the circle-art core.

use thiserror::Error;

/// Errors produced while configuring or driving the animation engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero (or not finite) when creating a canvas or surface.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A `NoiseConfig` failed validation at startup.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A figure name did not match any known drawing routine.
    #[error("unknown figure: {0}")]
    UnknownFigure(String),

    /// Writing a snapshot or other output failed.
    #[error("i/o error: {0}")]
    Io(String),
}
