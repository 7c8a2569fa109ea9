#![deny(unsafe_code)]
//! Core of the circle-art animation engine.
//!
//! Provides the noise source (`NoiseSource`, `PerlinNoise`), the bounded
//! offset mapper (`noise_wiggle`, `Frame`), pointer mapping and the clock
//! (`GlobalAnimationState`), animated figures (`AnimatedFigure`, `Draw`,
//! `RenderTransform`), the render surface contract (`Surface`, `scoped`)
//! with a recording backend, and the ambient types around them: `Canvas`,
//! `Color`, `NoiseConfig`, `Xorshift64`, `EngineError`.

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod figure;
pub mod noise;
pub mod params;
pub mod prng;
pub mod recorder;
pub mod state;
pub mod surface;
pub mod wiggle;

pub use canvas::Canvas;
pub use color::Color;
pub use config::NoiseConfig;
pub use error::EngineError;
pub use figure::{AnimatedFigure, Draw, FigureSeeds, RenderTransform};
pub use noise::{NoiseSource, PerlinNoise};
pub use prng::Xorshift64;
pub use recorder::RecordingSurface;
pub use state::GlobalAnimationState;
pub use surface::{scoped, Path, Surface};
pub use wiggle::{noise_wiggle, Frame};
