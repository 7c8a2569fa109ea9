#![deny(unsafe_code)]
//! The circle-art composition: twelve figure routines, the static
//! background, the registry that places them, and the [`Scene`] frame
//! driver that ties clock, pointer and figures together.
//!
//! Rendering goes through the core `Surface` contract. [`RasterSurface`]
//! draws into a CPU pixmap; with the `png` feature (default on) the
//! [`snapshot`] module writes it to disk.

pub mod background;
pub mod composition;
pub mod figures;
pub mod raster;
pub mod scene;

#[cfg(feature = "png")]
pub mod snapshot;

pub use composition::{band_for, build_registry, Placement, LAYOUT};
pub use figures::{FigureKind, FIGURE_RADIUS};
pub use raster::RasterSurface;
pub use scene::{FigureReport, Scene, SceneReport};
