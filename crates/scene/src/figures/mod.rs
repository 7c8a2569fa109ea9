//! The twelve drawing routines a composition can use.
//!
//! Each routine draws in a local frame centred on the figure, with an outer
//! radius of roughly [`FIGURE_RADIUS`] units before scaling. Sub-elements
//! (dots, petals, spokes, rays) animate through [`Frame::wiggle`] with seeds
//! from their own feature class inside the figure's seed band, so no two
//! features read the same noise coordinate.

mod dots;
mod petals;
mod rays;
mod rings;
mod sparks;

use circle_art_core::error::EngineError;
use circle_art_core::surface::Surface;
use circle_art_core::{Draw, Frame};
use serde::Serialize;

/// Nominal outer radius of a figure in its local frame.
pub const FIGURE_RADIUS: f64 = 60.0;

/// Seed class bases inside a figure band. [`Frame::seed`] spaces the
/// elements of a class above its base.
pub(crate) mod class {
    pub const ANGLE: u32 = 0;
    pub const RADIUS: u32 = 100;
    pub const LENGTH: u32 = 200;
    pub const WIDTH: u32 = 300;
    pub const ORBIT: u32 = 400;
    pub const TWINKLE: u32 = 500;
    pub const INNER: u32 = 600;
}

pub(crate) mod palette {
    use circle_art_core::Color;

    pub const CORAL: Color = Color::rgb(1.0, 0.435, 0.349);
    pub const CREAM: Color = Color::rgb(0.992, 0.949, 0.859);
    pub const GOLD: Color = Color::rgb(0.969, 0.741, 0.271);
    pub const TEAL: Color = Color::rgb(0.165, 0.706, 0.694);
    pub const SKY: Color = Color::rgb(0.529, 0.761, 0.949);
    pub const ROSE: Color = Color::rgb(0.925, 0.451, 0.612);
    pub const VIOLET: Color = Color::rgb(0.573, 0.455, 0.855);
    pub const MINT: Color = Color::rgb(0.592, 0.898, 0.722);
    pub const INK: Color = Color::rgb(0.063, 0.071, 0.169);
}

/// One of the twelve figure drawing strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FigureKind {
    DotRing,
    Petals,
    Spokes,
    ConcentricRings,
    Sunburst,
    Rosette,
    Orbit,
    SpiralDots,
    Starburst,
    Mandala,
    Bloom,
    Sparks,
}

impl FigureKind {
    pub const ALL: [FigureKind; 12] = [
        FigureKind::DotRing,
        FigureKind::Petals,
        FigureKind::Spokes,
        FigureKind::ConcentricRings,
        FigureKind::Sunburst,
        FigureKind::Rosette,
        FigureKind::Orbit,
        FigureKind::SpiralDots,
        FigureKind::Starburst,
        FigureKind::Mandala,
        FigureKind::Bloom,
        FigureKind::Sparks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FigureKind::DotRing => "dot-ring",
            FigureKind::Petals => "petals",
            FigureKind::Spokes => "spokes",
            FigureKind::ConcentricRings => "concentric-rings",
            FigureKind::Sunburst => "sunburst",
            FigureKind::Rosette => "rosette",
            FigureKind::Orbit => "orbit",
            FigureKind::SpiralDots => "spiral-dots",
            FigureKind::Starburst => "starburst",
            FigureKind::Mandala => "mandala",
            FigureKind::Bloom => "bloom",
            FigureKind::Sparks => "sparks",
        }
    }

    /// Looks a kind up by its kebab-case name.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| EngineError::UnknownFigure(name.to_string()))
    }

    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.name()).collect()
    }
}

impl std::fmt::Display for FigureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl Draw for FigureKind {
    fn draw(&self, surface: &mut dyn Surface, frame: &Frame<'_>) {
        match self {
            FigureKind::DotRing => dots::dot_ring(surface, frame),
            FigureKind::Petals => petals::petals(surface, frame),
            FigureKind::Spokes => rays::spokes(surface, frame),
            FigureKind::ConcentricRings => rings::concentric_rings(surface, frame),
            FigureKind::Sunburst => rays::sunburst(surface, frame),
            FigureKind::Rosette => petals::rosette(surface, frame),
            FigureKind::Orbit => dots::orbit(surface, frame),
            FigureKind::SpiralDots => dots::spiral_dots(surface, frame),
            FigureKind::Starburst => rays::starburst(surface, frame),
            FigureKind::Mandala => rings::mandala(surface, frame),
            FigureKind::Bloom => petals::bloom(surface, frame),
            FigureKind::Sparks => sparks::sparks(surface, frame),
        }
    }
}
