//! The fixed composition: where each of the twelve figures sits.

use circle_art_core::{AnimatedFigure, FigureSeeds, Xorshift64};
use glam::DVec2;

use crate::figures::FigureKind;

/// Seed band of the first figure. Above the `[0, 1000)` figure-seed domain.
pub const FIGURE_BAND_BASE: f64 = 2000.0;
/// Distance between consecutive figure bands.
pub const FIGURE_BAND_STRIDE: f64 = 1000.0;

/// One entry of the layout table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: DVec2,
    pub scale: f64,
    pub kind: FigureKind,
}

const fn place(x: f64, y: f64, scale: f64, kind: FigureKind) -> Placement {
    Placement {
        position: DVec2::new(x, y),
        scale,
        kind,
    }
}

/// The composition on the 800×800 canvas, in draw order.
pub const LAYOUT: [Placement; 12] = [
    place(130.0, 140.0, 1.0, FigureKind::DotRing),
    place(320.0, 120.0, 0.85, FigureKind::Petals),
    place(500.0, 150.0, 1.1, FigureKind::Spokes),
    place(680.0, 130.0, 0.9, FigureKind::ConcentricRings),
    place(150.0, 380.0, 1.15, FigureKind::Sunburst),
    place(330.0, 330.0, 1.3, FigureKind::Rosette),
    place(520.0, 400.0, 1.0, FigureKind::Orbit),
    place(690.0, 360.0, 0.95, FigureKind::SpiralDots),
    place(120.0, 640.0, 0.9, FigureKind::Starburst),
    place(310.0, 600.0, 1.2, FigureKind::Mandala),
    place(510.0, 660.0, 1.05, FigureKind::Bloom),
    place(690.0, 620.0, 0.8, FigureKind::Sparks),
];

/// Seed band of the figure at `index` in draw order.
pub fn band_for(index: usize) -> f64 {
    FIGURE_BAND_BASE + index as f64 * FIGURE_BAND_STRIDE
}

/// Instantiates every placement once, drawing four fresh seeds per figure
/// from a generator started at `seed`.
pub fn build_registry(seed: u64) -> Vec<AnimatedFigure<FigureKind>> {
    let mut rng = Xorshift64::new(seed);
    let figures: Vec<_> = LAYOUT
        .iter()
        .map(|p| AnimatedFigure::new(FigureSeeds::draw(&mut rng), p.position, p.scale, p.kind))
        .collect();
    log::debug!("instantiated {} figures from seed {seed}", figures.len());
    figures
}
