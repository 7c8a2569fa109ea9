//! Radiating figures: spokes, triangular rays, and a wobbling star.

use std::f64::consts::{PI, TAU};

use circle_art_core::surface::{Path, Surface};
use circle_art_core::Frame;
use glam::DVec2;

use super::{class, palette};

/// Twenty-four spokes from a hub, each with its own noisy length.
pub(super) fn spokes(s: &mut dyn Surface, f: &Frame<'_>) {
    const COUNT: usize = 24;
    const HUB: f64 = 10.0;

    s.set_stroke(Some(palette::GOLD));
    s.set_stroke_width(2.0);
    for i in 0..COUNT {
        let direction = DVec2::from_angle(TAU * i as f64 / COUNT as f64);
        let length = 40.0 + f.wiggle(f.seed(class::LENGTH, i), 8.0);
        s.line(direction * HUB, direction * (HUB + length));
    }

    s.set_stroke(None);
    s.set_fill(Some(palette::CORAL));
    s.circle(DVec2::ZERO, HUB);
}

/// Twelve triangular rays whose tips lean and stretch.
pub(super) fn sunburst(s: &mut dyn Surface, f: &Frame<'_>) {
    const COUNT: usize = 12;
    const BASE: f64 = 20.0;

    s.set_stroke(None);
    s.set_fill(Some(palette::GOLD.with_alpha(0.9)));
    let half = PI / COUNT as f64 * 0.55;
    for i in 0..COUNT {
        let angle = TAU * i as f64 / COUNT as f64;
        let lean = f.wiggle(f.seed(class::ANGLE, i), 0.1);
        let tip = 54.0 + f.wiggle(f.seed(class::LENGTH, i), 6.0);
        let ray = Path::polygon([
            DVec2::from_angle(angle - half) * BASE,
            DVec2::from_angle(angle + lean) * tip,
            DVec2::from_angle(angle + half) * BASE,
        ]);
        s.shape(&ray);
    }

    s.set_fill(Some(palette::CORAL));
    s.circle(DVec2::ZERO, BASE);
}

/// An eight-pointed star whose every vertex wobbles radially.
pub(super) fn starburst(s: &mut dyn Surface, f: &Frame<'_>) {
    const POINTS: usize = 8;

    let vertices = (0..POINTS * 2).map(|i| {
        let angle = PI * i as f64 / POINTS as f64;
        let radius = if i % 2 == 0 { 56.0 } else { 24.0 };
        let radius = radius + f.wiggle(f.seed(class::RADIUS, i), 5.0);
        DVec2::from_angle(angle) * radius
    });

    s.set_stroke(Some(palette::CREAM));
    s.set_stroke_width(1.5);
    s.set_fill(Some(palette::SKY.with_alpha(0.8)));
    s.shape(&Path::polygon(vertices));

    s.set_stroke(None);
    s.set_fill(Some(palette::INK));
    s.circle(DVec2::ZERO, 9.0 + f.wiggle(f.seed(class::INNER, 0), 2.0));
}
