//! Figures built from rings and trails of dots.

use std::f64::consts::TAU;

use circle_art_core::surface::Surface;
use circle_art_core::Frame;
use glam::DVec2;

use super::{class, palette};

/// A disc ringed by sixteen dots that breathe in and out independently.
pub(super) fn dot_ring(s: &mut dyn Surface, f: &Frame<'_>) {
    const COUNT: usize = 16;

    s.set_stroke(None);
    s.set_fill(Some(palette::CORAL));
    s.circle(DVec2::ZERO, 16.0);

    s.set_fill(Some(palette::CREAM));
    for i in 0..COUNT {
        let angle = TAU * i as f64 / COUNT as f64 + f.wiggle(f.seed(class::ANGLE, i), 0.08);
        let radius = 46.0 + f.wiggle(f.seed(class::RADIUS, i), 6.0);
        let size = 4.5 + f.wiggle(f.seed(class::WIDTH, i), 1.0);
        s.circle(DVec2::from_angle(angle) * radius, size.max(0.5));
    }
}

/// A core disc with satellites drifting around two orbits.
pub(super) fn orbit(s: &mut dyn Surface, f: &Frame<'_>) {
    const ORBITS: [(f64, usize); 2] = [(28.0, 3), (50.0, 5)];

    s.set_fill(None);
    s.set_stroke(Some(palette::SKY.with_alpha(0.45)));
    s.set_stroke_width(1.5);
    for (radius, _) in ORBITS {
        s.circle(DVec2::ZERO, radius);
    }

    s.set_stroke(None);
    s.set_fill(Some(palette::SKY));
    s.circle(DVec2::ZERO, 12.0);

    s.set_fill(Some(palette::GOLD));
    let mut index = 0;
    for (radius, count) in ORBITS {
        for k in 0..count {
            let base = TAU * k as f64 / count as f64;
            let angle = base + f.wiggle(f.seed(class::ORBIT, index), 0.6);
            let r = radius + f.wiggle(f.seed(class::RADIUS, index), 3.0);
            s.circle(DVec2::from_angle(angle) * r, 5.0);
            index += 1;
        }
    }
}

/// Dots along a two-turn Archimedean spiral, shrinking toward the centre.
pub(super) fn spiral_dots(s: &mut dyn Surface, f: &Frame<'_>) {
    const COUNT: usize = 28;
    const TURNS: f64 = 2.0;

    s.set_stroke(None);
    for i in 0..COUNT {
        let t = i as f64 / (COUNT - 1) as f64;
        let angle = TAU * TURNS * t + f.wiggle(f.seed(class::ANGLE, i), 0.1);
        let radius = 8.0 + 48.0 * t + f.wiggle(f.seed(class::RADIUS, i), 4.0);
        let color = if i % 2 == 0 {
            palette::MINT
        } else {
            palette::TEAL
        };
        s.set_fill(Some(color));
        s.circle(DVec2::from_angle(angle) * radius, 1.5 + 3.5 * t);
    }
}
