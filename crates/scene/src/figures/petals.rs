//! Flower-like figures: elliptical petals, bezier rosettes, rotated blooms.

use std::f64::consts::TAU;

use circle_art_core::surface::{scoped, Path, Surface};
use circle_art_core::Frame;
use glam::DVec2;

use super::{class, palette};

/// Ten elliptical petals around a gold heart. Each petal sways and stretches.
pub(super) fn petals(s: &mut dyn Surface, f: &Frame<'_>) {
    const COUNT: usize = 10;

    s.set_stroke(Some(palette::INK.with_alpha(0.35)));
    s.set_stroke_width(1.0);
    s.set_fill(Some(palette::ROSE.with_alpha(0.85)));
    for i in 0..COUNT {
        let angle = TAU * i as f64 / COUNT as f64 + f.wiggle(f.seed(class::ANGLE, i), 0.12);
        let length = 22.0 + f.wiggle(f.seed(class::LENGTH, i), 4.0);
        let mut petal = scoped(&mut *s);
        petal.rotate(angle);
        petal.ellipse(DVec2::new(18.0 + length * 0.5, 0.0), DVec2::new(length, 9.0));
    }

    s.set_stroke(None);
    s.set_fill(Some(palette::GOLD));
    s.circle(DVec2::ZERO, 12.0);
}

/// Six cubic-bezier petals whose width breathes with noise.
pub(super) fn rosette(s: &mut dyn Surface, f: &Frame<'_>) {
    const COUNT: usize = 6;
    const REACH: f64 = 56.0;

    s.set_stroke(Some(palette::CREAM));
    s.set_stroke_width(1.5);
    s.set_fill(Some(palette::VIOLET.with_alpha(0.7)));
    for i in 0..COUNT {
        let angle = TAU * i as f64 / COUNT as f64 + f.wiggle(f.seed(class::ANGLE, i), 0.06);
        let width = 18.0 + f.wiggle(f.seed(class::WIDTH, i), 5.0);
        let tip = REACH + f.wiggle(f.seed(class::LENGTH, i), 4.0);
        let path = Path::new()
            .move_to(DVec2::ZERO)
            .cubic_to(
                DVec2::new(tip * 0.35, -width),
                DVec2::new(tip * 0.8, -width * 0.6),
                DVec2::new(tip, 0.0),
            )
            .cubic_to(
                DVec2::new(tip * 0.8, width * 0.6),
                DVec2::new(tip * 0.35, width),
                DVec2::ZERO,
            )
            .close();
        let mut petal = scoped(&mut *s);
        petal.rotate(angle);
        petal.shape(&path);
    }

    s.set_stroke(None);
    s.set_fill(Some(palette::CREAM));
    s.circle(DVec2::ZERO, 7.0);
}

/// Five nested ellipses, each turned by its own noise angle.
pub(super) fn bloom(s: &mut dyn Surface, f: &Frame<'_>) {
    const LAYERS: usize = 5;

    s.set_fill(None);
    s.set_stroke_width(2.0);
    for i in 0..LAYERS {
        let t = 1.0 - i as f64 / LAYERS as f64;
        let angle = i as f64 * 0.6 + f.wiggle(f.seed(class::ANGLE, i), 0.5);
        let radii = DVec2::new(56.0 * t, 30.0 * t);
        let color = if i % 2 == 0 {
            palette::TEAL
        } else {
            palette::MINT
        };
        s.set_stroke(Some(color));
        let mut layer = scoped(&mut *s);
        layer.rotate(angle);
        layer.ellipse(DVec2::ZERO, radii);
    }
}
