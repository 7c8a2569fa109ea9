//! Ring-based figures.

use std::f64::consts::TAU;

use circle_art_core::surface::{scoped, Surface};
use circle_art_core::Frame;
use glam::DVec2;

use super::{class, palette};

/// Five stroked rings whose radii drift independently.
pub(super) fn concentric_rings(s: &mut dyn Surface, f: &Frame<'_>) {
    const RINGS: usize = 5;

    s.set_fill(None);
    for i in 0..RINGS {
        let radius = 12.0 + 11.0 * i as f64 + f.wiggle(f.seed(class::RADIUS, i), 4.0);
        let width = 2.5 + f.wiggle(f.seed(class::WIDTH, i), 1.0);
        let color = if i % 2 == 0 {
            palette::CORAL
        } else {
            palette::CREAM
        };
        s.set_stroke(Some(color));
        s.set_stroke_width(width.max(0.5));
        s.circle(DVec2::ZERO, radius.max(1.0));
    }
}

/// Two counter-turning dot rings around a petal layer.
pub(super) fn mandala(s: &mut dyn Surface, f: &Frame<'_>) {
    const PETALS: usize = 8;
    const OUTER: usize = 16;
    const INNER: usize = 8;

    s.set_stroke(None);
    s.set_fill(Some(palette::TEAL.with_alpha(0.75)));
    for i in 0..PETALS {
        let angle = TAU * i as f64 / PETALS as f64;
        let length = 16.0 + f.wiggle(f.seed(class::LENGTH, i), 3.0);
        let mut petal = scoped(&mut *s);
        petal.rotate(angle);
        petal.ellipse(DVec2::new(12.0 + length * 0.5, 0.0), DVec2::new(length * 0.6, 6.0));
    }

    let spin = f.wiggle(f.seed(class::ORBIT, 0), 0.3);

    s.set_fill(Some(palette::GOLD));
    for i in 0..OUTER {
        let angle = TAU * i as f64 / OUTER as f64 + spin;
        let radius = 50.0 + f.wiggle(f.seed(class::RADIUS, i), 3.0);
        s.circle(DVec2::from_angle(angle) * radius, 3.5);
    }

    s.set_fill(Some(palette::CREAM));
    for i in 0..INNER {
        let angle = TAU * (i as f64 + 0.5) / INNER as f64 - spin;
        let radius = 9.0 + f.wiggle(f.seed(class::INNER, i), 2.0);
        s.circle(DVec2::from_angle(angle) * radius, 2.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circle_art_core::recorder::Primitive;
    use circle_art_core::{PerlinNoise, RecordingSurface};

    #[test]
    fn concentric_rings_share_the_center() {
        let noise = PerlinNoise::new(4);
        let frame = Frame::new(&noise, 1.3, 2.0);
        let mut s = RecordingSurface::new(800.0, 800.0);
        concentric_rings(&mut s, &frame);
        let rings: Vec<_> = s
            .commands()
            .iter()
            .filter(|c| matches!(c.primitive, Primitive::Circle { .. }))
            .collect();
        assert_eq!(rings.len(), 5);
        for ring in rings {
            assert_eq!(ring.world_anchor(), DVec2::ZERO);
            assert!(ring.state.fill.is_none());
            assert!(ring.state.stroke_width >= 0.5);
        }
    }

    #[test]
    fn mandala_layers_petals_and_two_dot_rings() {
        let noise = PerlinNoise::new(4);
        let frame = Frame::new(&noise, 0.4, 1.0);
        let mut s = RecordingSurface::new(800.0, 800.0);
        mandala(&mut s, &frame);
        let ellipses = s
            .commands()
            .iter()
            .filter(|c| matches!(c.primitive, Primitive::Ellipse { .. }))
            .count();
        let dots = s
            .commands()
            .iter()
            .filter(|c| matches!(c.primitive, Primitive::Circle { .. }))
            .count();
        assert_eq!(ellipses, 8);
        assert_eq!(dots, 16 + 8);
        assert_eq!(s.max_depth(), 1);
        assert_eq!(s.depth(), 0);
    }
}
