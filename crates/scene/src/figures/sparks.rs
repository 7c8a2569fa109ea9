//! A cluster of twinkling sparks.
//!
//! Spark positions come from a generator reset to the same state on every
//! draw, so the layout is identical frame to frame and only the twinkle
//! (size and brightness) follows the noise.

use std::f64::consts::TAU;

use circle_art_core::surface::Surface;
use circle_art_core::{Frame, Xorshift64};
use glam::DVec2;

use super::{class, palette};

const COUNT: usize = 20;
const LAYOUT_SEED: u64 = 0x5eed_5a4c;

pub(super) fn sparks(s: &mut dyn Surface, f: &Frame<'_>) {
    let mut rng = Xorshift64::new(LAYOUT_SEED);

    s.set_stroke(None);
    s.set_fill(Some(palette::VIOLET.with_alpha(0.5)));
    s.circle(DVec2::ZERO, 6.0);

    for i in 0..COUNT {
        let angle = rng.next_range(0.0, TAU);
        // sqrt keeps the cluster evenly dense instead of bunched at the centre
        let radius = 54.0 * rng.next_f64().sqrt();
        let twinkle = f.sample(f.seed(class::TWINKLE, i));
        let size = 1.0 + 3.0 * twinkle * f.intensity().min(1.5);
        s.set_fill(Some(palette::CREAM.with_alpha(0.25 + 0.75 * twinkle)));
        s.circle(DVec2::from_angle(angle) * radius, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circle_art_core::recorder::Primitive;
    use circle_art_core::{PerlinNoise, RecordingSurface};

    fn centers(time: f64) -> Vec<DVec2> {
        let noise = PerlinNoise::new(8);
        let frame = Frame::new(&noise, time, 1.0).with_band(5000.0);
        let mut s = RecordingSurface::new(800.0, 800.0);
        sparks(&mut s, &frame);
        s.commands()
            .iter()
            .filter_map(|c| match c.primitive {
                Primitive::Circle { center, .. } => Some(center),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn layout_is_stable_across_frames() {
        let first = centers(0.25);
        assert_eq!(first.len(), COUNT + 1);
        assert_eq!(first, centers(9.75));
    }

    #[test]
    fn sparks_stay_inside_the_cluster() {
        for c in centers(1.0) {
            assert!(c.length() <= 54.0 + 1e-9);
        }
    }

    #[test]
    fn twinkle_changes_size_over_time() {
        let noise = PerlinNoise::new(8);
        let radii = |time: f64| -> Vec<f64> {
            let frame = Frame::new(&noise, time, 1.0).with_band(5000.0);
            let mut s = RecordingSurface::new(800.0, 800.0);
            sparks(&mut s, &frame);
            s.commands()
                .iter()
                .filter_map(|c| match c.primitive {
                    Primitive::Circle { radius, .. } => Some(radius),
                    _ => None,
                })
                .collect()
        };
        assert_ne!(radii(0.3), radii(2.6));
    }
}
