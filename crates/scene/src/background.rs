//! Static backdrop: flat fill, a faint grid, and scattered stars.

use circle_art_core::surface::Surface;
use circle_art_core::{Canvas, Color, Xorshift64};
use glam::DVec2;

/// Distance between grid lines.
pub const GRID_PITCH: f64 = 40.0;

const STAR_COUNT: usize = 64;
const STAR_SEED: u64 = 0x0005_7a25;

/// Draws the backdrop for `canvas`. Identical on every call.
pub fn draw_background(surface: &mut dyn Surface, canvas: &Canvas) {
    let (w, h) = (canvas.width(), canvas.height());
    surface.clear(canvas.background());

    surface.set_fill(None);
    surface.set_stroke(Some(Color::WHITE.with_alpha(0.06)));
    surface.set_stroke_width(1.0);
    let columns = (w / GRID_PITCH).floor() as usize;
    let rows = (h / GRID_PITCH).floor() as usize;
    for i in 0..=columns {
        let x = i as f64 * GRID_PITCH;
        surface.line(DVec2::new(x, 0.0), DVec2::new(x, h));
    }
    for j in 0..=rows {
        let y = j as f64 * GRID_PITCH;
        surface.line(DVec2::new(0.0, y), DVec2::new(w, y));
    }

    let mut rng = Xorshift64::new(STAR_SEED);
    surface.set_stroke(None);
    for _ in 0..STAR_COUNT {
        let position = DVec2::new(rng.next_range(0.0, w), rng.next_range(0.0, h));
        let radius = rng.next_range(0.5, 1.8);
        let alpha = rng.next_range(0.2, 0.7);
        surface.set_fill(Some(Color::WHITE.with_alpha(alpha)));
        surface.circle(position, radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circle_art_core::recorder::Primitive;
    use circle_art_core::RecordingSurface;

    fn record() -> RecordingSurface {
        let canvas = Canvas::standard();
        let mut s = RecordingSurface::new(canvas.width(), canvas.height());
        draw_background(&mut s, &canvas);
        s
    }

    #[test]
    fn starts_by_clearing_to_the_background() {
        let s = record();
        assert_eq!(
            s.commands()[0].primitive,
            Primitive::Clear(Canvas::standard().background())
        );
    }

    #[test]
    fn grid_covers_the_canvas_at_fixed_pitch() {
        let s = record();
        let lines = s
            .commands()
            .iter()
            .filter(|c| matches!(c.primitive, Primitive::Line { .. }))
            .count();
        // 800 / 40 = 20 cells, so 21 lines each way
        assert_eq!(lines, 42);
    }

    #[test]
    fn stars_are_identical_every_call() {
        let a = record();
        let b = record();
        assert_eq!(a.commands(), b.commands());
        let stars: Vec<_> = a
            .commands()
            .iter()
            .filter_map(|c| match c.primitive {
                Primitive::Circle { center, .. } => Some(center),
                _ => None,
            })
            .collect();
        assert_eq!(stars.len(), STAR_COUNT);
        for star in stars {
            assert!((0.0..=800.0).contains(&star.x));
            assert!((0.0..=800.0).contains(&star.y));
        }
    }
}
