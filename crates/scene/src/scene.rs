//! The frame driver.
//!
//! A [`Scene`] owns everything one running animation needs: the canvas, the
//! validated config, the live [`GlobalAnimationState`], the noise source and
//! the composition registry. Hosts call [`Scene::pointer_moved`] and
//! [`Scene::resize`] from their input callbacks and
//! [`Scene::render_frame`] once per display frame.

use circle_art_core::error::EngineError;
use circle_art_core::surface::Surface;
use circle_art_core::{
    AnimatedFigure, Canvas, FigureSeeds, Frame, GlobalAnimationState, NoiseConfig, PerlinNoise,
    RenderTransform,
};
use glam::DVec2;
use once_cell::unsync::OnceCell;
use serde::Serialize;

use crate::background::draw_background;
use crate::composition::{band_for, build_registry};
use crate::figures::FigureKind;

/// Snapshot of the animation at the current clock, for inspection.
#[derive(Debug, Clone, Serialize)]
pub struct SceneReport {
    pub seed: u64,
    pub state: GlobalAnimationState,
    pub figures: Vec<FigureReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FigureReport {
    pub kind: FigureKind,
    pub band: f64,
    pub seeds: FigureSeeds,
    pub transform: RenderTransform,
}

pub struct Scene {
    canvas: Canvas,
    config: NoiseConfig,
    state: GlobalAnimationState,
    noise: PerlinNoise,
    seed: u64,
    figures: OnceCell<Vec<AnimatedFigure<FigureKind>>>,
}

impl Scene {
    /// Creates a scene on the standard canvas. The config is validated here;
    /// figures are instantiated on first use.
    pub fn new(config: NoiseConfig, seed: u64) -> Result<Self, EngineError> {
        Self::with_canvas(Canvas::standard(), config, seed)
    }

    pub fn with_canvas(
        canvas: Canvas,
        config: NoiseConfig,
        seed: u64,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            canvas,
            config,
            state: GlobalAnimationState::new(),
            // Perlin takes a 32-bit seed; fold the high half in.
            noise: PerlinNoise::new((seed ^ (seed >> 32)) as u32),
            seed,
            figures: OnceCell::new(),
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    pub fn state(&self) -> &GlobalAnimationState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The composition registry, built on the first call and reused after.
    pub fn figures(&self) -> &[AnimatedFigure<FigureKind>] {
        self.figures.get_or_init(|| build_registry(self.seed))
    }

    /// Pointer position relative to the canvas origin.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.state.pointer_moved(x, y, &self.canvas);
    }

    /// Viewport changed size. Returns where the canvas origin should sit to
    /// keep it centred.
    pub fn resize(&self, viewport_width: f64, viewport_height: f64) -> DVec2 {
        let offset = self.canvas.centered_in(viewport_width, viewport_height);
        log::debug!("viewport {viewport_width}x{viewport_height}, canvas offset {offset}");
        offset
    }

    /// Moves the clock forward by one frame.
    pub fn advance(&mut self) {
        self.state.advance_clock(self.config.step());
    }

    /// Draws one frame: background, clock advance, then every figure in
    /// registry order.
    pub fn render_frame(&mut self, surface: &mut dyn Surface) {
        draw_background(surface, &self.canvas);
        self.advance();
        log::trace!(
            "frame at clock {:.4} (intensity {:.3}, time-scale {:.3})",
            self.state.clock(),
            self.state.motion_intensity(),
            self.state.time_scale()
        );

        let base = self.frame();
        for (index, figure) in self.figures().iter().enumerate() {
            let frame = base.with_band(band_for(index));
            let transform = figure.update(&frame, &self.config);
            figure.draw(surface, &transform, &frame);
        }
    }

    /// Per-figure transforms at the current clock, in registry order.
    pub fn transforms(&self) -> Vec<RenderTransform> {
        let base = self.frame();
        self.figures()
            .iter()
            .enumerate()
            .map(|(index, figure)| figure.update(&base.with_band(band_for(index)), &self.config))
            .collect()
    }

    pub fn report(&self) -> SceneReport {
        let figures = self
            .figures()
            .iter()
            .zip(self.transforms())
            .enumerate()
            .map(|(index, (figure, transform))| FigureReport {
                kind: *figure.routine(),
                band: band_for(index),
                seeds: *figure.seeds(),
                transform,
            })
            .collect();
        SceneReport {
            seed: self.seed,
            state: self.state,
            figures,
        }
    }

    fn frame(&self) -> Frame<'_> {
        Frame::new(&self.noise, self.state.clock(), self.state.motion_intensity())
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("canvas", &self.canvas)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("seed", &self.seed)
            .field("instantiated", &self.figures.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circle_art_core::recorder::Primitive;
    use circle_art_core::RecordingSurface;

    fn scene() -> Scene {
        Scene::new(NoiseConfig::default(), 42).unwrap()
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = NoiseConfig {
            scale_min: 1.5,
            scale_max: 0.5,
            ..NoiseConfig::default()
        };
        assert!(matches!(
            Scene::new(config, 1),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn registry_is_built_lazily_once() {
        let scene = scene();
        assert!(scene.figures.get().is_none());
        let first = scene.figures().as_ptr();
        assert_eq!(scene.figures().len(), 12);
        assert_eq!(scene.figures().as_ptr(), first);
    }

    #[test]
    fn render_frame_draws_background_first_and_balances_stack() {
        let mut scene = scene();
        let mut s = RecordingSurface::new(800.0, 800.0);
        scene.render_frame(&mut s);
        assert!(matches!(s.commands()[0].primitive, Primitive::Clear(_)));
        assert_eq!(s.depth(), 0);
        assert!(s.max_depth() >= 1);
    }

    #[test]
    fn render_frame_advances_clock_once() {
        let mut scene = scene();
        let mut s = RecordingSurface::new(800.0, 800.0);
        scene.render_frame(&mut s);
        scene.render_frame(&mut s);
        assert!((scene.state().clock() - 0.04).abs() < 1e-12);
    }

    #[test]
    fn still_config_keeps_the_frame_identical() {
        let config = NoiseConfig {
            animate: false,
            ..NoiseConfig::default()
        };
        let mut scene = Scene::new(config, 3).unwrap();
        let mut a = RecordingSurface::new(800.0, 800.0);
        let mut b = RecordingSurface::new(800.0, 800.0);
        scene.render_frame(&mut a);
        scene.render_frame(&mut b);
        assert_eq!(scene.state().clock(), 0.0);
        assert_eq!(a.commands(), b.commands());
    }

    #[test]
    fn transforms_stay_within_wiggle_of_base_positions() {
        let mut scene = scene();
        scene.pointer_moved(800.0, 400.0);
        for _ in 0..50 {
            scene.advance();
        }
        let limit = scene.config().max_wiggle * scene.state().motion_intensity();
        for (t, figure) in scene.transforms().iter().zip(scene.figures()) {
            let drift = t.translation - figure.position();
            assert!(drift.x.abs() <= limit + 1e-9);
            assert!(drift.y.abs() <= limit + 1e-9);
        }
    }

    #[test]
    fn report_lists_every_figure_in_order() {
        let mut scene = scene();
        scene.advance();
        let report = scene.report();
        assert_eq!(report.seed, 42);
        assert_eq!(report.state, *scene.state());
        assert_eq!(report.figures.len(), 12);
        assert_eq!(report.figures[0].band, 2000.0);
        assert_eq!(report.figures[11].band, 13000.0);
        assert_eq!(report.figures[3].transform, scene.transforms()[3]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["figures"][0]["kind"], "dot-ring");
    }

    #[test]
    fn resize_centres_the_canvas() {
        let scene = scene();
        assert_eq!(scene.resize(1000.0, 900.0), DVec2::new(100.0, 50.0));
        assert_eq!(scene.resize(800.0, 800.0), DVec2::ZERO);
    }
}
