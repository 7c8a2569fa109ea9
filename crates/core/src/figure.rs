//! Animated figures: an immutable identity plus a pure per-frame update.
//!
//! An [`AnimatedFigure`] owns four noise seeds drawn once at construction,
//! a base position and scale, and a drawing routine. [`AnimatedFigure::update`]
//! samples the seeds at the current time and returns a [`RenderTransform`];
//! nothing about the figure changes between frames.

use glam::{DAffine2, DVec2};
use serde::Serialize;

use crate::config::NoiseConfig;
use crate::prng::Xorshift64;
use crate::surface::{scoped, Surface};
use crate::wiggle::{map_range, Frame};

/// Figure seeds are drawn from `[0, SEED_DOMAIN)`.
pub const SEED_DOMAIN: f64 = 1000.0;

/// A drawing routine: issues drawing calls in a local frame that the caller
/// has already translated, rotated and scaled.
pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface, frame: &Frame<'_>);
}

impl<D: Draw + ?Sized> Draw for &D {
    fn draw(&self, surface: &mut dyn Surface, frame: &Frame<'_>) {
        (**self).draw(surface, frame);
    }
}

impl<D: Draw + ?Sized> Draw for Box<D> {
    fn draw(&self, surface: &mut dyn Surface, frame: &Frame<'_>) {
        (**self).draw(surface, frame);
    }
}

/// The four independent noise coordinates of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FigureSeeds {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation: f64,
}

impl FigureSeeds {
    /// Draws four seeds from `[0, SEED_DOMAIN)`.
    pub fn draw(rng: &mut Xorshift64) -> Self {
        Self {
            x: rng.next_range(0.0, SEED_DOMAIN),
            y: rng.next_range(0.0, SEED_DOMAIN),
            scale: rng.next_range(0.0, SEED_DOMAIN),
            rotation: rng.next_range(0.0, SEED_DOMAIN),
        }
    }
}

/// Where and how a figure is drawn in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderTransform {
    pub translation: DVec2,
    pub rotation: f64,
    pub scale: f64,
}

impl RenderTransform {
    /// translate · rotate · scale, as a single affine map.
    pub fn to_affine(&self) -> DAffine2 {
        DAffine2::from_scale_angle_translation(
            DVec2::splat(self.scale),
            self.rotation,
            self.translation,
        )
    }

    /// Applies this transform to the current frame of `surface`.
    pub fn apply(&self, surface: &mut dyn Surface) {
        surface.translate(self.translation);
        surface.rotate(self.rotation);
        surface.scale(DVec2::splat(self.scale));
    }
}

#[derive(Debug, Clone)]
pub struct AnimatedFigure<D> {
    seeds: FigureSeeds,
    position: DVec2,
    base_scale: f64,
    routine: D,
}

impl<D: Draw> AnimatedFigure<D> {
    pub fn new(seeds: FigureSeeds, position: DVec2, base_scale: f64, routine: D) -> Self {
        Self {
            seeds,
            position,
            base_scale,
            routine,
        }
    }

    pub fn seeds(&self) -> &FigureSeeds {
        &self.seeds
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn base_scale(&self) -> f64 {
        self.base_scale
    }

    pub fn routine(&self) -> &D {
        &self.routine
    }

    /// Samples drift, breathing and rotation for the frame's time.
    ///
    /// Breathing maps to `[scale_min, scale_max * intensity]`: only the
    /// upper bound follows motion intensity.
    pub fn update(&self, frame: &Frame<'_>, config: &NoiseConfig) -> RenderTransform {
        let dx = frame.wiggle(self.seeds.x, config.max_wiggle);
        let dy = frame.wiggle(self.seeds.y, config.max_wiggle);
        let breathing = map_range(
            frame.sample(self.seeds.scale),
            0.0,
            1.0,
            config.scale_min,
            config.scale_max * frame.intensity(),
        );
        let rotation = frame.wiggle(self.seeds.rotation, config.rotation_max);
        RenderTransform {
            translation: self.position + DVec2::new(dx, dy),
            rotation,
            scale: self.base_scale * breathing,
        }
    }

    /// Draws the routine inside a scoped frame carrying `transform`.
    pub fn draw(&self, surface: &mut dyn Surface, transform: &RenderTransform, frame: &Frame<'_>) {
        let mut local = scoped(surface);
        transform.apply(&mut *local);
        self.routine.draw(&mut *local, frame);
    }
}
