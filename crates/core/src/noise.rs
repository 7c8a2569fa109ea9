//! Continuous noise field sampled by (seed, time).
//!
//! A [`NoiseSource`] is a deterministic, continuous function of two
//! coordinates with output in [0, 1]. Equal inputs give equal outputs and
//! nearby inputs give nearby outputs, which is what keeps frame-to-frame
//! motion smooth.

use ::noise::{NoiseFn, Perlin};

/// A smooth 2D noise field with output in [0, 1].
pub trait NoiseSource {
    /// Samples the field at `(seed, time)`.
    fn sample(&self, seed: f64, time: f64) -> f64;
}

/// Perlin gradient noise remapped from [-1, 1] to [0, 1].
#[derive(Clone)]
pub struct PerlinNoise {
    perlin: Perlin,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl NoiseSource for PerlinNoise {
    fn sample(&self, seed: f64, time: f64) -> f64 {
        let raw = self.perlin.get([seed, time]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

impl std::fmt::Debug for PerlinNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerlinNoise").finish_non_exhaustive()
    }
}
