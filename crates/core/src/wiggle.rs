//! Mapping raw noise samples to bounded visual offsets.
//!
//! [`noise_wiggle`] is the one place where noise becomes motion: a sample in
//! [0, 1] is remapped to `[-amplitude * intensity, +amplitude * intensity]`.
//! The amplitude is scaled first and the remap domain does the bounding, so
//! the result never leaves its declared range.
//!
//! [`Frame`] bundles what a drawing routine needs to animate its own
//! sub-elements: the current time, the motion intensity, the noise source,
//! and the figure's seed band.

use crate::noise::NoiseSource;

/// Spacing between consecutive element seeds inside a feature class.
/// Irrational, so no element lands on a noise lattice line.
pub const ELEMENT_SPACING: f64 = 1.618_033_988_749_895;

/// Fractional offset of element 0 inside a feature class. Neither an integer
/// nor a half-integer.
pub const ELEMENT_OFFSET: f64 = 0.271_828_182_845_904;

/// Linear remap of `value` from `[in_lo, in_hi]` to `[out_lo, out_hi]`,
/// without clamping.
pub fn map_range(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    out_lo + (value - in_lo) * (out_hi - out_lo) / (in_hi - in_lo)
}

/// Like [`map_range`] but the result is clamped to the output interval.
pub fn map_range_clamped(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    let (lo, hi) = if out_lo <= out_hi {
        (out_lo, out_hi)
    } else {
        (out_hi, out_lo)
    };
    map_range(value, in_lo, in_hi, out_lo, out_hi).clamp(lo, hi)
}

/// Signed offset in `[-amplitude * intensity, +amplitude * intensity]`
/// derived from `noise.sample(seed, time)`.
pub fn noise_wiggle(
    noise: &dyn NoiseSource,
    seed: f64,
    amplitude: f64,
    time: f64,
    intensity: f64,
) -> f64 {
    let reach = amplitude * intensity;
    map_range(noise.sample(seed, time), 0.0, 1.0, -reach, reach)
}

/// Per-frame sampling context handed to drawing routines.
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    noise: &'a dyn NoiseSource,
    time: f64,
    intensity: f64,
    band: f64,
}

impl<'a> Frame<'a> {
    pub fn new(noise: &'a dyn NoiseSource, time: f64, intensity: f64) -> Self {
        Self {
            noise,
            time,
            intensity,
            band: 0.0,
        }
    }

    /// Same frame, with sub-element seeds offset by `band`.
    pub fn with_band(self, band: f64) -> Self {
        Self { band, ..self }
    }

    /// Animation clock value for this frame.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Motion intensity for this frame.
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn band(&self) -> f64 {
        self.band
    }

    /// Seed for element `index` of the feature class starting at `class_base`,
    /// inside this frame's band. Element seeds are off the integer lattice,
    /// so sub-elements never all come to rest at whole clock values.
    pub fn seed(&self, class_base: u32, index: usize) -> f64 {
        self.band + f64::from(class_base) + ELEMENT_OFFSET + index as f64 * ELEMENT_SPACING
    }

    /// Raw noise in [0, 1] at `seed` and the current time.
    pub fn sample(&self, seed: f64) -> f64 {
        self.noise.sample(seed, self.time)
    }

    /// [`noise_wiggle`] at the current time and intensity.
    pub fn wiggle(&self, seed: f64, amplitude: f64) -> f64 {
        noise_wiggle(self.noise, seed, amplitude, self.time, self.intensity)
    }
}

impl std::fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("time", &self.time)
            .field("intensity", &self.intensity)
            .field("band", &self.band)
            .finish()
    }
}
