//! The single piece of shared mutable animation state.
//!
//! [`GlobalAnimationState`] has exactly two writers: pointer movement
//! (motion intensity and time-scale) and the frame driver (the clock).
//! Everything else reads it.

use serde::Serialize;

use crate::canvas::Canvas;
use crate::wiggle::map_range_clamped;

/// Lower and upper bound of motion intensity (pointer x).
pub const INTENSITY_RANGE: (f64, f64) = (0.5, 2.0);
/// Lower and upper bound of time-scale (pointer y).
pub const TIME_SCALE_RANGE: (f64, f64) = (0.3, 2.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlobalAnimationState {
    clock: f64,
    motion_intensity: f64,
    time_scale: f64,
}

impl GlobalAnimationState {
    /// Clock at zero, intensity and time-scale at 1.0.
    pub fn new() -> Self {
        Self {
            clock: 0.0,
            motion_intensity: 1.0,
            time_scale: 1.0,
        }
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn motion_intensity(&self) -> f64 {
        self.motion_intensity
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Recomputes intensity and time-scale from a canvas-relative pointer
    /// position. Positions outside the canvas clamp to the range ends.
    /// Non-finite coordinates are ignored.
    pub fn pointer_moved(&mut self, x: f64, y: f64, canvas: &Canvas) {
        if !x.is_finite() || !y.is_finite() {
            log::warn!("ignoring non-finite pointer position ({x}, {y})");
            return;
        }
        let (i_lo, i_hi) = INTENSITY_RANGE;
        let (t_lo, t_hi) = TIME_SCALE_RANGE;
        self.motion_intensity = map_range_clamped(x, 0.0, canvas.width(), i_lo, i_hi);
        self.time_scale = map_range_clamped(y, 0.0, canvas.height(), t_lo, t_hi);
    }

    /// Advances the clock by `base_step * time_scale`. A negative step is
    /// treated as zero so the clock never runs backwards.
    pub fn advance_clock(&mut self, base_step: f64) {
        self.clock += (base_step * self.time_scale).max(0.0);
    }
}

impl Default for GlobalAnimationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(x: f64, y: f64) -> GlobalAnimationState {
        let mut state = GlobalAnimationState::new();
        state.pointer_moved(x, y, &Canvas::standard());
        state
    }

    #[test]
    fn initial_state() {
        let state = GlobalAnimationState::new();
        assert_eq!(state.clock(), 0.0);
        assert_eq!(state.motion_intensity(), 1.0);
        assert_eq!(state.time_scale(), 1.0);
    }

    #[test]
    fn pointer_at_center_gives_midpoints() {
        let state = moved(400.0, 400.0);
        assert!((state.motion_intensity() - 1.25).abs() < 1e-12);
        assert!((state.time_scale() - 1.15).abs() < 1e-12);
    }

    #[test]
    fn pointer_at_origin_gives_minimums() {
        let state = moved(0.0, 0.0);
        assert_eq!(state.motion_intensity(), 0.5);
        assert!((state.time_scale() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn pointer_at_far_corner_gives_maximums() {
        let state = moved(800.0, 800.0);
        assert!((state.motion_intensity() - 2.0).abs() < 1e-12);
        assert!((state.time_scale() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn corners_stay_in_range() {
        for (x, y) in [(0.0, 0.0), (800.0, 0.0), (0.0, 800.0), (800.0, 800.0)] {
            let state = moved(x, y);
            assert!((0.5..=2.0).contains(&state.motion_intensity()));
            assert!((0.3..=2.0).contains(&state.time_scale()));
        }
    }

    #[test]
    fn out_of_surface_pointer_is_clamped_not_extrapolated() {
        let state = moved(-300.0, 5_000.0);
        assert_eq!(state.motion_intensity(), 0.5);
        assert_eq!(state.time_scale(), 2.0);
    }

    #[test]
    fn non_finite_pointer_is_ignored() {
        let mut state = moved(400.0, 400.0);
        let before = state;
        state.pointer_moved(f64::NAN, 10.0, &Canvas::standard());
        state.pointer_moved(10.0, f64::INFINITY, &Canvas::standard());
        assert_eq!(state, before);
    }

    #[test]
    fn pointer_mapping_has_no_smoothing() {
        let mut state = moved(0.0, 0.0);
        state.pointer_moved(800.0, 800.0, &Canvas::standard());
        assert!((state.motion_intensity() - 2.0).abs() < 1e-12);
        state.pointer_moved(0.0, 0.0, &Canvas::standard());
        assert_eq!(state.motion_intensity(), 0.5);
    }

    #[test]
    fn hundred_frames_at_unit_scale_reach_two() {
        let mut state = GlobalAnimationState::new();
        for _ in 0..100 {
            state.advance_clock(0.02);
        }
        assert!((state.clock() - 2.0).abs() < 1e-12, "clock = {}", state.clock());
    }

    #[test]
    fn clock_strictly_increases_with_positive_scale() {
        let mut state = moved(0.0, 0.0);
        let mut prev = state.clock();
        for _ in 0..50 {
            state.advance_clock(0.02);
            assert!(state.clock() > prev);
            prev = state.clock();
        }
    }

    #[test]
    fn zero_step_leaves_clock_unchanged() {
        let mut state = GlobalAnimationState::new();
        state.advance_clock(0.02);
        let before = state.clock();
        for _ in 0..10 {
            state.advance_clock(0.0);
        }
        assert_eq!(state.clock(), before);
    }

    #[test]
    fn negative_step_never_rewinds() {
        let mut state = GlobalAnimationState::new();
        state.advance_clock(0.5);
        state.advance_clock(-1.0);
        assert_eq!(state.clock(), 0.5);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_pointer_keeps_parameters_in_range(
                x in -1e6_f64..1e6,
                y in -1e6_f64..1e6,
            ) {
                let state = moved(x, y);
                prop_assert!((0.5..=2.0).contains(&state.motion_intensity()));
                prop_assert!((0.3..=2.0).contains(&state.time_scale()));
            }

            #[test]
            fn clock_is_monotonic(
                positions in proptest::collection::vec((0.0_f64..800.0, 0.0_f64..800.0), 1..50),
            ) {
                let mut state = GlobalAnimationState::new();
                for (x, y) in positions {
                    let before = state.clock();
                    state.pointer_moved(x, y, &Canvas::standard());
                    state.advance_clock(0.02);
                    prop_assert!(state.clock() > before);
                }
            }
        }
    }
}
