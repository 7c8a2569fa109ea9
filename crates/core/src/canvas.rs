//! Fixed-size drawing area and its placement inside a host viewport.
//!
//! The composition is laid out on an 800×800 logical canvas. Resizing the
//! host viewport never resizes the canvas; it only moves it so that it stays
//! centred.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::EngineError;

/// Logical canvas size used by the composition.
pub const CANVAS_SIZE: f64 = 800.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    width: f64,
    height: f64,
    background: Color,
}

impl Canvas {
    /// Creates a canvas. Width and height must be finite and positive.
    pub fn new(width: f64, height: f64, background: Color) -> Result<Self, EngineError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(EngineError::InvalidDimensions);
        }
        Ok(Self {
            width,
            height,
            background,
        })
    }

    /// The 800×800 canvas with the default deep-navy background.
    pub fn standard() -> Self {
        Self {
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
            background: Color::rgba8(0x10, 0x12, 0x2b, 0xff),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Top-left offset that centres this canvas in a `viewport_w × viewport_h`
    /// viewport. Negative when the viewport is smaller than the canvas.
    pub fn centered_in(&self, viewport_w: f64, viewport_h: f64) -> DVec2 {
        DVec2::new(
            (viewport_w - self.width) * 0.5,
            (viewport_h - self.height) * 0.5,
        )
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_canvas_is_800_square() {
        let c = Canvas::standard();
        assert_eq!(c.width(), 800.0);
        assert_eq!(c.height(), 800.0);
        assert_eq!(c.center(), DVec2::new(400.0, 400.0));
    }

    #[test]
    fn new_rejects_degenerate_sizes() {
        assert!(Canvas::new(0.0, 10.0, Color::BLACK).is_err());
        assert!(Canvas::new(10.0, -1.0, Color::BLACK).is_err());
        assert!(Canvas::new(f64::NAN, 10.0, Color::BLACK).is_err());
        assert!(Canvas::new(640.0, 480.0, Color::BLACK).is_ok());
    }

    #[test]
    fn centered_in_larger_viewport() {
        let c = Canvas::standard();
        assert_eq!(c.centered_in(1200.0, 1000.0), DVec2::new(200.0, 100.0));
    }

    #[test]
    fn centered_in_smaller_viewport_goes_negative() {
        let c = Canvas::standard();
        assert_eq!(c.centered_in(600.0, 800.0), DVec2::new(-100.0, 0.0));
    }

    #[test]
    fn serde_round_trip() {
        let c = Canvas::new(320.0, 200.0, Color::rgba8(1, 2, 3, 255)).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let back: Canvas = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width(), 320.0);
        assert_eq!(back.background().to_rgba8(), [1, 2, 3, 255]);
    }
}
