//! RGBA color used for fills, strokes and backgrounds.
//!
//! Components are `f64` in [0, 1]. Colors serialize as hex strings
//! (`"#rrggbb"` or `"#rrggbbaa"`), with the 8-bit quantization that implies.

use crate::error::EngineError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Opaque color from unit components.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from 8-bit components.
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: f64::from(a) / 255.0,
        }
    }

    /// Same color with alpha replaced, clamped to [0, 1].
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Components quantized to 8 bits, clamped first.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Parses `"#rrggbb"` / `"#rrggbbaa"`, with or without `#`, any case.
    pub fn from_hex(hex: &str) -> Result<Self, EngineError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(EngineError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        let component = |range: std::ops::Range<usize>, name: &str| {
            hex.get(range)
                .ok_or_else(|| EngineError::InvalidColor(format!("invalid {name} component")))
                .and_then(|digits| {
                    u8::from_str_radix(digits, 16).map_err(|e| {
                        EngineError::InvalidColor(format!("invalid {name} component: {e}"))
                    })
                })
        };
        let r = component(0..2, "red")?;
        let g = component(2..4, "green")?;
        let b = component(4..6, "blue")?;
        let a = if hex.len() == 8 {
            component(6..8, "alpha")?
        } else {
            255
        };
        Ok(Self::rgba8(r, g, b, a))
    }

    /// `"#rrggbb"` for opaque colors, `"#rrggbbaa"` otherwise.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// CSS `rgba(...)` string for 2D canvas contexts.
    pub fn to_css(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("rgba({r}, {g}, {b}, {:.3})", self.a.clamp(0.0, 1.0))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_rgb() {
        let c = Color::from_hex("#ff8000").unwrap();
        assert!((c.r - 1.0).abs() < 1e-12);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-12);
        assert!(c.b.abs() < 1e-12);
        assert!((c.a - 1.0).abs() < 1e-12);
    }

    #[test]
    fn from_hex_parses_alpha_without_prefix() {
        let c = Color::from_hex("FFFFFF80").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(matches!(
            Color::from_hex("#fff"),
            Err(EngineError::InvalidColor(_))
        ));
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn to_hex_omits_opaque_alpha() {
        assert_eq!(Color::rgba8(0x12, 0x34, 0x56, 255).to_hex(), "#123456");
        assert_eq!(Color::rgba8(0x12, 0x34, 0x56, 0x80).to_hex(), "#12345680");
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::WHITE.with_alpha(3.0).a, 1.0);
        assert_eq!(Color::WHITE.with_alpha(-1.0).a, 0.0);
    }

    #[test]
    fn to_css_formats_rgba() {
        assert_eq!(Color::BLACK.with_alpha(0.5).to_css(), "rgba(0, 0, 0, 0.500)");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let c = Color::rgba8(10, 20, 30, 40);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#0a141e28\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_rgba8(), [10, 20, 30, 40]);
    }
}
