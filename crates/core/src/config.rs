//! Startup configuration for the noise-driven animation.
//!
//! A [`NoiseConfig`] is built once (defaults, JSON, or by hand), validated,
//! and then only read. Invalid values fail fast with
//! [`EngineError::InvalidConfig`] instead of producing malformed visuals.

use crate::error::EngineError;
use crate::params::{param_bool, param_f64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_BASE_STEP: f64 = 0.02;
const DEFAULT_MAX_WIGGLE: f64 = 20.0;
const DEFAULT_SCALE_MIN: f64 = 0.9;
const DEFAULT_SCALE_MAX: f64 = 1.1;
const DEFAULT_ROTATION_MAX: f64 = 0.2;

/// Immutable animation constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Clock advance per frame at time-scale 1.0.
    pub base_step: f64,
    /// Largest positional drift of a figure, before motion intensity.
    pub max_wiggle: f64,
    /// Lower bound of the breathing scale factor.
    pub scale_min: f64,
    /// Upper bound of the breathing scale factor, before motion intensity.
    pub scale_max: f64,
    /// Largest rotation of a figure in radians, before motion intensity.
    pub rotation_max: f64,
    /// When false the clock step is zero and the composition holds still.
    pub animate: bool,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            base_step: DEFAULT_BASE_STEP,
            max_wiggle: DEFAULT_MAX_WIGGLE,
            scale_min: DEFAULT_SCALE_MIN,
            scale_max: DEFAULT_SCALE_MAX,
            rotation_max: DEFAULT_ROTATION_MAX,
            animate: true,
        }
    }
}

impl NoiseConfig {
    /// Reads a config from a JSON object, falling back to defaults per key,
    /// then validates it.
    pub fn from_json(params: &Value) -> Result<Self, EngineError> {
        let config = Self {
            base_step: param_f64(params, "base_step", DEFAULT_BASE_STEP),
            max_wiggle: param_f64(params, "max_wiggle", DEFAULT_MAX_WIGGLE),
            scale_min: param_f64(params, "scale_min", DEFAULT_SCALE_MIN),
            scale_max: param_f64(params, "scale_max", DEFAULT_SCALE_MAX),
            rotation_max: param_f64(params, "rotation_max", DEFAULT_ROTATION_MAX),
            animate: param_bool(params, "animate", true),
        };
        config.validate()?;
        Ok(config)
    }

    /// Clock step actually applied per frame.
    pub fn step(&self) -> f64 {
        if self.animate {
            self.base_step
        } else {
            0.0
        }
    }

    /// Checks that every field is finite, amplitudes and step are
    /// non-negative, and `scale_min <= scale_max`.
    pub fn validate(&self) -> Result<(), EngineError> {
        let fields = [
            ("base_step", self.base_step),
            ("max_wiggle", self.max_wiggle),
            ("scale_min", self.scale_min),
            ("scale_max", self.scale_max),
            ("rotation_max", self.rotation_max),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EngineError::InvalidConfig(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if let Some((name, value)) = fields
            .iter()
            .filter(|(name, _)| *name != "scale_min" && *name != "scale_max")
            .find(|(_, v)| *v < 0.0)
        {
            return Err(EngineError::InvalidConfig(format!(
                "{name} must not be negative, got {value}"
            )));
        }
        if self.scale_min > self.scale_max {
            return Err(EngineError::InvalidConfig(format!(
                "scale_min {} exceeds scale_max {}",
                self.scale_min, self.scale_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_config_is_valid() {
        assert!(NoiseConfig::default().validate().is_ok());
    }

    #[test]
    fn from_json_uses_defaults_for_empty_object() {
        let config = NoiseConfig::from_json(&json!({})).unwrap();
        assert_eq!(config, NoiseConfig::default());
    }

    #[test]
    fn from_json_reads_custom_values() {
        let config = NoiseConfig::from_json(&json!({
            "base_step": 0.01,
            "max_wiggle": 12,
            "scale_min": 0.8,
            "scale_max": 1.3,
            "rotation_max": 0.5,
            "animate": false,
        }))
        .unwrap();
        assert!((config.base_step - 0.01).abs() < f64::EPSILON);
        assert!((config.max_wiggle - 12.0).abs() < f64::EPSILON);
        assert!((config.scale_min - 0.8).abs() < f64::EPSILON);
        assert!((config.scale_max - 1.3).abs() < f64::EPSILON);
        assert!((config.rotation_max - 0.5).abs() < f64::EPSILON);
        assert!(!config.animate);
    }

    #[test]
    fn from_json_rejects_inverted_scale_range() {
        let err = NoiseConfig::from_json(&json!({"scale_min": 1.5, "scale_max": 1.0})).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
        assert!(err.to_string().contains("scale_min"));
    }

    #[test]
    fn validate_rejects_negative_amplitudes() {
        for field in ["max_wiggle", "rotation_max", "base_step"] {
            let mut params = serde_json::Map::new();
            params.insert(field.to_string(), json!(-1.0));
            let err = NoiseConfig::from_json(&Value::Object(params)).unwrap_err();
            assert!(
                err.to_string().contains(field),
                "expected {field} in error, got {err}"
            );
        }
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let config = NoiseConfig {
            max_wiggle: f64::NAN,
            ..NoiseConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
        let config = NoiseConfig {
            base_step: f64::INFINITY,
            ..NoiseConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn equal_scale_bounds_are_allowed() {
        let config = NoiseConfig {
            scale_min: 1.0,
            scale_max: 1.0,
            ..NoiseConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_step_is_allowed() {
        let config = NoiseConfig {
            base_step: 0.0,
            ..NoiseConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.step(), 0.0);
    }

    #[test]
    fn disabling_animation_zeroes_the_step() {
        let config = NoiseConfig {
            animate: false,
            ..NoiseConfig::default()
        };
        assert_eq!(config.step(), 0.0);
        assert!((NoiseConfig::default().step() - DEFAULT_BASE_STEP).abs() < f64::EPSILON);
    }

    #[test]
    fn json_round_trip() {
        let config = NoiseConfig {
            max_wiggle: 8.0,
            ..NoiseConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        let restored: NoiseConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(config, restored);
    }
}
