//! Bridge configuration
//!
//! Loaded from a JSON document (camelCase keys); every field is optional and
//! falls back to the Box2D defaults.
//!
//! ```json
//! {
//!   "engine": { "maxTranslation": 2.0, "maxRotation": 1.5708, "defaultGravity": { "x": 0, "y": 10 } },
//!   "logging": { "level": "box2d_bridge=debug" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::Vec2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse bridge config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BridgeConfig {
    pub engine: EngineSettings,
    pub logging: LoggingConfig,
}

/// Engine tuning shared by every world a namespace creates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineSettings {
    /// Maximum body translation per step (meters)
    pub max_translation: f32,
    /// Maximum body rotation per step (radians)
    pub max_rotation: f32,
    /// Gravity used by `b2World()` when called without arguments
    pub default_gravity: Vec2,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_translation: 2.0,
            max_rotation: 0.5 * std::f32::consts::PI,
            default_gravity: Vec2::new(0.0, 10.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `box2d_bridge=trace`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl BridgeConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BridgeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let engine = &self.engine;
        if !(engine.max_translation.is_finite() && engine.max_translation > 0.0) {
            return Err(ConfigError::Invalid {
                field: "engine.maxTranslation",
                reason: format!("must be a positive finite number, got {}", engine.max_translation),
            });
        }
        if !(engine.max_rotation.is_finite() && engine.max_rotation > 0.0) {
            return Err(ConfigError::Invalid {
                field: "engine.maxRotation",
                reason: format!("must be a positive finite number, got {}", engine.max_rotation),
            });
        }
        if !engine.default_gravity.is_valid() {
            return Err(ConfigError::Invalid {
                field: "engine.defaultGravity",
                reason: "components must be finite".to_string(),
            });
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "logging.level",
                reason: "must not be empty".to_string(),
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        if let Err(err) = tracing_subscriber::EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Invalid {
                field: "logging.level",
                reason: format!("not a valid filter directive: {err}"),
            });
        }
        Ok(())
    }
}
