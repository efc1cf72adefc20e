//! Physics tuning
//!
//! Keep this separate from the entity data: these values apply to the whole world
//! and are loaded once per level (or tweaked live from the dev console).

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Downward acceleration in cells per tick².
pub const DEFAULT_GRAVITY: f32 = 0.03;
/// Fastest speed gravity can build up, in cells per tick.
pub const DEFAULT_TERMINAL_VELOCITY: f32 = 4.0;
/// Lower bound on collision sub-steps per tick.
pub const DEFAULT_MAX_SUBSTEPS: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Subtracted from `vy` of every inertial entity once per tick.
    pub gravity: f32,

    /// `vy` is clamped to `[-terminal_velocity, terminal_velocity]` after gravity.
    pub terminal_velocity: f32,

    /// Sub-step cap. The effective cap is never below `2 * inertial + 1`,
    /// which is the most a well-formed tick can use.
    pub max_substeps: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            terminal_velocity: DEFAULT_TERMINAL_VELOCITY,
            max_substeps: DEFAULT_MAX_SUBSTEPS,
        }
    }
}

impl PhysicsConfig {
    /// Parse a (possibly partial) JSON object; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: PhysicsConfig = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(?config, "loaded physics config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.gravity.is_finite() {
            return Err(EngineError::InvalidConfig("gravity must be finite".into()));
        }
        if !(self.terminal_velocity.is_finite() && self.terminal_velocity > 0.0) {
            return Err(EngineError::InvalidConfig(
                "terminal_velocity must be positive".into(),
            ));
        }
        if self.max_substeps == 0 {
            return Err(EngineError::InvalidConfig("max_substeps must be at least 1".into()));
        }
        Ok(())
    }

    /// Sub-step limit for a tick with `inertial` moving entities.
    #[inline]
    pub fn substep_limit(&self, inertial: usize) -> usize {
        (self.max_substeps as usize).max(inertial.saturating_mul(2).saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PhysicsConfig::from_json(r#"{ "gravity": 0.5 }"#).unwrap();
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.terminal_velocity, DEFAULT_TERMINAL_VELOCITY);
        assert_eq!(config.max_substeps, DEFAULT_MAX_SUBSTEPS);
    }

    #[test]
    fn rejects_non_positive_terminal_velocity() {
        let err = PhysicsConfig::from_json(r#"{ "terminal_velocity": 0.0 }"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = PhysicsConfig::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, EngineError::ConfigJson(_)));
    }

    #[test]
    fn substep_limit_scales_with_entities() {
        let config = PhysicsConfig::default();
        assert_eq!(config.substep_limit(0), 64);
        assert_eq!(config.substep_limit(100), 201);
    }
}
