use crate::core::config::PhysicsConfig;
use crate::core::error::EngineError;

use super::{PerfStats, World};

impl World {
    /// Replace the physics settings. Invalid settings leave the current ones in place.
    pub fn set_config(&mut self, config: PhysicsConfig) -> Result<(), EngineError> {
        config.validate()?;
        tracing::debug!(?config, "physics config updated");
        self.config = config;
        Ok(())
    }

    #[inline]
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), EngineError> {
        self.set_config(PhysicsConfig { gravity, ..self.config })
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
        if !enabled {
            self.perf_stats.reset();
        }
    }

    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}
