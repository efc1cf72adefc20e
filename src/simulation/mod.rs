//! World - owns one level's terrain and its live entities
//!
//! Orchestration only:
//! - entity bookkeeping in entities/
//! - the per-tick loop in step/
//! - detonations and damage in explosion/
//! - renderer snapshots in snapshot/
//!
//! The detector and integrator pieces it drives live in `systems/`.

use std::collections::HashSet;

use crate::core::config::PhysicsConfig;
use crate::domain::entity::{EntityId, EntityMap, Vec2};
use crate::spatial::Terrain;
use crate::systems::collision::{TerrainCollision, ThingCollision};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "entities/entities.rs"]
mod entities;
#[path = "explosion/explosion.rs"]
mod explosion;
#[path = "step/commands.rs"]
mod commands;
#[path = "step/step_physics.rs"]
mod step_physics;
#[path = "snapshot/snapshot.rs"]
mod snapshot;
#[path = "init/settings.rs"]
mod settings;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

pub use perf_stats::PerfStats;
pub use snapshot::EntitySnapshot;
pub use step_physics::step_physics;

use perf_timer::PerfTimer;

/// What one blast did, for the renderer and sound layer.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplosionReport {
    pub source: EntityId,
    pub centre: Vec2,
    /// Cells turned to air. The caller marks them dirty for the renderer.
    pub destroyed: Vec<(i32, i32)>,
    pub damaged: Vec<(EntityId, f32)>,
    pub killed: Vec<EntityId>,
}

/// Everything that happened during one `step_physics` call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Durations of each sub-step, in order. Always sums to one tick.
    pub substeps: Vec<f32>,
    pub terrain_hits: Vec<TerrainCollision>,
    /// Entity-entity contacts seen by the detector. Not resolved.
    pub entity_contacts: Vec<ThingCollision>,
    pub explosions: Vec<ExplosionReport>,
    /// The sub-step guard fired and the rest of the tick was advanced blind.
    pub hit_substep_cap: bool,
}

impl StepReport {
    pub fn consumed(&self) -> f32 {
        self.substeps.iter().sum()
    }
}

/// The simulation world
pub struct World {
    terrain: Terrain,
    entities: EntityMap,
    /// Ids removed from this world; never accepted again.
    retired: HashSet<EntityId>,
    next_id: EntityId,

    // Settings
    config: PhysicsConfig,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl World {
    pub fn new(terrain: Terrain) -> Self {
        Self::with_config(terrain, PhysicsConfig::default())
    }

    pub fn with_config(terrain: Terrain, config: PhysicsConfig) -> Self {
        Self {
            terrain,
            entities: EntityMap::new(),
            retired: HashSet::new(),
            next_id: 1,
            config,
            frame: 0,
            perf_enabled: false,
            perf_stats: PerfStats::default(),
        }
    }

    #[inline]
    pub fn terrain(&self) -> &Terrain { &self.terrain }

    /// Gameplay-side block edits; visible to the very next collision query.
    #[inline]
    pub fn terrain_mut(&mut self) -> &mut Terrain { &mut self.terrain }

    #[inline]
    pub fn frame(&self) -> u64 { self.frame }

    /// Advance one tick with the given hooks. See [`step_physics`].
    pub fn step<H: crate::systems::integrator::TickHooks + ?Sized>(&mut self, hooks: &mut H) -> StepReport {
        step_physics(self, hooks)
    }
}
