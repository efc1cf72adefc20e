use wasm_bindgen::prelude::*;

use crate::core::config::PhysicsConfig;
use crate::core::error::EngineError;
use crate::domain::blocks::BlockType;
use crate::domain::entity::{Entity, EntityId, WallSide};
use crate::simulation::{PerfStats, StepReport, World};
use crate::spatial::Terrain;
use crate::systems::integrator::NoHooks;

fn js_err(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct Engine {
    world: World,
    /// Cells destroyed since the last `take_destroyed_cells`, as flat x,y pairs.
    destroyed: Vec<i32>,
    last_report: StepReport,
}

impl Engine {
    fn from_world(world: World) -> Self {
        Self { world, destroyed: Vec::new(), last_report: StepReport::default() }
    }

    fn spawn(&mut self, entity: Entity) -> Result<EntityId, JsValue> {
        self.world.insert(entity).map_err(js_err)
    }

    fn record_blasts(&mut self, report: &StepReport) {
        for blast in &report.explosions {
            for &(x, y) in &blast.destroyed {
                self.destroyed.push(x);
                self.destroyed.push(y);
            }
        }
    }

    /// Native access for tooling and tests.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

#[wasm_bindgen]
impl Engine {
    /// Empty (all air) level of the given size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_world(World::new(Terrain::new(width, height)))
    }

    /// Flat test level: solid ground below row `ground`.
    #[wasm_bindgen(js_name = newFlat)]
    pub fn new_flat(width: u32, height: u32, ground: u32) -> Self {
        Self::from_world(World::new(Terrain::flat(width, height, ground)))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.world.terrain().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.world.terrain().height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.world.frame() }

    #[wasm_bindgen(getter)]
    pub fn entity_count(&self) -> u32 { self.world.entity_count() as u32 }

    // === TERRAIN ===

    /// Unknown block ids and out-of-range cells are ignored.
    pub fn set_block(&mut self, x: i32, y: i32, block: u8) -> bool {
        match BlockType::from_id(block) {
            Some(block) => self.world.terrain_mut().set(x, y, block),
            None => false,
        }
    }

    pub fn get_block(&self, x: i32, y: i32) -> u8 {
        self.world.terrain().at(x, y).id()
    }

    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, block: u8) -> bool {
        match BlockType::from_id(block) {
            Some(block) => {
                self.world.terrain_mut().fill_rect(x0, y0, x1, y1, block);
                true
            }
            None => false,
        }
    }

    /// Flat x,y pairs of every cell blasted to air since the last call.
    pub fn take_destroyed_cells(&mut self) -> Vec<i32> {
        std::mem::take(&mut self.destroyed)
    }

    // === ENTITIES ===

    pub fn spawn_player(&mut self, x: f32, y: f32) -> Result<u32, JsValue> {
        let id = self.world.next_id();
        self.spawn(Entity::player(id, x, y))
    }

    pub fn spawn_bomb(&mut self, x: f32, y: f32, fuse: u32) -> Result<u32, JsValue> {
        let id = self.world.next_id();
        self.spawn(Entity::bomb(id, x, y, fuse))
    }

    /// Plain falling box with a renderer tag.
    pub fn spawn_box(&mut self, x: f32, y: f32, w: f32, h: f32, sprite: String) -> Result<u32, JsValue> {
        let id = self.world.next_id();
        let entity = Entity::builder(id)
            .physical(x, y, w, h)
            .inertial(1.0)
            .sprite(sprite)
            .build()
            .map_err(js_err)?;
        self.spawn(entity)
    }

    pub fn remove_entity(&mut self, id: u32) -> bool {
        self.world.remove(id).is_some()
    }

    pub fn has_entity(&self, id: u32) -> bool {
        self.world.contains(id)
    }

    pub fn set_velocity(&mut self, id: u32, vx: f32, vy: f32) -> bool {
        match self.world.get_mut(id) {
            Some(entity) => entity.set_velocity(vx, vy),
            None => false,
        }
    }

    /// `[x, y]`, or undefined when the entity is gone or has no body.
    pub fn position(&self, id: u32) -> Option<Vec<f32>> {
        let body = self.world.get(id)?.physical()?;
        Some(vec![body.x(), body.y()])
    }

    pub fn velocity(&self, id: u32) -> Option<Vec<f32>> {
        let motion = self.world.get(id)?.inertial()?;
        Some(vec![motion.velocity.x, motion.velocity.y])
    }

    pub fn on_ground(&self, id: u32) -> bool {
        self.world
            .get(id)
            .and_then(|e| e.inertial())
            .is_some_and(|m| m.on_ground)
    }

    /// -1 pressing a wall on the left, 1 on the right, 0 otherwise.
    pub fn hitting_wall(&self, id: u32) -> i8 {
        match self.world.get(id).and_then(|e| e.inertial()).and_then(|m| m.hitting_wall) {
            Some(WallSide::Left) => -1,
            Some(WallSide::Right) => 1,
            None => 0,
        }
    }

    pub fn health(&self, id: u32) -> Option<f32> {
        Some(self.world.get(id)?.mortal()?.health())
    }

    /// Returns how many blasts went off (chain reactions included).
    pub fn detonate(&mut self, id: u32) -> u32 {
        let report = StepReport { explosions: self.world.detonate(id), ..StepReport::default() };
        self.record_blasts(&report);
        report.explosions.len() as u32
    }

    pub fn damage(&mut self, id: u32, amount: f32) -> u32 {
        let report = StepReport { explosions: self.world.damage(id, amount), ..StepReport::default() };
        self.record_blasts(&report);
        report.explosions.len() as u32
    }

    pub fn heal(&mut self, id: u32, amount: f32) -> bool {
        self.world.heal(id, amount)
    }

    // === SIMULATION ===

    /// Advance one tick. Returns the number of sub-steps it took.
    pub fn step(&mut self) -> u32 {
        let report = self.world.step(&mut NoHooks);
        self.record_blasts(&report);
        let substeps = report.substeps.len() as u32;
        self.last_report = report;
        substeps
    }

    pub fn last_terrain_hits(&self) -> u32 {
        self.last_report.terrain_hits.len() as u32
    }

    pub fn last_entity_contacts(&self) -> u32 {
        self.last_report.entity_contacts.len() as u32
    }

    pub fn last_explosions(&self) -> u32 {
        self.last_report.explosions.len() as u32
    }

    pub fn snapshot_json(&self) -> String {
        self.world.snapshot_json()
    }

    // === SETTINGS ===

    /// Missing keys keep their defaults; an invalid config is rejected whole.
    pub fn load_config_json(&mut self, json: &str) -> Result<(), JsValue> {
        let config = PhysicsConfig::from_json(json).map_err(js_err)?;
        self.world.set_config(config).map_err(js_err)
    }

    pub fn config_json(&self) -> String {
        serde_json::to_string(self.world.config()).unwrap_or_default()
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), JsValue> {
        self.world.set_gravity(gravity).map_err(js_err)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.world.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.world.perf_stats()
    }
}
