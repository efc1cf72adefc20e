//! rect engine - tile-world continuous collision physics in WASM
//!
//! Axis-aligned boxes move through a solid/non-solid block grid and stop exactly
//! on the first block they would touch, sub-stepping through a tick so nothing
//! tunnels no matter how fast it moves.
//!
//! Architecture:
//! - core/          - config, errors, invariant macro
//! - spatial/       - terrain grid
//! - domain/        - blocks and entities
//! - systems/       - collision detection, integration, blast geometry
//! - simulation/    - World and the per-tick loop (orchestration only)
//! - api/           - JS-facing facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

#[doc(hidden)]
pub use tracing as __tracing;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"rect engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::Engine;
pub use crate::core::{EngineError, PhysicsConfig};
pub use domain::blocks::BlockType;
pub use domain::entity::{DeathAction, Entity, EntityBuilder, EntityId, Vec2};
pub use simulation::{step_physics, ExplosionReport, PerfStats, StepReport, World};
pub use spatial::Terrain;
pub use systems::integrator::{hooks_fn, NoHooks, TickContext, TickHooks};

// Export block ids for JS
#[wasm_bindgen]
pub fn block_air() -> u8 { BlockType::Air.id() }
#[wasm_bindgen]
pub fn block_grass() -> u8 { BlockType::Grass.id() }
#[wasm_bindgen]
pub fn block_grasses() -> u8 { BlockType::Grasses.id() }
#[wasm_bindgen]
pub fn block_stone() -> u8 { BlockType::Stone.id() }
#[wasm_bindgen]
pub fn block_soil() -> u8 { BlockType::Soil.id() }
#[wasm_bindgen]
pub fn block_placeholder() -> u8 { BlockType::Placeholder.id() }
