use wasm_bindgen::prelude::*;

/// Last step's timings and counters (all zero while perf metrics are off).
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) hooks_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) detect_ms: f64,
    pub(super) substeps: u32,
    pub(super) terrain_hits: u32,
    pub(super) entity_contacts: u32,
    pub(super) detonations: u32,
    pub(super) entity_count: u32,
    pub(super) inertial_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn hooks_ms(&self) -> f64 { self.hooks_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    /// Time spent inside the two collision searches (part of `integrate_ms`).
    #[wasm_bindgen(getter)]
    pub fn detect_ms(&self) -> f64 { self.detect_ms }
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
    #[wasm_bindgen(getter)]
    pub fn terrain_hits(&self) -> u32 { self.terrain_hits }
    #[wasm_bindgen(getter)]
    pub fn entity_contacts(&self) -> u32 { self.entity_contacts }
    #[wasm_bindgen(getter)]
    pub fn detonations(&self) -> u32 { self.detonations }
    #[wasm_bindgen(getter)]
    pub fn entity_count(&self) -> u32 { self.entity_count }
    #[wasm_bindgen(getter)]
    pub fn inertial_count(&self) -> u32 { self.inertial_count }
}
