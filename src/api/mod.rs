//! Public API for the JS game layer

pub mod wasm;
