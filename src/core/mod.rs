//! Core - Shared plumbing used by every other layer
//!
//! - utils/  - invariant macros (must be first for macro export!)
//! - error   - setup-time error taxonomy
//! - config  - physics tuning

#[macro_use]
#[path = "utils/safety.rs"]
pub mod safety;

pub mod config;
pub mod error;

pub use config::PhysicsConfig;
pub use error::EngineError;
