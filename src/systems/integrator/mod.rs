//! Integrator building blocks
//!
//! The sub-step loop itself lives in `simulation::step_physics`; these are the
//! pieces it drives: hooks, gravity, uniform advance and contact resolution.

mod hooks;
mod motion;

pub use hooks::{builtin_tick, hooks_fn, FnHooks, NoHooks, TickCommand, TickContext, TickHooks};
pub use motion::{advance, apply_gravity, freeze_non_finite, resolve_terrain_hit};
