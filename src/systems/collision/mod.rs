//! Collision Detector - read-only swept tests over terrain and entities
//!
//! Nothing in here mutates the world. "No collision" is `None`, never an error.
//!
//! Both searches visit entities in id order and reduce with a total order
//! (time, id, axis), so the `parallel` build picks exactly the same contact as
//! the sequential one.

mod terrain;
mod things;
mod types;

pub use terrain::{next_terrain_collision, spanned_cells, sweep_axis, sweep_entity, AxisHit};
pub use things::{calculate_thing_collision, next_thing_collision};
pub use types::{TerrainCollision, ThingCollision, SPAN_EPSILON};
