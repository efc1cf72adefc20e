//! Per-entity tick hooks
//!
//! Hooks run for every Physical entity before physics. They get the entity
//! mutably plus a read-only view of the terrain; anything that touches *other*
//! entities or the terrain is queued as a [`TickCommand`] and applied once every
//! hook has run, so the entity set never changes under a running hook.

use crate::domain::blocks::BlockType;
use crate::domain::entity::{Entity, EntityId};
use crate::spatial::Terrain;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickCommand {
    Detonate(EntityId),
    Remove(EntityId),
    Damage { id: EntityId, amount: f32 },
    Heal { id: EntityId, amount: f32 },
    SetBlock { x: i32, y: i32, block: BlockType },
}

pub struct TickContext<'a> {
    terrain: &'a Terrain,
    frame: u64,
    commands: &'a mut Vec<TickCommand>,
}

impl<'a> TickContext<'a> {
    pub fn new(terrain: &'a Terrain, frame: u64, commands: &'a mut Vec<TickCommand>) -> Self {
        Self { terrain, frame, commands }
    }

    #[inline]
    pub fn terrain(&self) -> &Terrain { self.terrain }

    #[inline]
    pub fn frame(&self) -> u64 { self.frame }

    pub fn detonate(&mut self, id: EntityId) {
        self.commands.push(TickCommand::Detonate(id));
    }

    pub fn remove(&mut self, id: EntityId) {
        self.commands.push(TickCommand::Remove(id));
    }

    pub fn damage(&mut self, id: EntityId, amount: f32) {
        self.commands.push(TickCommand::Damage { id, amount });
    }

    pub fn heal(&mut self, id: EntityId, amount: f32) {
        self.commands.push(TickCommand::Heal { id, amount });
    }

    pub fn set_block(&mut self, x: i32, y: i32, block: BlockType) {
        self.commands.push(TickCommand::SetBlock { x, y, block });
    }
}

/// The game layer's per-tick behaviour (input → velocity, AI, timers, ...).
pub trait TickHooks {
    fn on_tick(&mut self, _entity: &mut Entity, _ctx: &mut TickContext<'_>) {}
}

/// Run physics with only the built-in behaviours.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl TickHooks for NoHooks {}

/// Closure adapter, see [`hooks_fn`].
pub struct FnHooks<F>(F);

impl<F> TickHooks for FnHooks<F>
where
    F: FnMut(&mut Entity, &mut TickContext<'_>),
{
    fn on_tick(&mut self, entity: &mut Entity, ctx: &mut TickContext<'_>) {
        (self.0)(entity, ctx)
    }
}

/// Wrap a closure as [`TickHooks`].
pub fn hooks_fn<F>(f: F) -> FnHooks<F>
where
    F: FnMut(&mut Entity, &mut TickContext<'_>),
{
    FnHooks(f)
}

/// Built-in behaviour every entity gets: burning fuses.
pub fn builtin_tick(entity: &mut Entity, ctx: &mut TickContext<'_>) {
    let id = entity.id();
    if let Some(explosive) = entity.explosive_mut() {
        if explosive.tick_fuse() {
            ctx.detonate(id);
        }
    }
}
