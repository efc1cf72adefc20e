use serde::Serialize;

use crate::domain::entity::{Entity, EntityId, WallSide};

use super::World;

/// Flat per-entity view for the renderer: one row per renderable entity.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub sprite: String,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vx: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vy: Option<f32>,
    pub on_ground: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hitting_wall: Option<WallSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuse: Option<u32>,
}

impl EntitySnapshot {
    fn of(entity: &Entity) -> Option<Self> {
        let sprite = entity.sprite()?;
        let body = entity.physical()?;
        let motion = entity.inertial();
        Some(Self {
            id: entity.id(),
            sprite: sprite.to_string(),
            x: body.x(),
            y: body.y(),
            w: body.w(),
            h: body.h(),
            vx: motion.map(|m| m.velocity.x),
            vy: motion.map(|m| m.velocity.y),
            on_ground: motion.is_some_and(|m| m.on_ground),
            hitting_wall: motion.and_then(|m| m.hitting_wall),
            health: entity.mortal().map(|m| m.health()),
            fuse: entity.explosive().and_then(|e| e.fuse),
        })
    }
}

impl World {
    /// Renderable, Physical entities in id order.
    pub fn snapshot(&self) -> Vec<EntitySnapshot> {
        self.entities.values().filter_map(EntitySnapshot::of).collect()
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|err| {
            tracing::error!(%err, "entity snapshot failed to serialize");
            "[]".to_string()
        })
    }
}
