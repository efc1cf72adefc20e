//! Entity - a bundle of optional capability facets
//!
//! No hierarchy: a bomb is just Physical + Inertial + Explosive, a player is
//! Physical + Inertial + Mortal. Systems filter the one map by the facet they
//! care about (`is_inertial()`, `is_explosive()`, ...).
//!
//! Facet membership is fixed once the entity is built: the fields are private and
//! only the facet contents can be mutated.

mod facets;
mod vec2;

pub use facets::{DeathAction, Explosive, Inertial, Mortal, Physical, WallSide};
pub use vec2::{Axis, Vec2};

use std::collections::BTreeMap;

use crate::core::error::EngineError;

/// Assigned by the game layer; unique for the lifetime of a World.
pub type EntityId = u32;

/// Live entities keyed by id. Ordered so every pass visits them deterministically.
pub type EntityMap = BTreeMap<EntityId, Entity>;

pub const PLAYER_WIDTH: f32 = 0.8;
pub const PLAYER_HEIGHT: f32 = 1.8;
pub const PLAYER_MASS: f32 = 1.0;
pub const PLAYER_HEALTH: f32 = 100.0;

pub const BOMB_SIZE: f32 = 0.6;
pub const BOMB_MASS: f32 = 0.5;
pub const BOMB_RADIUS: f32 = 3.0;
pub const BOMB_DAMAGE: f32 = 60.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    id: EntityId,
    physical: Option<Physical>,
    inertial: Option<Inertial>,
    explosive: Option<Explosive>,
    mortal: Option<Mortal>,
    /// Opaque renderer tag; the engine never reads it.
    sprite: Option<String>,
}

impl Entity {
    pub fn builder(id: EntityId) -> EntityBuilder {
        EntityBuilder::new(id)
    }

    /// Player-sized body that can take damage and stays in the world when killed.
    pub fn player(id: EntityId, x: f32, y: f32) -> Self {
        Self {
            id,
            physical: Some(Physical::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT)),
            inertial: Some(Inertial::new(PLAYER_MASS)),
            explosive: None,
            mortal: Some(Mortal::new(PLAYER_HEALTH, DeathAction::Persist)),
            sprite: Some("player".to_string()),
        }
    }

    /// Falling bomb that goes off after `fuse` ticks.
    pub fn bomb(id: EntityId, x: f32, y: f32, fuse: u32) -> Self {
        Self {
            id,
            physical: Some(Physical::new(x, y, BOMB_SIZE, BOMB_SIZE)),
            inertial: Some(Inertial::new(BOMB_MASS)),
            explosive: Some(Explosive {
                fuse: Some(fuse),
                ..Explosive::new(BOMB_RADIUS, BOMB_DAMAGE)
            }),
            mortal: None,
            sprite: Some("bomb".to_string()),
        }
    }

    #[inline]
    pub fn id(&self) -> EntityId { self.id }

    // === Capability predicates ===
    #[inline]
    pub fn is_physical(&self) -> bool { self.physical.is_some() }

    /// Inertial always implies Physical (enforced at build time).
    #[inline]
    pub fn is_inertial(&self) -> bool { self.physical.is_some() && self.inertial.is_some() }

    #[inline]
    pub fn is_explosive(&self) -> bool { self.explosive.is_some() }

    #[inline]
    pub fn is_mortal(&self) -> bool { self.mortal.is_some() }

    #[inline]
    pub fn is_renderable(&self) -> bool { self.sprite.is_some() }

    // === Facet access ===
    #[inline]
    pub fn physical(&self) -> Option<&Physical> { self.physical.as_ref() }

    #[inline]
    pub fn physical_mut(&mut self) -> Option<&mut Physical> { self.physical.as_mut() }

    #[inline]
    pub fn inertial(&self) -> Option<&Inertial> { self.inertial.as_ref() }

    #[inline]
    pub fn inertial_mut(&mut self) -> Option<&mut Inertial> { self.inertial.as_mut() }

    #[inline]
    pub fn explosive(&self) -> Option<&Explosive> { self.explosive.as_ref() }

    #[inline]
    pub fn explosive_mut(&mut self) -> Option<&mut Explosive> { self.explosive.as_mut() }

    #[inline]
    pub fn mortal(&self) -> Option<&Mortal> { self.mortal.as_ref() }

    #[inline]
    pub fn mortal_mut(&mut self) -> Option<&mut Mortal> { self.mortal.as_mut() }

    #[inline]
    pub fn sprite(&self) -> Option<&str> { self.sprite.as_deref() }

    /// Body and motion of an inertial entity.
    #[inline]
    pub fn motion(&self) -> Option<(&Physical, &Inertial)> {
        match (&self.physical, &self.inertial) {
            (Some(p), Some(i)) => Some((p, i)),
            _ => None,
        }
    }

    #[inline]
    pub fn motion_mut(&mut self) -> Option<(&mut Physical, &mut Inertial)> {
        match (&mut self.physical, &mut self.inertial) {
            (Some(p), Some(i)) => Some((p, i)),
            _ => None,
        }
    }

    /// Convenience for the game layer's input mapping.
    pub fn set_velocity(&mut self, vx: f32, vy: f32) -> bool {
        match self.inertial.as_mut() {
            Some(inertial) => {
                inertial.velocity = Vec2::new(vx, vy);
                true
            }
            None => false,
        }
    }
}

/// Validating constructor for arbitrary facet combinations.
#[derive(Clone, Debug)]
pub struct EntityBuilder {
    entity: Entity,
}

impl EntityBuilder {
    pub fn new(id: EntityId) -> Self {
        Self {
            entity: Entity {
                id,
                physical: None,
                inertial: None,
                explosive: None,
                mortal: None,
                sprite: None,
            },
        }
    }

    pub fn physical(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.entity.physical = Some(Physical::new(x, y, w, h));
        self
    }

    pub fn inertial(mut self, mass: f32) -> Self {
        self.entity.inertial = Some(Inertial::new(mass));
        self
    }

    /// Initial velocity; only meaningful together with `inertial`.
    pub fn velocity(mut self, vx: f32, vy: f32) -> Self {
        if let Some(inertial) = self.entity.inertial.as_mut() {
            inertial.velocity = Vec2::new(vx, vy);
        }
        self
    }

    pub fn explosive(mut self, radius: f32, max_damage: f32) -> Self {
        self.entity.explosive = Some(Explosive::new(radius, max_damage));
        self
    }

    pub fn fuse(mut self, ticks: u32) -> Self {
        if let Some(explosive) = self.entity.explosive.as_mut() {
            explosive.fuse = Some(ticks);
        }
        self
    }

    pub fn mortal(mut self, max_health: f32, on_death: DeathAction) -> Self {
        self.entity.mortal = Some(Mortal::new(max_health, on_death));
        self
    }

    pub fn sprite(mut self, sprite: impl Into<String>) -> Self {
        self.entity.sprite = Some(sprite.into());
        self
    }

    pub fn build(self) -> Result<Entity, EngineError> {
        let entity = self.entity;
        let id = entity.id;

        if entity.inertial.is_some() && entity.physical.is_none() {
            return Err(EngineError::MissingFacet { id, facet: "Inertial", required: "Physical" });
        }
        if entity.explosive.is_some() && entity.physical.is_none() {
            return Err(EngineError::MissingFacet { id, facet: "Explosive", required: "Physical" });
        }
        if let Some(mortal) = &entity.mortal {
            if mortal.on_death == DeathAction::Detonate && entity.explosive.is_none() {
                return Err(EngineError::MissingFacet { id, facet: "Mortal(Detonate)", required: "Explosive" });
            }
            if !(mortal.max_health().is_finite() && mortal.max_health() > 0.0) {
                return Err(EngineError::InvalidEntity { id, reason: "max health must be positive".into() });
            }
        }
        if let Some(body) = &entity.physical {
            if !(body.pos.is_finite() && body.w() > 0.0 && body.h() > 0.0 && body.w().is_finite() && body.h().is_finite()) {
                return Err(EngineError::InvalidEntity { id, reason: "position must be finite and extents positive".into() });
            }
        }
        if let Some(inertial) = &entity.inertial {
            if !inertial.velocity.is_finite() {
                return Err(EngineError::InvalidEntity { id, reason: "velocity must be finite".into() });
            }
        }
        Ok(entity)
    }
}
