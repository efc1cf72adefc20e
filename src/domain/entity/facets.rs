//! Capability facets
//!
//! Each facet is an independent record; an entity carries whichever subset it
//! needs. Nothing here knows about the others except Inertial, which is only
//! meaningful next to a Physical.

use serde::{Deserialize, Serialize};

use super::vec2::{Axis, Vec2};

/// Position and extents. The AABB is centred on `pos` and its size never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Physical {
    pub pos: Vec2,
    size: Vec2,
}

impl Physical {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 { self.pos.x }

    #[inline]
    pub fn y(&self) -> f32 { self.pos.y }

    /// Full width.
    #[inline]
    pub fn w(&self) -> f32 { self.size.x }

    /// Full height.
    #[inline]
    pub fn h(&self) -> f32 { self.size.y }

    #[inline]
    pub fn half(&self, axis: Axis) -> f32 {
        self.size.get(axis) * 0.5
    }

    /// Low edge (left / bottom) on `axis`.
    #[inline]
    pub fn lo(&self, axis: Axis) -> f32 {
        self.pos.get(axis) - self.half(axis)
    }

    /// High edge (right / top) on `axis`.
    #[inline]
    pub fn hi(&self, axis: Axis) -> f32 {
        self.pos.get(axis) + self.half(axis)
    }

    #[inline]
    pub fn bottom(&self) -> f32 { self.lo(Axis::Y) }

    #[inline]
    pub fn top(&self) -> f32 { self.hi(Axis::Y) }

    #[inline]
    pub fn left(&self) -> f32 { self.lo(Axis::X) }

    #[inline]
    pub fn right(&self) -> f32 { self.hi(Axis::X) }
}

/// Which side an entity is pressing against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
}

/// Moving entity state. Contact flags are rewritten by every physics step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inertial {
    /// Reserved for momentum exchange; the resolver ignores it.
    pub mass: f32,
    pub velocity: Vec2,
    pub on_ground: bool,
    pub hitting_wall: Option<WallSide>,
}

impl Inertial {
    pub fn new(mass: f32) -> Self {
        Self {
            mass,
            velocity: Vec2::zero(),
            on_ground: false,
            hitting_wall: None,
        }
    }

    #[inline]
    pub fn reset_contacts(&mut self) {
        self.on_ground = false;
        self.hitting_wall = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Explosive {
    pub radius: f32,
    pub max_damage: f32,
    /// Ticks until detonation; `None` waits for an explicit trigger.
    pub fuse: Option<u32>,
}

impl Explosive {
    pub fn new(radius: f32, max_damage: f32) -> Self {
        Self { radius, max_damage, fuse: None }
    }

    /// Linear falloff: full damage at the centre, zero at the rim and beyond.
    pub fn damage_at(&self, distance: f32) -> f32 {
        if self.radius <= 0.0 || distance >= self.radius {
            return 0.0;
        }
        self.max_damage * (1.0 - distance / self.radius)
    }

    /// Count the fuse down by one tick. Returns `true` when it burns out.
    pub fn tick_fuse(&mut self) -> bool {
        match self.fuse {
            Some(0) => true,
            Some(n) => {
                self.fuse = Some(n - 1);
                n == 1
            }
            None => false,
        }
    }
}

/// What happens when a Mortal entity's health reaches zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathAction {
    /// Removed from the world.
    #[default]
    Despawn,
    /// Goes off like a fused explosive (needs the Explosive facet).
    Detonate,
    /// Stays in the world dead; the game layer decides (e.g. the player's respawn screen).
    Persist,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mortal {
    health: f32,
    max_health: f32,
    pub on_death: DeathAction,
}

impl Mortal {
    pub fn new(max_health: f32, on_death: DeathAction) -> Self {
        Self {
            health: max_health,
            max_health,
            on_death,
        }
    }

    #[inline]
    pub fn health(&self) -> f32 { self.health }

    #[inline]
    pub fn max_health(&self) -> f32 { self.max_health }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Apply damage. Returns `true` only on the tick the entity dies.
    pub fn damage(&mut self, amount: f32) -> bool {
        if self.is_dead() || amount <= 0.0 {
            return false;
        }
        self.health = (self.health - amount).max(0.0);
        self.is_dead()
    }

    /// Heal up to max health. The dead stay dead.
    pub fn heal(&mut self, amount: f32) {
        if self.is_dead() || amount <= 0.0 {
            return;
        }
        self.health = (self.health + amount).min(self.max_health);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_centred_on_position() {
        let body = Physical::new(5.5, 10.5, 1.0, 2.0);
        assert_eq!(body.left(), 5.0);
        assert_eq!(body.right(), 6.0);
        assert_eq!(body.bottom(), 9.5);
        assert_eq!(body.top(), 11.5);
    }

    #[test]
    fn fuse_burns_out_after_exact_tick_count() {
        let mut bomb = Explosive { fuse: Some(3), ..Explosive::new(2.0, 10.0) };
        assert!(!bomb.tick_fuse());
        assert!(!bomb.tick_fuse());
        assert!(bomb.tick_fuse());
        assert_eq!(bomb.fuse, Some(0));
    }

    #[test]
    fn unfused_explosive_never_burns_out() {
        let mut bomb = Explosive::new(2.0, 10.0);
        for _ in 0..10 {
            assert!(!bomb.tick_fuse());
        }
    }

    #[test]
    fn damage_falls_off_linearly() {
        let bomb = Explosive::new(4.0, 20.0);
        assert_eq!(bomb.damage_at(0.0), 20.0);
        assert_eq!(bomb.damage_at(2.0), 10.0);
        assert_eq!(bomb.damage_at(4.0), 0.0);
        assert_eq!(bomb.damage_at(9.0), 0.0);
    }

    #[test]
    fn damage_reports_death_once() {
        let mut hp = Mortal::new(10.0, DeathAction::Despawn);
        assert!(!hp.damage(4.0));
        assert!(hp.damage(100.0));
        assert_eq!(hp.health(), 0.0);
        assert!(!hp.damage(1.0));
    }

    #[test]
    fn heal_clamps_and_ignores_the_dead() {
        let mut hp = Mortal::new(10.0, DeathAction::Persist);
        hp.damage(6.0);
        hp.heal(100.0);
        assert_eq!(hp.health(), 10.0);
        hp.damage(10.0);
        hp.heal(5.0);
        assert!(hp.is_dead());
    }
}
