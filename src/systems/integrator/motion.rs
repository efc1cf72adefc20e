use crate::core::config::PhysicsConfig;
use crate::domain::entity::{Axis, EntityMap, Vec2, WallSide};
use crate::systems::collision::TerrainCollision;

/// Gravity plus contact-flag reset for every inertial entity.
///
/// Contact flags are never carried over: whatever the sub-step loop finds this
/// tick is all that will be set when it returns.
pub fn apply_gravity(entities: &mut EntityMap, config: &PhysicsConfig) -> usize {
    let mut inertial = 0;
    for entity in entities.values_mut() {
        let Some((_, motion)) = entity.motion_mut() else {
            continue;
        };
        inertial += 1;

        motion.velocity.y -= config.gravity;
        motion.velocity.y = motion
            .velocity
            .y
            .clamp(-config.terminal_velocity, config.terminal_velocity);
        motion.reset_contacts();
    }
    inertial
}

/// Stop every inertial entity a hook left with a non-finite position or velocity.
///
/// Such bodies sit out collision detection until the game layer moves them back
/// somewhere real. Returns how many were frozen.
pub fn freeze_non_finite(entities: &mut EntityMap) -> usize {
    let mut frozen = 0;
    for (id, entity) in entities.iter_mut() {
        let Some((body, motion)) = entity.motion_mut() else {
            continue;
        };
        if body.pos.is_finite() && motion.velocity.is_finite() {
            continue;
        }
        tracing::warn!(
            entity = *id,
            x = body.pos.x,
            y = body.pos.y,
            vx = motion.velocity.x,
            vy = motion.velocity.y,
            "non-finite body, freezing it"
        );
        motion.velocity = Vec2::zero();
        frozen += 1;
    }
    frozen
}

/// Move every inertial entity along its velocity for `dt` ticks.
pub fn advance(entities: &mut EntityMap, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    for entity in entities.values_mut() {
        if let Some((body, motion)) = entity.motion_mut() {
            if motion.velocity.is_finite() {
                body.pos += motion.velocity * dt;
            }
        }
    }
}

/// Stop the colliding entity on the hit axis and record the contact.
///
/// Returns `false` when the collision names an entity that is gone or not
/// inertial, which means detector and integrator disagree.
pub fn resolve_terrain_hit(entities: &mut EntityMap, hit: &TerrainCollision) -> bool {
    let motion = entities.get_mut(&hit.entity).and_then(|e| e.motion_mut());
    if !engine_invariant!(
        motion.is_some(),
        "terrain collision for entity {} which is missing or not inertial",
        hit.entity
    ) {
        return false;
    }
    let Some((body, motion)) = motion else {
        return false;
    };

    motion.velocity.set(hit.axis, 0.0);

    // Put the leading edge exactly on the grid line so resting contact stays at t = 0.
    let half = body.half(hit.axis);
    let centre = if hit.direction > 0 { hit.boundary - half } else { hit.boundary + half };
    body.pos.set(hit.axis, centre);

    match hit.axis {
        Axis::Y => {
            if hit.direction < 0 {
                motion.on_ground = true;
            }
        }
        Axis::X => {
            motion.hitting_wall = Some(if hit.direction < 0 { WallSide::Left } else { WallSide::Right });
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::{Entity, EntityId};

    fn map_with(entity: Entity) -> EntityMap {
        let mut map = EntityMap::new();
        map.insert(entity.id(), entity);
        map
    }

    fn hit(entity: EntityId, axis: Axis, direction: i8, boundary: f32) -> TerrainCollision {
        TerrainCollision { t: 0.0, entity, axis, direction, boundary, cell: (0, 0) }
    }

    #[test]
    fn gravity_resets_contacts_and_clamps() {
        let mut bomb = Entity::bomb(1, 2.0, 2.0, 10);
        {
            let (_, m) = bomb.motion_mut().unwrap();
            m.on_ground = true;
            m.hitting_wall = Some(WallSide::Left);
            m.velocity.y = -3.99;
        }
        let mut map = map_with(bomb);
        let config = PhysicsConfig { gravity: 0.5, terminal_velocity: 4.0, ..PhysicsConfig::default() };

        assert_eq!(apply_gravity(&mut map, &config), 1);
        let m = map[&1].inertial().unwrap();
        assert_eq!(m.velocity.y, -4.0);
        assert!(!m.on_ground);
        assert_eq!(m.hitting_wall, None);
    }

    #[test]
    fn non_finite_bodies_are_frozen() {
        let mut map = map_with(Entity::builder(1).physical(2.0, 2.0, 1.0, 1.0).inertial(1.0).velocity(0.5, 0.0).build().unwrap());
        map.insert(2, Entity::builder(2).physical(4.0, 2.0, 1.0, 1.0).inertial(1.0).velocity(0.5, 0.0).build().unwrap());
        map.insert(3, Entity::builder(3).physical(6.0, 2.0, 1.0, 1.0).inertial(1.0).velocity(0.5, 0.0).build().unwrap());
        map.get_mut(&1).unwrap().physical_mut().unwrap().pos.x = f32::NAN;
        map.get_mut(&2).unwrap().set_velocity(f32::INFINITY, 0.0);

        assert_eq!(freeze_non_finite(&mut map), 2);
        assert_eq!(map[&1].inertial().unwrap().velocity, Vec2::zero());
        assert_eq!(map[&2].inertial().unwrap().velocity, Vec2::zero());
        assert_eq!(map[&3].inertial().unwrap().velocity, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn advance_moves_only_inertial() {
        let mut map = map_with(Entity::builder(1).physical(0.0, 0.0, 1.0, 1.0).inertial(1.0).velocity(2.0, -1.0).build().unwrap());
        map.insert(2, Entity::builder(2).physical(5.0, 5.0, 1.0, 1.0).build().unwrap());

        advance(&mut map, 0.5);
        assert_eq!(map[&1].physical().unwrap().pos, Vec2::new(1.0, -0.5));
        assert_eq!(map[&2].physical().unwrap().pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn landing_snaps_and_grounds() {
        let mut map = map_with(Entity::builder(1).physical(3.5, 5.50001, 1.0, 1.0).inertial(1.0).velocity(0.3, -2.0).build().unwrap());

        assert!(resolve_terrain_hit(&mut map, &hit(1, Axis::Y, -1, 5.0)));
        let (body, m) = map[&1].motion().unwrap();
        assert_eq!(body.bottom(), 5.0);
        assert_eq!(m.velocity, Vec2::new(0.3, 0.0));
        assert!(m.on_ground);
    }

    #[test]
    fn ceiling_bump_is_not_ground() {
        let mut map = map_with(Entity::builder(1).physical(3.5, 5.5, 1.0, 1.0).inertial(1.0).velocity(0.0, 2.0).build().unwrap());

        assert!(resolve_terrain_hit(&mut map, &hit(1, Axis::Y, 1, 6.0)));
        let (body, m) = map[&1].motion().unwrap();
        assert_eq!(body.top(), 6.0);
        assert!(!m.on_ground);
        assert_eq!(m.velocity.y, 0.0);
    }

    #[test]
    fn wall_hits_record_side() {
        let mut map = map_with(Entity::builder(1).physical(3.5, 5.5, 1.0, 1.0).inertial(1.0).velocity(-1.0, 0.0).build().unwrap());

        assert!(resolve_terrain_hit(&mut map, &hit(1, Axis::X, -1, 3.0)));
        assert_eq!(map[&1].inertial().unwrap().hitting_wall, Some(WallSide::Left));
        assert_eq!(map[&1].physical().unwrap().left(), 3.0);

        assert!(resolve_terrain_hit(&mut map, &hit(1, Axis::X, 1, 5.0)));
        assert_eq!(map[&1].inertial().unwrap().hitting_wall, Some(WallSide::Right));
    }

    #[test]
    #[should_panic(expected = "engine invariant violated")]
    #[cfg(debug_assertions)]
    fn hit_on_missing_entity_is_an_invariant_violation() {
        let mut map = EntityMap::new();
        resolve_terrain_hit(&mut map, &hit(42, Axis::Y, -1, 1.0));
    }
}
