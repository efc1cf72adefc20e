use crate::systems::collision::{next_terrain_collision, next_thing_collision};
use crate::systems::integrator::{
    advance, apply_gravity, builtin_tick, freeze_non_finite, resolve_terrain_hit, TickContext,
    TickHooks,
};

use super::commands::apply_commands;
use super::{PerfTimer, StepReport, World};

/// Advance the world by exactly one tick.
///
/// Order within a tick:
/// 1. built-in behaviours and `hooks` for every Physical entity, queuing commands
/// 2. queued commands, in the order they were issued; bodies a hook left
///    non-finite are frozen
/// 3. gravity and contact-flag reset for every Inertial entity
/// 4. the sub-step loop: find the earliest terrain contact inside the remaining
///    budget, move everything up to it, resolve it, repeat until the tick is used up
///
/// Entity-entity contacts are detected along the way and reported, not resolved.
pub fn step_physics<H: TickHooks + ?Sized>(world: &mut World, hooks: &mut H) -> StepReport {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let mut lap = PerfTimer::start();

    let mut report = StepReport::default();

    // === HOOKS ===
    let mut commands = Vec::new();
    {
        let mut ctx = TickContext::new(&world.terrain, world.frame, &mut commands);
        for entity in world.entities.values_mut() {
            if !entity.is_physical() {
                continue;
            }
            builtin_tick(entity, &mut ctx);
            hooks.on_tick(entity, &mut ctx);
        }
    }
    apply_commands(world, commands, &mut report);
    freeze_non_finite(&mut world.entities);
    if perf_on {
        world.perf_stats.hooks_ms = lap.lap_ms();
    }

    // === GRAVITY ===
    let inertial = apply_gravity(&mut world.entities, &world.config);
    let limit = world.config.substep_limit(inertial);

    // === SUB-STEPS ===
    let mut detect_ms = 0.0;
    let mut remaining = 1.0_f32;
    while remaining > 0.0 {
        if report.substeps.len() >= limit {
            tracing::warn!(
                frame = world.frame,
                substeps = report.substeps.len(),
                remaining,
                "sub-step limit reached, advancing the rest of the tick unchecked"
            );
            advance(&mut world.entities, remaining);
            report.substeps.push(remaining);
            report.hit_substep_cap = true;
            break;
        }

        let detect = if perf_on { Some(PerfTimer::start()) } else { None };
        let terrain_hit = next_terrain_collision(&world.terrain, &world.entities, remaining);
        let contact = next_thing_collision(&world.entities, remaining);
        if let Some(detect) = detect {
            detect_ms += detect.elapsed_ms();
        }

        let dt = terrain_hit.map_or(remaining, |hit| hit.t);
        if let Some(contact) = contact.filter(|c| c.t <= dt) {
            let seen = report
                .entity_contacts
                .iter()
                .any(|c| c.a == contact.a && c.b == contact.b);
            if !seen {
                report.entity_contacts.push(contact);
            }
        }

        advance(&mut world.entities, dt);
        report.substeps.push(dt);
        match terrain_hit {
            Some(hit) => {
                tracing::trace!(
                    entity = hit.entity,
                    axis = ?hit.axis,
                    t = hit.t,
                    boundary = hit.boundary,
                    "terrain contact"
                );
                resolve_terrain_hit(&mut world.entities, &hit);
                report.terrain_hits.push(hit);
                remaining -= dt;
            }
            None => remaining = 0.0,
        }
    }

    world.frame += 1;

    if perf_on {
        let stats = &mut world.perf_stats;
        stats.integrate_ms = lap.lap_ms();
        stats.detect_ms = detect_ms;
        stats.substeps = report.substeps.len() as u32;
        stats.terrain_hits = report.terrain_hits.len() as u32;
        stats.entity_contacts = report.entity_contacts.len() as u32;
        stats.detonations = report.explosions.len() as u32;
        stats.entity_count = world.entities.len() as u32;
        stats.inertial_count = inertial as u32;
        if let Some(start) = step_start {
            stats.step_ms = start.elapsed_ms();
        }
    }

    report
}
