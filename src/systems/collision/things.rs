//! Entity vs entity swept test
//!
//! Both bodies move at constant velocity for the rest of the tick. Per axis we
//! solve for the instant the approaching faces meet, then keep that instant only
//! if the bodies already overlap on the other axis at that moment (otherwise they
//! slide past each other diagonally). The earlier axis wins; a tie counts as no
//! collision.
//!
//! Results are reported by the integrator but never resolved.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::entity::{Axis, EntityId, EntityMap, Inertial, Physical};

use super::types::{clean_time, ThingCollision};

/// Time at which `a` and `b` first touch along `axis`, or `INFINITY`.
fn axis_contact_time(a: &Physical, va: &Inertial, b: &Physical, vb: &Inertial, axis: Axis) -> f32 {
    let rv = va.velocity.get(axis) - vb.velocity.get(axis);
    let t = if rv > 0.0 {
        (b.lo(axis) - a.hi(axis)) / rv
    } else if rv < 0.0 {
        (b.hi(axis) - a.lo(axis)) / rv
    } else {
        return f32::INFINITY;
    };

    if !(0.0..=1.0).contains(&t) {
        return f32::INFINITY;
    }
    let t = clean_time(t);

    let other = axis.other();
    let a_lo = a.lo(other) + va.velocity.get(other) * t;
    let a_hi = a.hi(other) + va.velocity.get(other) * t;
    let b_lo = b.lo(other) + vb.velocity.get(other) * t;
    let b_hi = b.hi(other) + vb.velocity.get(other) * t;

    if a_lo < b_hi && b_lo < a_hi {
        t
    } else {
        f32::INFINITY
    }
}

/// Earliest `t ∈ [0, 1]` at which two moving AABBs touch, with the axis they meet on.
pub fn calculate_thing_collision(
    a: (&Physical, &Inertial),
    b: (&Physical, &Inertial),
) -> Option<(f32, Axis)> {
    let tx = axis_contact_time(a.0, a.1, b.0, b.1, Axis::X);
    let ty = axis_contact_time(a.0, a.1, b.0, b.1, Axis::Y);

    if tx < ty {
        Some((tx, Axis::X))
    } else if ty < tx {
        Some((ty, Axis::Y))
    } else {
        None
    }
}

fn pair_collision(
    (ia, a): (EntityId, (&Physical, &Inertial)),
    (ib, b): (EntityId, (&Physical, &Inertial)),
    budget: f32,
) -> Option<ThingCollision> {
    let (t, axis) = calculate_thing_collision(a, b)?;
    if t > budget {
        return None;
    }
    Some(ThingCollision { t, a: ia, b: ib, axis })
}

/// Globally earliest entity-entity contact within `budget`, over all unordered pairs.
pub fn next_thing_collision(entities: &EntityMap, budget: f32) -> Option<ThingCollision> {
    let movers: Vec<(EntityId, (&Physical, &Inertial))> = entities
        .iter()
        .filter_map(|(id, e)| e.motion().map(|m| (*id, m)))
        .collect();

    #[cfg(feature = "parallel")]
    {
        (0..movers.len())
            .into_par_iter()
            .filter_map(|i| {
                movers[i + 1..]
                    .iter()
                    .filter_map(|other| pair_collision(movers[i], *other, budget))
                    .min_by(ThingCollision::order)
            })
            .min_by(ThingCollision::order)
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..movers.len())
            .filter_map(|i| {
                movers[i + 1..]
                    .iter()
                    .filter_map(|other| pair_collision(movers[i], *other, budget))
                    .min_by(ThingCollision::order)
            })
            .min_by(ThingCollision::order)
    }
}
