//! Entity vs terrain swept test
//!
//! Per axis, the leading edge walks outward one grid line at a time. For each
//! line we know exactly when the edge reaches it; at that instant the cells just
//! beyond the line, across the entity's other-axis extent, are checked for
//! solidity. The first solid line wins. Walking stops once the arrival time
//! exceeds the remaining budget.
//!
//! Rounding (both axes, both directions):
//! - first line walked: `ceil(edge - ε)` moving positive, `floor(edge + ε)` moving
//!   negative, so an edge on a line, or within ε past it, reports `t = 0`. Snapped
//!   edges are recomputed as `centre ± half` and can land an ulp past the line.
//! - cells spanned on the other axis: `floor(lo + ε) ..= ceil(hi - ε) - 1`
//!
//! Bodies with a non-finite position never report a contact.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::entity::{Axis, EntityId, EntityMap, Inertial, Physical, Vec2};
use crate::spatial::Terrain;

use super::types::{clean_time, earliest, TerrainCollision, SPAN_EPSILON};

/// One axis' first solid contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisHit {
    pub t: f32,
    pub boundary: f32,
    pub cell: (i32, i32),
}

/// Cells overlapped by the open interval `(lo, hi)`, as an inclusive range.
#[inline]
pub fn spanned_cells(lo: f32, hi: f32) -> (i32, i32) {
    let first = (lo + SPAN_EPSILON).floor() as i32;
    let last = (hi - SPAN_EPSILON).ceil() as i32 - 1;
    // Slivers thinner than 2ε still probe the cell they sit in.
    (first, last.max(first))
}

/// Walk one axis for one body.
pub fn sweep_axis(
    terrain: &Terrain,
    body: &Physical,
    velocity: Vec2,
    axis: Axis,
    budget: f32,
) -> Option<AxisHit> {
    let v = velocity.get(axis);
    if v == 0.0 || !v.is_finite() || !body.pos.is_finite() {
        return None;
    }

    let other = axis.other();
    let vo = if velocity.get(other).is_finite() { velocity.get(other) } else { 0.0 };

    let (edge, mut boundary, step) = if v > 0.0 {
        let edge = body.hi(axis);
        (edge, (edge - SPAN_EPSILON).ceil(), 1.0)
    } else {
        let edge = body.lo(axis);
        (edge, (edge + SPAN_EPSILON).floor(), -1.0)
    };

    loop {
        let t = clean_time((boundary - edge) / v);
        if !(t <= budget) {
            return None;
        }

        // Row/column just beyond the line in the direction of travel.
        let lane = if v > 0.0 { boundary as i32 } else { boundary as i32 - 1 };
        let (first, last) = spanned_cells(body.lo(other) + vo * t, body.hi(other) + vo * t);

        for c in first..=last {
            let (x, y) = match axis {
                Axis::X => (lane, c),
                Axis::Y => (c, lane),
            };
            if terrain.at(x, y).is_solid() {
                return Some(AxisHit { t, boundary, cell: (x, y) });
            }
        }

        boundary += step;
    }
}

/// Earliest terrain contact of a single inertial body (Y wins exact ties).
pub fn sweep_entity(
    terrain: &Terrain,
    id: EntityId,
    body: &Physical,
    motion: &Inertial,
    budget: f32,
) -> Option<TerrainCollision> {
    let velocity = motion.velocity;
    let hit = |axis: Axis| {
        sweep_axis(terrain, body, velocity, axis, budget).map(|h| TerrainCollision {
            t: h.t,
            entity: id,
            axis,
            direction: if velocity.get(axis) > 0.0 { 1 } else { -1 },
            boundary: h.boundary,
            cell: h.cell,
        })
    };
    earliest(hit(Axis::Y), hit(Axis::X), TerrainCollision::order)
}

/// Globally earliest terrain contact among all inertial entities within `budget`.
pub fn next_terrain_collision(
    terrain: &Terrain,
    entities: &EntityMap,
    budget: f32,
) -> Option<TerrainCollision> {
    #[cfg(feature = "parallel")]
    {
        entities
            .par_iter()
            .filter_map(|(id, e)| {
                let (body, motion) = e.motion()?;
                sweep_entity(terrain, *id, body, motion, budget)
            })
            .min_by(TerrainCollision::order)
    }
    #[cfg(not(feature = "parallel"))]
    {
        entities
            .iter()
            .filter_map(|(id, e)| {
                let (body, motion) = e.motion()?;
                sweep_entity(terrain, *id, body, motion, budget)
            })
            .min_by(TerrainCollision::order)
    }
}
